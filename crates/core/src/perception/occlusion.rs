//! Line-of-sight occlusion against the walls of a carved maze.

use crate::maze::Grid;
use crate::types::{Pos, Wall, WorldPos};

pub trait Occluder {
    /// True when something blocks the straight segment from `from` to `to`.
    fn blocks(&self, from: WorldPos, to: WorldPos) -> bool;
}

/// Nothing ever blocks sight.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenField;

impl Occluder for OpenField {
    fn blocks(&self, _from: WorldPos, _to: WorldPos) -> bool {
        false
    }
}

/// Occlusion by the remaining walls of a maze whose cell centers sit at
/// `(x * cell_scale, z * cell_scale)`.
///
/// Each cell spans half a cell either side of its center. Segments with an endpoint outside
/// the maze are always blocked because border walls are never carved.
#[derive(Clone, Copy, Debug)]
pub struct MazeOccluder<'a> {
    grid: &'a Grid,
    cell_scale: f32,
}

impl<'a> MazeOccluder<'a> {
    pub fn new(grid: &'a Grid, cell_scale: f32) -> Self {
        Self { grid, cell_scale }
    }

    fn to_cell_space(&self, pos: WorldPos) -> (f32, f32) {
        (pos.x / self.cell_scale + 0.5, pos.z / self.cell_scale + 0.5)
    }

    fn cell_containing(&self, u: f32, v: f32) -> Option<Pos> {
        let pos = Pos::new(u.floor() as i32, v.floor() as i32);
        self.grid.in_bounds(pos).then_some(pos)
    }
}

impl Occluder for MazeOccluder<'_> {
    fn blocks(&self, from: WorldPos, to: WorldPos) -> bool {
        if self.cell_scale <= 0.0 || !self.cell_scale.is_finite() {
            return true;
        }
        if ![from.x, from.z, to.x, to.z].iter().all(|coord| coord.is_finite()) {
            return true;
        }
        // Always walk from the lower endpoint so both directions cross the same boundaries.
        let (from, to) = if (from.x, from.z) <= (to.x, to.z) { (from, to) } else { (to, from) };
        let (u0, v0) = self.to_cell_space(from);
        let (u1, v1) = self.to_cell_space(to);
        let (Some(mut cell), Some(target)) =
            (self.cell_containing(u0, v0), self.cell_containing(u1, v1))
        else {
            return true;
        };

        // Amanatides-Woo traversal: step into whichever neighboring column or row the
        // segment reaches first, checking the wall crossed on the way.
        let du = u1 - u0;
        let dv = v1 - v0;
        let (step_x, mut t_max_x, t_delta_x) = axis_setup(u0, cell.x, du);
        let (step_z, mut t_max_z, t_delta_z) = axis_setup(v0, cell.z, dv);
        let wall_x = if step_x > 0 { Wall::Right } else { Wall::Left };
        let wall_z = if step_z > 0 { Wall::Front } else { Wall::Back };

        while cell != target {
            if cell.x == target.x {
                t_max_z += t_delta_z;
                if self.grid.has_wall(cell, wall_z) {
                    return true;
                }
                cell = cell.step(wall_z);
            } else if cell.z == target.z || t_max_x < t_max_z {
                t_max_x += t_delta_x;
                if self.grid.has_wall(cell, wall_x) {
                    return true;
                }
                cell = cell.step(wall_x);
            } else if t_max_z < t_max_x {
                t_max_z += t_delta_z;
                if self.grid.has_wall(cell, wall_z) {
                    return true;
                }
                cell = cell.step(wall_z);
            } else {
                // Exactly through a corner: all four walls meeting there must be gone.
                t_max_x += t_delta_x;
                t_max_z += t_delta_z;
                let across_x = cell.step(wall_x);
                let across_z = cell.step(wall_z);
                if self.grid.has_wall(cell, wall_x)
                    || self.grid.has_wall(cell, wall_z)
                    || self.grid.has_wall(across_x, wall_z)
                    || self.grid.has_wall(across_z, wall_x)
                {
                    return true;
                }
                cell = across_x.step(wall_z);
            }
        }

        false
    }
}

fn axis_setup(start: f32, cell: i32, delta: f32) -> (i32, f32, f32) {
    if delta > 0.0 {
        (1, ((cell + 1) as f32 - start) / delta, 1.0 / delta)
    } else if delta < 0.0 {
        (-1, (start - cell as f32) / -delta, 1.0 / -delta)
    } else {
        (0, f32::INFINITY, f32::INFINITY)
    }
}
