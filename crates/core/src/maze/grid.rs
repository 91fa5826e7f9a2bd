//! Cell and grid primitives shared by carving, placement, and occlusion queries.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, Wall};

const ALL_WALLS: u8 = 0b1111;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Pos,
    pub visited: bool,
    walls: u8,
}

impl Cell {
    fn new(pos: Pos) -> Self {
        Self { pos, visited: false, walls: ALL_WALLS }
    }

    pub fn has_wall(&self, wall: Wall) -> bool {
        self.walls & wall.bit() != 0
    }

    /// Idempotent; clearing an already open side changes nothing.
    pub fn clear_wall(&mut self, wall: Wall) {
        self.walls &= !wall.bit();
    }

    pub fn wall_bits(&self) -> u8 {
        self.walls
    }
}

/// Fixed-size `width × depth` grid stored row-major by `z`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    depth: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, depth: usize) -> Self {
        let mut cells = Vec::with_capacity(width * depth);
        for z in 0..depth {
            for x in 0..width {
                cells.push(Cell::new(Pos::new(x as i32, z as i32)));
            }
        }
        Self { width, depth, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.z >= 0 && (pos.x as usize) < self.width && (pos.z as usize) < self.depth
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.z as usize) * self.width + (pos.x as usize))
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|index| &self.cells[index])
    }

    pub fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.index(pos).map(move |index| &mut self.cells[index])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Out-of-bounds cells report every wall as present.
    pub fn has_wall(&self, pos: Pos, wall: Wall) -> bool {
        self.cell(pos).is_none_or(|cell| cell.has_wall(wall))
    }

    pub fn is_visited(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.visited)
    }

    pub(crate) fn mark_visited(&mut self, pos: Pos) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.visited = true;
        }
    }

    /// In-bounds neighbors that have not been visited yet, in `Wall::ALL` order.
    pub fn unvisited_neighbors(&self, pos: Pos) -> Vec<(Wall, Pos)> {
        Wall::ALL
            .into_iter()
            .map(|wall| (wall, pos.step(wall)))
            .filter(|&(_, next)| self.in_bounds(next) && !self.is_visited(next))
            .collect()
    }

    /// Clears the wall pair between two adjacent cells. Returns the side cleared on `from`,
    /// or `None` when the cells are not adjacent or not both in bounds.
    pub fn open_between(&mut self, from: Pos, to: Pos) -> Option<Wall> {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return None;
        }
        let wall = Wall::between(from, to)?;
        if let Some(cell) = self.cell_mut(from) {
            cell.clear_wall(wall);
        }
        if let Some(cell) = self.cell_mut(to) {
            cell.clear_wall(wall.opposite());
        }
        Some(wall)
    }

    pub fn is_inner(&self, pos: Pos) -> bool {
        pos.x > 0
            && pos.z > 0
            && (pos.x as usize) + 1 < self.width
            && (pos.z as usize) + 1 < self.depth
    }

    /// Cells strictly inside the border, in row-major order.
    pub fn inner_cells(&self) -> Vec<Pos> {
        self.cells.iter().map(|cell| cell.pos).filter(|&pos| self.is_inner(pos)).collect()
    }

    /// Number of open wall pairs between in-bounds neighbors. Each pair is counted once
    /// from its `Right`/`Front` side.
    pub fn open_passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Wall::Right, Wall::Front]
                    .into_iter()
                    .filter(|&wall| {
                        self.in_bounds(cell.pos.step(wall)) && !cell.has_wall(wall)
                    })
                    .count()
            })
            .sum()
    }
}
