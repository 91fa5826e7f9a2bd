//! Top-down text rendering of a generated maze.
//!
//! The output is a `(2 * width + 1) × (2 * depth + 1)` character grid:
//! - `#` for a wall and ` ` for an open cell or passage
//! - `S` for the start, `T` for the treasure, `E` for an enemy spawn
//!
//! The first line is the front edge (highest `z`) so the picture reads like a map.

use crate::types::{Pos, Wall};

use super::model::GeneratedMaze;

const WALL: char = '#';
const OPEN: char = ' ';

pub fn render_ascii(maze: &GeneratedMaze) -> String {
    let grid = &maze.grid;
    if grid.is_empty() {
        return String::new();
    }

    let columns = grid.width() * 2 + 1;
    let rows = grid.depth() * 2 + 1;
    let mut canvas = vec![vec![WALL; columns]; rows];
    let to_canvas = |pos: Pos| -> (usize, usize) {
        let row = (grid.depth() - 1 - pos.z as usize) * 2 + 1;
        (row, pos.x as usize * 2 + 1)
    };

    for cell in grid.cells() {
        let (row, column) = to_canvas(cell.pos);
        canvas[row][column] = OPEN;
        if !cell.has_wall(Wall::Right) && grid.in_bounds(cell.pos.step(Wall::Right)) {
            canvas[row][column + 1] = OPEN;
        }
        if !cell.has_wall(Wall::Front) && grid.in_bounds(cell.pos.step(Wall::Front)) {
            canvas[row - 1][column] = OPEN;
        }
    }

    let mut mark = |pos: Pos, glyph: char| {
        if grid.in_bounds(pos) {
            let (row, column) = to_canvas(pos);
            canvas[row][column] = glyph;
        }
    };
    mark(maze.start, 'S');
    for &spawn in &maze.enemy_spawns {
        mark(spawn, 'E');
    }
    if let Some(treasure) = maze.treasure {
        mark(treasure, 'T');
    }

    let mut out = String::with_capacity(rows * (columns + 1));
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}
