use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
}

/// Grid coordinate of a maze cell. `x` grows to the right, `z` grows to the front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub z: i32,
}

impl Pos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn step(self, wall: Wall) -> Self {
        let (dx, dz) = wall.delta();
        Self { x: self.x + dx, z: self.z + dz }
    }
}

/// One side of a cell. Carving through a wall always clears its `opposite` on the neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Front,
    Back,
}

impl Wall {
    /// Neighbor order used when collecting unvisited cells.
    pub const ALL: [Wall; 4] = [Wall::Right, Wall::Left, Wall::Front, Wall::Back];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Wall::Left => (-1, 0),
            Wall::Right => (1, 0),
            Wall::Front => (0, 1),
            Wall::Back => (0, -1),
        }
    }

    pub fn opposite(self) -> Wall {
        match self {
            Wall::Left => Wall::Right,
            Wall::Right => Wall::Left,
            Wall::Front => Wall::Back,
            Wall::Back => Wall::Front,
        }
    }

    /// Direction from `from` to an orthogonally adjacent `to`, if they are adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Wall> {
        Wall::ALL.into_iter().find(|&wall| from.step(wall) == to)
    }

    pub(crate) fn bit(self) -> u8 {
        match self {
            Wall::Left => 0b0001,
            Wall::Right => 0b0010,
            Wall::Front => 0b0100,
            Wall::Back => 0b1000,
        }
    }
}

/// Point on the ground plane in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub z: f32,
}

impl WorldPos {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn distance(self, other: WorldPos) -> f32 {
        (other.x - self.x).hypot(other.z - self.z)
    }

    /// World position of a cell's center for a given cell scale.
    pub fn from_cell(pos: Pos, cell_scale: f32) -> Self {
        Self { x: pos.x as f32 * cell_scale, z: pos.z as f32 * cell_scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_walls_step_back_to_origin() {
        let origin = Pos::new(3, 4);
        for wall in Wall::ALL {
            assert_eq!(origin.step(wall).step(wall.opposite()), origin);
        }
    }

    #[test]
    fn between_only_matches_orthogonal_neighbors() {
        let origin = Pos::new(1, 1);
        assert_eq!(Wall::between(origin, Pos::new(2, 1)), Some(Wall::Right));
        assert_eq!(Wall::between(origin, Pos::new(1, 0)), Some(Wall::Back));
        assert_eq!(Wall::between(origin, Pos::new(2, 2)), None);
        assert_eq!(Wall::between(origin, origin), None);
    }

    #[test]
    fn cell_world_position_uses_scale() {
        let world = WorldPos::from_cell(Pos::new(2, 3), 16.0);
        assert_eq!(world, WorldPos::new(32.0, 48.0));
    }
}
