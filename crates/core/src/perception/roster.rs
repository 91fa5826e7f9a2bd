//! Keyed storage for the enemies spawned into a maze.

use slotmap::SlotMap;

use crate::config::PerceptionConfig;
use crate::maze::GeneratedMaze;
use crate::types::{EnemyId, WorldPos};

use super::enemy::{Enemy, EnemyAction};
use super::occlusion::Occluder;

#[derive(Clone, Debug, Default)]
pub struct EnemyRoster {
    enemies: SlotMap<EnemyId, Enemy>,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// One enemy per spawn cell, standing on the cell center and facing `+z`.
    pub fn from_maze(maze: &GeneratedMaze, config: PerceptionConfig) -> Self {
        let mut roster = Self::new();
        for position in maze.enemy_spawns_world() {
            roster.insert(Enemy::new(position, 0.0, config));
        }
        roster
    }

    pub fn insert(&mut self, enemy: Enemy) -> EnemyId {
        self.enemies.insert(enemy)
    }

    pub fn remove(&mut self, id: EnemyId) -> Option<Enemy> {
        self.enemies.remove(id)
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> {
        self.enemies.iter()
    }

    /// Advances every enemy by `elapsed` seconds and returns each one's action.
    pub fn advance_all(
        &mut self,
        elapsed: f32,
        target: WorldPos,
        occluder: &impl Occluder,
    ) -> Vec<(EnemyId, EnemyAction)> {
        self.enemies
            .iter_mut()
            .map(|(id, enemy)| (id, enemy.advance(elapsed, target, occluder)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::maze::generate_maze;
    use crate::perception::OpenField;

    #[test]
    fn roster_spawns_one_enemy_per_spawn_cell() {
        let config = GenerationConfig { width: 8, depth: 8, enemy_count: 3, ..Default::default() };
        let maze = generate_maze(config, 17);
        let roster = EnemyRoster::from_maze(&maze, PerceptionConfig::default());

        assert_eq!(roster.len(), 3);
        let mut positions: Vec<(i32, i32)> = roster
            .iter()
            .map(|(_, enemy)| (enemy.position().x as i32, enemy.position().z as i32))
            .collect();
        let mut expected: Vec<(i32, i32)> = maze
            .enemy_spawns_world()
            .into_iter()
            .map(|pos| (pos.x as i32, pos.z as i32))
            .collect();
        positions.sort();
        expected.sort();
        assert_eq!(positions, expected);
    }

    #[test]
    fn removed_enemies_stop_acting() {
        let mut roster = EnemyRoster::new();
        let near = roster.insert(Enemy::new(WorldPos::new(0.0, 0.0), 0.0, Default::default()));
        let far = roster.insert(Enemy::new(WorldPos::new(0.0, 100.0), 180.0, Default::default()));

        assert!(roster.remove(far).is_some());
        assert!(roster.get(far).is_none());

        let actions = roster.advance_all(0.25, WorldPos::new(0.0, 1.0), &OpenField);
        assert_eq!(actions, vec![(near, EnemyAction::TargetCaught)]);
    }
}
