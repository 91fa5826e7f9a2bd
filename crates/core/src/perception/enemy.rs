//! Enemy sight, chase, and catch routine.
//!
//! Perception runs on a fixed check interval rather than every frame. Each check
//! re-evaluates both cones, moves toward a visible target, and reports a catch when the
//! target is inside the damage cone.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::PerceptionConfig;
use crate::types::WorldPos;

use super::cone::{ViewCone, yaw_towards};
use super::occlusion::Occluder;

/// Upper bound on the checks a single [`Enemy::advance`] call runs; older backlog is dropped.
pub const MAX_CHECKS_PER_ADVANCE: u32 = 1_024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptionState {
    pub can_see_target: bool,
    pub in_damage_area: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyAction {
    Idle,
    Chasing,
    TargetCaught,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    position: WorldPos,
    yaw_degrees: f32,
    config: PerceptionConfig,
    state: PerceptionState,
    since_check: f32,
}

impl Enemy {
    pub fn new(position: WorldPos, yaw_degrees: f32, config: PerceptionConfig) -> Self {
        Self {
            position,
            yaw_degrees,
            config,
            state: PerceptionState::default(),
            since_check: 0.0,
        }
    }

    pub fn position(&self) -> WorldPos {
        self.position
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    pub fn state(&self) -> PerceptionState {
        self.state
    }

    pub fn primary_cone(&self) -> ViewCone {
        ViewCone::new(self.config.primary_radius, self.config.primary_angle)
    }

    pub fn damage_cone(&self) -> ViewCone {
        ViewCone::new(self.config.damage_radius, self.config.damage_angle)
    }

    /// Evaluates both cones against `target` without changing any state.
    pub fn perceive(&self, target: WorldPos, occluder: &impl Occluder) -> PerceptionState {
        let visible_in = |cone: ViewCone| {
            cone.contains(self.position, self.yaw_degrees, target)
                && !occluder.blocks(self.position, target)
        };
        PerceptionState {
            can_see_target: visible_in(self.primary_cone()),
            in_damage_area: visible_in(self.damage_cone()),
        }
    }

    /// Runs one perception check and acts on it.
    pub fn check(&mut self, target: WorldPos, occluder: &impl Occluder) -> EnemyAction {
        let next = self.perceive(target, occluder);
        if next.can_see_target != self.state.can_see_target {
            debug!(
                "enemy at ({:.1}, {:.1}) {} target",
                self.position.x,
                self.position.z,
                if next.can_see_target { "spotted" } else { "lost" }
            );
        }
        self.state = next;

        if next.can_see_target {
            self.move_towards(target);
        }
        if next.in_damage_area {
            debug!("enemy at ({:.1}, {:.1}) caught target", self.position.x, self.position.z);
            return EnemyAction::TargetCaught;
        }
        self.current_action()
    }

    /// Accumulates `elapsed` seconds and runs one check per full interval, at most
    /// [`MAX_CHECKS_PER_ADVANCE`] of them. Stops early once the target is caught; returns the
    /// action of the last check, or the standing action when no check was due.
    ///
    /// Negative or non-finite `elapsed` is ignored.
    pub fn advance(
        &mut self,
        elapsed: f32,
        target: WorldPos,
        occluder: &impl Occluder,
    ) -> EnemyAction {
        let interval = self.config.check_interval;
        if !interval.is_finite() || interval <= 0.0 {
            return self.check(target, occluder);
        }

        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        let pending = self.since_check + elapsed;
        let due = (pending / interval).floor();
        let checks = if due >= MAX_CHECKS_PER_ADVANCE as f32 {
            warn!("running {MAX_CHECKS_PER_ADVANCE} of {due} overdue perception checks");
            MAX_CHECKS_PER_ADVANCE
        } else {
            due as u32
        };
        self.since_check = pending % interval;

        let mut action = self.current_action();
        for _ in 0..checks {
            action = self.check(target, occluder);
            if action == EnemyAction::TargetCaught {
                self.since_check = 0.0;
                break;
            }
        }
        action
    }

    fn current_action(&self) -> EnemyAction {
        if self.state.in_damage_area {
            EnemyAction::TargetCaught
        } else if self.state.can_see_target {
            EnemyAction::Chasing
        } else {
            EnemyAction::Idle
        }
    }

    fn move_towards(&mut self, target: WorldPos) {
        let step = self.config.move_speed * self.config.check_interval.max(0.0);
        let distance = self.position.distance(target);
        self.yaw_degrees = yaw_towards(self.position, target);
        if distance <= step {
            self.position = target;
            return;
        }
        let ratio = step / distance;
        self.position = WorldPos::new(
            self.position.x + (target.x - self.position.x) * ratio,
            self.position.z + (target.z - self.position.z) * ratio,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::OpenField;

    fn config() -> PerceptionConfig {
        PerceptionConfig {
            primary_radius: 20.0,
            primary_angle: 90.0,
            damage_radius: 2.0,
            damage_angle: 120.0,
            move_speed: 5.0,
            check_interval: 0.2,
        }
    }

    /// Blocks every segment.
    struct SolidWall;

    impl Occluder for SolidWall {
        fn blocks(&self, _from: WorldPos, _to: WorldPos) -> bool {
            true
        }
    }

    #[test]
    fn visible_target_is_chased() {
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, config());
        let target = WorldPos::new(0.0, 10.0);

        assert_eq!(enemy.check(target, &OpenField), EnemyAction::Chasing);
        assert_eq!(enemy.position().x, 0.0);
        assert!((enemy.position().z - 1.0).abs() < 1e-4);
        assert!(enemy.state().can_see_target);
        assert!(!enemy.state().in_damage_area);
    }

    #[test]
    fn occluded_target_is_ignored() {
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, config());
        assert_eq!(enemy.check(WorldPos::new(0.0, 1.0), &SolidWall), EnemyAction::Idle);
        assert_eq!(enemy.position(), WorldPos::new(0.0, 0.0));
    }

    #[test]
    fn target_behind_enemy_is_not_seen() {
        let enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, config());
        let state = enemy.perceive(WorldPos::new(0.0, -5.0), &OpenField);
        assert_eq!(state, PerceptionState::default());
    }

    #[test]
    fn close_target_in_damage_cone_is_caught() {
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, config());
        assert_eq!(enemy.check(WorldPos::new(0.5, 1.5), &OpenField), EnemyAction::TargetCaught);
    }

    #[test]
    fn chase_turns_towards_target_and_never_overshoots() {
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 45.0, config());
        let target = WorldPos::new(0.6, 0.6);
        enemy.check(target, &OpenField);
        assert_eq!(enemy.position(), target);
        assert!((enemy.yaw_degrees() - 45.0).abs() < 1e-4);
    }

    #[test]
    fn advance_runs_one_check_per_interval() {
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, config());
        let target = WorldPos::new(0.0, 15.0);

        assert_eq!(enemy.advance(0.1, target, &OpenField), EnemyAction::Idle);
        assert_eq!(enemy.position(), WorldPos::new(0.0, 0.0));

        assert_eq!(enemy.advance(0.55, target, &OpenField), EnemyAction::Chasing);
        assert!((enemy.position().z - 3.0).abs() < 1e-4, "three checks should have run");
    }

    #[test]
    fn advance_stops_once_target_is_caught() {
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, config());
        let target = WorldPos::new(0.0, 4.5);

        let action = enemy.advance(10.0, target, &OpenField);
        assert_eq!(action, EnemyAction::TargetCaught);
        assert!((enemy.position().z - 4.0).abs() < 1e-4, "four checks should have run");
        assert_eq!(enemy.advance(0.0, target, &OpenField), EnemyAction::TargetCaught);
    }

    #[test]
    fn huge_elapsed_on_unseen_target_returns() {
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, PerceptionConfig::default());
        let target = WorldPos::new(0.0, 1_000.0);

        assert_eq!(enemy.advance(1.0e7, target, &OpenField), EnemyAction::Idle);
        assert_eq!(enemy.position(), WorldPos::new(0.0, 0.0));
        assert!(enemy.since_check < enemy.config.check_interval);

        assert_eq!(enemy.advance(f32::INFINITY, target, &OpenField), EnemyAction::Idle);
        assert_eq!(enemy.advance(f32::NAN, target, &OpenField), EnemyAction::Idle);
        assert!(enemy.since_check < enemy.config.check_interval);
    }

    #[test]
    fn backlog_of_checks_is_capped_per_call() {
        let config = PerceptionConfig { primary_radius: 1.0e7, ..config() };
        let mut enemy = Enemy::new(WorldPos::new(0.0, 0.0), 0.0, config);
        let target = WorldPos::new(0.0, 1.0e6);

        assert_eq!(enemy.advance(1.0e7, target, &OpenField), EnemyAction::Chasing);
        let moved = enemy.position().z;
        assert!(
            (moved - MAX_CHECKS_PER_ADVANCE as f32).abs() < 0.5,
            "one unit per capped check, moved {moved}"
        );
    }
}
