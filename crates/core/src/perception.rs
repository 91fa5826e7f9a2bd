//! Enemy perception: view cones, maze occlusion, and the chase routine.

pub mod cone;
pub mod enemy;
pub mod occlusion;
pub mod roster;

pub use cone::{ViewCone, facing_vector, yaw_towards};
pub use enemy::{Enemy, EnemyAction, PerceptionState};
pub use occlusion::{MazeOccluder, Occluder, OpenField};
pub use roster::EnemyRoster;
