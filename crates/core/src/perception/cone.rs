//! View cones on the ground plane.
//!
//! Yaw is measured in degrees clockwise from `+z`, so a yaw of 90 faces `+x`.

use serde::{Deserialize, Serialize};

use crate::types::WorldPos;

const MIN_DISTANCE: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewCone {
    pub radius: f32,
    /// Full opening angle in degrees.
    pub angle_degrees: f32,
}

impl ViewCone {
    pub fn new(radius: f32, angle_degrees: f32) -> Self {
        Self { radius, angle_degrees }
    }

    /// True when `target` is within `radius` of `origin` and strictly inside half the opening
    /// angle either side of the facing direction. A target on top of the origin counts.
    pub fn contains(&self, origin: WorldPos, yaw_degrees: f32, target: WorldPos) -> bool {
        let distance = origin.distance(target);
        if distance > self.radius {
            return false;
        }
        if distance < MIN_DISTANCE {
            return true;
        }
        let (fx, fz) = facing_vector(yaw_degrees);
        let dx = (target.x - origin.x) / distance;
        let dz = (target.z - origin.z) / distance;
        let cos = (fx * dx + fz * dz).clamp(-1.0, 1.0);
        cos.acos().to_degrees() < self.angle_degrees / 2.0
    }
}

pub fn facing_vector(yaw_degrees: f32) -> (f32, f32) {
    let radians = yaw_degrees.to_radians();
    (radians.sin(), radians.cos())
}

/// Yaw that faces from `from` toward `to`; zero when the points coincide.
pub fn yaw_towards(from: WorldPos, to: WorldPos) -> f32 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    if dx.abs() < MIN_DISTANCE && dz.abs() < MIN_DISTANCE {
        return 0.0;
    }
    dx.atan2(dz).to_degrees()
}
