//! Placement of the thumbnail planes on a circle around the vertical axis.

use crate::constants::{RING_ANGLE_STEP, RING_RADIUS, RING_ROLL_GAIN, RING_Y_STEP, THUMBNAIL_COUNT};
use glam::{Mat4, Vec3};

/// One thumbnail's placement: translation plus a yaw that turns the plane
/// toward the ring axis and a roll about its local depth axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbnailTransform {
    pub position: Vec3,
    pub yaw: f32,
    pub roll: f32,
}

impl ThumbnailTransform {
    /// Placement of thumbnail `index` for the given scroll phase and
    /// (clamped) device pixel ratio.
    pub fn at(index: usize, phase: f32, pixel_ratio: f32) -> Self {
        let angle = index as f32 * RING_ANGLE_STEP - phase;
        let position = Vec3::new(
            RING_RADIUS * angle.sin() * pixel_ratio,
            RING_Y_STEP * (-(index as f32) * RING_ANGLE_STEP + phase) * pixel_ratio,
            RING_RADIUS * angle.cos(),
        );
        // Turn the plane's +Z toward the axis point at its own height.
        let to_axis = Vec3::new(-position.x, 0.0, -position.z);
        let yaw = to_axis.x.atan2(to_axis.z);
        let roll = RING_ROLL_GAIN * angle.sin().abs().powi(2);
        Self {
            position,
            yaw,
            roll,
        }
    }

    /// World transform; rigid (no scale), so picking distances carry over.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_rotation_z(self.roll)
    }
}

/// Placement of the full ring for the given phase.
pub fn ring_transforms(phase: f32, pixel_ratio: f32) -> Vec<ThumbnailTransform> {
    (0..THUMBNAIL_COUNT)
        .map(|i| ThumbnailTransform::at(i, phase, pixel_ratio))
        .collect()
}
