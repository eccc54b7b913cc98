//! Closed-form mappings from the page scroll offset to scene placement.

use crate::constants::{
    MODEL_SCALE, MODEL_SPIN_DIVISOR, MODEL_Y_BASE, MODEL_Y_DIVISOR, MODEL_Z_BASE, MODEL_Z_DIVISOR,
    MODEL_Z_MAX, SCROLL_DIVISOR, SCROLL_PHASE_OFFSET,
};
use glam::{Mat4, Quat, Vec3};

/// Remap a vertical scroll offset (CSS px) into the phase value that
/// drives the ring and the model pose.
#[inline]
pub fn scroll_phase(scroll_y: f32) -> f32 {
    scroll_y / SCROLL_DIVISOR - SCROLL_PHASE_OFFSET
}

/// Model placement derived from the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPose {
    pub spin_y: f32,
    pub position: Vec3,
}

impl ModelPose {
    pub fn from_scroll(scroll_y: f32) -> Self {
        let phase = scroll_phase(scroll_y);
        // Depth advances with scroll but is clamped one-sided; it never
        // comes back once the far limit is reached on this mapping.
        let z = (phase / MODEL_Z_DIVISOR + MODEL_Z_BASE).min(MODEL_Z_MAX);
        Self {
            spin_y: scroll_y / MODEL_SPIN_DIVISOR,
            position: Vec3::new(0.0, -phase / MODEL_Y_DIVISOR + MODEL_Y_BASE, z),
        }
    }

    /// World transform including the fixed uniform model scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(MODEL_SCALE),
            Quat::from_rotation_y(self.spin_y),
            self.position,
        )
    }
}
