//! Camera description shared between placement math, picking and the
//! renderer.
//!
//! Intentionally platform-free: the web frontend feeds it canvas pixel
//! sizes and reads matrices back, so the same code paths are exercised by
//! native tests.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera with perspective projection, fixed on the
/// +Z axis looking at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The scene camera at its home position for a drawable of the given
    /// pixel size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width / height.max(1.0),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Track a drawable resize. Aspect follows width/height.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Compute a world-space ray through a point in drawable pixel space.
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the camera eye.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize();
        (self.eye, rd)
    }
}
