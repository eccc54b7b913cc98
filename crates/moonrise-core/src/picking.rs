//! Ray picking against the thumbnail planes and the single-selection
//! hover state driven by it.

use crate::constants::{THUMBNAIL_HOVER_OPACITY, THUMBNAIL_IDLE_OPACITY};
use crate::ring::ThumbnailTransform;
use glam::{Mat4, Vec3};

/// Intersect a ray with a rectangle lying in an object's local XY plane.
///
/// `to_world` must be rigid (rotation + translation); the returned `t` is
/// then a world-space distance along the ray.
#[inline]
pub fn ray_rect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    to_world: &Mat4,
    half_width: f32,
    half_height: f32,
) -> Option<f32> {
    let inv = to_world.inverse();
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    if d.z.abs() < 1e-6 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let hit = o + d * t;
    (hit.x.abs() <= half_width && hit.y.abs() <= half_height).then_some(t)
}

/// Nearest thumbnail hit by the ray, if any.
pub fn pick_thumbnail(
    ray_origin: Vec3,
    ray_dir: Vec3,
    transforms: &[ThumbnailTransform],
    half_width: f32,
    half_height: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, tf) in transforms.iter().enumerate() {
        if let Some(t) = ray_rect(ray_origin, ray_dir, &tf.matrix(), half_width, half_height) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// At most one thumbnail is highlighted; every pointer move clears the
/// previous selection before applying the new one.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverState {
    selected: Option<usize>,
}

impl HoverState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Record the new hit (or miss) and write the resulting opacities:
    /// the previous selection drops back to the idle value, a hit goes to
    /// full.
    pub fn update(&mut self, hit: Option<usize>, opacities: &mut [f32]) {
        if let Some(prev) = self.selected.take() {
            if let Some(o) = opacities.get_mut(prev) {
                *o = THUMBNAIL_IDLE_OPACITY;
            }
        }
        if let Some(i) = hit {
            if let Some(o) = opacities.get_mut(i) {
                *o = THUMBNAIL_HOVER_OPACITY;
                self.selected = Some(i);
            }
        }
    }
}
