//! Aggregate scene state driven by the browser's scroll/resize/pointer
//! events and read once per frame by the renderer.

use crate::camera::Camera;
use crate::constants::{
    clamped_pixel_ratio, THUMBNAIL_COUNT, THUMBNAIL_HEIGHT, THUMBNAIL_IDLE_OPACITY,
    THUMBNAIL_WIDTH,
};
use crate::picking::{pick_thumbnail, HoverState};
use crate::ring::{ring_transforms, ThumbnailTransform};
use crate::scroll::{scroll_phase, ModelPose};

pub struct SceneState {
    camera: Camera,
    width: f32,
    height: f32,
    pixel_ratio: f32,
    scroll_y: f32,
    thumbnails: Vec<ThumbnailTransform>,
    opacities: Vec<f32>,
    hover: HoverState,
    model: ModelPose,
}

impl SceneState {
    /// Build the scene for a drawable of `width`×`height` physical pixels
    /// and the given (unclamped) device pixel ratio, using the live
    /// scroll offset so a pre-scrolled page starts in the right pose.
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32, scroll_y: f32) -> Self {
        let pixel_ratio = clamped_pixel_ratio(device_pixel_ratio);
        let phase = scroll_phase(scroll_y);
        Self {
            camera: Camera::new(width, height),
            width,
            height,
            pixel_ratio,
            scroll_y,
            thumbnails: ring_transforms(phase, pixel_ratio),
            opacities: vec![THUMBNAIL_IDLE_OPACITY; THUMBNAIL_COUNT],
            hover: HoverState::default(),
            model: ModelPose::from_scroll(scroll_y),
        }
    }

    /// Recompute model pose and ring placement for a new scroll offset.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
        let phase = scroll_phase(scroll_y);
        self.thumbnails = ring_transforms(phase, self.pixel_ratio);
        self.model = ModelPose::from_scroll(scroll_y);
    }

    /// Track a drawable resize.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.camera.set_viewport(width, height);
    }

    /// Hover pick from a pointer position in drawable pixel space.
    /// Clears the previous highlight, then highlights the nearest hit.
    pub fn pointer_moved(&mut self, sx: f32, sy: f32) {
        let (ro, rd) = self
            .camera
            .screen_to_world_ray(sx, sy, self.width, self.height);
        let hit = pick_thumbnail(
            ro,
            rd,
            &self.thumbnails,
            THUMBNAIL_WIDTH * 0.5,
            THUMBNAIL_HEIGHT * 0.5,
        );
        self.hover.update(hit, &mut self.opacities);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn thumbnails(&self) -> &[ThumbnailTransform] {
        &self.thumbnails
    }

    pub fn thumbnail_opacity(&self, index: usize) -> f32 {
        self.opacities.get(index).copied().unwrap_or(THUMBNAIL_IDLE_OPACITY)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover.selected()
    }

    pub fn model_pose(&self) -> &ModelPose {
        &self.model
    }
}
