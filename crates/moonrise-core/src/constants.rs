use std::f32::consts::FRAC_PI_2;

// Shared scene tuning constants used by the web frontend.

// Scroll mapping
pub const SCROLL_DIVISOR: f32 = 250.0; // px of vertical scroll per phase unit
pub const SCROLL_PHASE_OFFSET: f32 = FRAC_PI_2; // phase starts at -pi/2 with the page at the top
pub const MODEL_SPIN_DIVISOR: f32 = 630.0; // px of scroll per radian of model spin

// Thumbnail ring layout
pub const THUMBNAIL_COUNT: usize = 10;
pub const RING_RADIUS: f32 = 9.0;
pub const RING_ANGLE_STEP: f32 = FRAC_PI_2; // angular spacing between consecutive thumbnails
pub const RING_Y_STEP: f32 = 5.0; // vertical drop per phase unit
pub const RING_ROLL_GAIN: f32 = 0.5; // extra tilt applied as sin^2 of the angular offset

// Thumbnail geometry (world units / grid resolution)
pub const THUMBNAIL_WIDTH: f32 = 3.0;
pub const THUMBNAIL_HEIGHT: f32 = 1.5;
pub const THUMBNAIL_SEGMENTS_X: u32 = 20;
pub const THUMBNAIL_SEGMENTS_Y: u32 = 32;

// Hover highlight
pub const THUMBNAIL_IDLE_OPACITY: f32 = 0.8;
pub const THUMBNAIL_HOVER_OPACITY: f32 = 1.0;

// Model pose mapping
pub const MODEL_SCALE: f32 = 0.06;
pub const MODEL_Y_DIVISOR: f32 = 10.0;
pub const MODEL_Y_BASE: f32 = -6.0;
pub const MODEL_Z_DIVISOR: f32 = 3.0;
pub const MODEL_Z_BASE: f32 = 1.0;
pub const MODEL_Z_MAX: f32 = 10.0; // depth stops advancing here, one-sided

// Camera
pub const CAMERA_Z: f32 = 14.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Lighting
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 4.4;
pub const LIGHT_POSITION: [f32; 3] = [0.25, 2.0, 2.0];
pub const AMBIENT_LEVEL: f32 = 0.08;

// Wave deformation of the thumbnail grid
pub const WAVE_AMPLITUDE: f32 = 0.05;
pub const WAVE_SPATIAL_FREQ: f32 = 3.0;
pub const WAVE_X_TIME_FREQ_SLOW: f32 = 1.0;
pub const WAVE_X_TIME_FREQ_FAST: f32 = 3.0;
pub const WAVE_Y_TIME_FREQ: f32 = 0.5;

// Overlay fade after load completion
pub const OVERLAY_FADE_DELAY_SEC: f32 = 0.5;
pub const OVERLAY_FADE_SECONDS: f32 = 3.0;

// Renderer backing-store sizing
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Device pixel ratio with the renderer's upper bound applied.
#[inline]
pub fn clamped_pixel_ratio(dpr: f32) -> f32 {
    dpr.min(MAX_PIXEL_RATIO)
}
