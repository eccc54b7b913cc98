//! Deformable plane grid shared by every thumbnail, plus the per-frame
//! wave displacement applied to it.

use crate::constants::{
    WAVE_AMPLITUDE, WAVE_SPATIAL_FREQ, WAVE_X_TIME_FREQ_FAST, WAVE_X_TIME_FREQ_SLOW,
    WAVE_Y_TIME_FREQ,
};

/// Vertex layout shared with the renderer's scene pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// A subdivided rectangle in the local XY plane, +Z facing.
///
/// All thumbnails draw from one instance of this grid; the displaced
/// vertices are re-uploaded once per frame and shared by the whole ring.
#[derive(Clone, Debug)]
pub struct PlaneGrid {
    pub vertices: Vec<SceneVertex>,
    pub indices: Vec<u32>,
    half_width: f32,
    half_height: f32,
}

impl PlaneGrid {
    pub fn new(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Self {
        let (sx, sy) = (segments_x.max(1), segments_y.max(1));
        let mut vertices = Vec::with_capacity(((sx + 1) * (sy + 1)) as usize);
        for row in 0..=sy {
            let v = row as f32 / sy as f32;
            let y = height * (0.5 - v);
            for col in 0..=sx {
                let u = col as f32 / sx as f32;
                let x = width * (u - 0.5);
                vertices.push(SceneVertex {
                    position: [x, y, 0.0],
                    normal: [0.0, 0.0, 1.0],
                    uv: [u, v],
                });
            }
        }
        let mut indices = Vec::with_capacity((sx * sy * 6) as usize);
        for row in 0..sy {
            for col in 0..sx {
                let a = row * (sx + 1) + col;
                let b = a + 1;
                let c = a + (sx + 1);
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }
        Self {
            vertices,
            indices,
            half_width: width * 0.5,
            half_height: height * 0.5,
        }
    }

    pub fn half_extents(&self) -> (f32, f32) {
        (self.half_width, self.half_height)
    }

    /// Write the grid with every vertex's depth displaced for elapsed
    /// time `t`, into `out` (resized to fit). Base vertices stay intact
    /// so displacement never accumulates.
    pub fn displaced(&self, t: f32, out: &mut Vec<SceneVertex>) {
        out.clear();
        out.extend(self.vertices.iter().map(|vert| {
            let [x, y, _] = vert.position;
            SceneVertex {
                position: [x, y, wave_z(x, y, t)],
                ..*vert
            }
        }));
    }
}

/// Sum of two sine waves in x (slow and fast) and one in y.
#[inline]
pub fn wave_z(x: f32, y: f32, t: f32) -> f32 {
    WAVE_AMPLITUDE * (WAVE_SPATIAL_FREQ * x + t * WAVE_X_TIME_FREQ_SLOW).sin()
        + WAVE_AMPLITUDE * (WAVE_SPATIAL_FREQ * x + t * WAVE_X_TIME_FREQ_FAST).sin()
        + WAVE_AMPLITUDE * (WAVE_SPATIAL_FREQ * y + t * WAVE_Y_TIME_FREQ).sin()
}
