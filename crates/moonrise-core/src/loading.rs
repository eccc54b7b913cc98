//! Progress accounting for the startup asset loads.

use thiserror::Error;

/// Why an asset could not be brought into the scene.
///
/// The web layer attaches the transport/decoder detail as a plain string
/// so this enum stays free of platform types.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("fetch failed for {url}: {detail}")]
    Fetch { url: String, detail: String },

    #[error("failed to decode image {url}: {detail}")]
    ImageDecode { url: String, detail: String },

    #[error("failed to parse model {url}: {detail}")]
    ModelParse { url: String, detail: String },

    #[error("model {url} has no renderable mesh")]
    EmptyModel { url: String },
}

/// Counts resolved assets and reports completion.
#[derive(Clone, Copy, Debug)]
pub struct LoadProgress {
    loaded: usize,
    total: usize,
    failed: bool,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            loaded: 0,
            total,
            failed: false,
        }
    }

    /// Record one resolved asset; returns the new (loaded, total) pair.
    pub fn asset_loaded(&mut self) -> (usize, usize) {
        self.loaded = (self.loaded + 1).min(self.total);
        (self.loaded, self.total)
    }

    pub fn mark_failed(&mut self) {
        if !self.failed {
            log::warn!(
                "load sequence failed after {}/{} assets",
                self.loaded,
                self.total
            );
        }
        self.failed = true;
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn is_complete(&self) -> bool {
        !self.failed && self.loaded == self.total
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        self.loaded as f32 / self.total as f32
    }

    /// Stroke offset for the circular progress indicator: 100 when
    /// nothing is loaded, 0 when everything is.
    pub fn stroke_offset(&self) -> f32 {
        100.0 - self.fraction() * 100.0
    }
}
