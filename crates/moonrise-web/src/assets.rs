//! Asset fetching and decoding for the scene: the background texture,
//! the astronaut model and the ten thumbnail images.

use crate::model;
use crate::render::ModelMeshData;
use moonrise_core::{AssetError, LoadProgress};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub const BACKGROUND_URL: &str = "/textures/moon.jpeg";
pub const MODEL_URL: &str = "/models/astronaut.glb";
pub const THUMBNAIL_URL_PREFIX: &str = "/textures/thumbnails/thumbnail";

/// RGBA8 pixels, tightly packed.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Everything the scene needs before the first frame.
pub struct SceneAssets {
    pub background: DecodedImage,
    pub thumbnails: Vec<DecodedImage>,
    pub model: Vec<ModelMeshData>,
}

pub fn thumbnail_url(index: usize) -> String {
    format!("{}{}.jpg", THUMBNAIL_URL_PREFIX, index + 1)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let fetch_err = |detail: String| AssetError::Fetch {
        url: url.to_string(),
        detail,
    };
    let window = web::window().ok_or_else(|| fetch_err("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| fetch_err(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| fetch_err(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_image(url: &str) -> Result<DecodedImage, AssetError> {
    let bytes = fetch_bytes(url).await?;
    let decoded = image::load_from_memory(&bytes).map_err(|e| AssetError::ImageDecode {
        url: url.to_string(),
        detail: e.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

async fn load_model(url: &str) -> Result<Vec<ModelMeshData>, AssetError> {
    let bytes = fetch_bytes(url).await?;
    model::extract_meshes(url, &bytes)
}

/// Fetch every asset in sequence, ticking `progress` and invoking
/// `on_progress` after each one resolves.
///
/// The first failure aborts the sequence; the caller decides what to do
/// with the splash UI.
pub async fn load_scene_assets(
    progress: &mut LoadProgress,
    mut on_progress: impl FnMut(&LoadProgress),
) -> Result<SceneAssets, AssetError> {
    let background = step(progress, &mut on_progress, load_image(BACKGROUND_URL).await)?;
    let model = step(progress, &mut on_progress, load_model(MODEL_URL).await)?;
    let mut thumbnails = Vec::with_capacity(moonrise_core::THUMBNAIL_COUNT);
    for i in 0..moonrise_core::THUMBNAIL_COUNT {
        let img = step(progress, &mut on_progress, load_image(&thumbnail_url(i)).await)?;
        thumbnails.push(img);
    }
    Ok(SceneAssets {
        background,
        thumbnails,
        model,
    })
}

/// Total number of tracked assets: background + model + thumbnails.
pub fn asset_total() -> usize {
    2 + moonrise_core::THUMBNAIL_COUNT
}

fn step<T>(
    progress: &mut LoadProgress,
    on_progress: &mut impl FnMut(&LoadProgress),
    result: Result<T, AssetError>,
) -> Result<T, AssetError> {
    match result {
        Ok(value) => {
            let (loaded, total) = progress.asset_loaded();
            log::info!("asset {}/{} loaded", loaded, total);
            on_progress(progress);
            Ok(value)
        }
        Err(e) => {
            progress.mark_failed();
            on_progress(progress);
            Err(e)
        }
    }
}
