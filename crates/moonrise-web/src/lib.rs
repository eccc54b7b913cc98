#![cfg(target_arch = "wasm32")]
use instant::Instant;
use moonrise_core::{
    LoadProgress, OverlayFade, PlaneGrid, SceneState, OVERLAY_FADE_DELAY_SEC, THUMBNAIL_HEIGHT,
    THUMBNAIL_SEGMENTS_X, THUMBNAIL_SEGMENTS_Y, THUMBNAIL_WIDTH,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod dom;
mod events;
mod frame;
mod model;
mod progress;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("moonrise-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .query_selector("canvas.webgl")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing canvas.webgl"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let dpr = window.device_pixel_ratio() as f32;
    let scene = Rc::new(RefCell::new(SceneState::new(
        width as f32,
        height as f32,
        dpr,
        scroll_y,
    )));
    let overlay = Rc::new(RefCell::new(OverlayFade::new()));

    let grid = PlaneGrid::new(
        THUMBNAIL_WIDTH,
        THUMBNAIL_HEIGHT,
        THUMBNAIL_SEGMENTS_X,
        THUMBNAIL_SEGMENTS_Y,
    );
    let mut gpu = frame::init_gpu(&canvas, &grid)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU init failed"))?;

    // Fetch everything the scene needs, driving the progress indicator
    let mut load_progress = LoadProgress::new(assets::asset_total());
    let progress_doc = document.clone();
    let loaded = assets::load_scene_assets(&mut load_progress, move |p| {
        dom::set_progress_offset(&progress_doc, p.stroke_offset());
    })
    .await;
    let scene_assets = match loaded {
        Ok(a) => a,
        Err(e) => {
            log::error!("asset load failed: {}", e);
            dom::mark_load_failed(&document);
            return Err(e.into());
        }
    };

    let background_view = gpu.upload_texture("background", &scene_assets.background);
    gpu.set_background(&background_view);
    for img in &scene_assets.thumbnails {
        let view = gpu.upload_texture("thumbnail", img);
        gpu.add_thumbnail(&view);
    }
    gpu.set_model_meshes(scene_assets.model);

    // All assets resolved: arm the overlay fade and, after the same
    // fixed delay, drop the loading UI and release page scrolling
    overlay.borrow_mut().begin();
    dom::hide_loading_ui_after_delay(&window, (OVERLAY_FADE_DELAY_SEC * 1000.0) as i32);

    events::wire_scroll(scene.clone());
    events::wire_resize(canvas.clone(), scene.clone());
    events::wire_pointer(canvas.clone(), scene.clone());

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        overlay,
        gpu,
        grid,
        canvas,
        start_instant: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
