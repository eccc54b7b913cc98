use crate::progress;
use moonrise_core::clamped_pixel_ratio;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Keep the canvas backing store at CSS size times the (clamped) device
/// pixel ratio. Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dpr = clamped_pixel_ratio(w.device_pixel_ratio() as f32) as f64;
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Advance the circular progress indicator.
pub fn set_progress_offset(document: &web::Document, offset: f32) {
    if let Some(el) = query(document, ".progress") {
        let _ = el.set_attribute("style", &progress::stroke_offset_style(offset));
    }
}

/// Flag the splash so a failed load never leaves the page looking stuck.
pub fn mark_load_failed(document: &web::Document) {
    if let Some(el) = query(document, ".splash") {
        let _ = el.class_list().add_1("load-failed");
    }
}

fn hide_loading_ui(document: &web::Document) {
    if let Some(el) = query(document, ".progress") {
        let _ = el.set_attribute("style", &progress::opacity_style(0.0));
    }
    if let Some(el) = query(document, ".splash") {
        let _ = el.set_attribute("style", &progress::opacity_style(0.0));
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute("style", progress::overflow_release_style());
    }
}

/// After the fixed post-load delay: fade out the loader and splash
/// elements and let the page scroll again.
pub fn hide_loading_ui_after_delay(window: &web::Window, delay_ms: i32) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(doc) = window_document() {
            hide_loading_ui(&doc);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}
