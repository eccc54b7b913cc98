use crate::dom;
use glam::Vec2;
use moonrise_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse client coordinates converted to canvas backing-store pixels.
#[inline]
fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
fn current_scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Recompute model pose and ring placement on every scroll event.
pub fn wire_scroll(scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move || {
        scene.borrow_mut().set_scroll(current_scroll_y());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep canvas backing size and camera aspect in step with the window.
pub fn wire_resize(canvas: web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        scene.borrow_mut().set_viewport(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Hover picking against the thumbnail ring on every mouse move.
pub fn wire_pointer(canvas: web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = mouse_canvas_px(&ev, &canvas);
        scene.borrow_mut().pointer_moved(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    if let Some(document) = dom::window_document() {
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
