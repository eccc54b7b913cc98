use crate::render;
use instant::Instant;
use moonrise_core::{OverlayFade, PlaneGrid, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub overlay: Rc<RefCell<OverlayFade>>,
    pub gpu: render::GpuState<'a>,
    pub grid: PlaneGrid,
    pub canvas: web::HtmlCanvasElement,
    pub start_instant: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.start_instant).as_secs_f32();

        self.overlay.borrow_mut().step(dt);

        // Keep the surface sized to the canvas backing store
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        {
            let scene = self.scene.borrow();
            self.gpu.write_globals(scene.camera());
            self.gpu.write_model(scene.model_pose().matrix());
            for (i, tf) in scene.thumbnails().iter().enumerate() {
                self.gpu
                    .write_thumbnail(i, tf.matrix(), scene.thumbnail_opacity(i));
            }
        }

        self.gpu.write_waves(&self.grid, elapsed);
        self.gpu.set_overlay_alpha(self.overlay.borrow().alpha());

        if let Err(e) = self.gpu.render() {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    grid: &PlaneGrid,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, grid).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
