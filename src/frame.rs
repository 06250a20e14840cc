use crate::core::{FrameHost, FrameLoop, Scene};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
pub type SceneLoop = FrameLoop<RafHost, Scene>;

/// `requestAnimationFrame` as a [`FrameHost`]. The callback slot is filled
/// once the frame closure exists and emptied on teardown.
pub struct RafHost {
    window: web::Window,
    callback: FrameCallback,
}

impl RafHost {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameHost for RafHost {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

pub struct FrameContext {
    pub scene_loop: Rc<RefCell<SceneLoop>>,
    pub anchor: Rc<RefCell<Option<web::Element>>>,
    pub layers: render::Layers,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_sec = self.started.elapsed().as_secs_f64();
        let Ok(mut lp) = self.scene_loop.try_borrow_mut() else {
            return;
        };
        if let Some(scene) = lp.effect_mut() {
            // Anchor geometry is re-read every frame; layout may move it
            let rect = self.anchor.borrow().as_ref().and_then(dom::element_rect);
            scene.set_anchor(rect);
            scene.set_viewport(dom::viewport());
        }
        if lp.on_frame(now_sec) {
            self.layers.apply(lp.effect().output());
        }
    }
}

/// Install the frame closure and request the first frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, callback: &FrameCallback) {
    let ctx = frame_ctx.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        if let Ok(mut c) = ctx.try_borrow_mut() {
            c.frame();
        }
    }) as Box<dyn FnMut(f64)>));
    let scene_loop = frame_ctx.borrow().scene_loop.clone();
    scene_loop.borrow_mut().start();
}
