#![cfg(target_arch = "wasm32")]
use crate::constants::COMPACT_ITEM_COUNT;
use crate::core::{EffectsConfig, FrameLoop, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod markup;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web loaded");
    Ok(())
}

/// Animated page backdrop: orbiting paws around an anchor element, parallax
/// strips, and a pointer/tilt reactive gradient.
///
/// The page owns the anchor element and hands it in; the backdrop only reads
/// its bounding box. Call `dispose()` (or free the handle) when the view goes
/// away.
#[wasm_bindgen]
pub struct Backdrop {
    scene_loop: Rc<RefCell<frame::SceneLoop>>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    callback: frame::FrameCallback,
    anchor: Rc<RefCell<Option<web::Element>>>,
    listeners: Vec<events::EventListener>,
    disposed: bool,
}

#[wasm_bindgen]
impl Backdrop {
    #[wasm_bindgen(constructor)]
    pub fn new(anchor: Option<web::Element>, item_count: Option<u32>) -> Result<Backdrop, JsValue> {
        let mut config = EffectsConfig::default();
        if let Some(n) = item_count {
            config.item_count = n as usize;
        }
        mount(anchor, config).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    /// Fewer items, for small screens.
    pub fn compact(anchor: Option<web::Element>) -> Result<Backdrop, JsValue> {
        Self::new(anchor, Some(COMPACT_ITEM_COUNT as u32))
    }

    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(
        anchor: Option<web::Element>,
        item_count: u32,
        clamp_tilt: bool,
        parallax: bool,
        seed: Option<u64>,
    ) -> Result<Backdrop, JsValue> {
        let config = EffectsConfig {
            item_count: item_count as usize,
            seed,
            clamp_tilt,
            parallax,
        };
        mount(anchor, config).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    #[wasm_bindgen(js_name = setAnchor)]
    pub fn set_anchor(&self, anchor: Option<web::Element>) {
        *self.anchor.borrow_mut() = anchor;
    }

    #[wasm_bindgen(js_name = setItemCount)]
    pub fn set_item_count(&self, item_count: u32) {
        if let Some(scene) = self.scene_loop.borrow_mut().effect_mut() {
            scene.set_item_count(item_count as usize);
        }
    }

    /// Current gradient as a CSS `background` value.
    #[wasm_bindgen(getter, js_name = gradientCss)]
    pub fn gradient_css(&self) -> String {
        self.scene_loop
            .borrow()
            .effect()
            .output()
            .gradient
            .to_string()
    }

    #[wasm_bindgen(getter, js_name = inputSource)]
    pub fn input_source(&self) -> String {
        format!("{:?}", self.scene_loop.borrow().effect().gradient().source())
    }

    /// Stop the frame loop, detach listeners and remove the layers.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.scene_loop.borrow_mut().dispose();
        self.listeners.clear();
        self.frame_ctx.borrow_mut().layers.remove();
        // Breaks the closure -> context -> loop -> host -> closure cycle
        self.callback.borrow_mut().take();
        *self.anchor.borrow_mut() = None;
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn mount(anchor: Option<web::Element>, config: EffectsConfig) -> anyhow::Result<Backdrop> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    if anchor.is_none() {
        log::warn!("[backdrop] no anchor element, orbiting the viewport center");
    }

    let layers = crate::render::Layers::new(&document, config.parallax)?;
    let scene = Scene::new(&config, dom::viewport());
    let callback: frame::FrameCallback = Rc::new(RefCell::new(None));
    let host = frame::RafHost::new(window.clone(), callback.clone());
    let scene_loop = Rc::new(RefCell::new(FrameLoop::new(host, scene)));
    let anchor = Rc::new(RefCell::new(anchor));

    // Input listeners; tilt wins over pointer once it reports
    let mut listeners = Vec::with_capacity(2);
    match events::wire_pointermove(&window, scene_loop.clone()) {
        Ok(l) => listeners.push(l),
        Err(e) => log::warn!("[backdrop] pointer input unavailable: {:?}", e),
    }
    if events::tilt_supported(&window) {
        match events::wire_deviceorientation(&window, scene_loop.clone()) {
            Ok(l) => listeners.push(l),
            Err(e) => log::warn!("[backdrop] tilt input unavailable: {:?}", e),
        }
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene_loop: scene_loop.clone(),
        anchor: anchor.clone(),
        layers,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx.clone(), &callback);
    log::info!(
        "[backdrop] mounted items={} parallax={} listeners={}",
        config.item_count,
        config.parallax,
        listeners.len()
    );

    Ok(Backdrop {
        scene_loop,
        frame_ctx,
        callback,
        anchor,
        listeners,
        disposed: false,
    })
}
