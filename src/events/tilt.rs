use super::EventListener;
use crate::frame::SceneLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Whether this environment exposes device orientation at all. Permission
/// prompts are left to the page; without a grant no events arrive and the
/// pointer stays in charge.
pub fn tilt_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("DeviceOrientationEvent")).unwrap_or(false)
}

pub fn wire_deviceorientation(
    window: &web::Window,
    scene_loop: Rc<RefCell<SceneLoop>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, "deviceorientation", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        let Ok(mut lp) = scene_loop.try_borrow_mut() else {
            return;
        };
        if let Some(scene) = lp.effect_mut() {
            scene.on_tilt(ev.gamma().map(|g| g as f32), ev.beta().map(|b| b as f32));
        }
    })
}
