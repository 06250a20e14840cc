use super::EventListener;
use crate::frame::SceneLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer positions (viewport pixels) to the gradient. The scene drops
/// them by itself once tilt has taken over.
pub fn wire_pointermove(
    window: &web::Window,
    scene_loop: Rc<RefCell<SceneLoop>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Ok(mut lp) = scene_loop.try_borrow_mut() else {
            return;
        };
        if let Some(scene) = lp.effect_mut() {
            scene.on_pointer(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}
