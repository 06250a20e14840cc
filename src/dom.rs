use crate::core::{Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Current screen rectangle of `el`; `None` once it has left the document.
pub fn element_rect(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ))
}

pub fn create_html_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

/// Full-viewport, click-through container appended to `<body>`.
pub fn create_layer(
    document: &web::Document,
    class: &str,
    z_index: i32,
) -> anyhow::Result<web::HtmlElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let el = create_html_element(document, "div")?;
    el.set_class_name(class);
    _ = el.set_attribute("aria-hidden", "true");
    _ = el.set_attribute(
        "style",
        &format!(
            "position:fixed;top:0;left:0;width:100vw;height:100vh;pointer-events:none;z-index:{}",
            z_index
        ),
    );
    body.append_child(&el)
        .map_err(|e| anyhow::anyhow!("append layer: {:?}", e))?;
    Ok(el)
}

#[inline]
pub fn set_translate(el: &web::HtmlElement, x: f32, y: f32) {
    _ = el
        .style()
        .set_property("transform", &format!("translate({}px, {}px)", x, y));
}
