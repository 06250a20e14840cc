use crate::constants::{GRADIENT_Z_INDEX, ORBIT_Z_INDEX, PARALLAX_LAYER_SIZE, PARALLAX_Z_INDEX};
use crate::core::orbit::{ItemKey, Placement};
use crate::core::parallax::{LayerKind, LayerPlacement};
use crate::core::{GradientState, SceneFrame};
use crate::dom;
use crate::markup;
use web_sys as web;

/// Full-screen gradient overlay.
pub struct GradientLayer {
    el: web::HtmlElement,
}

impl GradientLayer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let el = dom::create_layer(document, "interactive-bg", GRADIENT_Z_INDEX)?;
        Ok(Self { el })
    }

    pub fn apply(&self, gradient: &GradientState) {
        _ = self
            .el
            .style()
            .set_property("background", &gradient.to_string());
    }

    pub fn remove(&self) {
        self.el.remove();
    }
}

pub struct ParallaxLayer {
    container: web::HtmlElement,
    strips: Vec<web::HtmlElement>,
}

impl ParallaxLayer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let container = dom::create_layer(document, "parallax-layers", PARALLAX_Z_INDEX)?;
        let mut strips = Vec::with_capacity(LayerKind::ALL.len());
        for kind in LayerKind::ALL {
            let el = dom::create_html_element(document, "div")?;
            _ = el.set_attribute("data-layer", kind.name());
            _ = el.set_attribute(
                "style",
                &format!(
                    "position:absolute;width:{}px;height:{}px;will-change:transform;\
                     filter:blur(0.5px) drop-shadow(0 2px 12px #fffbe0cc)",
                    PARALLAX_LAYER_SIZE[0], PARALLAX_LAYER_SIZE[1]
                ),
            );
            el.set_inner_html(markup::layer_svg(kind));
            container
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("append parallax strip: {:?}", e))?;
            strips.push(el);
        }
        Ok(Self { container, strips })
    }

    pub fn apply(&self, placements: &[LayerPlacement]) {
        for (el, p) in self.strips.iter().zip(placements) {
            dom::set_translate(el, p.offset.x, p.offset.y);
            _ = el.style().set_property("opacity", &p.opacity.to_string());
        }
    }

    pub fn remove(&self) {
        self.container.remove();
    }
}

struct OrbitSlot {
    key: ItemKey,
    el: web::HtmlElement,
}

/// One `<span>` per orbit item. A new key means a respawned item, which gets
/// a fresh element rather than a restyle of the old one.
pub struct OrbitLayer {
    container: web::HtmlElement,
    slots: Vec<OrbitSlot>,
}

impl OrbitLayer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let container = dom::create_layer(document, "orbit-particles", ORBIT_Z_INDEX)?;
        Ok(Self {
            container,
            slots: Vec::new(),
        })
    }

    fn create_item(document: &web::Document, p: &Placement) -> anyhow::Result<web::HtmlElement> {
        let el = dom::create_html_element(document, "span")?;
        _ = el.set_attribute("data-key", &p.key.to_string());
        _ = el.set_attribute(
            "style",
            &format!(
                "position:absolute;left:0;top:0;width:{s}px;height:{s}px;opacity:{o};\
                 display:flex;align-items:center;justify-content:center;will-change:transform;\
                 filter:drop-shadow(0 2px 12px #fffbe0cc) drop-shadow(0 0 0.5px #ffb6c1)",
                s = p.size,
                o = p.opacity
            ),
        );
        el.set_inner_html(&markup::paw_svg(p.color, p.size));
        Ok(el)
    }

    pub fn apply(&mut self, document: &web::Document, placements: &[Placement]) {
        while self.slots.len() > placements.len() {
            if let Some(slot) = self.slots.pop() {
                slot.el.remove();
            }
        }
        for (i, p) in placements.iter().enumerate() {
            if i == self.slots.len() {
                match Self::create_item(document, p) {
                    Ok(el) => {
                        _ = self.container.append_child(&el);
                        self.slots.push(OrbitSlot { key: p.key, el });
                    }
                    Err(e) => {
                        log::warn!("[render] orbit item {}: {:?}", p.key, e);
                        return;
                    }
                }
            } else if self.slots[i].key != p.key {
                match Self::create_item(document, p) {
                    Ok(el) => {
                        _ = self.container.replace_child(&el, &self.slots[i].el);
                        self.slots[i] = OrbitSlot { key: p.key, el };
                    }
                    Err(e) => log::warn!("[render] orbit item {}: {:?}", p.key, e),
                }
            }
            dom::set_translate(&self.slots[i].el, p.offset.x, p.offset.y);
        }
    }

    pub fn remove(&mut self) {
        self.slots.clear();
        self.container.remove();
    }
}

/// All backdrop layers, bottom to top.
pub struct Layers {
    document: web::Document,
    gradient: GradientLayer,
    parallax: Option<ParallaxLayer>,
    orbit: OrbitLayer,
}

impl Layers {
    pub fn new(document: &web::Document, parallax: bool) -> anyhow::Result<Self> {
        let gradient = GradientLayer::new(document)?;
        let parallax = if parallax {
            Some(ParallaxLayer::new(document)?)
        } else {
            None
        };
        let orbit = OrbitLayer::new(document)?;
        Ok(Self {
            document: document.clone(),
            gradient,
            parallax,
            orbit,
        })
    }

    pub fn apply(&mut self, frame: &SceneFrame) {
        self.gradient.apply(&frame.gradient);
        if let Some(p) = &self.parallax {
            p.apply(&frame.parallax);
        }
        self.orbit.apply(&self.document, &frame.orbit);
    }

    pub fn remove(&mut self) {
        self.gradient.remove();
        if let Some(p) = &self.parallax {
            p.remove();
        }
        self.orbit.remove();
    }
}
