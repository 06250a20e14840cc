use crate::constants::*;
use crate::core::geometry::OrbitCenter;
use glam::Vec2;

/// Decorative strip drawn on each parallax layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    Clouds,
    Hearts,
    Stars,
}

impl LayerKind {
    pub const ALL: [LayerKind; PARALLAX_LAYER_COUNT] =
        [LayerKind::Clouds, LayerKind::Hearts, LayerKind::Stars];

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Clouds => "clouds",
            LayerKind::Hearts => "hearts",
            LayerKind::Stars => "stars",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPlacement {
    pub kind: LayerKind,
    pub offset: Vec2,
    pub opacity: f32,
}

/// Fixed-parameter layers circling the anchor; inner layers move slower.
pub fn layer_offset(layer: usize, orbit: &OrbitCenter, now_sec: f64) -> Vec2 {
    let i = layer as f32;
    let size = Vec2::from(PARALLAX_LAYER_SIZE);
    let r = orbit.anchor_radius + PARALLAX_RADIUS_BASE + i * PARALLAX_RADIUS_PER_LAYER;
    let speed = (PARALLAX_SPEED_BASE + i * PARALLAX_SPEED_PER_LAYER) as f64;
    let angle = (now_sec * speed + (i * PARALLAX_PHASE_PER_LAYER) as f64) as f32;
    Vec2::new(
        orbit.center.x + angle.cos() * r - size.x / 2.0,
        orbit.center.y + (angle + i).sin() * r * PARALLAX_ELLIPTICITY - size.y / 2.0,
    )
}

#[inline]
pub fn layer_opacity(layer: usize) -> f32 {
    (PARALLAX_OPACITY_BASE - layer as f32 * PARALLAX_OPACITY_STEP).clamp(0.0, 1.0)
}

pub fn frame(orbit: &OrbitCenter, now_sec: f64, out: &mut Vec<LayerPlacement>) {
    out.clear();
    out.extend(LayerKind::ALL.iter().enumerate().map(|(i, &kind)| LayerPlacement {
        kind,
        offset: layer_offset(i, orbit, now_sec),
        opacity: layer_opacity(i),
    }));
}
