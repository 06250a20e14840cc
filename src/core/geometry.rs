use crate::constants::{FALLBACK_ORBIT_RADIUS, ORBIT_STAGGER};
use glam::Vec2;

/// Screen-space rectangle in CSS pixels (what `getBoundingClientRect` reports).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// An anchor that has not been laid out yet reports a zero-sized box.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Center and inner radius that every orbiting element circles around.
///
/// `anchor_radius` is the anchor's half-width (or the synthetic radius);
/// `base_radius` adds the orbit stagger and is where orbit items start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCenter {
    pub center: Vec2,
    pub anchor_radius: f32,
    pub base_radius: f32,
    pub fallback: bool,
}

impl OrbitCenter {
    /// Resolve against the anchor when it is laid out, else against a synthetic
    /// anchor at the viewport center.
    pub fn resolve(anchor: Option<Rect>, viewport: Viewport) -> Self {
        match anchor {
            Some(rect) if rect.is_ready() => Self {
                center: rect.center(),
                anchor_radius: rect.half_width(),
                base_radius: rect.half_width() + ORBIT_STAGGER,
                fallback: false,
            },
            _ => Self {
                center: viewport.center(),
                anchor_radius: FALLBACK_ORBIT_RADIUS,
                base_radius: FALLBACK_ORBIT_RADIUS,
                fallback: true,
            },
        }
    }
}

/// Point on an ellipse of horizontal radius `radius` and vertical radius
/// `radius * ellipticity`, shifted so a `size`-wide box is centered on it.
#[inline]
pub fn ellipse_point(
    center: Vec2,
    radius: f32,
    ellipticity: f32,
    angle: f32,
    size: Vec2,
) -> Vec2 {
    Vec2::new(
        center.x + angle.cos() * radius - size.x / 2.0,
        center.y + angle.sin() * radius * ellipticity - size.y / 2.0,
    )
}
