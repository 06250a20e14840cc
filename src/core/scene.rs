use crate::constants::DEFAULT_ITEM_COUNT;
use crate::core::frame_loop::FrameEffect;
use crate::core::geometry::{OrbitCenter, Rect, Viewport};
use crate::core::gradient::{GradientConfig, GradientGenerator, GradientState};
use crate::core::orbit::{OrbitAnimator, Placement};
use crate::core::parallax::{self, LayerPlacement};
use rand::prelude::*;

/// Runtime options for a mounted backdrop.
#[derive(Clone, Debug)]
pub struct EffectsConfig {
    pub item_count: usize,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub clamp_tilt: bool,
    pub parallax: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            seed: None,
            clamp_tilt: false,
            parallax: true,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub orbit: Vec<Placement>,
    pub parallax: Vec<LayerPlacement>,
    pub gradient: GradientState,
    pub fallback_anchor: bool,
}

/// Orbit items, parallax layers and the gradient, advanced together once per
/// frame. The effects share nothing but the anchor geometry they read.
pub struct Scene {
    orbit: OrbitAnimator,
    gradient: GradientGenerator,
    parallax: bool,
    anchor: Option<Rect>,
    viewport: Viewport,
    last_now: f64,
    output: SceneFrame,
}

impl Scene {
    pub fn new(config: &EffectsConfig, viewport: Viewport) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let gradient = GradientGenerator::new(GradientConfig {
            clamp_tilt: config.clamp_tilt,
            ..GradientConfig::default()
        });
        let output = SceneFrame {
            orbit: Vec::with_capacity(config.item_count),
            parallax: Vec::new(),
            gradient: gradient.current(),
            fallback_anchor: true,
        };
        Self {
            orbit: OrbitAnimator::new(config.item_count, rng, 0.0),
            gradient,
            parallax: config.parallax,
            anchor: None,
            viewport,
            last_now: 0.0,
            output,
        }
    }

    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_item_count(&mut self, count: usize) -> bool {
        self.orbit.set_count(count, self.last_now)
    }

    pub fn on_pointer(&mut self, x: f32, y: f32) -> bool {
        self.gradient.on_pointer(x, y, self.viewport)
    }

    pub fn on_tilt(&mut self, gamma: Option<f32>, beta: Option<f32>) -> bool {
        self.gradient.on_tilt(gamma, beta)
    }

    pub fn orbit(&self) -> &OrbitAnimator {
        &self.orbit
    }

    pub fn gradient(&self) -> &GradientGenerator {
        &self.gradient
    }

    pub fn output(&self) -> &SceneFrame {
        &self.output
    }
}

impl FrameEffect for Scene {
    fn frame(&mut self, now_sec: f64) {
        self.last_now = now_sec;
        let center = OrbitCenter::resolve(self.anchor, self.viewport);
        if center.fallback != self.output.fallback_anchor {
            if center.fallback {
                log::debug!("[scene] anchor unavailable, using viewport center");
            } else {
                log::debug!("[scene] anchor resolved");
            }
        }
        self.output.fallback_anchor = center.fallback;

        self.orbit.frame(&center, now_sec, &mut self.output.orbit);
        if self.parallax {
            parallax::frame(&center, now_sec, &mut self.output.parallax);
        } else {
            self.output.parallax.clear();
        }
        self.output.gradient = self.gradient.step();
    }
}
