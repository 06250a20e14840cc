use crate::constants::*;
use crate::core::geometry::Viewport;
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Which raw input drives the gradient. The only transition is
/// `PointerDriven -> TiltDriven`; once tilt has been seen it stays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    PointerDriven,
    TiltDriven,
}

impl InputSource {
    /// Returns true when this call performed the transition.
    pub fn latch_tilt(&mut self) -> bool {
        match self {
            InputSource::PointerDriven => {
                *self = InputSource::TiltDriven;
                true
            }
            InputSource::TiltDriven => false,
        }
    }
}

#[inline]
pub fn normalize_pointer(x: f32, y: f32, viewport: Viewport) -> Option<Vec2> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    Some(Vec2::new(x / viewport.width, y / viewport.height))
}

/// Map device orientation angles into the unit square. `gamma` is left/right
/// in about [-90, 90], `beta` front/back in about [-180, 180]. Out-of-range
/// angles overshoot unless `clamp` is set.
#[inline]
pub fn normalize_tilt(gamma: f32, beta: f32, clamp: bool) -> Vec2 {
    let v = Vec2::new(
        (gamma + TILT_GAMMA_RANGE / 2.0) / TILT_GAMMA_RANGE,
        (beta + TILT_BETA_RANGE / 2.0) / TILT_BETA_RANGE,
    );
    if clamp {
        v.clamp(Vec2::ZERO, Vec2::ONE)
    } else {
        v
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub color: &'static str,
    pub offset_percent: f32,
}

/// Angle and stops for one frame of the backdrop gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientState {
    pub angle_deg: f32,
    pub stops: SmallVec<[ColorStop; 4]>,
}

impl GradientState {
    /// Derive the gradient from a smoothed signal.
    pub fn from_signal(signal: Vec2) -> Self {
        let angle_deg = lerp(GRADIENT_ANGLE_MIN_DEG, GRADIENT_ANGLE_MAX_DEG, signal.x);
        let spread = lerp(0.0, STOP_SPREAD_MAX, signal.y);
        let stops = GRADIENT_PALETTE
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let i = i as f32;
                ColorStop {
                    color,
                    offset_percent: STOP_OFFSET_BASE + i * STOP_OFFSET_SPACING + i * spread,
                }
            })
            .collect();
        Self { angle_deg, stops }
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.stops.iter().map(|s| s.offset_percent).collect()
    }
}

/// Formats as a CSS `linear-gradient(...)` value.
impl fmt::Display for GradientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", self.angle_deg)?;
        for stop in &self.stops {
            write!(f, ", {} {}%", stop.color, stop.offset_percent)?;
        }
        write!(f, ")")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GradientConfig {
    pub smoothing: f32,
    pub clamp_tilt: bool,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            smoothing: SIGNAL_SMOOTHING,
            clamp_tilt: false,
        }
    }
}

/// Pointer/tilt reactive gradient. Raw samples are recorded as they arrive;
/// [`GradientGenerator::step`] advances the smoothed signal once per frame.
pub struct GradientGenerator {
    config: GradientConfig,
    source: InputSource,
    raw: Vec2,
    smoothed: Vec2,
}

impl GradientGenerator {
    pub fn new(config: GradientConfig) -> Self {
        let rest = Vec2::from(SIGNAL_REST);
        Self {
            config,
            source: InputSource::default(),
            raw: rest,
            smoothed: rest,
        }
    }

    #[inline]
    pub fn source(&self) -> InputSource {
        self.source
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    /// Record a pointer sample in viewport pixels. Ignored once tilt is the
    /// active source, or when the viewport has no size.
    pub fn on_pointer(&mut self, x: f32, y: f32, viewport: Viewport) -> bool {
        if self.source == InputSource::TiltDriven {
            return false;
        }
        match normalize_pointer(x, y, viewport) {
            Some(sample) => {
                self.raw = sample;
                true
            }
            None => false,
        }
    }

    /// Record a device orientation sample. A sample with neither angle is not
    /// an observation; a missing single angle reads as 0.
    pub fn on_tilt(&mut self, gamma: Option<f32>, beta: Option<f32>) -> bool {
        if gamma.is_none() && beta.is_none() {
            return false;
        }
        if self.source.latch_tilt() {
            log::info!("[gradient] tilt observed, pointer input disabled");
        }
        self.raw = normalize_tilt(
            gamma.unwrap_or(0.0),
            beta.unwrap_or(0.0),
            self.config.clamp_tilt,
        );
        true
    }

    /// Advance smoothing by one frame and derive the gradient.
    pub fn step(&mut self) -> GradientState {
        self.smoothed += (self.raw - self.smoothed) * self.config.smoothing;
        GradientState::from_signal(self.smoothed)
    }

    /// Gradient for the current smoothed signal without advancing it.
    pub fn current(&self) -> GradientState {
        GradientState::from_signal(self.smoothed)
    }
}

impl Default for GradientGenerator {
    fn default() -> Self {
        Self::new(GradientConfig::default())
    }
}
