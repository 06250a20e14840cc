/// Motion and palette tuning constants.
///
/// These constants express intended behavior (ranges, smoothing factors,
/// layer geometry) and keep magic numbers out of the effect code.

// Orbit item palette (pastel paws)
pub const ORBIT_PALETTE: [&str; 4] = ["#ffb86b", "#ffb6c1", "#aeefff", "#fffbe0"];

// Orbit item count
pub const DEFAULT_ITEM_COUNT: usize = 16;
pub const COMPACT_ITEM_COUNT: usize = 8; // smaller hosts (phones)

// Orbit item parameter ranges
pub const ITEM_SIZE_MIN: f32 = 28.0;
pub const ITEM_SIZE_MAX: f32 = 48.0;
pub const ORBIT_RADIUS_MIN: f32 = 80.0;
pub const ORBIT_RADIUS_MAX: f32 = 140.0;
pub const ORBIT_RADIUS_PER_INDEX: f32 = 10.0; // outer slots orbit wider
pub const ANGULAR_SPEED_MIN: f32 = 0.09; // rad/s
pub const ANGULAR_SPEED_MAX: f32 = 0.19;
pub const ANGULAR_SPEED_PER_INDEX: f32 = 0.011;

// Orbit path shape
pub const ORBIT_ELLIPTICITY: f32 = 0.7; // vertical radius = r * ellipticity
pub const ORBIT_STAGGER: f32 = 24.0; // clearance between anchor edge and the closest orbit

// Used while the anchor is missing or has no size
pub const FALLBACK_ORBIT_RADIUS: f32 = 180.0;

// Respawn dwell (seconds)
pub const RESPAWN_DWELL_MIN_SEC: f64 = 9.0;
pub const RESPAWN_DWELL_MAX_SEC: f64 = 17.0;

// Per-slot fade; later slots are fainter
pub const ITEM_OPACITY_BASE: f32 = 0.93;
pub const ITEM_OPACITY_STEP: f32 = 0.097;

// Gradient palette, rendered in this order
pub const GRADIENT_PALETTE: [&str; 4] = ["#ffb86b", "#fffbe0", "#aeefff", "#ffb6c1"];

// Signal smoothing: smoothed += (raw - smoothed) * factor, once per frame
pub const SIGNAL_SMOOTHING: f32 = 0.12;
pub const SIGNAL_REST: [f32; 2] = [0.5, 0.5];

// Gradient mapping
pub const GRADIENT_ANGLE_MIN_DEG: f32 = 90.0;
pub const GRADIENT_ANGLE_MAX_DEG: f32 = 270.0;
pub const STOP_OFFSET_BASE: f32 = 20.0; // percent
pub const STOP_OFFSET_SPACING: f32 = 20.0;
pub const STOP_SPREAD_MAX: f32 = 30.0; // extra spacing per stop at full vertical signal

// Tilt input nominal ranges (degrees)
pub const TILT_GAMMA_RANGE: f32 = 180.0; // [-90, 90]
pub const TILT_BETA_RANGE: f32 = 360.0; // [-180, 180]

// Parallax layers
pub const PARALLAX_LAYER_COUNT: usize = 3;
pub const PARALLAX_LAYER_SIZE: [f32; 2] = [220.0, 100.0];
pub const PARALLAX_RADIUS_BASE: f32 = 48.0;
pub const PARALLAX_RADIUS_PER_LAYER: f32 = 32.0;
pub const PARALLAX_SPEED_BASE: f32 = 0.22;
pub const PARALLAX_SPEED_PER_LAYER: f32 = 0.11;
pub const PARALLAX_PHASE_PER_LAYER: f32 = 1.2;
pub const PARALLAX_ELLIPTICITY: f32 = 0.6;
pub const PARALLAX_OPACITY_BASE: f32 = 0.92;
pub const PARALLAX_OPACITY_STEP: f32 = 0.19;

// Layer stacking (CSS z-index)
pub const GRADIENT_Z_INDEX: i32 = 1;
pub const PARALLAX_Z_INDEX: i32 = 6;
pub const ORBIT_Z_INDEX: i32 = 15;
