// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered_and_positive() {
    assert!(ITEM_SIZE_MIN > 0.0 && ITEM_SIZE_MAX > ITEM_SIZE_MIN);
    assert!(ORBIT_RADIUS_MIN > 0.0 && ORBIT_RADIUS_MAX > ORBIT_RADIUS_MIN);
    assert!(ORBIT_RADIUS_PER_INDEX >= 0.0);
    // A zero speed would freeze an item
    assert!(ANGULAR_SPEED_MIN > 0.0 && ANGULAR_SPEED_MAX > ANGULAR_SPEED_MIN);
    assert!(RESPAWN_DWELL_MIN_SEC > 0.0 && RESPAWN_DWELL_MAX_SEC >= RESPAWN_DWELL_MIN_SEC);
    assert!(FALLBACK_ORBIT_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_shape_factors_are_fractions() {
    assert!(SIGNAL_SMOOTHING > 0.0 && SIGNAL_SMOOTHING < 1.0);
    assert!(ORBIT_ELLIPTICITY > 0.0 && ORBIT_ELLIPTICITY <= 1.0);
    assert!(PARALLAX_ELLIPTICITY > 0.0 && PARALLAX_ELLIPTICITY <= 1.0);
    for v in SIGNAL_REST {
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gradient_mapping_spans_a_half_turn() {
    assert_eq!(GRADIENT_ANGLE_MAX_DEG - GRADIENT_ANGLE_MIN_DEG, 180.0);
    assert_eq!(GRADIENT_PALETTE.len(), 4);
    assert!(STOP_OFFSET_BASE >= 0.0 && STOP_OFFSET_SPACING > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layers_stack_gradient_parallax_orbit() {
    assert!(GRADIENT_Z_INDEX < PARALLAX_Z_INDEX);
    assert!(PARALLAX_Z_INDEX < ORBIT_Z_INDEX);
    assert!(COMPACT_ITEM_COUNT < DEFAULT_ITEM_COUNT);
    // The last parallax layer must stay visible
    let last = PARALLAX_OPACITY_BASE - (PARALLAX_LAYER_COUNT - 1) as f32 * PARALLAX_OPACITY_STEP;
    assert!(last > 0.0);
}

#[test]
fn palettes_are_hex_colors() {
    for c in ORBIT_PALETTE.iter().chain(GRADIENT_PALETTE.iter()) {
        assert!(c.starts_with('#') && c.len() == 7, "bad color {c}");
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
