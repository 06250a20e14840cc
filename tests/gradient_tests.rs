// Host-side tests for the reactive gradient generator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod gradient {
        include!("../src/core/gradient.rs");
    }
}

use crate::core::geometry::Viewport;
use crate::core::gradient::*;
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn assert_offsets(state: &GradientState, expected: [f32; 4]) {
    let got = state.offsets();
    assert_eq!(got.len(), 4);
    for (g, e) in got.iter().zip(expected) {
        assert!(approx(*g, e), "offsets {got:?}, expected {expected:?}");
    }
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(90.0, 270.0, 0.0), 90.0);
    assert_eq!(lerp(90.0, 270.0, 1.0), 270.0);
    assert_eq!(lerp(90.0, 270.0, 0.5), 180.0);
}

#[test]
fn angle_follows_horizontal_signal() {
    assert!(approx(GradientState::from_signal(Vec2::new(0.0, 0.3)).angle_deg, 90.0));
    assert!(approx(GradientState::from_signal(Vec2::new(1.0, 0.3)).angle_deg, 270.0));
    assert!(approx(GradientState::from_signal(Vec2::new(0.5, 0.3)).angle_deg, 180.0));
}

#[test]
fn stop_offsets_spread_with_vertical_signal() {
    assert_offsets(
        &GradientState::from_signal(Vec2::new(0.5, 0.0)),
        [20.0, 40.0, 60.0, 80.0],
    );
    assert_offsets(
        &GradientState::from_signal(Vec2::new(0.5, 1.0)),
        [20.0, 70.0, 120.0, 170.0],
    );
}

#[test]
fn stops_keep_palette_order() {
    let state = GradientState::from_signal(Vec2::new(0.2, 0.8));
    let colors: Vec<&str> = state.stops.iter().map(|s| s.color).collect();
    assert_eq!(colors, crate::constants::GRADIENT_PALETTE.to_vec());
}

#[test]
fn untouched_generator_rests_at_center() {
    let mut gen = GradientGenerator::default();
    let state = gen.step();
    assert_eq!(gen.smoothed(), Vec2::new(0.5, 0.5));
    assert_eq!(state.angle_deg, 180.0);
    // evenly spaced
    assert_offsets(&state, [20.0, 55.0, 90.0, 125.0]);
    assert_eq!(
        state.to_string(),
        "linear-gradient(180deg, #ffb86b 20%, #fffbe0 55%, #aeefff 90%, #ffb6c1 125%)"
    );
}

#[test]
fn smoothing_converges_monotonically() {
    let mut gen = GradientGenerator::default();
    let viewport = Viewport::new(1000.0, 500.0);
    assert!(gen.on_pointer(900.0, 50.0, viewport));
    let target = Vec2::new(0.9, 0.1);
    assert_eq!(gen.raw(), target);

    let mut prev = (gen.smoothed() - target).abs();
    for _ in 0..100 {
        gen.step();
        let d = (gen.smoothed() - target).abs();
        assert!(d.x <= prev.x && d.y <= prev.y, "distance grew: {prev:?} -> {d:?}");
        prev = d;
    }
    assert!(prev.x < 1e-3 && prev.y < 1e-3, "not converged: {prev:?}");
}

#[test]
fn one_step_moves_twelve_percent_of_the_way() {
    let mut gen = GradientGenerator::default();
    gen.on_pointer(0.0, 0.0, Viewport::new(100.0, 100.0));
    gen.step();
    let s = gen.smoothed();
    assert!(approx(s.x, 0.5 - 0.5 * 0.12));
    assert!(approx(s.y, 0.5 - 0.5 * 0.12));
}

#[test]
fn pointer_normalizes_by_viewport() {
    let v = normalize_pointer(250.0, 300.0, Viewport::new(1000.0, 600.0)).unwrap();
    assert!(approx(v.x, 0.25) && approx(v.y, 0.5));
    assert!(normalize_pointer(10.0, 10.0, Viewport::new(0.0, 600.0)).is_none());
}

#[test]
fn tilt_normalization_and_overshoot() {
    assert_eq!(normalize_tilt(-90.0, -180.0, false), Vec2::new(0.0, 0.0));
    assert_eq!(normalize_tilt(90.0, 180.0, false), Vec2::new(1.0, 1.0));
    assert_eq!(normalize_tilt(0.0, 0.0, false), Vec2::new(0.5, 0.5));

    let over = normalize_tilt(120.0, 0.0, false);
    assert!(over.x > 1.0);
    let clamped = normalize_tilt(120.0, -270.0, true);
    assert_eq!(clamped, Vec2::new(1.0, 0.0));
}

#[test]
fn tilt_latches_and_pointer_is_ignored_afterwards() {
    let mut gen = GradientGenerator::default();
    let viewport = Viewport::new(100.0, 100.0);
    assert_eq!(gen.source(), InputSource::PointerDriven);
    assert!(gen.on_pointer(10.0, 20.0, viewport));

    assert!(gen.on_tilt(Some(45.0), Some(-90.0)));
    assert_eq!(gen.source(), InputSource::TiltDriven);
    let tilt_raw = gen.raw();
    assert!(approx(tilt_raw.x, 0.75) && approx(tilt_raw.y, 0.25));

    assert!(!gen.on_pointer(90.0, 90.0, viewport));
    assert_eq!(gen.raw(), tilt_raw);
    assert_eq!(gen.source(), InputSource::TiltDriven);
}

#[test]
fn empty_orientation_event_does_not_latch() {
    let mut gen = GradientGenerator::default();
    assert!(!gen.on_tilt(None, None));
    assert_eq!(gen.source(), InputSource::PointerDriven);

    // A single missing angle reads as zero
    assert!(gen.on_tilt(Some(90.0), None));
    let raw = gen.raw();
    assert!(approx(raw.x, 1.0) && approx(raw.y, 0.5));
}

#[test]
fn latch_transitions_once() {
    let mut source = InputSource::default();
    assert!(source.latch_tilt());
    assert!(!source.latch_tilt());
    assert_eq!(source, InputSource::TiltDriven);
}

#[test]
fn clamp_option_bounds_tilt_samples() {
    let mut gen = GradientGenerator::new(GradientConfig {
        clamp_tilt: true,
        ..GradientConfig::default()
    });
    gen.on_tilt(Some(170.0), Some(400.0));
    assert_eq!(gen.raw(), Vec2::new(1.0, 1.0));
}
