// Reference configuration literals and ramp arithmetic.

use hero_core::constants::*;
use hero_core::{EngineConfig, Ramp};

#[test]
fn tuning_literals_match_the_shipped_behavior() {
    assert_eq!(DAMPING_DESKTOP, 0.08);
    assert_eq!(DAMPING_MOBILE, 0.2);
    assert_eq!(SNAP_EPSILON, 1e-4);
    assert_eq!(MOBILE_BREAKPOINT_PX, 768.0);
    assert_eq!(SLIDE_MAX_PX, 20.0);
    assert_eq!(FLOAT_LIFT_PX, 200.0);
    assert_eq!(FLOAT_PARALLAX_UNIT_PX, 50.0);
    assert_eq!(FLOAT_TURN_DEG, 360.0);
}

#[test]
fn default_config_passes_validation() {
    assert!(EngineConfig::default().validate().is_ok());
}

#[test]
fn reference_table_carries_the_exact_breakpoints() {
    let scenes = EngineConfig::default().scenes;
    assert_eq!(scenes.len(), 4);

    // Scene 0: base layer; caption gone by a quarter of the scroll.
    assert_eq!(scenes[0].entry, None);
    assert_eq!(scenes[0].text_in, None);
    assert_eq!(scenes[0].text_out, Some(Ramp::new(0.0, 0.25)));
    assert_eq!(scenes[0].zoom_span, 0.0);

    assert_eq!(scenes[1].entry, Some(Ramp::new(0.15, 0.25)));
    assert_eq!(scenes[1].text_in, Some(Ramp::new(0.35, 0.45)));
    assert_eq!(scenes[1].text_out, Some(Ramp::new(0.50, 0.60)));

    assert_eq!(scenes[2].entry, Some(Ramp::new(0.50, 0.60)));
    assert_eq!(scenes[2].text_in, Some(Ramp::new(0.60, 0.70)));
    assert_eq!(scenes[2].text_out, None);

    assert_eq!(scenes[3].entry, Some(Ramp::new(0.75, 0.85)));
    assert_eq!(scenes[3].text_in, Some(Ramp::new(0.85, 0.95)));
    assert_eq!(scenes[3].text_out, None);

    for timing in &scenes {
        assert_eq!(timing.scale_base, SCENE_SCALE_BASE);
    }
    for timing in &scenes[1..] {
        assert_eq!(timing.zoom_span, SCENE_ZOOM_SPAN);
    }
}

#[test]
fn ramp_rise_is_clamped_linear_interpolation() {
    let r = Ramp::new(0.2, 0.6);
    assert_eq!(r.rise(0.0), 0.0);
    assert_eq!(r.rise(0.2), 0.0);
    assert!((r.rise(0.4) - 0.5).abs() < 1e-6);
    assert_eq!(r.rise(0.6), 1.0);
    assert_eq!(r.rise(1.0), 1.0);
}

#[test]
fn ramp_fall_complements_rise() {
    let r = Ramp::new(0.1, 0.9);
    for step in 0..=20 {
        let p = step as f32 / 20.0;
        assert!((r.rise(p) + r.fall(p) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn zero_width_ramp_degenerates_to_a_step() {
    let r = Ramp::new(0.5, 0.5);
    assert_eq!(r.rise(0.49), 0.0);
    assert_eq!(r.rise(0.5), 1.0);
    assert_eq!(r.rise(0.51), 1.0);
}
