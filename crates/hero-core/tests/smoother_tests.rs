// Convergence properties of the first-order progress filter.

use hero_core::constants::{DAMPING_DESKTOP, DAMPING_MOBILE, SNAP_EPSILON};
use hero_core::ProgressSmoother;

fn frames_until_converged(smoother: &mut ProgressSmoother, target: f32, damping: f32) -> u32 {
    let mut frames = 0;
    while !smoother.converged(target) {
        smoother.step(target, damping);
        frames += 1;
        assert!(frames < 1000, "filter failed to converge within 1000 frames");
    }
    frames
}

#[test]
fn held_target_converges_within_bounded_frames_desktop() {
    let mut s = ProgressSmoother::new(SNAP_EPSILON);
    let frames = frames_until_converged(&mut s, 1.0, DAMPING_DESKTOP);
    // 0.92^n <= 1e-4 needs ~111 damped steps plus the snap.
    assert!(frames <= 130, "took {frames} frames");
    assert_eq!(s.current(), 1.0);
}

#[test]
fn held_target_converges_within_bounded_frames_mobile() {
    let mut s = ProgressSmoother::new(SNAP_EPSILON);
    let frames = frames_until_converged(&mut s, 1.0, DAMPING_MOBILE);
    // 0.8^n <= 1e-4 needs ~42 damped steps plus the snap.
    assert!(frames <= 50, "took {frames} frames");
    assert_eq!(s.current(), 1.0);
}

#[test]
fn mobile_damping_converges_faster_than_desktop() {
    let mut desktop = ProgressSmoother::new(SNAP_EPSILON);
    let mut mobile = ProgressSmoother::new(SNAP_EPSILON);
    let desktop_frames = frames_until_converged(&mut desktop, 0.7, DAMPING_DESKTOP);
    let mobile_frames = frames_until_converged(&mut mobile, 0.7, DAMPING_MOBILE);
    assert!(mobile_frames < desktop_frames);
}

#[test]
fn approach_from_below_is_monotone_and_never_overshoots() {
    let mut s = ProgressSmoother::new(SNAP_EPSILON);
    let target = 0.9;
    let mut prev = s.current();
    for _ in 0..500 {
        let cur = s.step(target, DAMPING_DESKTOP);
        assert!(cur >= prev, "value moved backwards: {prev} -> {cur}");
        assert!(cur <= target, "overshot the target: {cur}");
        prev = cur;
    }
    assert_eq!(s.current(), target);
}

#[test]
fn approach_from_above_is_monotone_and_never_overshoots() {
    let mut s = ProgressSmoother::new(SNAP_EPSILON);
    frames_until_converged(&mut s, 1.0, DAMPING_MOBILE);

    let target = 0.2;
    let mut prev = s.current();
    for _ in 0..500 {
        let cur = s.step(target, DAMPING_DESKTOP);
        assert!(cur <= prev, "value moved backwards: {prev} -> {cur}");
        assert!(cur >= target, "overshot the target: {cur}");
        prev = cur;
    }
    assert_eq!(s.current(), target);
}

// Simulated fast scroll: the target jumps discontinuously from 0.1 to 0.9.
#[test]
fn discontinuous_target_jump_stays_below_new_target() {
    let mut s = ProgressSmoother::new(SNAP_EPSILON);
    frames_until_converged(&mut s, 0.1, DAMPING_DESKTOP);
    assert_eq!(s.current(), 0.1);

    let mut prev = s.current();
    for _ in 0..500 {
        let cur = s.step(0.9, DAMPING_DESKTOP);
        assert!(cur >= prev);
        assert!(cur <= 0.9);
        prev = cur;
    }
    assert!(s.converged(0.9));
    assert_eq!(s.current(), 0.9);
}

#[test]
fn snaps_exactly_onto_target_inside_epsilon_band() {
    let mut s = ProgressSmoother::new(SNAP_EPSILON);
    let target = 0.5;
    for _ in 0..1000 {
        s.step(target, DAMPING_DESKTOP);
    }
    // Bitwise equal, not merely close: the filter snaps rather than decaying
    // forever.
    assert_eq!(s.current(), target);
}
