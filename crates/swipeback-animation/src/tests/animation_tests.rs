use super::*;

const EASINGS: [Easing; 3] = [
    Easing::FastOutSlowInEasing,
    Easing::LinearOutSlowInEasing,
    Easing::FastOutLinearEasing,
];

#[test]
fn easing_bounds_are_correct() {
    for easing in EASINGS {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!((end - 1.0).abs() < 0.01, "End should be ~1 for {:?}", easing);
    }
}

#[test]
fn easing_is_monotonic() {
    for easing in EASINGS {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = easing.transform(step as f32 / 20.0);
            assert!(value + 1e-4 >= previous, "{:?} went backwards", easing);
            previous = value;
        }
    }
}

#[test]
fn fade_in_leads_fade_out_at_midpoint() {
    let fade_in = Easing::LinearOutSlowInEasing.transform(0.5);
    let fade_out = Easing::FastOutLinearEasing.transform(0.5);
    assert!(fade_in > 0.5, "fade in {fade_in}");
    assert!(fade_out < 0.5, "fade out {fade_out}");
}

#[test]
fn spec_progress_respects_delay() {
    let spec = AnimationSpec::tween(100, Easing::FastOutSlowInEasing).with_delay(50);
    assert_eq!(spec.progress(0), 0.0);
    assert_eq!(spec.progress(50), 0.0);
    let midway = spec.progress(100);
    assert!(midway > 0.0 && midway < 1.0);
    assert_eq!(spec.progress(500), 1.0);
    assert!(!spec.is_finished(149));
    assert!(spec.is_finished(150));
}

#[test]
fn zero_duration_spec_jumps_to_end() {
    let spec = AnimationSpec::tween(0, Easing::FastOutSlowInEasing);
    assert_eq!(spec.progress(0), 0.0);
    assert_eq!(spec.progress(1), 1.0);
    assert!(spec.is_finished(0));
}

#[test]
fn lerp_interpolates() {
    assert_eq!(0.0f32.lerp(&10.0, 0.25), 2.5);
    assert_eq!((-400.0f32).lerp(&0.0, 0.5), -200.0);
}
