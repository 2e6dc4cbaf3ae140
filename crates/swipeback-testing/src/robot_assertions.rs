//! Assertion utilities for robot testing

use swipeback_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that an offset sequence never moves away from `target`.
pub fn assert_monotonic_toward(offsets: &[i32], target: i32, msg: &str) {
    for pair in offsets.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert!(
            (target - after).abs() <= (target - before).abs(),
            "{}: {} -> {} moved away from {} in {:?}",
            msg,
            before,
            after,
            target,
            offsets
        );
    }
}
