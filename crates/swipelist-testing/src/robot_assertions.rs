//! Assertion utilities for gesture tests

use swipelist_animation::RowTransform;

/// Assert that a value is within an expected range.
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

/// Assert that a row transform is approximately equal to another.
pub fn assert_transform_approx_eq(
    actual: RowTransform,
    expected: RowTransform,
    tolerance: f32,
    msg: &str,
) {
    assert_approx_eq(
        actual.translation_x,
        expected.translation_x,
        tolerance,
        &format!("{} - translation_x", msg),
    );
    assert_approx_eq(
        actual.alpha,
        expected.alpha,
        tolerance,
        &format!("{} - alpha", msg),
    );
}
