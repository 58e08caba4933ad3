// Unit tests for parameter bounds

use super::*;

#[test]
fn test_bounds_are_inclusive() {
    let bounds = Bounds::new(-100.0, 0.0);
    assert!(bounds.contains(-100.0));
    assert!(bounds.contains(0.0));
    assert!(bounds.contains(-45.0));
    assert!(!bounds.contains(0.5));
    assert!(!bounds.contains(-100.5));
}

#[test]
fn test_nan_is_out_of_bounds() {
    assert!(!Bounds::new(0.001, 10.0).contains(f64::NAN));
}

#[test]
fn test_range_violation_message_for_decibels() {
    let message = range_violation(
        "Silence threshold",
        5.0,
        Unit::Decibels,
        Bounds::new(-100.0, 0.0),
    );
    assert_eq!(
        message.as_deref(),
        Some("Silence threshold (5 dB) must be between -100 dB and 0 dB.")
    );
}

#[test]
fn test_range_violation_message_for_seconds() {
    let message = range_violation(
        "Minimum silence duration",
        12.5,
        Unit::Seconds,
        Bounds::new(0.001, 10.0),
    );
    assert_eq!(
        message.as_deref(),
        Some("Minimum silence duration (12.5s) must be between 0.001s and 10s.")
    );
}

#[test]
fn test_in_range_value_has_no_violation() {
    assert!(range_violation("x", 0.1, Unit::Seconds, Bounds::new(0.001, 10.0)).is_none());
}

#[test]
fn test_bounds_check_collects_every_violation() {
    let seconds = Bounds::new(0.001, 10.0);
    let mut check = BoundsCheck::new();
    check
        .check("a", 20.0, Unit::Seconds, seconds)
        .check("b", 1.0, Unit::Seconds, seconds)
        .check_opt("c", Some(0.0), Unit::Seconds, seconds)
        .check_opt("d", None, Unit::Seconds, seconds);

    assert!(!check.is_ok());
    assert_eq!(check.violations().len(), 2);
    assert!(check.violations()[0].starts_with("a (20s)"));
    assert!(check.violations()[1].starts_with("c (0s)"));
}

#[test]
fn test_positive_check_rejects_zero_negative_and_nan() {
    let mut check = BoundsCheck::new();
    check
        .check_positive("size", 500.0, Unit::Megabytes)
        .check_positive("size", 0.0, Unit::Megabytes)
        .check_positive("size", -1.0, Unit::Megabytes)
        .check_positive("timeout", f64::NAN, Unit::Seconds);

    assert_eq!(
        check.violations(),
        [
            "size (0 MB) must be greater than 0.",
            "size (-1 MB) must be greater than 0.",
            "timeout (NaNs) must be greater than 0.",
        ]
    );
}
