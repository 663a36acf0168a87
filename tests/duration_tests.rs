use memory_match::{format_duration, format_elapsed};
use std::time::Duration;

#[test]
fn test_seconds_only() {
    assert_eq!(format_duration(5.0), "5 seconds");
    assert_eq!(format_duration(0.0), "0 seconds");
    assert_eq!(format_duration(59.4), "59 seconds");
}

#[test]
fn test_minutes() {
    assert_eq!(format_duration(65.0), "1 mins 5 seconds");
    assert_eq!(format_duration(60.0), "1 mins 0 seconds");
    assert_eq!(format_duration(3599.0), "59 mins 59 seconds");
}

#[test]
fn test_hours() {
    assert_eq!(format_duration(3661.0), "1 hours 1 minutes 1 seconds");
    assert_eq!(format_duration(3600.0), "1 hours 0 minutes 0 seconds");
    assert_eq!(format_duration(7325.0), "2 hours 2 minutes 5 seconds");
}

#[test]
fn test_rounds_to_nearest_second() {
    assert_eq!(format_duration(4.6), "5 seconds");
    assert_eq!(format_duration(59.6), "1 mins 0 seconds");
    assert_eq!(format_duration(-3.0), "0 seconds");
}

#[test]
fn test_halves_round_to_even() {
    assert_eq!(format_duration(2.5), "2 seconds");
    assert_eq!(format_duration(3.5), "4 seconds");
    assert_eq!(format_duration(64.5), "1 mins 4 seconds");
}

#[test]
fn test_elapsed_duration() {
    assert_eq!(format_elapsed(Duration::from_millis(65_400)), "1 mins 5 seconds");
}
