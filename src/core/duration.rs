//! Human readable elapsed time.

use alloc::format;
use alloc::string::String;
use core::time::Duration;

/// Format a number of seconds, rounded to the nearest whole second with
/// halves going to the even neighbour (`2.5 => "2 seconds"`).
///
/// `5.0 => "5 seconds"`, `65.0 => "1 mins 5 seconds"`,
/// `3661.0 => "1 hours 1 minutes 1 seconds"`.
pub fn format_duration(seconds: f64) -> String {
    let rounded = libm::rint(seconds);
    let total = if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    };
    if total < 60 {
        format!("{} seconds", total)
    } else if total < 3600 {
        format!("{} mins {} seconds", total / 60, total % 60)
    } else {
        let hours = total / 3600;
        let rest = total % 3600;
        format!(
            "{} hours {} minutes {} seconds",
            hours,
            rest / 60,
            rest % 60
        )
    }
}

/// [`format_duration`] for a measured [`Duration`].
pub fn format_elapsed(elapsed: Duration) -> String {
    format_duration(elapsed.as_secs_f64())
}
