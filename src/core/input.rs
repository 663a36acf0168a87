//! Validation of raw coordinate and symbol-count tokens.

use crate::core::common::{Axis, InputError};
use crate::core::config::{MAX_SYMBOLS, MAX_TOKEN_DIGITS, MIN_SYMBOLS};
use crate::core::layout::Dimensions;

fn parse_digits(token: &str, max_digits: usize) -> Result<usize, InputError> {
    if token.is_empty() {
        return Err(InputError::Empty);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    if token.len() > max_digits {
        return Err(InputError::TooLong);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

/// Exclusive upper bound for coordinates on `axis`.
pub fn axis_bound(axis: Axis, dims: Dimensions) -> usize {
    match axis {
        Axis::Row => dims.rows,
        Axis::Column => dims.cols,
    }
}

/// Parse a coordinate and check it against `axis`. Two digits are only
/// allowed when the axis has ten or more cells, so `"03"` is rejected on a
/// four-wide axis.
pub fn parse_coordinate(token: &str, axis: Axis, dims: Dimensions) -> Result<usize, InputError> {
    let max = axis_bound(axis, dims);
    let max_digits = if max >= 10 { MAX_TOKEN_DIGITS } else { 1 };
    let value = parse_digits(token, max_digits)?;
    if value >= max {
        return Err(InputError::OutOfRange { value, min: 0, max });
    }
    Ok(value)
}

/// Returns `true` when `token` names a valid index on `axis`.
pub fn is_acceptable(token: &str, axis: Axis, dims: Dimensions) -> bool {
    parse_coordinate(token, axis, dims).is_ok()
}

/// Parse the number of pairs to play with, `1..=26`.
pub fn parse_symbol_count(token: &str) -> Result<usize, InputError> {
    let value = parse_digits(token, MAX_TOKEN_DIGITS)?;
    if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&value) {
        return Err(InputError::OutOfRange {
            value,
            min: MIN_SYMBOLS,
            max: MAX_SYMBOLS + 1,
        });
    }
    Ok(value)
}
