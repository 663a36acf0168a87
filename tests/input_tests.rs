use memory_match::{
    is_acceptable, parse_coordinate, parse_symbol_count, Axis, Dimensions, InputError,
};

const SMALL: Dimensions = Dimensions::new(2, 4);
const WIDE: Dimensions = Dimensions::new(4, 13);

#[test]
fn test_rejects_empty_token() {
    assert!(!is_acceptable("", Axis::Row, SMALL));
    assert_eq!(parse_coordinate("", Axis::Column, SMALL), Err(InputError::Empty));
}

#[test]
fn test_rejects_non_digits() {
    for token in ["a", "1a", "-1", " 1", "1.0", "x9"] {
        assert!(!is_acceptable(token, Axis::Row, WIDE), "token {:?}", token);
        assert!(!is_acceptable(token, Axis::Column, WIDE), "token {:?}", token);
    }
}

#[test]
fn test_rejects_three_digit_tokens() {
    assert_eq!(parse_coordinate("001", Axis::Column, WIDE), Err(InputError::TooLong));
}

#[test]
fn test_bounds_follow_axis() {
    assert!(is_acceptable("1", Axis::Row, SMALL));
    assert!(!is_acceptable("2", Axis::Row, SMALL));
    assert!(is_acceptable("3", Axis::Column, SMALL));
    assert!(!is_acceptable("4", Axis::Column, SMALL));
    assert_eq!(
        parse_coordinate("4", Axis::Column, SMALL),
        Err(InputError::OutOfRange { value: 4, min: 0, max: 4 })
    );
}

#[test]
fn test_accepts_two_digit_columns() {
    assert_eq!(parse_coordinate("12", Axis::Column, WIDE), Ok(12));
    assert_eq!(parse_coordinate("10", Axis::Column, WIDE), Ok(10));
    assert!(!is_acceptable("13", Axis::Column, WIDE));
    assert!(!is_acceptable("10", Axis::Row, WIDE));
}

#[test]
fn test_accepts_every_in_range_value() {
    for col in 0..WIDE.cols {
        assert!(is_acceptable(&col.to_string(), Axis::Column, WIDE));
    }
    assert_eq!(parse_coordinate("03", Axis::Column, WIDE), Ok(3));
}

#[test]
fn test_two_digits_need_a_ten_wide_axis() {
    assert!(!is_acceptable("03", Axis::Column, SMALL));
    assert!(!is_acceptable("00", Axis::Row, SMALL));
    assert_eq!(parse_coordinate("03", Axis::Row, WIDE), Err(InputError::TooLong));
    assert!(is_acceptable("3", Axis::Row, WIDE));
}

#[test]
fn test_symbol_count() {
    assert_eq!(parse_symbol_count("1"), Ok(1));
    assert_eq!(parse_symbol_count("26"), Ok(26));
    assert_eq!(parse_symbol_count(""), Err(InputError::Empty));
    assert_eq!(parse_symbol_count("ten"), Err(InputError::NotANumber));
    assert_eq!(parse_symbol_count("100"), Err(InputError::TooLong));
    assert!(matches!(
        parse_symbol_count("0"),
        Err(InputError::OutOfRange { value: 0, .. })
    ));
    assert!(matches!(
        parse_symbol_count("27"),
        Err(InputError::OutOfRange { value: 27, .. })
    ));
}
