use crate::{ParseNumberError, parse_integer, parse_real, try_parse_integer, try_parse_real};

#[test]
fn empty_and_blank_input() {
    assert_eq!(try_parse_integer(""), Err(ParseNumberError::Empty));
    assert_eq!(try_parse_integer("   "), Err(ParseNumberError::Empty));
    assert_eq!(try_parse_real("\t\n", false), Err(ParseNumberError::Empty));
}

#[test]
fn missing_digits() {
    assert_eq!(try_parse_integer("abc"), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_integer("+"), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_integer("0x"), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_integer("0b2"), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_integer("--1"), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_real(".5", false), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_real("1..2", false), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_real("1e", false), Err(ParseNumberError::MissingDigits));
    assert_eq!(try_parse_real("0x1.8p", false), Err(ParseNumberError::MissingDigits));
}

#[test]
fn trailing_text() {
    assert_eq!(try_parse_integer("1 2"), Err(ParseNumberError::TrailingText));
    // integers have no fractional part
    assert_eq!(try_parse_integer("12.5"), Err(ParseNumberError::TrailingText));
    assert_eq!(try_parse_real("1.5x", false), Err(ParseNumberError::TrailingText));
    assert_eq!(try_parse_real("infinity!", false), Err(ParseNumberError::TrailingText));
    assert_eq!(try_parse_real("nan0", false), Err(ParseNumberError::TrailingText));
    // two separators in a row end the digit run
    assert_eq!(try_parse_integer("1``2"), Err(ParseNumberError::TrailingText));
}

#[test]
fn bad_special_literals() {
    assert_eq!(try_parse_real("inf", false), Err(ParseNumberError::BadLiteral));
    assert_eq!(try_parse_real("-in", false), Err(ParseNumberError::BadLiteral));
    assert_eq!(try_parse_real("na", false), Err(ParseNumberError::BadLiteral));
    assert_eq!(parse_real("infini", false), None);
}

#[test]
fn integer_overflow() {
    assert_eq!(parse_integer("99999999999999999999"), None);
    assert_eq!(
        try_parse_integer("9223372036854775808"),
        Err(ParseNumberError::IntegerOverflow)
    );
    assert_eq!(try_parse_integer("-9223372036854775809"), Err(ParseNumberError::IntegerOverflow));
    assert_eq!(try_parse_integer("1e19"), Err(ParseNumberError::IntegerOverflow));
    // the exponent accumulator itself is clamped to 24 bits
    assert_eq!(try_parse_integer("1e99999999"), Err(ParseNumberError::ExponentOverflow));
}

#[test]
fn negative_integer_exponents() {
    assert_eq!(try_parse_integer("1e-3"), Err(ParseNumberError::NegativeExponent));
    // rejected even when the significand is zero
    assert_eq!(try_parse_integer("0e-1"), Err(ParseNumberError::NegativeExponent));
}

#[test]
fn real_overflow_without_saturation() {
    assert_eq!(try_parse_real("1e400", false), Err(ParseNumberError::RealOverflow));
    assert_eq!(try_parse_real("1e309", false), Err(ParseNumberError::RealOverflow));
    assert_eq!(try_parse_real("-1e400", false), Err(ParseNumberError::RealOverflow));
    // an explicit infinity is never an overflow
    assert_eq!(try_parse_real("infinity", false), Ok(f64::INFINITY));
}
