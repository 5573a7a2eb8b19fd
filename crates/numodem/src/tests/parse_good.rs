use crate::{parse_integer, parse_real};

#[test]
fn integers_in_all_bases() {
    assert_eq!(parse_integer("0"), Some(0));
    assert_eq!(parse_integer("42"), Some(42));
    assert_eq!(parse_integer("+42"), Some(42));
    assert_eq!(parse_integer("-42"), Some(-42));
    assert_eq!(parse_integer("0x1A"), Some(26));
    assert_eq!(parse_integer("0X1a"), Some(26));
    assert_eq!(parse_integer("0b101"), Some(5));
    assert_eq!(parse_integer("  0xFF  "), Some(255));
}

#[test]
fn integer_boundaries() {
    assert_eq!(parse_integer("9223372036854775807"), Some(i64::MAX));
    assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
    assert_eq!(parse_integer("0x7FFFFFFFFFFFFFFF"), Some(i64::MAX));
    assert_eq!(parse_integer("-0x8000000000000000"), Some(i64::MIN));
}

#[test]
fn integer_exponents() {
    assert_eq!(parse_integer("1e3"), Some(1000));
    assert_eq!(parse_integer("1p10"), Some(1024));
    assert_eq!(parse_integer("5e+0"), Some(5));
    // a zero significand ignores the exponent entirely
    assert_eq!(parse_integer("0e7"), Some(0));
}

#[test]
fn digit_separators() {
    assert_eq!(parse_integer("1`000`000"), Some(1_000_000));
    assert_eq!(parse_integer("0xFF`FF"), Some(0xFFFF));
    // a separator may trail the final digit
    assert_eq!(parse_integer("1`"), Some(1));
    assert_eq!(parse_real("1`2`3.4`5", false), Some(123.45));
}

#[test]
fn reals_in_all_bases() {
    assert_eq!(parse_real("1.5", false), Some(1.5));
    assert_eq!(parse_real("1.5e2", false), Some(150.0));
    assert_eq!(parse_real("-2.5", false), Some(-2.5));
    assert_eq!(parse_real("0.1", false), Some(0.1));
    assert_eq!(parse_real("0x1.8", false), Some(1.5));
    assert_eq!(parse_real("0b1.1p3", false), Some(12.0));
    assert_eq!(parse_real("0x1.Ap+28", false), Some(436207616.0));
    // a decimal exponent may scale a binary significand
    assert_eq!(parse_real("0b1e5", false), Some(100000.0));
    assert_eq!(parse_real("1e-5", false), Some(1e-5));
}

#[test]
fn special_literals() {
    assert_eq!(parse_real("infinity", false), Some(f64::INFINITY));
    assert_eq!(parse_real("INFINITY", false), Some(f64::INFINITY));
    assert_eq!(parse_real("-Infinity", false), Some(f64::NEG_INFINITY));
    assert!(parse_real("nan", false).is_some_and(f64::is_nan));
    let negative_nan = parse_real("-NaN", false).unwrap();
    assert!(negative_nan.is_nan() && negative_nan.is_sign_negative());
}

#[test]
fn signed_zeroes_survive() {
    assert_eq!(parse_real("0", false).map(f64::to_bits), Some(0.0_f64.to_bits()));
    assert_eq!(parse_real("-0", false).map(f64::to_bits), Some((-0.0_f64).to_bits()));
    assert_eq!(parse_real("-0.0", false).map(f64::to_bits), Some((-0.0_f64).to_bits()));
    // underflow to zero keeps the sign and is not an error
    assert_eq!(parse_real("1e-400", false), Some(0.0));
    assert_eq!(parse_real("-1e-400", false).map(f64::to_bits), Some((-0.0_f64).to_bits()));
}

#[test]
fn real_boundaries() {
    assert_eq!(parse_real("1.7976931348623157e308", false), Some(f64::MAX));
    assert_eq!(parse_real("5e-324", false), Some(f64::from_bits(1)));
    assert_eq!(parse_real("2.2250738585072014e-308", false), Some(f64::MIN_POSITIVE));
    assert_eq!(parse_real("1e400", true), Some(f64::INFINITY));
    assert_eq!(parse_real("-1e400", true), Some(f64::NEG_INFINITY));
}

#[test]
fn excess_precision_is_dropped_not_rejected() {
    assert_eq!(
        parse_real("3.14159265358979323846264338327950288", false),
        Some(3.14159265358979323846264338327950288)
    );
    assert_eq!(
        parse_real("0.333333333333333333333333333333", false),
        Some(0.333333333333333333333333333333)
    );
}
