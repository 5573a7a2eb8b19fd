//! Concrete codec cases exercised through the public API.

use numodem::{Radix, format_float, format_integer, parse_integer, parse_real};
use rstest::rstest;

#[rstest]
#[case(255, Radix::Hex, "0xFF")]
#[case(-1, Radix::Bin, "-0b1")]
#[case(0, Radix::Dec, "0")]
#[case(i64::MIN, Radix::Dec, "-9223372036854775808")]
#[case(i64::MAX, Radix::Hex, "0x7FFFFFFFFFFFFFFF")]
fn formats_integers(#[case] value: i64, #[case] radix: Radix, #[case] expected: &str) {
    assert_eq!(format_integer(value, radix, 1), expected);
}

#[rstest]
#[case(0.1, false, "0.1")]
#[case(1e17, false, "1e+17")]
#[case(-0.0, false, "-0")]
#[case(1.5, true, "1.5e+00")]
#[case(f64::INFINITY, false, "infinity")]
fn formats_decimal_floats(#[case] value: f64, #[case] scientific: bool, #[case] expected: &str) {
    assert_eq!(format_float(value, Radix::Dec, scientific), expected);
}

#[rstest]
#[case("0x1A", Some(26))]
#[case("42", Some(42))]
#[case("-0b101", Some(-5))]
#[case("1e3", Some(1000))]
#[case("99999999999999999999", None)]
#[case("1e-3", None)]
#[case("", None)]
fn parses_integers(#[case] text: &str, #[case] expected: Option<i64>) {
    assert_eq!(parse_integer(text), expected);
}

#[rstest]
#[case("1.5e2", false, Some(150.0))]
#[case("infinity", false, Some(f64::INFINITY))]
#[case("-infinity", true, Some(f64::NEG_INFINITY))]
#[case("1e400", false, None)]
#[case("1e400", true, Some(f64::INFINITY))]
#[case("0x1.8", false, Some(1.5))]
#[case("0b1.1p3", false, Some(12.0))]
fn parses_reals(#[case] text: &str, #[case] saturating: bool, #[case] expected: Option<f64>) {
    assert_eq!(parse_real(text, saturating), expected);
}

#[rstest]
#[case(0.5)]
#[case(-0.1)]
#[case(3.141592653589793)]
#[case(6.02214076e23)]
#[case(f64::MAX)]
#[case(f64::MIN_POSITIVE)]
fn decimal_round_trip(#[case] value: f64) {
    for scientific in [false, true] {
        let text = format_float(value, Radix::Dec, scientific);
        assert_eq!(
            parse_real(&text, false).map(f64::to_bits),
            Some(value.to_bits()),
            "{text}"
        );
    }
}
