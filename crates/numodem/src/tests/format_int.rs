use alloc::format;

use crate::{ExpRadix, Radix, format_integer, format_integer_with, format_unsigned};

#[test]
fn plain_bases() {
    assert_eq!(format_integer(255, Radix::Hex, 1), "0xFF");
    assert_eq!(format_integer(-1, Radix::Bin, 1), "-0b1");
    assert_eq!(format_integer(0, Radix::Dec, 1), "0");
    assert_eq!(format_integer(1234567890, Radix::Dec, 1), "1234567890");
    assert_eq!(format_unsigned(5, Radix::Bin, 1), "0b101");
    assert_eq!(format_unsigned(u64::MAX, Radix::Dec, 1), "18446744073709551615");
    assert_eq!(format_unsigned(u64::MAX, Radix::Hex, 1), "0xFFFFFFFFFFFFFFFF");
}

#[test]
fn extreme_magnitudes_do_not_overflow() {
    assert_eq!(format_integer(i64::MIN, Radix::Dec, 1), "-9223372036854775808");
    assert_eq!(format_integer(i64::MIN, Radix::Hex, 1), "-0x8000000000000000");
    assert_eq!(format_integer(i64::MAX, Radix::Dec, 1), "9223372036854775807");
}

#[test]
fn minimum_width_pads_with_zeroes() {
    assert_eq!(format_integer(7, Radix::Dec, 3), "007");
    assert_eq!(format_integer(-7, Radix::Hex, 4), "-0x0007");
    assert_eq!(format_integer(255, Radix::Hex, 2), "0xFF");
    // width zero still renders one digit
    assert_eq!(format_integer(0, Radix::Dec, 0), "0");
    // widths beyond the worst-case digit count keep padding
    assert_eq!(
        format_unsigned(1, Radix::Bin, 70),
        format!("0b{}1", "0".repeat(69))
    );
}

#[test]
fn scientific_layout_decomposes_exactly() {
    assert_eq!(format_integer_with(256, Radix::Bin, Some(ExpRadix::Bin)), "0b1p+08");
    assert_eq!(format_integer_with(1000, Radix::Dec, Some(ExpRadix::Dec)), "1e+03");
    assert_eq!(format_integer_with(1000, Radix::Dec, Some(ExpRadix::Bin)), "125p+03");
    assert_eq!(format_integer_with(-96, Radix::Dec, Some(ExpRadix::Bin)), "-3p+05");
    assert_eq!(format_integer_with(255, Radix::Hex, Some(ExpRadix::Bin)), "0xFFp+00");
    assert_eq!(format_integer_with(0, Radix::Dec, Some(ExpRadix::Dec)), "0e+00");
    assert_eq!(format_integer_with(26, Radix::Dec, None), "26");
}

#[test]
#[should_panic(expected = "binary exponent")]
fn decimal_exponent_on_hex_is_a_contract_violation() {
    let _ = format_integer_with(255, Radix::Hex, Some(ExpRadix::Dec));
}
