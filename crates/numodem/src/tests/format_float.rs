use alloc::format;

use crate::{ExpRadix, Radix, format_float, format_float_with};

#[test]
fn special_values_are_literals() {
    for radix in [Radix::Bin, Radix::Dec, Radix::Hex] {
        assert_eq!(format_float(f64::INFINITY, radix, false), "infinity");
        assert_eq!(format_float(f64::NEG_INFINITY, radix, false), "-infinity");
        assert_eq!(format_float(f64::NAN, radix, false), "nan");
        assert_eq!(format_float(-f64::NAN, radix, false), "-nan");
        assert_eq!(format_float(0.0, radix, false), "0");
        assert_eq!(format_float(-0.0, radix, false), "-0");
        // scientific layout makes no difference for specials
        assert_eq!(format_float(0.0, radix, true), "0");
    }
}

#[test]
fn decimal_is_shortest() {
    assert_eq!(format_float(0.1, Radix::Dec, false), "0.1");
    assert_eq!(format_float(1.5, Radix::Dec, false), "1.5");
    assert_eq!(format_float(-2.5, Radix::Dec, false), "-2.5");
    assert_eq!(format_float(5.0, Radix::Dec, false), "5");
    assert_eq!(format_float(100.0, Radix::Dec, false), "100");
    assert_eq!(format_float(12345.6789, Radix::Dec, false), "12345.6789");
    assert_eq!(format_float(255.5, Radix::Dec, false), "255.5");
}

#[test]
fn decimal_layout_cutoffs() {
    // seventeen integral digits switch to scientific form
    assert_eq!(format_float(1e16, Radix::Dec, false), "10000000000000000");
    assert_eq!(format_float(1e17, Radix::Dec, false), "1e+17");
    // four leading zeroes stay plain, five switch
    assert_eq!(format_float(1e-4, Radix::Dec, false), "0.0001");
    assert_eq!(format_float(1e-5, Radix::Dec, false), "1e-05");
}

#[test]
fn decimal_scientific() {
    assert_eq!(format_float(1.5, Radix::Dec, true), "1.5e+00");
    assert_eq!(format_float(0.1, Radix::Dec, true), "1e-01");
    assert_eq!(format_float(255.5, Radix::Dec, true), "2.555e+02");
    assert_eq!(format_float(f64::MAX, Radix::Dec, true), "1.7976931348623157e+308");
    assert_eq!(format_float(f64::from_bits(1), Radix::Dec, true), "5e-324");
}

#[test]
fn binary_is_exact() {
    assert_eq!(format_float(5.0, Radix::Bin, false), "0b101");
    assert_eq!(format_float(-5.0, Radix::Bin, false), "-0b101");
    assert_eq!(format_float(0.75, Radix::Bin, false), "0b0.11");
    assert_eq!(format_float(0.5, Radix::Bin, false), "0b0.1");
    assert_eq!(format_float(5.0, Radix::Bin, true), "0b1.01p+02");
    // fifty-three integral binary digits switch to scientific form
    assert_eq!(
        format_float(4503599627370496.0, Radix::Bin, false), // 2^52
        format!("0b1{}", "0".repeat(52))
    );
    assert_eq!(format_float(9007199254740992.0, Radix::Bin, false), "0b1p+53");
    assert_eq!(format_float(f64::from_bits(1), Radix::Bin, false), "0b1p-1074");
}

#[test]
fn hexadecimal_is_exact() {
    assert_eq!(format_float(1.0, Radix::Hex, false), "0x1");
    assert_eq!(format_float(0.5, Radix::Hex, false), "0x0.8");
    assert_eq!(format_float(255.5, Radix::Hex, false), "0xFF.8");
    assert_eq!(format_float(-2.5, Radix::Hex, false), "-0x2.8");
    assert_eq!(format_float(0.0009765625, Radix::Hex, false), "0x0.004"); // 2^-10
    assert_eq!(format_float(436207616.0, Radix::Hex, true), "0x1.Ap+28");
    assert_eq!(format_float(72057594037927936.0, Radix::Hex, false), "0x1p+56"); // 2^56
    assert_eq!(format_float(0.1, Radix::Hex, false), "0x0.1999999999999A");
}

#[test]
fn decimal_digits_with_binary_exponent() {
    assert_eq!(format_float_with(12.0, Radix::Dec, Some(ExpRadix::Bin)), "1.5p+03");
    assert_eq!(format_float_with(0.1, Radix::Dec, Some(ExpRadix::Bin)), "1.6p-04");
    assert_eq!(format_float_with(1.0, Radix::Dec, Some(ExpRadix::Bin)), "1p+00");
}

#[test]
#[should_panic(expected = "binary exponent")]
fn decimal_exponent_on_binary_is_a_contract_violation() {
    let _ = format_float_with(1.0, Radix::Bin, Some(ExpRadix::Dec));
}
