//! Snapshot of the formatting grid across bases and layouts.

use std::fmt::Write;

use numodem::{Radix, format_float};

fn grid(values: &[f64]) -> String {
    let mut out = String::new();
    for &value in values {
        writeln!(
            out,
            "{} | {} | {}",
            format_float(value, Radix::Dec, false),
            format_float(value, Radix::Dec, true),
            format_float(value, Radix::Hex, false),
        )
        .unwrap();
    }
    out
}

#[test]
fn float_formatting_grid() {
    let values = [
        0.0,
        -0.0,
        1.5,
        -2.5,
        255.5,
        0.1,
        1e17,
        1e-5,
        f64::MAX,
        f64::from_bits(1),
        f64::INFINITY,
    ];
    insta::assert_snapshot!(grid(&values), @r"
    0 | 0 | 0
    -0 | -0 | -0
    1.5 | 1.5e+00 | 0x1.8
    -2.5 | -2.5e+00 | -0x2.8
    255.5 | 2.555e+02 | 0xFF.8
    0.1 | 1e-01 | 0x0.1999999999999A
    1e+17 | 1e+17 | 0x1.6345785D8Ap+56
    1e-05 | 1e-05 | 0xA.7C5AC471B4788p-20
    1.7976931348623157e+308 | 1.7976931348623157e+308 | 0xF.FFFFFFFFFFFF8p+1020
    5e-324 | 5e-324 | 0x4p-1076
    infinity | infinity | infinity
    ");
}
