//! Shortest-round-trip decimal digit generation.
//!
//! Implements the Schubfach algorithm (Raffaello Giulietti, "The Schubfach
//! way to render doubles", 2020): the rounding interval of the double is
//! scaled by a 128-bit power of ten with round-to-odd multiplies, and the
//! shortest decimal value inside the interval is selected. The result
//! always parses back to the identical double, uses the fewest possible
//! digits, and among equally short candidates is the closest one.

use crate::{ieee, pow10};

/// A positive finite double in decimal form: `digits * 10^exponent`.
pub(crate) struct DecimalParts {
    pub digits: u64,
    pub exponent: i32,
}

/// Decompose a positive finite non-zero double into its shortest decimal
/// form. `digits` may carry trailing zeroes; the emitter strips them.
pub(crate) fn shortest_decimal(bits: u64) -> DecimalParts {
    let (fraction, field) = ieee::raw_parts(bits);
    let c: u64;
    let q: i32;
    if field != 0 {
        c = ieee::HIDDEN_BIT | fraction;
        q = field as i32 - ieee::EXPONENT_BIAS;
        // Integral values convert exactly.
        if 0 <= -q && -q < 53 && multiple_of_pow2(c, -q) {
            return DecimalParts {
                digits: c >> -q,
                exponent: 0,
            };
        }
    } else {
        c = fraction;
        q = 1 - ieee::EXPONENT_BIAS;
    }

    let is_even = c % 2 == 0;
    let accept_lower = is_even;
    let accept_upper = is_even;

    // The gap below shrinks by half where the significand restarts at a
    // power of two.
    let lower_boundary_is_closer = fraction == 0 && field > 1;

    let cbl: u64 = 4 * c - 2 + u64::from(lower_boundary_is_closer);
    let cb: u64 = 4 * c;
    let cbr: u64 = 4 * c + 2;

    let k = if lower_boundary_is_closer {
        pow10::floor_log10_three_quarters_pow2(q)
    } else {
        pow10::floor_log10_pow2(q)
    };
    let h = q + pow10::floor_log2_pow10(-k) + 1;
    debug_assert!((1..=4).contains(&h));

    let g = pow10::significand_ceil(-k);
    let vbl = round_to_odd(g, cbl << h);
    let vb = round_to_odd(g, cb << h);
    let vbr = round_to_odd(g, cbr << h);

    let lower = vbl + u64::from(!accept_lower);
    let upper = vbr - u64::from(!accept_upper);

    let s = vb / 4;

    if s >= 10 {
        let sp = s / 10;
        let up_inside = lower <= 40 * sp;
        let wp_inside = 40 * sp + 40 <= upper;
        if up_inside != wp_inside {
            return DecimalParts {
                digits: sp + u64::from(wp_inside),
                exponent: k + 1,
            };
        }
    }

    let u_inside = lower <= 4 * s;
    let w_inside = 4 * s + 4 <= upper;
    if u_inside != w_inside {
        return DecimalParts {
            digits: s + u64::from(w_inside),
            exponent: k,
        };
    }

    // Both short candidates are inside the interval; pick the closer one,
    // breaking the tie towards even.
    let mid = 4 * s + 2;
    let round_up = vb > mid || (vb == mid && s & 1 != 0);
    DecimalParts {
        digits: s + u64::from(round_up),
        exponent: k,
    }
}

fn multiple_of_pow2(value: u64, n: i32) -> bool {
    debug_assert!((0..64).contains(&n));
    value & ((1 << n) - 1) == 0
}

/// High 64 bits of `g * cp / 2^64`, with the low bit forced to one whenever
/// any discarded bit was set. The sticky low bit is what lets a single
/// 64-bit register stand in for the full product during interval checks.
fn round_to_odd(g: (u64, u64), cp: u64) -> u64 {
    let x = u128::from(g.1) * u128::from(cp);
    let y = u128::from(g.0) * u128::from(cp) + (x >> 64);
    let y1 = (y >> 64) as u64;
    let y0 = y as u64;
    y1 | u64::from(y0 > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortest(value: f64) -> (u64, i32) {
        let parts = shortest_decimal(value.to_bits());
        (parts.digits, parts.exponent)
    }

    #[test]
    fn integral_values_take_the_exact_path() {
        assert_eq!(shortest(5.0), (5, 0));
        assert_eq!(shortest(9007199254740992.0), (9007199254740992, 0));
    }

    #[test]
    fn shortest_value_of_one_tenth() {
        let (digits, exponent) = shortest(0.1);
        // Trailing zeroes are the emitter's to strip; the value itself must
        // be exactly one tenth.
        let mut digits = digits;
        let mut exponent = exponent;
        while digits % 10 == 0 {
            digits /= 10;
            exponent += 1;
        }
        assert_eq!((digits, exponent), (1, -1));
    }

    #[test]
    fn seventeen_digits_when_needed() {
        let (digits, exponent) = shortest(f64::MAX);
        assert_eq!(digits, 17976931348623157);
        assert_eq!(exponent, 292);
    }

    #[test]
    fn smallest_subnormal() {
        let (digits, exponent) = shortest(f64::from_bits(1));
        assert_eq!((digits, exponent), (5, -324));
    }
}
