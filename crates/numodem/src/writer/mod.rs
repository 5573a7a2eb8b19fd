//! Number-to-text writers.
//!
//! A [`NumWriter`] owns a growable scratch buffer and renders one number at
//! a time into it, returning a borrowed `&str`. The free `format_*`
//! functions are allocating conveniences over a throwaway writer.
//!
//! Layout rules shared by all float writers: special values become the
//! literals `infinity`/`nan`/`0` (signed); finite values are written plain
//! when the exponent of the leading digit is small, scientific otherwise,
//! with a signed two-digit-minimum exponent suffix (`p` for binary
//! exponents, `e` for decimal ones). Binary and hexadecimal conversions
//! are exact; decimal conversion produces the shortest digit sequence that
//! parses back to the identical double.

mod decimal;

use alloc::string::String;
use alloc::vec::Vec;

use crate::digits::{self, DIGIT_CHARS};
use crate::ieee::{self, FpClass};
use crate::options::{ExpRadix, Radix};
use decimal::shortest_decimal;

/// A reusable number writer.
///
/// The writer owns mutable scratch state, so it is not shareable between
/// threads mid-call, but it is cheap to construct per call or per thread.
/// Each `write_*` method clears the scratch and returns the freshly
/// rendered text.
#[derive(Debug, Default)]
pub struct NumWriter {
    scratch: Vec<u8>,
}

impl NumWriter {
    /// Creates a writer with an empty scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders an unsigned integer with at least `min_digits` digits.
    pub fn write_u64(&mut self, value: u64, radix: Radix, min_digits: u32) -> &str {
        self.scratch.clear();
        self.put_magnitude(value, false, radix, min_digits);
        as_str(&self.scratch)
    }

    /// Renders a signed integer with at least `min_digits` digits.
    ///
    /// The magnitude is computed in the unsigned domain, so `i64::MIN`
    /// renders without overflowing.
    pub fn write_i64(&mut self, value: i64, radix: Radix, min_digits: u32) -> &str {
        self.scratch.clear();
        let negative = value < 0;
        let mask = if negative { u64::MAX } else { 0 };
        let magnitude = (value as u64 ^ mask).wrapping_sub(mask);
        self.put_magnitude(magnitude, negative, radix, min_digits);
        as_str(&self.scratch)
    }

    /// Renders a signed integer, optionally in a scientific layout.
    ///
    /// With an exponent base the value is decomposed by repeated exact
    /// division, so `256` in binary with a binary exponent renders as
    /// `0b1p+08`. Binary and hexadecimal significands take only a binary
    /// exponent; passing [`ExpRadix::Dec`] with them is a caller-contract
    /// violation.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is [`ExpRadix::Dec`] and `radix` is not
    /// [`Radix::Dec`].
    pub fn write_i64_with(&mut self, value: i64, radix: Radix, exponent: Option<ExpRadix>) -> &str {
        let Some(exp_radix) = exponent else {
            return self.write_i64(value, radix, 1);
        };
        assert!(
            radix == Radix::Dec || exp_radix == ExpRadix::Bin,
            "binary and hexadecimal significands take a binary exponent"
        );
        let (mantissa, exp) = decompose_integer(value, exp_radix.base() as i64);
        self.write_i64(mantissa, radix, 1);
        digits::push_exponent(&mut self.scratch, exp_radix.letter(), exp);
        as_str(&self.scratch)
    }

    /// Renders a double in the given base, plain or scientific.
    ///
    /// Scientific layout uses the base's natural exponent: decimal for
    /// decimal significands, binary for binary and hexadecimal ones.
    pub fn write_f64(&mut self, value: f64, radix: Radix, scientific: bool) -> &str {
        let exponent = if scientific {
            Some(match radix {
                Radix::Dec => ExpRadix::Dec,
                Radix::Bin | Radix::Hex => ExpRadix::Bin,
            })
        } else {
            None
        };
        self.write_f64_with(value, radix, exponent)
    }

    /// Renders a double with an explicit exponent-base choice.
    ///
    /// `Some(ExpRadix::Bin)` with [`Radix::Dec`] renders decimal digits
    /// scaled into `[1, 2)` with a binary exponent, e.g. `1.5p+03` for
    /// `12.0`.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is [`ExpRadix::Dec`] and `radix` is not
    /// [`Radix::Dec`].
    pub fn write_f64_with(&mut self, value: f64, radix: Radix, exponent: Option<ExpRadix>) -> &str {
        let bits = value.to_bits();
        let negative = ieee::is_negative(bits);
        match ieee::classify(bits) {
            FpClass::Inf => return if negative { "-infinity" } else { "infinity" },
            FpClass::Nan => return if negative { "-nan" } else { "nan" },
            FpClass::Zero => return if negative { "-0" } else { "0" },
            FpClass::Finite => {}
        }
        self.scratch.clear();
        if negative {
            self.scratch.push(b'-');
        }
        match (radix, exponent) {
            (Radix::Bin | Radix::Hex, Some(ExpRadix::Dec)) => {
                panic!("binary and hexadecimal significands take a binary exponent")
            }
            (Radix::Bin, exp) => self.put_f64_bin(bits, exp.is_some()),
            (Radix::Hex, exp) => self.put_f64_hex(bits, exp.is_some()),
            (Radix::Dec, None) => self.put_f64_dec(bits, false),
            (Radix::Dec, Some(ExpRadix::Dec)) => self.put_f64_dec(bits, true),
            (Radix::Dec, Some(ExpRadix::Bin)) => self.put_f64_dec_bin_exp(bits),
        }
        as_str(&self.scratch)
    }

    /// Magnitude with optional sign and base prefix; zero-pads to `want`
    /// digits.
    fn put_magnitude(&mut self, magnitude: u64, negative: bool, radix: Radix, min_digits: u32) {
        let want = min_digits.max(1) as usize;
        let mut tmp = [0u8; 64];
        let at = digits::emit_backward(&mut tmp, magnitude, radix.base(), 1);
        if negative {
            self.scratch.push(b'-');
        }
        if let Some(prefix) = radix.prefix() {
            self.scratch.extend_from_slice(prefix);
        }
        for _ in tmp.len() - at..want {
            self.scratch.push(b'0');
        }
        self.scratch.extend_from_slice(&tmp[at..]);
    }

    fn put_f64_bin(&mut self, bits: u64, scientific: bool) {
        self.scratch.extend_from_slice(b"0b");
        let (mant, exp) = ieee::frexp_norm(bits);
        if !scientific && (-4..53).contains(&exp) {
            if exp < 0 {
                self.scratch.extend_from_slice(b"0.");
                for _ in exp..-1 {
                    self.scratch.push(b'0');
                }
                self.put_shift_mantissa(mant, 1, None);
            } else {
                let point = self.scratch.len() + 1 + exp as usize;
                self.put_shift_mantissa(mant, 1, Some(point));
            }
        } else {
            let point = self.scratch.len() + 1;
            self.put_shift_mantissa(mant, 1, Some(point));
            digits::push_exponent(&mut self.scratch, b'p', exp);
        }
    }

    fn put_f64_hex(&mut self, bits: u64, scientific: bool) {
        self.scratch.extend_from_slice(b"0x");
        let (mant, exp) = ieee::frexp_norm(bits);
        // Align the leading bit onto a nibble boundary; the exponent
        // becomes a count of hex digits.
        let mant = mant >> (!exp & 3);
        let exp = exp >> 2;
        if !scientific && (-4..14).contains(&exp) {
            if exp < 0 {
                self.scratch.extend_from_slice(b"0.");
                for _ in exp..-1 {
                    self.scratch.push(b'0');
                }
                self.put_shift_mantissa(mant, 4, None);
            } else {
                let point = self.scratch.len() + 1 + exp as usize;
                self.put_shift_mantissa(mant, 4, Some(point));
            }
        } else {
            let point = self.scratch.len() + 1;
            self.put_shift_mantissa(mant, 4, Some(point));
            digits::push_exponent(&mut self.scratch, b'p', exp * 4);
        }
    }

    fn put_f64_dec(&mut self, bits: u64, scientific: bool) {
        let parts = shortest_decimal(bits);
        // Decimal exponent of the leading digit.
        let exp = decimal_length(parts.digits) as i32 + parts.exponent - 1;
        if !scientific && (-4..17).contains(&exp) {
            if exp < 0 {
                self.scratch.extend_from_slice(b"0.");
                for _ in exp..-1 {
                    self.scratch.push(b'0');
                }
                self.put_decimal_mantissa(parts.digits, None);
            } else {
                let point = self.scratch.len() + 1 + exp as usize;
                self.put_decimal_mantissa(parts.digits, Some(point));
            }
        } else {
            let point = self.scratch.len() + 1;
            self.put_decimal_mantissa(parts.digits, Some(point));
            digits::push_exponent(&mut self.scratch, b'e', exp);
        }
    }

    /// Decimal digits scaled into `[1, 2)` followed by a binary exponent.
    fn put_f64_dec_bin_exp(&mut self, bits: u64) {
        let (mant, exp) = ieee::frexp_norm(bits);
        let unit_bits = (1023_u64 << 52) | ((mant >> 11) & ieee::FRACTION_MASK);
        self.put_f64_dec(unit_bits, false);
        digits::push_exponent(&mut self.scratch, b'p', exp);
    }

    /// Shift digits out of the top of `reg`, inserting a radix point at
    /// scratch offset `point` and zero-filling up to it when the digits run
    /// out first. Trailing zero digits vanish because the register empties.
    fn put_shift_mantissa(&mut self, mut reg: u64, bits_per_digit: u32, point: Option<usize>) {
        while reg != 0 {
            let dval = (reg >> (64 - bits_per_digit)) as usize;
            reg <<= bits_per_digit;
            if point == Some(self.scratch.len()) {
                self.scratch.push(b'.');
            }
            self.scratch.push(DIGIT_CHARS[dval]);
        }
        if let Some(point) = point {
            while self.scratch.len() < point {
                self.scratch.push(b'0');
            }
        }
    }

    /// Same layout contract as [`Self::put_shift_mantissa`] for a base-10
    /// digit register: peel digits least-significant first into a reversed
    /// stack buffer, dropping trailing zeroes, then append in reading
    /// order.
    fn put_decimal_mantissa(&mut self, mut reg: u64, point: Option<usize>) {
        let mut tmp = [0u8; 24];
        let mut at = tmp.len();
        while reg != 0 {
            let dval = (reg % 10) as u8;
            reg /= 10;
            if at != tmp.len() || dval != 0 {
                at -= 1;
                tmp[at] = b'0' + dval;
            }
        }
        for &digit in &tmp[at..] {
            if point == Some(self.scratch.len()) {
                self.scratch.push(b'.');
            }
            self.scratch.push(digit);
        }
        if let Some(point) = point {
            while self.scratch.len() < point {
                self.scratch.push(b'0');
            }
        }
    }
}

/// Formats a signed integer with at least `min_digits` digits.
///
/// ```rust
/// use numodem::{Radix, format_integer};
///
/// assert_eq!(format_integer(255, Radix::Hex, 1), "0xFF");
/// assert_eq!(format_integer(-1, Radix::Bin, 1), "-0b1");
/// assert_eq!(format_integer(7, Radix::Dec, 3), "007");
/// ```
#[must_use]
pub fn format_integer(value: i64, radix: Radix, min_digits: u32) -> String {
    let mut writer = NumWriter::new();
    String::from(writer.write_i64(value, radix, min_digits))
}

/// Formats an unsigned integer with at least `min_digits` digits.
#[must_use]
pub fn format_unsigned(value: u64, radix: Radix, min_digits: u32) -> String {
    let mut writer = NumWriter::new();
    String::from(writer.write_u64(value, radix, min_digits))
}

/// Formats a signed integer, optionally in a scientific layout; see
/// [`NumWriter::write_i64_with`].
///
/// # Panics
///
/// Panics if `exponent` is [`ExpRadix::Dec`] and `radix` is not
/// [`Radix::Dec`].
#[must_use]
pub fn format_integer_with(value: i64, radix: Radix, exponent: Option<ExpRadix>) -> String {
    let mut writer = NumWriter::new();
    String::from(writer.write_i64_with(value, radix, exponent))
}

/// Formats a double in the given base, plain or scientific.
///
/// ```rust
/// use numodem::{Radix, format_float};
///
/// assert_eq!(format_float(0.1, Radix::Dec, false), "0.1");
/// assert_eq!(format_float(1e17, Radix::Dec, false), "1e+17");
/// assert_eq!(format_float(-0.0, Radix::Dec, false), "-0");
/// assert_eq!(format_float(0.75, Radix::Bin, false), "0b0.11");
/// ```
#[must_use]
pub fn format_float(value: f64, radix: Radix, scientific: bool) -> String {
    let mut writer = NumWriter::new();
    String::from(writer.write_f64(value, radix, scientific))
}

/// Formats a double with an explicit exponent-base choice; see
/// [`NumWriter::write_f64_with`].
///
/// # Panics
///
/// Panics if `exponent` is [`ExpRadix::Dec`] and `radix` is not
/// [`Radix::Dec`].
#[must_use]
pub fn format_float_with(value: f64, radix: Radix, exponent: Option<ExpRadix>) -> String {
    let mut writer = NumWriter::new();
    String::from(writer.write_f64_with(value, radix, exponent))
}

/// Split off the largest exponent such that `value = mantissa * base^exp`
/// exactly.
fn decompose_integer(value: i64, base: i64) -> (i64, i32) {
    let mut reg = value;
    let mut exp = 0;
    while reg != 0 && reg % base == 0 {
        reg /= base;
        exp += 1;
    }
    (reg, exp)
}

fn decimal_length(value: u64) -> usize {
    let mut length = 1;
    let mut reg = value;
    while reg >= 10 {
        reg /= 10;
        length += 1;
    }
    length
}

fn as_str(scratch: &[u8]) -> &str {
    match core::str::from_utf8(scratch) {
        Ok(text) => text,
        // The writers emit only ASCII.
        Err(_) => unreachable!(),
    }
}
