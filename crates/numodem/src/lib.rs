//! A bidirectional numeric text codec for a scripting runtime's standard
//! library.
//!
//! The crate converts 64-bit signed and unsigned integers and IEEE-754
//! double-precision floats to and from human-readable text in base 2, 10 or
//! 16, in both plain and scientific layouts, and performs the inverse parse
//! with saturating overflow semantics.
//!
//! Formatting is total: every value, including infinities, NaNs and signed
//! zeroes, has a text form. Decimal floats are rendered with the fewest
//! digits that still parse back to the identical double. Parsing reports
//! failures as values ([`ParseNumberError`], or `None` through the
//! [`parse_integer`]/[`parse_real`] entry points that host bindings consume)
//! and never panics.
//!
//! ```rust
//! use numodem::{Radix, format_float, format_integer, parse_integer, parse_real};
//!
//! assert_eq!(format_integer(255, Radix::Hex, 1), "0xFF");
//! assert_eq!(format_float(0.1, Radix::Dec, false), "0.1");
//! assert_eq!(parse_integer("0x1A"), Some(26));
//! assert_eq!(parse_real("1.5e2", false), Some(150.0));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod digits;
mod error;
mod ieee;
mod options;
mod parser;
mod pow10;
mod table;
mod writer;

#[cfg(test)]
mod tests;

pub use error::ParseNumberError;
pub use options::{ExpRadix, Radix};
pub use parser::{parse_integer, parse_real, try_parse_integer, try_parse_real};
pub use writer::{
    NumWriter, format_float, format_float_with, format_integer, format_integer_with,
    format_unsigned,
};
