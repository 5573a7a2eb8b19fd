use thiserror::Error;

/// Why a piece of text failed to parse as a number.
///
/// The host-facing [`parse_integer`](crate::parse_integer) and
/// [`parse_real`](crate::parse_real) entry points collapse these into
/// `None`; the `try_` variants surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    /// The input was empty or contained only whitespace.
    #[error("no number in input")]
    Empty,
    /// A digit run required by the grammar had no digits.
    #[error("expected at least one digit")]
    MissingDigits,
    /// A special-value literal started with `i` or `n` but was not
    /// `infinity` or `nan`.
    #[error("unrecognized special value literal")]
    BadLiteral,
    /// Non-whitespace characters followed the number.
    #[error("unexpected characters after the number")]
    TrailingText,
    /// An integer carried a negative exponent, which would make it
    /// fractional.
    #[error("integers cannot carry a negative exponent")]
    NegativeExponent,
    /// The exponent magnitude itself exceeded the 24-bit parsing clamp.
    #[error("exponent is too large")]
    ExponentOverflow,
    /// The value does not fit in a 64-bit signed integer.
    #[error("number does not fit in a 64-bit integer")]
    IntegerOverflow,
    /// The real value overflowed to infinity without `saturating` set and
    /// without an explicit `infinity` literal.
    #[error("number is too large for a double")]
    RealOverflow,
}
