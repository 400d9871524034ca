//! Numeric Parsing Helpers
//!
//! Zero-allocation parsing of signed decimal integer literals.

/// Why a literal was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntLiteralError {
    /// Byte offset (within the literal) of the first byte that is not part
    /// of `[+-]?[0-9]+`.
    Invalid(usize),
    /// Well-formed but outside `i32`.
    Overflow,
}

/// Parse `[+-]?[0-9]+` into an `i32`, requiring the whole string to match.
///
/// Accumulates toward the sign so that `i32::MIN` parses without an
/// intermediate overflow.
#[inline]
pub(crate) fn parse_decimal_i32(s: &str) -> Result<i32, IntLiteralError> {
    let bytes = s.as_bytes();
    let (negative, digits_start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = &bytes[digits_start..];
    if digits.is_empty() {
        return Err(IntLiteralError::Invalid(digits_start));
    }

    let mut result: i32 = 0;
    let mut overflowed = false;
    for (i, &b) in digits.iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(IntLiteralError::Invalid(digits_start + i));
        }
        if overflowed {
            continue;
        }
        let digit = i32::from(b - b'0');
        let next = result.checked_mul(10).and_then(|r| {
            if negative {
                r.checked_sub(digit)
            } else {
                r.checked_add(digit)
            }
        });
        match next {
            Some(value) => result = value,
            // Keep scanning: a stray byte later on is reported as invalid.
            None => overflowed = true,
        }
    }

    if overflowed {
        Err(IntLiteralError::Overflow)
    } else {
        Ok(result)
    }
}
