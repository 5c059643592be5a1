//! Lenient leading-numeral integer parsing.
//!
//! Mirrors the C `atoi` conversion on an LP64 host: the digits are clamped to
//! the 64-bit `long` range the way `strtol` does, then truncated to 32 bits.
//! Malformed input never fails; it parses to whatever numeric prefix exists,
//! or zero.

/// Whitespace skipped before the sign, matching the C `isspace` set.
/// Note this includes vertical tab, which `u8::is_ascii_whitespace` does not.
const fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Parse the leading decimal numeral of `text` into an `i32`.
///
/// Reads optional leading whitespace, an optional `+` or `-`, then ASCII
/// digits up to the first non-digit byte. Returns 0 when no digits follow.
///
/// Out-of-range values saturate at the `i64` bounds and are then truncated
/// to their low 32 bits, so `"2147483648"` yields `i32::MIN` and
/// `"99999999999999999999"` yields `-1`.
///
/// # Example
/// ```
/// use pairop_core::parse::parse_leading_int;
///
/// assert_eq!(parse_leading_int("12x"), 12);
/// assert_eq!(parse_leading_int("abc"), 0);
/// assert_eq!(parse_leading_int("  -5"), -5);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_leading_int(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let start = bytes.iter().take_while(|&&b| is_c_space(b)).count();
    let rest = &bytes[start..];

    let (negative, digits) = match rest.split_first() {
        Some((b'-', tail)) => (true, tail),
        Some((b'+', tail)) => (false, tail),
        _ => (false, rest),
    };

    let value = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, &b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        });

    value as i32
}
