//! Strict integer parsing.
//!
//! A partial numeric prefix never counts as a number: `"12abc"` is rejected
//! rather than read as `12`. The only leftover tolerated after the digits is
//! a single trailing newline, which is what values echoed into a parameter
//! usually end with.
//!
//! Base `0` auto-detects the radix the way `strtoul` does: `0x`/`0X` means
//! hexadecimal, a leading `0` means octal, anything else is decimal.

use crate::error::ErrorKind;

/// Parse an unsigned integer, rejecting any trailing garbage.
pub fn parse_strict(text: &str, base: u32) -> Result<u64, ErrorKind> {
    let body = text.strip_prefix('+').unwrap_or(text);
    parse_magnitude(body, base)
}

/// Signed variant of [`parse_strict`]; also accepts a leading `-`.
pub fn parse_strict_signed(text: &str, base: u32) -> Result<i64, ErrorKind> {
    match text.strip_prefix('-') {
        Some(rest) => {
            let magnitude = parse_magnitude(rest, base)?;
            if magnitude > i64::MAX as u64 + 1 {
                return Err(ErrorKind::InvalidFormat);
            }
            Ok((magnitude as i64).wrapping_neg())
        }
        None => i64::try_from(parse_strict(text, base)?).map_err(|_| ErrorKind::InvalidFormat),
    }
}

fn parse_magnitude(text: &str, base: u32) -> Result<u64, ErrorKind> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let (radix, digits) = detect_radix(body, base)?;
    if digits.is_empty() {
        return Err(ErrorKind::InvalidFormat);
    }

    digits.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(radix).ok_or(ErrorKind::InvalidFormat)?;
        acc.checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(ErrorKind::InvalidFormat)
    })
}

fn has_hex_prefix(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && bytes[2].is_ascii_hexdigit()
}

fn detect_radix(text: &str, base: u32) -> Result<(u32, &str), ErrorKind> {
    match base {
        0 | 16 if has_hex_prefix(text) => Ok((16, &text[2..])),
        0 if text.starts_with('0') => Ok((8, text)),
        0 => Ok((10, text)),
        2..=36 => Ok((base, text)),
        _ => Err(ErrorKind::InvalidFormat),
    }
}
