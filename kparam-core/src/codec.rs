//! Typed value codecs.
//!
//! Each supported type has a setter that validates text and stores it into
//! caller-owned memory, and a getter that renders the stored value back to
//! text. Integers go through the strict parser with an auto-detected base
//! and must survive narrowing to the target type unchanged.

use crate::error::ErrorKind;
use crate::number::{parse_strict, parse_strict_signed};

/// Parse-and-store half of a codec.
pub type SetFn<T> = fn(Option<&str>, &mut T) -> Result<(), ErrorKind>;

/// Load-and-render half of a codec.
pub type GetFn<T> = fn(&T) -> String;

macro_rules! standard_param {
    ($set:ident, $get:ident, $ty:ty, $parse:ident) => {
        #[doc = concat!("Parse and store a `", stringify!($ty), "`.")]
        pub fn $set(text: Option<&str>, target: &mut $ty) -> Result<(), ErrorKind> {
            let text = text.ok_or(ErrorKind::InvalidFormat)?;
            let parsed = $parse(text, 0)?;
            *target = <$ty>::try_from(parsed).map_err(|_| ErrorKind::InvalidFormat)?;
            Ok(())
        }

        #[doc = concat!("Render a `", stringify!($ty), "` in decimal.")]
        pub fn $get(source: &$ty) -> String {
            source.to_string()
        }
    };
}

standard_param!(set_byte, get_byte, u8, parse_strict);
standard_param!(set_short, get_short, i16, parse_strict_signed);
standard_param!(set_ushort, get_ushort, u16, parse_strict);
standard_param!(set_int, get_int, i32, parse_strict_signed);
standard_param!(set_uint, get_uint, u32, parse_strict);
standard_param!(set_long, get_long, i64, parse_strict_signed);
standard_param!(set_ulong, get_ulong, u64, parse_strict);

/// No `=` means "set".
fn parse_bool(text: Option<&str>) -> Result<bool, ErrorKind> {
    match text.unwrap_or("1") {
        "y" | "Y" | "1" => Ok(true),
        "n" | "N" | "0" => Ok(false),
        _ => Err(ErrorKind::InvalidFormat),
    }
}

pub fn set_bool(text: Option<&str>, target: &mut bool) -> Result<(), ErrorKind> {
    *target = parse_bool(text)?;
    Ok(())
}

pub fn get_bool(source: &bool) -> String {
    // Y and N read better than true/false for non-coders
    String::from(if *source { "Y" } else { "N" })
}

/// Stores the negation: `quiet` declared over a `verbose` flag.
pub fn set_invbool(text: Option<&str>, target: &mut bool) -> Result<(), ErrorKind> {
    *target = !parse_bool(text)?;
    Ok(())
}

pub fn get_invbool(source: &bool) -> String {
    String::from(if *source { "N" } else { "Y" })
}

/// Unbounded text stored into a caller-owned `String`.
pub fn set_charp(text: Option<&str>, target: &mut String) -> Result<(), ErrorKind> {
    let text = text.ok_or(ErrorKind::MissingValue)?;
    target.clear();
    target.push_str(text);
    Ok(())
}

pub fn get_charp(source: &String) -> String {
    source.clone()
}

/// Caller-owned text buffer with a fixed capacity.
///
/// The capacity counts a terminator slot, so a spec of capacity `n` holds at
/// most `n - 1` bytes. Values that do not fit are rejected, never truncated.
#[derive(Debug)]
pub struct StringSpec<'a> {
    capacity: usize,
    buffer: &'a mut String,
}

impl<'a> StringSpec<'a> {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(buffer: &'a mut String, capacity: usize) -> Self {
        assert!(capacity > 0, "string parameter capacity must be non-zero");
        Self { capacity, buffer }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }
}

pub fn set_copystring(text: Option<&str>, spec: &mut StringSpec<'_>) -> Result<(), ErrorKind> {
    let text = text.ok_or(ErrorKind::MissingValue)?;
    if text.len() + 1 > spec.capacity {
        return Err(ErrorKind::BufferTooSmall);
    }
    spec.buffer.clear();
    spec.buffer.push_str(text);
    Ok(())
}

/// Renders at most `capacity - 1` bytes, cut back to a char boundary.
pub fn get_string(spec: &StringSpec<'_>) -> String {
    let text = spec.as_str();
    let mut end = text.len().min(spec.capacity - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
