//! Comma-separated array parameters.
//!
//! An array parameter wraps one of the scalar codecs and applies it to each
//! comma-separated segment in turn, writing into consecutive slots of a
//! caller-owned buffer. Commas cannot be escaped.
//!
//! A failed parse stops at the first bad segment without rolling back the
//! slots already written. After a failure both the buffer and the count
//! output are indeterminate and must not be relied on.

use crate::codec::{self, GetFn, SetFn};
use crate::error::ErrorKind;

/// Element buffer of an array parameter, tagged with its element codec.
#[derive(Debug)]
pub enum Elements<'a> {
    Byte(&'a mut [u8]),
    Short(&'a mut [i16]),
    UShort(&'a mut [u16]),
    Int(&'a mut [i32]),
    UInt(&'a mut [u32]),
    Long(&'a mut [i64]),
    ULong(&'a mut [u64]),
    Bool(&'a mut [bool]),
    InvBool(&'a mut [bool]),
}

impl Elements<'_> {
    /// Number of slots in the buffer.
    pub fn capacity(&self) -> usize {
        match self {
            Elements::Byte(slots) => slots.len(),
            Elements::Short(slots) => slots.len(),
            Elements::UShort(slots) => slots.len(),
            Elements::Int(slots) => slots.len(),
            Elements::UInt(slots) => slots.len(),
            Elements::Long(slots) => slots.len(),
            Elements::ULong(slots) => slots.len(),
            Elements::Bool(slots) | Elements::InvBool(slots) => slots.len(),
        }
    }
}

/// Array parameter storage: element buffer, minimum count and an optional
/// count output shared with the caller.
#[derive(Debug)]
pub struct ArraySpec<'a> {
    min: usize,
    count: Option<&'a mut usize>,
    elements: Elements<'a>,
}

impl<'a> ArraySpec<'a> {
    /// Array requiring at least one element and reporting no count.
    pub fn new(elements: Elements<'a>) -> Self {
        Self {
            min: 1,
            count: None,
            elements,
        }
    }

    /// Write the number of elements actually given into `count`.
    pub fn with_count(mut self, count: &'a mut usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn elements(&self) -> &Elements<'a> {
        &self.elements
    }

    pub fn max_elements(&self) -> usize {
        self.elements.capacity()
    }

    pub fn min_elements(&self) -> usize {
        self.min
    }

    /// Elements considered set: the tracked count, or every slot when no
    /// count output was supplied.
    pub fn len(&self) -> usize {
        let max = self.max_elements();
        self.count.as_deref().map_or(max, |count| (*count).min(max))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn set_array(text: Option<&str>, spec: &mut ArraySpec<'_>) -> Result<(), ErrorKind> {
    let text = text.ok_or(ErrorKind::MissingValue)?;

    let mut untracked = 0;
    let count = match spec.count.as_deref_mut() {
        Some(count) => count,
        None => &mut untracked,
    };
    let min = spec.min;

    match &mut spec.elements {
        Elements::Byte(slots) => fill(text, slots, min, count, codec::set_byte),
        Elements::Short(slots) => fill(text, slots, min, count, codec::set_short),
        Elements::UShort(slots) => fill(text, slots, min, count, codec::set_ushort),
        Elements::Int(slots) => fill(text, slots, min, count, codec::set_int),
        Elements::UInt(slots) => fill(text, slots, min, count, codec::set_uint),
        Elements::Long(slots) => fill(text, slots, min, count, codec::set_long),
        Elements::ULong(slots) => fill(text, slots, min, count, codec::set_ulong),
        Elements::Bool(slots) => fill(text, slots, min, count, codec::set_bool),
        Elements::InvBool(slots) => fill(text, slots, min, count, codec::set_invbool),
    }
}

fn fill<T>(
    text: &str,
    slots: &mut [T],
    min: usize,
    count: &mut usize,
    set: SetFn<T>,
) -> Result<(), ErrorKind> {
    *count = 0;
    for segment in text.split(',') {
        let slot = slots.get_mut(*count).ok_or(ErrorKind::TooManyElements)?;
        set(Some(segment), slot)?;
        *count += 1;
    }

    if *count < min {
        return Err(ErrorKind::TooFewElements);
    }
    Ok(())
}

pub fn get_array(spec: &ArraySpec<'_>) -> String {
    let shown = spec.len();
    match &spec.elements {
        Elements::Byte(slots) => join(&slots[..shown], codec::get_byte),
        Elements::Short(slots) => join(&slots[..shown], codec::get_short),
        Elements::UShort(slots) => join(&slots[..shown], codec::get_ushort),
        Elements::Int(slots) => join(&slots[..shown], codec::get_int),
        Elements::UInt(slots) => join(&slots[..shown], codec::get_uint),
        Elements::Long(slots) => join(&slots[..shown], codec::get_long),
        Elements::ULong(slots) => join(&slots[..shown], codec::get_ulong),
        Elements::Bool(slots) => join(&slots[..shown], codec::get_bool),
        Elements::InvBool(slots) => join(&slots[..shown], codec::get_invbool),
    }
}

fn join<T>(slots: &[T], get: GetFn<T>) -> String {
    slots.iter().map(get).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_array() {
        let mut nums = [0i64; 10];
        let mut count = 0;
        {
            let mut spec = ArraySpec::new(Elements::Long(&mut nums)).with_count(&mut count);
            assert_eq!(set_array(Some("1,2,3"), &mut spec), Ok(()));
            assert_eq!(spec.len(), 3);
            assert_eq!(get_array(&spec), "1,2,3");
        }
        assert_eq!(count, 3);
        assert_eq!(&nums[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_too_many_elements() {
        let mut nums = [0i32; 2];
        let mut spec = ArraySpec::new(Elements::Int(&mut nums));
        assert_eq!(set_array(Some("1,2,3"), &mut spec), Err(ErrorKind::TooManyElements));
    }

    #[test]
    fn test_exactly_max_elements() {
        let mut nums = [0u16; 3];
        let mut count = 0;
        let mut spec = ArraySpec::new(Elements::UShort(&mut nums)).with_count(&mut count);
        assert_eq!(set_array(Some("7,8,9"), &mut spec), Ok(()));
        assert_eq!(get_array(&spec), "7,8,9");
    }

    #[test]
    fn test_missing_value() {
        let mut nums = [0i64; 4];
        let mut spec = ArraySpec::new(Elements::Long(&mut nums));
        assert_eq!(set_array(None, &mut spec), Err(ErrorKind::MissingValue));
    }

    #[test]
    fn test_too_few_elements() {
        let mut nums = [0u32; 4];
        let mut spec = ArraySpec::new(Elements::UInt(&mut nums)).with_min(2);
        assert_eq!(set_array(Some("5"), &mut spec), Err(ErrorKind::TooFewElements));
        assert_eq!(set_array(Some("5,6"), &mut spec), Ok(()));
    }

    #[test]
    fn test_element_failure_propagates() {
        let mut nums = [0u8; 4];
        let mut spec = ArraySpec::new(Elements::Byte(&mut nums));
        assert_eq!(set_array(Some("1,300,2"), &mut spec), Err(ErrorKind::InvalidFormat));
        assert_eq!(set_array(Some("1,,2"), &mut spec), Err(ErrorKind::InvalidFormat));
        assert_eq!(set_array(Some(""), &mut spec), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn test_untracked_count_renders_every_slot() {
        let mut nums = [0i16; 3];
        let mut spec = ArraySpec::new(Elements::Short(&mut nums));
        assert_eq!(set_array(Some("-4"), &mut spec), Ok(()));
        assert_eq!(get_array(&spec), "-4,0,0");
    }

    #[test]
    fn test_bool_elements() {
        let mut flags = [false; 4];
        let mut count = 0;
        let mut spec = ArraySpec::new(Elements::Bool(&mut flags)).with_count(&mut count);
        assert_eq!(set_array(Some("y,0,N,1"), &mut spec), Ok(()));
        assert_eq!(get_array(&spec), "Y,N,N,Y");

        let mut inverted = [false; 2];
        let mut count = 0;
        let mut spec = ArraySpec::new(Elements::InvBool(&mut inverted)).with_count(&mut count);
        assert_eq!(set_array(Some("y,n"), &mut spec), Ok(()));
        assert_eq!(get_array(&spec), "Y,N");
    }
}
