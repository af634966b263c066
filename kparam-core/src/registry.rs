//! Parameter descriptors and the registry that holds them.
//!
//! A registry is built with a fixed capacity and filled by `declare` calls,
//! one per parameter, in the order they should be reported. It borrows the
//! caller's storage for its whole lifetime; values are read back either
//! through [`ParamRegistry::report`] or by dropping the registry and reading
//! the storage directly.

use bitflags::bitflags;
use serde::Serialize;
use tracing::warn;

use crate::array::{self, ArraySpec, Elements};
use crate::codec::{self, StringSpec};
use crate::error::{CapacityExceeded, ErrorKind};
use crate::tokenizer::param_eq;

bitflags! {
    /// Descriptor flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ParamFlags: u16 {
        /// Value may be omitted: `name` alone means "set".
        const ISBOOL = 2;
    }
}

/// A single caller-owned value.
#[derive(Debug)]
pub enum Scalar<'a> {
    Byte(&'a mut u8),
    Short(&'a mut i16),
    UShort(&'a mut u16),
    Int(&'a mut i32),
    UInt(&'a mut u32),
    Long(&'a mut i64),
    ULong(&'a mut u64),
    Bool(&'a mut bool),
    InvBool(&'a mut bool),
    Charp(&'a mut String),
}

impl Scalar<'_> {
    fn set(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        match self {
            Scalar::Byte(target) => codec::set_byte(value, target),
            Scalar::Short(target) => codec::set_short(value, target),
            Scalar::UShort(target) => codec::set_ushort(value, target),
            Scalar::Int(target) => codec::set_int(value, target),
            Scalar::UInt(target) => codec::set_uint(value, target),
            Scalar::Long(target) => codec::set_long(value, target),
            Scalar::ULong(target) => codec::set_ulong(value, target),
            Scalar::Bool(target) => codec::set_bool(value, target),
            Scalar::InvBool(target) => codec::set_invbool(value, target),
            Scalar::Charp(target) => codec::set_charp(value, target),
        }
    }

    fn get(&self) -> String {
        match self {
            Scalar::Byte(source) => codec::get_byte(source),
            Scalar::Short(source) => codec::get_short(source),
            Scalar::UShort(source) => codec::get_ushort(source),
            Scalar::Int(source) => codec::get_int(source),
            Scalar::UInt(source) => codec::get_uint(source),
            Scalar::Long(source) => codec::get_long(source),
            Scalar::ULong(source) => codec::get_ulong(source),
            Scalar::Bool(source) => codec::get_bool(source),
            Scalar::InvBool(source) => codec::get_invbool(source),
            Scalar::Charp(source) => codec::get_charp(source),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Scalar::Byte(_) => "byte",
            Scalar::Short(_) => "short",
            Scalar::UShort(_) => "ushort",
            Scalar::Int(_) => "int",
            Scalar::UInt(_) => "uint",
            Scalar::Long(_) => "long",
            Scalar::ULong(_) => "ulong",
            Scalar::Bool(_) => "bool",
            Scalar::InvBool(_) => "invbool",
            Scalar::Charp(_) => "charp",
        }
    }
}

fn element_type_name(elements: &Elements<'_>) -> &'static str {
    match elements {
        Elements::Byte(_) => "byte",
        Elements::Short(_) => "short",
        Elements::UShort(_) => "ushort",
        Elements::Int(_) => "int",
        Elements::UInt(_) => "uint",
        Elements::Long(_) => "long",
        Elements::ULong(_) => "ulong",
        Elements::Bool(_) => "bool",
        Elements::InvBool(_) => "invbool",
    }
}

/// Where a parameter's value lives. Fixed when the parameter is declared.
#[derive(Debug)]
pub enum Storage<'a> {
    Scalar(Scalar<'a>),
    String(StringSpec<'a>),
    Array(ArraySpec<'a>),
}

/// Registry entry binding a name to a codec and its target storage.
#[derive(Debug)]
pub struct Param<'a> {
    name: &'a str,
    flags: ParamFlags,
    storage: Storage<'a>,
}

impl<'a> Param<'a> {
    pub fn new(name: &'a str, storage: Storage<'a>) -> Self {
        let flags = match &storage {
            Storage::Scalar(Scalar::Bool(_) | Scalar::InvBool(_)) => ParamFlags::ISBOOL,
            _ => ParamFlags::empty(),
        };
        Self { name, flags, storage }
    }

    pub fn byte(name: &'a str, target: &'a mut u8) -> Self {
        Self::new(name, Storage::Scalar(Scalar::Byte(target)))
    }

    pub fn short(name: &'a str, target: &'a mut i16) -> Self {
        Self::new(name, Storage::Scalar(Scalar::Short(target)))
    }

    pub fn ushort(name: &'a str, target: &'a mut u16) -> Self {
        Self::new(name, Storage::Scalar(Scalar::UShort(target)))
    }

    pub fn int(name: &'a str, target: &'a mut i32) -> Self {
        Self::new(name, Storage::Scalar(Scalar::Int(target)))
    }

    pub fn uint(name: &'a str, target: &'a mut u32) -> Self {
        Self::new(name, Storage::Scalar(Scalar::UInt(target)))
    }

    pub fn long(name: &'a str, target: &'a mut i64) -> Self {
        Self::new(name, Storage::Scalar(Scalar::Long(target)))
    }

    pub fn ulong(name: &'a str, target: &'a mut u64) -> Self {
        Self::new(name, Storage::Scalar(Scalar::ULong(target)))
    }

    pub fn bool(name: &'a str, target: &'a mut bool) -> Self {
        Self::new(name, Storage::Scalar(Scalar::Bool(target)))
    }

    pub fn invbool(name: &'a str, target: &'a mut bool) -> Self {
        Self::new(name, Storage::Scalar(Scalar::InvBool(target)))
    }

    pub fn charp(name: &'a str, target: &'a mut String) -> Self {
        Self::new(name, Storage::Scalar(Scalar::Charp(target)))
    }

    /// Text parameter holding at most `capacity - 1` bytes.
    pub fn string(name: &'a str, buffer: &'a mut String, capacity: usize) -> Self {
        Self::new(name, Storage::String(StringSpec::new(buffer, capacity)))
    }

    pub fn array(name: &'a str, spec: ArraySpec<'a>) -> Self {
        Self::new(name, Storage::Array(spec))
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn flags(&self) -> ParamFlags {
        self.flags
    }

    pub fn is_bool(&self) -> bool {
        self.flags.contains(ParamFlags::ISBOOL)
    }

    pub fn storage(&self) -> &Storage<'a> {
        &self.storage
    }

    /// Validate `value` and store it.
    pub fn set(&mut self, value: Option<&str>) -> Result<(), ErrorKind> {
        match &mut self.storage {
            Storage::Scalar(scalar) => scalar.set(value),
            Storage::String(spec) => codec::set_copystring(value, spec),
            Storage::Array(spec) => array::set_array(value, spec),
        }
    }

    /// Render the stored value.
    pub fn get(&self) -> String {
        match &self.storage {
            Storage::Scalar(scalar) => scalar.get(),
            Storage::String(spec) => codec::get_string(spec),
            Storage::Array(spec) => array::get_array(spec),
        }
    }

    pub fn type_name(&self) -> String {
        match &self.storage {
            Storage::Scalar(scalar) => scalar.type_name().to_string(),
            Storage::String(_) => "string".to_string(),
            Storage::Array(spec) => format!("{} array", element_type_name(spec.elements())),
        }
    }

    /// Usage fragment such as `[test=int]` or `[btest[=bool]]`.
    pub fn usage(&self) -> String {
        if self.is_bool() {
            format!("[{}[={}]]", self.name, self.type_name())
        } else {
            format!("[{}={}]", self.name, self.type_name())
        }
    }
}

/// One line of a registry report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamReport {
    pub name: String,
    pub value: String,
}

/// Ordered, fixed-capacity collection of parameter descriptors.
#[derive(Debug)]
pub struct ParamRegistry<'a> {
    params: Vec<Param<'a>>,
    capacity: usize,
}

impl<'a> ParamRegistry<'a> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            params: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a parameter, failing once the declared capacity is used up.
    pub fn try_declare(&mut self, param: Param<'a>) -> Result<&mut Self, CapacityExceeded> {
        if self.params.len() >= self.capacity {
            return Err(CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.params.iter().any(|p| p.name == param.name) {
            warn!("Parameter '{}' declared twice, first declaration wins", param.name);
        }
        self.params.push(param);
        Ok(self)
    }

    /// Add a parameter.
    ///
    /// # Panics
    ///
    /// Declaring past the capacity is a programming error and panics; use
    /// [`try_declare`](Self::try_declare) to get it as a value instead.
    pub fn declare(&mut self, param: Param<'a>) -> &mut Self {
        if let Err(err) = self.try_declare(param) {
            panic!("{err}, raise the registry capacity");
        }
        self
    }

    /// First parameter whose name matches, hyphens in `name` read as
    /// underscores.
    pub fn resolve(&self, name: &str) -> Option<&Param<'a>> {
        self.params.iter().find(|p| param_eq(name, p.name))
    }

    pub fn resolve_mut(&mut self, name: &str) -> Option<&mut Param<'a>> {
        self.params.iter_mut().find(|p| param_eq(name, p.name))
    }

    /// Render a single parameter.
    pub fn get(&self, name: &str) -> Option<String> {
        self.resolve(name).map(Param::get)
    }

    /// Every parameter with its rendered value, in declaration order.
    pub fn report(&self) -> Vec<ParamReport> {
        self.params
            .iter()
            .map(|p| ParamReport {
                name: p.name.to_string(),
                value: p.get(),
            })
            .collect()
    }

    /// Usage line listing every parameter.
    pub fn usage(&self, program: &str) -> String {
        let mut line = format!("usage: {program}");
        for param in &self.params {
            line.push(' ');
            line.push_str(&param.usage());
        }
        line
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param<'a>> {
        self.params.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.params.iter().map(|p| p.name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_resolve() {
        let mut alpha = 0i32;
        let mut my_opt = 0u32;
        let mut registry = ParamRegistry::with_capacity(2);
        registry
            .declare(Param::int("alpha", &mut alpha))
            .declare(Param::uint("my_opt", &mut my_opt));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("alpha").map(Param::name), Some("alpha"));
        assert_eq!(registry.resolve("my-opt").map(Param::name), Some("my_opt"));
        assert!(registry.resolve("beta").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["alpha", "my_opt"]);
    }

    #[test]
    fn test_try_declare_past_capacity() {
        let mut a = 0u8;
        let mut b = 0u8;
        let mut registry = ParamRegistry::with_capacity(1);
        assert!(registry.try_declare(Param::byte("a", &mut a)).is_ok());
        let err = registry.try_declare(Param::byte("b", &mut b)).unwrap_err();
        assert_eq!(err, CapacityExceeded { capacity: 1 });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "max num of 0")]
    fn test_declare_past_capacity_panics() {
        let mut a = 0u8;
        let mut registry = ParamRegistry::with_capacity(0);
        registry.declare(Param::byte("a", &mut a));
    }

    #[test]
    fn test_first_declaration_wins() {
        let mut first = 0i64;
        let mut second = 0i64;
        let mut registry = ParamRegistry::with_capacity(2);
        registry
            .declare(Param::long("dup", &mut first))
            .declare(Param::long("dup", &mut second));

        registry.resolve_mut("dup").unwrap().set(Some("7")).unwrap();
        drop(registry);
        assert_eq!((first, second), (7, 0));
    }

    #[test]
    fn test_flags() {
        let mut flag = false;
        let mut level = 0i16;
        let bool_param = Param::bool("flag", &mut flag);
        let int_param = Param::short("level", &mut level);
        assert!(bool_param.is_bool());
        assert_eq!(bool_param.flags().bits(), 2);
        assert!(!int_param.is_bool());
        assert_eq!(int_param.flags(), ParamFlags::empty());
        assert!(!int_param.flags().contains(ParamFlags::ISBOOL));
        assert_eq!(Param::invbool("quiet", &mut flag).flags(), ParamFlags::ISBOOL);
    }

    #[test]
    fn test_report_in_declaration_order() {
        let mut zeta = 3u16;
        let mut alpha = true;
        let mut nums = [4u64, 5, 6];
        let mut count = 2;
        let mut name = String::from("hi");
        let mut registry = ParamRegistry::with_capacity(4);
        registry
            .declare(Param::ushort("zeta", &mut zeta))
            .declare(Param::invbool("alpha", &mut alpha))
            .declare(Param::array(
                "nums",
                ArraySpec::new(Elements::ULong(&mut nums)).with_count(&mut count),
            ))
            .declare(Param::string("name", &mut name, 8));

        let report: Vec<_> = registry
            .report()
            .into_iter()
            .map(|r| (r.name, r.value))
            .collect();
        assert_eq!(
            report,
            vec![
                ("zeta".to_string(), "3".to_string()),
                ("alpha".to_string(), "N".to_string()),
                ("nums".to_string(), "4,5".to_string()),
                ("name".to_string(), "hi".to_string()),
            ]
        );
        assert_eq!(registry.get("nums"), Some("4,5".to_string()));
        assert_eq!(registry.get("missing"), None);
    }

    #[test]
    fn test_usage_line() {
        let mut test = 0i32;
        let mut btest = true;
        let mut latest = [0i64; 10];
        let mut strtest = String::new();
        let mut registry = ParamRegistry::with_capacity(4);
        registry
            .declare(Param::int("test", &mut test))
            .declare(Param::bool("btest", &mut btest))
            .declare(Param::array("latest", ArraySpec::new(Elements::Long(&mut latest))))
            .declare(Param::string("strtest", &mut strtest, 10));

        assert_eq!(
            registry.usage("demo"),
            "usage: demo [test=int] [btest[=bool]] [latest=long array] [strtest=string]"
        );
    }
}
