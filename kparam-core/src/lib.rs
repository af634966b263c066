//! Typed parameter registry for command lines and boot strings.
//!
//! Callers declare a fixed set of named parameters, each bound to storage
//! they own, then hand the registry an argument vector such as
//! `["test=5", "flag", "nums=1,2,3", "name=\"two words\""]`. Every token is
//! matched by name (`-` and `_` are interchangeable in the input) and its
//! value is validated and stored by the parameter's codec.
//!
//! ```
//! use kparam_core::{ArraySpec, Elements, Param, ParamRegistry};
//!
//! let mut test = 0i32;
//! let mut flag = false;
//! let mut nums = [0i64; 10];
//! let mut count = 0;
//!
//! let mut registry = ParamRegistry::with_capacity(3);
//! registry
//!     .declare(Param::int("test", &mut test))
//!     .declare(Param::bool("flag", &mut flag))
//!     .declare(Param::array(
//!         "nums",
//!         ArraySpec::new(Elements::Long(&mut nums)).with_count(&mut count),
//!     ));
//!
//! registry.parse(&["test=5", "flag", "nums=1,2,3"], None).unwrap();
//! assert_eq!(registry.get("nums").as_deref(), Some("1,2,3"));
//! drop(registry);
//!
//! assert_eq!((test, flag, count), (5, true, 3));
//! ```

pub mod array;
pub mod codec;
mod error;
pub mod number;
mod parser;
mod registry;
pub mod tokenizer;

pub use array::{ArraySpec, Elements};
pub use codec::StringSpec;
pub use error::{CapacityExceeded, ErrorKind, ParamError, Result, EINVAL, ENOENT, ENOSPC};
pub use number::{parse_strict, parse_strict_signed};
pub use parser::Fallback;
pub use registry::{Param, ParamFlags, ParamRegistry, ParamReport, Scalar, Storage};
pub use tokenizer::Tokenizer;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
