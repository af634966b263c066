//! Error types for parameter parsing.
//!
//! Setters, the array codec and fallback handlers only know *what* went
//! wrong and report an [`ErrorKind`]. The parse driver knows *where* it went
//! wrong and wraps the kind into a [`ParamError`] carrying the offending
//! parameter name and raw value.

use thiserror::Error;

/// No such parameter.
pub const ENOENT: i32 = 2;
/// Invalid argument.
pub const EINVAL: i32 = 22;
/// Value does not fit.
pub const ENOSPC: i32 = 28;

/// What went wrong while setting a single parameter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Name did not resolve and no fallback accepted it
    #[error("unknown parameter")]
    UnknownParameter,

    /// Value failed type-specific parsing or range checks
    #[error("invalid format")]
    InvalidFormat,

    /// String value exceeds the declared capacity
    #[error("value does not fit in buffer")]
    BufferTooSmall,

    /// Setter requires a value but the token had no `=`
    #[error("missing value")]
    MissingValue,

    /// Array value has more segments than slots
    #[error("too many elements")]
    TooManyElements,

    /// Array value has fewer segments than the declared minimum
    #[error("too few elements")]
    TooFewElements,
}

impl ErrorKind {
    /// Negative errno status code, as returned by the C-style status surface.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::UnknownParameter => -ENOENT,
            ErrorKind::BufferTooSmall => -ENOSPC,
            _ => -EINVAL,
        }
    }

    /// Attach the offending parameter name and raw value.
    pub fn with_context(self, name: &str, value: Option<&str>) -> ParamError {
        let name = name.to_string();
        let value = value.map(str::to_string);
        match self {
            ErrorKind::UnknownParameter => ParamError::UnknownParameter { name, value },
            ErrorKind::InvalidFormat => ParamError::InvalidFormat { name, value },
            ErrorKind::BufferTooSmall => ParamError::BufferTooSmall { name, value },
            ErrorKind::MissingValue => ParamError::MissingValue { name, value },
            ErrorKind::TooManyElements => ParamError::TooManyElements { name, value },
            ErrorKind::TooFewElements => ParamError::TooFewElements { name, value },
        }
    }
}

fn shown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// First failure hit by the parse driver, with diagnostics attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("Unknown parameter '{name}'")]
    UnknownParameter { name: String, value: Option<String> },

    #[error("'{}' invalid for parameter '{name}'", shown(.value))]
    InvalidFormat { name: String, value: Option<String> },

    #[error("'{}' too large for parameter '{name}'", shown(.value))]
    BufferTooSmall { name: String, value: Option<String> },

    #[error("Parameter '{name}' expects a value")]
    MissingValue { name: String, value: Option<String> },

    #[error("'{}' has too many elements for parameter '{name}'", shown(.value))]
    TooManyElements { name: String, value: Option<String> },

    #[error("'{}' has too few elements for parameter '{name}'", shown(.value))]
    TooFewElements { name: String, value: Option<String> },
}

impl ParamError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParamError::UnknownParameter { .. } => ErrorKind::UnknownParameter,
            ParamError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            ParamError::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            ParamError::MissingValue { .. } => ErrorKind::MissingValue,
            ParamError::TooManyElements { .. } => ErrorKind::TooManyElements,
            ParamError::TooFewElements { .. } => ErrorKind::TooFewElements,
        }
    }

    /// Parameter name as it appeared on the command line.
    pub fn name(&self) -> &str {
        match self {
            ParamError::UnknownParameter { name, .. }
            | ParamError::InvalidFormat { name, .. }
            | ParamError::BufferTooSmall { name, .. }
            | ParamError::MissingValue { name, .. }
            | ParamError::TooManyElements { name, .. }
            | ParamError::TooFewElements { name, .. } => name,
        }
    }

    /// Raw value text, `None` when the token had no `=`.
    pub fn value(&self) -> Option<&str> {
        match self {
            ParamError::UnknownParameter { value, .. }
            | ParamError::InvalidFormat { value, .. }
            | ParamError::BufferTooSmall { value, .. }
            | ParamError::MissingValue { value, .. }
            | ParamError::TooManyElements { value, .. }
            | ParamError::TooFewElements { value, .. } => value.as_deref(),
        }
    }

    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

/// Declaring more parameters than the registry was built for.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("module param num exceeds max num of {capacity}")]
pub struct CapacityExceeded {
    pub capacity: usize,
}

/// Result type alias for parse operations
pub type Result<T> = std::result::Result<T, ParamError>;
