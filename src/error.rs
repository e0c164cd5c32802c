//! Error types for upsc-snmp-agent.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//!
//! None of these errors are visible on the protocol stream. Resolver failures
//! are answered with `NONE` and adapter failures leave the previous sample in
//! place; only I/O errors on the protocol stream itself end the agent loop.

use std::time::Duration;

use crate::value::TypeTag;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// Invalid arc value.
    InvalidArc,
    /// OID has too many arcs (exceeds MAX_OID_LEN).
    TooManyArcs { count: usize, max: usize },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::TooManyArcs { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
        }
    }
}

/// Device adapter failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterErrorKind {
    /// Command exited unsuccessfully (`None` when killed by a signal).
    ExitStatus(Option<i32>),
    /// Command output was not valid UTF-8.
    NotUtf8,
    /// Command produced no attribute lines.
    EmptyOutput,
    /// Line is not of the form `key: value` (1-based line number).
    MalformedLine { line: usize },
}

impl std::fmt::Display for AdapterErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExitStatus(Some(code)) => write!(f, "command exited with status {}", code),
            Self::ExitStatus(None) => write!(f, "command terminated by signal"),
            Self::NotUtf8 => write!(f, "command output is not valid UTF-8"),
            Self::EmptyOutput => write!(f, "command produced no output"),
            Self::MalformedLine { line } => {
                write!(f, "malformed output at line {}: expected 'key: value'", line)
            }
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Attribute absent from both the live sample and the defaults.
    #[error("no such attribute: {name}")]
    NoSuchAttribute { name: Box<str> },

    /// Attribute is text where a number is required.
    #[error("attribute {name} is not numeric: {value:?}")]
    NotNumeric { name: Box<str>, value: String },

    /// Numeric attribute is NaN, infinite, or outside the INTEGER range.
    #[error("attribute {name} value {value} does not fit an INTEGER")]
    OutOfRange { name: Box<str>, value: f64 },

    /// Resolver produced a value of a different type than its entry declares.
    #[error("resolver produced {actual}, entry declares {declared}")]
    TypeMismatch { declared: TypeTag, actual: TypeTag },

    /// Device adapter ran but its result is unusable.
    #[error("device adapter failed for {device}: {kind}")]
    Adapter {
        device: Box<str>,
        kind: AdapterErrorKind,
    },

    /// Device adapter did not complete in time.
    #[error("device adapter for {device} timed out after {elapsed:?}")]
    AdapterTimeout { device: Box<str>, elapsed: Duration },

    /// I/O error on the protocol stream or while spawning the adapter.
    #[error("I/O error{}: {source}", device.as_ref().map(|d| format!(" sampling {}", d)).unwrap_or_default())]
    Io {
        device: Option<Box<str>>,
        #[source]
        source: std::io::Error,
    },

    /// Invalid OID format.
    #[error("invalid OID: {kind}")]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },
}

impl Error {
    /// Create a missing-attribute error.
    pub fn no_such_attribute(name: impl Into<Box<str>>) -> Self {
        Self::NoSuchAttribute { name: name.into() }
    }

    /// Create an adapter error.
    pub fn adapter(device: impl Into<Box<str>>, kind: AdapterErrorKind) -> Self {
        Self::Adapter {
            device: device.into(),
            kind,
        }
    }

    /// Create an invalid OID error from a kind (no input string).
    pub fn invalid_oid(kind: OidErrorKind) -> Self {
        Self::InvalidOid { kind, input: None }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Whether this error came from the device adapter.
    pub fn is_adapter_failure(&self) -> bool {
        matches!(
            self,
            Self::Adapter { .. } | Self::AdapterTimeout { .. } | Self::Io { device: Some(_), .. }
        )
    }
}
