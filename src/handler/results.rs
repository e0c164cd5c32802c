//! Result types for MIB handler operations.

use crate::value::Value;
use crate::varbind::VarBind;

/// Result of a SET request, carrying the pass_persist reply token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetResult {
    /// Value was written.
    Done,
    /// Object is read-only.
    NotWritable,
    /// Value has the wrong type for this OID.
    WrongType,
    /// Value has the wrong length for this OID.
    WrongLength,
    /// Value is not valid for this OID.
    WrongValue,
    /// Value is inconsistent with other managed objects.
    InconsistentValue,
}

impl SetResult {
    /// Check if this result indicates success.
    pub fn is_ok(&self) -> bool {
        matches!(self, SetResult::Done)
    }

    /// The reply line snmpd expects.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SetResult::Done => "DONE",
            SetResult::NotWritable => "not-writable",
            SetResult::WrongType => "wrong-type",
            SetResult::WrongLength => "wrong-length",
            SetResult::WrongValue => "wrong-value",
            SetResult::InconsistentValue => "inconsistent-value",
        }
    }
}

impl std::fmt::Display for SetResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a GET operation on a specific OID.
///
/// pass_persist has a single "no such object" answer (`NONE`), which covers
/// OIDs outside the root, unknown suffixes and resolver failures alike.
#[derive(Debug, Clone, PartialEq)]
pub enum GetResult {
    /// The OID exists and has this value.
    Value(Value),
    /// The OID is unknown or its value could not be resolved.
    NoSuchObject,
}

impl GetResult {
    /// Create a `GetResult` from an `Option<Value>`. `None` is treated as `NoSuchObject`.
    pub fn from_option(value: Option<Value>) -> Self {
        match value {
            Some(v) => GetResult::Value(v),
            None => GetResult::NoSuchObject,
        }
    }
}

impl From<Value> for GetResult {
    fn from(value: Value) -> Self {
        GetResult::Value(value)
    }
}

impl From<Option<Value>> for GetResult {
    fn from(value: Option<Value>) -> Self {
        GetResult::from_option(value)
    }
}

/// Result of a GETNEXT operation.
#[derive(Debug, Clone, PartialEq)]
pub enum GetNextResult {
    /// The next OID/value pair in the MIB tree.
    Value(VarBind),
    /// No more OIDs after the given one (end of MIB view).
    EndOfMibView,
}

impl GetNextResult {
    /// Returns `true` if this is end of MIB view.
    pub fn is_end_of_mib_view(&self) -> bool {
        matches!(self, GetNextResult::EndOfMibView)
    }
}

impl From<Option<VarBind>> for GetNextResult {
    fn from(value: Option<VarBind>) -> Self {
        match value {
            Some(vb) => GetNextResult::Value(vb),
            None => GetNextResult::EndOfMibView,
        }
    }
}
