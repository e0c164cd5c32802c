//! Wire responses.

use crate::handler::SetResult;
use crate::varbind::VarBind;

/// Reply to one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// `PONG`, answering `PING`.
    Pong,
    /// Three lines: absolute OID, type token, value.
    Value(VarBind),
    /// `NONE`: no such object.
    NotFound,
    /// Reply to the value line of a SET.
    Set(SetResult),
    /// Nothing is written (command lines awaiting their argument).
    Silent,
}

impl Response {
    /// Whether this response writes nothing.
    pub fn is_silent(&self) -> bool {
        matches!(self, Response::Silent)
    }
}

/// Renders the exact bytes written to snmpd, one `\n` per line.
impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Pong => writeln!(f, "PONG"),
            Response::Value(vb) => {
                writeln!(f, ".{}", vb.oid)?;
                writeln!(f, "{}", vb.value.type_tag())?;
                writeln!(f, "{}", vb.value)
            }
            Response::NotFound => writeln!(f, "NONE"),
            Response::Set(result) => writeln!(f, "{}", result),
            Response::Silent => Ok(()),
        }
    }
}
