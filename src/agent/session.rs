//! pass_persist protocol state machine.
//!
//! snmpd sends a command line (`PING`, `get`, `getnext`, `set`) followed by
//! that command's argument lines. The session consumes one line at a time and
//! returns the reply for it:
//!
//! | Mode | Line | Reply | Next mode |
//! |---|---|---|---|
//! | Idle | `PING` | `PONG` | Idle |
//! | Idle | `get` / `getnext` / `set` | - | AwaitGetOid / AwaitGetNextOid / AwaitSetOid |
//! | Idle | anything else | - (ignored) | Idle |
//! | AwaitGetOid | OID | value (3 lines) or `NONE` | Idle |
//! | AwaitGetNextOid | OID | `NONE` unless the handler walks | Idle |
//! | AwaitSetOid | OID | - | AwaitSetValue |
//! | AwaitSetValue | `type value` | `not-writable` unless the handler writes | Idle |
//!
//! Argument lines are always consumed as arguments, even when empty or
//! unparsable, so a request never leaves the session stuck outside Idle.

use crate::attribute::AttributeStore;
use crate::handler::{GetNextResult, GetResult, MibHandler};
use crate::oid::Oid;
use crate::varbind::VarBind;

use super::Response;

/// Current protocol mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Waiting for a command.
    #[default]
    Idle,
    /// `get` received; next line is the OID.
    AwaitGetOid,
    /// `getnext` received; next line is the OID.
    AwaitGetNextOid,
    /// `set` received; next line is the OID.
    AwaitSetOid,
    /// SET OID received; next line is `type value`.
    AwaitSetValue {
        /// The OID line of the pending SET.
        oid: String,
    },
}

/// Protocol session state, one per input stream.
#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
}

impl Session {
    /// Create a session in [`Mode::Idle`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Consume one input line and return the reply to write.
    ///
    /// Trailing whitespace (including the line terminator) is ignored.
    pub fn handle_line<H: MibHandler>(
        &mut self,
        line: &str,
        handler: &H,
        attrs: &AttributeStore,
    ) -> Response {
        let arg = line.trim_end();

        let (response, next) = match std::mem::take(&mut self.mode) {
            Mode::Idle => match arg {
                "PING" => (Response::Pong, Mode::Idle),
                "get" => (Response::Silent, Mode::AwaitGetOid),
                "getnext" => (Response::Silent, Mode::AwaitGetNextOid),
                "set" => (Response::Silent, Mode::AwaitSetOid),
                _ => {
                    tracing::debug!(line = %arg, "ignoring unexpected line while idle");
                    (Response::Silent, Mode::Idle)
                }
            },
            Mode::AwaitGetOid => (get(handler, attrs, arg), Mode::Idle),
            Mode::AwaitGetNextOid => (get_next(handler, attrs, arg), Mode::Idle),
            Mode::AwaitSetOid => (
                Response::Silent,
                Mode::AwaitSetValue {
                    oid: arg.to_owned(),
                },
            ),
            Mode::AwaitSetValue { oid } => {
                let result = handler.set(&oid, arg);
                tracing::debug!(snmp.oid = %oid, snmp.set = %result, "set request");
                (Response::Set(result), Mode::Idle)
            }
        };

        if next != Mode::Idle {
            tracing::trace!(mode = ?next, "awaiting argument");
        }
        self.mode = next;
        response
    }
}

fn get<H: MibHandler>(handler: &H, attrs: &AttributeStore, arg: &str) -> Response {
    let oid = match Oid::parse(arg) {
        Ok(oid) => oid,
        Err(e) => {
            tracing::debug!(line = %arg, error = %e, "unparsable GET OID");
            return Response::NotFound;
        }
    };

    match handler.get(attrs, &oid) {
        GetResult::Value(value) => Response::Value(VarBind::new(oid, value)),
        GetResult::NoSuchObject => Response::NotFound,
    }
}

fn get_next<H: MibHandler>(handler: &H, attrs: &AttributeStore, arg: &str) -> Response {
    let oid = match Oid::parse(arg) {
        Ok(oid) => oid,
        Err(e) => {
            tracing::debug!(line = %arg, error = %e, "unparsable GETNEXT OID");
            return Response::NotFound;
        }
    };

    match handler.get_next(attrs, &oid) {
        GetNextResult::Value(vb) => Response::Value(vb),
        GetNextResult::EndOfMibView => Response::NotFound,
    }
}
