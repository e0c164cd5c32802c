//! MibHandler trait.

use crate::attribute::AttributeStore;
use crate::oid::Oid;

use super::{GetNextResult, GetResult, SetResult};

/// Handler for pass_persist MIB operations.
///
/// The session calls the handler once per completed request, after the
/// sample cache has been brought up to date. Handlers are synchronous: all
/// blocking work (running the device adapter) happens in the cache before
/// the handler sees the request.
///
/// # Required Methods
///
/// - [`get`](MibHandler::get): Handle GET requests for absolute OIDs
///
/// # Optional Methods
///
/// - [`get_next`](MibHandler::get_next): Handle GETNEXT (default: end of view)
/// - [`set`](MibHandler::set): Handle SET (default: read-only)
///
/// # Example
///
/// ```rust
/// use upsc_snmp_agent::attribute::AttributeStore;
/// use upsc_snmp_agent::handler::{GetResult, MibHandler};
/// use upsc_snmp_agent::{Oid, Value, oid};
///
/// struct LoadHandler;
///
/// impl MibHandler for LoadHandler {
///     fn get(&self, attrs: &AttributeStore, oid: &Oid) -> GetResult {
///         if oid == &oid!(1, 3, 6, 1, 2, 1, 33, 1, 4, 4, 1, 5, 1) {
///             return attrs.integer("ups.load").ok().map(Value::Integer).into();
///         }
///         GetResult::NoSuchObject
///     }
/// }
/// ```
pub trait MibHandler {
    /// Handle a GET request for an absolute OID.
    ///
    /// Return [`GetResult::NoSuchObject`] for anything that cannot be
    /// answered, including lookup failures inside the handler.
    fn get(&self, attrs: &AttributeStore, oid: &Oid) -> GetResult;

    /// Handle a GETNEXT request.
    ///
    /// The default answers end of MIB view for every OID, which means snmpd
    /// cannot walk the subtree. This is a known limitation of the agent, kept
    /// until ordered traversal is specified.
    fn get_next(&self, _attrs: &AttributeStore, _oid: &Oid) -> GetNextResult {
        GetNextResult::EndOfMibView
    }

    /// Handle a SET request.
    ///
    /// `oid` and `value` are the raw request lines (`value` is snmpd's
    /// `type value` line). The default rejects every SET as not writable.
    fn set(&self, _oid: &str, _value: &str) -> SetResult {
        SetResult::NotWritable
    }
}
