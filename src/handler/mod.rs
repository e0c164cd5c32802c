//! Handler types and traits for pass_persist MIB operations.
//!
//! This module provides the interface between the protocol session and the
//! managed objects it serves:
//!
//! - [`MibHandler`] - Trait for handling GET, GETNEXT, and SET requests
//! - [`GetResult`], [`GetNextResult`], [`SetResult`] - Operation results
//! - [`MibTable`] - Immutable suffix table of [`ManagedObject`]s under a root
//! - [`ups_mib`] - The UPS-MIB table this agent serves
//!
//! # Managed Objects
//!
//! Each [`ManagedObject`] declares a [`TypeTag`](crate::value::TypeTag) and a
//! [`Source`]: either a literal value or a [`Resolver`] computing the value
//! from the current [`AttributeStore`](crate::attribute::AttributeStore).
//! A resolver failure, or a value whose type differs from the declared one,
//! is answered exactly like an unknown OID.
//!
//! ```rust
//! use upsc_snmp_agent::handler::{GetResult, MibHandler, MibTable};
//! use upsc_snmp_agent::value::TypeTag;
//! use upsc_snmp_agent::attribute::{AttributeMap, AttributeStore};
//! use upsc_snmp_agent::{Value, oid};
//! use std::sync::Arc;
//!
//! let table = MibTable::builder(oid!(1, 3, 6, 1, 4, 1, 99999))
//!     .literal(oid!(1, 0), "answer", 42)
//!     .computed(oid!(2, 0), "load", TypeTag::Integer, |a| {
//!         a.integer("ups.load").map(Value::Integer)
//!     })
//!     .build();
//!
//! let attrs = AttributeStore::new(Arc::new(AttributeMap::new()));
//! assert_eq!(
//!     table.get(&attrs, &oid!(1, 3, 6, 1, 4, 1, 99999, 1, 0)),
//!     GetResult::Value(Value::Integer(42))
//! );
//! // no `ups.load` anywhere: answered as a miss
//! assert_eq!(
//!     table.get(&attrs, &oid!(1, 3, 6, 1, 4, 1, 99999, 2, 0)),
//!     GetResult::NoSuchObject
//! );
//! ```

mod mib;
mod object;
mod oid_table;
mod results;
mod traits;
mod ups_mib;

pub use mib::{MibTable, MibTableBuilder};
pub use object::{ManagedObject, Resolver, Source};
pub use oid_table::OidTable;
pub use results::{GetNextResult, GetResult, SetResult};
pub use traits::MibHandler;
pub use ups_mib::{AGENT_SOFTWARE_VERSION, ups_mib, ups_mib_root};
