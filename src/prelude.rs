//! Commonly used types.
//!
//! ```rust
//! use upsc_snmp_agent::prelude::*;
//! ```

pub use crate::adapter::{DeviceAdapter, UpscAdapter};
pub use crate::agent::{Agent, AgentConfig, Response};
pub use crate::attribute::{Attribute, AttributeMap, AttributeStore};
pub use crate::cache::SampleCache;
pub use crate::error::{Error, Result};
pub use crate::handler::{GetResult, MibHandler, MibTable, SetResult};
pub use crate::oid::Oid;
pub use crate::value::{TypeTag, Value};
pub use crate::varbind::VarBind;

#[doc(no_inline)]
pub use crate::oid;
