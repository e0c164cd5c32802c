//! Device adapter abstraction.
//!
//! The agent never talks to the UPS itself. It asks a [`DeviceAdapter`] for a
//! complete attribute sample and treats any failure as "no new data".

mod upsc;

#[cfg(any(test, feature = "testing"))]
mod mock;

pub use upsc::*;

#[cfg(any(test, feature = "testing"))]
pub use mock::*;

use std::future::Future;

use crate::attribute::AttributeMap;
use crate::error::Result;

/// Source of device attribute samples.
///
/// Implementations return either a complete sample or an error; partial
/// samples are not representable. Values must already be coerced into
/// [`Attribute`](crate::attribute::Attribute)s.
pub trait DeviceAdapter: Send + Sync {
    /// Sample every attribute of `device`.
    fn sample(&self, device: &str) -> impl Future<Output = Result<AttributeMap>> + Send;
}
