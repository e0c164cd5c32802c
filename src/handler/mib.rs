//! Immutable table of managed objects under a fixed root.

use crate::attribute::AttributeStore;
use crate::error::Error;
use crate::oid::Oid;
use crate::value::{TypeTag, Value};

use super::{GetResult, ManagedObject, MibHandler, OidTable, Resolver};

/// Managed objects keyed by their suffix below `root`.
///
/// Built once with [`MibTableBuilder`]; there is no way to add, remove or
/// replace entries afterwards.
#[derive(Debug, Clone)]
pub struct MibTable {
    root: Oid,
    objects: OidTable<ManagedObject>,
}

impl MibTable {
    /// Start building a table under `root`.
    pub fn builder(root: Oid) -> MibTableBuilder {
        MibTableBuilder {
            root,
            objects: OidTable::new(),
        }
    }

    /// The namespace root.
    pub fn root(&self) -> &Oid {
        &self.root
    }

    /// Number of managed objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the table has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over `(suffix, object)` pairs in OID order.
    pub fn objects(&self) -> impl Iterator<Item = (&Oid, &ManagedObject)> {
        self.objects.iter()
    }

    /// Resolve the object at `suffix` (exact match only).
    pub fn resolve(&self, suffix: &Oid, attrs: &AttributeStore) -> GetResult {
        let Some(object) = self.objects.get(suffix) else {
            tracing::debug!(snmp.suffix = %suffix, "no managed object");
            return GetResult::NoSuchObject;
        };

        match object.resolve(attrs) {
            Ok(value) => {
                tracing::trace!(snmp.object = object.name, snmp.value = %value, "resolved");
                GetResult::Value(value)
            }
            Err(e @ Error::TypeMismatch { .. }) => {
                tracing::warn!(snmp.object = object.name, error = %e, "resolver type mismatch");
                GetResult::NoSuchObject
            }
            Err(e) => {
                tracing::debug!(snmp.object = object.name, error = %e, "resolver failed");
                GetResult::NoSuchObject
            }
        }
    }
}

impl MibHandler for MibTable {
    fn get(&self, attrs: &AttributeStore, oid: &Oid) -> GetResult {
        match oid.strip_prefix(&self.root) {
            Some(suffix) => self.resolve(&suffix, attrs),
            None => {
                tracing::debug!(snmp.oid = %oid, snmp.root = %self.root, "OID outside root");
                GetResult::NoSuchObject
            }
        }
    }
}

/// Builder for [`MibTable`].
#[derive(Debug)]
pub struct MibTableBuilder {
    root: Oid,
    objects: OidTable<ManagedObject>,
}

impl MibTableBuilder {
    /// Add an object with a fixed value.
    pub fn literal(self, suffix: Oid, name: &'static str, value: impl Into<Value>) -> Self {
        self.object(suffix, ManagedObject::literal(name, value.into()))
    }

    /// Add an object computed from device attributes.
    pub fn computed(
        self,
        suffix: Oid,
        name: &'static str,
        type_tag: TypeTag,
        resolver: Resolver,
    ) -> Self {
        self.object(suffix, ManagedObject::computed(name, type_tag, resolver))
    }

    /// Add a prepared object. A later object at the same suffix replaces an earlier one.
    pub fn object(mut self, suffix: Oid, object: ManagedObject) -> Self {
        if let Some(old) = self.objects.insert(suffix, object) {
            tracing::debug!(snmp.object = old.name, "managed object replaced");
        }
        self
    }

    /// Finish the table.
    pub fn build(self) -> MibTable {
        MibTable {
            root: self.root,
            objects: self.objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeMap;
    use crate::handler::SetResult;
    use crate::oid;
    use std::sync::Arc;

    fn table() -> MibTable {
        MibTable::builder(oid!(1, 3, 6, 1, 4, 1, 99999))
            .literal(oid!(1, 0), "answer", 42)
            .computed(oid!(2, 0), "load", TypeTag::Integer, |a| {
                a.integer("ups.load").map(Value::Integer)
            })
            .computed(oid!(3, 0), "wrong", TypeTag::String, |_| Ok(Value::Integer(0)))
            .build()
    }

    fn attrs(live: &[(&str, &str)]) -> AttributeStore {
        let mut store = AttributeStore::new(Arc::new(AttributeMap::new()));
        store.replace(AttributeMap::from_raw(live.iter().copied()));
        store
    }

    #[test]
    fn test_get_literal_and_computed() {
        let table = table();
        let attrs = attrs(&[("ups.load", "12")]);

        assert_eq!(
            table.get(&attrs, &oid!(1, 3, 6, 1, 4, 1, 99999, 1, 0)),
            GetResult::Value(Value::Integer(42))
        );
        assert_eq!(
            table.get(&attrs, &oid!(1, 3, 6, 1, 4, 1, 99999, 2, 0)),
            GetResult::Value(Value::Integer(12))
        );
    }

    #[test]
    fn test_get_misses() {
        let table = table();
        let attrs = attrs(&[]);

        // resolver lookup failure
        assert_eq!(
            table.get(&attrs, &oid!(1, 3, 6, 1, 4, 1, 99999, 2, 0)),
            GetResult::NoSuchObject
        );
        // declared type does not match
        assert_eq!(
            table.get(&attrs, &oid!(1, 3, 6, 1, 4, 1, 99999, 3, 0)),
            GetResult::NoSuchObject
        );
        // unknown suffix, partial suffix, root itself, foreign root
        for oid in [
            oid!(1, 3, 6, 1, 4, 1, 99999, 4, 0),
            oid!(1, 3, 6, 1, 4, 1, 99999, 1),
            oid!(1, 3, 6, 1, 4, 1, 99999),
            oid!(1, 3, 6, 1, 4, 1, 9999, 1, 0),
        ] {
            assert_eq!(table.get(&attrs, &oid), GetResult::NoSuchObject, "{}", oid);
        }
    }

    #[test]
    fn test_default_get_next_and_set() {
        let table = table();
        let attrs = attrs(&[]);
        assert!(table.get_next(&attrs, table.root()).is_end_of_mib_view());
        assert_eq!(
            table.set(".1.3.6.1.4.1.99999.1.0", "integer 5"),
            SetResult::NotWritable
        );
    }

    #[test]
    fn test_builder_replaces_duplicate_suffix() {
        let table = MibTable::builder(oid!(1, 3))
            .literal(oid!(1), "first", 1)
            .literal(oid!(1), "second", 2)
            .build();
        assert_eq!(table.len(), 1);
        let (_, object) = table.objects().next().unwrap();
        assert_eq!(object.name, "second");
    }
}
