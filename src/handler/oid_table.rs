//! Sorted OID-keyed storage.

use crate::oid::Oid;

/// OID-keyed table kept in lexicographic order.
///
/// Lookups are exact-match binary searches; iteration yields entries in
/// OID order.
#[derive(Debug, Clone)]
pub struct OidTable<V> {
    /// Entries are kept sorted by OID
    entries: Vec<(Oid, V)>,
}

impl<V> OidTable<V> {
    /// Create a new empty OID table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an OID-value pair, maintaining sorted order.
    ///
    /// If the OID already exists, its value is replaced and the old one returned.
    pub fn insert(&mut self, oid: Oid, value: V) -> Option<V> {
        match self.entries.binary_search_by(|(o, _)| o.cmp(&oid)) {
            Ok(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (oid, value));
                None
            }
        }
    }

    /// Get the value for an exact OID match.
    pub fn get(&self, oid: &Oid) -> Option<&V> {
        match self.entries.binary_search_by(|(o, _)| o.cmp(oid)) {
            Ok(idx) => Some(&self.entries[idx].1),
            Err(_) => None,
        }
    }

    /// Get the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all OID-value pairs in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&Oid, &V)> {
        self.entries.iter().map(|(o, v)| (o, v))
    }
}

impl<V> Default for OidTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
