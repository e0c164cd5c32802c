//! Device attributes and the store resolvers read them from.
//!
//! An [`AttributeMap`] is one complete sample from the device adapter. The
//! [`AttributeStore`] pairs the most recent sample with the static defaults:
//! lookups consult the live sample first and fall back to the defaults, and
//! fail with [`Error::NoSuchAttribute`] when neither has the name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Attribute {
    /// Coerce raw adapter text: integer, then float, else text.
    pub fn parse(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            return Attribute::Integer(v);
        }
        if let Ok(v) = raw.parse::<f64>() {
            return Attribute::Float(v);
        }
        Attribute::Text(raw.to_owned())
    }

    /// Numeric value, if this attribute is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Attribute::Integer(v) => Some(*v as f64),
            Attribute::Float(v) => Some(*v),
            Attribute::Text(_) => None,
        }
    }

    /// Text value, if this attribute is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Attribute::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Integer(v) => write!(f, "{}", v),
            // keeps the decimal point of whole numbers: `1.0`, not `1`
            Attribute::Float(v) => write!(f, "{:?}", v),
            Attribute::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Attribute {
    fn from(v: i64) -> Self {
        Attribute::Integer(v)
    }
}

impl From<i32> for Attribute {
    fn from(v: i32) -> Self {
        Attribute::Integer(v.into())
    }
}

impl From<f64> for Attribute {
    fn from(v: f64) -> Self {
        Attribute::Float(v)
    }
}

impl From<&str> for Attribute {
    fn from(s: &str) -> Self {
        Attribute::Text(s.to_owned())
    }
}

/// Mapping from attribute name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: HashMap<String, Attribute>,
}

impl AttributeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from raw `(name, text)` pairs, coercing each value.
    pub fn from_raw<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Attribute::parse(v.as_ref())))
            .collect()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Attribute>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Get an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.entries.get(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Attribute)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (K, Attribute)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Live sample plus static defaults.
#[derive(Debug, Clone)]
pub struct AttributeStore {
    live: AttributeMap,
    defaults: Arc<AttributeMap>,
}

impl AttributeStore {
    /// Create a store with no live sample.
    pub fn new(defaults: Arc<AttributeMap>) -> Self {
        Self {
            live: AttributeMap::new(),
            defaults,
        }
    }

    /// Replace the live sample wholesale.
    pub fn replace(&mut self, live: AttributeMap) {
        self.live = live;
    }

    /// The live sample.
    pub fn live(&self) -> &AttributeMap {
        &self.live
    }

    /// Look up an attribute, falling back to the defaults.
    pub fn lookup(&self, name: &str) -> Result<&Attribute> {
        self.live
            .get(name)
            .or_else(|| self.defaults.get(name))
            .ok_or_else(|| Error::no_such_attribute(name))
    }

    /// Look up a numeric attribute.
    pub fn number(&self, name: &str) -> Result<f64> {
        let attr = self.lookup(name)?;
        attr.as_f64().ok_or_else(|| Error::NotNumeric {
            name: name.into(),
            value: attr.to_string(),
        })
    }

    /// Look up a numeric attribute, truncated toward zero.
    ///
    /// Fails with [`Error::OutOfRange`] for NaN, infinities and values
    /// outside the INTEGER range.
    pub fn integer(&self, name: &str) -> Result<i32> {
        self.scaled(name, 1.0)
    }

    /// Look up a numeric attribute, multiplied by `factor` then truncated.
    ///
    /// UPS-MIB reports frequencies, voltages and currents in tenths.
    pub fn scaled(&self, name: &str, factor: f64) -> Result<i32> {
        let value = (factor * self.number(name)?).trunc();
        if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(Error::OutOfRange {
                name: name.into(),
                value,
            });
        }
        Ok(value as i32)
    }

    /// Look up an attribute rendered as text, whatever its type.
    pub fn text(&self, name: &str) -> Result<String> {
        self.lookup(name).map(|attr| attr.to_string())
    }

    /// Check whether a text attribute equals `expected`.
    ///
    /// Numeric attributes never compare equal.
    pub fn is(&self, name: &str, expected: &str) -> Result<bool> {
        self.lookup(name).map(|attr| attr.as_str() == Some(expected))
    }
}
