//! Managed-object values and their pass_persist type names.

use std::net::Ipv4Addr;

use crate::oid::Oid;

/// Type tag of a managed object, as named on the pass_persist stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Integer,
    Gauge,
    Counter,
    TimeTicks,
    IpAddress,
    ObjectId,
    Octet,
    String,
}

impl TypeTag {
    /// All type tags, in wire-token order.
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Integer,
        TypeTag::Gauge,
        TypeTag::Counter,
        TypeTag::TimeTicks,
        TypeTag::IpAddress,
        TypeTag::ObjectId,
        TypeTag::Octet,
        TypeTag::String,
    ];

    /// The token snmpd expects on the second line of a GET response.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Gauge => "gauge",
            TypeTag::Counter => "counter",
            TypeTag::TimeTicks => "timeticks",
            TypeTag::IpAddress => "ipaddress",
            TypeTag::ObjectId => "objectid",
            TypeTag::Octet => "octet",
            TypeTag::String => "string",
        }
    }

    /// Parse a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == token)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed value of a managed object.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// INTEGER (signed 32-bit).
    Integer(i32),
    /// Gauge32.
    Gauge(u32),
    /// Counter32.
    Counter(u32),
    /// TimeTicks (hundredths of a second).
    TimeTicks(u32),
    /// IpAddress.
    IpAddress(Ipv4Addr),
    /// OBJECT IDENTIFIER.
    ObjectIdentifier(Oid),
    /// OCTET STRING.
    OctetString(String),
    /// DisplayString.
    String(String),
}

impl Value {
    /// The type tag this value is announced with.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Integer(_) => TypeTag::Integer,
            Value::Gauge(_) => TypeTag::Gauge,
            Value::Counter(_) => TypeTag::Counter,
            Value::TimeTicks(_) => TypeTag::TimeTicks,
            Value::IpAddress(_) => TypeTag::IpAddress,
            Value::ObjectIdentifier(_) => TypeTag::ObjectId,
            Value::OctetString(_) => TypeTag::Octet,
            Value::String(_) => TypeTag::String,
        }
    }
}

/// Formats the value as the third line of a GET response.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Gauge(v) | Value::Counter(v) | Value::TimeTicks(v) => write!(f, "{}", v),
            Value::IpAddress(addr) => write!(f, "{}", addr),
            Value::ObjectIdentifier(oid) => write!(f, ".{}", oid),
            // Values are line-delimited; a newline would desynchronise snmpd
            Value::OctetString(s) | Value::String(s) => f.write_str(&s.replace(['\r', '\n'], " ")),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
