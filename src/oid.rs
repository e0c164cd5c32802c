//! Object Identifier (OID) type.
//!
//! OIDs are stored as a sequence of arcs. Parsing accepts the absolute form
//! snmpd sends on the pass_persist stream (`.1.3.6.1.2.1.33.1.1.1.0`) as well
//! as the plain dotted form. [`Display`](std::fmt::Display) renders the plain
//! dotted form; the wire layer adds the leading dot.

use smallvec::SmallVec;

use crate::error::{Error, OidErrorKind, Result};

/// Maximum number of arcs accepted when parsing.
pub const MAX_OID_LEN: usize = 128;

/// Object identifier.
///
/// Ordering is lexicographic arc-by-arc, comparing arcs as unsigned integers.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted notation, with or without a leading dot.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('.').unwrap_or(trimmed);
        if body.is_empty() {
            return Err(Error::invalid_oid_with_input(OidErrorKind::Empty, s));
        }

        let mut arcs = SmallVec::new();
        for part in body.split('.') {
            if arcs.len() == MAX_OID_LEN {
                return Err(Error::invalid_oid_with_input(
                    OidErrorKind::TooManyArcs {
                        count: body.split('.').count(),
                        max: MAX_OID_LEN,
                    },
                    s,
                ));
            }
            // u32::from_str accepts a leading '+', which is not valid in an OID
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s));
            }
            let arc = part
                .parse::<u32>()
                .map_err(|_| Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s))?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Get the arcs as a slice.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID has no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with `prefix` (arc-wise, so `1.3.6.1.2.1.330`
    /// does not start with `1.3.6.1.2.1.33`).
    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.arcs.starts_with(&prefix.arcs)
    }

    /// Return the arcs following `prefix`, or `None` if this OID is outside it.
    pub fn strip_prefix(&self, prefix: &Oid) -> Option<Oid> {
        self.arcs
            .strip_prefix(prefix.arcs.as_slice())
            .map(Oid::from_slice)
    }

    /// Append `suffix` to this OID.
    pub fn join(&self, suffix: &Oid) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.extend_from_slice(&suffix.arcs);
        Oid { arcs }
    }
}

impl std::fmt::Debug for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

/// Build an [`Oid`] from a list of arcs.
///
/// ```rust
/// use upsc_snmp_agent::oid;
///
/// let root = oid!(1, 3, 6, 1, 2, 1, 33);
/// assert_eq!(root.to_string(), "1.3.6.1.2.1.33");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_parse_absolute_and_relative() {
        let abs = Oid::parse(".1.3.6.1.2.1.33.1.1.1.0").unwrap();
        let rel = Oid::parse("1.3.6.1.2.1.33.1.1.1.0").unwrap();
        assert_eq!(abs, rel);
        assert_eq!(abs.len(), 11);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let oid = Oid::parse("  .1.3.6.1\r\n").unwrap();
        assert_eq!(oid, oid!(1, 3, 6, 1));
    }

    #[test]
    fn test_parse_normalises_leading_zero_arcs() {
        let oid = Oid::parse(".1.3.6.1.2.1.33.01.1.1.0").unwrap();
        assert_eq!(oid, oid!(1, 3, 6, 1, 2, 1, 33, 1, 1, 1, 0));
        assert_eq!(oid.to_string(), "1.3.6.1.2.1.33.1.1.1.0");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Oid::parse(""),
            Err(Error::InvalidOid {
                kind: OidErrorKind::Empty,
                ..
            })
        ));
        assert!(matches!(
            Oid::parse("."),
            Err(Error::InvalidOid {
                kind: OidErrorKind::Empty,
                ..
            })
        ));
        for bad in ["1..3", "1.3.", "1.x.3", "1.+3", "1.-3", "1.99999999999"] {
            assert!(
                matches!(
                    Oid::parse(bad),
                    Err(Error::InvalidOid {
                        kind: OidErrorKind::InvalidArc,
                        ..
                    })
                ),
                "expected InvalidArc for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_too_many_arcs() {
        let long = vec!["1"; MAX_OID_LEN + 1].join(".");
        assert!(matches!(
            Oid::parse(&long),
            Err(Error::InvalidOid {
                kind: OidErrorKind::TooManyArcs { count, max: MAX_OID_LEN },
                ..
            }) if count == MAX_OID_LEN + 1
        ));

        let max = vec!["1"; MAX_OID_LEN].join(".");
        assert!(Oid::parse(&max).is_ok());
    }

    #[test]
    fn test_starts_with_is_arc_wise() {
        let root = oid!(1, 3, 6, 1, 2, 1, 33);
        assert!(oid!(1, 3, 6, 1, 2, 1, 33, 1, 1, 1, 0).starts_with(&root));
        assert!(root.starts_with(&root));
        assert!(!oid!(1, 3, 6, 1, 2, 1, 330, 1).starts_with(&root));
        assert!(!oid!(1, 3, 6, 1).starts_with(&root));
    }

    #[test]
    fn test_strip_prefix_and_join() {
        let root = oid!(1, 3, 6, 1, 2, 1, 33);
        let full = oid!(1, 3, 6, 1, 2, 1, 33, 1, 9, 10, 0);

        let suffix = full.strip_prefix(&root).unwrap();
        assert_eq!(suffix, oid!(1, 9, 10, 0));
        assert_eq!(root.join(&suffix), full);

        assert_eq!(root.strip_prefix(&root), Some(Oid::empty()));
        assert_eq!(oid!(1, 3, 6, 1, 4).strip_prefix(&root), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(oid!(1, 3, 6, 1, 2, 1, 33).to_string(), "1.3.6.1.2.1.33");
        assert_eq!(Oid::empty().to_string(), "");
        assert_eq!(format!("{:?}", oid!(1, 3)), "Oid(1.3)");
    }

    #[test]
    fn test_ordering() {
        assert!(oid!(1, 3, 6, 1, 2) < oid!(1, 3, 6, 1, 2, 1));
        assert!(oid!(1, 3, 6, 1, 2, 1) < oid!(1, 3, 6, 1, 3));
        assert!(oid!(1, 9, 9, 0) < oid!(1, 9, 10, 0));
    }
}
