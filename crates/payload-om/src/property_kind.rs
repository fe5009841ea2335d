//! Property kind flags.
//!
//! Flags combine freely with `|`; whether a combination makes sense is checked
//! by [`PropertyKind::validate`] at the point where a kind is consumed.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::error::{Error, Result};

/// The role a property plays within its owning resource.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertyKind(u8);

impl PropertyKind {
    pub const NONE: PropertyKind = PropertyKind(0);
    pub const PRIMITIVE: PropertyKind = PropertyKind(1);
    pub const KEY: PropertyKind = PropertyKind(1 << 1);
    pub const COMPLEX_TYPE: PropertyKind = PropertyKind(1 << 2);
    pub const ENTITY_REFERENCE: PropertyKind = PropertyKind(1 << 3);
    pub const ENTITY_SET_REFERENCE: PropertyKind = PropertyKind(1 << 4);
    pub const ETAG: PropertyKind = PropertyKind(1 << 5);
    pub const COLLECTION: PropertyKind = PropertyKind(1 << 6);
    pub const STREAM: PropertyKind = PropertyKind(1 << 7);

    /// Flags describing what a property's value is; at most one may be set.
    const SHAPES: PropertyKind = PropertyKind(
        Self::PRIMITIVE.0
            | Self::COMPLEX_TYPE.0
            | Self::ENTITY_REFERENCE.0
            | Self::ENTITY_SET_REFERENCE.0
            | Self::STREAM.0,
    );

    const NAMES: [(PropertyKind, &'static str); 8] = [
        (Self::PRIMITIVE, "Primitive"),
        (Self::KEY, "Key"),
        (Self::COMPLEX_TYPE, "ComplexType"),
        (Self::ENTITY_REFERENCE, "EntityReference"),
        (Self::ENTITY_SET_REFERENCE, "EntitySetReference"),
        (Self::ETAG, "ETag"),
        (Self::COLLECTION, "Collection"),
        (Self::STREAM, "Stream"),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Every bit pattern names a flag set, so this never fails.
    pub const fn from_bits(bits: u8) -> Self {
        PropertyKind(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag of `other` is set
    pub const fn contains(self, other: PropertyKind) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any flag of `other` is set
    pub const fn intersects(self, other: PropertyKind) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: PropertyKind) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: PropertyKind) {
        self.0 &= !other.0;
    }

    /// Names of the set flags in declaration order.
    pub fn flag_names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }

    /// Check the combination against the rules for meaningful kinds.
    ///
    /// Rejected: the empty set, more than one of `Primitive`, `ComplexType`,
    /// `EntityReference`, `EntitySetReference` and `Stream`, `Key` or `ETag`
    /// on anything but a single primitive, and `Collection` on anything but
    /// primitives or complex values.
    pub fn validate(self) -> Result<Self> {
        let invalid = |reason| Error::InvalidPropertyKind { kind: self, reason };

        if self.is_empty() {
            return Err(invalid("no flags set"));
        }
        if (self & Self::SHAPES).0.count_ones() > 1 {
            return Err(invalid("more than one value shape"));
        }
        if self.intersects(Self::KEY | Self::ETAG)
            && (!self.contains(Self::PRIMITIVE) || self.contains(Self::COLLECTION))
        {
            return Err(invalid("key and etag properties must be single primitives"));
        }
        if self.contains(Self::COLLECTION) && !self.intersects(Self::PRIMITIVE | Self::COMPLEX_TYPE)
        {
            return Err(invalid("collections hold primitive or complex values only"));
        }
        Ok(self)
    }

    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }
}

impl BitOr for PropertyKind {
    type Output = PropertyKind;

    fn bitor(self, rhs: PropertyKind) -> PropertyKind {
        PropertyKind(self.0 | rhs.0)
    }
}

impl BitOrAssign for PropertyKind {
    fn bitor_assign(&mut self, rhs: PropertyKind) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PropertyKind {
    type Output = PropertyKind;

    fn bitand(self, rhs: PropertyKind) -> PropertyKind {
        PropertyKind(self.0 & rhs.0)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let names: Vec<&str> = self.flag_names().collect();
        write!(f, "{}", names.join(" | "))
    }
}

impl fmt::Debug for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyKind({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_primitive_distinct_from_key_complex() {
        let key_primitive = PropertyKind::KEY | PropertyKind::PRIMITIVE;
        let key_complex = PropertyKind::KEY | PropertyKind::COMPLEX_TYPE;
        assert_ne!(key_primitive, key_complex);
        assert!(key_primitive.contains(PropertyKind::PRIMITIVE));
        assert!(!key_complex.contains(PropertyKind::PRIMITIVE));
    }

    #[test]
    fn test_adding_flag_keeps_others() {
        let mut kind = PropertyKind::PRIMITIVE;
        kind |= PropertyKind::ETAG;
        assert!(kind.contains(PropertyKind::PRIMITIVE));
        assert!(kind.contains(PropertyKind::ETAG));

        kind.remove(PropertyKind::ETAG);
        assert_eq!(kind, PropertyKind::PRIMITIVE);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            (PropertyKind::PRIMITIVE | PropertyKind::KEY).to_string(),
            "Primitive | Key"
        );
        assert_eq!(PropertyKind::NONE.to_string(), "None");
        assert_eq!(
            format!("{:?}", PropertyKind::STREAM),
            "PropertyKind(Stream)"
        );
    }

    #[test]
    fn test_bits_round_trip() {
        let kind = PropertyKind::COLLECTION | PropertyKind::COMPLEX_TYPE;
        assert_eq!(PropertyKind::from_bits(kind.bits()), kind);
    }

    #[test]
    fn test_validate_reports_reason() {
        let err = (PropertyKind::ENTITY_REFERENCE | PropertyKind::PRIMITIVE)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid property kind `Primitive | EntityReference`: more than one value shape"
        );
    }
}
