/*!
Provide the `Class` and `Restriction` model types (spec §3, Class and
Restriction rows; §9 "Polymorphic class hierarchy").

The source material expresses restriction / enumerate / datarange /
composite / complement variants as a subclass hierarchy; here they are a
single tagged variant carried on the class record, discriminated by
[`ClassKind`]. Reclassification during decoding (spec §4.9 step 6) is a
variant mutation in place rather than a type change.
*/

use crate::model::resource::{Fingerprint, Resource};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// Public Types ❱ ClassKind
// ------------------------------------------------------------------------------------------------

/// The kind of a class, immutable after construction except for the
/// one-time reclassification composite classes undergo while decoding
/// (spec §3, Class row: "Kind is immutable after construction").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassKind {
    PlainOwl,
    PlainRdfs,
    Restriction(Restriction),
    Enumerate,
    DataRange,
    Union,
    Intersection,
    Complement,
}

impl ClassKind {
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Union | Self::Intersection | Self::Complement)
    }

    pub fn is_restriction(&self) -> bool {
        matches!(self, Self::Restriction(_))
    }
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Restriction
// ------------------------------------------------------------------------------------------------

/// An OWL restriction variant (spec §3, Restriction row; §4.7). The
/// variant may be refined exactly once after construction, matching the
/// decoder's probe-then-refine sequence (spec §4.9 step 8).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RestrictionVariant {
    /// Unrefined: the restriction exists but no cardinality/value
    /// constraint has been attached yet.
    Unrefined,
    Cardinality {
        min: Option<u64>,
        max: Option<u64>,
    },
    AllValuesFrom(Fingerprint),
    SomeValuesFrom(Fingerprint),
    HasValue(Fingerprint),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Restriction {
    on_property: Fingerprint,
    variant: RestrictionVariant,
    refined: bool,
}

impl Restriction {
    pub fn new(on_property: Fingerprint) -> Self {
        Self {
            on_property,
            variant: RestrictionVariant::Unrefined,
            refined: false,
        }
    }

    pub fn on_property(&self) -> Fingerprint {
        self.on_property
    }

    pub fn variant(&self) -> &RestrictionVariant {
        &self.variant
    }

    /// Refine the variant once; subsequent calls are no-ops, matching the
    /// decoder's first-match-wins probe order (spec §4.9 step 8, §9 open
    /// question (a)).
    pub fn refine(&mut self, variant: RestrictionVariant) -> bool {
        if self.refined {
            return false;
        }
        self.variant = variant;
        self.refined = true;
        true
    }

    pub fn is_refined(&self) -> bool {
        self.refined
    }
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Class
// ------------------------------------------------------------------------------------------------

/// A class resource plus its kind and flags (spec §3, Class row).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Class {
    resource: Resource,
    kind: ClassKind,
    deprecated: bool,
    custom_annotations: BTreeMap<String, Vec<String>>,
}

impl Class {
    pub fn new(resource: Resource, kind: ClassKind) -> Self {
        Self {
            resource,
            kind,
            deprecated: false,
            custom_annotations: BTreeMap::new(),
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.resource.fingerprint()
    }

    pub fn kind(&self) -> &ClassKind {
        &self.kind
    }

    /// Reclassify a plain class into a composite/enumerate/datarange
    /// variant (spec §4.9 step 6). Only legal from a plain kind; returns
    /// `false` and leaves `self` untouched otherwise, so a conflicting
    /// second reclassification can be detected and warned on by the
    /// caller (spec §9 open question (a)).
    pub fn reclassify(&mut self, kind: ClassKind) -> bool {
        match self.kind {
            ClassKind::PlainOwl | ClassKind::PlainRdfs => {
                self.kind = kind;
                true
            }
            _ => false,
        }
    }

    pub fn refine_restriction(&mut self, variant: RestrictionVariant) -> bool {
        if let ClassKind::Restriction(r) = &mut self.kind {
            r.refine(variant)
        } else {
            false
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn set_deprecated(&mut self, deprecated: bool) {
        self.deprecated = deprecated;
    }

    pub fn custom_annotations(&self) -> &BTreeMap<String, Vec<String>> {
        &self.custom_annotations
    }

    pub fn add_custom_annotation(&mut self, predicate: String, value: String) {
        self.custom_annotations.entry(predicate).or_default().push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restriction_refines_once() {
        let mut r = Restriction::new(Fingerprint::of("p"));
        assert!(r.refine(RestrictionVariant::SomeValuesFrom(Fingerprint::of("c"))));
        assert!(!r.refine(RestrictionVariant::HasValue(Fingerprint::of("v"))));
        assert!(matches!(r.variant(), RestrictionVariant::SomeValuesFrom(_)));
    }

    #[test]
    fn class_reclassifies_only_from_plain() {
        let mut c = Class::new(Resource::new_iri("http://example.org/U"), ClassKind::PlainOwl);
        assert!(c.reclassify(ClassKind::Union));
        assert!(!c.reclassify(ClassKind::Intersection));
        assert_eq!(c.kind(), &ClassKind::Union);
    }
}
