/*!
Provide the `Property` model type (spec §3, Property row).
*/

use crate::model::resource::{Fingerprint, Resource};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// Public Types ❱ PropertyKind
// ------------------------------------------------------------------------------------------------

/// A property is at most one of these (spec §3 invariant 5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyKind {
    Annotation,
    Datatype,
    Object,
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ PropertyFlags
// ------------------------------------------------------------------------------------------------

/// Property characteristics. Symmetric/transitive/inverse-functional are
/// only legal on object properties (spec §3, Property row).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyFlags {
    pub deprecated: bool,
    pub functional: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub inverse_functional: bool,
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Property
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Property {
    resource: Resource,
    kind: PropertyKind,
    flags: PropertyFlags,
    domain: Option<Fingerprint>,
    range: Option<Fingerprint>,
    custom_annotations: BTreeMap<String, Vec<String>>,
}

impl Property {
    pub fn new(resource: Resource, kind: PropertyKind) -> Self {
        Self {
            resource,
            kind,
            flags: PropertyFlags::default(),
            domain: None,
            range: None,
            custom_annotations: BTreeMap::new(),
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.resource.fingerprint()
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Upgrade an annotation/datatype-declared property to `ObjectProperty`
    /// when a characteristic only legal on object properties is asserted
    /// (spec §4.9 step 4: "A property declared as only
    /// symmetric/transitive/IF but not as ObjectProperty is promoted to
    /// ObjectProperty").
    pub fn promote_to_object(&mut self) {
        self.kind = PropertyKind::Object;
    }

    pub fn is_object(&self) -> bool {
        self.kind == PropertyKind::Object
    }

    pub fn is_annotation(&self) -> bool {
        self.kind == PropertyKind::Annotation
    }

    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    /// Returns an [`ontos_errors::Error::IllegalPropertyCharacteristic`]
    /// when the flag is requested on a non-object property (spec §3,
    /// Property row; §7.1). The graph decoder never hits this: it promotes
    /// a property to `ObjectProperty` before setting any of these flags
    /// (spec §4.9 step 4), so this guards direct, non-decoder construction.
    pub fn set_symmetric(&mut self, value: bool) -> ontos_errors::Result<()> {
        if value && !self.is_object() {
            return Err(ontos_errors::illegal_property_characteristic_error(
                self.resource.identity().as_str(),
                "symmetric",
            ));
        }
        self.flags.symmetric = value;
        Ok(())
    }

    pub fn set_transitive(&mut self, value: bool) -> ontos_errors::Result<()> {
        if value && !self.is_object() {
            return Err(ontos_errors::illegal_property_characteristic_error(
                self.resource.identity().as_str(),
                "transitive",
            ));
        }
        self.flags.transitive = value;
        Ok(())
    }

    pub fn set_inverse_functional(&mut self, value: bool) -> ontos_errors::Result<()> {
        if value && !self.is_object() {
            return Err(ontos_errors::illegal_property_characteristic_error(
                self.resource.identity().as_str(),
                "inverseFunctional",
            ));
        }
        self.flags.inverse_functional = value;
        Ok(())
    }

    pub fn set_functional(&mut self, value: bool) {
        self.flags.functional = value;
    }

    pub fn set_deprecated(&mut self, value: bool) {
        self.flags.deprecated = value;
    }

    pub fn domain(&self) -> Option<Fingerprint> {
        self.domain
    }

    pub fn set_domain(&mut self, class: Fingerprint) {
        self.domain = Some(class);
    }

    pub fn range(&self) -> Option<Fingerprint> {
        self.range
    }

    pub fn set_range(&mut self, class: Fingerprint) {
        self.range = Some(class);
    }

    pub fn custom_annotations(&self) -> &BTreeMap<String, Vec<String>> {
        &self.custom_annotations
    }

    pub fn add_custom_annotation(&mut self, predicate: String, value: String) {
        self.custom_annotations.entry(predicate).or_default().push(value);
    }
}
