/*!
Provide the `Fact` model type — an A-Box individual (spec §3, Fact row).
*/

use crate::model::resource::{Fingerprint, Resource};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fact {
    resource: Resource,
    /// Non-reserved predicates asserted of this fact whose object is a
    /// resource, preserved verbatim (spec §4.9 step 14, SPEC_FULL.md §3).
    custom_relations: BTreeMap<String, Vec<Fingerprint>>,
    /// Non-reserved predicates declared as annotation properties,
    /// preserved verbatim (spec §4.9 step 14).
    custom_annotations: BTreeMap<String, Vec<String>>,
}

impl Fact {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            custom_relations: BTreeMap::new(),
            custom_annotations: BTreeMap::new(),
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.resource.fingerprint()
    }

    pub fn custom_relations(&self) -> &BTreeMap<String, Vec<Fingerprint>> {
        &self.custom_relations
    }

    pub fn add_custom_relation(&mut self, predicate: String, object: Fingerprint) {
        self.custom_relations.entry(predicate).or_default().push(object);
    }

    pub fn custom_annotations(&self) -> &BTreeMap<String, Vec<String>> {
        &self.custom_annotations
    }

    pub fn add_custom_annotation(&mut self, predicate: String, value: String) {
        self.custom_annotations.entry(predicate).or_default().push(value);
    }
}
