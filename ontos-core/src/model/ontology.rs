/*!
Provide the `Ontology` aggregate: the three typed containers plus
ontology-level annotations (spec §3, Ontology row).
*/

use crate::model::class_model::ClassModel;
use crate::model::data::Data;
use crate::model::property_model::PropertyModel;
use crate::model::resource::{Fingerprint, Literal};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The top-level aggregate produced by the graph decoder and consumed by
/// the graph encoder (spec §4.9, §4.10).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ontology {
    name: Option<String>,
    class_model: ClassModel,
    property_model: PropertyModel,
    data: Data,
    /// Ontology-level annotation values keyed by annotation property IRI
    /// (e.g. `rdfs:comment`, `owl:versionInfo`).
    annotations: BTreeMap<String, Vec<Literal>>,
    /// Custom relation triples whose predicate is not one of the reserved
    /// vocabulary IRIs, preserved verbatim on round-trip (spec §3 "Custom
    /// relations/annotations pass through unmodified").
    custom_relations: BTreeMap<String, Vec<Fingerprint>>,
    custom_annotations: BTreeMap<String, Vec<Literal>>,
}

impl Ontology {
    pub fn new<S: Into<String>>(name: Option<S>) -> Self {
        Self {
            name: name.map(Into::into),
            class_model: ClassModel::new(),
            property_model: PropertyModel::new(),
            data: Data::new(),
            annotations: BTreeMap::new(),
            custom_relations: BTreeMap::new(),
            custom_annotations: BTreeMap::new(),
        }
    }

    /// Fallible counterpart of [`Self::new`] for callers that must supply a
    /// name: rejects an empty/blank name as a construction precondition
    /// violation (spec §7.1, "creating an ontology with a null name").
    /// The graph decoder does not use this — it always starts from
    /// `Ontology::new(None)` and adopts a name from the graph only if one
    /// is present (spec §4.9 step 3), so a missing name is never fatal
    /// during decoding.
    pub fn try_new<S: Into<String>>(name: S) -> ontos_errors::Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ontos_errors::invalid_name_error(name));
        }
        Ok(Self::new(Some(name)))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    pub fn class_model(&self) -> &ClassModel {
        &self.class_model
    }

    pub fn class_model_mut(&mut self) -> &mut ClassModel {
        &mut self.class_model
    }

    pub fn property_model(&self) -> &PropertyModel {
        &self.property_model
    }

    pub fn property_model_mut(&mut self) -> &mut PropertyModel {
        &mut self.property_model
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Data {
        &mut self.data
    }

    pub fn annotations(&self) -> &BTreeMap<String, Vec<Literal>> {
        &self.annotations
    }

    pub fn add_annotation(&mut self, predicate: String, value: Literal) {
        self.annotations.entry(predicate).or_default().push(value);
    }

    pub fn custom_relations(&self) -> &BTreeMap<String, Vec<Fingerprint>> {
        &self.custom_relations
    }

    pub fn add_custom_relation(&mut self, predicate: String, object: Fingerprint) {
        self.custom_relations.entry(predicate).or_default().push(object);
    }

    pub fn custom_annotations(&self) -> &BTreeMap<String, Vec<Literal>> {
        &self.custom_annotations
    }

    pub fn add_custom_annotation(&mut self, predicate: String, value: Literal) {
        self.custom_annotations.entry(predicate).or_default().push(value);
    }

    /// Per-container union of every model plus ontology-level annotations
    /// (spec §6, `ontology.union`). The resulting ontology keeps `self`'s
    /// name.
    pub fn union(&self, other: &Ontology) -> Ontology {
        let mut merged = Ontology {
            name: self.name.clone(),
            class_model: self.class_model.union(&other.class_model),
            property_model: self.property_model.union(&other.property_model),
            data: self.data.union(&other.data),
            annotations: self.annotations.clone(),
            custom_relations: self.custom_relations.clone(),
            custom_annotations: self.custom_annotations.clone(),
        };
        for (k, vs) in &other.annotations {
            merged.annotations.entry(k.clone()).or_default().extend(vs.iter().cloned());
        }
        for (k, vs) in &other.custom_relations {
            merged.custom_relations.entry(k.clone()).or_default().extend(vs.iter().copied());
        }
        for (k, vs) in &other.custom_annotations {
            merged
                .custom_annotations
                .entry(k.clone())
                .or_default()
                .extend(vs.iter().cloned());
        }
        merged
    }

    pub fn intersect(&self, other: &Ontology) -> Ontology {
        Ontology {
            name: self.name.clone(),
            class_model: self.class_model.intersect(&other.class_model),
            property_model: self.property_model.intersect(&other.property_model),
            data: self.data.intersect(&other.data),
            annotations: self.annotations.clone(),
            custom_relations: self.custom_relations.clone(),
            custom_annotations: self.custom_annotations.clone(),
        }
    }

    /// Union `self` into an empty ontology, then subtract `other`,
    /// matching the per-container quirk spec §9 open question (b) calls
    /// for: the result is not a plain set-difference of `self` and
    /// `other`, but re-derived through the same union path every merge
    /// takes.
    pub fn difference(&self, other: &Ontology) -> Ontology {
        let seeded = Ontology::new::<String>(None).union(self);
        Ontology {
            name: self.name.clone(),
            class_model: seeded.class_model.difference(&other.class_model),
            property_model: seeded.property_model.difference(&other.property_model),
            data: seeded.data.difference(&other.data),
            annotations: seeded.annotations,
            custom_relations: seeded.custom_relations,
            custom_annotations: seeded.custom_annotations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::class::{Class, ClassKind};
    use crate::model::resource::Resource;

    #[test]
    fn try_new_rejects_blank_name() {
        assert!(Ontology::try_new("   ").is_err());
        assert!(Ontology::try_new("").is_err());
    }

    #[test]
    fn try_new_accepts_non_empty_name() {
        let ontology = Ontology::try_new("http://example.org/onto").unwrap();
        assert_eq!(ontology.name(), Some("http://example.org/onto"));
    }

    #[test]
    fn union_keeps_self_name() {
        let a = Ontology::new(Some("http://example.org/a"));
        let b = Ontology::new(Some("http://example.org/b"));
        let merged = a.union(&b);
        assert_eq!(merged.name(), Some("http://example.org/a"));
    }

    #[test]
    fn union_merges_classes_from_both_sides() {
        let mut a = Ontology::new::<String>(None);
        let mut b = Ontology::new::<String>(None);
        let ca = Class::new(Resource::new_iri("http://example.org/A"), ClassKind::PlainOwl);
        let cb = Class::new(Resource::new_iri("http://example.org/B"), ClassKind::PlainOwl);
        let (fpa, fpb) = (ca.fingerprint(), cb.fingerprint());
        a.class_model_mut().register(ca);
        b.class_model_mut().register(cb);
        let merged = a.union(&b);
        assert!(merged.class_model().contains(fpa));
        assert!(merged.class_model().contains(fpb));
    }
}
