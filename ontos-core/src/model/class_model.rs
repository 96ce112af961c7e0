/*!
The T-Box class container: registered classes plus their taxonomies
(spec §3, "ClassModel" row).
*/

use crate::model::class::Class;
use crate::model::resource::Fingerprint;
use crate::model::taxonomy::{Taxonomy, TaxonomyEntry};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A container of classes plus the `SubClassOf`, `EquivalentClass`,
/// `DisjointWith`, `UnionOf`, `IntersectionOf`, and `OneOf` taxonomies
/// (spec §3).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassModel {
    classes: BTreeMap<Fingerprint, Class>,
    pub sub_class_of: Taxonomy,
    pub equivalent_class: Taxonomy,
    pub disjoint_with: Taxonomy,
    pub union_of: Taxonomy,
    pub intersection_of: Taxonomy,
    /// Used by both `oneOf` (enumerate classes, over facts) and `oneOf`
    /// (datarange classes, over literals) — spec §3, "OneOf (for
    /// enumerate & datarange)".
    pub one_of: Taxonomy,
    /// `complementOf`'s single target class. Not named among spec §3's
    /// ClassModel taxonomies, but the decoder (spec §4.9 step 6)
    /// reclassifies `complementOf` subjects exactly like the other
    /// composites, so it needs a home next to `union_of`/`intersection_of`.
    pub complement_of: Taxonomy,
}

impl ClassModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn register(&mut self, class: Class) {
        self.classes.insert(class.fingerprint(), class);
    }

    pub fn remove(&mut self, fingerprint: Fingerprint) -> Option<Class> {
        self.classes.remove(&fingerprint)
    }

    pub fn get(&self, fingerprint: Fingerprint) -> Option<&Class> {
        self.classes.get(&fingerprint)
    }

    pub fn get_mut(&mut self, fingerprint: Fingerprint) -> Option<&mut Class> {
        self.classes.get_mut(&fingerprint)
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.classes.contains_key(&fingerprint)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    pub fn fingerprints(&self) -> impl Iterator<Item = Fingerprint> + '_ {
        self.classes.keys().copied()
    }

    /// Union every container's classes and taxonomies (spec §6,
    /// `ontology.union`).
    pub fn union(&self, other: &ClassModel) -> ClassModel {
        let mut classes = self.classes.clone();
        for (fp, class) in &other.classes {
            classes.entry(*fp).or_insert_with(|| class.clone());
        }
        ClassModel {
            classes,
            sub_class_of: self.sub_class_of.union(&other.sub_class_of),
            equivalent_class: self.equivalent_class.union(&other.equivalent_class),
            disjoint_with: self.disjoint_with.union(&other.disjoint_with),
            union_of: self.union_of.union(&other.union_of),
            intersection_of: self.intersection_of.union(&other.intersection_of),
            one_of: self.one_of.union(&other.one_of),
            complement_of: self.complement_of.union(&other.complement_of),
        }
    }

    pub fn intersect(&self, other: &ClassModel) -> ClassModel {
        let classes = self
            .classes
            .iter()
            .filter(|(fp, _)| other.classes.contains_key(fp))
            .map(|(fp, c)| (*fp, c.clone()))
            .collect();
        ClassModel {
            classes,
            sub_class_of: self.sub_class_of.intersection(&other.sub_class_of),
            equivalent_class: self.equivalent_class.intersection(&other.equivalent_class),
            disjoint_with: self.disjoint_with.intersection(&other.disjoint_with),
            union_of: self.union_of.intersection(&other.union_of),
            intersection_of: self.intersection_of.intersection(&other.intersection_of),
            one_of: self.one_of.intersection(&other.one_of),
            complement_of: self.complement_of.intersection(&other.complement_of),
        }
    }

    /// Per spec §9 open question (b): replicate the source's
    /// union-into-empty-then-subtract `DifferenceWith` path verbatim
    /// rather than a naive set-difference.
    pub fn difference(&self, other: &ClassModel) -> ClassModel {
        let seeded = ClassModel::new().union(self);
        let classes = seeded
            .classes
            .into_iter()
            .filter(|(fp, _)| !other.classes.contains_key(fp))
            .collect();
        ClassModel {
            classes,
            sub_class_of: seeded.sub_class_of.difference(&other.sub_class_of),
            equivalent_class: seeded.equivalent_class.difference(&other.equivalent_class),
            disjoint_with: seeded.disjoint_with.difference(&other.disjoint_with),
            union_of: seeded.union_of.difference(&other.union_of),
            intersection_of: seeded.intersection_of.difference(&other.intersection_of),
            one_of: seeded.one_of.difference(&other.one_of),
            complement_of: seeded.complement_of.difference(&other.complement_of),
        }
    }

    pub fn insert_sub_class_of(&mut self, sub: Fingerprint, sup: Fingerprint) {
        self.sub_class_of.insert(TaxonomyEntry::new(sub, Fingerprint::of("rdfs:subClassOf"), sup));
    }

    pub fn insert_equivalent_class(&mut self, a: Fingerprint, b: Fingerprint) {
        self.equivalent_class
            .insert(TaxonomyEntry::new(a, Fingerprint::of("owl:equivalentClass"), b));
    }

    pub fn insert_disjoint_with(&mut self, a: Fingerprint, b: Fingerprint) {
        self.disjoint_with
            .insert(TaxonomyEntry::new(a, Fingerprint::of("owl:disjointWith"), b));
    }

    pub fn insert_union_of(&mut self, composite: Fingerprint, member: Fingerprint) {
        self.union_of
            .insert(TaxonomyEntry::new(composite, Fingerprint::of("owl:unionOf"), member));
    }

    pub fn insert_intersection_of(&mut self, composite: Fingerprint, member: Fingerprint) {
        self.intersection_of
            .insert(TaxonomyEntry::new(composite, Fingerprint::of("owl:intersectionOf"), member));
    }

    pub fn insert_one_of(&mut self, composite: Fingerprint, member: Fingerprint) {
        self.one_of
            .insert(TaxonomyEntry::new(composite, Fingerprint::of("owl:oneOf"), member));
    }

    pub fn insert_complement_of(&mut self, composite: Fingerprint, target: Fingerprint) {
        self.complement_of
            .insert(TaxonomyEntry::new(composite, Fingerprint::of("owl:complementOf"), target));
    }

    pub fn complement_target(&self, composite: Fingerprint) -> Option<Fingerprint> {
        self.complement_of.select_by_subject(composite).next().map(|e| e.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::class::ClassKind;
    use crate::model::resource::Resource;

    fn class(iri: &str) -> Class {
        Class::new(Resource::new_iri(iri), ClassKind::PlainOwl)
    }

    #[test]
    fn register_and_get_round_trips() {
        let mut cm = ClassModel::new();
        let c = class("http://example.org/A");
        let fp = c.fingerprint();
        cm.register(c);
        assert!(cm.contains(fp));
        assert_eq!(cm.len(), 1);
    }

    #[test]
    fn union_keeps_both_sides_taxonomies() {
        let mut a = ClassModel::new();
        let mut b = ClassModel::new();
        let (c1, c2) = (class("http://example.org/A"), class("http://example.org/B"));
        let (fp1, fp2) = (c1.fingerprint(), c2.fingerprint());
        a.register(c1);
        b.register(c2);
        a.insert_sub_class_of(fp1, fp2);
        let merged = a.union(&b);
        assert!(merged.contains(fp1));
        assert!(merged.contains(fp2));
        assert_eq!(merged.sub_class_of.len(), 1);
    }
}
