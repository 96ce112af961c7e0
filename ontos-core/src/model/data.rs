/*!
The A-Box container: facts, literals, and their taxonomies (spec §3,
"Data" row).
*/

use crate::model::fact::Fact;
use crate::model::resource::{Fingerprint, Literal};
use crate::model::taxonomy::{Taxonomy, TaxonomyEntry};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A container of facts and literals plus the `ClassType`, `SameAs`,
/// `DifferentFrom`, and `Assertions` taxonomies (spec §3).
///
/// `Assertions` is a single taxonomy whose predicate fingerprint is the
/// asserted property itself rather than a fixed relation marker, so an
/// individual predicate's assertions are retrieved with
/// [`Data::assertions_for`] rather than a dedicated field per predicate.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Data {
    facts: BTreeMap<Fingerprint, Fact>,
    literals: BTreeMap<Fingerprint, Literal>,
    pub class_type: Taxonomy,
    pub same_as: Taxonomy,
    pub different_from: Taxonomy,
    pub assertions: Taxonomy,
}

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn register_fact(&mut self, fact: Fact) {
        self.facts.insert(fact.fingerprint(), fact);
    }

    pub fn register_literal(&mut self, literal: Literal) {
        self.literals.insert(literal.fingerprint(), literal);
    }

    pub fn get_fact(&self, fingerprint: Fingerprint) -> Option<&Fact> {
        self.facts.get(&fingerprint)
    }

    pub fn get_fact_mut(&mut self, fingerprint: Fingerprint) -> Option<&mut Fact> {
        self.facts.get_mut(&fingerprint)
    }

    pub fn get_literal(&self, fingerprint: Fingerprint) -> Option<&Literal> {
        self.literals.get(&fingerprint)
    }

    pub fn contains_fact(&self, fingerprint: Fingerprint) -> bool {
        self.facts.contains_key(&fingerprint)
    }

    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.values()
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.values()
    }

    pub fn fingerprints(&self) -> impl Iterator<Item = Fingerprint> + '_ {
        self.facts.keys().copied()
    }

    pub fn insert_class_type(&mut self, fact: Fingerprint, class: Fingerprint) {
        self.class_type
            .insert(TaxonomyEntry::new(fact, Fingerprint::of("rdf:type"), class));
    }

    pub fn insert_same_as(&mut self, a: Fingerprint, b: Fingerprint) {
        self.same_as
            .insert(TaxonomyEntry::new(a, Fingerprint::of("owl:sameAs"), b));
    }

    pub fn insert_different_from(&mut self, a: Fingerprint, b: Fingerprint) {
        self.different_from
            .insert(TaxonomyEntry::new(a, Fingerprint::of("owl:differentFrom"), b));
    }

    /// Assert `subject predicate object`, where `predicate` is the
    /// fingerprint of the asserted property resource itself (spec §4.6,
    /// §4.7: assertions are selected by the restriction/membership
    /// predicate at query time, not grouped ahead of time).
    pub fn insert_assertion(&mut self, subject: Fingerprint, predicate: Fingerprint, object: Fingerprint) {
        self.assertions.insert(TaxonomyEntry::new(subject, predicate, object));
    }

    /// All assertions made with the given predicate, regardless of
    /// subject (spec §4.7, restriction membership checks).
    pub fn assertions_for(&self, predicate: Fingerprint) -> impl Iterator<Item = &TaxonomyEntry> + '_ {
        self.assertions.select_by_predicate(predicate)
    }

    pub fn union(&self, other: &Data) -> Data {
        let mut facts = self.facts.clone();
        for (fp, fact) in &other.facts {
            facts.entry(*fp).or_insert_with(|| fact.clone());
        }
        let mut literals = self.literals.clone();
        for (fp, literal) in &other.literals {
            literals.entry(*fp).or_insert_with(|| literal.clone());
        }
        Data {
            facts,
            literals,
            class_type: self.class_type.union(&other.class_type),
            same_as: self.same_as.union(&other.same_as),
            different_from: self.different_from.union(&other.different_from),
            assertions: self.assertions.union(&other.assertions),
        }
    }

    pub fn intersect(&self, other: &Data) -> Data {
        let facts = self
            .facts
            .iter()
            .filter(|(fp, _)| other.facts.contains_key(fp))
            .map(|(fp, f)| (*fp, f.clone()))
            .collect();
        let literals = self
            .literals
            .iter()
            .filter(|(fp, _)| other.literals.contains_key(fp))
            .map(|(fp, l)| (*fp, l.clone()))
            .collect();
        Data {
            facts,
            literals,
            class_type: self.class_type.intersection(&other.class_type),
            same_as: self.same_as.intersection(&other.same_as),
            different_from: self.different_from.intersection(&other.different_from),
            assertions: self.assertions.intersection(&other.assertions),
        }
    }

    /// Union-into-empty-then-subtract, matching `ClassModel::difference`
    /// (spec §9 open question (b)).
    pub fn difference(&self, other: &Data) -> Data {
        let seeded = Data::new().union(self);
        let facts = seeded
            .facts
            .into_iter()
            .filter(|(fp, _)| !other.facts.contains_key(fp))
            .collect();
        let literals = seeded
            .literals
            .into_iter()
            .filter(|(fp, _)| !other.literals.contains_key(fp))
            .collect();
        Data {
            facts,
            literals,
            class_type: seeded.class_type.difference(&other.class_type),
            same_as: seeded.same_as.difference(&other.same_as),
            different_from: seeded.different_from.difference(&other.different_from),
            assertions: seeded.assertions.difference(&other.assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resource::Resource;

    fn fact(iri: &str) -> Fact {
        Fact::new(Resource::new_iri(iri))
    }

    #[test]
    fn assertions_for_filters_by_predicate() {
        let mut data = Data::new();
        let alice = fact("http://example.org/alice");
        let bob = fact("http://example.org/bob");
        let (fp_alice, fp_bob) = (alice.fingerprint(), bob.fingerprint());
        data.register_fact(alice);
        data.register_fact(bob);
        let knows = Fingerprint::of("http://example.org/knows");
        let age = Fingerprint::of("http://example.org/age");
        data.insert_assertion(fp_alice, knows, fp_bob);
        data.insert_assertion(fp_alice, age, Fingerprint::of("42"));
        assert_eq!(data.assertions_for(knows).count(), 1);
        assert_eq!(data.assertions_for(age).count(), 1);
    }

    #[test]
    fn class_type_records_membership() {
        let mut data = Data::new();
        let alice = fact("http://example.org/alice");
        let fp_alice = alice.fingerprint();
        data.register_fact(alice);
        let person = Fingerprint::of("http://example.org/Person");
        data.insert_class_type(fp_alice, person);
        assert_eq!(data.class_type.select_by_subject(fp_alice).count(), 1);
    }
}
