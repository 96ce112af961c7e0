/*!
A labeled binary relation over resources, indexed by subject and by
object, with idempotent insertion and set-algebra operations (spec §3,
§4.1).
*/

use crate::model::resource::Fingerprint;
use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// Public Types ❱ TaxonomyEntry
// ------------------------------------------------------------------------------------------------

/// A single `(subject, predicate, object, inferred?)` relation entry.
/// Equality and hashing ignore `inferred` (spec §3, TaxonomyEntry row):
/// two entries that agree on subject/predicate/object are the same
/// entry regardless of how either was derived.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxonomyEntry {
    pub subject: Fingerprint,
    pub predicate: Fingerprint,
    pub object: Fingerprint,
    pub inferred: bool,
}

impl TaxonomyEntry {
    pub fn new(subject: Fingerprint, predicate: Fingerprint, object: Fingerprint) -> Self {
        Self {
            subject,
            predicate,
            object,
            inferred: false,
        }
    }

    pub fn inferred(mut self) -> Self {
        self.inferred = true;
        self
    }

    fn key(&self) -> (Fingerprint, Fingerprint, Fingerprint) {
        (self.subject, self.predicate, self.object)
    }
}

impl PartialEq for TaxonomyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TaxonomyEntry {}

impl PartialOrd for TaxonomyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TaxonomyEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Taxonomy
// ------------------------------------------------------------------------------------------------

/// A set of [`TaxonomyEntry`] with by-subject and by-object indexes
/// (spec §3, Taxonomy row; §4.1). All set operations are index-preserving
/// and return a fresh `Taxonomy`; none mutate their inputs.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Taxonomy {
    entries: BTreeSet<TaxonomyEntry>,
    #[cfg_attr(feature = "serde", serde(skip))]
    by_subject: BTreeMap<Fingerprint, BTreeSet<TaxonomyEntry>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    by_object: BTreeMap<Fingerprint, BTreeSet<TaxonomyEntry>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries.iter()
    }

    /// Idempotent insertion (spec §3, Taxonomy row: "Insertion is
    /// idempotent"). When an entry differing only in `inferred` is
    /// already present, the non-inferred version dominates (spec §4.1).
    pub fn insert(&mut self, entry: TaxonomyEntry) {
        let dominant = match self.entries.get(&entry) {
            Some(existing) if !existing.inferred => *existing,
            _ => entry,
        };
        self.entries.replace(dominant);
        self.by_subject
            .entry(dominant.subject)
            .or_default()
            .replace(dominant);
        self.by_object
            .entry(dominant.object)
            .or_default()
            .replace(dominant);
    }

    pub fn extend<I: IntoIterator<Item = TaxonomyEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.insert(entry);
        }
    }

    pub fn select_by_subject(&self, subject: Fingerprint) -> impl Iterator<Item = &TaxonomyEntry> {
        self.by_subject
            .get(&subject)
            .into_iter()
            .flat_map(|set| set.iter())
    }

    pub fn select_by_object(&self, object: Fingerprint) -> impl Iterator<Item = &TaxonomyEntry> {
        self.by_object
            .get(&object)
            .into_iter()
            .flat_map(|set| set.iter())
    }

    pub fn select_by_predicate(&self, predicate: Fingerprint) -> impl Iterator<Item = &TaxonomyEntry> + '_ {
        self.entries.iter().filter(move |e| e.predicate == predicate)
    }

    pub fn contains(&self, entry: &TaxonomyEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Union of `self` and `other`; when both sides have an entry
    /// differing only in `inferred`, the non-inferred entry dominates
    /// (spec §4.1).
    pub fn union(&self, other: &Taxonomy) -> Taxonomy {
        let mut result = self.clone();
        result.extend(other.entries.iter().copied());
        result
    }

    pub fn intersection(&self, other: &Taxonomy) -> Taxonomy {
        let mut result = Taxonomy::new();
        for entry in &self.entries {
            if other.entries.contains(entry) {
                result.insert(*entry);
            }
        }
        result
    }

    pub fn difference(&self, other: &Taxonomy) -> Taxonomy {
        let mut result = Taxonomy::new();
        for entry in &self.entries {
            if !other.entries.contains(entry) {
                result.insert(*entry);
            }
        }
        result
    }
}

impl FromIterator<TaxonomyEntry> for Taxonomy {
    fn from_iter<I: IntoIterator<Item = TaxonomyEntry>>(iter: I) -> Self {
        let mut taxonomy = Taxonomy::new();
        taxonomy.extend(iter);
        taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(n: u64) -> Fingerprint {
        Fingerprint::of(&n.to_string())
    }

    #[test]
    fn insertion_is_idempotent() {
        let mut t = Taxonomy::new();
        let e = TaxonomyEntry::new(fp(1), fp(2), fp(3));
        t.insert(e);
        t.insert(e);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn non_inferred_dominates_on_merge() {
        let mut t = Taxonomy::new();
        t.insert(TaxonomyEntry::new(fp(1), fp(2), fp(3)).inferred());
        t.insert(TaxonomyEntry::new(fp(1), fp(2), fp(3)));
        let only = t.iter().next().unwrap();
        assert!(!only.inferred);
    }

    #[test]
    fn subject_and_object_indexes_stay_consistent() {
        let mut t = Taxonomy::new();
        t.insert(TaxonomyEntry::new(fp(1), fp(9), fp(2)));
        t.insert(TaxonomyEntry::new(fp(1), fp(9), fp(3)));
        assert_eq!(t.select_by_subject(fp(1)).count(), 2);
        assert_eq!(t.select_by_object(fp(2)).count(), 1);
        assert_eq!(t.select_by_object(fp(3)).count(), 1);
    }

    #[test]
    fn set_ops_idempotent() {
        let mut t = Taxonomy::new();
        t.insert(TaxonomyEntry::new(fp(1), fp(2), fp(3)));
        t.insert(TaxonomyEntry::new(fp(4), fp(2), fp(5)));
        assert_eq!(t.union(&t).len(), t.len());
        assert_eq!(t.intersection(&t).len(), t.len());
        assert_eq!(t.difference(&t).len(), 0);
    }
}
