/*!
The property container: registered properties plus their taxonomies
(spec §3, "PropertyModel" row).
*/

use crate::model::property::Property;
use crate::model::resource::Fingerprint;
use crate::model::taxonomy::{Taxonomy, TaxonomyEntry};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A container of properties plus the `SubPropertyOf`,
/// `EquivalentProperty`, and `InverseOf` taxonomies (spec §3).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyModel {
    properties: BTreeMap<Fingerprint, Property>,
    pub sub_property_of: Taxonomy,
    pub equivalent_property: Taxonomy,
    pub inverse_of: Taxonomy,
}

impl PropertyModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn register(&mut self, property: Property) {
        self.properties.insert(property.fingerprint(), property);
    }

    pub fn remove(&mut self, fingerprint: Fingerprint) -> Option<Property> {
        self.properties.remove(&fingerprint)
    }

    pub fn get(&self, fingerprint: Fingerprint) -> Option<&Property> {
        self.properties.get(&fingerprint)
    }

    pub fn get_mut(&mut self, fingerprint: Fingerprint) -> Option<&mut Property> {
        self.properties.get_mut(&fingerprint)
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.properties.contains_key(&fingerprint)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    pub fn fingerprints(&self) -> impl Iterator<Item = Fingerprint> + '_ {
        self.properties.keys().copied()
    }

    pub fn union(&self, other: &PropertyModel) -> PropertyModel {
        let mut properties = self.properties.clone();
        for (fp, property) in &other.properties {
            properties.entry(*fp).or_insert_with(|| property.clone());
        }
        PropertyModel {
            properties,
            sub_property_of: self.sub_property_of.union(&other.sub_property_of),
            equivalent_property: self.equivalent_property.union(&other.equivalent_property),
            inverse_of: self.inverse_of.union(&other.inverse_of),
        }
    }

    pub fn intersect(&self, other: &PropertyModel) -> PropertyModel {
        let properties = self
            .properties
            .iter()
            .filter(|(fp, _)| other.properties.contains_key(fp))
            .map(|(fp, p)| (*fp, p.clone()))
            .collect();
        PropertyModel {
            properties,
            sub_property_of: self.sub_property_of.intersection(&other.sub_property_of),
            equivalent_property: self
                .equivalent_property
                .intersection(&other.equivalent_property),
            inverse_of: self.inverse_of.intersection(&other.inverse_of),
        }
    }

    /// Union-into-empty-then-subtract, matching `ClassModel::difference`
    /// (spec §9 open question (b)).
    pub fn difference(&self, other: &PropertyModel) -> PropertyModel {
        let seeded = PropertyModel::new().union(self);
        let properties = seeded
            .properties
            .into_iter()
            .filter(|(fp, _)| !other.properties.contains_key(fp))
            .collect();
        PropertyModel {
            properties,
            sub_property_of: seeded.sub_property_of.difference(&other.sub_property_of),
            equivalent_property: seeded
                .equivalent_property
                .difference(&other.equivalent_property),
            inverse_of: seeded.inverse_of.difference(&other.inverse_of),
        }
    }

    pub fn insert_sub_property_of(&mut self, sub: Fingerprint, sup: Fingerprint) {
        self.sub_property_of
            .insert(TaxonomyEntry::new(sub, Fingerprint::of("rdfs:subPropertyOf"), sup));
    }

    pub fn insert_equivalent_property(&mut self, a: Fingerprint, b: Fingerprint) {
        self.equivalent_property
            .insert(TaxonomyEntry::new(a, Fingerprint::of("owl:equivalentProperty"), b));
    }

    pub fn insert_inverse_of(&mut self, a: Fingerprint, b: Fingerprint) {
        self.inverse_of
            .insert(TaxonomyEntry::new(a, Fingerprint::of("owl:inverseOf"), b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::PropertyKind;
    use crate::model::resource::Resource;

    #[test]
    fn register_and_get_round_trips() {
        let mut pm = PropertyModel::new();
        let p = Property::new(Resource::new_iri("http://example.org/p"), PropertyKind::Object);
        let fp = p.fingerprint();
        pm.register(p);
        assert!(pm.contains(fp));
        assert_eq!(pm.len(), 1);
    }

    #[test]
    fn difference_removes_shared_properties() {
        let mut a = PropertyModel::new();
        let mut b = PropertyModel::new();
        let p1 = Property::new(Resource::new_iri("http://example.org/p1"), PropertyKind::Object);
        let p2 = Property::new(Resource::new_iri("http://example.org/p2"), PropertyKind::Object);
        let fp1 = p1.fingerprint();
        a.register(p1.clone());
        b.register(p1);
        a.register(p2.clone());
        let diff = a.difference(&b);
        assert!(!diff.contains(fp1));
        assert!(diff.contains(p2.fingerprint()));
    }
}
