/*!
Restriction, composite, and enumerated class membership (spec §4.7,
§4.8). [`members_of`] is the single dispatch point external callers use;
it never panics and returns an empty set for any class it cannot
classify.
*/

use crate::model::class::{ClassKind, RestrictionVariant};
use crate::model::class_model::ClassModel;
use crate::model::ontology::Ontology;
use crate::model::property_model::PropertyModel;
use crate::model::resource::{Fingerprint, Literal};
use crate::reasoning::closure::{equivalent_classes_of, same_facts_as, sub_classes_of};
use crate::stdlib::{rdfs, xsd};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Dispatch across plain / composite / enumerated / restriction /
/// literal-compatible classes (spec §6, `reason.membersOf`). The
/// returned fingerprints denote facts, except for `DataRange` and
/// literal-compatible plain classes, where they denote literals.
pub fn members_of(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let Some(resolved) = ontology.class_model().get(class) else {
        return BTreeSet::new();
    };
    match resolved.kind() {
        ClassKind::Restriction(restriction) => members_of_restriction(
            restriction.on_property(),
            restriction.variant(),
            ontology,
        ),
        ClassKind::Enumerate => enumerate_members(class, ontology),
        ClassKind::DataRange => datarange_members(class, ontology),
        ClassKind::Union => union_members(class, ontology),
        ClassKind::Intersection => intersection_members(class, ontology),
        ClassKind::Complement => complement_members(class, ontology),
        ClassKind::PlainOwl | ClassKind::PlainRdfs => {
            if is_rdfs_literal_compatible(class, ontology.class_model())
                || is_xsd_string_compatible(class, ontology.class_model())
                || is_typed_literal_compatible(class, ontology)
            {
                literal_compatible_members(class, ontology)
            } else {
                plain_class_members(class, ontology)
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ restriction membership (spec §4.7)
// ------------------------------------------------------------------------------------------------

fn members_of_restriction(property: Fingerprint, variant: &RestrictionVariant, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    match variant {
        RestrictionVariant::Unrefined => BTreeSet::new(),
        RestrictionVariant::Cardinality { min, max } => cardinality_members(property, *min, *max, ontology),
        RestrictionVariant::AllValuesFrom(cls) => values_from_members(property, *cls, ontology, true),
        RestrictionVariant::SomeValuesFrom(cls) => values_from_members(property, *cls, ontology, false),
        RestrictionVariant::HasValue(value) => has_value_members(property, *value, ontology),
    }
}

/// Sub-properties ∪ equivalent-properties ∪ `{property}` (spec §4.7
/// prologue).
fn compatible_predicates(property: Fingerprint, model: &PropertyModel) -> BTreeSet<Fingerprint> {
    let mut predicates = crate::reasoning::closure::sub_properties_of(property, model);
    predicates.extend(crate::reasoning::closure::equivalent_properties_of(property, model));
    predicates.insert(property);
    predicates
}

fn cardinality_members(property: Fingerprint, min: Option<u64>, max: Option<u64>, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let predicates = compatible_predicates(property, ontology.property_model());
    let mut counts: BTreeMap<Fingerprint, u64> = BTreeMap::new();
    for entry in ontology.data().assertions.iter().filter(|e| predicates.contains(&e.predicate)) {
        *counts.entry(entry.subject).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| {
            let min_ok = min.is_none_or(|m| m == 0 || *n >= m);
            let max_ok = max.is_none_or(|m| m == 0 || *n <= m);
            min_ok && max_ok
        })
        .map(|(fact, _)| fact)
        .collect()
}

fn compatible_classes_for(class: Fingerprint, model: &ClassModel) -> BTreeSet<Fingerprint> {
    let mut classes = sub_classes_of(class, model);
    classes.extend(equivalent_classes_of(class, model));
    classes.insert(class);
    classes
}

/// True when `object`'s asserted class type (or that type's sub/equivalent
/// closure) intersects `compatible_classes` (spec §4.7, allValuesFrom /
/// someValuesFrom).
fn object_qualifies(object: Fingerprint, compatible_classes: &BTreeSet<Fingerprint>, ontology: &Ontology) -> bool {
    for entry in ontology.data().class_type.select_by_subject(object) {
        if compatible_classes.contains(&entry.object) {
            return true;
        }
        let extended = compatible_classes_for(entry.object, ontology.class_model());
        if extended.iter().any(|c| compatible_classes.contains(c)) {
            return true;
        }
    }
    false
}

/// Shared eq/neq counter pass for `AllValuesFrom`/`SomeValuesFrom` (spec
/// §4.7). `strict` selects AllValuesFrom's `eq >= 1 && neq == 0` rule;
/// when false it is SomeValuesFrom's `eq >= 1` rule.
fn values_from_members(property: Fingerprint, class: Fingerprint, ontology: &Ontology, strict: bool) -> BTreeSet<Fingerprint> {
    let predicates = compatible_predicates(property, ontology.property_model());
    let compatible_classes = compatible_classes_for(class, ontology.class_model());
    let mut eq: BTreeMap<Fingerprint, u64> = BTreeMap::new();
    let mut neq: BTreeMap<Fingerprint, u64> = BTreeMap::new();
    for entry in ontology.data().assertions.iter().filter(|e| predicates.contains(&e.predicate)) {
        // Object assertions whose object is neither a fact nor a literal are ignored; these
        // restriction variants only ever reason over facts, so literal objects drop out here.
        if ontology.data().get_fact(entry.object).is_none() {
            continue;
        }
        if object_qualifies(entry.object, &compatible_classes, ontology) {
            *eq.entry(entry.subject).or_insert(0) += 1;
        } else {
            *neq.entry(entry.subject).or_insert(0) += 1;
        }
    }
    eq.keys()
        .copied()
        .filter(|subject| !strict || neq.get(subject).copied().unwrap_or(0) == 0)
        .collect()
}

fn has_value_members(property: Fingerprint, value: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let predicates = compatible_predicates(property, ontology.property_model());
    let data = ontology.data();
    if data.contains_fact(value) {
        let mut compatible_facts = same_facts_as(value, data);
        compatible_facts.insert(value);
        data.assertions
            .iter()
            .filter(|e| predicates.contains(&e.predicate) && compatible_facts.contains(&e.object))
            .map(|e| e.subject)
            .collect()
    } else if let Some(target) = data.get_literal(value) {
        data.assertions
            .iter()
            .filter(|e| predicates.contains(&e.predicate))
            .filter(|e| match data.get_literal(e.object) {
                Some(candidate) => literals_equal(candidate, target),
                None => false,
            })
            .map(|e| e.subject)
            .collect()
    } else {
        BTreeSet::new()
    }
}

/// Compare two literals under the query layer's RDF-term ordering:
/// numeric-category datatypes compare as numbers, everything else
/// compares lexically. Parse failures never abort the caller's iteration
/// — they are logged at trace level and treated as "not a match" (spec
/// §4.7, §9 "Exception swallowing in hasValue").
fn literals_equal(a: &Literal, b: &Literal) -> bool {
    if let (Some(da), Some(db)) = (a.datatype(), b.datatype()) {
        if is_numeric_category(da) && is_numeric_category(db) {
            return match (a.lexical_form().parse::<f64>(), b.lexical_form().parse::<f64>()) {
                (Ok(x), Ok(y)) => x == y,
                _ => {
                    trace!(lhs = a.lexical_form(), rhs = b.lexical_form(), "hasValue literal comparison failed to parse; treating as non-match");
                    false
                }
            };
        }
    }
    a.lexical_form() == b.lexical_form() && a.datatype() == b.datatype() && a.language() == b.language()
}

fn is_numeric_category(datatype: &str) -> bool {
    xsd::NUMERIC_CATEGORY.iter().any(|name| datatype == format!("{}{}", xsd::NAMESPACE, name))
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ composite / enumerated membership (spec §4.8)
// ------------------------------------------------------------------------------------------------

fn enumerate_members(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let data = ontology.data();
    let mut result = BTreeSet::new();
    for entry in ontology.class_model().one_of.select_by_subject(class) {
        result.insert(entry.object);
        result.extend(same_facts_as(entry.object, data));
    }
    result
}

fn datarange_members(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    ontology.class_model().one_of.select_by_subject(class).map(|e| e.object).collect()
}

fn union_members(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let children: Vec<Fingerprint> = ontology.class_model().union_of.select_by_subject(class).map(|e| e.object).collect();
    let mut result = BTreeSet::new();
    for child in children {
        result.extend(members_of(child, ontology));
    }
    result
}

/// Fold left over `intersectionOf` children; empty yields ∅ (spec §4.8).
fn intersection_members(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let mut children = ontology.class_model().intersection_of.select_by_subject(class).map(|e| e.object);
    let Some(first) = children.next() else {
        return BTreeSet::new();
    };
    let mut result = members_of(first, ontology);
    for child in children {
        let child_members = members_of(child, ontology);
        result.retain(|m| child_members.contains(m));
    }
    result
}

fn complement_members(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let Some(target) = ontology.class_model().complement_target(class) else {
        return BTreeSet::new();
    };
    let excluded = members_of(target, ontology);
    ontology.data().fingerprints().filter(|f| !excluded.contains(f)).collect()
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ literal-compatible classes (spec §4.8)
// ------------------------------------------------------------------------------------------------

fn is_rdfs_literal_compatible(class: Fingerprint, model: &ClassModel) -> bool {
    let literal = Fingerprint::of(&format!("{}{}", rdfs::NAMESPACE, rdfs::CLASS_LITERAL_NAME));
    class == literal || equivalent_classes_of(class, model).contains(&literal)
}

fn is_xsd_string_compatible(class: Fingerprint, model: &ClassModel) -> bool {
    let string = Fingerprint::of(&format!("{}{}", xsd::NAMESPACE, xsd::STRING));
    class == string || equivalent_classes_of(class, model).contains(&string)
}

/// True when `class` names a datatype that resolves, via BASE or the
/// user's class model, to a class equal to, subsumed by, or equivalent
/// to an asserted literal's datatype (spec §4.8, "literal-compatible
/// class" fallback case). Approximated here by checking whether any
/// registered literal's datatype IRI falls in `class`'s sub/equivalent
/// closure.
fn is_typed_literal_compatible(class: Fingerprint, ontology: &Ontology) -> bool {
    let compatible = compatible_classes_for(class, ontology.class_model());
    ontology
        .data()
        .literals()
        .any(|literal| literal.datatype().is_some_and(|dt| compatible.contains(&Fingerprint::of(dt))))
}

fn literal_compatible_members(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let model = ontology.class_model();
    let data = ontology.data();
    if is_rdfs_literal_compatible(class, model) {
        return data.literals().map(|l| l.fingerprint()).collect();
    }
    if is_xsd_string_compatible(class, model) {
        return data
            .literals()
            .filter(|l| l.datatype().is_none() || l.datatype().is_some_and(is_string_category))
            .map(|l| l.fingerprint())
            .collect();
    }
    let compatible = compatible_classes_for(class, model);
    data.literals()
        .filter(|l| l.datatype().is_some_and(|dt| compatible.contains(&Fingerprint::of(dt))))
        .map(|l| l.fingerprint())
        .collect()
}

fn is_string_category(datatype: &str) -> bool {
    xsd::STRING_CATEGORY.iter().any(|name| datatype == format!("{}{}", xsd::NAMESPACE, name))
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ plain class membership (spec §4.8)
// ------------------------------------------------------------------------------------------------

fn plain_class_members(class: Fingerprint, ontology: &Ontology) -> BTreeSet<Fingerprint> {
    let compatible = compatible_classes_for(class, ontology.class_model());
    let data = ontology.data();
    let mut result = BTreeSet::new();
    for compatible_class in &compatible {
        for entry in data.class_type.select_by_object(*compatible_class) {
            if result.insert(entry.subject) {
                result.extend(same_facts_as(entry.subject, data));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::class::{Class, ClassKind, Restriction, RestrictionVariant};
    use crate::model::fact::Fact;
    use crate::model::property::{Property, PropertyKind};
    use crate::model::resource::Resource;

    fn class(ontology: &mut Ontology, iri: &str, kind: ClassKind) -> Fingerprint {
        let c = Class::new(Resource::new_iri(iri), kind);
        let fp = c.fingerprint();
        ontology.class_model_mut().register(c);
        fp
    }

    fn fact(ontology: &mut Ontology, iri: &str) -> Fingerprint {
        let f = Fact::new(Resource::new_iri(iri));
        let fp = f.fingerprint();
        ontology.data_mut().register_fact(f);
        fp
    }

    #[test]
    fn cardinality_restriction_scenario() {
        let mut ontology = Ontology::new::<String>(None);
        let p = Property::new(Resource::new_iri("http://example.org/p"), PropertyKind::Object);
        let p_fp = p.fingerprint();
        ontology.property_model_mut().register(p);

        let mut restriction = Restriction::new(p_fp);
        restriction.refine(RestrictionVariant::Cardinality { min: Some(2), max: None });
        let r_fp = class(&mut ontology, "http://example.org/R", ClassKind::Restriction(restriction));

        let f1 = fact(&mut ontology, "http://example.org/f1");
        let f2 = fact(&mut ontology, "http://example.org/f2");
        let v1 = fact(&mut ontology, "http://example.org/v1");
        let v2 = fact(&mut ontology, "http://example.org/v2");

        ontology.data_mut().insert_assertion(f1, p_fp, v1);
        ontology.data_mut().insert_assertion(f1, p_fp, v2);
        ontology.data_mut().insert_assertion(f2, p_fp, v1);

        let members = members_of(r_fp, &ontology);
        assert!(members.contains(&f1));
        assert!(!members.contains(&f2));
    }

    #[test]
    fn union_class_scenario() {
        let mut ontology = Ontology::new::<String>(None);
        let c1 = class(&mut ontology, "http://example.org/C1", ClassKind::PlainOwl);
        let c2 = class(&mut ontology, "http://example.org/C2", ClassKind::PlainOwl);
        let u = class(&mut ontology, "http://example.org/U", ClassKind::Union);
        ontology.class_model_mut().insert_union_of(u, c1);
        ontology.class_model_mut().insert_union_of(u, c2);

        let i1 = fact(&mut ontology, "http://example.org/i1");
        let i2 = fact(&mut ontology, "http://example.org/i2");
        ontology.data_mut().insert_class_type(i1, c1);
        ontology.data_mut().insert_class_type(i2, c2);

        let members = members_of(u, &ontology);
        assert!(members.contains(&i1));
        assert!(members.contains(&i2));
    }
}
