/*!
Taxonomic and A-Box closure procedures (spec §4.2-§4.6).

Every closure here is computed with an explicit visit context (a set of
already-seen fingerprints) so that cyclic axiom graphs terminate in time
linear in the number of axioms (spec §8, "Termination under cycles").
*/

use crate::model::class_model::ClassModel;
use crate::model::data::Data;
use crate::model::property_model::PropertyModel;
use crate::model::resource::Fingerprint;
use crate::model::taxonomy::Taxonomy;
use std::collections::{BTreeSet, VecDeque};

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ equivalence-family closures
// ------------------------------------------------------------------------------------------------

/// Symmetric transitive closure of a single taxonomy, starting at `seed`
/// and excluding `seed` itself from the result (spec §4.3). The store
/// holds only one direction per entry; this treats every entry as
/// undirected so the result is the same regardless of which side `seed`
/// appears on.
fn symmetric_closure(seed: Fingerprint, taxonomy: &Taxonomy) -> BTreeSet<Fingerprint> {
    let mut visited = BTreeSet::new();
    visited.insert(seed);
    let mut queue = VecDeque::new();
    queue.push_back(seed);
    let mut result = BTreeSet::new();
    while let Some(node) = queue.pop_front() {
        let neighbors = taxonomy
            .select_by_subject(node)
            .map(|e| e.object)
            .chain(taxonomy.select_by_object(node).map(|e| e.subject));
        for neighbor in neighbors {
            if visited.insert(neighbor) {
                result.insert(neighbor);
                queue.push_back(neighbor);
            }
        }
    }
    result
}

pub fn equivalent_classes_of(class: Fingerprint, model: &ClassModel) -> BTreeSet<Fingerprint> {
    symmetric_closure(class, &model.equivalent_class)
}

pub fn equivalent_properties_of(property: Fingerprint, model: &PropertyModel) -> BTreeSet<Fingerprint> {
    symmetric_closure(property, &model.equivalent_property)
}

pub fn same_facts_as(fact: Fingerprint, data: &Data) -> BTreeSet<Fingerprint> {
    symmetric_closure(fact, &data.same_as)
}

/// `owl:inverseOf` is declared symmetric at the model level (spec §4.9
/// step 10: only between object properties) but is not itself
/// transitive — callers get the direct inverse set, treating the store's
/// single direction as undirected.
pub fn inverse_properties_of(property: Fingerprint, model: &PropertyModel) -> BTreeSet<Fingerprint> {
    model
        .inverse_of
        .select_by_subject(property)
        .map(|e| e.object)
        .chain(model.inverse_of.select_by_object(property).map(|e| e.subject))
        .collect()
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ class taxonomy closures
// ------------------------------------------------------------------------------------------------

/// Transitive closure of `SubClassOf` reversed (everything that is a
/// specialization of `class`), extended through equivalence at every
/// step (spec §4.2). Monotone worklist accumulation with early exit when
/// nothing new is discovered guarantees termination under cycles.
pub fn sub_classes_of(class: Fingerprint, model: &ClassModel) -> BTreeSet<Fingerprint> {
    let mut result = BTreeSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(class);
    let mut seen = BTreeSet::new();
    seen.insert(class);
    while let Some(node) = queue.pop_front() {
        for entry in model.sub_class_of.select_by_object(node) {
            if seen.insert(entry.subject) {
                result.insert(entry.subject);
                queue.push_back(entry.subject);
            }
        }
        for eq in equivalent_classes_of(node, model) {
            if seen.insert(eq) {
                result.insert(eq);
                queue.push_back(eq);
            }
        }
    }
    result
}

/// The dual of [`sub_classes_of`]: everything `class` is a specialization
/// of (spec §4.2).
pub fn super_classes_of(class: Fingerprint, model: &ClassModel) -> BTreeSet<Fingerprint> {
    let mut result = BTreeSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(class);
    let mut seen = BTreeSet::new();
    seen.insert(class);
    while let Some(node) = queue.pop_front() {
        for entry in model.sub_class_of.select_by_subject(node) {
            if seen.insert(entry.object) {
                result.insert(entry.object);
                queue.push_back(entry.object);
            }
        }
        for eq in equivalent_classes_of(node, model) {
            if seen.insert(eq) {
                result.insert(eq);
                queue.push_back(eq);
            }
        }
    }
    result
}

pub fn sub_properties_of(property: Fingerprint, model: &PropertyModel) -> BTreeSet<Fingerprint> {
    let mut result = BTreeSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(property);
    let mut seen = BTreeSet::new();
    seen.insert(property);
    while let Some(node) = queue.pop_front() {
        for entry in model.sub_property_of.select_by_object(node) {
            if seen.insert(entry.subject) {
                result.insert(entry.subject);
                queue.push_back(entry.subject);
            }
        }
        for eq in equivalent_properties_of(node, model) {
            if seen.insert(eq) {
                result.insert(eq);
                queue.push_back(eq);
            }
        }
    }
    result
}

pub fn super_properties_of(property: Fingerprint, model: &PropertyModel) -> BTreeSet<Fingerprint> {
    let mut result = BTreeSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(property);
    let mut seen = BTreeSet::new();
    seen.insert(property);
    while let Some(node) = queue.pop_front() {
        for entry in model.sub_property_of.select_by_subject(node) {
            if seen.insert(entry.object) {
                result.insert(entry.object);
                queue.push_back(entry.object);
            }
        }
        for eq in equivalent_properties_of(node, model) {
            if seen.insert(eq) {
                result.insert(eq);
                queue.push_back(eq);
            }
        }
    }
    result
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ disjointWith closure
// ------------------------------------------------------------------------------------------------

/// `EnlistDisjointClasses` (spec §4.4): direct disjoints plus their
/// equivalents, plus their transitive subclasses, plus the disjoints of
/// every superclass/equivalent of `class`, recursively, all sharing one
/// visit context.
pub fn disjoint_classes_of(class: Fingerprint, model: &ClassModel) -> BTreeSet<Fingerprint> {
    let mut visited = BTreeSet::new();
    disjoint_closure(class, model, &mut visited)
}

fn disjoint_closure(node: Fingerprint, model: &ClassModel, visited: &mut BTreeSet<Fingerprint>) -> BTreeSet<Fingerprint> {
    if !visited.insert(node) {
        return BTreeSet::new();
    }
    let mut result = BTreeSet::new();

    // Pass 1: direct disjoints plus their equivalents.
    let direct: Vec<Fingerprint> = model
        .disjoint_with
        .select_by_subject(node)
        .map(|e| e.object)
        .chain(model.disjoint_with.select_by_object(node).map(|e| e.subject))
        .collect();
    for other in &direct {
        result.insert(*other);
        result.extend(equivalent_classes_of(*other, model));
    }

    // Pass 2: transitive subclasses of every disjoint found so far.
    let pass1: Vec<Fingerprint> = result.iter().copied().collect();
    for disjoint in pass1 {
        result.extend(sub_classes_of(disjoint, model));
    }

    // Pass 3: recurse into the disjoints of every superclass/equivalent of `node`.
    let mut recurse_targets = super_classes_of(node, model);
    recurse_targets.extend(equivalent_classes_of(node, model));
    for target in recurse_targets {
        result.extend(disjoint_closure(target, model, visited));
    }

    result
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ sameAs / differentFrom closure
// ------------------------------------------------------------------------------------------------

/// `EnlistDifferentFrom` (spec §4.5): direct differentFrom entries plus
/// each such fact's sameAs-closure, plus, for each member of
/// `sameAs(f)`, its own differentFrom closure; one shared visit context.
pub fn different_facts_from(fact: Fingerprint, data: &Data) -> BTreeSet<Fingerprint> {
    let mut visited = BTreeSet::new();
    different_closure(fact, data, &mut visited)
}

fn different_closure(node: Fingerprint, data: &Data, visited: &mut BTreeSet<Fingerprint>) -> BTreeSet<Fingerprint> {
    if !visited.insert(node) {
        return BTreeSet::new();
    }
    let mut result = BTreeSet::new();

    let direct: Vec<Fingerprint> = data
        .different_from
        .select_by_subject(node)
        .map(|e| e.object)
        .chain(data.different_from.select_by_object(node).map(|e| e.subject))
        .collect();
    for other in &direct {
        result.insert(*other);
        result.extend(same_facts_as(*other, data));
    }

    for same in same_facts_as(node, data) {
        result.extend(different_closure(same, data, visited));
    }

    result
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ transitive object-property assertions
// ------------------------------------------------------------------------------------------------

/// `EnlistTransitiveAssertions` (spec §4.6): reachability of `fact`
/// through `property`-typed assertions. Does not itself check that
/// `property` is flagged transitive — callers query this only once they
/// have confirmed the flag.
pub fn transitive_assertions_of(fact: Fingerprint, property: Fingerprint, data: &Data) -> BTreeSet<Fingerprint> {
    let mut visited = BTreeSet::new();
    transitive_closure(fact, property, data, &mut visited)
}

fn transitive_closure(
    node: Fingerprint,
    property: Fingerprint,
    data: &Data,
    visited: &mut BTreeSet<Fingerprint>,
) -> BTreeSet<Fingerprint> {
    if !visited.insert(node) {
        return BTreeSet::new();
    }
    let mut result = BTreeSet::new();
    for entry in data.assertions.select_by_subject(node).filter(|e| e.predicate == property) {
        result.insert(entry.object);
        result.extend(transitive_closure(entry.object, property, data, visited));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::class::{Class, ClassKind};
    use crate::model::resource::Resource;

    fn register(model: &mut ClassModel, iri: &str) -> Fingerprint {
        let class = Class::new(Resource::new_iri(iri), ClassKind::PlainOwl);
        let fp = class.fingerprint();
        model.register(class);
        fp
    }

    #[test]
    fn transitive_closure_scenario() {
        let mut model = ClassModel::new();
        let a = register(&mut model, "http://example.org/A");
        let b = register(&mut model, "http://example.org/B");
        let c = register(&mut model, "http://example.org/C");
        model.insert_sub_class_of(a, b);
        model.insert_sub_class_of(b, c);

        let subs_of_c = sub_classes_of(c, &model);
        assert!(subs_of_c.contains(&a));
        assert!(subs_of_c.contains(&b));

        let supers_of_a = super_classes_of(a, &model);
        assert!(supers_of_a.contains(&b));
        assert!(supers_of_a.contains(&c));
    }

    #[test]
    fn equivalence_cycle_terminates() {
        let mut model = ClassModel::new();
        let a = register(&mut model, "http://example.org/A");
        let b = register(&mut model, "http://example.org/B");
        model.insert_equivalent_class(a, b);
        model.insert_equivalent_class(b, a);

        let eq = equivalent_classes_of(a, &model);
        assert_eq!(eq.len(), 1);
        assert!(eq.contains(&b));
    }

    #[test]
    fn disjointness_propagates_to_subclasses() {
        let mut model = ClassModel::new();
        let c = register(&mut model, "http://example.org/C");
        let d = register(&mut model, "http://example.org/D");
        let e = register(&mut model, "http://example.org/E");
        model.insert_disjoint_with(c, d);
        model.insert_sub_class_of(e, d);

        let disjoint_from_c = disjoint_classes_of(c, &model);
        assert!(disjoint_from_c.contains(&d));
        assert!(disjoint_from_c.contains(&e));
    }
}
