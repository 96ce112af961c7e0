//! End-to-end reasoning scenarios built directly against the model API,
//! without going through the graph decoder (spec §8).

use ontos_core::model::class::{Class, ClassKind, Restriction, RestrictionVariant};
use ontos_core::model::class_model::ClassModel;
use ontos_core::model::fact::Fact;
use ontos_core::model::ontology::Ontology;
use ontos_core::model::property::{Property, PropertyKind};
use ontos_core::model::resource::Resource;
use ontos_core::model::taxonomy::TaxonomyEntry;
use ontos_core::reasoning::closure::{
    disjoint_classes_of, same_facts_as, sub_classes_of, super_classes_of, transitive_assertions_of,
};
use ontos_core::reasoning::membership::members_of;

fn class(model: &mut ClassModel, iri: &str) -> ontos_core::model::resource::Fingerprint {
    let c = Class::new(Resource::new_iri(iri), ClassKind::PlainOwl);
    let fp = c.fingerprint();
    model.register(c);
    fp
}

#[test]
fn transitive_subclass_chain_is_reachable_in_either_direction() {
    let mut ontology = Ontology::new(Some("http://example.org/onto"));
    let model = ontology.class_model_mut();
    let animal = class(model, "http://example.org/Animal");
    let mammal = class(model, "http://example.org/Mammal");
    let dog = class(model, "http://example.org/Dog");

    model.insert_sub_class_of(mammal, animal);
    model.insert_sub_class_of(dog, mammal);

    let supers = super_classes_of(dog, ontology.class_model());
    assert!(supers.contains(&mammal));
    assert!(supers.contains(&animal));

    let subs = sub_classes_of(animal, ontology.class_model());
    assert!(subs.contains(&mammal));
    assert!(subs.contains(&dog));
}

#[test]
fn disjointness_propagates_down_the_subclass_hierarchy() {
    let mut ontology = Ontology::new(Some("http://example.org/onto"));
    let model = ontology.class_model_mut();
    let plant = class(model, "http://example.org/Plant");
    let animal = class(model, "http://example.org/Animal");
    let dog = class(model, "http://example.org/Dog");

    model.insert_sub_class_of(dog, animal);
    model.insert_disjoint_with(animal, plant);

    let disjoint = disjoint_classes_of(dog, ontology.class_model());
    assert!(disjoint.contains(&plant));
}

#[test]
fn same_as_is_symmetric_and_terminates_on_a_cycle() {
    let mut ontology = Ontology::new(Some("http://example.org/onto"));
    let alice = Fact::new(Resource::new_iri("http://example.org/alice"));
    let bob = Fact::new(Resource::new_iri("http://example.org/bob"));
    let carol = Fact::new(Resource::new_iri("http://example.org/carol"));
    let (fp_a, fp_b, fp_c) = (alice.fingerprint(), bob.fingerprint(), carol.fingerprint());
    ontology.data_mut().register_fact(alice);
    ontology.data_mut().register_fact(bob);
    ontology.data_mut().register_fact(carol);

    // a sameAs b, b sameAs c, c sameAs a: a cycle that must still terminate.
    ontology.data_mut().insert_same_as(fp_a, fp_b);
    ontology.data_mut().insert_same_as(fp_b, fp_c);
    ontology.data_mut().insert_same_as(fp_c, fp_a);

    let same_as_a = same_facts_as(fp_a, ontology.data());
    assert!(same_as_a.contains(&fp_b));
    assert!(same_as_a.contains(&fp_c));

    let same_as_b = same_facts_as(fp_b, ontology.data());
    assert!(same_as_b.contains(&fp_a));
}

#[test]
fn transitive_object_property_chains_through_assertions() {
    let mut ontology = Ontology::new(Some("http://example.org/onto"));
    let mut ancestor_of = Property::new(Resource::new_iri("http://example.org/ancestorOf"), PropertyKind::Object);
    ancestor_of.set_transitive(true).unwrap();
    let prop_fp = ancestor_of.fingerprint();
    ontology.property_model_mut().register(ancestor_of);

    let grandparent = Fact::new(Resource::new_iri("http://example.org/grandparent"));
    let parent = Fact::new(Resource::new_iri("http://example.org/parent"));
    let child = Fact::new(Resource::new_iri("http://example.org/child"));
    let (fp_gp, fp_p, fp_c) = (
        grandparent.fingerprint(),
        parent.fingerprint(),
        child.fingerprint(),
    );
    ontology.data_mut().register_fact(grandparent);
    ontology.data_mut().register_fact(parent);
    ontology.data_mut().register_fact(child);

    ontology.data_mut().insert_assertion(fp_gp, prop_fp, fp_p);
    ontology.data_mut().insert_assertion(fp_p, prop_fp, fp_c);

    let reachable = transitive_assertions_of(fp_gp, prop_fp, ontology.data());
    assert!(reachable.contains(&fp_p));
    assert!(reachable.contains(&fp_c));
}

#[test]
fn cardinality_restriction_counts_distinct_assertions() {
    let mut ontology = Ontology::new(Some("http://example.org/onto"));
    let has_child = Property::new(Resource::new_iri("http://example.org/hasChild"), PropertyKind::Object);
    let prop_fp = has_child.fingerprint();
    ontology.property_model_mut().register(has_child);

    let restriction = Restriction::new(prop_fp);
    let mut class = Class::new(
        Resource::new_blank("r1"),
        ClassKind::Restriction(restriction),
    );
    class.refine_restriction(RestrictionVariant::Cardinality {
        min: Some(2),
        max: Some(2),
    });
    let class_fp = class.fingerprint();
    ontology.class_model_mut().register(class);

    let parent = Fact::new(Resource::new_iri("http://example.org/parent"));
    let child_a = Fact::new(Resource::new_iri("http://example.org/childA"));
    let child_b = Fact::new(Resource::new_iri("http://example.org/childB"));
    let (fp_parent, fp_a, fp_b) = (parent.fingerprint(), child_a.fingerprint(), child_b.fingerprint());
    ontology.data_mut().register_fact(parent);
    ontology.data_mut().register_fact(child_a);
    ontology.data_mut().register_fact(child_b);
    ontology.data_mut().insert_assertion(fp_parent, prop_fp, fp_a);
    ontology.data_mut().insert_assertion(fp_parent, prop_fp, fp_b);

    let members = members_of(class_fp, &ontology);
    assert!(members.contains(&fp_parent));
}

#[test]
fn union_set_operations_are_idempotent_on_taxonomies() {
    let mut ontology = Ontology::new(Some("http://example.org/onto"));
    let model = ontology.class_model_mut();
    let a = class(model, "http://example.org/A");
    let b = class(model, "http://example.org/B");
    model.insert_sub_class_of(a, b);

    let merged = ontology.union(&ontology.clone());
    assert_eq!(
        merged.class_model().sub_class_of.select_by_subject(a).count(),
        ontology.class_model().sub_class_of.select_by_subject(a).count(),
    );
}

#[test]
fn equivalent_classes_close_the_subclass_relation() {
    let mut ontology = Ontology::new(Some("http://example.org/onto"));
    let model = ontology.class_model_mut();
    let person = class(model, "http://example.org/Person");
    let human = class(model, "http://example.org/Human");
    let animal = class(model, "http://example.org/Animal");

    model.insert_equivalent_class(person, human);
    model.insert_sub_class_of(human, animal);

    let supers = super_classes_of(person, ontology.class_model());
    assert!(supers.contains(&animal));
}

#[test]
fn taxonomy_insert_with_non_inferred_entry_dominates_an_inferred_duplicate() {
    use ontos_core::model::taxonomy::Taxonomy;
    use ontos_core::model::resource::Fingerprint;

    let mut t = Taxonomy::new();
    let (s, p, o) = (
        Fingerprint::of("s"),
        Fingerprint::of("p"),
        Fingerprint::of("o"),
    );
    t.insert(TaxonomyEntry::new(s, p, o).inferred());
    t.insert(TaxonomyEntry::new(s, p, o));
    let entry = t.select_by_subject(s).next().unwrap();
    assert!(!entry.inferred);
}
