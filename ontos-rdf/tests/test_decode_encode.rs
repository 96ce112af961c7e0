//! End-to-end graph <-> ontology scenarios (spec §8), decoding hand-built
//! triple sets and encoding the result back to a graph.

use ontos_core::model::class::{ClassKind, RestrictionVariant};
use ontos_core::model::resource::Resource;
use ontos_core::stdlib::{owl, rdf, rdfs};
use ontos_errors::diagnostics::VecDiagnosticSink;
use ontos_rdf::decode::decode;
use ontos_rdf::encode::encode;
use ontos_rdf::triple::{Graph, Node, Triple, WireLiteral};

fn iri(namespace: &str, name: &str) -> String {
    format!("{namespace}{name}")
}

fn owl_type(graph: &mut Graph, subject: &str, class_name: &str) {
    graph.insert(Triple::resource(
        Node::iri(subject),
        iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME),
        Node::iri(iri(owl::NAMESPACE, class_name)),
    ));
}

#[test]
fn union_class_decodes_its_member_list_as_an_ordered_composite() {
    let mut graph = Graph::new();
    owl_type(&mut graph, "http://example.org/Dog", owl::CLASS_CLASS_NAME);
    owl_type(&mut graph, "http://example.org/Cat", owl::CLASS_CLASS_NAME);
    owl_type(&mut graph, "_:pet", owl::CLASS_CLASS_NAME);

    // _:pet owl:unionOf ( :Dog :Cat ) via an rdf:List.
    graph.insert(Triple::resource(
        Node::blank("pet"),
        iri(owl::NAMESPACE, owl::PROP_UNION_OF_NAME),
        Node::blank("list0"),
    ));
    graph.insert(Triple::resource(
        Node::blank("list0"),
        iri(rdf::NAMESPACE, rdf::PROP_FIRST_NAME),
        Node::iri("http://example.org/Dog"),
    ));
    graph.insert(Triple::resource(
        Node::blank("list0"),
        iri(rdf::NAMESPACE, rdf::PROP_REST_NAME),
        Node::blank("list1"),
    ));
    graph.insert(Triple::resource(
        Node::blank("list1"),
        iri(rdf::NAMESPACE, rdf::PROP_FIRST_NAME),
        Node::iri("http://example.org/Cat"),
    ));
    graph.insert(Triple::resource(
        Node::blank("list1"),
        iri(rdf::NAMESPACE, rdf::PROP_REST_NAME),
        Node::iri(iri(rdf::NAMESPACE, rdf::PROP_NIL_NAME)),
    ));

    let mut sink = VecDiagnosticSink::new();
    let ontology = decode(&graph, &mut sink);
    assert!(sink.diagnostics().is_empty());

    let pet_fp = Resource::new_blank("pet").fingerprint();
    let dog_fp = Resource::new_iri("http://example.org/Dog").fingerprint();
    let cat_fp = Resource::new_iri("http://example.org/Cat").fingerprint();

    let pet = ontology.class_model().get(pet_fp).expect("pet class registered");
    assert_eq!(pet.kind(), &ClassKind::Union);

    let members: Vec<_> = ontology
        .class_model()
        .union_of
        .select_by_subject(pet_fp)
        .map(|e| e.object)
        .collect();
    assert_eq!(members, vec![dog_fp, cat_fp]);

    // Re-encode and confirm the union comes back as an rdf:List, not a bare pair.
    let re_encoded = encode(&ontology, true);
    let list_heads: Vec<_> = re_encoded
        .by_predicate(&iri(owl::NAMESPACE, owl::PROP_UNION_OF_NAME))
        .collect();
    assert_eq!(list_heads.len(), 1);
}

#[test]
fn all_values_from_restriction_decodes_and_filters_membership() {
    let mut graph = Graph::new();
    owl_type(&mut graph, "http://example.org/hasPet", owl::CLASS_OBJECT_PROPERTY_NAME);
    owl_type(&mut graph, "http://example.org/Dog", owl::CLASS_CLASS_NAME);
    owl_type(&mut graph, "_:r1", owl::CLASS_RESTRICTION_NAME);

    graph.insert(Triple::resource(
        Node::blank("r1"),
        iri(owl::NAMESPACE, owl::PROP_ON_PROPERTY_NAME),
        Node::iri("http://example.org/hasPet"),
    ));
    graph.insert(Triple::resource(
        Node::blank("r1"),
        iri(owl::NAMESPACE, owl::PROP_ALL_VALUES_FROM_NAME),
        Node::iri("http://example.org/Dog"),
    ));

    graph.insert(Triple::resource(
        Node::iri("http://example.org/rex"),
        iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME),
        Node::iri("http://example.org/Dog"),
    ));
    graph.insert(Triple::resource(
        Node::iri("http://example.org/alice"),
        "http://example.org/hasPet",
        Node::iri("http://example.org/rex"),
    ));

    let mut sink = VecDiagnosticSink::new();
    let ontology = decode(&graph, &mut sink);
    assert!(sink.diagnostics().is_empty());

    let r1_fp = Resource::new_blank("r1").fingerprint();
    let restriction = ontology.class_model().get(r1_fp).unwrap();
    match restriction.kind() {
        ClassKind::Restriction(r) => {
            assert!(matches!(r.variant(), RestrictionVariant::AllValuesFrom(_)));
        }
        other => panic!("expected a restriction, got {other:?}"),
    }

    let alice_fp = Resource::new_iri("http://example.org/alice").fingerprint();
    let members = ontos_core::reasoning::membership::members_of(r1_fp, &ontology);
    assert!(members.contains(&alice_fp));
}

#[test]
fn ontology_header_and_class_taxonomy_round_trip_through_decode_and_encode() {
    let mut graph = Graph::new();
    graph.set_context("http://example.org/onto");
    graph.insert(Triple::resource(
        Node::iri("http://example.org/onto"),
        iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME),
        Node::iri(iri(owl::NAMESPACE, owl::CLASS_ONTOLOGY_NAME)),
    ));
    owl_type(&mut graph, "http://example.org/Animal", owl::CLASS_CLASS_NAME);
    owl_type(&mut graph, "http://example.org/Dog", owl::CLASS_CLASS_NAME);
    graph.insert(Triple::resource(
        Node::iri("http://example.org/Dog"),
        iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME),
        Node::iri("http://example.org/Animal"),
    ));
    graph.insert(Triple::literal(
        Node::iri("http://example.org/onto"),
        iri(rdfs::NAMESPACE, rdfs::PROP_COMMENT_NAME),
        WireLiteral::plain("a tiny ontology"),
    ));

    let mut sink = VecDiagnosticSink::new();
    let ontology = decode(&graph, &mut sink);
    assert!(sink.diagnostics().is_empty());
    assert_eq!(ontology.name(), Some("http://example.org/onto"));

    let dog_fp = Resource::new_iri("http://example.org/Dog").fingerprint();
    let animal_fp = Resource::new_iri("http://example.org/Animal").fingerprint();
    assert!(ontology
        .class_model()
        .sub_class_of
        .select_by_subject(dog_fp)
        .any(|e| e.object == animal_fp));

    let re_encoded = encode(&ontology, true);

    let sub_class_triples: Vec<_> = re_encoded
        .by_predicate(&iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME))
        .collect();
    assert_eq!(sub_class_triples.len(), 1);
    assert_eq!(sub_class_triples[0].subject, Node::iri("http://example.org/Dog"));

    let comment_triples: Vec<_> = re_encoded
        .by_predicate(&iri(rdfs::NAMESPACE, rdfs::PROP_COMMENT_NAME))
        .collect();
    assert_eq!(comment_triples.len(), 1);

    let re_decoded = decode(&re_encoded, &mut VecDiagnosticSink::new());
    assert_eq!(re_decoded.name(), ontology.name());
    assert!(re_decoded
        .class_model()
        .sub_class_of
        .select_by_subject(dog_fp)
        .any(|e| e.object == animal_fp));
}
