/*!
The ontology → RDF-graph encoder (spec §4.10 "Ontology → Graph encoder").

Emits an `(ontology, rdf:type, owl:Ontology)` header triple, the
declarations needed to recover each class/property/fact's kind, and the
triple projection of every taxonomy the decoder populates. Every
taxonomy projection honors `include_inferences`: when `false`, entries
with `inferred=true` are dropped (spec §8 "Encoder inference filter").
The resulting graph's context is set to the ontology's name.

This is the mirror image of [`crate::decode`]; it does not attempt to
recover information the decoder never retained (e.g. blank-node labels
for list cells it never walked, or resources referenced only via a
bare fingerprint — see [`encode_ontology_annotations`]).
*/

use crate::triple::{Graph, Node, Object, Triple, WireLiteral};
use ontos_core::model::class::{ClassKind, RestrictionVariant};
use ontos_core::model::ontology::Ontology;
use ontos_core::model::property::PropertyKind;
use ontos_core::model::resource::{Fingerprint, Identity, Literal as CoreLiteral, Resource};
use ontos_core::model::taxonomy::Taxonomy;
use ontos_core::stdlib::{owl, rdf, rdfs, xsd};
use std::collections::BTreeMap;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Encode `ontology` as a [`Graph`] (spec §4.10; §6 `Ontology.toGraph`).
pub fn encode(ontology: &Ontology, include_inferences: bool) -> Graph {
    let mut graph = Graph::new();
    if let Some(name) = ontology.name() {
        graph.set_context(name.to_string());
        graph.insert(Triple::resource(
            Node::iri(name.to_string()),
            iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME),
            Node::iri(iri(owl::NAMESPACE, owl::CLASS_ONTOLOGY_NAME)),
        ));
    }
    encode_ontology_annotations(&mut graph, ontology);
    encode_classes(&mut graph, ontology, include_inferences);
    encode_properties(&mut graph, ontology, include_inferences);
    encode_data(&mut graph, ontology, include_inferences);
    graph
}

// ------------------------------------------------------------------------------------------------
// Private Helpers ❱ vocabulary/identity
// ------------------------------------------------------------------------------------------------

fn iri(namespace: &str, name: &str) -> String {
    format!("{namespace}{name}")
}

fn node_of(resource: &Resource) -> Node {
    match resource.identity() {
        Identity::Iri(s) => Node::iri(s.clone()),
        Identity::BlankNode(s) => Node::blank(s.clone()),
    }
}

fn wire_literal_of(literal: &CoreLiteral) -> WireLiteral {
    match (literal.datatype(), literal.language()) {
        (Some(dt), _) => WireLiteral::typed(literal.lexical_form(), dt),
        (None, Some(lang)) => WireLiteral::with_language(literal.lexical_form(), lang),
        (None, None) => WireLiteral::plain(literal.lexical_form()),
    }
}

fn class_node(ontology: &Ontology, fp: Fingerprint) -> Option<Node> {
    ontology.class_model().get(fp).map(|c| node_of(c.resource()))
}

fn property_node(ontology: &Ontology, fp: Fingerprint) -> Option<Node> {
    ontology.property_model().get(fp).map(|p| node_of(p.resource()))
}

fn fact_node(ontology: &Ontology, fp: Fingerprint) -> Option<Node> {
    ontology.data().get_fact(fp).map(|f| node_of(f.resource()))
}

/// Resolve a `Data`-side fingerprint (assertion/hasValue/oneOf-member
/// object) to either a fact or a literal.
fn object_for_data_fp(ontology: &Ontology, fp: Fingerprint) -> Option<Object> {
    if let Some(node) = fact_node(ontology, fp) {
        Some(Object::Resource(node))
    } else {
        ontology.data().get_literal(fp).map(|lit| Object::Literal(wire_literal_of(lit)))
    }
}

/// Resolve a fingerprint against every container the encoder knows how
/// to look resources up in, for custom relations whose object kind
/// (class/property/fact) is not tracked at the ontology level (spec
/// §4.9 step 14: `Ontology::add_custom_relation` stores only the bare
/// fingerprint). If the referenced resource was never registered as a
/// class, property, fact, or literal elsewhere in the ontology, the
/// relation cannot be reconstructed and is silently dropped — a known
/// round-trip gap (see DESIGN.md).
fn any_node(ontology: &Ontology, fp: Fingerprint) -> Option<Object> {
    object_for_data_fp(ontology, fp)
        .or_else(|| class_node(ontology, fp).map(Object::Resource))
        .or_else(|| property_node(ontology, fp).map(Object::Resource))
}

// ------------------------------------------------------------------------------------------------
// Private Helpers ❱ taxonomy projection
// ------------------------------------------------------------------------------------------------

/// Project a two-place taxonomy into flat triples using `resolve` to
/// turn a fingerprint on either side back into a [`Node`] (spec §4.10
/// "the union of all taxonomies' triple projections").
fn project_taxonomy<F>(graph: &mut Graph, taxonomy: &Taxonomy, predicate: &str, include_inferences: bool, resolve: F)
where
    F: Fn(Fingerprint) -> Option<Node>,
{
    for entry in taxonomy.iter() {
        if !include_inferences && entry.inferred {
            continue;
        }
        let (Some(a), Some(b)) = (resolve(entry.subject), resolve(entry.object)) else {
            continue;
        };
        graph.insert(Triple::resource(a, predicate.to_string(), b));
    }
}

/// Project a taxonomy that represents an RDF list (`unionOf`,
/// `intersectionOf`, `oneOf`) by grouping entries by subject and
/// re-materializing an `rdf:first`/`rdf:rest` chain per group (spec
/// §4.9 step 6, reversed).
fn project_list_taxonomy<F>(
    graph: &mut Graph,
    ontology: &Ontology,
    taxonomy: &Taxonomy,
    predicate: &str,
    tag: &str,
    include_inferences: bool,
    member: F,
) where
    F: Fn(&Ontology, Fingerprint) -> Option<Object>,
{
    let mut by_subject: BTreeMap<Fingerprint, Vec<Object>> = BTreeMap::new();
    for entry in taxonomy.iter() {
        if !include_inferences && entry.inferred {
            continue;
        }
        if let Some(object) = member(ontology, entry.object) {
            by_subject.entry(entry.subject).or_default().push(object);
        }
    }
    for (subject_fp, members) in by_subject {
        let Some(subject_node) = class_node(ontology, subject_fp) else { continue };
        let prefix = format!("{tag}_{subject_fp}");
        let head = build_list(graph, &prefix, members);
        graph.insert(Triple::resource(subject_node, predicate.to_string(), head));
    }
}

/// Materialize a blank-node `rdf:first`/`rdf:rest` chain terminated by
/// `rdf:nil`, returning its head node. Blank labels are namespaced by
/// `prefix` so lists encoded for different composite subjects never
/// collide.
fn build_list(graph: &mut Graph, prefix: &str, members: Vec<Object>) -> Node {
    let first_pred = iri(rdf::NAMESPACE, rdf::PROP_FIRST_NAME);
    let rest_pred = iri(rdf::NAMESPACE, rdf::PROP_REST_NAME);
    let nil = Node::iri(iri(rdf::NAMESPACE, rdf::PROP_NIL_NAME));

    if members.is_empty() {
        return nil;
    }

    let nodes: Vec<Node> = (0..members.len()).map(|i| Node::blank(format!("{prefix}_{i}"))).collect();
    for (i, member) in members.into_iter().enumerate() {
        let cell = nodes[i].clone();
        match member {
            Object::Resource(r) => graph.insert(Triple::resource(cell.clone(), first_pred.clone(), r)),
            Object::Literal(l) => graph.insert(Triple::literal(cell.clone(), first_pred.clone(), l)),
        }
        let rest = nodes.get(i + 1).cloned().unwrap_or_else(|| nil.clone());
        graph.insert(Triple::resource(cell, rest_pred.clone(), rest));
    }
    nodes[0].clone()
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ ontology-level annotations
// ------------------------------------------------------------------------------------------------

fn encode_ontology_annotations(graph: &mut Graph, ontology: &Ontology) {
    let Some(name) = ontology.name() else { return };
    let node = Node::iri(name.to_string());

    for (predicate, values) in ontology.annotations() {
        for value in values {
            graph.insert(Triple::literal(node.clone(), predicate.clone(), wire_literal_of(value)));
        }
    }
    for (predicate, values) in ontology.custom_relations() {
        for object_fp in values {
            match any_node(ontology, *object_fp) {
                Some(Object::Resource(n)) => graph.insert(Triple::resource(node.clone(), predicate.clone(), n)),
                Some(Object::Literal(l)) => graph.insert(Triple::literal(node.clone(), predicate.clone(), l)),
                None => {}
            }
        }
    }
    for (predicate, values) in ontology.custom_annotations() {
        for value in values {
            graph.insert(Triple::literal(node.clone(), predicate.clone(), wire_literal_of(value)));
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ classes
// ------------------------------------------------------------------------------------------------

fn encode_classes(graph: &mut Graph, ontology: &Ontology, include_inferences: bool) {
    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);
    let on_property_pred = iri(owl::NAMESPACE, owl::PROP_ON_PROPERTY_NAME);

    for class in ontology.class_model().iter() {
        let node = node_of(class.resource());
        match class.kind() {
            ClassKind::PlainOwl => {
                let class_iri = if class.is_deprecated() {
                    iri(owl::NAMESPACE, owl::CLASS_DEPRECATED_CLASS_NAME)
                } else {
                    iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)
                };
                graph.insert(Triple::resource(node.clone(), type_pred.clone(), Node::iri(class_iri)));
            }
            ClassKind::DataRange => {
                graph.insert(Triple::resource(
                    node.clone(),
                    type_pred.clone(),
                    Node::iri(iri(owl::NAMESPACE, owl::CLASS_DATA_RANGE_NAME)),
                ));
            }
            ClassKind::Restriction(restriction) => {
                graph.insert(Triple::resource(
                    node.clone(),
                    type_pred.clone(),
                    Node::iri(iri(owl::NAMESPACE, owl::CLASS_RESTRICTION_NAME)),
                ));
                if let Some(prop_node) = property_node(ontology, restriction.on_property()) {
                    graph.insert(Triple::resource(node.clone(), on_property_pred.clone(), prop_node));
                }
                encode_restriction_variant(graph, ontology, &node, restriction.variant());
            }
            // A reference that was never explicitly typed (PlainRdfs), or a
            // composite/enumerate/datarange class, carries no standalone
            // `rdf:type` declaration in standard OWL serialization — it is
            // recovered entirely through the triples referencing it and,
            // for composites, through the list/target projections below.
            ClassKind::PlainRdfs | ClassKind::Enumerate | ClassKind::Union | ClassKind::Intersection | ClassKind::Complement => {}
        }
        for (predicate, values) in class.custom_annotations() {
            for value in values {
                graph.insert(Triple::literal(node.clone(), predicate.clone(), WireLiteral::plain(value.clone())));
            }
        }
    }

    project_list_taxonomy(
        graph,
        ontology,
        &ontology.class_model().union_of,
        &iri(owl::NAMESPACE, owl::PROP_UNION_OF_NAME),
        "union",
        include_inferences,
        |ontology, fp| class_node(ontology, fp).map(Object::Resource),
    );
    project_list_taxonomy(
        graph,
        ontology,
        &ontology.class_model().intersection_of,
        &iri(owl::NAMESPACE, owl::PROP_INTERSECTION_OF_NAME),
        "intersection",
        include_inferences,
        |ontology, fp| class_node(ontology, fp).map(Object::Resource),
    );
    project_list_taxonomy(
        graph,
        ontology,
        &ontology.class_model().one_of,
        &iri(owl::NAMESPACE, owl::PROP_ONE_OF_NAME),
        "oneof",
        include_inferences,
        object_for_data_fp,
    );

    project_taxonomy(
        graph,
        &ontology.class_model().sub_class_of,
        &iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME),
        include_inferences,
        |fp| class_node(ontology, fp),
    );
    project_taxonomy(
        graph,
        &ontology.class_model().equivalent_class,
        &iri(owl::NAMESPACE, owl::PROP_EQUIVALENT_CLASS_NAME),
        include_inferences,
        |fp| class_node(ontology, fp),
    );
    project_taxonomy(
        graph,
        &ontology.class_model().disjoint_with,
        &iri(owl::NAMESPACE, owl::PROP_DISJOINT_WITH_NAME),
        include_inferences,
        |fp| class_node(ontology, fp),
    );
    // `complementOf` carries a single class reference rather than a list
    // head (see `crate::decode::composites`), so it is a plain two-place
    // projection like `subClassOf`, not a list taxonomy.
    project_taxonomy(
        graph,
        &ontology.class_model().complement_of,
        &iri(owl::NAMESPACE, owl::PROP_COMPLEMENT_OF_NAME),
        include_inferences,
        |fp| class_node(ontology, fp),
    );
}

fn encode_restriction_variant(graph: &mut Graph, ontology: &Ontology, node: &Node, variant: &RestrictionVariant) {
    match variant {
        RestrictionVariant::Unrefined => {}
        RestrictionVariant::Cardinality { min, max } => {
            let datatype = iri(xsd::NAMESPACE, xsd::NON_NEGATIVE_INTEGER);
            match (min, max) {
                (Some(m), Some(n)) if m == n => {
                    graph.insert(Triple::literal(
                        node.clone(),
                        iri(owl::NAMESPACE, owl::PROP_CARDINALITY_NAME),
                        WireLiteral::typed(m.to_string(), datatype),
                    ));
                }
                _ => {
                    if let Some(m) = min {
                        graph.insert(Triple::literal(
                            node.clone(),
                            iri(owl::NAMESPACE, owl::PROP_MIN_CARDINALITY_NAME),
                            WireLiteral::typed(m.to_string(), datatype.clone()),
                        ));
                    }
                    if let Some(n) = max {
                        graph.insert(Triple::literal(
                            node.clone(),
                            iri(owl::NAMESPACE, owl::PROP_MAX_CARDINALITY_NAME),
                            WireLiteral::typed(n.to_string(), datatype),
                        ));
                    }
                }
            }
        }
        RestrictionVariant::AllValuesFrom(fp) => {
            if let Some(target) = class_node(ontology, *fp) {
                graph.insert(Triple::resource(node.clone(), iri(owl::NAMESPACE, owl::PROP_ALL_VALUES_FROM_NAME), target));
            }
        }
        RestrictionVariant::SomeValuesFrom(fp) => {
            if let Some(target) = class_node(ontology, *fp) {
                graph.insert(Triple::resource(node.clone(), iri(owl::NAMESPACE, owl::PROP_SOME_VALUES_FROM_NAME), target));
            }
        }
        RestrictionVariant::HasValue(fp) => {
            let predicate = iri(owl::NAMESPACE, owl::PROP_HAS_VALUE_NAME);
            match object_for_data_fp(ontology, *fp) {
                Some(Object::Resource(n)) => graph.insert(Triple::resource(node.clone(), predicate, n)),
                Some(Object::Literal(l)) => graph.insert(Triple::literal(node.clone(), predicate, l)),
                None => {}
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ properties
// ------------------------------------------------------------------------------------------------

fn encode_properties(graph: &mut Graph, ontology: &Ontology, include_inferences: bool) {
    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);
    let domain_pred = iri(rdfs::NAMESPACE, rdfs::PROP_DOMAIN_NAME);
    let range_pred = iri(rdfs::NAMESPACE, rdfs::PROP_RANGE_NAME);

    for property in ontology.property_model().iter() {
        let node = node_of(property.resource());
        let kind_name = match property.kind() {
            PropertyKind::Annotation => owl::CLASS_ANNOTATION_PROPERTY_NAME,
            PropertyKind::Datatype => owl::CLASS_DATATYPE_PROPERTY_NAME,
            PropertyKind::Object => owl::CLASS_OBJECT_PROPERTY_NAME,
        };
        graph.insert(Triple::resource(node.clone(), type_pred.clone(), Node::iri(iri(owl::NAMESPACE, kind_name))));

        let flags = property.flags();
        // `flags.deprecated` has no reserved wire representation in this
        // vocabulary slice (no `owl:DeprecatedProperty`, see decode's
        // property_model step) and is not encoded.
        if flags.symmetric {
            graph.insert(Triple::resource(
                node.clone(),
                type_pred.clone(),
                Node::iri(iri(owl::NAMESPACE, owl::CLASS_SYMMETRIC_PROPERTY_NAME)),
            ));
        }
        if flags.transitive {
            graph.insert(Triple::resource(
                node.clone(),
                type_pred.clone(),
                Node::iri(iri(owl::NAMESPACE, owl::CLASS_TRANSITIVE_PROPERTY_NAME)),
            ));
        }
        if flags.functional {
            graph.insert(Triple::resource(
                node.clone(),
                type_pred.clone(),
                Node::iri(iri(owl::NAMESPACE, owl::CLASS_FUNCTIONAL_PROPERTY_NAME)),
            ));
        }
        if flags.inverse_functional {
            graph.insert(Triple::resource(
                node.clone(),
                type_pred.clone(),
                Node::iri(iri(owl::NAMESPACE, owl::CLASS_INVERSE_FUNCTIONAL_PROPERTY_NAME)),
            ));
        }

        if let Some(domain) = property.domain() {
            if let Some(n) = class_node(ontology, domain) {
                graph.insert(Triple::resource(node.clone(), domain_pred.clone(), n));
            }
        }
        if let Some(range) = property.range() {
            if let Some(n) = class_node(ontology, range) {
                graph.insert(Triple::resource(node.clone(), range_pred.clone(), n));
            }
        }

        for (predicate, values) in property.custom_annotations() {
            for value in values {
                graph.insert(Triple::literal(node.clone(), predicate.clone(), WireLiteral::plain(value.clone())));
            }
        }
    }

    project_taxonomy(
        graph,
        &ontology.property_model().sub_property_of,
        &iri(rdfs::NAMESPACE, rdfs::PROP_SUB_PROPERTY_OF_NAME),
        include_inferences,
        |fp| property_node(ontology, fp),
    );
    project_taxonomy(
        graph,
        &ontology.property_model().equivalent_property,
        &iri(owl::NAMESPACE, owl::PROP_EQUIVALENT_PROPERTY_NAME),
        include_inferences,
        |fp| property_node(ontology, fp),
    );
    project_taxonomy(
        graph,
        &ontology.property_model().inverse_of,
        &iri(owl::NAMESPACE, owl::PROP_INVERSE_OF_NAME),
        include_inferences,
        |fp| property_node(ontology, fp),
    );
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ data (A-Box)
// ------------------------------------------------------------------------------------------------

fn encode_data(graph: &mut Graph, ontology: &Ontology, include_inferences: bool) {
    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);

    for entry in ontology.data().class_type.iter() {
        if !include_inferences && entry.inferred {
            continue;
        }
        let (Some(fact), Some(class)) = (fact_node(ontology, entry.subject), class_node(ontology, entry.object)) else {
            continue;
        };
        graph.insert(Triple::resource(fact, type_pred.clone(), class));
    }

    project_taxonomy(
        graph,
        &ontology.data().same_as,
        &iri(owl::NAMESPACE, owl::PROP_SAME_AS_NAME),
        include_inferences,
        |fp| fact_node(ontology, fp),
    );
    project_taxonomy(
        graph,
        &ontology.data().different_from,
        &iri(owl::NAMESPACE, owl::PROP_DIFFERENT_FROM_NAME),
        include_inferences,
        |fp| fact_node(ontology, fp),
    );

    for entry in ontology.data().assertions.iter() {
        if !include_inferences && entry.inferred {
            continue;
        }
        let Some(subject) = fact_node(ontology, entry.subject) else { continue };
        let Some(predicate_node) = property_node(ontology, entry.predicate) else { continue };
        let predicate = predicate_node.as_str().to_string();
        match object_for_data_fp(ontology, entry.object) {
            Some(Object::Resource(n)) => graph.insert(Triple::resource(subject, predicate, n)),
            Some(Object::Literal(l)) => graph.insert(Triple::literal(subject, predicate, l)),
            None => {}
        }
    }

    for fact in ontology.data().facts() {
        let node = node_of(fact.resource());
        for (predicate, values) in fact.custom_relations() {
            for object_fp in values {
                if let Some(object) = object_for_data_fp(ontology, *object_fp) {
                    match object {
                        Object::Resource(n) => graph.insert(Triple::resource(node.clone(), predicate.clone(), n)),
                        Object::Literal(l) => graph.insert(Triple::literal(node.clone(), predicate.clone(), l)),
                    }
                }
            }
        }
        for (predicate, values) in fact.custom_annotations() {
            for value in values {
                graph.insert(Triple::literal(node.clone(), predicate.clone(), WireLiteral::plain(value.clone())));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use ontos_errors::diagnostics::VecDiagnosticSink;

    fn t_resource(s: &str, p: &str, o: &str) -> Triple {
        Triple::resource(Node::iri(s), p.to_string(), Node::iri(o))
    }

    fn rdf_type() -> String {
        iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME)
    }

    #[test]
    fn sub_class_of_round_trips() {
        let mut graph = Graph::new();
        let a = "http://example.org/A";
        let b = "http://example.org/B";
        let sub_class_of = iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME);
        graph.insert(t_resource(a, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)));
        graph.insert(t_resource(b, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)));
        graph.insert(t_resource(a, &sub_class_of, b));

        let mut sink = VecDiagnosticSink::new();
        let ontology = decode::decode(&graph, &mut sink);
        let re_encoded = encode(&ontology, true);

        assert!(re_encoded.by_predicate(&sub_class_of).any(|t| t.subject.as_str() == a
            && t.object.as_resource().is_some_and(|o| o.as_str() == b)));
    }

    #[test]
    fn inferred_entries_dropped_when_include_inferences_is_false() {
        let mut ontology = Ontology::new(Some("http://example.org/onto"));
        let a = ontos_core::model::class::Class::new(Resource::new_iri("http://example.org/A"), ClassKind::PlainOwl);
        let b = ontos_core::model::class::Class::new(Resource::new_iri("http://example.org/B"), ClassKind::PlainOwl);
        let (fa, fb) = (a.fingerprint(), b.fingerprint());
        ontology.class_model_mut().register(a);
        ontology.class_model_mut().register(b);
        ontology.class_model_mut().sub_class_of.insert(
            ontos_core::model::taxonomy::TaxonomyEntry::new(fa, Fingerprint::of("rdfs:subClassOf"), fb).inferred(),
        );

        let sub_class_of = iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME);
        let with_inferences = encode(&ontology, true);
        let without_inferences = encode(&ontology, false);
        assert_eq!(with_inferences.by_predicate(&sub_class_of).count(), 1);
        assert_eq!(without_inferences.by_predicate(&sub_class_of).count(), 0);
    }

    #[test]
    fn complement_of_is_encoded_as_a_single_target_not_a_list() {
        let mut ontology = Ontology::new::<String>(None);
        let a = ontos_core::model::class::Class::new(Resource::new_iri("http://example.org/A"), ClassKind::Complement);
        let b = ontos_core::model::class::Class::new(Resource::new_iri("http://example.org/B"), ClassKind::PlainOwl);
        let (fa, fb) = (a.fingerprint(), b.fingerprint());
        ontology.class_model_mut().register(a);
        ontology.class_model_mut().register(b);
        ontology.class_model_mut().insert_complement_of(fa, fb);

        let graph = encode(&ontology, true);
        let predicate = iri(owl::NAMESPACE, owl::PROP_COMPLEMENT_OF_NAME);
        let triples: Vec<_> = graph.by_predicate(&predicate).collect();
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].object.as_resource().unwrap().as_str(), "http://example.org/B");
    }

    #[test]
    fn union_of_members_encode_as_an_rdf_list() {
        let mut ontology = Ontology::new::<String>(None);
        let u = ontos_core::model::class::Class::new(Resource::new_iri("http://example.org/U"), ClassKind::Union);
        let a = ontos_core::model::class::Class::new(Resource::new_iri("http://example.org/A"), ClassKind::PlainOwl);
        let b = ontos_core::model::class::Class::new(Resource::new_iri("http://example.org/B"), ClassKind::PlainOwl);
        let (fu, fa, fb) = (u.fingerprint(), a.fingerprint(), b.fingerprint());
        ontology.class_model_mut().register(u);
        ontology.class_model_mut().register(a);
        ontology.class_model_mut().register(b);
        ontology.class_model_mut().insert_union_of(fu, fa);
        ontology.class_model_mut().insert_union_of(fu, fb);

        let graph = encode(&ontology, true);
        let union_of_pred = iri(owl::NAMESPACE, owl::PROP_UNION_OF_NAME);
        let head = graph
            .by_predicate(&union_of_pred)
            .find(|t| t.subject.as_str() == "http://example.org/U")
            .and_then(|t| t.object.as_resource())
            .cloned()
            .expect("unionOf triple");

        let first_pred = iri(rdf::NAMESPACE, rdf::PROP_FIRST_NAME);
        let rest_pred = iri(rdf::NAMESPACE, rdf::PROP_REST_NAME);
        let nil = iri(rdf::NAMESPACE, rdf::PROP_NIL_NAME);

        let mut members = Vec::new();
        let mut current = head;
        loop {
            let first = graph.by_subject(&current).find(|t| t.predicate == first_pred).unwrap();
            members.push(first.object.as_resource().unwrap().as_str().to_string());
            let rest = graph.by_subject(&current).find(|t| t.predicate == rest_pred).unwrap();
            match rest.object.as_resource().unwrap() {
                next if next.as_str() == nil => break,
                next => current = next.clone(),
            }
        }
        members.sort();
        assert_eq!(members, vec!["http://example.org/A", "http://example.org/B"]);
    }

    #[test]
    fn ontology_header_round_trips() {
        let mut graph = Graph::new();
        graph.insert(t_resource(
            "http://example.org/onto",
            &rdf_type(),
            &iri(owl::NAMESPACE, owl::CLASS_ONTOLOGY_NAME),
        ));
        let mut sink = VecDiagnosticSink::new();
        let ontology = decode::decode(&graph, &mut sink);
        let re_encoded = encode(&ontology, true);
        assert_eq!(re_encoded.context(), Some("http://example.org/onto"));
        assert!(re_encoded.by_predicate(&rdf_type()).any(|t| t.subject.as_str() == "http://example.org/onto"
            && t.object.as_resource().is_some_and(|o| o.as_str() == iri(owl::NAMESPACE, owl::CLASS_ONTOLOGY_NAME))));
    }
}
