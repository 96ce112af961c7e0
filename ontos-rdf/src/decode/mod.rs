/*!
The RDF-graph → ontology decoder: a fixed 15-pass pipeline that
reconstructs the structured class/property/data model from a flat triple
sequence (spec §4.9).

Each pass is a free function taking the in-progress [`Ontology`], the
source [`Graph`], and a [`DiagnosticSink`]; passes never abort on a
malformed axiom, they warn and skip it (spec §7.2). The passes run in the
fixed order the spec names; later passes depend on earlier ones having
populated the class/property models.
*/

mod lists;

use crate::triple::{Graph, Node, Object, WireLiteral};
use ontos_core::config;
use ontos_core::model::class::{Class, ClassKind, Restriction, RestrictionVariant};
use ontos_core::model::fact::Fact;
use ontos_core::model::ontology::Ontology;
use ontos_core::model::property::{Property, PropertyKind};
use ontos_core::model::resource::{Fingerprint, Literal as CoreLiteral, Resource};
use ontos_core::stdlib::{owl, rdf, rdfs, xsd};
use ontos_errors::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Decode `graph` into a fully populated [`Ontology`] (spec §4.9, the
/// "Graph → Ontology decoder"). Never fails: every anomaly is reported
/// through `sink` and the offending axiom is dropped (spec §7.2).
pub fn decode(graph: &Graph, sink: &mut dyn DiagnosticSink) -> Ontology {
    let mut ontology = Ontology::new::<String>(None);

    expand(&mut ontology); // step 1
    // step 2 (prefetch) is implicit: `Graph` already indexes by predicate.
    ontology_header(&mut ontology, graph); // step 3
    property_model(&mut ontology, graph, sink); // step 4
    class_model(&mut ontology, graph, sink); // step 5
    composites(&mut ontology, graph, sink); // step 6
    facts(&mut ontology, graph); // step 7
    restriction_refinement(&mut ontology, graph, sink); // step 8
    domain_range(&mut ontology, graph, sink); // step 9
    property_taxonomies(&mut ontology, graph, sink); // step 10
    class_taxonomies(&mut ontology, graph); // step 11
    same_different(&mut ontology, graph); // step 12
    assertions(&mut ontology, graph, sink); // step 13
    custom_relations_and_annotations(&mut ontology, graph, sink); // step 14
    unexpand(&mut ontology); // step 15

    ontology
}

// ------------------------------------------------------------------------------------------------
// Private Helpers ❱ vocabulary/identity
// ------------------------------------------------------------------------------------------------

fn iri(namespace: &str, name: &str) -> String {
    format!("{namespace}{name}")
}

fn fp_of(node: &Node) -> Fingerprint {
    resource_of(node).fingerprint()
}

fn resource_of(node: &Node) -> Resource {
    match node {
        Node::Iri(s) => Resource::new_iri(s.clone()),
        Node::Blank(s) => Resource::new_blank(s.clone()),
    }
}

fn node_of_resource(resource: &Resource) -> Node {
    match resource.identity() {
        ontos_core::model::resource::Identity::Iri(s) => Node::iri(s.clone()),
        ontos_core::model::resource::Identity::BlankNode(s) => Node::blank(s.clone()),
    }
}

fn core_literal_of(literal: &WireLiteral) -> CoreLiteral {
    match (&literal.datatype, &literal.language) {
        (Some(dt), _) => CoreLiteral::typed(literal.lexical_form.clone(), dt.clone()),
        (None, Some(lang)) => CoreLiteral::with_language(literal.lexical_form.clone(), lang.clone()),
        (None, None) => CoreLiteral::plain(literal.lexical_form.clone()),
    }
}

/// Register `node` as a class if it is not already known, defaulting to
/// `PlainRdfs` (spec §3, Class row: "plain-RDFS"; §9 open question (a)
/// context — a reference that was never explicitly `owl:Class`-typed is
/// treated as an implicit RDFS class rather than dropped).
fn ensure_class(ontology: &mut Ontology, node: &Node) -> Fingerprint {
    let resource = resource_of(node);
    let fp = resource.fingerprint();
    if !ontology.class_model().contains(fp) {
        ontology.class_model_mut().register(Class::new(resource, ClassKind::PlainRdfs));
    }
    fp
}

fn ensure_fact(ontology: &mut Ontology, node: &Node) -> Fingerprint {
    let resource = resource_of(node);
    let fp = resource.fingerprint();
    if !ontology.data().contains_fact(fp) {
        ontology.data_mut().register_fact(Fact::new(resource));
    }
    fp
}

fn ensure_literal(ontology: &mut Ontology, literal: &WireLiteral) -> Fingerprint {
    let core = core_literal_of(literal);
    let fp = core.fingerprint();
    if ontology.data().get_literal(fp).is_none() {
        ontology.data_mut().register_literal(core);
    }
    fp
}

/// Parse a cardinality literal as a non-negative integer (spec §4.9 step
/// 8: "Cardinality literals must parse as non-negative integers (plain
/// or numeric-category-typed)"). Reports
/// [`DiagnosticCode::NonIntegerCardinality`] and returns `None` on
/// failure rather than aborting the restriction refinement.
fn parse_cardinality(literal: &WireLiteral, subject: &str, sink: &mut dyn DiagnosticSink) -> Option<u64> {
    let datatype_ok = match &literal.datatype {
        None => true,
        Some(dt) => xsd::NUMERIC_CATEGORY.iter().any(|name| dt == &format!("{}{}", xsd::NAMESPACE, name)),
    };
    if datatype_ok {
        if let Ok(n) = literal.lexical_form.trim().parse::<u64>() {
            return Some(n);
        }
    }
    sink.report(
        Diagnostic::new(
            DiagnosticCode::NonIntegerCardinality,
            format!("cardinality literal '{}' is not a non-negative integer", literal.lexical_form),
        )
        .with_subject(subject),
    );
    None
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 1 / 15: expansion
// ------------------------------------------------------------------------------------------------

fn expand(ontology: &mut Ontology) {
    config::expand(ontology);
}

fn unexpand(ontology: &mut Ontology) {
    config::unexpand(ontology);
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 3: ontology header
// ------------------------------------------------------------------------------------------------

fn ontology_header(ontology: &mut Ontology, graph: &Graph) {
    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);
    let ontology_class = iri(owl::NAMESPACE, owl::CLASS_ONTOLOGY_NAME);
    for triple in graph.by_predicate(&type_pred) {
        if let Object::Resource(object) = &triple.object {
            if object.as_str() == ontology_class {
                ontology.set_name(triple.subject.as_str().to_string());
                return;
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 4: PropertyModel population
// ------------------------------------------------------------------------------------------------

#[derive(Default)]
struct PropertyDecl {
    resource: Option<Resource>,
    explicit_kind: Option<PropertyKind>,
    symmetric: bool,
    transitive: bool,
    inverse_functional: bool,
    functional: bool,
}

fn property_model(ontology: &mut Ontology, graph: &Graph, sink: &mut dyn DiagnosticSink) {
    use rustc_hash::FxHashMap;

    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);
    let annotation_class = iri(owl::NAMESPACE, owl::CLASS_ANNOTATION_PROPERTY_NAME);
    let datatype_class = iri(owl::NAMESPACE, owl::CLASS_DATATYPE_PROPERTY_NAME);
    let object_class = iri(owl::NAMESPACE, owl::CLASS_OBJECT_PROPERTY_NAME);
    let symmetric_class = iri(owl::NAMESPACE, owl::CLASS_SYMMETRIC_PROPERTY_NAME);
    let transitive_class = iri(owl::NAMESPACE, owl::CLASS_TRANSITIVE_PROPERTY_NAME);
    let functional_class = iri(owl::NAMESPACE, owl::CLASS_FUNCTIONAL_PROPERTY_NAME);
    let inverse_functional_class = iri(owl::NAMESPACE, owl::CLASS_INVERSE_FUNCTIONAL_PROPERTY_NAME);

    let mut decls: FxHashMap<Fingerprint, PropertyDecl> = FxHashMap::default();

    for triple in graph.by_predicate(&type_pred) {
        let Object::Resource(object) = &triple.object else { continue };
        let kind = if object.as_str() == annotation_class {
            Some(PropertyKind::Annotation)
        } else if object.as_str() == datatype_class {
            Some(PropertyKind::Datatype)
        } else if object.as_str() == object_class {
            Some(PropertyKind::Object)
        } else {
            None
        };
        let is_symmetric = object.as_str() == symmetric_class;
        let is_transitive = object.as_str() == transitive_class;
        let is_functional = object.as_str() == functional_class;
        let is_inverse_functional = object.as_str() == inverse_functional_class;
        if kind.is_none() && !is_symmetric && !is_transitive && !is_functional && !is_inverse_functional {
            continue;
        }

        let resource = resource_of(&triple.subject);
        let fp = resource.fingerprint();
        let decl = decls.entry(fp).or_default();
        decl.resource.get_or_insert(resource);
        if let Some(k) = kind {
            if let Some(existing) = decl.explicit_kind {
                if existing != k {
                    sink.report(
                        Diagnostic::new(
                            DiagnosticCode::PropertyKindMismatch,
                            "property declared as more than one of annotation/datatype/object",
                        )
                        .with_subject(triple.subject.as_str()),
                    );
                }
            }
            decl.explicit_kind = Some(k);
        }
        decl.symmetric |= is_symmetric;
        decl.transitive |= is_transitive;
        decl.functional |= is_functional;
        decl.inverse_functional |= is_inverse_functional;
    }

    for (fp, decl) in decls {
        let Some(resource) = decl.resource else { continue };
        let needs_object = decl.symmetric || decl.transitive || decl.inverse_functional;
        let kind = if needs_object {
            if let Some(explicit) = decl.explicit_kind {
                if explicit != PropertyKind::Object {
                    sink.report(
                        Diagnostic::new(
                            DiagnosticCode::PropertyKindMismatch,
                            "property carries an object-only characteristic but was declared non-object; promoting to ObjectProperty",
                        )
                        .with_subject(resource.to_string()),
                    );
                }
            }
            PropertyKind::Object
        } else {
            match decl.explicit_kind {
                Some(k) => k,
                None => continue,
            }
        };

        let mut property = Property::new(resource, kind);
        if decl.symmetric {
            let _ = property.set_symmetric(true);
        }
        if decl.transitive {
            let _ = property.set_transitive(true);
        }
        if decl.inverse_functional {
            let _ = property.set_inverse_functional(true);
        }
        if decl.functional {
            property.set_functional(true);
        }
        debug_assert_eq!(property.fingerprint(), fp);
        ontology.property_model_mut().register(property);
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 5: ClassModel population
// ------------------------------------------------------------------------------------------------

fn class_model(ontology: &mut Ontology, graph: &Graph, sink: &mut dyn DiagnosticSink) {
    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);
    let class_class = iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME);
    let deprecated_class_class = iri(owl::NAMESPACE, owl::CLASS_DEPRECATED_CLASS_NAME);
    let restriction_class = iri(owl::NAMESPACE, owl::CLASS_RESTRICTION_NAME);
    let data_range_class = iri(owl::NAMESPACE, owl::CLASS_DATA_RANGE_NAME);
    let on_property_pred = iri(owl::NAMESPACE, owl::PROP_ON_PROPERTY_NAME);

    for triple in graph.by_predicate(&type_pred) {
        let Object::Resource(object) = &triple.object else { continue };
        let resource = resource_of(&triple.subject);

        if object.as_str() == class_class {
            ontology.class_model_mut().register(Class::new(resource, ClassKind::PlainOwl));
        } else if object.as_str() == deprecated_class_class {
            let mut class = Class::new(resource, ClassKind::PlainOwl);
            class.set_deprecated(true);
            ontology.class_model_mut().register(class);
        } else if object.as_str() == data_range_class {
            ontology.class_model_mut().register(Class::new(resource, ClassKind::DataRange));
        } else if object.as_str() == restriction_class {
            let on_property = graph
                .by_subject(&triple.subject)
                .find(|t| t.predicate == on_property_pred)
                .and_then(|t| t.object.as_resource());
            let Some(on_property) = on_property else {
                sink.report(
                    Diagnostic::new(DiagnosticCode::UnresolvedPropertyReference, "restriction has no owl:onProperty")
                        .with_subject(triple.subject.as_str()),
                );
                continue;
            };
            let prop_fp = fp_of(on_property);
            // Annotation properties are checked first: every annotation
            // property IRI under rdfs/owl/dc is also reserved vocabulary, and
            // the more specific diagnostic is the useful one to report.
            if config::is_annotation_property_iri(on_property.as_str())
                || ontology
                    .property_model()
                    .get(prop_fp)
                    .is_some_and(|p| p.is_annotation())
            {
                sink.report(
                    Diagnostic::new(
                        DiagnosticCode::RestrictionOnAnnotationProperty,
                        "restriction's onProperty is an annotation property",
                    )
                    .with_subject(triple.subject.as_str()),
                );
                continue;
            }
            if config::is_reserved_iri(on_property.as_str()) {
                sink.report(
                    Diagnostic::new(DiagnosticCode::RestrictionOnReservedProperty, "restriction's onProperty is a reserved term")
                        .with_subject(triple.subject.as_str()),
                );
                continue;
            }
            ontology
                .class_model_mut()
                .register(Class::new(resource, ClassKind::Restriction(Restriction::new(prop_fp))));
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 6: composites
// ------------------------------------------------------------------------------------------------

fn composites(ontology: &mut Ontology, graph: &Graph, sink: &mut dyn DiagnosticSink) {
    let union_of_pred = iri(owl::NAMESPACE, owl::PROP_UNION_OF_NAME);
    let intersection_of_pred = iri(owl::NAMESPACE, owl::PROP_INTERSECTION_OF_NAME);
    let complement_of_pred = iri(owl::NAMESPACE, owl::PROP_COMPLEMENT_OF_NAME);
    let one_of_pred = iri(owl::NAMESPACE, owl::PROP_ONE_OF_NAME);

    for triple in graph.by_predicate(&union_of_pred) {
        let Object::Resource(head) = &triple.object else { continue };
        let fp = ensure_class(ontology, &triple.subject);
        reclassify_or_warn(ontology, fp, ClassKind::Union, triple.subject.as_str(), sink);
        for member in lists::walk_list(graph, head, triple.subject.as_str(), sink) {
            if let Object::Resource(member) = member {
                let member_fp = ensure_class(ontology, &member);
                ontology.class_model_mut().insert_union_of(fp, member_fp);
            }
        }
    }

    for triple in graph.by_predicate(&intersection_of_pred) {
        let Object::Resource(head) = &triple.object else { continue };
        let fp = ensure_class(ontology, &triple.subject);
        reclassify_or_warn(ontology, fp, ClassKind::Intersection, triple.subject.as_str(), sink);
        for member in lists::walk_list(graph, head, triple.subject.as_str(), sink) {
            if let Object::Resource(member) = member {
                let member_fp = ensure_class(ontology, &member);
                ontology.class_model_mut().insert_intersection_of(fp, member_fp);
            }
        }
    }

    // `complementOf` carries a single class reference rather than a list
    // head in standard OWL serializations; treated as a one-member
    // relation rather than run through `walk_list` (see DESIGN.md).
    for triple in graph.by_predicate(&complement_of_pred) {
        let Object::Resource(target) = &triple.object else { continue };
        let fp = ensure_class(ontology, &triple.subject);
        reclassify_or_warn(ontology, fp, ClassKind::Complement, triple.subject.as_str(), sink);
        let target_fp = ensure_class(ontology, target);
        ontology.class_model_mut().insert_complement_of(fp, target_fp);
    }

    for triple in graph.by_predicate(&one_of_pred) {
        let Object::Resource(head) = &triple.object else { continue };
        let fp = ensure_class(ontology, &triple.subject);
        let members = lists::walk_list(graph, head, triple.subject.as_str(), sink);
        let desired_kind = match members.first() {
            Some(Object::Literal(_)) => ClassKind::DataRange,
            _ => ClassKind::Enumerate,
        };
        match ontology.class_model().get(fp).map(|c| c.kind().clone()) {
            Some(ClassKind::PlainOwl) | Some(ClassKind::PlainRdfs) => {
                ontology.class_model_mut().get_mut(fp).unwrap().reclassify(desired_kind);
            }
            Some(existing) if existing != desired_kind => {
                sink.report(
                    Diagnostic::new(
                        DiagnosticCode::OneOfVariantConflict,
                        "class is both enumerate and datarange; keeping the first-declared variant",
                    )
                    .with_subject(triple.subject.as_str()),
                );
            }
            _ => {}
        }
        for member in members {
            match member {
                Object::Resource(member) => {
                    let member_fp = ensure_fact(ontology, &member);
                    ontology.class_model_mut().insert_one_of(fp, member_fp);
                }
                Object::Literal(lit) => {
                    let member_fp = ensure_literal(ontology, &lit);
                    ontology.class_model_mut().insert_one_of(fp, member_fp);
                }
            }
        }
    }
}

fn reclassify_or_warn(ontology: &mut Ontology, fp: Fingerprint, kind: ClassKind, subject: &str, sink: &mut dyn DiagnosticSink) {
    if let Some(class) = ontology.class_model_mut().get_mut(fp) {
        if !class.reclassify(kind) {
            sink.report(
                Diagnostic::new(DiagnosticCode::OneOfVariantConflict, "class already has a conflicting composite/enumerate kind")
                    .with_subject(subject),
            );
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 7: facts
// ------------------------------------------------------------------------------------------------

fn facts(ontology: &mut Ontology, graph: &Graph) {
    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);
    for triple in graph.by_predicate(&type_pred) {
        let Object::Resource(object) = &triple.object else { continue };
        if config::is_reserved_iri(object.as_str()) {
            continue;
        }
        let class_fp = fp_of(object);
        if !ontology.class_model().contains(class_fp) {
            continue;
        }
        let fact_fp = ensure_fact(ontology, &triple.subject);
        ontology.data_mut().insert_class_type(fact_fp, class_fp);
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 8: restriction refinement
// ------------------------------------------------------------------------------------------------

fn restriction_refinement(ontology: &mut Ontology, graph: &Graph, sink: &mut dyn DiagnosticSink) {
    let cardinality_pred = iri(owl::NAMESPACE, owl::PROP_CARDINALITY_NAME);
    let min_cardinality_pred = iri(owl::NAMESPACE, owl::PROP_MIN_CARDINALITY_NAME);
    let max_cardinality_pred = iri(owl::NAMESPACE, owl::PROP_MAX_CARDINALITY_NAME);
    let has_value_pred = iri(owl::NAMESPACE, owl::PROP_HAS_VALUE_NAME);
    let all_values_from_pred = iri(owl::NAMESPACE, owl::PROP_ALL_VALUES_FROM_NAME);
    let some_values_from_pred = iri(owl::NAMESPACE, owl::PROP_SOME_VALUES_FROM_NAME);

    let restriction_fps: Vec<(Fingerprint, Node)> = ontology
        .class_model()
        .iter()
        .filter(|c| c.kind().is_restriction())
        .map(|c| (c.fingerprint(), node_of_resource(c.resource())))
        .collect();

    for (fp, node) in restriction_fps {
        let subject_str = node.as_str().to_string();
        let own_triples: Vec<_> = graph.by_subject(&node).collect();

        let card = own_triples.iter().find(|t| t.predicate == cardinality_pred);
        let min = own_triples.iter().find(|t| t.predicate == min_cardinality_pred);
        let max = own_triples.iter().find(|t| t.predicate == max_cardinality_pred);
        if card.is_some() || min.is_some() || max.is_some() {
            let mut min_bound = None;
            let mut max_bound = None;
            if let Some(t) = card {
                if let Object::Literal(lit) = &t.object {
                    if let Some(n) = parse_cardinality(lit, &subject_str, sink) {
                        min_bound = Some(n);
                        max_bound = Some(n);
                    }
                }
            }
            if let Some(t) = min {
                if let Object::Literal(lit) = &t.object {
                    if let Some(n) = parse_cardinality(lit, &subject_str, sink) {
                        min_bound = Some(n);
                    }
                }
            }
            if let Some(t) = max {
                if let Object::Literal(lit) = &t.object {
                    if let Some(n) = parse_cardinality(lit, &subject_str, sink) {
                        max_bound = Some(n);
                    }
                }
            }
            if let Some(class) = ontology.class_model_mut().get_mut(fp) {
                class.refine_restriction(RestrictionVariant::Cardinality { min: min_bound, max: max_bound });
            }
            continue;
        }

        if let Some(t) = own_triples.iter().find(|t| t.predicate == has_value_pred) {
            let value_fp = match &t.object {
                Object::Resource(value) => ensure_fact(ontology, value),
                Object::Literal(lit) => ensure_literal(ontology, lit),
            };
            if let Some(class) = ontology.class_model_mut().get_mut(fp) {
                class.refine_restriction(RestrictionVariant::HasValue(value_fp));
            }
            continue;
        }

        if let Some(t) = own_triples.iter().find(|t| t.predicate == all_values_from_pred) {
            if let Object::Resource(target) = &t.object {
                let target_fp = ensure_class(ontology, target);
                if let Some(class) = ontology.class_model_mut().get_mut(fp) {
                    class.refine_restriction(RestrictionVariant::AllValuesFrom(target_fp));
                }
            }
            continue;
        }

        if let Some(t) = own_triples.iter().find(|t| t.predicate == some_values_from_pred) {
            if let Object::Resource(target) = &t.object {
                let target_fp = ensure_class(ontology, target);
                if let Some(class) = ontology.class_model_mut().get_mut(fp) {
                    class.refine_restriction(RestrictionVariant::SomeValuesFrom(target_fp));
                }
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 9: domain/range
// ------------------------------------------------------------------------------------------------

fn domain_range(ontology: &mut Ontology, graph: &Graph, sink: &mut dyn DiagnosticSink) {
    let domain_pred = iri(rdfs::NAMESPACE, rdfs::PROP_DOMAIN_NAME);
    let range_pred = iri(rdfs::NAMESPACE, rdfs::PROP_RANGE_NAME);

    let setters: [(&str, fn(&mut Property, Fingerprint)); 2] = [
        (domain_pred.as_str(), Property::set_domain as fn(&mut Property, Fingerprint)),
        (range_pred.as_str(), Property::set_range as fn(&mut Property, Fingerprint)),
    ];
    for (predicate, setter) in setters {
        for triple in graph.by_predicate(predicate) {
            let Object::Resource(object) = &triple.object else { continue };
            let prop_fp = fp_of(&triple.subject);
            if !ontology.property_model().contains(prop_fp) {
                sink.report(
                    Diagnostic::new(DiagnosticCode::UnresolvedPropertyReference, "domain/range asserted on an unregistered property")
                        .with_subject(triple.subject.as_str()),
                );
                continue;
            }
            let class_fp = ensure_class(ontology, object);
            if let Some(property) = ontology.property_model_mut().get_mut(prop_fp) {
                setter(property, class_fp);
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 10: property taxonomies
// ------------------------------------------------------------------------------------------------

fn property_taxonomies(ontology: &mut Ontology, graph: &Graph, sink: &mut dyn DiagnosticSink) {
    let sub_property_of_pred = iri(rdfs::NAMESPACE, rdfs::PROP_SUB_PROPERTY_OF_NAME);
    let equivalent_property_pred = iri(owl::NAMESPACE, owl::PROP_EQUIVALENT_PROPERTY_NAME);
    let inverse_of_pred = iri(owl::NAMESPACE, owl::PROP_INVERSE_OF_NAME);

    for triple in graph.by_predicate(&sub_property_of_pred) {
        if let Object::Resource(object) = &triple.object {
            if let Some((a, b)) = compatible_property_pair(ontology, &triple.subject, object, false, sink) {
                ontology.property_model_mut().insert_sub_property_of(a, b);
            }
        }
    }
    for triple in graph.by_predicate(&equivalent_property_pred) {
        if let Object::Resource(object) = &triple.object {
            if let Some((a, b)) = compatible_property_pair(ontology, &triple.subject, object, false, sink) {
                ontology.property_model_mut().insert_equivalent_property(a, b);
            }
        }
    }
    for triple in graph.by_predicate(&inverse_of_pred) {
        if let Object::Resource(object) = &triple.object {
            if let Some((a, b)) = compatible_property_pair(ontology, &triple.subject, object, true, sink) {
                ontology.property_model_mut().insert_inverse_of(a, b);
            }
        }
    }
}

/// Look up both endpoints and check kind compatibility (spec §4.9 step
/// 10: "only between properties of compatible kind"). Returns `None`
/// (after warning) when either endpoint is unresolved or the kinds are
/// incompatible.
fn compatible_property_pair(
    ontology: &Ontology,
    subject: &Node,
    object: &Node,
    object_only: bool,
    sink: &mut dyn DiagnosticSink,
) -> Option<(Fingerprint, Fingerprint)> {
    let a = fp_of(subject);
    let b = fp_of(object);
    let pa = ontology.property_model().get(a);
    let pb = ontology.property_model().get(b);
    match (pa, pb) {
        (Some(pa), Some(pb)) => {
            let ok = if object_only {
                pa.is_object() && pb.is_object()
            } else {
                pa.kind() == pb.kind()
            };
            if ok {
                Some((a, b))
            } else {
                sink.report(
                    Diagnostic::new(DiagnosticCode::PropertyKindMismatch, "properties do not share a compatible kind")
                        .with_subject(subject.as_str()),
                );
                None
            }
        }
        _ => {
            sink.report(
                Diagnostic::new(DiagnosticCode::UnresolvedPropertyReference, "reference to an unregistered property")
                    .with_subject(subject.as_str()),
            );
            None
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 11: class taxonomies
// ------------------------------------------------------------------------------------------------

fn class_taxonomies(ontology: &mut Ontology, graph: &Graph) {
    let sub_class_of_pred = iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME);
    let equivalent_class_pred = iri(owl::NAMESPACE, owl::PROP_EQUIVALENT_CLASS_NAME);
    let disjoint_with_pred = iri(owl::NAMESPACE, owl::PROP_DISJOINT_WITH_NAME);

    for triple in graph.by_predicate(&sub_class_of_pred) {
        if let Object::Resource(object) = &triple.object {
            let a = ensure_class(ontology, &triple.subject);
            let b = ensure_class(ontology, object);
            ontology.class_model_mut().insert_sub_class_of(a, b);
        }
    }
    for triple in graph.by_predicate(&equivalent_class_pred) {
        if let Object::Resource(object) = &triple.object {
            let a = ensure_class(ontology, &triple.subject);
            let b = ensure_class(ontology, object);
            ontology.class_model_mut().insert_equivalent_class(a, b);
        }
    }
    for triple in graph.by_predicate(&disjoint_with_pred) {
        if let Object::Resource(object) = &triple.object {
            let a = ensure_class(ontology, &triple.subject);
            let b = ensure_class(ontology, object);
            ontology.class_model_mut().insert_disjoint_with(a, b);
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 12: sameAs/differentFrom
// ------------------------------------------------------------------------------------------------

fn same_different(ontology: &mut Ontology, graph: &Graph) {
    let same_as_pred = iri(owl::NAMESPACE, owl::PROP_SAME_AS_NAME);
    let different_from_pred = iri(owl::NAMESPACE, owl::PROP_DIFFERENT_FROM_NAME);

    for triple in graph.by_predicate(&same_as_pred) {
        if let Object::Resource(object) = &triple.object {
            let a = ensure_fact(ontology, &triple.subject);
            let b = ensure_fact(ontology, object);
            ontology.data_mut().insert_same_as(a, b);
        }
    }
    for triple in graph.by_predicate(&different_from_pred) {
        if let Object::Resource(object) = &triple.object {
            let a = ensure_fact(ontology, &triple.subject);
            let b = ensure_fact(ontology, object);
            ontology.data_mut().insert_different_from(a, b);
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 13: assertions
// ------------------------------------------------------------------------------------------------

fn assertions(ontology: &mut Ontology, graph: &Graph, sink: &mut dyn DiagnosticSink) {
    let properties: Vec<(Fingerprint, String, PropertyKind)> = ontology
        .property_model()
        .iter()
        .filter(|p| !p.is_annotation())
        .map(|p| (p.fingerprint(), p.resource().to_string(), p.kind()))
        .collect();

    for (prop_fp, iri_str, kind) in properties {
        if config::is_reserved_iri(&iri_str) {
            continue;
        }
        for triple in graph.by_predicate(&iri_str) {
            let subject_fp = ensure_fact(ontology, &triple.subject);
            match (&triple.object, kind) {
                (Object::Resource(object), PropertyKind::Object) => {
                    let object_fp = ensure_fact(ontology, object);
                    ontology.data_mut().insert_assertion(subject_fp, prop_fp, object_fp);
                }
                (Object::Literal(literal), PropertyKind::Datatype) => {
                    let object_fp = ensure_literal(ontology, literal);
                    ontology.data_mut().insert_assertion(subject_fp, prop_fp, object_fp);
                }
                (Object::Literal(_), PropertyKind::Object) => {
                    sink.report(
                        Diagnostic::new(DiagnosticCode::AssertionObjectKindMismatch, "object property asserted with a literal value")
                            .with_subject(triple.subject.as_str()),
                    );
                }
                (Object::Resource(_), PropertyKind::Datatype) => {
                    sink.report(
                        Diagnostic::new(DiagnosticCode::AssertionObjectKindMismatch, "datatype property asserted with a resource value")
                            .with_subject(triple.subject.as_str()),
                    );
                }
                (_, PropertyKind::Annotation) => unreachable!("annotation properties are filtered out above"),
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions ❱ step 14: custom relations & annotations
// ------------------------------------------------------------------------------------------------

enum Owner {
    Ontology,
    Class(Fingerprint),
    Property(Fingerprint),
    Fact(Fingerprint),
}

fn owner_of(ontology: &Ontology, subject: &Node) -> Owner {
    if ontology.name() == Some(subject.as_str()) {
        return Owner::Ontology;
    }
    let fp = fp_of(subject);
    if ontology.class_model().contains(fp) {
        Owner::Class(fp)
    } else if ontology.property_model().contains(fp) {
        Owner::Property(fp)
    } else {
        Owner::Fact(fp)
    }
}

fn custom_relations_and_annotations(ontology: &mut Ontology, graph: &Graph, _sink: &mut dyn DiagnosticSink) {
    let structural_class_predicates: Vec<String> = [
        iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME),
        iri(owl::NAMESPACE, owl::PROP_EQUIVALENT_CLASS_NAME),
        iri(owl::NAMESPACE, owl::PROP_DISJOINT_WITH_NAME),
        iri(owl::NAMESPACE, owl::PROP_UNION_OF_NAME),
        iri(owl::NAMESPACE, owl::PROP_INTERSECTION_OF_NAME),
        iri(owl::NAMESPACE, owl::PROP_COMPLEMENT_OF_NAME),
        iri(owl::NAMESPACE, owl::PROP_ONE_OF_NAME),
        iri(owl::NAMESPACE, owl::PROP_ON_PROPERTY_NAME),
        iri(owl::NAMESPACE, owl::PROP_CARDINALITY_NAME),
        iri(owl::NAMESPACE, owl::PROP_MIN_CARDINALITY_NAME),
        iri(owl::NAMESPACE, owl::PROP_MAX_CARDINALITY_NAME),
        iri(owl::NAMESPACE, owl::PROP_HAS_VALUE_NAME),
        iri(owl::NAMESPACE, owl::PROP_ALL_VALUES_FROM_NAME),
        iri(owl::NAMESPACE, owl::PROP_SOME_VALUES_FROM_NAME),
    ]
    .to_vec();
    let structural_property_predicates: Vec<String> = [
        iri(rdfs::NAMESPACE, rdfs::PROP_DOMAIN_NAME),
        iri(rdfs::NAMESPACE, rdfs::PROP_RANGE_NAME),
        iri(rdfs::NAMESPACE, rdfs::PROP_SUB_PROPERTY_OF_NAME),
        iri(owl::NAMESPACE, owl::PROP_EQUIVALENT_PROPERTY_NAME),
        iri(owl::NAMESPACE, owl::PROP_INVERSE_OF_NAME),
    ]
    .to_vec();
    let type_pred = iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME);
    let first_pred = iri(rdf::NAMESPACE, rdf::PROP_FIRST_NAME);
    let rest_pred = iri(rdf::NAMESPACE, rdf::PROP_REST_NAME);
    let same_as_pred = iri(owl::NAMESPACE, owl::PROP_SAME_AS_NAME);
    let different_from_pred = iri(owl::NAMESPACE, owl::PROP_DIFFERENT_FROM_NAME);

    let non_annotation_properties: Vec<String> = ontology
        .property_model()
        .iter()
        .filter(|p| !p.is_annotation())
        .map(|p| p.resource().to_string())
        .collect();

    for triple in graph.iter() {
        let predicate = &triple.predicate;
        if *predicate == type_pred || *predicate == first_pred || *predicate == rest_pred {
            continue;
        }
        if *predicate == same_as_pred || *predicate == different_from_pred {
            continue;
        }
        if non_annotation_properties.iter().any(|p| p == predicate) {
            continue;
        }

        let owner = owner_of(ontology, &triple.subject);
        if matches!(owner, Owner::Class(_)) && structural_class_predicates.contains(predicate) {
            continue;
        }
        if matches!(owner, Owner::Property(_)) && structural_property_predicates.contains(predicate) {
            continue;
        }

        let is_annotation_predicate = config::is_annotation_property_iri(predicate)
            || ontology
                .property_model()
                .get(Fingerprint::of(predicate))
                .is_some_and(|p| p.is_annotation());

        match (&owner, &triple.object) {
            (Owner::Ontology, Object::Literal(lit)) if is_annotation_predicate => {
                ontology.add_annotation(predicate.clone(), core_literal_of(lit));
            }
            (Owner::Ontology, Object::Resource(object)) => {
                ontology.add_custom_relation(predicate.clone(), fp_of(object));
            }
            (Owner::Ontology, Object::Literal(lit)) => {
                ontology.add_custom_annotation(predicate.clone(), core_literal_of(lit));
            }
            (Owner::Class(fp), Object::Literal(lit)) if is_annotation_predicate => {
                if let Some(class) = ontology.class_model_mut().get_mut(*fp) {
                    class.add_custom_annotation(predicate.clone(), lit.lexical_form.clone());
                }
            }
            (Owner::Class(fp), Object::Resource(object)) => {
                let fp = *fp;
                let object_fp = fp_of(object);
                if let Some(class) = ontology.class_model_mut().get_mut(fp) {
                    class.add_custom_annotation(predicate.clone(), object_fp.to_string());
                }
            }
            (Owner::Class(fp), Object::Literal(lit)) => {
                if let Some(class) = ontology.class_model_mut().get_mut(*fp) {
                    class.add_custom_annotation(predicate.clone(), lit.lexical_form.clone());
                }
            }
            (Owner::Property(fp), Object::Literal(lit)) if is_annotation_predicate => {
                if let Some(property) = ontology.property_model_mut().get_mut(*fp) {
                    property.add_custom_annotation(predicate.clone(), lit.lexical_form.clone());
                }
            }
            (Owner::Property(fp), Object::Resource(object)) => {
                let fp = *fp;
                let object_fp = fp_of(object);
                if let Some(property) = ontology.property_model_mut().get_mut(fp) {
                    property.add_custom_annotation(predicate.clone(), object_fp.to_string());
                }
            }
            (Owner::Property(fp), Object::Literal(lit)) => {
                if let Some(property) = ontology.property_model_mut().get_mut(*fp) {
                    property.add_custom_annotation(predicate.clone(), lit.lexical_form.clone());
                }
            }
            (Owner::Fact(fp), Object::Resource(object)) => {
                let fp = ensure_fact_fp(ontology, *fp, &triple.subject);
                let object_fp = fp_of(object);
                if let Some(fact) = ontology.data_mut().get_fact_mut(fp) {
                    fact.add_custom_relation(predicate.clone(), object_fp);
                }
            }
            (Owner::Fact(fp), Object::Literal(lit)) => {
                let fp = ensure_fact_fp(ontology, *fp, &triple.subject);
                if let Some(fact) = ontology.data_mut().get_fact_mut(fp) {
                    fact.add_custom_annotation(predicate.clone(), lit.lexical_form.clone());
                }
            }
        }
    }
}

fn ensure_fact_fp(ontology: &mut Ontology, fp: Fingerprint, subject: &Node) -> Fingerprint {
    if ontology.data().get_fact(fp).is_none() {
        ensure_fact(ontology, subject)
    } else {
        fp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triple::Triple;
    use ontos_errors::diagnostics::VecDiagnosticSink;

    fn t_resource(s: &str, p: &str, o: &str) -> Triple {
        Triple::resource(Node::iri(s), p.to_string(), Node::iri(o))
    }

    fn rdf_type() -> String {
        iri(rdf::NAMESPACE, rdf::PROP_TYPE_NAME)
    }

    #[test]
    fn transitive_subclass_closure_scenario() {
        // {A subClassOf B, B subClassOf C}
        let mut graph = Graph::new();
        let a = "http://example.org/A";
        let b = "http://example.org/B";
        let c = "http://example.org/C";
        let sub_class_of = iri(rdfs::NAMESPACE, rdfs::PROP_SUB_CLASS_OF_NAME);
        graph.insert(t_resource(a, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)));
        graph.insert(t_resource(b, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)));
        graph.insert(t_resource(c, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)));
        graph.insert(t_resource(a, &sub_class_of, b));
        graph.insert(t_resource(b, &sub_class_of, c));

        let mut sink = VecDiagnosticSink::new();
        let ontology = decode(&graph, &mut sink);

        let a_fp = Fingerprint::of(a);
        let b_fp = Fingerprint::of(b);
        let c_fp = Fingerprint::of(c);
        let subs_of_c = ontos_core::reasoning::sub_classes_of(c_fp, ontology.class_model());
        assert!(subs_of_c.contains(&a_fp));
        assert!(subs_of_c.contains(&b_fp));
        let supers_of_a = ontos_core::reasoning::super_classes_of(a_fp, ontology.class_model());
        assert!(supers_of_a.contains(&b_fp));
        assert!(supers_of_a.contains(&c_fp));
    }

    #[test]
    fn equivalence_cycle_decodes_and_terminates() {
        let mut graph = Graph::new();
        let a = "http://example.org/A";
        let b = "http://example.org/B";
        let equivalent_class = iri(owl::NAMESPACE, owl::PROP_EQUIVALENT_CLASS_NAME);
        graph.insert(t_resource(a, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)));
        graph.insert(t_resource(b, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_CLASS_NAME)));
        graph.insert(t_resource(a, &equivalent_class, b));
        graph.insert(t_resource(b, &equivalent_class, a));

        let mut sink = VecDiagnosticSink::new();
        let ontology = decode(&graph, &mut sink);
        let eq = ontos_core::reasoning::equivalent_classes_of(Fingerprint::of(a), ontology.class_model());
        assert_eq!(eq.len(), 1);
        assert!(eq.contains(&Fingerprint::of(b)));
    }

    #[test]
    fn ontology_header_adopts_subject_as_name() {
        let mut graph = Graph::new();
        graph.insert(t_resource(
            "http://example.org/onto",
            &rdf_type(),
            &iri(owl::NAMESPACE, owl::CLASS_ONTOLOGY_NAME),
        ));
        let mut sink = VecDiagnosticSink::new();
        let ontology = decode(&graph, &mut sink);
        assert_eq!(ontology.name(), Some("http://example.org/onto"));
    }

    #[test]
    fn restriction_on_annotation_property_is_skipped_with_warning() {
        let mut graph = Graph::new();
        let r = "http://example.org/R";
        let label = iri(rdfs::NAMESPACE, rdfs::PROP_LABEL_NAME);
        graph.insert(t_resource(r, &rdf_type(), &iri(owl::NAMESPACE, owl::CLASS_RESTRICTION_NAME)));
        graph.insert(t_resource(r, &iri(owl::NAMESPACE, owl::PROP_ON_PROPERTY_NAME), &label));

        let mut sink = VecDiagnosticSink::new();
        let ontology = decode(&graph, &mut sink);
        assert!(!ontology.class_model().contains(Fingerprint::of(r)));
        assert!(sink
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::RestrictionOnAnnotationProperty));
    }

    #[test]
    fn unexpand_strips_base_vocabulary_from_result() {
        let graph = Graph::new();
        let mut sink = VecDiagnosticSink::new();
        let ontology = decode(&graph, &mut sink);
        assert!(ontology.class_model().is_empty());
        assert!(ontology.property_model().is_empty());
    }
}
