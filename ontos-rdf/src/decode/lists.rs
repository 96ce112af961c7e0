/*!
Blank-node RDF list deserialization: walk `rdf:first`/`rdf:rest` from a
list head to `rdf:nil` (spec §1 "blank-node list deserialization"; §4.9
step 6).
*/

use crate::triple::{Graph, Node, Object};
use ontos_core::stdlib::rdf;
use ontos_errors::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use rustc_hash::FxHashSet;

/// Walk the list rooted at `head`, returning its members in order. Stops
/// and reports [`DiagnosticCode::MissingListMemberDefinition`] if a
/// `rdf:first`/`rdf:rest` pair cannot be found for a list node, or if a
/// cycle is detected (visit-context terminated, spec §4.2 "Termination
/// under cycles").
pub fn walk_list(graph: &Graph, head: &Node, subject_label: &str, sink: &mut dyn DiagnosticSink) -> Vec<Object> {
    let first_predicate = format!("{}{}", rdf::NAMESPACE, rdf::PROP_FIRST_NAME);
    let rest_predicate = format!("{}{}", rdf::NAMESPACE, rdf::PROP_REST_NAME);
    let nil = format!("{}{}", rdf::NAMESPACE, rdf::PROP_NIL_NAME);

    let mut members = Vec::new();
    let mut visited: FxHashSet<Node> = FxHashSet::default();
    let mut current = head.clone();

    loop {
        if current.as_str() == nil && !current.is_blank() {
            break;
        }
        if !visited.insert(current.clone()) {
            sink.report(
                Diagnostic::new(DiagnosticCode::MissingListMemberDefinition, "cyclic rdf:first/rdf:rest list detected")
                    .with_subject(subject_label),
            );
            break;
        }

        let first = graph.by_subject(&current).find(|t| t.predicate == first_predicate);
        let Some(first) = first else {
            sink.report(
                Diagnostic::new(
                    DiagnosticCode::MissingListMemberDefinition,
                    format!("list node {current:?} has no rdf:first"),
                )
                .with_subject(subject_label),
            );
            break;
        };
        members.push(first.object.clone());

        let rest = graph.by_subject(&current).find(|t| t.predicate == rest_predicate);
        match rest {
            None => {
                sink.report(
                    Diagnostic::new(
                        DiagnosticCode::MissingListMemberDefinition,
                        format!("list node {current:?} has no rdf:rest"),
                    )
                    .with_subject(subject_label),
                );
                break;
            }
            Some(rest) => match &rest.object {
                Object::Resource(next) => {
                    if next.as_str() == nil && !next.is_blank() {
                        break;
                    }
                    current = next.clone();
                }
                Object::Literal(_) => {
                    sink.report(
                        Diagnostic::new(DiagnosticCode::MissingListMemberDefinition, "rdf:rest pointed at a literal")
                            .with_subject(subject_label),
                    );
                    break;
                }
            },
        }
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triple::Triple;
    use ontos_errors::diagnostics::VecDiagnosticSink;

    fn rdf_pred(name: &str) -> String {
        format!("{}{}", rdf::NAMESPACE, name)
    }

    #[test]
    fn walks_a_two_element_list() {
        let mut graph = Graph::new();
        let head = Node::blank("l1");
        let tail = Node::blank("l2");
        graph.insert(Triple::resource(head.clone(), rdf_pred("first"), Node::iri("http://example.org/A")));
        graph.insert(Triple::resource(head.clone(), rdf_pred("rest"), tail.clone()));
        graph.insert(Triple::resource(tail.clone(), rdf_pred("first"), Node::iri("http://example.org/B")));
        graph.insert(Triple::resource(tail, rdf_pred("rest"), Node::iri(&rdf_pred("nil"))));

        let mut sink = VecDiagnosticSink::new();
        let members = walk_list(&graph, &head, "subj", &mut sink);
        assert_eq!(members.len(), 2);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn missing_member_definition_warns_and_stops() {
        let mut graph = Graph::new();
        let head = Node::blank("l1");
        graph.insert(Triple::resource(head.clone(), rdf_pred("rest"), Node::iri(&rdf_pred("nil"))));
        let mut sink = VecDiagnosticSink::new();
        let members = walk_list(&graph, &head, "subj", &mut sink);
        assert!(members.is_empty());
        assert_eq!(sink.diagnostics().len(), 1);
    }
}
