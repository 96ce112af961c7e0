/*!
The RDF graph ↔ ontology translator: a flat triple wire format plus the
fixed-pipeline decoder and projecting encoder that convert between it and
an [`ontos_core::Ontology`] (spec §4.9, §4.10).

This crate does not read or write any particular serialization (Turtle,
N-Triples, JSON-LD, ...) — [`triple::Graph`] is the engine's own flat,
in-memory wire format. Callers holding a triple store of their own
project into and out of it at the triple level; no third-party graph
crate's statement type crosses this boundary.

# Features

## serde

Adds `serde::Serialize`/`serde::Deserialize` to [`triple::Node`] and
[`triple::WireLiteral`] (re-exported transitively from `ontos-core`'s
model types via [`decode::decode`]/[`encode::encode`]).
*/

#![warn(
    unknown_lints,
    elided_lifetimes_in_paths,
    macro_use_extern_crate,
    missing_debug_implementations,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unused
)]

pub mod decode;
pub mod encode;
pub mod triple;

use ontos_core::Ontology;
use ontos_errors::diagnostics::DiagnosticSink;
use triple::Graph;

// ------------------------------------------------------------------------------------------------
// Public Traits ❱ ontology ↔ graph convenience surface (spec §6)
// ------------------------------------------------------------------------------------------------

/// Decode a [`Graph`] into `Self` (spec §6 `Ontology.fromGraph`).
pub trait FromGraph: Sized {
    fn from_graph(graph: &Graph, sink: &mut dyn DiagnosticSink) -> Self;
}

/// Encode `self` as a [`Graph`] (spec §6 `Ontology.toGraph`).
pub trait ToGraph {
    fn to_graph(&self, include_inferences: bool) -> Graph;
}

impl FromGraph for Ontology {
    fn from_graph(graph: &Graph, sink: &mut dyn DiagnosticSink) -> Self {
        decode::decode(graph, sink)
    }
}

impl ToGraph for Ontology {
    fn to_graph(&self, include_inferences: bool) -> Graph {
        encode::encode(self, include_inferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontos_errors::diagnostics::VecDiagnosticSink;

    #[test]
    fn from_graph_and_to_graph_round_trip_an_empty_graph() {
        let graph = Graph::new();
        let mut sink = VecDiagnosticSink::new();
        let ontology = Ontology::from_graph(&graph, &mut sink);
        let re_encoded = ontology.to_graph(true);
        assert!(re_encoded.is_empty());
        assert!(sink.diagnostics().is_empty());
    }
}
