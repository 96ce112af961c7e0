/*!
In-memory RDFS/OWL-DL ontology model and the pure functions that compute
its entailed consequences.

This crate implements the class model (T-Box), property model, and data
(A-Box) containers described by the engine's specification, plus the
reasoning helper that computes taxonomic closures and restriction
memberships over them. It does not read or write triples directly — see
the sibling `ontos-rdf` crate for the graph↔ontology translator.

# Features

## serde

Adds [`serde::Serialize`]/[`serde::Deserialize`] to every model type.
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

pub use ontos_errors as error;

pub mod config;

pub mod model;

pub mod reasoning;

pub mod stdlib;

pub use model::ontology::Ontology;
