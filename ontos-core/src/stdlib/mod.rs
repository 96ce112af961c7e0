/*!
Constants for the reserved RDF, RDFS, OWL, XSD, and Dublin Core vocabulary
IRIs the engine recognizes natively (spec §6, "Reserved vocabulary IRIs").

Each submodule mirrors one namespace and exposes `MODULE_NAME` (the
conventional prefix), `NAMESPACE` (the IRI the prefix expands to), and a
`CLASS_*`/`PROP_*`/`DT_*` constant per reserved term. [`is_reserved_iri`]
and friends in the sibling [`crate::config`] module answer membership
queries against the full set below.
*/

pub mod dc;
pub mod owl;
pub mod rdf;
pub mod rdfs;
pub mod xsd;
