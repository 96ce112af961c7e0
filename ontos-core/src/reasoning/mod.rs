/*!
Pure functions computing taxonomic closures and restriction/composite
class memberships over an [`crate::model::ontology::Ontology`] (spec
§4.2-§4.8). None of these functions mutate their inputs; each returns a
freshly allocated result.
*/

pub mod closure;
pub mod membership;

pub use closure::{
    different_facts_from, disjoint_classes_of, equivalent_classes_of, equivalent_properties_of,
    inverse_properties_of, same_facts_as, sub_classes_of, sub_properties_of, super_classes_of,
    super_properties_of, transitive_assertions_of,
};
pub use membership::members_of;
