/*!
Provide the Rust types that implement the in-memory ontology model: the
resource layer, the taxonomy store, the three typed containers
(ClassModel/PropertyModel/Data), and the `Ontology` aggregate (spec §3).
*/

pub mod class;
pub mod class_model;
pub mod data;
pub mod fact;
pub mod ontology;
pub mod property;
pub mod property_model;
pub mod resource;
pub mod taxonomy;

/// Relations carried as predicates on a [`taxonomy::Taxonomy`] within a
/// `ClassModel`, `PropertyModel`, or `Data` container (spec §3,
/// "Relationships stored as taxonomies").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    SubClassOf,
    EquivalentClass,
    DisjointWith,
    UnionOf,
    IntersectionOf,
    OneOf,
    SubPropertyOf,
    EquivalentProperty,
    InverseOf,
    ClassType,
    SameAs,
    DifferentFrom,
    /// `Assertions` carries the asserted predicate as associated data
    /// rather than as part of the relation tag — see
    /// [`data::Data::assertions_for`].
    Assertion,
}
