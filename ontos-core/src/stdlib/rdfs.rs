/*!
Standard library module for namespace `rdfs`.
*/

pub const MODULE_NAME: &str = "rdfs";
pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";

pub const CLASS_LITERAL_NAME: &str = "Literal";

pub const PROP_SUB_CLASS_OF_NAME: &str = "subClassOf";
pub const PROP_SUB_PROPERTY_OF_NAME: &str = "subPropertyOf";
pub const PROP_DOMAIN_NAME: &str = "domain";
pub const PROP_RANGE_NAME: &str = "range";
pub const PROP_COMMENT_NAME: &str = "comment";
pub const PROP_LABEL_NAME: &str = "label";
pub const PROP_SEE_ALSO_NAME: &str = "seeAlso";
pub const PROP_IS_DEFINED_BY_NAME: &str = "isDefinedBy";

pub const ALL_CLASSES: &[&str] = &[CLASS_LITERAL_NAME];
pub const ALL_PROPERTIES: &[&str] = &[
    PROP_SUB_CLASS_OF_NAME,
    PROP_SUB_PROPERTY_OF_NAME,
    PROP_DOMAIN_NAME,
    PROP_RANGE_NAME,
    PROP_COMMENT_NAME,
    PROP_LABEL_NAME,
    PROP_SEE_ALSO_NAME,
    PROP_IS_DEFINED_BY_NAME,
];

/// Annotation properties carry free-form values through unchanged (spec
/// §4.9 step 14): `comment`, `label`, `seeAlso`, `isDefinedBy` are never
/// treated as structural predicates even though they live in this
/// namespace.
pub const ANNOTATION_PROPERTIES: &[&str] = &[
    PROP_COMMENT_NAME,
    PROP_LABEL_NAME,
    PROP_SEE_ALSO_NAME,
    PROP_IS_DEFINED_BY_NAME,
];
