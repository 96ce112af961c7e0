/*!
Standard library module for namespace `owl`.
*/

pub const MODULE_NAME: &str = "owl";
pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

pub const CLASS_ONTOLOGY_NAME: &str = "Ontology";
pub const CLASS_CLASS_NAME: &str = "Class";
pub const CLASS_DEPRECATED_CLASS_NAME: &str = "DeprecatedClass";
pub const CLASS_RESTRICTION_NAME: &str = "Restriction";
pub const CLASS_DATA_RANGE_NAME: &str = "DataRange";
pub const CLASS_ANNOTATION_PROPERTY_NAME: &str = "AnnotationProperty";
pub const CLASS_DATATYPE_PROPERTY_NAME: &str = "DatatypeProperty";
pub const CLASS_OBJECT_PROPERTY_NAME: &str = "ObjectProperty";
pub const CLASS_SYMMETRIC_PROPERTY_NAME: &str = "SymmetricProperty";
pub const CLASS_TRANSITIVE_PROPERTY_NAME: &str = "TransitiveProperty";
pub const CLASS_FUNCTIONAL_PROPERTY_NAME: &str = "FunctionalProperty";
pub const CLASS_INVERSE_FUNCTIONAL_PROPERTY_NAME: &str = "InverseFunctionalProperty";

pub const PROP_ON_PROPERTY_NAME: &str = "onProperty";
pub const PROP_ONE_OF_NAME: &str = "oneOf";
pub const PROP_UNION_OF_NAME: &str = "unionOf";
pub const PROP_INTERSECTION_OF_NAME: &str = "intersectionOf";
pub const PROP_COMPLEMENT_OF_NAME: &str = "complementOf";
pub const PROP_ALL_VALUES_FROM_NAME: &str = "allValuesFrom";
pub const PROP_SOME_VALUES_FROM_NAME: &str = "someValuesFrom";
pub const PROP_HAS_VALUE_NAME: &str = "hasValue";
pub const PROP_CARDINALITY_NAME: &str = "cardinality";
pub const PROP_MIN_CARDINALITY_NAME: &str = "minCardinality";
pub const PROP_MAX_CARDINALITY_NAME: &str = "maxCardinality";
pub const PROP_SAME_AS_NAME: &str = "sameAs";
pub const PROP_DIFFERENT_FROM_NAME: &str = "differentFrom";
pub const PROP_EQUIVALENT_CLASS_NAME: &str = "equivalentClass";
pub const PROP_DISJOINT_WITH_NAME: &str = "disjointWith";
pub const PROP_EQUIVALENT_PROPERTY_NAME: &str = "equivalentProperty";
pub const PROP_INVERSE_OF_NAME: &str = "inverseOf";
pub const PROP_VERSION_INFO_NAME: &str = "versionInfo";
pub const PROP_VERSION_IRI_NAME: &str = "versionIRI";
pub const PROP_PRIOR_VERSION_NAME: &str = "priorVersion";
pub const PROP_BACKWARD_COMPATIBLE_WITH_NAME: &str = "backwardCompatibleWith";
pub const PROP_INCOMPATIBLE_WITH_NAME: &str = "incompatibleWith";
pub const PROP_IMPORTS_NAME: &str = "imports";

pub const ALL_CLASSES: &[&str] = &[
    CLASS_ONTOLOGY_NAME,
    CLASS_CLASS_NAME,
    CLASS_DEPRECATED_CLASS_NAME,
    CLASS_RESTRICTION_NAME,
    CLASS_DATA_RANGE_NAME,
    CLASS_ANNOTATION_PROPERTY_NAME,
    CLASS_DATATYPE_PROPERTY_NAME,
    CLASS_OBJECT_PROPERTY_NAME,
    CLASS_SYMMETRIC_PROPERTY_NAME,
    CLASS_TRANSITIVE_PROPERTY_NAME,
    CLASS_FUNCTIONAL_PROPERTY_NAME,
    CLASS_INVERSE_FUNCTIONAL_PROPERTY_NAME,
];

pub const ALL_PROPERTIES: &[&str] = &[
    PROP_ON_PROPERTY_NAME,
    PROP_ONE_OF_NAME,
    PROP_UNION_OF_NAME,
    PROP_INTERSECTION_OF_NAME,
    PROP_COMPLEMENT_OF_NAME,
    PROP_ALL_VALUES_FROM_NAME,
    PROP_SOME_VALUES_FROM_NAME,
    PROP_HAS_VALUE_NAME,
    PROP_CARDINALITY_NAME,
    PROP_MIN_CARDINALITY_NAME,
    PROP_MAX_CARDINALITY_NAME,
    PROP_SAME_AS_NAME,
    PROP_DIFFERENT_FROM_NAME,
    PROP_EQUIVALENT_CLASS_NAME,
    PROP_DISJOINT_WITH_NAME,
    PROP_EQUIVALENT_PROPERTY_NAME,
    PROP_INVERSE_OF_NAME,
    PROP_VERSION_INFO_NAME,
    PROP_VERSION_IRI_NAME,
    PROP_PRIOR_VERSION_NAME,
    PROP_BACKWARD_COMPATIBLE_WITH_NAME,
    PROP_INCOMPATIBLE_WITH_NAME,
    PROP_IMPORTS_NAME,
];

/// Ontology-header annotation properties carried through to
/// `Ontology::annotations` verbatim (spec §4.9 step 3, step 14).
pub const ANNOTATION_PROPERTIES: &[&str] = &[
    PROP_VERSION_INFO_NAME,
    PROP_VERSION_IRI_NAME,
    PROP_PRIOR_VERSION_NAME,
    PROP_BACKWARD_COMPATIBLE_WITH_NAME,
    PROP_INCOMPATIBLE_WITH_NAME,
    PROP_IMPORTS_NAME,
];
