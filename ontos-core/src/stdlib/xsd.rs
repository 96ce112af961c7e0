/*!
Standard library module for namespace `xsd`.

Only the subset of XSD primitive datatypes the reasoner needs to
classify literal categories for "literal-compatible class" resolution
(spec §4.8) is enumerated here; the engine does not validate literal
lexical forms against the full XSD type system.
*/

pub const MODULE_NAME: &str = "xsd";
pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

pub const STRING: &str = "string";
pub const BOOLEAN: &str = "boolean";
pub const DECIMAL: &str = "decimal";
pub const INTEGER: &str = "integer";
pub const NON_NEGATIVE_INTEGER: &str = "nonNegativeInteger";
pub const FLOAT: &str = "float";
pub const DOUBLE: &str = "double";
pub const DATE: &str = "date";
pub const DATETIME: &str = "dateTime";
pub const ANY_URI: &str = "anyURI";

/// Datatypes the "literal-compatible class" rule (spec §4.8) treats as
/// string-category, matched against `xsd:string` or an equivalent class.
pub const STRING_CATEGORY: &[&str] = &[STRING, ANY_URI];

/// Datatypes treated as numeric-category for restriction value-range
/// comparisons.
pub const NUMERIC_CATEGORY: &[&str] = &[DECIMAL, INTEGER, NON_NEGATIVE_INTEGER, FLOAT, DOUBLE];

pub const ALL_DATATYPES: &[&str] = &[
    STRING,
    BOOLEAN,
    DECIMAL,
    INTEGER,
    NON_NEGATIVE_INTEGER,
    FLOAT,
    DOUBLE,
    DATE,
    DATETIME,
    ANY_URI,
];
