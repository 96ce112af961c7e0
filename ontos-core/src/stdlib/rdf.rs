/*!
Standard library module for namespace `rdf`.
*/

pub const MODULE_NAME: &str = "rdf";
pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

pub const PROP_TYPE_NAME: &str = "type";
pub const PROP_FIRST_NAME: &str = "first";
pub const PROP_REST_NAME: &str = "rest";
pub const PROP_NIL_NAME: &str = "nil";

pub const ALL_TERMS: &[&str] = &[PROP_TYPE_NAME, PROP_FIRST_NAME, PROP_REST_NAME, PROP_NIL_NAME];
