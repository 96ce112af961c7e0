/*!
Standard library module for namespace `dc` (Dublin Core Elements).
*/

pub const MODULE_NAME: &str = "dc";
pub const NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

pub const CONTRIBUTOR: &str = "contributor";
pub const COVERAGE: &str = "coverage";
pub const CREATOR: &str = "creator";
pub const DATE: &str = "date";
pub const DESCRIPTION: &str = "description";
pub const FORMAT: &str = "format";
pub const IDENTIFIER: &str = "identifier";
pub const LANGUAGE: &str = "language";
pub const PUBLISHER: &str = "publisher";
pub const RELATION: &str = "relation";
pub const RIGHTS: &str = "rights";
pub const SOURCE: &str = "source";
pub const SUBJECT: &str = "subject";
pub const TITLE: &str = "title";
pub const TYPE: &str = "type";

pub const ALL_TERMS: &[&str] = &[
    CONTRIBUTOR,
    COVERAGE,
    CREATOR,
    DATE,
    DESCRIPTION,
    FORMAT,
    IDENTIFIER,
    LANGUAGE,
    PUBLISHER,
    RELATION,
    RIGHTS,
    SOURCE,
    SUBJECT,
    TITLE,
    TYPE,
];
