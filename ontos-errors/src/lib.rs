/*!
Provides the crate family's `Error`/`Result` type and the non-fatal
diagnostic channel used by the graph decoder.

Construction-precondition violations (spec §7.1) are reported as an
[`Error`]; everything else anomalous during decoding or reasoning (spec
§7.2, §7.3) is non-fatal and is reported through [`Diagnostic`] /
[`DiagnosticSink`] instead.
*/

#![warn(
    unknown_lints,
    elided_lifetimes_in_paths,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused
)]

pub mod diagnostics;

use std::fmt::{Debug, Display};
use tracing::error;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The Error type for this crate family. Every variant corresponds to a
/// *fatal construction precondition violation* (spec §7.1); recoverable
/// decode anomalies never produce an `Error`, see [`diagnostics`].
///
#[derive(Debug)]
pub enum Error {
    /// An ontology, class model, property model or data container was
    /// constructed with an empty or otherwise invalid name.
    InvalidName { input: String },
    /// A resource reference could not be parsed into a valid IRI.
    InvalidIri { input: String },
    /// A property was declared with more than one of
    /// `{annotation, datatype, object}` (spec §3 invariant 5).
    ConflictingPropertyKind { iri: String },
    /// A restriction's `on-property` characteristic
    /// (symmetric/transitive/...) was requested for a property that is not
    /// an object property (spec §3 Property row).
    IllegalPropertyCharacteristic { iri: String, characteristic: String },
    /// A literal's lexical form could not be parsed as its claimed
    /// datatype during restriction refinement (spec §4.9 step 8).
    MalformedLiteral { lexical_form: String, datatype: String },
}

///
/// A Result type that specifically uses this crate's [`Error`].
///
pub type Result<T> = std::result::Result<T, Error>;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

macro_rules! report_and_return {
    ($err:expr) => {{
        let err = $err;
        error!("{}", err);
        err
    }};
}

/// Construct an `Error` for a name that fails the non-empty/valid-IRI
/// precondition.
#[inline]
pub fn invalid_name_error<S>(input: S) -> Error
where
    S: Into<String>,
{
    report_and_return!(Error::InvalidName { input: input.into() })
}

/// Construct an `Error` for a string that does not parse as an IRI.
#[inline]
pub fn invalid_iri_error<S>(input: S) -> Error
where
    S: Into<String>,
{
    report_and_return!(Error::InvalidIri { input: input.into() })
}

/// Construct an `Error` for a property declared with conflicting kinds.
#[inline]
pub fn conflicting_property_kind_error<S>(iri: S) -> Error
where
    S: Into<String>,
{
    report_and_return!(Error::ConflictingPropertyKind { iri: iri.into() })
}

/// Construct an `Error` for a characteristic illegally requested on a
/// non-object property.
#[inline]
pub fn illegal_property_characteristic_error<S1, S2>(iri: S1, characteristic: S2) -> Error
where
    S1: Into<String>,
    S2: Into<String>,
{
    report_and_return!(Error::IllegalPropertyCharacteristic {
        iri: iri.into(),
        characteristic: characteristic.into(),
    })
}

/// Construct an `Error` for a literal that cannot be parsed as its
/// claimed datatype.
#[inline]
pub fn malformed_literal_error<S1, S2>(lexical_form: S1, datatype: S2) -> Error
where
    S1: Into<String>,
    S2: Into<String>,
{
    report_and_return!(Error::MalformedLiteral {
        lexical_form: lexical_form.into(),
        datatype: datatype.into(),
    })
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::InvalidName { input } =>
                    format!("Invalid resource name; input: {input:?}"),
                Self::InvalidIri { input } =>
                    format!("Input does not parse as an IRI; input: {input:?}"),
                Self::ConflictingPropertyKind { iri } => format!(
                    "Property is declared as more than one of annotation/datatype/object; iri: {iri}"
                ),
                Self::IllegalPropertyCharacteristic { iri, characteristic } => format!(
                    "Characteristic '{characteristic}' is only legal on object properties; iri: {iri}"
                ),
                Self::MalformedLiteral { lexical_form, datatype } => format!(
                    "Literal '{lexical_form}' does not parse as datatype '{datatype}'"
                ),
            }
        )
    }
}

impl std::error::Error for Error {}

impl<T> From<Error> for Result<T> {
    fn from(value: Error) -> Self {
        Err(value)
    }
}
