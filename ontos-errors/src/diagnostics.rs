/*!
The non-fatal diagnostic ("decode warning") channel.

Spec §4.9/§7.2: decode warnings are recoverable — the offending axiom is
skipped and decoding continues — and are "surfaced through a process-wide
event channel." This module models that channel as a [`DiagnosticSink`]
passed explicitly to the decoder, rather than literal global mutable
state, so that concurrent readers (spec §5) never contend on it; callers
that want process-wide behavior can share one sink across decode calls.
*/

use std::fmt::{self, Display};
use tracing::warn;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// Stable machine-readable codes for each decode warning spec §4.9 names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum DiagnosticCode {
    UnresolvedClassReference,
    UnresolvedPropertyReference,
    UnresolvedFactReference,
    RestrictionOnAnnotationProperty,
    RestrictionOnReservedProperty,
    NonIntegerCardinality,
    PropertyKindMismatch,
    AssertionObjectKindMismatch,
    OneOfVariantConflict,
    MissingListMemberDefinition,
}

impl Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::UnresolvedClassReference => "unresolved-class-reference",
            Self::UnresolvedPropertyReference => "unresolved-property-reference",
            Self::UnresolvedFactReference => "unresolved-fact-reference",
            Self::RestrictionOnAnnotationProperty => "restriction-on-annotation-property",
            Self::RestrictionOnReservedProperty => "restriction-on-reserved-property",
            Self::NonIntegerCardinality => "non-integer-cardinality",
            Self::PropertyKindMismatch => "property-kind-mismatch",
            Self::AssertionObjectKindMismatch => "assertion-object-kind-mismatch",
            Self::OneOfVariantConflict => "oneof-variant-conflict",
            Self::MissingListMemberDefinition => "missing-list-member-definition",
        };
        write!(f, "{s}")
    }
}

/// A single recoverable anomaly raised while decoding a graph into an
/// ontology (spec §4.9, warnings column) or while reasoning about a
/// malformed `hasValue` comparison (spec §4.7, §7.3 — reported at
/// `trace` rather than `warn` level, see [`DiagnosticSink::trace`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    /// The IRI/blank-node identity of the offending subject, if any.
    pub subject: Option<String>,
}

impl Diagnostic {
    pub fn new<S: Into<String>>(code: DiagnosticCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
            subject: None,
        }
    }

    pub fn with_subject<S: Into<String>>(self, subject: S) -> Self {
        let mut this = self;
        this.subject = Some(subject.into());
        this
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "[{}] {} (subject: {subject})", self.code, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Receives [`Diagnostic`]s emitted during decoding or reasoning. Handlers
/// must be thread-safe if a caller shares one sink between concurrent
/// readers (spec §5).
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    /// Trace-level swallow, used only for the `hasValue` literal-comparison
    /// failure path (spec §4.7, §9) which must never surface as a warning.
    fn trace(&mut self, message: &str) {
        tracing::trace!("{message}");
    }
}

/// Collects every diagnostic into a `Vec`, in emission order.
#[derive(Debug, Default)]
pub struct VecDiagnosticSink(Vec<Diagnostic>);

impl VecDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl DiagnosticSink for VecDiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }
}

/// Emits every diagnostic as a `tracing::warn!` event and discards it;
/// the default sink for callers that only want log output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink = VecDiagnosticSink::new();
        sink.report(Diagnostic::new(DiagnosticCode::UnresolvedClassReference, "a"));
        sink.report(Diagnostic::new(DiagnosticCode::NonIntegerCardinality, "b"));
        let diags = sink.into_diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].code, DiagnosticCode::UnresolvedClassReference);
        assert_eq!(diags[1].code, DiagnosticCode::NonIntegerCardinality);
    }

    #[test]
    fn diagnostic_display_includes_subject() {
        let d = Diagnostic::new(DiagnosticCode::RestrictionOnReservedProperty, "nope")
            .with_subject("http://example.org/r1");
        let rendered = d.to_string();
        assert!(rendered.contains("restriction-on-reserved-property"));
        assert!(rendered.contains("http://example.org/r1"));
    }
}
