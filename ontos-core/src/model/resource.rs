/*!
Provide the base resource identity type shared by every other model type:
classes, properties, facts and literals are all a [`Resource`] refined with
additional attributes (spec §3, §4.1).
*/

use rustc_hash::FxHasher;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Fingerprint
// ------------------------------------------------------------------------------------------------

/// A deterministic 64-bit identity for a [`Resource`], derived from its
/// canonical string form (spec §4.1, Glossary "Fingerprint"). Two
/// resources with equal fingerprints are treated as equal everywhere in
/// this crate; fingerprints are the hash key used by every taxonomy index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Compute the fingerprint of a resource's canonical string form.
    ///
    /// For named resources this is the IRI; for literals it is the
    /// lexical form concatenated with the datatype IRI and/or language
    /// tag (spec §4.1).
    pub fn of(canonical: &str) -> Self {
        let mut hasher = FxHasher::default();
        canonical.hash(&mut hasher);
        Self(hasher.finish())
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:016x})", self.0)
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Identity
// ------------------------------------------------------------------------------------------------

/// The identity-bearing part of a [`Resource`]: either a named IRI or a
/// blank node with a locally-unique label (spec §3, Resource row).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Identity {
    Iri(String),
    BlankNode(String),
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "{iri}"),
            Self::BlankNode(label) => write!(f, "_:{label}"),
        }
    }
}

impl Identity {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Iri(iri) => iri,
            Self::BlankNode(label) => label,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Resource
// ------------------------------------------------------------------------------------------------

/// Base of every other model entity (spec §3). A resource is never
/// mutated after construction; its fingerprint and identity are fixed for
/// its lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resource {
    fingerprint: Fingerprint,
    identity: Identity,
}

impl Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.identity, f)
    }
}

impl Resource {
    pub fn new_iri<S: Into<String>>(iri: S) -> Self {
        let identity = Identity::Iri(iri.into());
        let fingerprint = Fingerprint::of(identity.as_str());
        Self {
            fingerprint,
            identity,
        }
    }

    /// Fallible counterpart of [`Self::new_iri`] for callers constructing
    /// resources directly rather than through the graph decoder: rejects a
    /// malformed IRI as a construction precondition violation (spec §7.1)
    /// instead of admitting it silently. The graph decoder does not use
    /// this — a malformed IRI arriving over the wire is a decode warning,
    /// not a fatal error (spec §7.2), so it keeps using [`Self::new_iri`].
    pub fn try_new_iri<S: Into<String>>(iri: S) -> ontos_errors::Result<Self> {
        let iri = iri.into();
        if url::Url::parse(&iri).is_err() {
            return Err(ontos_errors::invalid_iri_error(iri));
        }
        Ok(Self::new_iri(iri))
    }

    pub fn new_blank<S: Into<String>>(label: S) -> Self {
        let identity = Identity::BlankNode(label.into());
        // Blank node fingerprints are namespaced so they never collide
        // with an IRI of the same local label.
        let fingerprint = Fingerprint::of(&format!("_:{}", identity.as_str()));
        Self {
            fingerprint,
            identity,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn is_blank(&self) -> bool {
        self.identity.is_blank()
    }

    pub fn iri(&self) -> Option<&str> {
        match &self.identity {
            Identity::Iri(iri) => Some(iri),
            Identity::BlankNode(_) => None,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Public Types ❱ Literal
// ------------------------------------------------------------------------------------------------

/// An RDF literal: immutable lexical form plus optional datatype IRI and
/// language tag (spec §3, Literal row).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    resource: Resource,
    lexical_form: String,
    datatype: Option<String>,
    language: Option<String>,
}

impl Literal {
    pub fn plain<S: Into<String>>(lexical_form: S) -> Self {
        let lexical_form = lexical_form.into();
        Self::build(lexical_form, None, None)
    }

    pub fn typed<S1: Into<String>, S2: Into<String>>(lexical_form: S1, datatype: S2) -> Self {
        let lexical_form = lexical_form.into();
        Self::build(lexical_form, Some(datatype.into()), None)
    }

    pub fn with_language<S1: Into<String>, S2: Into<String>>(
        lexical_form: S1,
        language: S2,
    ) -> Self {
        let lexical_form = lexical_form.into();
        Self::build(lexical_form, None, Some(language.into()))
    }

    fn build(lexical_form: String, datatype: Option<String>, language: Option<String>) -> Self {
        let canonical = format!(
            "{lexical_form}\u{0}{}\u{0}{}",
            datatype.as_deref().unwrap_or(""),
            language.as_deref().unwrap_or("")
        );
        let identity = Identity::Iri(format!("_literal_:{canonical}"));
        let resource = Resource {
            fingerprint: Fingerprint::of(&canonical),
            identity,
        };
        Self {
            resource,
            lexical_form,
            datatype,
            language,
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.resource.fingerprint()
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_iri_rejects_non_iri_input() {
        assert!(Resource::try_new_iri("not an iri").is_err());
    }

    #[test]
    fn try_new_iri_accepts_well_formed_iri() {
        let r = Resource::try_new_iri("http://example.org/A").unwrap();
        assert_eq!(r.iri(), Some("http://example.org/A"));
    }

    #[test]
    fn same_iri_same_fingerprint() {
        let a = Resource::new_iri("http://example.org/A");
        let b = Resource::new_iri("http://example.org/A");
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_iris_distinct_fingerprints() {
        let a = Resource::new_iri("http://example.org/A");
        let b = Resource::new_iri("http://example.org/B");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn blank_node_does_not_collide_with_like_named_iri() {
        let iri = Resource::new_iri("b1");
        let blank = Resource::new_blank("b1");
        assert_ne!(iri.fingerprint(), blank.fingerprint());
    }

    #[test]
    fn literal_distinguishes_datatype_and_language() {
        let plain = Literal::plain("hello");
        let typed = Literal::typed("hello", "http://www.w3.org/2001/XMLSchema#string");
        let tagged = Literal::with_language("hello", "en");
        assert_ne!(plain.fingerprint(), typed.fingerprint());
        assert_ne!(plain.fingerprint(), tagged.fingerprint());
        assert_ne!(typed.fingerprint(), tagged.fingerprint());
    }
}
