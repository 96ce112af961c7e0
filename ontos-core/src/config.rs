/*!
The BASE (rdf/rdfs/owl/xsd) and DC vocabulary: a fixed, process-wide set
of reserved IRIs injected into a model on "expansion" and stripped again
on "unexpansion" (spec §3 invariant 6; §4.9 steps 1 and 15).

Unlike the source material's JSON-file-configurable library-module
override layer, this vocabulary is normative and not user-overridable,
so it is a fixed [`LazyLock`] table rather than a loaded configuration
file.
*/

use crate::model::class::{Class, ClassKind};
use crate::model::class_model::ClassModel;
use crate::model::ontology::Ontology;
use crate::model::property::{Property, PropertyKind};
use crate::model::property_model::PropertyModel;
use crate::model::resource::Resource;
use crate::stdlib::{dc, owl, rdf, rdfs, xsd};
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ namespace membership
// ------------------------------------------------------------------------------------------------

pub fn is_base_vocabulary_iri(iri: &str) -> bool {
    iri.starts_with(rdf::NAMESPACE)
        || iri.starts_with(rdfs::NAMESPACE)
        || iri.starts_with(owl::NAMESPACE)
        || iri.starts_with(xsd::NAMESPACE)
}

pub fn is_dc_vocabulary_iri(iri: &str) -> bool {
    iri.starts_with(dc::NAMESPACE)
}

/// True for any IRI the engine treats as reserved vocabulary: BASE or DC
/// (spec §3 invariant 6).
pub fn is_reserved_iri(iri: &str) -> bool {
    is_base_vocabulary_iri(iri) || is_dc_vocabulary_iri(iri)
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ reserved class/property membership
// ------------------------------------------------------------------------------------------------

fn reserved_class_iris() -> &'static FxHashSet<String> {
    static CLASSES: LazyLock<FxHashSet<String>> = LazyLock::new(|| {
        owl::ALL_CLASSES
            .iter()
            .map(|name| format!("{}{}", owl::NAMESPACE, name))
            .chain(rdfs::ALL_CLASSES.iter().map(|name| format!("{}{}", rdfs::NAMESPACE, name)))
            .collect()
    });
    &CLASSES
}

fn reserved_property_iris() -> &'static FxHashSet<String> {
    static PROPERTIES: LazyLock<FxHashSet<String>> = LazyLock::new(|| {
        owl::ALL_PROPERTIES
            .iter()
            .map(|name| format!("{}{}", owl::NAMESPACE, name))
            .chain(rdfs::ALL_PROPERTIES.iter().map(|name| format!("{}{}", rdfs::NAMESPACE, name)))
            .chain(rdf::ALL_TERMS.iter().map(|name| format!("{}{}", rdf::NAMESPACE, name)))
            .chain(dc::ALL_TERMS.iter().map(|name| format!("{}{}", dc::NAMESPACE, name)))
            .collect()
    });
    &PROPERTIES
}

pub fn is_reserved_class_iri(iri: &str) -> bool {
    reserved_class_iris().contains(iri)
}

pub fn is_reserved_property_iri(iri: &str) -> bool {
    reserved_property_iris().contains(iri)
}

/// Annotation properties that never carry structural (taxonomy) meaning
/// (spec §4.9 step 14; used by the restriction-on-annotation-property
/// diagnostic in step 8).
pub fn is_annotation_property_iri(iri: &str) -> bool {
    rdfs::ANNOTATION_PROPERTIES
        .iter()
        .any(|name| iri == format!("{}{}", rdfs::NAMESPACE, name))
        || owl::ANNOTATION_PROPERTIES
            .iter()
            .any(|name| iri == format!("{}{}", owl::NAMESPACE, name))
        || is_dc_vocabulary_iri(iri)
}

// ------------------------------------------------------------------------------------------------
// Public Functions ❱ expansion / unexpansion
// ------------------------------------------------------------------------------------------------

/// Inject the BASE and DC vocabulary's classes and annotation properties
/// into `ontology`'s containers (spec §4.9 step 1: "expand the ontology
/// with the BASE and DC vocabulary before decoding any triple").
///
/// Idempotent: expanding an already-expanded ontology leaves it
/// unchanged, since class/property registration on a container is itself
/// idempotent by fingerprint.
pub fn expand(ontology: &mut Ontology) {
    expand_class_model(ontology.class_model_mut());
    expand_property_model(ontology.property_model_mut());
}

fn expand_class_model(classes: &mut ClassModel) {
    for (namespace, names) in [(owl::NAMESPACE, owl::ALL_CLASSES), (rdfs::NAMESPACE, rdfs::ALL_CLASSES)] {
        for name in names {
            let iri = format!("{namespace}{name}");
            if !classes.contains(Resource::new_iri(iri.clone()).fingerprint()) {
                classes.register(Class::new(Resource::new_iri(iri), ClassKind::PlainOwl));
            }
        }
    }
}

fn expand_property_model(properties: &mut PropertyModel) {
    for (namespace, names) in [(rdfs::NAMESPACE, rdfs::ANNOTATION_PROPERTIES), (dc::NAMESPACE, dc::ALL_TERMS)] {
        for name in names {
            let iri = format!("{namespace}{name}");
            if !properties.contains(Resource::new_iri(iri.clone()).fingerprint()) {
                properties.register(Property::new(Resource::new_iri(iri), PropertyKind::Annotation));
            }
        }
    }
    for name in owl::ANNOTATION_PROPERTIES {
        let iri = format!("{}{}", owl::NAMESPACE, name);
        if !properties.contains(Resource::new_iri(iri.clone()).fingerprint()) {
            properties.register(Property::new(Resource::new_iri(iri), PropertyKind::Annotation));
        }
    }
}

/// Remove every class/property whose IRI is reserved vocabulary so that
/// user-visible enumerations over `ontology` exclude it (spec §3
/// invariant 6: "user-visible enumerations exclude them").
pub fn unexpand(ontology: &mut Ontology) {
    let reserved_classes: Vec<_> = ontology
        .class_model()
        .iter()
        .filter(|c| c.resource().iri().is_some_and(is_reserved_class_iri))
        .map(|c| c.fingerprint())
        .collect();
    for fp in reserved_classes {
        ontology.class_model_mut().remove(fp);
    }

    let reserved_properties: Vec<_> = ontology
        .property_model()
        .iter()
        .filter(|p| p.resource().iri().is_some_and(is_reserved_property_iri))
        .map(|p| p.fingerprint())
        .collect();
    for fp in reserved_properties {
        ontology.property_model_mut().remove(fp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_owl_and_dc_iris() {
        assert!(is_reserved_class_iri("http://www.w3.org/2002/07/owl#Restriction"));
        assert!(is_reserved_property_iri("http://purl.org/dc/elements/1.1/creator"));
        assert!(!is_reserved_class_iri("http://example.org/Person"));
    }

    #[test]
    fn expand_then_unexpand_restores_empty_model() {
        let mut ontology = Ontology::new::<String>(None);
        expand(&mut ontology);
        assert!(!ontology.class_model().is_empty());
        unexpand(&mut ontology);
        assert!(ontology.class_model().is_empty());
        assert!(ontology.property_model().is_empty());
    }
}
