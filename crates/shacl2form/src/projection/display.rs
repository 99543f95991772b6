//! Which projected properties a metadata form shows, and how it titles the entity.

use super::entry::PropertyEntry;
use crate::model::ontology::{fs, jsonld, standard};

/// Whether a property is kept out of the form for an entity of type `domain`.
///
/// Type information and bookkeeping predicates are always hidden. Managed
/// resources (collections, files, directories) take their label from the
/// file system, and a collection's description is edited elsewhere.
pub fn should_property_be_hidden(key: &str, domain: Option<&str>) -> bool {
    let is_collection = domain == Some(fs::COLLECTION);
    let is_managed = is_collection || domain == Some(fs::FILE) || domain == Some(fs::DIRECTORY);

    match key {
        jsonld::TYPE | standard::RDF_TYPE | fs::FILE_PATH | fs::DATE_DELETED | fs::DELETED_BY => {
            true
        }
        standard::RDFS_LABEL => is_managed,
        standard::RDFS_COMMENT => is_collection,
        _ => false,
    }
}

/// The entity type: first value of the `@type` entry.
fn domain(properties: &[PropertyEntry]) -> Option<&str> {
    properties
        .iter()
        .find(|p| p.key == jsonld::TYPE)
        .and_then(|p| p.values.first())
        .and_then(|v| v.id.as_deref())
}

/// The properties a form should render.
pub fn properties_to_show(properties: &[PropertyEntry]) -> Vec<&PropertyEntry> {
    let domain = domain(properties);
    properties
        .iter()
        .filter(|p| !should_property_be_hidden(&p.key, domain))
        .collect()
}

/// "label - comment" of the entity's first type, or whichever of the two exists.
pub fn type_info(properties: &[PropertyEntry]) -> Option<String> {
    let value = properties
        .iter()
        .find(|p| p.key == jsonld::TYPE)?
        .values
        .first()?;

    match (value.label.as_deref(), value.comment.as_deref()) {
        (Some(label), Some(comment)) => Some(format!("{label} - {comment}")),
        (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
        (None, None) => None,
    }
}
