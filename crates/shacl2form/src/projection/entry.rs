//! Output records of the projection: one [`PropertyEntry`] per form field.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

/// A single value of a property.
///
/// Resource references carry `id`, literals carry `value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ValueEntry {
    pub fn resource(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// The literal as text, for sorting and length checks.
    pub fn value_text(&self) -> Option<String> {
        match self.value.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// One editable property of a subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEntry {
    /// Predicate IRI, or `@type` for the synthetic type entry.
    pub key: String,
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub values: Vec<ValueEntry>,
    pub allow_multiple: bool,
    pub machine_only: bool,
    pub multi_line: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,
    pub is_rdf_list: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    pub is_generic_iri_resource: bool,
    pub is_external_link: bool,
    pub allow_addition_of_entities: bool,
}

/// Case-insensitive comparison where a missing key sorts first.
pub(crate) fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Order values by label, then id, then literal value.
pub(crate) fn compare_values(a: &ValueEntry, b: &ValueEntry) -> Ordering {
    compare_text(a.label.as_deref(), b.label.as_deref())
        .then_with(|| compare_text(a.id.as_deref(), b.id.as_deref()))
        .then_with(|| compare_text(a.value_text().as_deref(), b.value_text().as_deref()))
}

pub(crate) fn sort_by_label(entries: &mut [PropertyEntry]) {
    entries.sort_by(|a, b| compare_text(a.label.as_deref(), b.label.as_deref()));
}
