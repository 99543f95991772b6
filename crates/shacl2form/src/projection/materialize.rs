use super::entry::{sort_by_label, PropertyEntry, ValueEntry};
use super::Projector;
use crate::jsonld::Node;
use crate::model::ontology::{jsonld as kw, standard};
use crate::vocabulary::PropertyShape;

/// `sh:maxCount` assumed when a shape declares none.
const DEFAULT_MAX_COUNT: u64 = 1000;

/// `sh:maxLength` assumed when a shape declares none.
const DEFAULT_MAX_LENGTH: u64 = 1000;

/// Longest string still edited in a single-line field.
const SINGLE_LINE_MAX_LENGTH: u64 = 255;

impl<'a> Projector<'a> {
    /// Build the entry for `predicate` with the given values.
    pub fn property_entry(
        &self,
        predicate: &str,
        values: Vec<ValueEntry>,
        shape: &PropertyShape,
    ) -> PropertyEntry {
        let is_string = shape.datatype.as_deref() == Some(standard::XSD_STRING);
        let multi_line = match shape.single_line {
            Some(single_line) => !single_line,
            None => {
                is_string && shape.max_length.unwrap_or(DEFAULT_MAX_LENGTH) > SINGLE_LINE_MAX_LENGTH
            }
        };
        let allow_addition_of_entities = shape
            .class
            .as_deref()
            .is_some_and(|class| self.vocabulary.is_catalog_class(class));

        PropertyEntry {
            key: predicate.to_string(),
            label: shape.name.clone(),
            description: shape.description.clone(),
            path: Some(shape.path.clone()),
            datatype: shape.datatype.clone(),
            class_name: shape.class.clone(),
            values,
            allow_multiple: shape.max_count.unwrap_or(DEFAULT_MAX_COUNT) > 1,
            machine_only: shape.machine_only,
            multi_line,
            allowed_values: shape.allowed_values.clone(),
            is_rdf_list: shape.is_rdf_list(),
            min_values_count: shape.min_count,
            max_values_count: shape.values_max_count(),
            max_length: shape.max_length,
            is_generic_iri_resource: shape.is_generic_iri_resource(),
            is_external_link: shape.external_link,
            allow_addition_of_entities,
        }
    }

    /// Entries without values for every shape the subject has no predicate for.
    pub fn add_empty_properties(
        &self,
        metadata: &Node,
        shapes: &[&PropertyShape],
    ) -> Vec<PropertyEntry> {
        let mut properties: Vec<PropertyEntry> = shapes
            .iter()
            .filter(|shape| !metadata.contains_key(&shape.path))
            .map(|shape| self.property_entry(&shape.path, Vec::new(), shape))
            .collect();
        sort_by_label(&mut properties);
        properties
    }

    /// The read-only `@type` entry listing the subject's types.
    pub fn generate_type_property<S: AsRef<str>>(&self, types: &[S]) -> PropertyEntry {
        let values = types
            .iter()
            .map(|class| {
                let class = class.as_ref();
                let shape = self.vocabulary.shape_for_type(class);
                ValueEntry {
                    id: Some(class.to_string()),
                    value: None,
                    label: Some(
                        shape
                            .and_then(|s| s.name.clone())
                            .unwrap_or_else(|| class.to_string()),
                    ),
                    comment: Some(
                        shape
                            .and_then(|s| s.description.clone())
                            .unwrap_or_else(|| class.to_string()),
                    ),
                }
            })
            .collect();

        PropertyEntry {
            key: kw::TYPE.to_string(),
            label: Some("Type".to_string()),
            values,
            allow_multiple: false,
            machine_only: true,
            ..PropertyEntry::default()
        }
    }
}
