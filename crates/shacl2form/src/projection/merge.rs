use serde_json::Value;

use super::entry::{compare_values, sort_by_label, PropertyEntry, ValueEntry};
use super::Projector;
use crate::jsonld::{self, Node};
use crate::model::ontology::jsonld as kw;
use crate::vocabulary::PropertyShape;

impl<'a> Projector<'a> {
    /// Convert the predicates of one subject into property entries.
    ///
    /// Predicates without a matching shape are left out. RDF list values keep
    /// their order; other values are sorted by label, id and value. Entries
    /// are sorted by label. A subject without an expanded `@type` yields no
    /// entries.
    pub fn merge_metadata_with_shapes(
        &self,
        metadata: &Node,
        shapes: &[&PropertyShape],
        graph: &[Node],
    ) -> Vec<PropertyEntry> {
        if jsonld::node_types(metadata).is_none() {
            tracing::warn!(
                subject = jsonld::node_id(metadata).unwrap_or_default(),
                "Can not combine metadata without a type or that is not expanded"
            );
            return Vec::new();
        }

        let mut properties = Vec::new();
        for (predicate, raw_values) in metadata {
            let Some(shape) = shapes.iter().find(|shape| shape.path == *predicate) else {
                continue;
            };
            let Some(raw_values) = raw_values.as_array() else {
                tracing::warn!(predicate = %predicate, "Metadata should be provided in expanded form");
                continue;
            };

            let values = if shape.is_rdf_list() {
                // Each @list container is spliced in place, in document order.
                let mut values = Vec::new();
                for raw in raw_values {
                    match raw.get(kw::LIST).and_then(Value::as_array) {
                        Some(list) => {
                            values.extend(list.iter().map(|item| self.value_entry(item, graph)))
                        }
                        None => values.push(self.value_entry(raw, graph)),
                    }
                }
                values
            } else {
                let mut values: Vec<ValueEntry> = raw_values
                    .iter()
                    .map(|raw| self.value_entry(raw, graph))
                    .collect();
                values.sort_by(compare_values);
                values
            };

            properties.push(self.property_entry(predicate, values, shape));
        }

        sort_by_label(&mut properties);
        properties
    }

    /// Normalize one JSON-LD value node. Referenced resources are labelled
    /// from their node in `graph`, if present.
    pub(crate) fn value_entry(&self, raw: &Value, graph: &[Node]) -> ValueEntry {
        let id = raw.get(kw::ID).and_then(Value::as_str);
        let label = id
            .and_then(|id| jsonld::find_node(graph, id))
            .and_then(|node| jsonld::label(node, &self.iris, self.options.shorten_external_iris));

        ValueEntry {
            id: id.map(str::to_string),
            value: raw.get(kw::VALUE).cloned(),
            label,
            comment: None,
        }
    }
}
