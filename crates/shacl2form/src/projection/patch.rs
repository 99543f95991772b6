//! Turning edited values back into expanded JSON-LD.

use serde_json::{Map, Value};

use super::entry::ValueEntry;
use crate::model::ontology::{fs, jsonld};
use crate::vocabulary::Vocabulary;

/// Build the JSON-LD node that replaces every value of `predicate` on `subject`.
///
/// Removing all values is expressed with the `fs:nil` placeholder. Values of
/// an RDF-list predicate are wrapped in a single `@list` container. Returns
/// `None` when subject or predicate is empty.
pub fn to_json_ld(
    subject: &str,
    predicate: &str,
    values: &[ValueEntry],
    vocabulary: &Vocabulary,
) -> Option<Value> {
    if subject.is_empty() || predicate.is_empty() {
        return None;
    }

    let object = if values.is_empty() {
        single(jsonld::ID, Value::String(fs::NIL.to_string()))
    } else {
        let nodes: Vec<Value> = values.iter().map(value_node).collect();
        let is_list = vocabulary
            .shape_for_property(predicate)
            .is_some_and(|shape| shape.is_rdf_list());
        if is_list {
            single(jsonld::LIST, Value::Array(nodes))
        } else {
            Value::Array(nodes)
        }
    };

    let mut node = Map::new();
    node.insert(jsonld::ID.to_string(), Value::String(subject.to_string()));
    node.insert(predicate.to_string(), object);
    Some(Value::Object(node))
}

fn single(key: &str, value: Value) -> Value {
    let mut object = Map::new();
    object.insert(key.to_string(), value);
    Value::Object(object)
}

fn value_node(value: &ValueEntry) -> Value {
    let mut node = Map::new();
    if let Some(id) = &value.id {
        node.insert(jsonld::ID.to_string(), Value::String(id.clone()));
    }
    if let Some(literal) = &value.value {
        node.insert(jsonld::VALUE.to_string(), literal.clone());
    }
    Value::Object(node)
}
