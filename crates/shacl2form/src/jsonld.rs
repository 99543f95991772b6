//! Accessors over expanded JSON-LD node objects.
//!
//! In expanded form every predicate maps to an array of value nodes, each of
//! which is `{"@id": ...}`, `{"@value": ...}` or `{"@list": [...]}`. Most
//! vocabulary lookups only care about the first value of a predicate.

use serde_json::{Map, Value};

use crate::model::iri::IriMinter;
use crate::model::ontology::{jsonld, sh, standard};

/// One expanded JSON-LD node object.
pub type Node = Map<String, Value>;

/// The `@id` of a node.
pub fn node_id(node: &Node) -> Option<&str> {
    node.get(jsonld::ID).and_then(Value::as_str)
}

/// The `@type` IRIs of a node, or `None` when `@type` is absent or not an
/// array (i.e. the node is not in expanded form).
pub fn node_types(node: &Node) -> Option<Vec<&str>> {
    node.get(jsonld::TYPE)
        .and_then(Value::as_array)
        .map(|types| types.iter().filter_map(Value::as_str).collect())
}

/// The `key` property (`@id`, `@value`, `@list`) of the first value of `predicate`.
pub fn first_property<'a>(node: &'a Node, predicate: &str, key: &str) -> Option<&'a Value> {
    node.get(predicate)?
        .as_array()?
        .first()?
        .as_object()?
        .get(key)
}

pub fn first_id<'a>(node: &'a Node, predicate: &str) -> Option<&'a str> {
    first_property(node, predicate, jsonld::ID).and_then(Value::as_str)
}

pub fn first_value<'a>(node: &'a Node, predicate: &str) -> Option<&'a Value> {
    first_property(node, predicate, jsonld::VALUE)
}

/// First `@value` of `predicate` as a non-empty string.
pub fn first_str<'a>(node: &'a Node, predicate: &str) -> Option<&'a str> {
    first_value(node, predicate)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// First `@value` of `predicate` as an unsigned count.
///
/// Accepts JSON numbers as well as numeric strings (`{"@value": "10",
/// "@type": "xsd:integer"}`).
pub fn first_u64(node: &Node, predicate: &str) -> Option<u64> {
    match first_value(node, predicate)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First `@value` of `predicate` as a boolean. Accepts `true` and `"true"`.
pub fn first_bool(node: &Node, predicate: &str) -> Option<bool> {
    match first_value(node, predicate)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => Some(s.eq_ignore_ascii_case("true")),
        _ => None,
    }
}

pub fn first_list<'a>(node: &'a Node, predicate: &str) -> Option<&'a Vec<Value>> {
    first_property(node, predicate, jsonld::LIST).and_then(Value::as_array)
}

/// All `@id` references of `predicate`, in document order.
pub fn ids<'a>(node: &'a Node, predicate: &str) -> Vec<&'a str> {
    node.get(predicate)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.get(jsonld::ID).and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Find the node with the given `@id` in a graph.
pub fn find_node<'a>(graph: &'a [Node], id: &str) -> Option<&'a Node> {
    graph.iter().find(|node| node_id(node) == Some(id))
}

/// Display label for a node: `rdfs:label`, then `sh:name`, then a label
/// derived from its `@id`.
pub fn label(node: &Node, iris: &IriMinter, shorten_external: bool) -> Option<String> {
    first_str(node, standard::RDFS_LABEL)
        .or_else(|| first_str(node, sh::NAME))
        .map(str::to_string)
        .or_else(|| node_id(node).map(|id| iris.link_label(id, shorten_external)))
}
