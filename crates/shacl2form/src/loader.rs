//! Load expanded JSON-LD graphs from disk.

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::jsonld::Node;
use crate::model::ontology::jsonld;
use crate::vocabulary::{ShapeConflictPolicy, Vocabulary};

/// Load an expanded JSON-LD document and return its nodes.
pub fn load_json(path: &Path) -> Result<Vec<Node>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;
    parse_graph(document)
}

/// Extract the node list from an expanded JSON-LD document.
///
/// Accepts a top-level array of nodes, an object holding `@graph`, or a
/// single node object. Array entries that are not objects are rejected.
pub fn parse_graph(document: Value) -> Result<Vec<Node>, LoadError> {
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove(jsonld::GRAPH) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(LoadError::NotAGraph(format!(
                    "@graph must be an array, found {}",
                    kind(&other)
                )))
            }
            None => vec![Value::Object(object)],
        },
        other => {
            return Err(LoadError::NotAGraph(format!(
                "expected an array or object, found {}",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(node) => Ok(node),
            other => Err(LoadError::NotAGraph(format!(
                "graph entry {i} is {}, not a node object",
                kind(&other)
            ))),
        })
        .collect()
}

/// Load and index a vocabulary file.
pub fn load_vocabulary(path: &Path, policy: ShapeConflictPolicy) -> Result<Vocabulary, LoadError> {
    let nodes = load_json(path)?;
    tracing::debug!(path = %path.display(), nodes = nodes.len(), "Loaded vocabulary graph");
    Vocabulary::with_policy(nodes, policy)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
