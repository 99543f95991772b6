//! Error types for loading graphs, projecting metadata and validating values.

use thiserror::Error;

/// Errors that can occur while loading a JSON-LD graph or indexing a vocabulary.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is neither an array of nodes, an object with `@graph`,
    /// nor a single node object.
    #[error("not an expanded JSON-LD graph: {0}")]
    NotAGraph(String),

    /// Two node shapes claim the same `sh:targetClass` and the vocabulary
    /// was loaded with [`ShapeConflictPolicy::Reject`](crate::vocabulary::ShapeConflictPolicy::Reject).
    #[error("target class {target_class} is claimed by both {first} and {second}")]
    AmbiguousTargetClass {
        target_class: String,
        first: String,
        second: String,
    },
}

/// Errors produced by the full projection pipeline.
///
/// These separate malformed input from a subject that legitimately has no
/// editable properties, which is an `Ok` with an empty (or type-only) list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// No subject was named and the metadata graph does not hold exactly one node.
    #[error("cannot project metadata for {node_count} subjects at a time; name the subject")]
    AmbiguousSubject { node_count: usize },

    #[error("the given subject {0} is unknown")]
    UnknownSubject(String),

    /// The subject has no `@type`, or `@type` is not an array (metadata not expanded).
    #[error("subject {0} has no @type or is not in expanded form")]
    MissingType(String),
}

/// A failed value constraint on a single property.
///
/// The `Display` form is the message shown next to the form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You have passed the maximum length of {max_length}")]
    MaxLengthExceeded { max_length: u64, actual: usize },

    #[error("You need a minimum number of values of {min_count}")]
    MinCountNotMet { min_count: u64, actual: usize },
}
