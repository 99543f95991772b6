//! Projection engine: combines a vocabulary with the expanded metadata of one
//! subject into the list of properties a metadata form renders.
//!
//! The [`Projector`] runs three stages:
//! 1. resolve the property shapes of the subject's types
//!    ([`Projector::resolve_property_shapes`]),
//! 2. merge the subject's predicates with those shapes
//!    ([`Projector::merge_metadata_with_shapes`]),
//! 3. add empty entries for unset shapes and the synthetic `@type` entry
//!    ([`Projector::add_empty_properties`], [`Projector::generate_type_property`]).
//!
//! Every stage is a pure function of its inputs.

pub mod display;
pub mod entry;
mod materialize;
mod merge;
pub mod patch;
pub mod validate;

use crate::error::ProjectionError;
use crate::jsonld::{self, Node};
use crate::model::iri::IriMinter;
use crate::vocabulary::{PropertyShape, Vocabulary};

pub use entry::{PropertyEntry, ValueEntry};

// ---------------------------------------------------------------------------
// ProjectionOptions
// ---------------------------------------------------------------------------

/// Options controlling how values are labelled.
#[derive(Debug, Clone)]
pub struct ProjectionOptions {
    /// Host of the workspace; IRIs on this host get short local labels.
    pub workspace_host: String,
    /// Label external IRIs by their local name instead of the full IRI.
    pub shorten_external_iris: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            workspace_host: "localhost".to_string(),
            shorten_external_iris: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Projector
// ---------------------------------------------------------------------------

/// Projects expanded JSON-LD metadata through a [`Vocabulary`].
pub struct Projector<'a> {
    vocabulary: &'a Vocabulary,
    iris: IriMinter,
    options: ProjectionOptions,
}

impl<'a> Projector<'a> {
    pub fn new(vocabulary: &'a Vocabulary, options: ProjectionOptions) -> Self {
        let iris = IriMinter::new(&options.workspace_host);
        Self {
            vocabulary,
            iris,
            options,
        }
    }

    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    pub fn iris(&self) -> &IriMinter {
        &self.iris
    }

    /// Property shapes that apply to an entity with the given types.
    pub fn resolve_property_shapes<S: AsRef<str>>(&self, types: &[S]) -> Vec<&'a PropertyShape> {
        self.vocabulary.property_shapes_for_types(types)
    }

    /// Run the full pipeline for one subject of `graph`.
    ///
    /// Without `subject` the graph must describe exactly one node. The
    /// result lists populated properties, then empty ones, then the `@type`
    /// entry. Nodes elsewhere in `graph` are used to label referenced
    /// resources.
    pub fn project(
        &self,
        graph: &[Node],
        subject: Option<&str>,
    ) -> Result<Vec<PropertyEntry>, ProjectionError> {
        let metadata = match subject {
            Some(subject) => jsonld::find_node(graph, subject).ok_or_else(|| {
                tracing::warn!(subject, "The given subject is unknown");
                ProjectionError::UnknownSubject(subject.to_string())
            })?,
            None => match graph {
                [single] => single,
                _ => {
                    tracing::warn!(
                        node_count = graph.len(),
                        "Can not combine metadata for multiple subjects at a time"
                    );
                    return Err(ProjectionError::AmbiguousSubject {
                        node_count: graph.len(),
                    });
                }
            },
        };

        let subject_iri = jsonld::node_id(metadata).unwrap_or_default();
        let types = jsonld::node_types(metadata).ok_or_else(|| {
            tracing::warn!(
                subject = subject_iri,
                "Can not combine metadata without a type or that is not expanded"
            );
            ProjectionError::MissingType(subject_iri.to_string())
        })?;

        let shapes = self.resolve_property_shapes(&types);
        let mut properties = self.merge_metadata_with_shapes(metadata, &shapes, graph);
        properties.extend(self.add_empty_properties(metadata, &shapes));
        properties.push(self.generate_type_property(&types));

        tracing::debug!(
            subject = subject_iri,
            shapes = shapes.len(),
            properties = properties.len(),
            "Projected metadata"
        );
        Ok(properties)
    }
}
