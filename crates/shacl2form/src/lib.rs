//! Projection of SHACL vocabularies and expanded JSON-LD metadata into the
//! flat, validated property lists that metadata forms render.
//!
//! ```no_run
//! use std::path::Path;
//! use shacl2form::loader::{load_json, load_vocabulary};
//! use shacl2form::projection::{ProjectionOptions, Projector};
//! use shacl2form::vocabulary::ShapeConflictPolicy;
//!
//! let vocabulary = load_vocabulary(Path::new("vocabulary.json"), ShapeConflictPolicy::FirstWins)?;
//! let metadata = load_json(Path::new("metadata.json"))?;
//! let projector = Projector::new(&vocabulary, ProjectionOptions::default());
//! let properties = projector.project(&metadata, Some("http://localhost/iri/d1"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod emitter;
pub mod error;
pub mod jsonld;
pub mod loader;
pub mod model;
pub mod projection;
pub mod vocabulary;

pub use error::{LoadError, ProjectionError, ValidationError};
pub use projection::validate::validate_property_values;
pub use projection::{ProjectionOptions, Projector, PropertyEntry, ValueEntry};
pub use vocabulary::{ShapeConflictPolicy, Vocabulary};
