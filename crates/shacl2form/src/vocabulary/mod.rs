//! Indexed SHACL vocabulary.
//!
//! A [`Vocabulary`] is built once per loaded vocabulary graph. It keeps the raw
//! nodes plus typed [`NodeShape`]s and [`PropertyShape`]s, and indexes them by
//! `@id`, by target class and by property path so lookups never rescan the
//! graph.

pub mod shape;

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::LoadError;
use crate::jsonld::{self, Node};
use crate::model::ontology::{fs, sh, standard};

pub use shape::{NodeShape, PropertyShape};

/// What to do when two node shapes declare the same `sh:targetClass`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapeConflictPolicy {
    /// The shape that appears first in the vocabulary is authoritative.
    #[default]
    FirstWins,
    /// Refuse to load the vocabulary.
    Reject,
}

/// A namespace declared in the vocabulary (`fs:Namespace`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub id: String,
    pub label: String,
    pub prefix: String,
    pub namespace: String,
    pub is_default: bool,
}

#[derive(Debug, Default)]
pub struct Vocabulary {
    nodes: Vec<Node>,
    by_id: HashMap<String, usize>,
    node_shapes: Vec<NodeShape>,
    node_shape_by_class: HashMap<String, usize>,
    property_shapes: Vec<PropertyShape>,
    property_shape_by_id: HashMap<String, usize>,
    named_property_shape_by_path: HashMap<String, usize>,
}

impl Vocabulary {
    /// Index a vocabulary graph. Conflicting target classes resolve to the
    /// first shape.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self::with_policy(nodes, ShapeConflictPolicy::FirstWins).unwrap_or_default()
    }

    /// Index a vocabulary graph using the given conflict policy.
    pub fn with_policy(nodes: Vec<Node>, policy: ShapeConflictPolicy) -> Result<Self, LoadError> {
        let mut vocabulary = Self::default();
        for node in nodes {
            vocabulary.insert(node, policy)?;
        }
        Ok(vocabulary)
    }

    fn insert(&mut self, node: Node, policy: ShapeConflictPolicy) -> Result<(), LoadError> {
        let position = self.nodes.len();
        let id = jsonld::node_id(&node).map(str::to_string);

        if let Some(shape) = NodeShape::from_node(&node) {
            let shape_index = self.node_shapes.len();
            match self.node_shape_by_class.get(&shape.target_class) {
                Some(&existing) => {
                    let first = self.node_shapes[existing].id.clone().unwrap_or_default();
                    let second = shape.id.clone().unwrap_or_default();
                    if policy == ShapeConflictPolicy::Reject {
                        return Err(LoadError::AmbiguousTargetClass {
                            target_class: shape.target_class,
                            first,
                            second,
                        });
                    }
                    tracing::warn!(
                        target_class = %shape.target_class,
                        kept = %first,
                        ignored = %second,
                        "Multiple shapes target the same class; keeping the first"
                    );
                }
                None => {
                    self.node_shape_by_class
                        .insert(shape.target_class.clone(), shape_index);
                }
            }
            self.node_shapes.push(shape);
        }

        if let Some(shape) = PropertyShape::from_node(&node) {
            let shape_index = self.property_shapes.len();
            if let Some(id) = &shape.id {
                self.property_shape_by_id
                    .entry(id.clone())
                    .or_insert(shape_index);
            }
            // Unnamed shapes (e.g. blank nodes only adding a minCount) share a
            // path with the real shape and must not shadow it.
            if shape.name.is_some() {
                self.named_property_shape_by_path
                    .entry(shape.path.clone())
                    .or_insert(shape_index);
            }
            self.property_shapes.push(shape);
        }

        if let Some(id) = id {
            self.by_id.entry(id).or_insert(position);
        }
        self.nodes.push(node);
        Ok(())
    }

    /// The raw vocabulary nodes, in load order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.by_id.get(id).map(|&i| &self.nodes[i])
    }

    /// The authoritative node shape for a class.
    pub fn shape_for_type(&self, class: &str) -> Option<&NodeShape> {
        self.node_shape_by_class
            .get(class)
            .map(|&i| &self.node_shapes[i])
    }

    /// The named property shape for a predicate.
    pub fn shape_for_property(&self, path: &str) -> Option<&PropertyShape> {
        self.named_property_shape_by_path
            .get(path)
            .map(|&i| &self.property_shapes[i])
    }

    /// `sh:name` of the predicate's shape, or the predicate IRI itself.
    pub fn label_for_predicate(&self, path: &str) -> String {
        self.shape_for_property(path)
            .and_then(|shape| shape.name.clone())
            .unwrap_or_else(|| path.to_string())
    }

    /// `sh:name` of the class's shape, or the class IRI itself.
    pub fn label_for_type(&self, class: &str) -> String {
        self.shape_for_type(class)
            .and_then(|shape| shape.name.clone())
            .unwrap_or_else(|| class.to_string())
    }

    /// Indices of the shapes referenced through `sh:property`, in vocabulary order.
    fn property_shape_indices(&self, shape: &NodeShape) -> Vec<usize> {
        let mut indices: Vec<usize> = shape
            .property_refs
            .iter()
            .filter_map(|id| self.property_shape_by_id.get(id).copied())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Property shapes declared by a node shape, in vocabulary order.
    pub fn property_shapes_for_node_shape(&self, shape: &NodeShape) -> Vec<&PropertyShape> {
        self.property_shape_indices(shape)
            .into_iter()
            .map(|i| &self.property_shapes[i])
            .collect()
    }

    /// Property shapes of the class's shape. Unknown classes have none.
    pub fn property_shapes_for_type(&self, class: &str) -> Vec<&PropertyShape> {
        self.shape_for_type(class)
            .map(|shape| self.property_shapes_for_node_shape(shape))
            .unwrap_or_default()
    }

    /// Union of the property shapes of all given classes, without duplicates.
    ///
    /// Superclasses are not consulted: pass every applicable class.
    pub fn property_shapes_for_types<S: AsRef<str>>(&self, classes: &[S]) -> Vec<&PropertyShape> {
        let mut seen = HashSet::new();
        let mut shapes = Vec::new();
        for class in classes {
            let Some(shape) = self.shape_for_type(class.as_ref()) else {
                continue;
            };
            for i in self.property_shape_indices(shape) {
                if seen.insert(i) {
                    shapes.push(&self.property_shapes[i]);
                }
            }
        }
        shapes
    }

    /// Shapes of classes users can browse and create in the catalog.
    pub fn classes_in_catalog(&self) -> Vec<&NodeShape> {
        self.node_shapes
            .iter()
            .filter(|s| s.show_in_catalog)
            .collect()
    }

    pub fn is_catalog_class(&self, class: &str) -> bool {
        self.classes_in_catalog()
            .iter()
            .any(|s| s.target_class == class)
    }

    /// Classes declaring `rdfs:subClassOf class` directly.
    pub fn child_subclasses(&self, class: &str) -> Vec<&str> {
        let mut children = Vec::new();
        for node in &self.nodes {
            if !jsonld::ids(node, standard::RDFS_SUBCLASS_OF).contains(&class) {
                continue;
            }
            let child = jsonld::first_id(node, sh::TARGET_CLASS).or_else(|| jsonld::node_id(node));
            if let Some(child) = child {
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        }
        children
    }

    /// All direct and indirect subclasses of a class, breadth first.
    pub fn descendants(&self, class: &str) -> Vec<&str> {
        let mut result: Vec<&str> = Vec::new();
        let mut queue = vec![class];
        while let Some(current) = queue.pop() {
            for child in self.child_subclasses(current) {
                if child != class && !result.contains(&child) {
                    result.push(child);
                    queue.insert(0, child);
                }
            }
        }
        result
    }

    /// All namespaces declared in the vocabulary.
    pub fn namespaces(&self) -> Vec<Namespace> {
        self.namespaces_matching(|_| true)
    }

    /// Namespaces whose vocabulary node satisfies `filter`.
    pub fn namespaces_matching<F>(&self, filter: F) -> Vec<Namespace>
    where
        F: Fn(&Node) -> bool,
    {
        self.nodes
            .iter()
            .filter(|node| {
                jsonld::node_types(node).is_some_and(|types| types.contains(&fs::NAMESPACE))
            })
            .filter(|node| filter(*node))
            .map(|node| Namespace {
                id: jsonld::node_id(node).unwrap_or_default().to_string(),
                label: jsonld::first_str(node, sh::NAME)
                    .or_else(|| jsonld::first_str(node, standard::RDFS_LABEL))
                    .unwrap_or_default()
                    .to_string(),
                prefix: jsonld::first_str(node, fs::NAMESPACE_PREFIX)
                    .unwrap_or_default()
                    .to_string(),
                namespace: jsonld::first_str(node, fs::NAMESPACE_URI)
                    .unwrap_or_default()
                    .to_string(),
                is_default: jsonld::first_bool(node, fs::USED_BY_DEFAULT).unwrap_or(false),
            })
            .collect()
    }
}
