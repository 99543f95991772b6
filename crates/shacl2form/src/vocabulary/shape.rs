//! Typed views over SHACL node and property shapes.

use serde_json::Value;

use crate::jsonld::{self, Node};
use crate::model::ontology::{dash, fs, sh, standard};

/// A SHACL node shape that targets a class.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    pub id: Option<String>,
    pub target_class: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `@id`s of the property shapes declared through `sh:property`.
    pub property_refs: Vec<String>,
    pub sub_class_of: Vec<String>,
    pub show_in_catalog: bool,
}

impl NodeShape {
    /// Read a node shape. Returns `None` for nodes without `sh:targetClass`.
    pub fn from_node(node: &Node) -> Option<Self> {
        let target_class = jsonld::first_id(node, sh::TARGET_CLASS)?;
        Some(Self {
            id: jsonld::node_id(node).map(str::to_string),
            target_class: target_class.to_string(),
            name: jsonld::first_str(node, sh::NAME).map(str::to_string),
            description: jsonld::first_str(node, sh::DESCRIPTION).map(str::to_string),
            property_refs: jsonld::ids(node, sh::PROPERTY)
                .into_iter()
                .map(str::to_string)
                .collect(),
            sub_class_of: jsonld::ids(node, standard::RDFS_SUBCLASS_OF)
                .into_iter()
                .map(str::to_string)
                .collect(),
            show_in_catalog: jsonld::first_bool(node, fs::SHOW_IN_CATALOG).unwrap_or(false),
        })
    }
}

/// A SHACL property shape describing one predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyShape {
    pub id: Option<String>,
    pub path: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub datatype: Option<String>,
    pub class: Option<String>,
    pub min_count: Option<u64>,
    pub max_count: Option<u64>,
    pub max_length: Option<u64>,
    pub node_kind: Option<String>,
    pub node: Option<String>,
    /// Value nodes of the `sh:in` list, as they appear in the vocabulary.
    pub allowed_values: Option<Vec<Value>>,
    pub machine_only: bool,
    pub single_line: Option<bool>,
    pub external_link: bool,
}

impl PropertyShape {
    /// Read a property shape. Returns `None` for nodes without `sh:path`.
    pub fn from_node(node: &Node) -> Option<Self> {
        let path = jsonld::first_id(node, sh::PATH)?;
        Some(Self {
            id: jsonld::node_id(node).map(str::to_string),
            path: path.to_string(),
            name: jsonld::first_str(node, sh::NAME).map(str::to_string),
            description: jsonld::first_str(node, sh::DESCRIPTION).map(str::to_string),
            datatype: jsonld::first_id(node, sh::DATATYPE).map(str::to_string),
            class: jsonld::first_id(node, sh::CLASS).map(str::to_string),
            min_count: jsonld::first_u64(node, sh::MIN_COUNT),
            max_count: jsonld::first_u64(node, sh::MAX_COUNT),
            max_length: jsonld::first_u64(node, sh::MAX_LENGTH),
            node_kind: jsonld::first_id(node, sh::NODE_KIND).map(str::to_string),
            node: jsonld::first_id(node, sh::NODE).map(str::to_string),
            allowed_values: jsonld::first_list(node, sh::IN).cloned(),
            machine_only: jsonld::first_bool(node, fs::MACHINE_ONLY).unwrap_or(false),
            single_line: jsonld::first_bool(node, dash::SINGLE_LINE),
            external_link: jsonld::first_bool(node, fs::EXTERNAL_LINK).unwrap_or(false),
        })
    }

    /// Values of this property form an ordered RDF list (`sh:node dash:ListShape`).
    pub fn is_rdf_list(&self) -> bool {
        self.node.as_deref() == Some(dash::LIST_SHAPE)
    }

    /// Values may be any IRI resource (`sh:nodeKind sh:IRI`).
    pub fn is_generic_iri_resource(&self) -> bool {
        self.node_kind.as_deref() == Some(sh::IRI)
    }

    /// The `sh:maxCount` to enforce on values.
    ///
    /// RDF lists usually declare `maxCount 1` (a single list), but each list
    /// element is edited as a separate value, so no limit applies to them.
    pub fn values_max_count(&self) -> Option<u64> {
        if self.is_rdf_list() {
            None
        } else {
            self.max_count
        }
    }
}
