//! RDF vocabulary constants used by the projection engine.
//!
//! - `sh:` prefix (http://www.w3.org/ns/shacl#) -- SHACL shapes
//! - `dash:` prefix (http://datashapes.org/dash#) -- DASH extensions (lists, editor hints)
//! - `fs:` prefix (http://fairspace.io/ontology#) -- workspace-specific markers

/// JSON-LD keywords
pub mod jsonld {
    pub const ID: &str = "@id";
    pub const TYPE: &str = "@type";
    pub const VALUE: &str = "@value";
    pub const LIST: &str = "@list";
    pub const GRAPH: &str = "@graph";
}

/// Standard RDF/RDFS/XSD namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// SHACL (`sh:` prefix)
pub mod sh {
    pub const PREFIX: &str = "sh";
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    // Node shapes
    pub const TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";

    // Property shapes
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";
    pub const NAME: &str = "http://www.w3.org/ns/shacl#name";
    pub const DESCRIPTION: &str = "http://www.w3.org/ns/shacl#description";
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
    pub const CLASS: &str = "http://www.w3.org/ns/shacl#class";
    pub const NODE: &str = "http://www.w3.org/ns/shacl#node";
    pub const NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";
    pub const IN: &str = "http://www.w3.org/ns/shacl#in";

    // Constraints
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";
    pub const MAX_LENGTH: &str = "http://www.w3.org/ns/shacl#maxLength";

    // Node kinds
    pub const IRI: &str = "http://www.w3.org/ns/shacl#IRI";
}

/// DASH extensions (`dash:` prefix)
pub mod dash {
    pub const PREFIX: &str = "dash";
    pub const NS: &str = "http://datashapes.org/dash#";

    /// Sentinel `sh:node` value marking a property whose values form an RDF list.
    pub const LIST_SHAPE: &str = "http://datashapes.org/dash#ListShape";
    pub const SINGLE_LINE: &str = "http://datashapes.org/dash#singleLine";
}

/// Workspace ontology (`fs:` prefix)
pub mod fs {
    pub const PREFIX: &str = "fs";
    pub const NS: &str = "http://fairspace.io/ontology#";

    // Classes
    pub const COLLECTION: &str = "http://fairspace.io/ontology#Collection";
    pub const DIRECTORY: &str = "http://fairspace.io/ontology#Directory";
    pub const FILE: &str = "http://fairspace.io/ontology#File";
    pub const NAMESPACE: &str = "http://fairspace.io/ontology#Namespace";

    // Shape markers
    pub const MACHINE_ONLY: &str = "http://fairspace.io/ontology#machineOnly";
    pub const SHOW_IN_CATALOG: &str = "http://fairspace.io/ontology#showInCatalog";
    pub const EXTERNAL_LINK: &str = "http://fairspace.io/ontology#externalLink";

    // Namespace properties
    pub const NAMESPACE_PREFIX: &str = "http://fairspace.io/ontology#namespacePrefix";
    pub const NAMESPACE_URI: &str = "http://fairspace.io/ontology#namespaceUri";
    pub const USED_BY_DEFAULT: &str = "http://fairspace.io/ontology#usedByDefault";

    // Managed-resource predicates
    pub const FILE_PATH: &str = "http://fairspace.io/ontology#filePath";
    pub const DATE_DELETED: &str = "http://fairspace.io/ontology#dateDeleted";
    pub const DELETED_BY: &str = "http://fairspace.io/ontology#deletedBy";

    /// Placeholder object sent when every value of a predicate is removed.
    pub const NIL: &str = "http://fairspace.io/ontology#nil";
}
