pub mod iri;
pub mod ontology;
