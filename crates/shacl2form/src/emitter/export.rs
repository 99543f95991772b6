//! Writes the projected properties of a subject as triples.

use std::io;

use serde_json::Value;

use super::TriplesEmitter;
use crate::model::ontology::{dash, fs, jsonld, sh, standard};
use crate::projection::{PropertyEntry, ValueEntry};

/// Emit every value of `properties` as a triple about `subject`.
///
/// The `@type` entry becomes `rdf:type` triples. RDF-list properties are
/// written as a single `rdf:first`/`rdf:rest` chain of blank nodes so their
/// order survives. Properties without values produce nothing.
pub fn emit_properties<E: TriplesEmitter>(
    emitter: &mut E,
    subject: &str,
    properties: &[PropertyEntry],
) -> io::Result<()> {
    emitter.add_prefix("rdf", standard::RDF)?;
    emitter.add_prefix("rdfs", standard::RDFS)?;
    emitter.add_prefix("xsd", standard::XSD)?;
    emitter.add_prefix(sh::PREFIX, sh::NS)?;
    emitter.add_prefix(dash::PREFIX, dash::NS)?;
    emitter.add_prefix(fs::PREFIX, fs::NS)?;

    let mut blank_nodes = 0usize;
    for property in properties {
        let predicate = if property.key == jsonld::TYPE {
            standard::RDF_TYPE
        } else {
            property.key.as_str()
        };
        let datatype = property.datatype.as_deref();

        if property.is_rdf_list && !property.values.is_empty() {
            let head = blank_label(blank_nodes);
            emitter.emit_iri(subject, predicate, &head)?;
            let mut current = head;
            for (i, value) in property.values.iter().enumerate() {
                emit_value(emitter, &current, standard::RDF_FIRST, value, datatype)?;
                blank_nodes += 1;
                if i + 1 == property.values.len() {
                    emitter.emit_iri(&current, standard::RDF_REST, standard::RDF_NIL)?;
                } else {
                    let next = blank_label(blank_nodes);
                    emitter.emit_iri(&current, standard::RDF_REST, &next)?;
                    current = next;
                }
            }
            continue;
        }

        for value in &property.values {
            emit_value(emitter, subject, predicate, value, datatype)?;
        }
    }
    Ok(())
}

fn blank_label(n: usize) -> String {
    format!("_:l{n}")
}

fn emit_value<E: TriplesEmitter>(
    emitter: &mut E,
    subject: &str,
    predicate: &str,
    value: &ValueEntry,
    datatype: Option<&str>,
) -> io::Result<()> {
    if let Some(id) = &value.id {
        return emitter.emit_iri(subject, predicate, id);
    }
    match &value.value {
        Some(Value::String(text)) => match datatype {
            Some(dt) if dt != standard::XSD_STRING => {
                emitter.emit_typed_literal(subject, predicate, text, dt)
            }
            _ => emitter.emit_literal(subject, predicate, text),
        },
        Some(Value::Bool(flag)) => emitter.emit_typed_literal(
            subject,
            predicate,
            if *flag { "true" } else { "false" },
            standard::XSD_BOOLEAN,
        ),
        Some(Value::Number(n)) => {
            let fallback = if n.is_f64() {
                standard::XSD_DOUBLE
            } else {
                standard::XSD_INTEGER
            };
            let dt = datatype
                .filter(|d| *d != standard::XSD_STRING)
                .unwrap_or(fallback);
            emitter.emit_typed_literal(subject, predicate, &n.to_string(), dt)
        }
        Some(other @ (Value::Array(_) | Value::Object(_))) => {
            emitter.emit_literal(subject, predicate, &other.to_string())
        }
        Some(Value::Null) | None => Ok(()),
    }
}
