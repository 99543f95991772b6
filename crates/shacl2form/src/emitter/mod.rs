//! RDF serialization of projected properties.

pub mod export;
pub mod ntriples;
pub mod turtle;

use std::io;

pub use export::emit_properties;

/// Sink for RDF triples in some serialization format.
///
/// Subjects and objects starting with `_:` are blank node labels; every other
/// term is an absolute IRI.
pub trait TriplesEmitter {
    /// Emit a triple with an IRI (or blank node) object.
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()>;
    /// Emit a triple with a plain string literal object.
    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()>;
    /// Emit a triple with a typed literal object.
    fn emit_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
    ) -> io::Result<()>;
    /// Register a namespace prefix. Formats without prefixes may ignore it.
    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    /// Number of triples emitted so far.
    fn triple_count(&self) -> u64;
}

/// Escape a literal for N-Triples and Turtle (RDF 1.1 `ECHAR` / `UCHAR`).
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04X}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// `<iri>`, or the label itself for a blank node.
pub(crate) fn node_term(term: &str) -> String {
    if term.starts_with("_:") {
        term.to_string()
    } else {
        format!("<{term}>")
    }
}
