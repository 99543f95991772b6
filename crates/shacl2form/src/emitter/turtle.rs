use std::collections::BTreeMap;
use std::io::{self, Write};

use super::{escape_literal, node_term, TriplesEmitter};

/// Turtle emitter. Writes one triple per line, abbreviating IRIs with the
/// registered prefixes.
pub struct TurtleEmitter<W: Write> {
    writer: W,
    count: u64,
    prefixes: BTreeMap<String, String>,
    header_written: bool,
}

impl<W: Write> TurtleEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            count: 0,
            prefixes: BTreeMap::new(),
            header_written: false,
        }
    }

    /// Write the `@prefix` block once, before the first triple.
    fn write_header(&mut self) -> io::Result<()> {
        if self.header_written {
            return Ok(());
        }
        self.header_written = true;
        for (prefix, iri) in &self.prefixes {
            writeln!(self.writer, "@prefix {prefix}: <{iri}> .")?;
        }
        if !self.prefixes.is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Abbreviate an IRI with the longest matching prefix, if the remaining
    /// local name is a plain name.
    fn compact(&self, term: &str) -> String {
        let best = self
            .prefixes
            .iter()
            .filter(|(_, ns)| term.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len());
        if let Some((prefix, ns)) = best {
            let local = &term[ns.len()..];
            if !local.is_empty() && local.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return format!("{prefix}:{local}");
            }
        }
        node_term(term)
    }

    fn write_triple(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        self.write_header()?;
        let s = self.compact(subject);
        let p = self.compact(predicate);
        writeln!(self.writer, "{s} {p} {object} .")?;
        self.count += 1;
        Ok(())
    }
}

impl<W: Write> TriplesEmitter for TurtleEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        let o = self.compact(object);
        self.write_triple(subject, predicate, &o)
    }

    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()> {
        let literal = format!("\"{}\"", escape_literal(value));
        self.write_triple(subject, predicate, &literal)
    }

    fn emit_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
    ) -> io::Result<()> {
        let literal = format!("\"{}\"^^{}", escape_literal(value), self.compact(datatype));
        self.write_triple(subject, predicate, &literal)
    }

    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()> {
        self.prefixes.insert(prefix.to_string(), iri.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_header()?;
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
