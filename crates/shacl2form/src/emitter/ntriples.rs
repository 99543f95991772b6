use std::io::{self, Write};

use super::{escape_literal, node_term, TriplesEmitter};

/// N-Triples emitter. Streams triples as `<s> <p> <o> .` lines.
pub struct NTriplesEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> NTriplesEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    fn write_triple(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        writeln!(self.writer, "{} <{predicate}> {object} .", node_term(subject))?;
        self.count += 1;
        Ok(())
    }
}

impl<W: Write> TriplesEmitter for NTriplesEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        self.write_triple(subject, predicate, &node_term(object))
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
        let literal = format!("\"{}\"^^<{datatype}>", escape_literal(value));
        self.write_triple(subject, predicate, &literal)
    }

    fn add_prefix(&mut self, _prefix: &str, _iri: &str) -> io::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
