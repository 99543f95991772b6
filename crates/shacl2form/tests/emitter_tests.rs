use serde_json::json;
use shacl2form::emitter::emit_properties;
use shacl2form::emitter::ntriples::NTriplesEmitter;
use shacl2form::emitter::turtle::TurtleEmitter;
use shacl2form::emitter::TriplesEmitter;
use shacl2form::{PropertyEntry, ValueEntry};

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

// ---------------------------------------------------------------------------
// NTriples tests
// ---------------------------------------------------------------------------

#[test]
fn nt_basic_iri_triple() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
    );
}

#[test]
fn nt_literal_triple() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_literal("http://example.org/s", "http://example.org/name", "hello world")
        .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/name> \"hello world\" .\n"
    );
}

#[test]
fn nt_typed_literal() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_typed_literal(
        "http://example.org/s",
        "http://example.org/p",
        "42",
        "http://www.w3.org/2001/XMLSchema#integer",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n"
    );
}

#[test]
fn nt_blank_nodes_are_not_bracketed() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_iri("http://example.org/s", "http://example.org/p", "_:l0")
        .unwrap();
    em.emit_literal("_:l0", "http://example.org/p", "x").unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> _:l0 .\n_:l0 <http://example.org/p> \"x\" .\n"
    );
}

#[test]
fn nt_escape_special_chars() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_literal(
        "http://example.org/s",
        "http://example.org/p",
        "line1\nline2\ttab\\slash\"quote\r",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("line1\\nline2\\ttab\\\\slash\\\"quote\\r"), "{out}");
}

#[test]
fn nt_escape_control_chars() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    // \x01 is a control char that should be escaped as \u0001
    em.emit_literal("http://example.org/s", "http://example.org/p", "a\x01b")
        .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\\u0001"), "Expected \\u0001 in: {out}");
}

#[test]
fn nt_escape_unicode_passthrough() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_literal("http://example.org/s", "http://example.org/p", "cafe\u{0301}")
        .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("cafe\u{0301}"), "Unicode should pass through: {out}");
}

#[test]
fn nt_prefix_writes_nothing() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.add_prefix("ex", "http://example.org/").unwrap();
    em.flush().unwrap();
    assert!(buf.is_empty());
}

#[test]
fn nt_triple_count() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    assert_eq!(em.triple_count(), 0);
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    assert_eq!(em.triple_count(), 1);
    em.emit_literal("http://example.org/s", "http://example.org/p", "val")
        .unwrap();
    assert_eq!(em.triple_count(), 2);
}

// ---------------------------------------------------------------------------
// Turtle tests
// ---------------------------------------------------------------------------

#[test]
fn turtle_basic_iri_with_prefix() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    em.add_prefix("ex", "http://example.org/").unwrap();
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "@prefix ex: <http://example.org/> .\n\nex:s ex:p ex:o .\n");
}

#[test]
fn turtle_typed_literal_with_prefix() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    em.add_prefix("xsd", XSD).unwrap();
    em.add_prefix("ex", "http://example.org/").unwrap();
    em.emit_typed_literal(
        "http://example.org/s",
        "http://example.org/p",
        "42",
        "http://www.w3.org/2001/XMLSchema#integer",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(
        out.contains("ex:s ex:p \"42\"^^xsd:integer ."),
        "Expected compacted typed literal: {out}"
    );
}

#[test]
fn turtle_prefix_declaration_sorted() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    em.add_prefix("z", "http://z.org/").unwrap();
    em.add_prefix("a", "http://a.org/").unwrap();
    em.add_prefix("m", "http://m.org/").unwrap();
    em.emit_iri("http://a.org/s", "http://m.org/p", "http://z.org/o")
        .unwrap();
    let out = String::from_utf8(buf).unwrap();
    let a_pos = out.find("@prefix a:").expect("missing @prefix a:");
    let m_pos = out.find("@prefix m:").expect("missing @prefix m:");
    let z_pos = out.find("@prefix z:").expect("missing @prefix z:");
    assert!(
        a_pos < m_pos && m_pos < z_pos,
        "Prefixes not sorted: a@{a_pos} m@{m_pos} z@{z_pos}"
    );
}

#[test]
fn turtle_longest_prefix_wins() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    em.add_prefix("ex", "http://example.org/").unwrap();
    em.add_prefix("onto", "http://example.org/ontology#").unwrap();
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/ontology#lead",
        "http://example.org/o",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("ex:s onto:lead ex:o ."), "{out}");
}

#[test]
fn turtle_local_name_with_special_chars_not_compacted() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    em.add_prefix("ex", "http://example.org/").unwrap();
    em.emit_iri(
        "http://example.org/foo.bar",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(
        out.contains("<http://example.org/foo.bar>"),
        "IRI with '.' should not compact: {out}"
    );
}

#[test]
fn turtle_no_prefix_uses_full_iri() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
    );
}

#[test]
fn turtle_flush_writes_header_without_triples() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    em.add_prefix("ex", "http://example.org/").unwrap();
    em.flush().unwrap();
    assert_eq!(em.triple_count(), 0);
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "@prefix ex: <http://example.org/> .\n\n");
}

// ---------------------------------------------------------------------------
// Projected properties
// ---------------------------------------------------------------------------

const SUBJECT: &str = "http://localhost/iri/p1";

fn export_ntriples(properties: &[PropertyEntry]) -> (String, u64) {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    emit_properties(&mut em, SUBJECT, properties).unwrap();
    let count = em.triple_count();
    (String::from_utf8(buf).unwrap(), count)
}

fn entry(key: &str, datatype: Option<&str>, values: Vec<ValueEntry>) -> PropertyEntry {
    PropertyEntry {
        key: key.to_string(),
        datatype: datatype.map(str::to_string),
        values,
        ..PropertyEntry::default()
    }
}

#[test]
fn type_entry_becomes_rdf_type() {
    let properties = vec![entry(
        "@type",
        None,
        vec![ValueEntry::resource("http://example.com/ontology#Project")],
    )];
    let (out, count) = export_ntriples(&properties);
    assert_eq!(count, 1);
    assert_eq!(
        out,
        format!("<{SUBJECT}> <{RDF}type> <http://example.com/ontology#Project> .\n")
    );
}

#[test]
fn literals_carry_their_datatype() {
    let properties = vec![
        entry(
            "http://example.com/ontology#title",
            Some(XSD_STRING),
            vec![ValueEntry::literal("Genome study")],
        ),
        entry(
            "http://example.com/ontology#started",
            Some(XSD_DATE),
            vec![ValueEntry::literal("2020-01-01")],
        ),
        entry(
            "http://example.com/ontology#active",
            None,
            vec![ValueEntry::literal(true)],
        ),
        entry(
            "http://example.com/ontology#size",
            None,
            vec![ValueEntry::literal(3), ValueEntry::literal(json!(2.5))],
        ),
    ];
    let (out, count) = export_ntriples(&properties);
    assert_eq!(count, 5);
    assert!(out.contains("<http://example.com/ontology#title> \"Genome study\" ."), "{out}");
    assert!(out.contains(&format!("\"2020-01-01\"^^<{XSD}date>")), "{out}");
    assert!(out.contains(&format!("\"true\"^^<{XSD}boolean>")), "{out}");
    assert!(out.contains(&format!("\"3\"^^<{XSD}integer>")), "{out}");
    assert!(out.contains(&format!("\"2.5\"^^<{XSD}double>")), "{out}");
}

#[test]
fn empty_properties_emit_nothing() {
    let properties = vec![entry("http://example.com/ontology#notes", None, Vec::new())];
    let (out, count) = export_ntriples(&properties);
    assert_eq!(count, 0);
    assert!(out.is_empty());
}

#[test]
fn rdf_list_becomes_a_first_rest_chain() {
    let mut keywords = entry(
        "http://example.com/ontology#keywords",
        Some(XSD_STRING),
        vec![ValueEntry::literal("zebra"), ValueEntry::literal("apple")],
    );
    keywords.is_rdf_list = true;
    let (out, count) = export_ntriples(&[keywords]);
    assert_eq!(count, 5);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("<{SUBJECT}> <http://example.com/ontology#keywords> _:l0 ."),
            format!("_:l0 <{RDF}first> \"zebra\" ."),
            format!("_:l0 <{RDF}rest> _:l1 ."),
            format!("_:l1 <{RDF}first> \"apple\" ."),
            format!("_:l1 <{RDF}rest> <{RDF}nil> ."),
        ]
    );
}

#[test]
fn turtle_export_uses_workspace_prefixes() {
    let properties = vec![entry(
        "@type",
        None,
        vec![ValueEntry::resource("http://fairspace.io/ontology#Directory")],
    )];
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    emit_properties(&mut em, SUBJECT, &properties).unwrap();
    em.flush().unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("@prefix fs: <http://fairspace.io/ontology#> ."), "{out}");
    assert!(out.contains("@prefix sh: <http://www.w3.org/ns/shacl#> ."), "{out}");
    assert!(out.contains(&format!("<{SUBJECT}> rdf:type fs:Directory .")), "{out}");
}
