use shacl2form::model::iri::{local_name, IriMinter};

fn minter() -> IriMinter {
    IriMinter::new("localhost")
}

// --- Minting ---

#[test]
fn metadata_iri_basic() {
    assert_eq!(minter().metadata_iri("p1"), "http://localhost/iri/p1");
}

#[test]
fn vocabulary_iri_basic() {
    assert_eq!(
        minter().vocabulary_iri("Person"),
        "http://localhost/vocabulary/Person"
    );
}

#[test]
fn minted_ids_are_percent_encoded() {
    assert_eq!(
        minter().metadata_iri("my id/1"),
        "http://localhost/iri/my%20id%2F1"
    );
    // Unreserved marks stay as they are.
    assert_eq!(
        minter().metadata_iri("a-b_c.d~e"),
        "http://localhost/iri/a-b_c.d~e"
    );
}

#[test]
fn trailing_slash_on_host_is_ignored() {
    let m = IriMinter::new("workspace.example.com/");
    assert_eq!(m.host(), "workspace.example.com");
    assert_eq!(
        m.iri("/collections/", "c1"),
        "http://workspace.example.com/collections/c1"
    );
}

// --- URL normalization ---

#[test]
fn url_to_iri_drops_scheme_and_port() {
    assert_eq!(
        minter().url_to_iri("https://localhost:8080/iri/abc?x=1#frag"),
        "http://localhost/iri/abc?x=1#frag"
    );
}

#[test]
fn url_to_iri_keeps_invalid_input() {
    assert_eq!(minter().url_to_iri("not a url"), "not a url");
}

// --- Labels ---

#[test]
fn local_iri_label_is_the_decoded_id() {
    let m = minter();
    assert_eq!(m.link_label("http://localhost/iri/some%20id", true), "some id");
    assert_eq!(m.link_label("http://localhost/vocabulary/Person", false), "Person");
    assert_eq!(
        m.link_label("http://localhost/collections/c1/dir", true),
        "c1/dir"
    );
}

#[test]
fn local_iri_label_keeps_query_and_fragment() {
    assert_eq!(
        minter().link_label("http://localhost/iri/a?x=1#part", true),
        "a?x=1#part"
    );
}

#[test]
fn external_iri_label_is_shortened_on_request() {
    let m = minter();
    let iri = "http://example.com/ontology#ResearchProject";
    assert_eq!(m.link_label(iri, true), "ResearchProject");
    assert_eq!(m.link_label(iri, false), iri);
    assert_eq!(m.link_label("http://other.org/path/item", true), "item");
}

#[test]
fn other_paths_on_the_workspace_host_are_not_local() {
    let m = minter();
    assert_eq!(m.link_label("http://localhost/api/thing", true), "thing");
    assert_eq!(
        m.link_label("http://localhost/api/thing", false),
        "http://localhost/api/thing"
    );
}

#[test]
fn local_name_prefers_fragment() {
    assert_eq!(local_name("http://a.org/b#c"), "c");
    assert_eq!(local_name("http://a.org/b/c"), "c");
    assert_eq!(local_name("plain"), "plain");
}
