//! IRI minting and display labels for workspace resources.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters that need percent-encoding in an identifier path segment.
/// Alphanumerics and the RFC 3986 unreserved marks `-`, `_`, `.`, `~` are kept.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path prefixes under which the workspace mints its own IRIs.
const LOCAL_INFIXES: [&str; 3] = ["/iri/", "/vocabulary/", "/collections/"];

/// Generates and labels IRIs that belong to one workspace host.
///
/// Workspace IRIs always use `http` as scheme and carry no port, so the same
/// resource gets the same IRI regardless of how the workspace is reached.
#[derive(Debug, Clone)]
pub struct IriMinter {
    host: String,
}

impl IriMinter {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn escape(value: &str) -> String {
        utf8_percent_encode(value, ID_ENCODE_SET).to_string()
    }

    /// IRI for `id` under the given path infix (`iri`, `vocabulary`, ...).
    pub fn iri(&self, infix: &str, id: &str) -> String {
        format!(
            "http://{}/{}/{}",
            self.host,
            infix.trim_matches('/'),
            Self::escape(id)
        )
    }

    /// IRI for a metadata entity.
    pub fn metadata_iri(&self, id: &str) -> String {
        self.iri("iri", id)
    }

    /// IRI for a vocabulary term.
    pub fn vocabulary_iri(&self, id: &str) -> String {
        self.iri("vocabulary", id)
    }

    /// Normalize a URL to its workspace IRI form: `http` scheme, no port.
    ///
    /// Input that does not parse as a URL is returned unchanged.
    pub fn url_to_iri(&self, url: &str) -> String {
        match Url::parse(url) {
            Ok(parsed) => {
                let mut iri = format!("http://{}{}", parsed.host_str().unwrap_or(""), parsed.path());
                if let Some(query) = parsed.query() {
                    iri.push('?');
                    iri.push_str(query);
                }
                if let Some(fragment) = parsed.fragment() {
                    iri.push('#');
                    iri.push_str(fragment);
                }
                iri
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Invalid uri given to convert to iri");
                url.to_string()
            }
        }
    }

    /// Human readable label for an IRI.
    ///
    /// IRIs minted by this workspace show the part after their infix. Other
    /// IRIs are shortened to their local name when `shorten_external` is set,
    /// and returned as-is otherwise.
    pub fn link_label(&self, iri: &str, shorten_external: bool) -> String {
        if let Ok(url) = Url::parse(iri) {
            if url.host_str() == Some(self.host.as_str()) {
                let path = url.path();
                if let Some(infix) = LOCAL_INFIXES.iter().find(|infix| path.starts_with(*infix)) {
                    let mut label = decode(&path[infix.len()..]);
                    if let Some(query) = url.query() {
                        label.push('?');
                        label.push_str(query);
                    }
                    if let Some(fragment) = url.fragment() {
                        label.push('#');
                        label.push_str(fragment);
                    }
                    return label;
                }
            }
        }

        if shorten_external {
            return decode(local_name(iri));
        }
        iri.to_string()
    }
}

/// The part of an IRI after its last `#`, or after its last `/` when there is no `#`.
pub fn local_name(iri: &str) -> &str {
    match iri.rfind('#') {
        Some(pos) => &iri[pos + 1..],
        None => iri.rsplit('/').next().unwrap_or(iri),
    }
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
