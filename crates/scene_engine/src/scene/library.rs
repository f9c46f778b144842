//! Asset library entries and payload encoding
//!
//! A library asset's `url` is a loadable reference: either an external
//! location the renderer can fetch, or the asset's binary embedded as a
//! base64 data URI (the form written into full saves).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Prefix marking an embedded binary payload
const EMBEDDED_PREFIX: &str = "data:model/gltf-binary;base64,";

/// Reusable imported asset in the library
///
/// Names are the library key: unique, compared case-sensitively at insert
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryAsset {
    /// Unique asset name
    pub name: String,
    /// Payload reference: external URL or embedded data URI
    pub url: String,
    /// Load-cancellation generation, bumped by the store on (re)insert
    pub(crate) generation: u64,
}

impl LibraryAsset {
    /// Create a library entry
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            generation: 0,
        }
    }
}

/// Encode raw asset bytes as an embedded payload string
pub fn encode_embedded_payload(bytes: &[u8]) -> String {
    format!("{}{}", EMBEDDED_PREFIX, BASE64.encode(bytes))
}

/// Whether a payload reference is an embedded binary rather than external
pub fn is_embedded_payload(url: &str) -> bool {
    url.starts_with(EMBEDDED_PREFIX)
}

/// Decode an embedded payload back to raw bytes
///
/// Returns `None` for external references and for embedded payloads whose
/// base64 body does not decode; payload validation beyond that is the
/// loader's concern.
pub fn decode_embedded_payload(url: &str) -> Option<Vec<u8>> {
    let body = url.strip_prefix(EMBEDDED_PREFIX)?;
    BASE64.decode(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_payload_round_trip() {
        let bytes = b"glTF\x02\x00\x00\x00fake-binary";
        let url = encode_embedded_payload(bytes);

        assert!(is_embedded_payload(&url));
        assert_eq!(decode_embedded_payload(&url).unwrap(), bytes);
    }

    #[test]
    fn test_external_url_is_not_embedded() {
        let url = "https://example.com/assets/sofa.glb";
        assert!(!is_embedded_payload(url));
        assert!(decode_embedded_payload(url).is_none());
    }

    #[test]
    fn test_malformed_embedded_body_decodes_to_none() {
        let url = format!("{}not!!valid@@base64", "data:model/gltf-binary;base64,");
        assert!(decode_embedded_payload(&url).is_none());
    }
}
