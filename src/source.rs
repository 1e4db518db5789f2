//! Loading story text from disk.
//!
//! Stories saved by other tools are not always UTF-8, so bytes are decoded
//! by BOM first, then as UTF-8, then by a detected legacy encoding.

use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::{debug, warn};

use crate::error::SourceError;

pub fn load_story(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read story file");
    Ok(decode_story(&bytes))
}

/// Decode raw story bytes. Never fails; undecodable bytes become U+FFFD.
pub fn decode_story(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = encoding.name(), "decoding by byte order mark");
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_owned();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = encoding.name(), "story text had undecodable bytes");
    } else {
        debug!(encoding = encoding.name(), "decoded story with detected encoding");
    }
    text.into_owned()
}
