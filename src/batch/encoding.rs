// src/batch/encoding.rs

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Utf8Bom,
    /// Not valid UTF-8; every byte was read as its Latin-1 code point.
    Latin1,
}

/// Decode raw file contents to text, dropping a leading UTF-8 BOM.
pub fn decode(bytes: Vec<u8>) -> (String, SourceEncoding) {
    let (body, had_bom) = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => (rest.to_vec(), true),
        None => (bytes, false),
    };
    match String::from_utf8(body) {
        Ok(text) if had_bom => (text, SourceEncoding::Utf8Bom),
        Ok(text) => (text, SourceEncoding::Utf8),
        Err(e) => (latin1(e.as_bytes()), SourceEncoding::Latin1),
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
