use crate::types::Content;
use content_inspector::ContentType;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, WINDOWS_1252};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads one file as text, never failing.
///
/// Oversized files are not opened at all. The handle lives only for the
/// duration of the read. Decoding tries UTF-8 first, then UTF-16 when a BOM
/// says so, then Windows-1252 (a Latin-1 superset that accepts any byte).
/// Content with NUL bytes anywhere outside a UTF-16 stream is reported as binary.
pub fn read_content(path: &Path, size: u64, limit: u64) -> Content {
    if size > limit {
        tracing::debug!("{}: {} bytes over the {} limit, content omitted", path.display(), size, limit);
        return Content::Oversize { size, limit };
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", path.display(), e);
            return Content::Unreadable(describe_io_error(&e));
        }
    };
    decode(&bytes)
}

/// Decodes raw bytes with the same fallback chain as [`read_content`].
pub fn decode(bytes: &[u8]) -> Content {
    match content_inspector::inspect(bytes) {
        ContentType::BINARY => Content::Unreadable("binary content".to_string()),
        ContentType::UTF_16LE => decode_with(UTF_16LE, bytes),
        ContentType::UTF_16BE => decode_with(UTF_16BE, bytes),
        ContentType::UTF_32LE | ContentType::UTF_32BE => {
            Content::Unreadable("unsupported encoding UTF-32".to_string())
        }
        // The sniff only covers the first KiB.
        ContentType::UTF_8 | ContentType::UTF_8_BOM if bytes.contains(&0) => {
            Content::Unreadable("binary content".to_string())
        }
        ContentType::UTF_8 | ContentType::UTF_8_BOM => {
            let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
            match std::str::from_utf8(body) {
                Ok(text) => Content::Text(text.to_string()),
                Err(_) => decode_with(WINDOWS_1252, body),
            }
        }
    }
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> Content {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!("Lossy {} decode", actual.name());
        return Content::Unreadable(format!("invalid {} data", actual.name()));
    }
    Content::Text(text.into_owned())
}

pub(crate) fn describe_io_error(error: &std::io::Error) -> String {
    match error.kind() {
        ErrorKind::PermissionDenied => "permission denied".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        _ => error.to_string(),
    }
}
