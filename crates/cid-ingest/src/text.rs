//! Byte decoding and free-text loading.

use std::borrow::Cow;

use cid_model::RawInput;
use encoding_rs::WINDOWS_1252;

use crate::error::{IngestError, Result};
use crate::source::InputSource;

/// Decodes input bytes into text.
///
/// UTF-8 (with or without BOM) is read as is. UTF-16 BOMs are rejected.
/// Anything else that is not valid UTF-8 is decoded as Windows-1252, the
/// usual encoding of spreadsheet exports on Windows.
pub fn decode_text(bytes: &[u8], source_name: &str) -> Result<String> {
    if bytes.len() >= 2 {
        // UTF-16 LE BOM
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                source_name: source_name.to_string(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                source_name: source_name.to_string(),
                encoding: "UTF-16 BE",
            });
        }
    }

    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => {
            tracing::warn!(
                source = source_name,
                "input is not valid UTF-8, decoding as Windows-1252"
            );
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            Ok(match text {
                Cow::Borrowed(text) => text.to_string(),
                Cow::Owned(text) => text,
            })
        }
    }
}

/// Loads a free-text input (pasted IDs, a `.txt` file, stdin).
pub fn load_text(source: &InputSource, max_size: u64) -> Result<RawInput> {
    let bytes = source.read_bytes(max_size)?;
    let text = decode_text(&bytes, &source.to_string())?;
    tracing::debug!(source = %source, bytes = bytes.len(), "loaded text input");
    Ok(RawInput::Text(text))
}
