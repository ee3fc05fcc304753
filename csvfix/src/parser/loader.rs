//! Reads the input file into memory and decodes it to text.
//!
//! UTF-8 input (with or without a byte-order mark) is taken as-is. Anything
//! else goes through charset detection and is decoded with `encoding_rs`.

use encoding_rs::Encoding;
use log::{debug, info};
use std::path::Path;

use crate::error::{LoadError, LoadResult};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decoded file contents with the encoding that was used.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: String,
}

/// Read the whole file at `path` and return its text.
///
/// The file handle is closed before this returns, on success or failure.
pub fn read_file<P: AsRef<Path>>(path: P) -> LoadResult<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let decoded = decode_bytes(&bytes);
    info!("Loaded {} ({})", path.display(), decoded.encoding);
    Ok(decoded.text)
}

/// Decode raw bytes, detecting the encoding when they are not UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(body) {
        return DecodedText {
            text: text.to_owned(),
            encoding: "utf-8".to_string(),
        };
    }

    let encoding = detect_encoding(bytes);
    let text = decode_content(bytes, &encoding);
    DecodedText { text, encoding }
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes using the named encoding, falling back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        // Same mapping as the WHATWG label table.
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        label => match Encoding::for_label(label.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.into_owned(),
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Name,Owed\nAlice,1.5e3\n").unwrap();

        let text = read_file(file.path()).unwrap();
        assert_eq!(text, "Name,Owed\nAlice,1.5e3\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holders.csv");

        let err = read_file(&path).unwrap_err();
        let LoadError::Io { path: reported, source } = err;
        assert_eq!(reported, path);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let decoded = decode_bytes(b"\xEF\xBB\xBFName,Owed\n");
        assert_eq!(decoded.text, "Name,Owed\n");
        assert_eq!(decoded.encoding, "utf-8");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_latin1_currency_sign() {
        // 0xA4 is the currency sign in ISO-8859-1 and the euro in ISO-8859-15
        assert_eq!(decode_content(&[0xA4], "iso-8859-1"), "¤");
        assert_eq!(decode_content(&[0x80], "latin1"), "€");
    }

    #[test]
    fn test_non_utf8_input_is_decoded() {
        let bytes: &[u8] = b"Name,Owed\nSoci\xE9t\xE9,12\n";
        let decoded = decode_bytes(bytes);
        assert!(decoded.text.starts_with("Name,Owed\nSoci"));
        assert!(decoded.text.ends_with(",12\n"));
    }
}
