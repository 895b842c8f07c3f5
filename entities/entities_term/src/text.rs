//! Text Encoding Module
//!
//! Charset selector for interpreting raw-byte wire payloads as text.
//! The decoder returns raw bytes by default; callers opt into text
//! decoding by naming one of these charsets.

/// Supported text encodings for raw-byte payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8 with validation
    Utf8,
    /// Latin1 (ISO-8859-1); every byte maps to the code point of the same
    /// value, so decoding cannot fail
    Latin1,
}

impl TextEncoding {
    /// Decode a byte payload under this charset
    ///
    /// Returns None when the bytes are not valid in the charset.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}
