//! Entities Layer: Term Model
//!
//! In-memory representation of external term format values, bridging native
//! Rust values and the wire tags, plus the text-encoding selector applied to
//! raw-byte payloads during decoding.

pub mod term;
pub mod text;

pub use term::Term;
pub use text::TextEncoding;
