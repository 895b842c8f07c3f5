//! Decoding Module
//!
//! Turns an external format byte sequence back into a native term: checks
//! the version magic byte, then runs a depth-bounded recursive tag dispatch
//! over the buffer.
//!
//! Every length and arity field is validated against the remaining buffer
//! before any read, so malformed or truncated input fails with a structured
//! error instead of reading out of bounds. One call consumes exactly one
//! top-level term; bytes after it are left uninspected and the consumed
//! length is returned for callers that want to check.

use entities_term::{Term, TextEncoding};
use infrastructure_bignum_encoding::{BignumCodec, Sign};

use crate::constants::*;
use crate::VERSION_MAGIC;

/// Maximum container nesting depth accepted by the decoder
///
/// Deeper input fails with `NestingTooDeep` instead of exhausting the call
/// stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Decoding options
///
/// The single recognized knob: a charset for interpreting raw-byte payloads
/// (binaries and legacy character lists) as text. The default leaves the
/// payload as raw bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpackOptions {
    /// Charset applied to raw-byte payloads; None returns raw bytes
    pub text_encoding: Option<TextEncoding>,
}

impl UnpackOptions {
    /// Options with no text decoding
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that decode raw-byte payloads under the given charset
    pub fn with_text_encoding(encoding: TextEncoding) -> Self {
        Self {
            text_encoding: Some(encoding),
        }
    }
}

/// Decoding error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// First byte is not the version magic byte
    BadVersion { found: u8 },
    /// Tag byte with no known meaning
    UnknownTag { tag: u8, offset: usize },
    /// A header or payload needs more bytes than remain
    Truncated { offset: usize },
    /// A list tail other than nil (improper list)
    UnsupportedTail { offset: usize },
    /// A text payload is not valid in the requested charset
    InvalidText { offset: usize },
    /// Container nesting exceeds `MAX_NESTING_DEPTH`
    NestingTooDeep,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::BadVersion { found } => {
                write!(f, "bad version byte {} (expected {})", found, VERSION_MAGIC)
            }
            DecodeError::UnknownTag { tag, offset } => {
                write!(f, "unknown tag {} at offset {}", tag, offset)
            }
            DecodeError::Truncated { offset } => {
                write!(f, "input truncated at offset {}", offset)
            }
            DecodeError::UnsupportedTail { offset } => {
                write!(f, "improper list tail at offset {}", offset)
            }
            DecodeError::InvalidText { offset } => {
                write!(f, "invalid text payload at offset {}", offset)
            }
            DecodeError::NestingTooDeep => {
                write!(f, "nesting deeper than {}", MAX_NESTING_DEPTH)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode one term from external format
///
/// Expects the version magic byte followed by exactly one term. Returns the
/// term and the total number of bytes consumed, including the version byte.
/// Trailing bytes are not inspected.
///
/// # Arguments
/// * `data` - Encoded bytes
/// * `options` - Decoding options (text charset)
///
/// # Returns
/// * `Ok((term, consumed))` - Decoded term and consumed byte count
/// * `Err(DecodeError)` - Decoding error
pub fn decode_term(data: &[u8], options: &UnpackOptions) -> Result<(Term, usize), DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::Truncated { offset: 0 });
    }
    if data[0] != VERSION_MAGIC {
        return Err(DecodeError::BadVersion { found: data[0] });
    }
    dec_term_at(data, 1, 0, options)
}

/// Check that `count` bytes remain at `pos`
fn need(buf: &[u8], pos: usize, count: usize) -> Result<(), DecodeError> {
    if count > buf.len() || pos > buf.len() - count {
        return Err(DecodeError::Truncated { offset: pos });
    }
    Ok(())
}

fn read_u16(buf: &[u8], pos: usize) -> u16 {
    u16::from_be_bytes([buf[pos], buf[pos + 1]])
}

fn read_u32(buf: &[u8], pos: usize) -> u32 {
    u32::from_be_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
}

/// Internal decoding function
///
/// Dispatches on the tag byte at `index` and returns the decoded term with
/// the position of the first byte after it. `depth` counts enclosing
/// containers.
fn dec_term_at(
    buf: &[u8],
    index: usize,
    depth: usize,
    options: &UnpackOptions,
) -> Result<(Term, usize), DecodeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(DecodeError::NestingTooDeep);
    }
    need(buf, index, 1)?;

    let tag = buf[index];
    let mut pos = index + 1;

    match tag {
        ERL_SMALL_INTEGER_EXT => {
            need(buf, pos, 1)?;
            let value = buf[pos] as i64;
            pos += 1;
            Ok((Term::Int(value), pos))
        }
        ERL_INTEGER_EXT => {
            need(buf, pos, 4)?;
            let value = read_u32(buf, pos) as i32 as i64;
            pos += 4;
            Ok((Term::Int(value), pos))
        }
        NEW_FLOAT_EXT => {
            need(buf, pos, 8)?;
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&buf[pos..pos + 8]);
            pos += 8;
            Ok((Term::Float(f64::from_be_bytes(bytes)), pos))
        }
        ERL_FLOAT_EXT => {
            // Legacy 31-byte ASCII float, emitted by old peers only
            need(buf, pos, 31)?;
            let text = std::str::from_utf8(&buf[pos..pos + 31])
                .map_err(|_| DecodeError::InvalidText { offset: pos })?;
            let value = text
                .trim_end_matches('\0')
                .parse::<f64>()
                .map_err(|_| DecodeError::InvalidText { offset: pos })?;
            pos += 31;
            Ok((Term::Float(value), pos))
        }
        ERL_ATOM_EXT | ERL_ATOM_UTF8_EXT => {
            need(buf, pos, 2)?;
            let len = read_u16(buf, pos) as usize;
            pos += 2;
            need(buf, pos, len)?;
            let name = dec_atom_payload(&buf[pos..pos + len], tag == ERL_ATOM_UTF8_EXT, pos)?;
            pos += len;
            Ok((Term::Atom(name), pos))
        }
        ERL_SMALL_ATOM_EXT | ERL_SMALL_ATOM_UTF8_EXT => {
            need(buf, pos, 1)?;
            let len = buf[pos] as usize;
            pos += 1;
            need(buf, pos, len)?;
            let name =
                dec_atom_payload(&buf[pos..pos + len], tag == ERL_SMALL_ATOM_UTF8_EXT, pos)?;
            pos += len;
            Ok((Term::Atom(name), pos))
        }
        ERL_NIL_EXT => Ok((Term::Nil, pos)),
        ERL_STRING_EXT => {
            need(buf, pos, 2)?;
            let len = read_u16(buf, pos) as usize;
            pos += 2;
            need(buf, pos, len)?;
            let term = bytes_or_text(&buf[pos..pos + len], options, pos)?;
            pos += len;
            Ok((term, pos))
        }
        ERL_BINARY_EXT => {
            need(buf, pos, 4)?;
            let len = read_u32(buf, pos) as usize;
            pos += 4;
            need(buf, pos, len)?;
            let term = bytes_or_text(&buf[pos..pos + len], options, pos)?;
            pos += len;
            Ok((term, pos))
        }
        ERL_LIST_EXT => {
            need(buf, pos, 4)?;
            let count = read_u32(buf, pos) as usize;
            pos += 4;

            // count is attacker-controlled; cap the preallocation to what
            // the remaining buffer could possibly hold
            let mut elements = Vec::with_capacity(count.min(buf.len() - pos));
            for _ in 0..count {
                let (element, new_pos) = dec_term_at(buf, pos, depth + 1, options)?;
                elements.push(element);
                pos = new_pos;
            }

            // The tail tag is mandatory even for a zero-count header, and
            // must be nil: this model has no improper lists
            need(buf, pos, 1)?;
            if buf[pos] != ERL_NIL_EXT {
                return Err(DecodeError::UnsupportedTail { offset: pos });
            }
            pos += 1;

            if elements.is_empty() {
                Ok((Term::Nil, pos))
            } else {
                Ok((Term::List(elements), pos))
            }
        }
        ERL_SMALL_TUPLE_EXT | ERL_LARGE_TUPLE_EXT => {
            let arity = if tag == ERL_SMALL_TUPLE_EXT {
                need(buf, pos, 1)?;
                let a = buf[pos] as usize;
                pos += 1;
                a
            } else {
                need(buf, pos, 4)?;
                let a = read_u32(buf, pos) as usize;
                pos += 4;
                a
            };

            let mut elements = Vec::with_capacity(arity.min(buf.len() - pos));
            for _ in 0..arity {
                let (element, new_pos) = dec_term_at(buf, pos, depth + 1, options)?;
                elements.push(element);
                pos = new_pos;
            }
            Ok((Term::Tuple(elements), pos))
        }
        ERL_MAP_EXT => {
            need(buf, pos, 4)?;
            let count = read_u32(buf, pos) as usize;
            pos += 4;

            // Pairs are kept in wire order; duplicate keys are not detected
            let mut pairs = Vec::with_capacity(count.min(buf.len() - pos));
            for _ in 0..count {
                let (key, new_pos) = dec_term_at(buf, pos, depth + 1, options)?;
                pos = new_pos;
                let (value, new_pos) = dec_term_at(buf, pos, depth + 1, options)?;
                pos = new_pos;
                pairs.push((key, value));
            }
            Ok((Term::Map(pairs), pos))
        }
        ERL_SMALL_BIG_EXT => {
            need(buf, pos, 2)?;
            let digit_count = buf[pos] as usize;
            let sign_byte = buf[pos + 1];
            pos += 2;
            need(buf, pos, digit_count)?;
            let term = dec_big(&buf[pos..pos + digit_count], sign_byte);
            pos += digit_count;
            Ok((term, pos))
        }
        ERL_LARGE_BIG_EXT => {
            need(buf, pos, 5)?;
            let digit_count = read_u32(buf, pos) as usize;
            let sign_byte = buf[pos + 4];
            pos += 5;
            need(buf, pos, digit_count)?;
            let term = dec_big(&buf[pos..pos + digit_count], sign_byte);
            pos += digit_count;
            Ok((term, pos))
        }
        _ => Err(DecodeError::UnknownTag { tag, offset: index }),
    }
}

/// Decode an atom name payload
///
/// UTF-8 tags are validated; the legacy tags carry Latin1, where every byte
/// maps to the code point of the same value.
fn dec_atom_payload(bytes: &[u8], utf8: bool, offset: usize) -> Result<String, DecodeError> {
    let encoding = if utf8 {
        TextEncoding::Utf8
    } else {
        TextEncoding::Latin1
    };
    encoding
        .decode(bytes)
        .ok_or(DecodeError::InvalidText { offset })
}

/// Return a raw-byte payload as bytes, or as text under the configured
/// charset
fn bytes_or_text(
    bytes: &[u8],
    options: &UnpackOptions,
    offset: usize,
) -> Result<Term, DecodeError> {
    match options.text_encoding {
        None => Ok(Term::Binary(bytes.to_vec())),
        Some(encoding) => encoding
            .decode(bytes)
            .map(Term::Str)
            .ok_or(DecodeError::InvalidText { offset }),
    }
}

/// Rebuild an integer from its magnitude digits and sign byte
///
/// Values that fit i64 normalize to the fixed-width variant so integer
/// equality does not depend on the wire form that carried the value.
fn dec_big(digits: &[u8], sign_byte: u8) -> Term {
    let sign = if sign_byte != 0 {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let value = BignumCodec::magnitude_from_digits(sign, digits);
    match value.to_i64() {
        Some(v) => Term::Int(v),
        None => Term::Big(value),
    }
}
