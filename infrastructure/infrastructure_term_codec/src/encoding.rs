//! Encoding Module
//!
//! Turns a native term into its external format byte sequence: one version
//! magic byte followed by the tag-dispatched term data.
//!
//! The wire form of an integer is a pure function of its value: 0..=255
//! takes the small-integer tag, the rest of the signed 32-bit range takes
//! the integer tag, and everything else becomes a sign + base-256 magnitude
//! big integer. Arbitrary-precision values that happen to fit a fixed-width
//! form are routed through the same function, so equal values always
//! produce identical bytes.

use entities_term::Term;
use entities_utilities::BigNumber;
use infrastructure_bignum_encoding::{BignumCodec, Sign};

use crate::constants::*;
use crate::VERSION_MAGIC;

/// Encoding error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The value kind has no wire representation
    UnsupportedType(String),
    /// Atom name exceeds the atom length limits
    AtomTooLong,
    /// A length or arity exceeds its wire field
    ValueTooLarge,
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::UnsupportedType(kind) => {
                write!(f, "no external format mapping for {}", kind)
            }
            EncodeError::AtomTooLong => write!(f, "atom name exceeds the atom length limits"),
            EncodeError::ValueTooLarge => {
                write!(f, "length or arity exceeds its wire field")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encode a term to external format
///
/// Produces the version magic byte followed by exactly one term. Pure and
/// deterministic; on error no partial output is returned.
///
/// # Arguments
/// * `term` - The term to encode
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded bytes
/// * `Err(EncodeError)` - Encoding error
pub fn encode_term(term: &Term) -> Result<Vec<u8>, EncodeError> {
    let mut buf = vec![VERSION_MAGIC];
    enc_term_int(&mut buf, term)?;
    Ok(buf)
}

/// Internal encoding function, without the version magic byte
fn enc_term_int(buf: &mut Vec<u8>, term: &Term) -> Result<(), EncodeError> {
    match term {
        Term::Nil => {
            buf.push(ERL_NIL_EXT);
            Ok(())
        }
        Term::Int(value) => {
            enc_integer(buf, *value);
            Ok(())
        }
        Term::Big(value) => enc_big(buf, value),
        Term::Float(value) => {
            buf.push(NEW_FLOAT_EXT);
            buf.extend_from_slice(&value.to_be_bytes());
            Ok(())
        }
        Term::Atom(name) => enc_atom(buf, name),
        Term::Str(text) => {
            // General text always goes out as a UTF-8 binary, never an atom
            enc_binary(buf, text.as_bytes())
        }
        Term::Binary(data) => enc_binary(buf, data),
        Term::List(items) => {
            if items.is_empty() {
                // The wire form of an empty list is the bare nil tag
                buf.push(ERL_NIL_EXT);
                return Ok(());
            }
            let count = u32::try_from(items.len()).map_err(|_| EncodeError::ValueTooLarge)?;
            buf.push(ERL_LIST_EXT);
            buf.extend_from_slice(&count.to_be_bytes());
            for item in items {
                enc_term_int(buf, item)?;
            }
            // Proper-list framing: the tail is always nil
            buf.push(ERL_NIL_EXT);
            Ok(())
        }
        Term::Tuple(items) => {
            if items.len() < 256 {
                buf.push(ERL_SMALL_TUPLE_EXT);
                buf.push(items.len() as u8);
            } else {
                let arity = u32::try_from(items.len()).map_err(|_| EncodeError::ValueTooLarge)?;
                buf.push(ERL_LARGE_TUPLE_EXT);
                buf.extend_from_slice(&arity.to_be_bytes());
            }
            for item in items {
                enc_term_int(buf, item)?;
            }
            Ok(())
        }
        Term::Map(pairs) => {
            let count = u32::try_from(pairs.len()).map_err(|_| EncodeError::ValueTooLarge)?;
            buf.push(ERL_MAP_EXT);
            buf.extend_from_slice(&count.to_be_bytes());
            // Pairs go out in presentation order, never re-sorted
            for (key, value) in pairs {
                enc_term_int(buf, key)?;
                enc_term_int(buf, value)?;
            }
            Ok(())
        }
    }
}

/// Encode a fixed-width integer, selecting the minimal wire form
fn enc_integer(buf: &mut Vec<u8>, value: i64) {
    if (0..=255).contains(&value) {
        buf.push(ERL_SMALL_INTEGER_EXT);
        buf.push(value as u8);
    } else if value >= i32::MIN as i64 && value <= i32::MAX as i64 {
        buf.push(ERL_INTEGER_EXT);
        buf.extend_from_slice(&(value as i32).to_be_bytes());
    } else {
        // Outside 32 bits: small big with the magnitude of the i64.
        // At most 8 digits, so the one-byte length prefix always fits.
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push((magnitude & 0xFF) as u8);
            magnitude >>= 8;
        }
        buf.push(ERL_SMALL_BIG_EXT);
        buf.push(digits.len() as u8);
        buf.push(if value < 0 { 1 } else { 0 });
        buf.extend_from_slice(&digits);
    }
}

/// Encode an arbitrary precision integer
///
/// Values that fit i64 re-enter the fixed-width path so that the wire form
/// depends only on the value.
fn enc_big(buf: &mut Vec<u8>, value: &BigNumber) -> Result<(), EncodeError> {
    if let Some(v) = value.to_i64() {
        enc_integer(buf, v);
        return Ok(());
    }

    let (sign, digits) = BignumCodec::digits_from_magnitude(value);
    let sign_byte = match sign {
        Sign::Negative => 1,
        Sign::Positive => 0,
    };
    if digits.len() < 256 {
        buf.push(ERL_SMALL_BIG_EXT);
        buf.push(digits.len() as u8);
    } else {
        let count = u32::try_from(digits.len()).map_err(|_| EncodeError::ValueTooLarge)?;
        buf.push(ERL_LARGE_BIG_EXT);
        buf.extend_from_slice(&count.to_be_bytes());
    }
    buf.push(sign_byte);
    buf.extend_from_slice(&digits);
    Ok(())
}

/// Encode an atom (2-byte length form)
fn enc_atom(buf: &mut Vec<u8>, name: &str) -> Result<(), EncodeError> {
    if name.chars().count() > MAX_ATOM_CHARACTERS || name.len() > MAX_ATOM_SZ_LIMIT {
        return Err(EncodeError::AtomTooLong);
    }
    buf.push(ERL_ATOM_EXT);
    buf.extend_from_slice(&(name.len() as u16).to_be_bytes());
    buf.extend_from_slice(name.as_bytes());
    Ok(())
}

/// Encode a raw byte payload under the binary tag
fn enc_binary(buf: &mut Vec<u8>, data: &[u8]) -> Result<(), EncodeError> {
    let len = u32::try_from(data.len()).map_err(|_| EncodeError::ValueTooLarge)?;
    buf.push(ERL_BINARY_EXT);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(data);
    Ok(())
}
