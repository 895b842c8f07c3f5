//! Codec Facades Module
//!
//! Thin wrappers over the term codec entry points.

use entities_term::Term;
use infrastructure_term_codec::{decode_term, encode_term, DecodeError, EncodeError, UnpackOptions};

/// Pack a term into its external format byte sequence
///
/// # Arguments
/// * `term` - The term to pack
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded bytes, starting with the version magic byte
/// * `Err(EncodeError)` - The term has no wire representation
pub fn pack(term: &Term) -> Result<Vec<u8>, EncodeError> {
    encode_term(term)
}

/// Unpack one term from an external format byte sequence
///
/// Bytes after the first term are ignored; use [`unpack_prefix`] to learn
/// how much of the input one term consumed.
///
/// # Arguments
/// * `data` - Encoded bytes
/// * `options` - Decoding options (text charset for raw-byte payloads)
///
/// # Returns
/// * `Ok(Term)` - Decoded term
/// * `Err(DecodeError)` - Malformed input
pub fn unpack(data: &[u8], options: &UnpackOptions) -> Result<Term, DecodeError> {
    decode_term(data, options).map(|(term, _)| term)
}

/// Unpack one term and report the consumed byte count
///
/// Callers that require strict single-term input can compare the consumed
/// count against the input length.
pub fn unpack_prefix(data: &[u8], options: &UnpackOptions) -> Result<(Term, usize), DecodeError> {
    decode_term(data, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_delegates_to_encoder() {
        assert_eq!(pack(&Term::Int(10)).unwrap(), vec![131, 97, 10]);
    }

    #[test]
    fn test_unpack_drops_consumed_length() {
        let term = unpack(&[131, 97, 10], &UnpackOptions::new()).unwrap();
        assert_eq!(term, Term::Int(10));
    }

    #[test]
    fn test_unpack_prefix_reports_consumed_length() {
        let (term, consumed) =
            unpack_prefix(&[131, 97, 10, 0, 0], &UnpackOptions::new()).unwrap();
        assert_eq!(term, Term::Int(10));
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_unpack_trailing_bytes_are_not_an_error() {
        let term = unpack(&[131, 106, 131, 106], &UnpackOptions::new()).unwrap();
        assert_eq!(term, Term::Nil);
    }
}
