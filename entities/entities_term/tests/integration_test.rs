//! Integration tests for entities_term
//!
//! Covers the conversion surface used by callers building terms and the
//! charset selector used by the decoder.

use entities_term::{Term, TextEncoding};
use entities_utilities::BigNumber;

#[test]
fn test_nested_construction() {
    let term = Term::Map(vec![
        (Term::from("key"), Term::from(10i64)),
        (
            Term::Atom("status".to_string()),
            Term::Tuple(vec![Term::from(1i64), Term::from("ok")]),
        ),
    ]);
    match term {
        Term::Map(pairs) => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[0].0, Term::Str("key".to_string()));
        }
        _ => panic!("Expected Map"),
    }
}

#[test]
fn test_map_keeps_duplicate_keys() {
    // The mapping type is a pair vector: nothing deduplicates
    let term = Term::Map(vec![
        (Term::from(1i64), Term::from(2i64)),
        (Term::from(1i64), Term::from(3i64)),
    ]);
    match term {
        Term::Map(pairs) => assert_eq!(pairs.len(), 2),
        _ => panic!("Expected Map"),
    }
}

#[test]
fn test_integer_conversions_agree_with_bignumber() {
    let from_u64 = Term::from(u64::MAX);
    let from_big = Term::from(BigNumber::from_u64(u64::MAX));
    assert_eq!(from_u64, from_big);
}

#[test]
fn test_text_encoding_choices() {
    let bytes = [0xE9u8]; // valid Latin1, invalid UTF-8
    assert_eq!(TextEncoding::Utf8.decode(&bytes), None);
    assert_eq!(
        TextEncoding::Latin1.decode(&bytes),
        Some("\u{e9}".to_string())
    );
}
