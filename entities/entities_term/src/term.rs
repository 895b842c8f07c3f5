//! Term Module
//!
//! The tagged in-memory representation of external term format values.
//!
//! Every decodable wire form maps to exactly one variant here, and every
//! variant has a deterministic wire form chosen by the encoder. Integer
//! values keep a fixed-width fast path (`Int`) with the arbitrary-precision
//! representation (`Big`) reserved for values outside i64; the encoder
//! selects the wire tag from the value itself, so the split never shows up
//! in the encoded bytes.
//!
//! Atoms and general text are deliberately asymmetric: decoding an atom tag
//! yields `Atom`, but general text (`Str`) always encodes as a binary. The
//! codec never turns text back into an atom on its own.

use entities_utilities::BigNumber;

/// An external term format value
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// The empty list
    Nil,
    /// Fixed-width integer
    Int(i64),
    /// Arbitrary precision integer, for values outside the i64 range
    Big(BigNumber),
    /// IEEE 754 double, exact bit pattern preserved
    Float(f64),
    /// Atom label, distinct from general text
    Atom(String),
    /// General text, encoded as a UTF-8 binary on the wire
    Str(String),
    /// Raw byte sequence
    Binary(Vec<u8>),
    /// Proper list; an empty list is wire-identical to `Nil`
    List(Vec<Term>),
    /// Fixed-arity sequence
    Tuple(Vec<Term>),
    /// Insertion-ordered key/value pairs; never re-sorted, duplicates kept
    Map(Vec<(Term, Term)>),
}

impl Term {
    /// True for `Nil` and for a `List` with no elements, which share one
    /// wire form.
    pub fn is_empty_list(&self) -> bool {
        match self {
            Term::Nil => true,
            Term::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Int(value)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Int(value as i64)
    }
}

impl From<u32> for Term {
    fn from(value: u32) -> Self {
        Term::Int(value as i64)
    }
}

impl From<u8> for Term {
    fn from(value: u8) -> Self {
        Term::Int(value as i64)
    }
}

impl From<u64> for Term {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Term::Int(v),
            Err(_) => Term::Big(BigNumber::from_u64(value)),
        }
    }
}

impl From<BigNumber> for Term {
    fn from(value: BigNumber) -> Self {
        match value.to_i64() {
            Some(v) => Term::Int(v),
            None => Term::Big(value),
        }
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Str(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Str(value)
    }
}

impl From<Vec<u8>> for Term {
    fn from(value: Vec<u8>) -> Self {
        Term::Binary(value)
    }
}

impl From<&[u8]> for Term {
    fn from(value: &[u8]) -> Self {
        Term::Binary(value.to_vec())
    }
}

impl From<Vec<Term>> for Term {
    fn from(value: Vec<Term>) -> Self {
        Term::List(value)
    }
}
