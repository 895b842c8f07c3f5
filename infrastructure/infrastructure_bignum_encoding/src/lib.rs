//! Infrastructure Layer: Bignum Encoding
//!
//! Converts between arbitrary precision integers and the sign + base-256
//! little-endian magnitude digit form used by the big-integer wire tags.
//! The tag and length-prefix framing around the digits belongs to the term
//! codec; this crate only handles the digit sequence itself.

pub mod bignum_codec;

pub use bignum_codec::{BignumCodec, Sign};
