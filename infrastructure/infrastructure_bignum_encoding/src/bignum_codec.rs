//! Bignum Codec Module
//!
//! Sign + magnitude digit conversion for arbitrary precision integers.
//!
//! Magnitudes travel as base-256 digit sequences, least significant digit
//! first, with no superfluous leading zero digit. Zero is the empty digit
//! sequence with a non-negative sign.

use entities_utilities::BigNumber;

/// Sign of an encoded magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Non-negative magnitude (wire sign byte 0)
    Positive,
    /// Negative magnitude (wire sign byte 1)
    Negative,
}

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Split a value into sign and minimal little-endian base-256 digits
    ///
    /// Zero yields `(Sign::Positive, vec![])`.
    pub fn digits_from_magnitude(value: &BigNumber) -> (Sign, Vec<u8>) {
        let sign = if value.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        };

        let base = BigNumber::from_u64(256);
        let mut digits = Vec::new();
        let mut v = value.abs();
        while !v.is_zero() {
            // v is non-negative, base is 256: the quotient exists and the
            // remainder is a single digit
            let q = match v.div(&base) {
                Some(q) => q,
                None => break,
            };
            let r = v.minus(&q.times(&base));
            digits.push(r.to_i64().unwrap_or(0) as u8);
            v = q;
        }

        (sign, digits)
    }

    /// Rebuild a value from sign and little-endian base-256 digits
    ///
    /// Trailing zero digits are tolerated; they contribute nothing to the
    /// magnitude. An empty digit sequence is zero regardless of sign.
    pub fn magnitude_from_digits(sign: Sign, digits: &[u8]) -> BigNumber {
        let base = BigNumber::from_u64(256);
        let mut value = BigNumber::from_u64(0);
        let mut multiplier = BigNumber::from_u64(1);
        for &digit in digits {
            if digit != 0 {
                value = value.plus(&BigNumber::from_u64(digit as u64).times(&multiplier));
            }
            multiplier = multiplier.times(&base);
        }

        match sign {
            Sign::Negative => value.neg(),
            Sign::Positive => value,
        }
    }
}
