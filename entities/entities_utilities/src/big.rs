//! Big Number Operations
//!
//! Arbitrary precision integers for term values that fall outside the
//! fixed-width integer range.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic and exposes only the operations the term codec needs:
//! construction, narrowing back to machine integers, sign/zero tests, and
//! the arithmetic used by positional base-256 conversion.

use malachite::Integer;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Parse a big number from a decimal string
    ///
    /// Returns None if the string is not a valid decimal integer.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        s.parse::<Integer>().ok().map(|value| Self { value })
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range.
    pub fn to_i64(&self) -> Option<i64> {
        let s = self.value.to_string();
        s.parse::<i64>().ok()
    }

    /// Check if the number is negative
    pub fn is_negative(&self) -> bool {
        self.value < Integer::from(0)
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == Integer::from(0)
    }

    /// Absolute value: |x|
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Negate: -x
    pub fn neg(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two big numbers: x / y, truncating toward zero
    ///
    /// Returns None if dividing by zero.
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }
}

impl std::fmt::Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
