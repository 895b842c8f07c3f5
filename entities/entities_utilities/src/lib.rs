//! Entities Layer: Utilities
//!
//! Arbitrary precision integer support for the external term format codec.

pub mod big;

pub use big::BigNumber;
