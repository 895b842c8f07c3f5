//! API Facades Layer
//!
//! Host-facing surface of the external term format codec. Callers use
//! `pack` and `unpack`; everything else is re-exported so this crate is the
//! only dependency a consumer needs.
//!
//! All facades call the underlying codec from the inner layers; there is no
//! logic here beyond shaping the return values.

pub mod codec_facades;

pub use codec_facades::{pack, unpack, unpack_prefix};

pub use entities_term::{Term, TextEncoding};
pub use entities_utilities::BigNumber;
pub use infrastructure_term_codec::{DecodeError, EncodeError, UnpackOptions};
