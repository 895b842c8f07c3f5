//! Wire Tag Constants
//!
//! Tag byte values of the external term format, as fixed by the Erlang
//! distribution protocol.

/// Small integer (0-255)
pub const ERL_SMALL_INTEGER_EXT: u8 = 97;

/// Integer (32-bit signed, big-endian)
pub const ERL_INTEGER_EXT: u8 = 98;

/// Float (legacy format, 31-byte ASCII; decode-only)
pub const ERL_FLOAT_EXT: u8 = 99;

/// New float (IEEE 754 double, 8 bytes big-endian)
pub const NEW_FLOAT_EXT: u8 = 70;

/// Atom (2-byte length, Latin1)
pub const ERL_ATOM_EXT: u8 = 100;

/// Small atom (1-byte length, Latin1; decode-only)
pub const ERL_SMALL_ATOM_EXT: u8 = 115;

/// Atom UTF-8 (2-byte length; decode-only)
pub const ERL_ATOM_UTF8_EXT: u8 = 118;

/// Small atom UTF-8 (1-byte length; decode-only)
pub const ERL_SMALL_ATOM_UTF8_EXT: u8 = 119;

/// Nil (empty list)
pub const ERL_NIL_EXT: u8 = 106;

/// String (legacy character list, 2-byte length + raw bytes; decode-only)
pub const ERL_STRING_EXT: u8 = 107;

/// List (4-byte count + elements + tail)
pub const ERL_LIST_EXT: u8 = 108;

/// Binary (4-byte length + raw bytes)
pub const ERL_BINARY_EXT: u8 = 109;

/// Small big integer (1-byte digit count)
pub const ERL_SMALL_BIG_EXT: u8 = 110;

/// Large big integer (4-byte digit count)
pub const ERL_LARGE_BIG_EXT: u8 = 111;

/// Small tuple (1-byte arity)
pub const ERL_SMALL_TUPLE_EXT: u8 = 104;

/// Large tuple (4-byte arity)
pub const ERL_LARGE_TUPLE_EXT: u8 = 105;

/// Map (4-byte pair count)
pub const ERL_MAP_EXT: u8 = 116;

/// Maximum characters per atom
pub const MAX_ATOM_CHARACTERS: usize = 255;

/// Maximum bytes per atom
pub const MAX_ATOM_SZ_LIMIT: usize = 1024;
