// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use big_endian::{encode_big_endian, ValueOutOfRange, DEFAULT_BIG_ENDIAN_WIDTH};
pub use parse_error::ParseError;

mod big_endian;
mod parse_error;
