// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use curve::{sign, verify, KeyError, DJB_KEY_TYPE, KEY_LENGTH, SIGNATURE_LENGTH};
pub use keyed_hash::{hmac_sign, hmac_verify};

mod curve;
mod keyed_hash;
