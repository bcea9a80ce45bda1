// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use codec::{
    decode_device_identity, decode_signed_device_identity, decode_signed_device_identity_hmac,
    encode_signed_device_identity,
};

mod codec;
