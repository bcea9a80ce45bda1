// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use error::{DecodeStage, PairingError};
pub use identity::{
    decode_device_identity, decode_signed_device_identity, decode_signed_device_identity_hmac,
    encode_signed_device_identity,
};
pub use pairing::{
    configure_successful_pairing, verify_device_signature, PairingFinalizer, PairingOutcome,
};
pub use payload::{
    build_client_payload, build_login_payload, build_registration_payload, build_user_agent,
    encode_client_payload, select_web_sub_platform,
};

pub mod crypto;
mod error;
mod identity;
pub mod models;
mod pairing;
mod payload;
