// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use companion_binary::proto::{
    AdvDeviceIdentity, AdvSignedDeviceIdentity, AdvSignedDeviceIdentityHmac,
};
use prost::{DecodeError, Message};

use crate::models::AccountIdentity;
use crate::PairingError;

/// Encodes `identity` into its binary record form.
///
/// With `include_signature_key` unset the account signature key is left out of the output.
/// `identity` itself is never modified.
pub fn encode_signed_device_identity(
    identity: &AccountIdentity,
    include_signature_key: bool,
) -> Result<Vec<u8>, PairingError> {
    let mut record = AdvSignedDeviceIdentity::from(identity);

    if !include_signature_key {
        record.account_signature_key = None;
    }

    if record.details.is_none() {
        return Err(PairingError::InvalidRecord {
            reason: "missing details",
        });
    }
    if record.account_signature.is_none() {
        return Err(PairingError::InvalidRecord {
            reason: "missing account signature",
        });
    }

    Ok(record.encode_to_vec())
}

pub fn decode_signed_device_identity_hmac(
    bytes: &[u8],
) -> Result<AdvSignedDeviceIdentityHmac, DecodeError> {
    AdvSignedDeviceIdentityHmac::decode(bytes)
}

pub fn decode_signed_device_identity(bytes: &[u8]) -> Result<AccountIdentity, DecodeError> {
    AdvSignedDeviceIdentity::decode(bytes).map(AccountIdentity::from)
}

pub fn decode_device_identity(bytes: &[u8]) -> Result<AdvDeviceIdentity, DecodeError> {
    AdvDeviceIdentity::decode(bytes)
}
