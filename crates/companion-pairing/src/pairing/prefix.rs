// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Domain-separation prefixes mixed into the hashed and signed pairing messages.
//!
//! Every encryption type maps to exactly one prefix per purpose; a new variant of
//! `AdvEncryptionType` does not compile until its prefixes are defined here.

use companion_binary::proto::AdvEncryptionType;

const HOSTED: &[u8] = &[0x06, 0x05];
const ACCOUNT_SIGNATURE_E2EE: &[u8] = &[0x06, 0x00];

/// Leads the message this device countersigns.
pub(super) const DEVICE_SIGNATURE: &[u8] = &[0x06, 0x01];

/// Unknown wire values are treated like regular end-to-end encrypted accounts.
pub(super) fn encryption_type(value: Option<i32>) -> AdvEncryptionType {
    value
        .and_then(|value| AdvEncryptionType::try_from(value).ok())
        .unwrap_or(AdvEncryptionType::E2ee)
}

/// Prefix of the HMAC input, selected by the envelope's account type.
pub(super) fn hmac_prefix(account_type: AdvEncryptionType) -> &'static [u8] {
    match account_type {
        AdvEncryptionType::E2ee => &[],
        AdvEncryptionType::Hosted => HOSTED,
    }
}

/// Prefix of the message signed by the account key, selected by the device type.
pub(super) fn account_signature_prefix(device_type: AdvEncryptionType) -> &'static [u8] {
    match device_type {
        AdvEncryptionType::E2ee => ACCOUNT_SIGNATURE_E2EE,
        AdvEncryptionType::Hosted => HOSTED,
    }
}
