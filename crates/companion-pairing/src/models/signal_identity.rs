// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::crypto::{KeyError, DJB_KEY_TYPE, KEY_LENGTH};
use crate::models::PublicKey;
use crate::PairingError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolAddress {
    pub name: String,
    pub device_id: u32,
}

/// Binds a peer's address to its verified public signature key for later session setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalIdentity {
    pub identifier: ProtocolAddress,
    /// The peer's key, serialized with its type prefix.
    pub identifier_key: PublicKey,
}

impl SignalIdentity {
    pub fn new(jid: impl Into<String>, key: &[u8]) -> Result<Self, PairingError> {
        let identifier_key =
            signal_public_key(key).map_err(|err| PairingError::IdentityCreationFailed {
                reason: err.to_string(),
            })?;

        Ok(Self {
            identifier: ProtocolAddress {
                name: jid.into(),
                device_id: 0,
            },
            identifier_key,
        })
    }
}

/// Prefixes raw 32-byte keys with the key type, leaves already prefixed keys untouched.
fn signal_public_key(key: &[u8]) -> Result<PublicKey, KeyError> {
    match key.len() {
        KEY_LENGTH => {
            let mut prefixed = Vec::with_capacity(KEY_LENGTH + 1);
            prefixed.push(DJB_KEY_TYPE);
            prefixed.extend_from_slice(key);
            Ok(prefixed.into())
        }
        len if len == KEY_LENGTH + 1 && key[0] == DJB_KEY_TYPE => Ok(key.into()),
        len => Err(KeyError::InvalidLength(len)),
    }
}
