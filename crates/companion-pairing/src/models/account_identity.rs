// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use base64::{engine::general_purpose, Engine as _};
use companion_binary::proto::AdvSignedDeviceIdentity;
use serde::{Deserialize, Serialize};

use crate::PairingError;

/// The trust record asserted by the primary device and countersigned by this device.
///
/// `details` holds the encoded device details. The device signature is only ever set once,
/// through [`AccountIdentity::countersign`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub details: Option<Box<[u8]>>,
    pub account_signature_key: Option<Box<[u8]>>,
    pub account_signature: Option<Box<[u8]>>,
    device_signature: Option<Box<[u8]>>,
}

impl AccountIdentity {
    pub fn new(
        details: impl Into<Box<[u8]>>,
        account_signature_key: impl Into<Box<[u8]>>,
        account_signature: impl Into<Box<[u8]>>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            account_signature_key: Some(account_signature_key.into()),
            account_signature: Some(account_signature.into()),
            device_signature: None,
        }
    }

    pub fn device_signature(&self) -> Option<&[u8]> {
        self.device_signature.as_deref()
    }

    /// Attaches this device's signature. Fails if the record is already countersigned.
    pub fn countersign(self, device_signature: Box<[u8]>) -> Result<Self, PairingError> {
        if self.device_signature.is_some() {
            return Err(PairingError::AlreadyCountersigned);
        }

        Ok(Self {
            device_signature: Some(device_signature),
            ..self
        })
    }
}

impl From<AdvSignedDeviceIdentity> for AccountIdentity {
    fn from(value: AdvSignedDeviceIdentity) -> Self {
        Self {
            details: value.details.map(Vec::into_boxed_slice),
            account_signature_key: value.account_signature_key.map(Vec::into_boxed_slice),
            account_signature: value.account_signature.map(Vec::into_boxed_slice),
            device_signature: value.device_signature.map(Vec::into_boxed_slice),
        }
    }
}

impl From<&AccountIdentity> for AdvSignedDeviceIdentity {
    fn from(value: &AccountIdentity) -> Self {
        Self {
            details: value.details.as_deref().map(<[u8]>::to_vec),
            account_signature_key: value.account_signature_key.as_deref().map(<[u8]>::to_vec),
            account_signature: value.account_signature.as_deref().map(<[u8]>::to_vec),
            device_signature: value.device_signature.as_deref().map(<[u8]>::to_vec),
        }
    }
}

impl Debug for AccountIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let b64 = |bytes: &Option<Box<[u8]>>| {
            bytes
                .as_deref()
                .map(|bytes| general_purpose::STANDARD.encode(bytes))
        };

        f.debug_struct("AccountIdentity")
            .field("details", &b64(&self.details))
            .field("account_signature_key", &b64(&self.account_signature_key))
            .field("account_signature", &b64(&self.account_signature))
            .field("device_signature", &b64(&self.device_signature))
            .finish()
    }
}
