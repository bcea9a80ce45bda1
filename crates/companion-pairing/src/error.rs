// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use companion_binary::{Node, ParseError, ValueOutOfRange};
use tracing::warn;

use crate::crypto::KeyError;

/// The record that was being decoded when a schema violation was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The HMAC-wrapped envelope carried by `device-identity`.
    Envelope,
    /// The account identity inside the envelope.
    Account,
    /// The device details inside the account identity.
    DeviceDetails,
}

#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    #[error("Malformed pairing stanza: {reason}")]
    MalformedStanza { reason: String, stanza: Box<Node> },
    #[error("Failed to decode {stage}: {source}")]
    MalformedEncoding {
        stage: DecodeStage,
        source: prost::DecodeError,
    },
    #[error("Invalid account signature: HMAC mismatch")]
    IntegrityMismatch,
    #[error("Missing account signature or account signature key")]
    MissingSignatureMaterial,
    #[error("Failed to verify account signature")]
    SignatureInvalid,
    #[error("Failed to create signal identity: {reason}")]
    IdentityCreationFailed { reason: String },
    #[error("Invalid account data for encoding: {reason}")]
    InvalidRecord { reason: &'static str },
    #[error("Account identity already carries a device signature")]
    AlreadyCountersigned,
    #[error(transparent)]
    ValueOutOfRange(#[from] ValueOutOfRange),
    #[error("Invalid user address: {0}")]
    InvalidAddress(#[from] ParseError),
    #[error("ADV secret key is not valid base64: {0}")]
    InvalidAdvSecret(#[from] base64::DecodeError),
    #[error(transparent)]
    InvalidKey(#[from] KeyError),
}

impl PairingError {
    pub(crate) fn malformed_stanza(reason: impl Into<String>, stanza: &Node) -> Self {
        Self::MalformedStanza {
            reason: reason.into(),
            stanza: Box::new(stanza.clone()),
        }
    }

    pub(crate) fn decoding(stage: DecodeStage) -> impl FnOnce(prost::DecodeError) -> Self {
        move |source| {
            warn!("Failed to decode {stage}: {source}");
            Self::MalformedEncoding { stage, source }
        }
    }
}

impl Display for DecodeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DecodeStage::Envelope => "device identity envelope",
            DecodeStage::Account => "account details",
            DecodeStage::DeviceDetails => "device details",
        })
    }
}
