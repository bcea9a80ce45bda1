// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::models::{AccountIdentity, KeyPair, SignalIdentity};

/// The locally stored credential set of a companion device.
pub struct AuthCredentials {
    /// Base64 encoded secret shared with the primary device via the pairing QR code.
    pub adv_secret_key: SecretString,
    pub signed_identity_key: KeyPair,
    pub signal_identities: Vec<SignalIdentity>,
    pub account: Option<AccountIdentity>,
    pub me: Option<Me>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub id: String,
    pub name: Option<String>,
    pub lid: String,
}

/// The credential changes produced by a successful pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialUpdate {
    pub account: AccountIdentity,
    pub me: Me,
    /// The previous identities with the paired account's identity appended.
    pub signal_identities: Vec<SignalIdentity>,
    pub platform: String,
}

impl AuthCredentials {
    pub fn new(adv_secret_key: impl Into<String>, signed_identity_key: KeyPair) -> Self {
        Self {
            adv_secret_key: SecretString::new(adv_secret_key.into()),
            signed_identity_key,
            signal_identities: vec![],
            account: None,
            me: None,
            platform: None,
        }
    }
}

impl Debug for AuthCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("adv_secret_key", &"<redacted>")
            .field("signed_identity_key", &self.signed_identity_key)
            .field("signal_identities", &self.signal_identities)
            .field("account", &self.account)
            .field("me", &self.me)
            .field("platform", &self.platform)
            .finish()
    }
}

impl CredentialUpdate {
    pub fn apply_to(self, credentials: &mut AuthCredentials) {
        credentials.account = Some(self.account);
        credentials.me = Some(self.me);
        credentials.signal_identities = self.signal_identities;
        credentials.platform = Some(self.platform);
    }
}
