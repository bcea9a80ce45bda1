// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#![allow(dead_code)]

use base64::{engine::general_purpose, Engine as _};
use companion_binary::proto::{
    AdvDeviceIdentity, AdvEncryptionType, AdvSignedDeviceIdentity, AdvSignedDeviceIdentityHmac,
};
use companion_binary::Node;
use companion_pairing::crypto::{hmac_sign, sign};
use companion_pairing::models::{AuthCredentials, KeyPair, SignalIdentity};
use prost::Message;
use rand::rngs::OsRng;

pub const MSG_ID: &str = "pair-1";
pub const JID: &str = "491701234567:7@s.whatsapp.net";
pub const LID: &str = "102030405060:7@lid";

/// Plays the primary device: owns the account key and the secret shared via QR code.
pub struct PairingFixture {
    pub adv_secret: Vec<u8>,
    pub account_key: KeyPair,
    pub identity_key: KeyPair,
    pub device_type: AdvEncryptionType,
    pub account_type: AdvEncryptionType,
    pub key_index: Option<u32>,
}

impl PairingFixture {
    pub fn new() -> Self {
        Self {
            adv_secret: (0u8..32).collect(),
            account_key: KeyPair::generate(&mut OsRng),
            identity_key: KeyPair::generate(&mut OsRng),
            device_type: AdvEncryptionType::E2ee,
            account_type: AdvEncryptionType::E2ee,
            key_index: Some(3),
        }
    }

    pub fn hosted() -> Self {
        Self {
            device_type: AdvEncryptionType::Hosted,
            account_type: AdvEncryptionType::Hosted,
            ..Self::new()
        }
    }

    pub fn credentials(&self) -> AuthCredentials {
        let mut credentials = AuthCredentials::new(
            general_purpose::STANDARD.encode(&self.adv_secret),
            self.identity_key.clone(),
        );
        credentials.signal_identities =
            vec![SignalIdentity::new("111@s.whatsapp.net", &[1u8; 32]).unwrap()];
        credentials
    }

    pub fn device_details(&self) -> Vec<u8> {
        AdvDeviceIdentity {
            raw_id: Some(1234),
            timestamp: Some(1_700_000_000),
            key_index: self.key_index,
            account_type: Some(self.account_type as i32),
            device_type: Some(self.device_type as i32),
        }
        .encode_to_vec()
    }

    pub fn account_signature_prefix(&self) -> &'static [u8] {
        match self.device_type {
            AdvEncryptionType::E2ee => &[0x06, 0x00],
            AdvEncryptionType::Hosted => &[0x06, 0x05],
        }
    }

    /// Signs `prefix || details || identity` with the account key.
    pub fn sign_account(&self, prefix: &[u8], details: &[u8], identity: &[u8]) -> Vec<u8> {
        sign(
            self.account_key.private.as_ref(),
            &[prefix, details, identity],
            &mut OsRng,
        )
        .unwrap()
        .to_vec()
    }

    pub fn account(&self) -> AdvSignedDeviceIdentity {
        let details = self.device_details();
        let account_signature = self.sign_account(
            self.account_signature_prefix(),
            &details,
            self.identity_key.public.as_ref(),
        );

        AdvSignedDeviceIdentity {
            details: Some(details),
            account_signature_key: Some(self.account_key.public.as_ref().to_vec()),
            account_signature: Some(account_signature),
            device_signature: None,
        }
    }

    /// Wraps `account` into an envelope with a valid HMAC.
    pub fn envelope(&self, account: &AdvSignedDeviceIdentity) -> AdvSignedDeviceIdentityHmac {
        self.envelope_for_details(account.encode_to_vec())
    }

    pub fn envelope_for_details(&self, details: Vec<u8>) -> AdvSignedDeviceIdentityHmac {
        let prefix: &[u8] = match self.account_type {
            AdvEncryptionType::E2ee => &[],
            AdvEncryptionType::Hosted => &[0x06, 0x05],
        };
        let hmac = hmac_sign(&self.adv_secret, &[prefix, &details]);

        AdvSignedDeviceIdentityHmac {
            details: Some(details),
            hmac: Some(hmac),
            account_type: Some(self.account_type as i32),
        }
    }

    pub fn stanza(&self) -> Node {
        self.stanza_with_envelope(&self.envelope(&self.account()))
    }

    pub fn stanza_with_envelope(&self, envelope: &AdvSignedDeviceIdentityHmac) -> Node {
        stanza(
            Some(envelope.encode_to_vec()),
            Some(JID),
            Some(LID),
            Some("Acme Corp"),
            Some("smbi"),
        )
    }
}

pub fn stanza(
    device_identity: Option<Vec<u8>>,
    jid: Option<&str>,
    lid: Option<&str>,
    biz_name: Option<&str>,
    platform: Option<&str>,
) -> Node {
    let mut pair_success = Node::builder("pair-success");

    if let Some(device_identity) = device_identity {
        pair_success = pair_success.append(Node::builder("device-identity").bytes(device_identity));
    }
    if let Some(platform) = platform {
        pair_success = pair_success.append(Node::builder("platform").attr("name", platform));
    }
    if let Some(jid) = jid {
        pair_success =
            pair_success.append(Node::builder("device").attr("jid", jid).attr_opt("lid", lid));
    }
    if let Some(biz_name) = biz_name {
        pair_success = pair_success.append(Node::builder("biz").attr("name", biz_name));
    }

    Node::builder("iq")
        .attr("from", "s.whatsapp.net")
        .attr("type", "set")
        .attr("id", MSG_ID)
        .append(pair_success)
        .build()
}
