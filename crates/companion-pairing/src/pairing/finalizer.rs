// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use base64::{engine::general_purpose, Engine as _};
use companion_binary::{Node, S_WHATSAPP_NET};
use prost::DecodeError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::ExposeSecret;
use tracing::{info, instrument, warn};

use crate::crypto;
use crate::identity::{
    decode_device_identity, decode_signed_device_identity, decode_signed_device_identity_hmac,
    encode_signed_device_identity,
};
use crate::models::{AccountIdentity, AuthCredentials, CredentialUpdate, Me, SignalIdentity};
use crate::pairing::prefix;
use crate::{DecodeStage, PairingError};

const DEFAULT_PLATFORM: &str = "macOS";

/// The result of a successful pairing: the credentials to persist and the stanza confirming
/// the pairing to the server.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingOutcome {
    pub credential_update: CredentialUpdate,
    pub reply: Node,
}

/// Verifies a `pair-success` stanza and countersigns the account identity it carries.
///
/// `R` supplies the nonce for the device signature. Apart from it a finalizer holds no
/// state between invocations. Every call either returns a complete outcome or an error, the
/// credentials passed in are never modified.
pub struct PairingFinalizer<R = OsRng> {
    rng: R,
}

struct PairSuccess<'a> {
    msg_id: &'a str,
    device_identity: &'a [u8],
    jid: &'a str,
    lid: Option<&'a str>,
    biz_name: Option<&'a str>,
    platform: Option<&'a str>,
}

impl<R: RngCore + CryptoRng> PairingFinalizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[instrument(skip_all, fields(id = stanza.attr("id")))]
    pub fn finalize(
        &mut self,
        stanza: &Node,
        credentials: &AuthCredentials,
    ) -> Result<PairingOutcome, PairingError> {
        let pair_success = parse_pair_success(stanza)?;
        let identity_key = &credentials.signed_identity_key;

        // Integrity of the envelope sent by the server.
        let envelope = decode_signed_device_identity_hmac(pair_success.device_identity)
            .map_err(PairingError::decoding(DecodeStage::Envelope))?;

        let adv_secret =
            general_purpose::STANDARD.decode(credentials.adv_secret_key.expose_secret())?;
        let hmac_prefix = prefix::hmac_prefix(prefix::encryption_type(envelope.account_type));

        let (Some(details), Some(hmac)) = (envelope.details.as_deref(), envelope.hmac.as_deref())
        else {
            warn!("Rejecting pair-success with incomplete device identity envelope");
            return Err(PairingError::IntegrityMismatch);
        };
        if !crypto::hmac_verify(&adv_secret, &[hmac_prefix, details], hmac) {
            warn!("Rejecting pair-success with mismatching HMAC");
            return Err(PairingError::IntegrityMismatch);
        }

        let account = decode_signed_device_identity(details)
            .map_err(PairingError::decoding(DecodeStage::Account))?;
        let device_details_bytes = account.details.as_deref().ok_or_else(|| {
            PairingError::MalformedEncoding {
                stage: DecodeStage::DeviceDetails,
                source: DecodeError::new("account identity carries no device details"),
            }
        })?;
        let device_details = decode_device_identity(device_details_bytes)
            .map_err(PairingError::decoding(DecodeStage::DeviceDetails))?;

        // The primary device's account key vouches for our identity key.
        let account_signature_prefix =
            prefix::account_signature_prefix(prefix::encryption_type(device_details.device_type));

        let (Some(account_signature_key), Some(account_signature)) = (
            account.account_signature_key.as_deref(),
            account.account_signature.as_deref(),
        ) else {
            warn!("Rejecting pair-success without account signature material");
            return Err(PairingError::MissingSignatureMaterial);
        };

        let account_message = [
            account_signature_prefix,
            device_details_bytes,
            identity_key.public.as_ref(),
        ];
        if !crypto::verify(account_signature_key, &account_message, account_signature) {
            warn!("Rejecting pair-success with invalid account signature");
            return Err(PairingError::SignatureInvalid);
        }

        // Our acceptance of the binding.
        let device_message = [
            prefix::DEVICE_SIGNATURE,
            device_details_bytes,
            identity_key.public.as_ref(),
            account_signature_key,
        ];
        let device_signature = identity_key.sign(&device_message, &mut self.rng)?;

        let identity = SignalIdentity::new(pair_success.jid, account_signature_key)?;
        let account = account.countersign(device_signature)?;

        let reply = build_reply(
            pair_success.msg_id,
            device_details.key_index.unwrap_or_default(),
            encode_signed_device_identity(&account, false)?,
        );

        let mut signal_identities = credentials.signal_identities.clone();
        signal_identities.push(identity);

        let credential_update = CredentialUpdate {
            account,
            me: Me {
                id: pair_success.jid.to_string(),
                name: pair_success.biz_name.map(ToString::to_string),
                lid: pair_success.lid.unwrap_or(pair_success.jid).to_string(),
            },
            signal_identities,
            platform: pair_success
                .platform
                .unwrap_or(DEFAULT_PLATFORM)
                .to_string(),
        };

        info!(
            jid = pair_success.jid,
            platform = %credential_update.platform,
            "Paired companion device"
        );

        Ok(PairingOutcome {
            credential_update,
            reply,
        })
    }
}

/// Finalizes a pairing using the operating system's random number generator.
pub fn configure_successful_pairing(
    stanza: &Node,
    credentials: &AuthCredentials,
) -> Result<PairingOutcome, PairingError> {
    PairingFinalizer::new(OsRng).finalize(stanza, credentials)
}

/// Checks the device signature of a countersigned account against the device's identity key.
pub fn verify_device_signature(account: &AccountIdentity, identity_public_key: &[u8]) -> bool {
    let (Some(details), Some(account_signature_key), Some(device_signature)) = (
        account.details.as_deref(),
        account.account_signature_key.as_deref(),
        account.device_signature(),
    ) else {
        return false;
    };

    crypto::verify(
        identity_public_key,
        &[
            prefix::DEVICE_SIGNATURE,
            details,
            identity_public_key,
            account_signature_key,
        ],
        device_signature,
    )
}

fn parse_pair_success(stanza: &Node) -> Result<PairSuccess<'_>, PairingError> {
    let malformed = |reason: &str| PairingError::malformed_stanza(reason, stanza);

    let msg_id = stanza
        .attr("id")
        .ok_or_else(|| malformed("missing stanza id"))?;
    let pair_success = stanza
        .child("pair-success")
        .ok_or_else(|| malformed("missing pair-success"))?;

    let (Some(device_identity_node), Some(device_node)) = (
        pair_success.child("device-identity"),
        pair_success.child("device"),
    ) else {
        return Err(malformed(
            "missing device-identity or device in pair-success",
        ));
    };

    let device_identity = device_identity_node
        .bytes()
        .ok_or_else(|| malformed("device-identity carries no binary content"))?;
    let jid = device_node
        .attr("jid")
        .ok_or_else(|| malformed("device is missing its jid"))?;

    Ok(PairSuccess {
        msg_id,
        device_identity,
        jid,
        lid: non_empty(device_node.attr("lid")),
        biz_name: non_empty(pair_success.child("biz").and_then(|biz| biz.attr("name"))),
        platform: non_empty(
            pair_success
                .child("platform")
                .and_then(|platform| platform.attr("name")),
        ),
    })
}

/// Empty optional attributes count as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn build_reply(msg_id: &str, key_index: u32, account_enc: Vec<u8>) -> Node {
    Node::builder("iq")
        .attr("to", S_WHATSAPP_NET)
        .attr("type", "result")
        .attr("id", msg_id)
        .append(
            Node::builder("pair-device-sign").append(
                Node::builder("device-identity")
                    .attr("key-index", key_index.to_string())
                    .bytes(account_enc),
            ),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use companion_binary::proto::{
        AdvDeviceIdentity, AdvSignedDeviceIdentity, AdvSignedDeviceIdentityHmac,
    };
    use pretty_assertions::assert_eq;
    use prost::Message;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;

    use crate::models::KeyPair;

    use super::*;

    fn pair_success(credentials: &AuthCredentials, account_key: &KeyPair) -> Node {
        let details = AdvDeviceIdentity {
            raw_id: Some(1),
            timestamp: Some(1_700_000_000),
            key_index: Some(1),
            account_type: None,
            device_type: None,
        }
        .encode_to_vec();

        let account_signature = account_key
            .sign(
                &[
                    [0x06, 0x00].as_slice(),
                    details.as_slice(),
                    credentials.signed_identity_key.public.as_ref(),
                ],
                &mut OsRng,
            )
            .unwrap();
        let account = AdvSignedDeviceIdentity {
            details: Some(details),
            account_signature_key: Some(account_key.public.as_ref().to_vec()),
            account_signature: Some(account_signature.to_vec()),
            device_signature: None,
        }
        .encode_to_vec();

        let adv_secret = general_purpose::STANDARD
            .decode(credentials.adv_secret_key.expose_secret())
            .unwrap();
        let envelope = AdvSignedDeviceIdentityHmac {
            hmac: Some(crypto::hmac_sign(&adv_secret, &[account.as_slice()])),
            details: Some(account),
            account_type: None,
        };

        Node::builder("iq")
            .attr("id", "1")
            .append(
                Node::builder("pair-success")
                    .append(Node::builder("device-identity").bytes(envelope.encode_to_vec()))
                    .append(Node::builder("device").attr("jid", "1234:2@s.whatsapp.net")),
            )
            .build()
    }

    #[test]
    fn test_finalize_is_deterministic_for_fixed_rng() {
        let credentials = AuthCredentials::new(
            general_purpose::STANDARD.encode([9u8; 32]),
            KeyPair::generate(&mut OsRng),
        );
        let account_key = KeyPair::generate(&mut OsRng);
        let stanza = pair_success(&credentials, &account_key);

        let first = PairingFinalizer::new(StdRng::seed_from_u64(42))
            .finalize(&stanza, &credentials)
            .unwrap();
        let second = PairingFinalizer::new(StdRng::seed_from_u64(42))
            .finalize(&stanza, &credentials)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.credential_update.platform, "macOS");
        assert_eq!(first.credential_update.me.lid, "1234:2@s.whatsapp.net");
        assert!(verify_device_signature(
            &first.credential_update.account,
            credentials.signed_identity_key.public.as_ref()
        ));
    }

    #[test]
    fn test_verify_device_signature_requires_countersigned_account() {
        let account = AccountIdentity::new(vec![1u8], vec![2u8; 32], vec![3u8; 64]);
        assert!(!verify_device_signature(&account, &[4u8; 32]));
    }
}
