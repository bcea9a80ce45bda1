// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use base64::{engine::general_purpose, Engine as _};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use x25519_dalek::StaticSecret;

use crate::crypto::{self, KeyError, KEY_LENGTH};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(Box<[u8]>);

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivateKey(Box<[u8]>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedPreKeyId(u32);

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedKeyPair {
    pub key_id: SignedPreKeyId,
    pub key_pair: KeyPair,
    pub signature: Box<[u8]>,
}

/// The key material a companion announces when registering.
#[derive(Clone, Debug)]
pub struct KeyMaterial {
    pub registration_id: u32,
    pub signed_identity_key: KeyPair,
    pub signed_pre_key: SignedKeyPair,
}

impl KeyPair {
    /// Generates a fresh Curve25519 key pair.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut private_key = [0u8; KEY_LENGTH];
        rng.fill_bytes(&mut private_key);
        let public_key = x25519_dalek::PublicKey::from(&StaticSecret::from(private_key));

        Self {
            public: PublicKey::from(public_key.as_bytes().as_slice()),
            private: PrivateKey::from(private_key.as_slice()),
        }
    }

    pub fn sign<R: RngCore + CryptoRng + ?Sized>(
        &self,
        message: &[&[u8]],
        rng: &mut R,
    ) -> Result<Box<[u8]>, KeyError> {
        Ok(Box::new(crypto::sign(self.private.as_ref(), message, rng)?))
    }
}

impl SignedKeyPair {
    /// Generates a pre-key and signs its public part with `identity_key`.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        identity_key: &KeyPair,
        key_id: SignedPreKeyId,
        rng: &mut R,
    ) -> Result<Self, KeyError> {
        let key_pair = KeyPair::generate(rng);
        let mut message = vec![crypto::DJB_KEY_TYPE];
        message.extend_from_slice(key_pair.public.as_ref());
        let signature = identity_key.sign(&[message.as_slice()], rng)?;

        Ok(Self {
            key_id,
            key_pair,
            signature,
        })
    }
}

impl From<&[u8]> for PublicKey {
    fn from(value: &[u8]) -> Self {
        Self(value.into())
    }
}

impl From<&[u8]> for PrivateKey {
    fn from(value: &[u8]) -> Self {
        Self(value.into())
    }
}

impl From<Vec<u8>> for PublicKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<u32> for SignedPreKeyId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl SignedPreKeyId {
    pub fn into_inner(self) -> u32 {
        self.0
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PublicKey({})",
            general_purpose::STANDARD.encode(self.0.as_ref())
        )
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey(<{} bytes>)", self.0.len())
    }
}

impl Debug for SignedKeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedKeyPair")
            .field("key_id", &self.key_id)
            .field("key_pair", &self.key_pair)
            .field(
                "signature",
                &general_purpose::STANDARD.encode(&self.signature),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;

    use super::*;

    #[test]
    fn test_signed_pre_key_verifies_against_identity() {
        let identity = KeyPair::generate(&mut OsRng);
        let pre_key = SignedKeyPair::generate(&identity, 7.into(), &mut OsRng).unwrap();

        assert_eq!(pre_key.key_pair.public.as_ref().len(), KEY_LENGTH);
        assert!(crypto::verify(
            identity.public.as_ref(),
            &[&[crypto::DJB_KEY_TYPE][..], pre_key.key_pair.public.as_ref()],
            &pre_key.signature,
        ));
    }

    #[test]
    fn test_private_key_is_not_printed() {
        let key_pair = KeyPair::generate(&mut OsRng);
        let printed = format!("{:?}", key_pair.private);
        assert_eq!(printed, "PrivateKey(<32 bytes>)");
    }
}
