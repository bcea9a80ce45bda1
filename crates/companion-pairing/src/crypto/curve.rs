// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! XEdDSA signatures over Curve25519 keys.
//!
//! Keys are plain X25519 keys: a 32-byte private scalar and the 32-byte Montgomery
//! u-coordinate as public key. The sign of the corresponding Edwards point travels in the
//! most significant bit of the signature so that verifiers can recover it.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::{clamp_integer, Scalar};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

pub const KEY_LENGTH: usize = 32;
pub const SIGNATURE_LENGTH: usize = 64;
/// Type byte that prefixes serialized Curve25519 public keys.
pub const DJB_KEY_TYPE: u8 = 0x05;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum KeyError {
    #[error("Invalid key length {0}, expected {KEY_LENGTH} bytes")]
    InvalidLength(usize),
}

/// Accepts both raw 32-byte keys and keys carrying the `0x05` type prefix.
pub(crate) fn djb_key_bytes(key: &[u8]) -> Result<[u8; KEY_LENGTH], KeyError> {
    let raw = match key {
        [DJB_KEY_TYPE, rest @ ..] if rest.len() == KEY_LENGTH => rest,
        _ => key,
    };
    raw.try_into().map_err(|_| KeyError::InvalidLength(key.len()))
}

/// Signs the concatenation of `message` with `private_key`.
pub fn sign<R: RngCore + CryptoRng + ?Sized>(
    private_key: &[u8],
    message: &[&[u8]],
    rng: &mut R,
) -> Result<[u8; SIGNATURE_LENGTH], KeyError> {
    let private_key: [u8; KEY_LENGTH] = private_key
        .try_into()
        .map_err(|_| KeyError::InvalidLength(private_key.len()))?;

    let key_data = clamp_integer(private_key);
    let a = Scalar::from_bytes_mod_order(key_data);
    let ed_public_key = EdwardsPoint::mul_base(&a).compress();
    let sign_bit = ed_public_key.as_bytes()[31] & 0b1000_0000;

    let mut random_bytes = [0u8; 64];
    rng.fill_bytes(&mut random_bytes);

    let mut nonce_hash = Sha512::new();
    nonce_hash.update([0xffu8; 32]);
    nonce_hash.update(key_data);
    for part in message {
        nonce_hash.update(part);
    }
    nonce_hash.update(random_bytes);

    let r = Scalar::from_hash(nonce_hash);
    let cap_r = EdwardsPoint::mul_base(&r).compress();

    let mut hash = Sha512::new();
    hash.update(cap_r.as_bytes());
    hash.update(ed_public_key.as_bytes());
    for part in message {
        hash.update(part);
    }

    let h = Scalar::from_hash(hash);
    let s = h * a + r;

    let mut signature = [0u8; SIGNATURE_LENGTH];
    signature[..32].copy_from_slice(cap_r.as_bytes());
    signature[32..].copy_from_slice(s.as_bytes());
    signature[SIGNATURE_LENGTH - 1] &= 0b0111_1111;
    signature[SIGNATURE_LENGTH - 1] |= sign_bit;
    Ok(signature)
}

/// Verifies `signature` over the concatenation of `message`. Malformed keys or signatures
/// never verify.
pub fn verify(public_key: &[u8], message: &[&[u8]], signature: &[u8]) -> bool {
    let Ok(public_key) = djb_key_bytes(public_key) else {
        return false;
    };
    let Ok(signature) = <[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
        return false;
    };

    let sign_bit = (signature[SIGNATURE_LENGTH - 1] & 0b1000_0000) >> 7;
    let Some(ed_public_key_point) = MontgomeryPoint(public_key).to_edwards(sign_bit) else {
        return false;
    };
    let cap_a = ed_public_key_point.compress();

    let mut cap_r = [0u8; 32];
    cap_r.copy_from_slice(&signature[..32]);
    let mut s = [0u8; 32];
    s.copy_from_slice(&signature[32..]);
    s[31] &= 0b0111_1111;
    if s[31] & 0b1110_0000 != 0 {
        return false;
    }

    let mut hash = Sha512::new();
    hash.update(cap_r);
    hash.update(cap_a.as_bytes());
    for part in message {
        hash.update(part);
    }
    let h = Scalar::from_hash(hash);

    let cap_r_check = EdwardsPoint::vartime_double_scalar_mul_basepoint(
        &h,
        &(-ed_public_key_point),
        &Scalar::from_bytes_mod_order(s),
    )
    .compress();

    cap_r_check.as_bytes()[..].ct_eq(&cap_r[..]).into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::OsRng;
    use x25519_dalek::{PublicKey, StaticSecret};

    use super::*;

    fn key_pair() -> ([u8; 32], [u8; 32]) {
        let mut private_key = [0u8; 32];
        OsRng.fill_bytes(&mut private_key);
        let public_key = PublicKey::from(&StaticSecret::from(private_key));
        (private_key, public_key.to_bytes())
    }

    #[test]
    fn test_sign_and_verify() {
        for _ in 0..8 {
            let (private_key, public_key) = key_pair();
            let signature = sign(&private_key, &[b"hello ", b"world"], &mut OsRng).unwrap();

            assert!(verify(&public_key, &[b"hello world"], &signature));

            let mut prefixed = vec![DJB_KEY_TYPE];
            prefixed.extend_from_slice(&public_key);
            assert!(verify(&prefixed, &[b"hello", b" world"], &signature));
        }
    }

    // Identity key and signature over a serialized pre-key, as produced by libsignal.
    const PRIVATE_KEY: [u8; 32] = [
        0xc0, 0x97, 0x24, 0x84, 0x12, 0xe5, 0x8b, 0xf0, 0x5d, 0xf4, 0x87, 0x96, 0x82, 0x05, 0x13,
        0x27, 0x94, 0x17, 0x8e, 0x36, 0x76, 0x37, 0xf5, 0x81, 0x8f, 0x81, 0xe0, 0xe6, 0xce, 0x73,
        0xe8, 0x65,
    ];
    const PUBLIC_KEY: [u8; 32] = [
        0xab, 0x7e, 0x71, 0x7d, 0x4a, 0x16, 0x3b, 0x7d, 0x9a, 0x1d, 0x80, 0x71, 0xdf, 0xe9, 0xdc,
        0xf8, 0xcd, 0xcd, 0x1c, 0xea, 0x33, 0x39, 0xb6, 0x35, 0x6b, 0xe8, 0x4d, 0x88, 0x7e, 0x32,
        0x2c, 0x64,
    ];
    const MESSAGE: [u8; 33] = [
        0x05, 0xed, 0xce, 0x9d, 0x9c, 0x41, 0x5c, 0xa7, 0x8c, 0xb7, 0x25, 0x2e, 0x72, 0xc2, 0xc4,
        0xa5, 0x54, 0xd3, 0xeb, 0x29, 0x48, 0x5a, 0x0e, 0x1d, 0x50, 0x31, 0x18, 0xd1, 0xa8, 0x2d,
        0x99, 0xfb, 0x4a,
    ];
    const SIGNATURE: [u8; 64] = [
        0x5d, 0xe8, 0x8c, 0xa9, 0xa8, 0x9b, 0x4a, 0x11, 0x5d, 0xa7, 0x91, 0x09, 0xc6, 0x7c, 0x9c,
        0x74, 0x64, 0xa3, 0xe4, 0x18, 0x02, 0x74, 0xf1, 0xcb, 0x8c, 0x63, 0xc2, 0x98, 0x4e, 0x28,
        0x6d, 0xfb, 0xed, 0xe8, 0x2d, 0xeb, 0x9d, 0xcd, 0x9f, 0xae, 0x0b, 0xfb, 0xb8, 0x21, 0x56,
        0x9b, 0x3d, 0x90, 0x01, 0xbd, 0x81, 0x30, 0xcd, 0x11, 0xd4, 0x86, 0xce, 0xf0, 0x47, 0xbd,
        0x60, 0xb8, 0x6e, 0x88,
    ];

    #[test]
    fn test_verifies_known_signature() {
        let public_key = PublicKey::from(&StaticSecret::from(PRIVATE_KEY));
        assert_eq!(public_key.to_bytes(), PUBLIC_KEY);

        assert!(verify(&PUBLIC_KEY, &[&MESSAGE], &SIGNATURE));
        assert!(verify(&PUBLIC_KEY, &[&MESSAGE[..1], &MESSAGE[1..]], &SIGNATURE));

        let mut flipped = SIGNATURE;
        flipped[40] ^= 0x01;
        assert!(!verify(&PUBLIC_KEY, &[&MESSAGE], &flipped));
        assert!(!verify(&PUBLIC_KEY, &[&MESSAGE[1..]], &SIGNATURE));
    }

    #[test]
    fn test_signatures_from_known_key_verify() {
        let signature = sign(&PRIVATE_KEY, &[&MESSAGE], &mut OsRng).unwrap();
        assert!(verify(&PUBLIC_KEY, &[&MESSAGE], &signature));
    }

    #[test]
    fn test_rejects_tampering() {
        let (private_key, public_key) = key_pair();
        let (_, other_public_key) = key_pair();
        let signature = sign(&private_key, &[b"message"], &mut OsRng).unwrap();

        assert!(!verify(&public_key, &[b"messagE"], &signature));
        assert!(!verify(&other_public_key, &[b"message"], &signature));

        let mut flipped = signature;
        flipped[10] ^= 0x04;
        assert!(!verify(&public_key, &[b"message"], &flipped));
        assert!(!verify(&public_key, &[b"message"], &signature[..63]));
    }

    #[test]
    fn test_rejects_invalid_key_lengths() {
        assert_eq!(
            sign(&[0u8; 31], &[b"message"], &mut OsRng),
            Err(KeyError::InvalidLength(31))
        );
        assert_eq!(djb_key_bytes(&[1u8; 33]), Err(KeyError::InvalidLength(33)));
        assert!(!verify(&[0u8; 12], &[b"message"], &[0u8; 64]));
    }
}
