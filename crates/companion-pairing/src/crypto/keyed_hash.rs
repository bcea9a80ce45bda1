// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn keyed(key: &[u8], parts: &[&[u8]]) -> Option<HmacSha256> {
    // HMAC accepts keys of any length, so this only fails for exotic MAC types.
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key).ok()?;
    for part in parts {
        mac.update(part);
    }
    Some(mac)
}

/// Computes HMAC-SHA256 over the concatenation of `parts`.
pub fn hmac_sign(key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
    keyed(key, parts)
        .map(|mac| mac.finalize().into_bytes().to_vec())
        .unwrap_or_default()
}

/// Checks `expected` against HMAC-SHA256 over `parts` in constant time.
pub fn hmac_verify(key: &[u8], parts: &[&[u8]], expected: &[u8]) -> bool {
    keyed(key, parts).map_or(false, |mac| mac.verify_slice(expected).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verifies_concatenated_parts() {
        let key = b"secret";
        let tag = hmac_sign(key, &[b"ab", b"cd"]);

        assert_eq!(tag.len(), 32);
        assert!(hmac_verify(key, &[b"abcd"], &tag));
        assert!(hmac_verify(key, &[b"a", b"", b"bcd"], &tag));
    }

    #[test]
    fn test_rejects_modified_input() {
        let key = b"secret";
        let tag = hmac_sign(key, &[b"abcd"]);

        let mut flipped = tag.clone();
        flipped[7] ^= 0x01;

        assert!(!hmac_verify(key, &[b"abcd"], &flipped));
        assert!(!hmac_verify(key, &[b"abce"], &tag));
        assert!(!hmac_verify(b"other", &[b"abcd"], &tag));
        assert!(!hmac_verify(key, &[b"abcd"], &tag[..31]));
        assert!(!hmac_verify(key, &[b"abcd"], &[]));
    }
}
