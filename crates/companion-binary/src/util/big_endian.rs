// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Width used for registration ids when no explicit width is requested.
pub const DEFAULT_BIG_ENDIAN_WIDTH: usize = 4;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
#[error("Value {value} does not fit into {width} big-endian bytes")]
pub struct ValueOutOfRange {
    pub value: u64,
    pub width: usize,
}

/// Encodes `value` into exactly `width` bytes, most significant byte first and zero-padded
/// on the left.
pub fn encode_big_endian(value: u64, width: usize) -> Result<Vec<u8>, ValueOutOfRange> {
    let bytes = value.to_be_bytes();
    let significant = bytes.len() - bytes.iter().take_while(|b| **b == 0).count();

    if significant > width {
        return Err(ValueOutOfRange { value, width });
    }

    let mut encoded = vec![0u8; width];
    encoded[width - significant..].copy_from_slice(&bytes[bytes.len() - significant..]);
    Ok(encoded)
}
