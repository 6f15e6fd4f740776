/// Expand bytes into bits, most-significant bit first.
///
/// Always yields exactly `8 * bytes.len()` bits, concatenated in byte order.
pub fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for j in (0..8).rev() {
            bits.push((byte >> j) & 1 == 1);
        }
    }
    bits
}

/// Pack bits back into bytes, most-significant bit first.
///
/// Inverse of [`unpack_bits`]. Only whole 8-bit groups are consumed; a
/// trailing partial byte is discarded, never zero-padded, so the output
/// covers `bits.len() / 8` bytes.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit))
        })
        .collect()
}
