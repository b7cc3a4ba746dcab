// FT8 frame dimensions. All of these are fixed by the protocol.

/// Application payload, 72 bits
pub const PAYLOAD_BITS: usize = 72;
pub const PAYLOAD_BYTES: usize = PAYLOAD_BITS / 8;

/// Message type field (i3)
pub const I3_BITS: usize = 3;

/// CRC-12 checksum
pub const CRC_BITS: usize = 12;

/// LDPC (174,87) code dimensions
pub const LDPC_N: usize = 174;
pub const LDPC_K: usize = 87;
pub const LDPC_M: usize = LDPC_N - LDPC_K;
pub const LDPC_N_BYTES: usize = (LDPC_N + 7) / 8;
pub const LDPC_K_BYTES: usize = (LDPC_K + 7) / 8;

/// Offset of the checksum field within the information word
pub const CRC_OFFSET: usize = PAYLOAD_BITS + I3_BITS;

/// Number of leading information word bits covered by the checksum.
/// This is the 88-bit padded word minus the checksum bits.
pub const CRC_COVERED_BITS: usize = LDPC_K_BYTES * 8 - CRC_BITS;

/// Bits carried by one 8-FSK tone
pub const BITS_PER_TONE: usize = 3;

/// Costas sync block length
pub const COSTAS_LEN: usize = 7;
/// Number of data symbols
pub const FT8_ND: usize = LDPC_N / BITS_PER_TONE;
/// Number of data symbols in each of the two data blocks
pub const FT8_ND_HALF: usize = FT8_ND / 2;
/// Number of sync symbols
pub const FT8_NS: usize = 3 * COSTAS_LEN;
/// Total number of channel symbols
pub const FT8_NN: usize = FT8_NS + FT8_ND;

/// 72-bit payload, packed MSB first
pub type Payload = [u8; PAYLOAD_BYTES];

/// 87-bit information word (payload, i3, checksum), packed MSB first; the last bit of the last byte is padding
pub type InfoWord = [u8; LDPC_K_BYTES];

/// 174-bit LDPC codeword, packed MSB first; the last two bits of the last byte are padding
pub type Codeword = [u8; LDPC_N_BYTES];

/// Channel symbols, each a tone index in 0..=7
pub type ToneSeq = [u8; FT8_NN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dimensions() {
        assert_eq!(PAYLOAD_BYTES, 9);
        assert_eq!(LDPC_K_BYTES, 11);
        assert_eq!(LDPC_N_BYTES, 22);
        assert_eq!(PAYLOAD_BITS + I3_BITS + CRC_BITS, LDPC_K);
        assert_eq!(CRC_COVERED_BITS, 76);
        assert_eq!(FT8_ND, 58);
        assert_eq!(FT8_NN, 79);
        assert_eq!(FT8_ND * BITS_PER_TONE, LDPC_N);
    }
}
