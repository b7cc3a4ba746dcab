// Channel symbol layout: S7 D29 S7 D29 S7

use ft8_core::{
    BitBuffer, CodecErr, Codeword, ToneSeq, BITS_PER_TONE, COSTAS_LEN, FT8_ND_HALF, FT8_NN, LDPC_N, LDPC_N_BYTES,
};

/// Costas 7x7 tone pattern
pub const COSTAS_PATTERN: [u8; COSTAS_LEN] = [2, 5, 6, 0, 4, 1, 3];

/// First tone of each of the three sync blocks
pub const SYNC_OFFSETS: [usize; 3] = [0, 36, 72];

/// First tone of each of the two data blocks
pub const DATA_OFFSETS: [usize; 2] = [7, 43];

/// Highest valid 8-FSK tone index
pub const MAX_TONE: u8 = (1 << BITS_PER_TONE) - 1;

/// Maps a codeword onto the 79 channel symbols.
/// Data symbols take 3 consecutive codeword bits each, the first bit being the most significant.
pub fn codeword_to_tones(codeword: &Codeword) -> ToneSeq {
    let mut tones = [0u8; FT8_NN];
    for offset in SYNC_OFFSETS {
        tones[offset..offset + COSTAS_LEN].copy_from_slice(&COSTAS_PATTERN);
    }

    let codeword = BitBuffer::<LDPC_N_BYTES>::from_bytes(codeword, LDPC_N);
    let mut bit = 0;
    for offset in DATA_OFFSETS {
        for tone in tones[offset..offset + FT8_ND_HALF].iter_mut() {
            *tone = codeword.bits_at(bit, BITS_PER_TONE) as u8;
            bit += BITS_PER_TONE;
        }
    }
    tones
}

/// Inverse of codeword_to_tones for a noiseless tone sequence.
/// Fails on out-of-range tones and on any sync symbol that deviates from the Costas pattern.
pub fn tones_to_codeword(tones: &ToneSeq) -> Result<Codeword, CodecErr> {
    if let Some(&tone) = tones.iter().find(|&&t| t > MAX_TONE) {
        return Err(CodecErr::InvalidValue { field: "tone", value: tone as u64 });
    }

    for offset in SYNC_OFFSETS {
        for (i, &expected) in COSTAS_PATTERN.iter().enumerate() {
            let found = tones[offset + i];
            if found != expected {
                return Err(CodecErr::SyncMismatch { offset: offset + i, expected, found });
            }
        }
    }

    let mut codeword = BitBuffer::<LDPC_N_BYTES>::new(LDPC_N);
    for offset in DATA_OFFSETS {
        for &tone in tones[offset..offset + FT8_ND_HALF].iter() {
            codeword.write_bits(tone as u64, BITS_PER_TONE);
        }
    }
    Ok(codeword.into_bytes())
}

/// Tone sequence as a string of digits, e.g. for logging
pub fn tones_to_digits(tones: &[u8]) -> String {
    tones.iter().map(|&t| char::from(b'0' + t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ_CODEWORD: Codeword = [
        0x9f, 0x00, 0x8f, 0xdd, 0xcf, 0x05, 0x95, 0x3e, 0xd0, 0x37, 0x98, 0x02, 0x46, 0x8a, 0xcf, 0x13, 0x57, 0x9b,
        0xde, 0x20, 0x6b, 0x98,
    ];
    const SEQ_TONES: &str = "2560413476002176734740545237320157142560413002215053170465363367420153462560413";

    #[test]
    fn test_zero_codeword() {
        let tones = codeword_to_tones(&[0u8; LDPC_N_BYTES]);
        assert_eq!(
            tones_to_digits(&tones),
            "2560413000000000000000000000000000002560413000000000000000000000000000002560413"
        );
    }

    #[test]
    fn test_known_codeword() {
        let tones = codeword_to_tones(&SEQ_CODEWORD);
        assert_eq!(tones_to_digits(&tones), SEQ_TONES);
        assert_eq!(tones_to_codeword(&tones), Ok(SEQ_CODEWORD));
    }

    #[test]
    fn test_first_bit_is_msb() {
        let mut codeword = [0u8; LDPC_N_BYTES];
        codeword[0] = 0x80;
        let tones = codeword_to_tones(&codeword);
        assert_eq!(tones[7], 4);
        // Last data symbol takes codeword bits 171..174
        let mut codeword = [0u8; LDPC_N_BYTES];
        codeword[LDPC_N_BYTES - 1] = 0x04;
        let tones = codeword_to_tones(&codeword);
        assert_eq!(tones[43 + FT8_ND_HALF - 1], 1);
        assert_eq!(tones[72], COSTAS_PATTERN[0]);
    }

    #[test]
    fn test_sync_placement() {
        let codeword: Codeword = std::array::from_fn(|_| rand::random::<u8>());
        let tones = codeword_to_tones(&codeword);
        for offset in SYNC_OFFSETS {
            assert_eq!(&tones[offset..offset + COSTAS_LEN], &COSTAS_PATTERN);
        }
        assert!(tones.iter().all(|&t| t <= MAX_TONE));
    }

    #[test]
    fn test_sync_mismatch() {
        let mut tones = codeword_to_tones(&SEQ_CODEWORD);
        tones[38] = 0;
        assert_eq!(
            tones_to_codeword(&tones),
            Err(CodecErr::SyncMismatch { offset: 38, expected: 6, found: 0 })
        );
    }

    #[test]
    fn test_tone_out_of_range() {
        let mut tones = codeword_to_tones(&SEQ_CODEWORD);
        tones[10] = 8;
        assert_eq!(tones_to_codeword(&tones), Err(CodecErr::InvalidValue { field: "tone", value: 8 }));
    }
}
