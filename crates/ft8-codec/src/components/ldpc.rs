// Systematic encoder for the (174,87) LDPC code used by FT8

use ft8_core::{BitBuffer, CodecErr, Codeword, InfoWord, LDPC_K, LDPC_K_BYTES, LDPC_M, LDPC_N, LDPC_N_BYTES};

use crate::components::ldpc_consts::{COLUMN_ORDER, GENERATOR};

/// Returns 1 if an odd number of bits are set in x, zero otherwise
#[inline]
pub fn parity8(mut x: u8) -> u8 {
    x ^= x >> 4;
    x ^= x >> 2;
    x ^= x >> 1;
    x & 1
}

/// Encode an 87-bit information word into a 174-bit codeword.
/// The code is a regular (174,87) LDPC code with column weight 3, built with the PEG algorithm.
/// Parity bits come from the generator rows, followed by the information bits verbatim. Bit `p` of that
/// `parity || information` vector lands at codeword bit `COLUMN_ORDER[p]`.
pub fn encode174(message: &InfoWord) -> Codeword {
    let message = BitBuffer::<LDPC_K_BYTES>::from_bytes(message, LDPC_K);
    let mut codeword = BitBuffer::<LDPC_N_BYTES>::new(LDPC_N);

    // Only ones are written, the codeword starts out zeroed
    let mut colidx = 0;
    for row in GENERATOR.iter() {
        // Dot product of message and generator row, modulo 2
        let nsum = message
            .as_bytes()
            .iter()
            .zip(row.iter())
            .fold(0u8, |acc, (m, g)| acc ^ parity8(m & g));
        if nsum != 0 {
            codeword.set_bit_at(COLUMN_ORDER[colidx] as usize);
        }
        colidx += 1;
    }

    for j in 0..LDPC_K {
        if message.bit_at(j) == 1 {
            codeword.set_bit_at(COLUMN_ORDER[colidx] as usize);
        }
        colidx += 1;
    }

    tracing::trace!("encode174 codeword {}", codeword.dump_hex());
    codeword.into_bytes()
}

/// Collects the information bits of a codeword, undoing the column permutation
pub fn extract_message(codeword: &Codeword) -> InfoWord {
    let codeword = BitBuffer::<LDPC_N_BYTES>::from_bytes(codeword, LDPC_N);
    let mut message = BitBuffer::<LDPC_K_BYTES>::new(LDPC_K);
    for j in 0..LDPC_K {
        message.write_bit(codeword.bit_at(COLUMN_ORDER[LDPC_M + j] as usize));
    }
    message.into_bytes()
}

/// Checks that `codeword` is exactly the encoding of its own information bits.
/// Returns the information word, or CodecErr::ParityMismatch with the first disagreeing codeword bit.
pub fn check_codeword(codeword: &Codeword) -> Result<InfoWord, CodecErr> {
    let message = extract_message(codeword);
    let reencoded = BitBuffer::<LDPC_N_BYTES>::from_bytes(&encode174(&message), LDPC_N);
    let received = BitBuffer::<LDPC_N_BYTES>::from_bytes(codeword, LDPC_N);

    if let Some(bit) = (0..LDPC_N).find(|&i| reencoded.bit_at(i) != received.bit_at(i)) {
        tracing::debug!("check_codeword: mismatch at bit {}", bit);
        return Err(CodecErr::ParityMismatch { bit });
    }
    Ok(message)
}
