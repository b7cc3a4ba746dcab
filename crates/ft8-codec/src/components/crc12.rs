// CRC-12 over MSB-first byte streams, and the checksum field of the information word
use ft8_core::{
    BitBuffer, CodecErr, InfoWord, MessageType, Payload, CRC_BITS, CRC_COVERED_BITS, CRC_OFFSET, I3_BITS, LDPC_K,
    LDPC_K_BYTES,
};

/// Generator polynomial without the leading (x^12) coefficient
pub const GEN_POLY: u16 = 0xC06;

const WIDTH: usize = 12;
const TOPBIT: u16 = 1 << (WIDTH - 1);

/// CRC-12 over a byte stream, processing `number_bits` bits (MSB first).
/// Zero initial value, no final xor. A new byte is shifted into the remainder every 8 bits.
pub fn crc12_bytes(input: &[u8], number_bits: usize) -> u16 {
    assert!(
        number_bits <= input.len() * 8,
        "crc12_bytes: {} bits requested from a {} byte buffer",
        number_bits,
        input.len()
    );

    let mut remainder: u16 = 0;
    for idx_bit in 0..number_bits {
        if idx_bit % 8 == 0 {
            remainder ^= (input[idx_bit / 8] as u16) << (WIDTH - 8);
        }
        if (remainder & TOPBIT) != 0 {
            remainder = (remainder << 1) ^ GEN_POLY;
        } else {
            remainder <<= 1;
        }
    }
    remainder & ((1 << WIDTH) - 1)
}

/// Builds the 87-bit information word: payload, i3, then the checksum over the first 76 bits.
/// The checksum field reads as zero while the checksum is computed.
pub fn add_crc(payload: &Payload, i3: MessageType) -> InfoWord {
    let mut a87 = BitBuffer::<LDPC_K_BYTES>::new(LDPC_K);
    for &byte in payload {
        a87.write_bits(byte as u64, 8);
    }
    a87.write_bits(i3.into_raw() as u64, I3_BITS);

    let checksum = crc12_bytes(a87.as_bytes(), CRC_COVERED_BITS);
    a87.write_bits(checksum as u64, CRC_BITS);
    tracing::trace!("add_crc crc {:03x} a87 {}", checksum, a87.dump_hex());

    a87.into_bytes()
}

/// Reads the checksum field (bits 75..87) of an information word
pub fn extract_crc(a87: &InfoWord) -> u16 {
    BitBuffer::<LDPC_K_BYTES>::from_bytes(a87, LDPC_K).bits_at(CRC_OFFSET, CRC_BITS) as u16
}

/// Recomputes the checksum of an information word and compares it with the stored one
pub fn check_crc(a87: &InfoWord) -> Result<(), CodecErr> {
    let found = extract_crc(a87);

    let mut zeroed = *a87;
    zeroed[9] &= 0xE0;
    zeroed[10] = 0;
    let expected = crc12_bytes(&zeroed, CRC_COVERED_BITS);

    if expected != found {
        tracing::debug!("check_crc: expected {:03x} found {:03x}", expected, found);
        return Err(CodecErr::ChecksumMismatch { expected, found });
    }
    Ok(())
}
