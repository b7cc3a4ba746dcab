use ft8_core::{
    expect_len, BitBuffer, CodecErr, MessageType, Payload, ToneSeq, FT8_NN, I3_BITS, LDPC_K, LDPC_K_BYTES, PAYLOAD_BITS,
    PAYLOAD_BYTES,
};

use crate::components::{crc12, ldpc, symbol_map};

/// Generates the FT8 tone sequence for a 72-bit payload and message type (i3)
/// payload -> information word (CRC added) -> codeword (LDPC) -> tones (Costas sync inserted)
pub fn encode_ft8(payload: &Payload, i3: MessageType) -> ToneSeq {
    tracing::trace!(
        "encode_ft8 payload {} i3 {}",
        BitBuffer::<PAYLOAD_BYTES>::from_bytes(payload, PAYLOAD_BITS).dump_hex(),
        i3.into_raw()
    );

    let a87 = crc12::add_crc(payload, i3);
    let codeword = ldpc::encode174(&a87);
    let tones = symbol_map::codeword_to_tones(&codeword);

    tracing::debug!("encode_ft8 tones {}", symbol_map::tones_to_digits(&tones));
    tones
}

/// Like encode_ft8, for callers holding a dynamically sized payload and a raw i3 value.
/// Rejects a payload that is not exactly 9 bytes and an i3 that does not fit in 3 bits.
pub fn encode_ft8_checked(payload: &[u8], i3: u8) -> Result<ToneSeq, CodecErr> {
    if let Err(e) = expect_len!(payload, PAYLOAD_BYTES) {
        tracing::warn!("encode_ft8_checked: rejected payload: {:?}", e);
        return Err(e);
    }
    let i3 = MessageType::new(i3).inspect_err(|e| tracing::warn!("encode_ft8_checked: rejected i3: {:?}", e))?;

    let mut fixed = [0u8; PAYLOAD_BYTES];
    fixed.copy_from_slice(payload);
    Ok(encode_ft8(&fixed, i3))
}

/// Recovers payload and i3 from a noiseless tone sequence, checking sync, LDPC parity and CRC.
/// tones -> codeword -> information word -> payload
pub fn verify_ft8(tones: &ToneSeq) -> Result<(Payload, MessageType), CodecErr> {
    let codeword = symbol_map::tones_to_codeword(tones)?;
    let a87 = ldpc::check_codeword(&codeword)?;
    crc12::check_crc(&a87)?;

    let mut payload = [0u8; PAYLOAD_BYTES];
    payload.copy_from_slice(&a87[..PAYLOAD_BYTES]);
    let i3 = BitBuffer::<LDPC_K_BYTES>::from_bytes(&a87, LDPC_K).bits_at(PAYLOAD_BITS, I3_BITS);
    let i3 = MessageType::from_raw_masked(i3 as u8);

    tracing::trace!("verify_ft8 ok, i3 {}", i3.into_raw());
    Ok((payload, i3))
}

/// Like verify_ft8, for a dynamically sized tone slice
pub fn verify_ft8_checked(tones: &[u8]) -> Result<(Payload, MessageType), CodecErr> {
    expect_len!(tones, FT8_NN)?;
    let mut fixed = [0u8; FT8_NN];
    fixed.copy_from_slice(tones);
    verify_ft8(&fixed)
}
