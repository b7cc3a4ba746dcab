use std::fmt;

/// Fixed-capacity bit buffer backed by `BYTES` bytes, bits packed MSB first.
/// Only the first `end` bits are in the window; bits beyond it are padding and kept at zero.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBuffer<const BYTES: usize> {
    buffer: [u8; BYTES],
    pos: usize,         // next bit offset for write
    end: usize,         // bits at or after this are out of window
}

impl<const BYTES: usize> BitBuffer<BYTES> {
    pub const CAPACITY_BITS: usize = BYTES * 8;

    /// Create a zeroed buffer with a window of exactly `len_bits` bits.
    pub fn new(len_bits: usize) -> Self {
        assert!(
            len_bits <= Self::CAPACITY_BITS,
            "len_bits {} exceeds capacity of {} bits",
            len_bits,
            Self::CAPACITY_BITS
        );
        BitBuffer {
            buffer: [0; BYTES],
            pos: 0,
            end: len_bits,
        }
    }

    /// Wrap packed bytes as a buffer with a window of `len_bits` bits.
    /// Padding bits beyond the window are cleared.
    pub fn from_bytes(data: &[u8; BYTES], len_bits: usize) -> Self {
        let mut buf = Self::new(len_bits);
        buf.buffer = *data;
        for bit in buf.end..Self::CAPACITY_BITS {
            buf.buffer[bit / 8] &= !(0x80 >> (bit % 8));
        }
        buf
    }

    /// Field of `num_bits` (at most 64) starting at `offset`, as the low bits of a u64. Does not move pos.
    pub fn bits_at(&self, offset: usize, num_bits: usize) -> u64 {
        assert!(num_bits <= 64, "bits_at: can only read up to 64 bits");
        assert!(
            offset + num_bits <= self.end,
            "bits_at: field [{},{}) out of window [0,{})",
            offset,
            offset + num_bits,
            self.end
        );
        self.read_bits_at_unchecked(offset, num_bits)
    }

    /// Value (0 or 1) of the bit at `offset`. Does not move pos.
    pub fn bit_at(&self, offset: usize) -> u8 {
        assert!(offset < self.end, "bit_at: offset {} out of window [0,{})", offset, self.end);
        self.read_bit_at_unchecked(offset)
    }

    /// Sets the bit at `offset` to one. Does not move pos.
    pub fn set_bit_at(&mut self, offset: usize) {
        assert!(offset < self.end, "set_bit_at: offset {} out of window [0,{})", offset, self.end);
        self.buffer[offset / 8] |= 0x80 >> (offset % 8);
    }

    /// Write a single bit to pos
    pub fn write_bit(&mut self, value: u8) {
        assert!(value == 0 || value == 1, "write_bit: value must be 0 or 1");
        assert!(self.pos < self.end, "write_bit would exceed buffer end");

        let index = self.pos / 8;
        let mask = 0x80 >> (self.pos % 8);

        self.buffer[index] &= !mask;
        if value == 1 {
            self.buffer[index] |= mask;
        }
        self.pos += 1;
    }

    /// Write up to 64 bits, advancing pos. Panics if the write exceeds end.
    pub fn write_bits(&mut self, value: u64, num_bits: usize) {
        assert!(num_bits <= 64, "can only write up to 64 bits");
        assert!(num_bits == 64 || value >> num_bits == 0, "value exceeds num_bits {} {}", value, num_bits);
        assert!(self.pos + num_bits <= self.end, "write would exceed buffer end");

        let mut remaining = num_bits;
        let mut cur = self.pos;

        // Head bits up to the next byte boundary
        let head_offset = cur % 8;
        if head_offset != 0 && remaining > 0 {
            let h = usize::min(remaining, 8 - head_offset);
            let bits_to_write = ((value >> (remaining - h)) as u8) & ((1u16 << h) - 1) as u8;
            let shift = 8 - (head_offset + h);
            let mask = (((1u16 << h) - 1) << shift) as u8;
            let byte = &mut self.buffer[cur / 8];
            *byte = (*byte & !mask) | (bits_to_write << shift);
            cur += h;
            remaining -= h;
        }

        while remaining >= 8 {
            self.buffer[cur / 8] = ((value >> (remaining - 8)) & 0xFF) as u8;
            cur += 8;
            remaining -= 8;
        }

        if remaining > 0 {
            let bits_to_write = (value as u8) & ((1 << remaining) - 1);
            let shift = 8 - remaining;
            let mask = (((1u16 << remaining) - 1) << shift) as u8;
            let byte = &mut self.buffer[cur / 8];
            *byte = (*byte & !mask) | (bits_to_write << shift);
        }

        self.pos += num_bits;
    }

    /// Packed bytes, including the zeroed padding bits.
    pub fn as_bytes(&self) -> &[u8; BYTES] {
        &self.buffer
    }

    pub fn into_bytes(self) -> [u8; BYTES] {
        self.buffer
    }

    /// Dump the window as a binary string, with a ^ marker before the write position.
    pub fn dump_bin(&self) -> String {
        let mut s = String::with_capacity(self.end + 1);
        for i in 0..self.end {
            if i == self.pos {
                s.push('^');
            }
            s.push(if self.read_bit_at_unchecked(i) == 1 { '1' } else { '0' });
        }
        if self.pos == self.end {
            s.push('^');
        }
        s
    }

    /// Dump the window as an uppercase hex string. A trailing partial nibble is padded on the right with zeros.
    pub fn dump_hex(&self) -> String {
        let n_nibbles = self.end.div_ceil(4);
        let mut s = String::with_capacity(n_nibbles);
        for i in 0..n_nibbles {
            let take = usize::min(4, self.end - i * 4);
            let v = self.read_bits_at_unchecked(i * 4, take) as u8;
            let digit = if take < 4 { v << (4 - take) } else { v };
            s.push_str(&format!("{:X}", digit));
        }
        s
    }

    /// Reads exactly `num_bits` bits starting at `bit_pos` as the low bits of a u64.
    /// **Caller must ensure** `num_bits <= 64` and `bit_pos + num_bits <= end`.
    fn read_bits_at_unchecked(&self, mut bit_pos: usize, num_bits: usize) -> u64 {
        let mut result = 0u64;
        let mut bits_remaining = num_bits;

        let head = bit_pos % 8;
        if head != 0 && bits_remaining > 0 {
            let take = usize::min(8 - head, bits_remaining);
            let byte = self.buffer[bit_pos / 8];
            let shift = 8 - head - take;
            let mask = ((1u16 << take) - 1) as u8;
            result = ((byte >> shift) & mask) as u64;
            bit_pos += take;
            bits_remaining -= take;
        }

        while bits_remaining >= 8 {
            result = (result << 8) | self.buffer[bit_pos / 8] as u64;
            bit_pos += 8;
            bits_remaining -= 8;
        }

        for _ in 0..bits_remaining {
            result = (result << 1) | self.read_bit_at_unchecked(bit_pos) as u64;
            bit_pos += 1;
        }

        result
    }

    fn read_bit_at_unchecked(&self, bit_pos: usize) -> u8 {
        (self.buffer[bit_pos / 8] >> (7 - (bit_pos % 8))) & 1
    }
}

impl<const BYTES: usize> fmt::Debug for BitBuffer<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBuffer {{ ^{} >{} {} }}", self.pos, self.end, self.dump_bin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_byte_write() {
        let mut bb = BitBuffer::<2>::new(16);
        bb.write_bits(0xAB, 8);
        bb.write_bits(0xCD, 8);
        assert_eq!(bb.into_bytes(), [0xAB, 0xCD]);
    }

    #[test]
    fn test_partial_boundary_write() {
        let mut bb = BitBuffer::<2>::new(16);
        bb.write_bits(0xA, 4);   // 1010
        bb.write_bits(0x5, 4);   // 0101
        bb.write_bits(0xFF, 8);  // 11111111
        assert_eq!(bb.bits_at(0, 4), 0xA);
        assert_eq!(bb.bits_at(4, 4), 0x5);
        assert_eq!(bb.bits_at(8, 8), 0xFF);
    }

    #[test]
    #[should_panic(expected = "write would exceed buffer end")]
    fn test_write_overflow() {
        let mut bb = BitBuffer::<2>::new(10);
        bb.write_bits(1, 11);
    }

    #[test]
    #[should_panic(expected = "value exceeds num_bits")]
    fn test_value_above_num_bits() {
        let mut bb = BitBuffer::<1>::new(4);
        bb.write_bits(0b11111, 4);
    }

    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn test_window_above_capacity() {
        let _ = BitBuffer::<11>::new(89);
    }

    #[test]
    fn test_unaligned_write_across_bytes() {
        let mut bb = BitBuffer::<6>::new(48);
        bb.write_bits(0, 5);
        let pattern: u32 = 0b10_1010_1111_0001_0010;
        bb.write_bits(pattern as u64, 20);
        assert_eq!(bb.bits_at(5, 20) as u32, pattern);
        assert_eq!(bb.bits_at(0, 5), 0);
        assert_eq!(bb.bits_at(25, 23), 0);
    }

    #[test]
    fn test_write_bits_overwrites_field_only() {
        let mut bb = BitBuffer::<2>::from_bytes(&[0xFF, 0xFF], 16);
        bb.write_bits(0b111, 3);
        bb.write_bits(0, 7);
        assert_eq!(bb.into_bytes(), [0xE0, 0x3F]);
    }

    #[test]
    fn test_from_bytes_clears_padding() {
        let bb = BitBuffer::<11>::from_bytes(&[0xFF; 11], 87);
        assert_eq!(bb.as_bytes()[10], 0xFE);
        let bb = BitBuffer::<22>::from_bytes(&[0xFF; 22], 174);
        assert_eq!(bb.into_bytes()[21], 0xFC);
    }

    #[test]
    fn test_bit_at_and_set_bit_at() {
        let mut bb = BitBuffer::<3>::new(20);
        bb.set_bit_at(0);
        bb.set_bit_at(9);
        bb.set_bit_at(19);
        assert_eq!(bb.bit_at(0), 1);
        assert_eq!(bb.bit_at(1), 0);
        assert_eq!(bb.bit_at(9), 1);
        assert_eq!(bb.bit_at(19), 1);
        assert_eq!(bb.as_bytes(), &[0x80, 0x40, 0x10]);

        // set_bit_at leaves the write position alone
        bb.write_bit(1);
        assert_eq!(bb.bits_at(0, 2), 0b10);
    }

    #[test]
    #[should_panic(expected = "out of window")]
    fn test_set_bit_outside_window() {
        let mut bb = BitBuffer::<3>::new(20);
        bb.set_bit_at(20);
    }

    #[test]
    fn test_bits_at_fields() {
        // 0xABCD = 1010_1011 1100_1101
        let bb = BitBuffer::<2>::from_bytes(&[0xAB, 0xCD], 16);
        assert_eq!(bb.bits_at(5, 6), 0b011110);
        assert_eq!(bb.bits_at(0, 16), 0xABCD);
        assert_eq!(bb.bits_at(13, 3), 0b101);
        assert_eq!(bb.bits_at(16, 0), 0);
    }

    #[test]
    fn test_bits_at_64() {
        let mut bb = BitBuffer::<9>::new(72);
        bb.write_bits(0x5, 4);
        bb.write_bits(0xDEADBEEF_CAFEBABE, 64);
        assert_eq!(bb.bits_at(4, 64), 0xDEADBEEF_CAFEBABE);
        assert_eq!(bb.bits_at(0, 8), 0x5D);
    }

    #[test]
    #[should_panic(expected = "out of window")]
    fn test_bits_at_past_window() {
        let bb = BitBuffer::<2>::new(10);
        bb.bits_at(8, 3);
    }

    #[test]
    fn test_zero_bit_write() {
        let mut bb = BitBuffer::<2>::new(16);
        bb.write_bits(0, 0);
        assert_eq!(bb.dump_bin(), "^0000000000000000");
    }

    #[test]
    fn test_dump_funcs() {
        let bb = BitBuffer::<2>::from_bytes(&[0xAB, 0xCD], 12);
        assert_eq!(bb.dump_hex(), "ABC");
        let mut bb = BitBuffer::<1>::new(3);
        bb.write_bits(0b101, 3);
        assert_eq!(bb.dump_hex(), "A");
        assert_eq!(bb.dump_bin(), "101^");

        let mut bb = BitBuffer::<2>::new(12);
        bb.write_bits(0b101, 3);
        assert_eq!(bb.dump_bin(), "101^000000000");
        assert_eq!(format!("{:?}", bb), "BitBuffer { ^3 >12 101^000000000 }");
    }
}
