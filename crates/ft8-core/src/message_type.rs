use crate::CodecErr;

/// The 3-bit message type discriminator (i3) that follows the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageType(u8);

impl MessageType {
    pub const MAX: u8 = 0x07;

    /// Returns a MessageType, or CodecErr::InvalidValue if `i3` does not fit in 3 bits
    pub fn new(i3: u8) -> Result<Self, CodecErr> {
        if i3 > Self::MAX {
            return Err(CodecErr::InvalidValue { field: "i3", value: i3 as u64 });
        }
        Ok(MessageType(i3))
    }

    /// Keeps only the low 3 bits of `raw`
    pub const fn from_raw_masked(raw: u8) -> Self {
        MessageType(raw & Self::MAX)
    }

    pub const fn into_raw(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MessageType {
    type Error = CodecErr;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MessageType::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i3_range() {
        for i3 in 0..=7u8 {
            assert_eq!(MessageType::new(i3).unwrap().into_raw(), i3);
        }
        assert_eq!(MessageType::new(8), Err(CodecErr::InvalidValue { field: "i3", value: 8 }));
        assert!(MessageType::try_from(0xFF).is_err());
    }

    #[test]
    fn test_from_raw_masked() {
        assert_eq!(MessageType::from_raw_masked(0x0D).into_raw(), 0x05);
    }
}
