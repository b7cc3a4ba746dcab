#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErr {
    /// Input slice does not have the fixed size of the field
    InconsistentLength { field: &'static str, expected: usize, found: usize },
    InvalidValue { field: &'static str, value: u64 },
    /// A Costas sync symbol at tone `offset` differs from the pattern
    SyncMismatch { offset: usize, expected: u8, found: u8 },
    /// Codeword bit `bit` disagrees with the re-encoded information bits
    ParityMismatch { bit: usize },
    ChecksumMismatch { expected: u16, found: u16 },
}

/// Checks whether a slice has the expected length. If not, returns CodecErr::InconsistentLength
#[macro_export]
macro_rules! expect_len {
    (@inner $slice:expr, $expected:expr, $field:expr) => {{
        let found = $slice.len();
        if found == $expected {
            Ok(())
        } else {
            Err($crate::CodecErr::InconsistentLength {
                field: $field,
                expected: $expected,
                found,
            })
        }
    }};
    ($slice:ident, $expected:expr) => {
        $crate::expect_len!(@inner $slice, $expected, stringify!($slice))
    };
    ($slice:expr, $expected:expr, $field:expr) => {
        $crate::expect_len!(@inner $slice, $expected, $field)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_len(payload: &[u8]) -> Result<(), CodecErr> {
        expect_len!(payload, 9)
    }

    #[test]
    fn test_expect_len() {
        assert_eq!(check_len(&[0; 9]), Ok(()));
        assert_eq!(
            check_len(&[0; 10]),
            Err(CodecErr::InconsistentLength { field: "payload", expected: 9, found: 10 })
        );
    }
}
