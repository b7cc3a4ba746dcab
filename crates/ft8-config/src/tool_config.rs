use serde::Deserialize;

/// How the tone sequence is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ToneFormat {
    /// One digit per tone, no separators
    #[default]
    Digits,
    /// Tones separated by spaces, sync blocks and data blocks separated by " | "
    Spaced,
}

/// Output settings for the encoder tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfgOutput {
    pub format: ToneFormat,
    /// Print the 87-bit information word (payload, i3, CRC) in hex
    pub show_info_word: bool,
    /// Print the 174-bit codeword in hex
    pub show_codeword: bool,
    /// Recover the message from the emitted tones and check parity and CRC
    pub verify: bool,
}

impl Default for CfgOutput {
    fn default() -> Self {
        Self {
            format: ToneFormat::Digits,
            show_info_word: false,
            show_codeword: false,
            verify: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolConfig {
    /// Optional verbose log file
    pub debug_log: Option<String>,
    pub output: CfgOutput,
}
