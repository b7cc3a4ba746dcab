use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::tool_config::{CfgOutput, ToneFormat, ToolConfig};

pub const EXPECTED_CONFIG_VERSION: &str = "0.1";

/// Build `ToolConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    if root.config_version != EXPECTED_CONFIG_VERSION {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, EXPECTED_CONFIG_VERSION
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref output) = root.output {
        if !output.extra.is_empty() {
            return Err(format!("Unrecognized fields in output: {:?}", sorted_keys(&output.extra)).into());
        }
    }

    let mut cfg = ToolConfig {
        debug_log: root.debug_log,
        output: CfgOutput::default(),
    };
    if let Some(output) = root.output {
        apply_output_patch(&mut cfg.output, output);
    }
    Ok(cfg)
}

/// Build `ToolConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `ToolConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    from_reader(f)
}

fn apply_output_patch(dst: &mut CfgOutput, src: OutputDto) {
    if let Some(v) = src.format {
        dst.format = v;
    }
    if let Some(v) = src.show_info_word {
        dst.show_info_word = v;
    }
    if let Some(v) = src.show_codeword {
        dst.show_codeword = v;
    }
    if let Some(v) = src.verify {
        dst.verify = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    output: Option<OutputDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct OutputDto {
    format: Option<ToneFormat>,
    show_info_word: Option<bool>,
    show_codeword: Option<bool>,
    verify: Option<bool>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let cfg = from_toml_str("config_version = \"0.1\"\n").unwrap();
        assert_eq!(cfg, ToolConfig::default());
        assert!(cfg.output.verify);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            config_version = "0.1"
            debug_log = "ft8-tool.log"

            [output]
            format = "Spaced"
            show_info_word = true
            show_codeword = true
            verify = false
        "#;
        let cfg = from_toml_str(toml).unwrap();
        assert_eq!(cfg.debug_log.as_deref(), Some("ft8-tool.log"));
        assert_eq!(
            cfg.output,
            CfgOutput {
                format: ToneFormat::Spaced,
                show_info_word: true,
                show_codeword: true,
                verify: false,
            }
        );
    }

    #[test]
    fn test_partial_output_keeps_defaults() {
        let toml = "config_version = \"0.1\"\n[output]\nshow_codeword = true\n";
        let cfg = from_toml_str(toml).unwrap();
        assert_eq!(cfg.output.format, ToneFormat::Digits);
        assert!(cfg.output.show_codeword);
        assert!(cfg.output.verify);
    }

    #[test]
    fn test_wrong_version() {
        let err = from_toml_str("config_version = \"0.0\"\n").unwrap_err();
        assert!(err.to_string().contains("Unrecognized config_version"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = from_toml_str("config_version = \"0.1\"\nzeta = 1\nalpha = 2\n").unwrap_err();
        assert!(err.to_string().contains("[\"alpha\", \"zeta\"]"), "{}", err);

        let err = from_toml_str("config_version = \"0.1\"\n[output]\ngray_code = true\n").unwrap_err();
        assert!(err.to_string().contains("output"), "{}", err);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(from_toml_str("config_version = \"0.1\"\n[output]\nformat = \"Csv\"\n").is_err());
    }

    #[test]
    fn test_from_reader() {
        let cfg = from_reader("config_version = \"0.1\"\ndebug_log = \"x.log\"\n".as_bytes()).unwrap();
        assert_eq!(cfg.debug_log.as_deref(), Some("x.log"));
    }
}
