//! Configuration for the FT8 encoder tool
//!
//! Protocol parameters are fixed and not configurable; this only covers logging and output settings:
//! - TOML configuration file parsing
//! - Tool configuration structures

pub mod tool_config;
pub mod toml_config;

pub use tool_config::*;
pub use toml_config::*;
