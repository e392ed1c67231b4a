//! Persistence module
//!
//! Editor configuration save/load using serde and JSON.

pub mod config;

pub use config::{load_from_file, save_to_file, ConfigError, EditorConfig, CONFIG_VERSION};
