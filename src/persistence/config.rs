//! Editor configuration files.
//!
//! An editor configuration lists the socket types and the ordered node
//! catalog the editor starts with. It is stored as pretty-printed JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{builtin_catalog, CatalogEntry, DEFAULT_TREE_TYPE};
use crate::socket::{builtin_socket_types, SocketType};

/// Current configuration format version.
/// Increment this when making breaking changes to the format.
pub const CONFIG_VERSION: u32 = 1;

/// Everything the runtime registers at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Configuration format version for future compatibility.
    pub version: u32,
    /// Node tree type the add menu is shown for.
    pub tree_type: String,
    /// Socket types, registered in order.
    #[serde(default)]
    pub socket_types: Vec<SocketType>,
    /// Catalog entries, registered in order. Order is menu order.
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

impl EditorConfig {
    /// Creates an empty configuration for `tree_type`.
    pub fn new(tree_type: impl Into<String>) -> Self {
        Self {
            version: CONFIG_VERSION,
            tree_type: tree_type.into(),
            socket_types: Vec::new(),
            catalog: Vec::new(),
        }
    }

    /// The stock socket types and node catalog.
    pub fn builtin() -> crate::error::Result<Self> {
        Ok(Self {
            socket_types: builtin_socket_types(),
            catalog: builtin_catalog()?,
            ..Self::new(DEFAULT_TREE_TYPE)
        })
    }

    /// Check if this configuration version is compatible with the current format.
    pub fn is_compatible(&self) -> bool {
        self.version <= CONFIG_VERSION
    }
}

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Incompatible configuration version.
    #[error("incompatible configuration version: found {found}, expected <= {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },
}

/// Save a configuration to a JSON file.
pub fn save_to_file(config: &EditorConfig, path: &Path) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    log::debug!("saved editor configuration to {}", path.display());
    Ok(())
}

/// Load a configuration from a JSON file.
pub fn load_from_file(path: &Path) -> Result<EditorConfig, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    let config: EditorConfig = serde_json::from_str(&json)?;

    if !config.is_compatible() {
        return Err(ConfigError::IncompatibleVersion {
            found: config.version,
            expected: CONFIG_VERSION,
        });
    }

    log::debug!(
        "loaded editor configuration from {} ({} socket types, {} catalog entries)",
        path.display(),
        config.socket_types.len(),
        config.catalog.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CategoryEntry};
    use crate::error::Error;
    use crate::runtime::Runtime;
    use crate::socket::{ValueBounds, FLOAT_SOCKET};

    #[test]
    fn test_config_creation() {
        let config = EditorConfig::new("umog_UMOGNodeTree");
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.tree_type, "umog_UMOGNodeTree");
        assert!(config.socket_types.is_empty());
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn test_builtin_config() {
        let config = EditorConfig::builtin().unwrap();
        assert_eq!(config.tree_type, DEFAULT_TREE_TYPE);
        assert!(config.socket_types.iter().any(|t| t.id == FLOAT_SOCKET));
        assert_eq!(config.catalog.len(), 9);
    }

    #[test]
    fn test_catalog_json_shape() {
        let mut config = EditorConfig::new("tree");
        config.catalog.push(CatalogEntry::new(
            "math_menu",
            Category::from_pairs("umog_math_menu", "Math", &[("add", "Add")]).unwrap(),
        ));
        config.catalog.push(CatalogEntry::separator("separator_1"));

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["catalog"][0]["kind"], "category");
        assert_eq!(value["catalog"][0]["key"], "math_menu");
        assert_eq!(value["catalog"][1]["kind"], "separator");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"version": 1, "tree_type": "tree"}"#).unwrap();
        assert!(config.socket_types.is_empty());
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn test_version_compatibility() {
        let config = EditorConfig::new("tree");
        assert!(config.is_compatible());

        let future = EditorConfig {
            version: CONFIG_VERSION + 1,
            ..EditorConfig::new("tree")
        };
        assert!(!future.is_compatible());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.json");

        let config = EditorConfig::builtin().unwrap();
        save_to_file(&config, &path).unwrap();
        let loaded = load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
        assert!(matches!(loaded.catalog[1].entry, CategoryEntry::Separator));
    }

    #[test]
    fn test_custom_bounds_survive_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bounded.json");

        let mut config = EditorConfig::new("tree");
        config.socket_types.push(
            SocketType::new("PercentSocketType", "Percent", "Float")
                .with_default_value(50.0)
                .with_bounds(ValueBounds::new(0.0, 100.0).unwrap()),
        );
        Runtime::startup(&config).unwrap();
        save_to_file(&config, &path).unwrap();

        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded.socket_types[0].bounds, ValueBounds::new(0.0, 100.0).unwrap());
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_infinite_bounds_rejected_at_startup() {
        let mut config = EditorConfig::new("tree");
        config.socket_types.push(
            SocketType::new("UnboundedSocketType", "Unbounded", "Float")
                .with_default_value(0.0)
                .with_bounds(ValueBounds {
                    min: f64::NEG_INFINITY,
                    max: f64::INFINITY,
                }),
        );
        assert!(matches!(Runtime::startup(&config), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_rejects_future_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.json");
        std::fs::write(&path, r#"{"version": 99, "tree_type": "tree"}"#).unwrap();

        match load_from_file(&path) {
            Err(ConfigError::IncompatibleVersion { found, expected }) => {
                assert_eq!(found, 99);
                assert_eq!(expected, CONFIG_VERSION);
            }
            other => panic!("expected version error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_from_file(&dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_from_file(&path), Err(ConfigError::Serialization(_))));
    }
}
