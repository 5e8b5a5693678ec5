use std::path::Path;

use crate::error::ConfigError;
use crate::position::Adjacency;

/// Board setup, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    /// Number of distinct tile kinds the random supply draws from.
    pub tile_kinds: u8,
    pub adjacency: Adjacency,
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 8,
            height: 8,
            tile_kinds: 6,
            adjacency: Adjacency::Orthogonal,
            seed: 0,
        }
    }
}

impl BoardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.tile_kinds < 2 {
            return Err(ConfigError::Validation(
                "tile_kinds must be >= 2".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (8, 8));
        assert_eq!(config.adjacency, Adjacency::Orthogonal);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = BoardConfig::from_toml_str("width = 5\nseed = 42\n").unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 8);
        assert_eq!(config.seed, 42);
        assert_eq!(config.tile_kinds, 6);
    }

    #[test]
    fn adjacency_parses_from_snake_case() {
        let config = BoardConfig::from_toml_str("adjacency = \"same_line\"").unwrap();
        assert_eq!(config.adjacency, Adjacency::SameLine);
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = BoardConfig::from_toml_str("width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn single_tile_kind_is_rejected() {
        let err = BoardConfig::from_toml_str("tile_kinds = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = BoardConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = BoardConfig::load(Path::new("/nonexistent/board.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = BoardConfig {
            width: 6,
            height: 9,
            tile_kinds: 4,
            adjacency: Adjacency::SameLine,
            seed: 7,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(BoardConfig::from_toml_str(&text).unwrap(), config);
    }
}
