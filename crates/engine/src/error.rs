use std::path::PathBuf;

/// Errors that can occur when building a tile supply.
#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    #[error("tile sequence must not be empty")]
    EmptySequence,

    #[error("random supply needs at least one tile kind")]
    NoKinds,
}

/// Errors that can occur when loading board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),

    #[error("supply error: {0}")]
    Supply(#[from] SupplyError),
}
