use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("site config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("could not read site config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML in site config '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse inline config: {0}")]
    InlineParseError(toml::de::Error),

    #[error("site config does not match the expected shape: {0}")]
    DeserializeError(#[from] toml::de::Error),
}
