use crate::config::ConfigError;
use crate::format::FormatError;
use thiserror::Error;

/// Top-level error type for the storefront-kit library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("formatting error: {0}")]
    Format(#[from] FormatError),

    #[error("application context requires a configuration")]
    MissingConfig,
}
