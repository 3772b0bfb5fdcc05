//! Configuration loading and management.

mod builder;
mod env;
mod error;
mod site;

pub use builder::Config;
pub use error::ConfigError;
pub use site::{
    ComponentDir, DevtoolsSettings, FormatSettings, SiteConfig, UiSettings, ENV_PREFIX,
    ENV_SEPARATOR,
};
