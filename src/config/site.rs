//! Site configuration handed to the host UI framework.
//!
//! The `ui`, `modules` and `components` values are carried as data only; the
//! host framework decides what they mean. The `format` section drives the
//! price helpers in [`crate::format`].

use std::path::Path;

use serde::Deserialize;

use super::{Config, ConfigError};

/// Prefix for environment overrides, e.g. `STOREFRONT__UI__PRIMARY=teal`.
pub const ENV_PREFIX: &str = "STOREFRONT";
pub const ENV_SEPARATOR: &str = "__";

const DEFAULTS: &str = r#"
modules = ["@nuxt/ui", "@nuxtjs/tailwindcss"]

[devtools]
enabled = true

[ui]
primary = "green"
gray = "cool"

[[components]]
path = "~/components"
prefix = "X"

[format]
decimals = 2
currency_symbol = "$"
"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub devtools: DevtoolsSettings,
    pub ui: UiSettings,
    /// Framework modules to register, in order.
    pub modules: Vec<String>,
    pub components: Vec<ComponentDir>,
    pub format: FormatSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DevtoolsSettings {
    pub enabled: bool,
}

/// Color theme names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiSettings {
    pub primary: String,
    /// Neutral palette.
    pub gray: String,
}

/// A directory whose components are auto-registered under `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentDir {
    pub path: String,
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatSettings {
    pub decimals: u32,
    pub currency_symbol: String,
}

impl SiteConfig {
    /// The built-in configuration with no file or environment layers.
    pub fn defaults() -> Result<Self, ConfigError> {
        Config::builder().with_toml(DEFAULTS).build()
    }

    /// Built-in defaults, then the optional file at `path`, then
    /// `STOREFRONT__*` environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::builder()
            .with_toml(DEFAULTS)
            .with_file(path, false)
            .with_env(ENV_PREFIX, ENV_SEPARATOR)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::defaults().unwrap();

        assert!(config.devtools.enabled);
        assert_eq!(config.ui.primary, "green");
        assert_eq!(config.ui.gray, "cool");
        assert_eq!(config.modules, vec!["@nuxt/ui", "@nuxtjs/tailwindcss"]);
        assert_eq!(
            config.components,
            vec![ComponentDir {
                path: "~/components".into(),
                prefix: "X".into(),
            }]
        );
        assert_eq!(config.format.decimals, 2);
        assert_eq!(config.format.currency_symbol, "$");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [ui]
            primary = "teal"

            [[components]]
            path = "~/widgets"

            [format]
            currency_symbol = "€"
            "#
        )
        .unwrap();

        let config: SiteConfig = Config::builder()
            .with_toml(DEFAULTS)
            .with_file(file.path(), true)
            .build()
            .unwrap();

        assert_eq!(config.ui.primary, "teal");
        assert_eq!(config.ui.gray, "cool");
        assert_eq!(config.components.len(), 1);
        assert_eq!(config.components[0].path, "~/widgets");
        assert_eq!(config.components[0].prefix, "");
        assert_eq!(config.format.currency_symbol, "€");
        assert_eq!(config.format.decimals, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_tolerates_non_utf8_environment() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("SFK_SITE_TEST_BINARY", OsStr::from_bytes(b"\xff\xfe"));

        let config = SiteConfig::load("/nonexistent/site.toml").unwrap();
        assert_eq!(config.format.decimals, 2);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = SiteConfig::load("/nonexistent/site.toml").unwrap();
        assert_eq!(config.ui.primary, "green");
    }
}
