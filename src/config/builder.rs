use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::env::load_env_vars;
use super::ConfigError;

/// A layer in the loading pipeline.
#[derive(Debug)]
enum Layer {
    Inline(String),
    File { path: PathBuf, required: bool },
    Env { prefix: String, separator: String },
}

/// Builder for layered TOML configuration.
///
/// Layers are merged in registration order, with later layers overriding
/// earlier ones. Nested tables are merged recursively; other values
/// (including arrays) are replaced entirely.
///
/// ## Example
///
/// ```no_run
/// use storefront_kit::Config;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Shop {
///     name: String,
///     decimals: u32,
/// }
///
/// let shop: Shop = Config::builder()
///     .with_toml("name = \"demo\"\ndecimals = 2")
///     .with_file("shop.toml", false)
///     .with_env("SHOP", "__")
///     .build()?;
/// # Ok::<(), storefront_kit::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    layers: Vec<Layer>,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a layer parsed from TOML source, typically embedded defaults.
    pub fn with_toml(mut self, source: impl Into<String>) -> Self {
        self.layers.push(Layer::Inline(source.into()));
        self
    }

    /// Adds a TOML file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.layers.push(Layer::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Adds overrides from environment variables named
    /// `{prefix}{separator}{SECTION}{separator}{KEY}`.
    ///
    /// Path segments are lowercased. Values are coerced to boolean, integer,
    /// float, or string, in that order.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.layers.push(Layer::Env {
            prefix: prefix.into(),
            separator: separator.into(),
        });
        self
    }

    /// Merges the layers in order and deserializes the result into `T`.
    pub fn build<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let mut merged = toml::Table::new();

        for layer in self.layers {
            match layer {
                Layer::Inline(source) => {
                    let table = toml::from_str(&source).map_err(ConfigError::InlineParseError)?;
                    tracing::trace!("merging inline config layer");
                    deep_merge(&mut merged, table);
                }
                Layer::File { path, required } => {
                    if let Some(table) = load_config_file(&path, required)? {
                        tracing::debug!(path = %path.display(), "merging config file");
                        deep_merge(&mut merged, table);
                    }
                }
                Layer::Env { prefix, separator } => {
                    load_env_vars(&mut merged, &prefix, &separator);
                }
            }
        }

        let value = toml::Value::Table(merged);
        value.try_into().map_err(ConfigError::DeserializeError)
    }
}

/// Reads a site file into a table. A missing optional file is `Ok(None)`.
fn load_config_file(path: &Path, required: bool) -> Result<Option<toml::Table>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                tracing::debug!(path = %path.display(), "optional config file not found");
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Overlays `overlay` onto `base`; only tables merge key by key.
fn deep_merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
