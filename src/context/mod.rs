//! Application context for managing shared application state.

use crate::config::SiteConfig;
use crate::format::PriceFormatter;
use crate::runtime::{self, Runtime};
use crate::Error;

/// Site configuration plus the runtime it was loaded in, shared by presentation code.
///
/// ## Example
///
/// ```no_run
/// use storefront_kit::{AppContext, SiteConfig};
///
/// let ctx = AppContext::builder()
///     .with_config(SiteConfig::load("site.toml")?)
///     .build()?;
///
/// let prices = ctx.price_formatter();
/// println!("{}", prices.format(19.999)?);
/// # Ok::<(), storefront_kit::Error>(())
/// ```
#[derive(Debug)]
pub struct AppContext<C> {
    config: C,
    runtime: Runtime,
}

impl<C> AppContext<C> {
    /// The configuration loaded when the context was built.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Where this process runs; fixed for its lifetime.
    pub fn runtime(&self) -> Runtime {
        self.runtime
    }
}

impl AppContext<SiteConfig> {
    /// A price formatter using the configured precision and currency symbol.
    pub fn price_formatter(&self) -> PriceFormatter<String> {
        PriceFormatter::from_settings(&self.config.format)
    }
}

impl AppContext<()> {
    /// Starts a context with no configuration attached yet.
    pub fn builder() -> AppContextBuilder<()> {
        AppContextBuilder { config: None }
    }
}

/// Collects what an [`AppContext`] needs. Its type parameter becomes the
/// configuration type once [`with_config`](Self::with_config) is called.
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder<C> {
    config: Option<C>,
}

impl AppContextBuilder<()> {
    /// Uses `config`, typically a loaded [`SiteConfig`], for the context.
    pub fn with_config<C>(self, config: C) -> AppContextBuilder<C> {
        AppContextBuilder {
            config: Some(config),
        }
    }
}

impl<C> AppContextBuilder<C> {
    /// Finishes the context and records the detected [`Runtime`].
    ///
    /// Fails with [`Error::MissingConfig`] when no configuration was attached.
    pub fn build(self) -> Result<AppContext<C>, Error> {
        Ok(AppContext {
            config: self.config.ok_or(Error::MissingConfig)?,
            runtime: runtime::runtime(),
        })
    }
}
