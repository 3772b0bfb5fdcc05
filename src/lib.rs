pub mod config;
pub mod context;
mod error;
pub mod format;
pub mod runtime;

pub use config::{Config, ConfigError, SiteConfig};
pub use context::AppContext;
pub use error::Error;
pub use format::{
    format_price, from_formatted_amount, round, sum, to_formatted_amount, Amount, FormatError,
    PriceFormatter,
};
pub use runtime::{is_client, is_server, Runtime};
