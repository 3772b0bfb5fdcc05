use storefront_kit::{to_formatted_amount, AppContext, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("storefront_kit=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), storefront_kit::Error> {
    init_logger();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "site.toml".to_string());

    let ctx = AppContext::builder()
        .with_config(SiteConfig::load(&path)?)
        .build()?;
    let config = ctx.config();

    println!("Runtime: {}", ctx.runtime());
    println!(
        "Theme: primary={} gray={} (devtools={})",
        config.ui.primary, config.ui.gray, config.devtools.enabled
    );
    for dir in &config.components {
        println!("Components: {} (prefix '{}')", dir.path, dir.prefix);
    }

    let prices = ctx.price_formatter();
    for raw in ["9.999", "1234.5", "", "0.0049"] {
        println!("{raw:>8} -> {}", prices.format(raw)?);
    }
    println!("Grouped: {}", to_formatted_amount(1234567));

    Ok(())
}
