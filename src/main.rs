use anyhow::{Context, Result};
use login_guard::config::{self, Config};
use login_guard::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_json_logging() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
