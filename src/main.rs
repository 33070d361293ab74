use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use coinpager::config::Config;
use coinpager::fetch::HttpPageFetcher;
use coinpager::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "coinpager", version, about = "Browse coin prices page by page")]
struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override quote currency (e.g., usd, eur)
    #[arg(long)]
    currency: Option<String>,

    /// Override coins per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Override price API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(currency) = &self.currency {
            config.source.currency = currency.clone();
        }
        if let Some(page_size) = self.page_size {
            config.source.page_size = page_size;
        }
        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("Failed to load config from {}", Config::config_path().display())
        })?,
    };
    cli.apply(&mut config);
    config.validate().context("Invalid command line override")?;

    tracing::info!(
        base_url = %config.source.base_url,
        currency = %config.source.currency,
        page_size = config.source.page_size,
        "Starting coinpager"
    );

    let fetcher = HttpPageFetcher::new(&config.source).context("Failed to set up price source")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime
        .block_on(coinpager::ui::run(&config.ui, Arc::new(fetcher)))
        .context("Terminal UI failed")?;

    Ok(())
}
