use clap::Parser;
use lanzara_pubs::config::{load_config, Config};
use lanzara_pubs::logger::{self, init_logger, StdoutLogger};
use lanzara_pubs::scrapers::publications::PublicationsScraper;
use std::fs;

#[derive(Parser)]
#[command(name = "lanzara-pubs")]
#[command(about = "Scrape the group publications page into JSON", long_about = None)]
struct Cli {
    /// Path to a JSON config file; defaults are used when omitted
    #[arg(long)]
    config: Option<String>,

    /// Override the page URL
    #[arg(long)]
    url: Option<String>,

    /// Override the output file path
    #[arg(long)]
    out: Option<String>,

    /// Disable the on-disk page cache
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(StdoutLogger);

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(url) = cli.url {
        config.page.url = url;
    }
    if let Some(out) = cli.out {
        config.page.output_path = out;
    }
    if cli.no_cache {
        config.page.cache_dir = None;
    }

    logger::info(&format!("scraping {}", config.page.url));
    let scraper = PublicationsScraper::with_config(config.page.clone());
    let records = scraper.scrape().await?;
    logger::info(&format!("extracted {} publication records", records.len()));

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&config.page.output_path, json)?;
    logger::info(&format!("wrote {}", config.page.output_path));

    Ok(())
}
