use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use botc_icon_scraper::{
    default_urls, merge_icons, merge_path_keys, resolve_merge_path, scrape_icons, to_json_pretty,
};
use clap::Parser;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(
    name = "icon_scraper",
    about = "Scrape character icons from the Blood on the Clocktower wiki"
)]
struct Cli {
    /// Override the wiki URLs to scrape
    #[arg(long = "url", num_args = 1.., value_name = "URL")]
    urls: Vec<String>,

    /// Merge into existing JSON file
    #[arg(long, value_name = "FILE")]
    merge_into: Option<PathBuf>,

    /// Dot-separated path to merge into in the existing JSON file
    #[arg(long, value_name = "DOTTED.PATH")]
    merge_path: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let urls = if cli.urls.is_empty() {
        default_urls()
    } else {
        cli.urls
    };

    let records = scrape_icons(&urls)?;

    let output = match cli.merge_into {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let mut data: Value = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

            let keys = merge_path_keys(cli.merge_path.as_deref());

            let existing = resolve_merge_path(&mut data, &keys)?;
            merge_icons(existing, &records)?;

            to_json_pretty(&data)?
        }
        None => to_json_pretty(&records)?,
    };

    println!("{}", output);

    Ok(())
}
