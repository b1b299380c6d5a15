//! Scrape the built-in target page and print the extracted styling.

use anyhow::Result;
use stylescan::scrape_url;
use tracing::info;

/// Page scraped when the binary runs directly.
const TARGET_URL: &str = "https://growgrows.com/en-us/products/plentiful-planets-sleepsuit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stylescan=info".parse()?),
        )
        .init();

    info!("scraping {TARGET_URL}");

    let response = scrape_url(TARGET_URL).await?;

    println!("Scrape Response:");
    println!("Fonts: {}", serde_json::to_string_pretty(&response.fonts)?);
    println!(
        "Primary Button: {}",
        serde_json::to_string_pretty(&response.primary_button)?
    );

    Ok(())
}
