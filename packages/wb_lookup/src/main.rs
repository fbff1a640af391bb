//! A CLI tool that prints the name and price of a Wildberries product.
//!
//! It takes an article from the command line (or a built-in default),
//! optionally reads endpoint settings from a yaml configuration file,
//! and queries the catalog card API once.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use reqwest::Client;
use wb_lookup::config::{Args, Config};
use wb_lookup::get_product_summary;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let client = Client::builder()
        .timeout(config.timeout())
        .build()
        .context("Failed to build HTTP client")?;

    info!("Looking up article {}", args.article);

    match get_product_summary(&client, &config, args.article).await {
        Some(product) => println!("Название: {}, Цена: {} рублей", product.name, product.price),
        None => println!("Товар не найден"),
    }

    Ok(())
}
