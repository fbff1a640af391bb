use crate::config::Config;
use crate::models::{DetailResponse, RawProduct};

use anyhow::{Context, Result};
use log::{debug, error, info};
use reqwest::{Client, Url};

/// Builds the card detail URL for an article
///
/// # Arguments
/// * `config` - Endpoint configuration
/// * `article` - Product identifier, sent as `nm`
pub fn build_detail_url(config: &Config, article: u64) -> Result<Url> {
    let params = [
        ("appType", config.app_type.to_string()),
        ("curr", config.currency.clone()),
        ("dest", config.dest.to_string()),
        ("hide_dtype", config.hide_dtype.to_string()),
        ("spp", config.spp.to_string()),
        ("ab_testing", config.ab_testing.to_string()),
        ("lang", config.lang.clone()),
        ("nm", article.to_string()),
    ];
    Url::parse_with_params(&config.base_url, &params)
        .with_context(|| format!("Invalid base URL: {}", config.base_url))
}

/// Takes the first product out of a decoded detail body
///
/// Only the head of the list is decoded; a missing or `null` list is no
/// product, a head of the wrong shape is an error.
pub fn first_product(response: DetailResponse) -> Result<Option<RawProduct>> {
    let Some(head) = response
        .data
        .and_then(|data| data.products)
        .and_then(|products| products.into_iter().next())
    else {
        return Ok(None);
    };
    let product = serde_json::from_value(head).context("Unexpected product shape")?;
    Ok(Some(product))
}

async fn request_product(
    client: &Client,
    config: &Config,
    article: u64,
) -> Result<Option<RawProduct>> {
    let url = build_detail_url(config, article)?;
    debug!("GET {}", url);

    let response = client
        .get(url)
        .timeout(config.timeout())
        .send()
        .await
        .context("Failed to fetch product data")?
        .error_for_status()
        .context("Catalog returned an error status")?;

    let body: DetailResponse = response
        .json()
        .await
        .context("Failed to parse product JSON")?;

    info!(
        "Article {}: {} product(s) in response",
        article,
        body.data
            .as_ref()
            .and_then(|d| d.products.as_ref())
            .map_or(0, |p| p.len())
    );
    first_product(body)
}

/// Fetches the raw product card for an article
///
/// Transport errors, error statuses and undecodable bodies are logged and
/// reported as `None`, the same as an article with no products.
///
/// # Arguments
/// * `client` - HTTP client instance
/// * `config` - Endpoint configuration
/// * `article` - Product identifier
pub async fn fetch_product_data(
    client: &Client,
    config: &Config,
    article: u64,
) -> Option<RawProduct> {
    match request_product(client, config, article).await {
        Ok(product) => product,
        Err(e) => {
            error!("Lookup of article {} failed: {:#}", article, e);
            None
        }
    }
}
