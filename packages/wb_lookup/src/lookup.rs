use crate::config::Config;
use crate::fetch::fetch_product_data;
use crate::models::ProductInfo;
use crate::parse::parse_product_info;

use reqwest::Client;

/// Returns name and price of a product, or `None` if it cannot be found
///
/// # Arguments
/// * `client` - HTTP client instance
/// * `config` - Endpoint configuration
/// * `article` - Product identifier
pub async fn get_product_summary(
    client: &Client,
    config: &Config,
    article: u64,
) -> Option<ProductInfo> {
    let product = fetch_product_data(client, config, article).await?;
    parse_product_info(&product)
}
