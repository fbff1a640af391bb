use serde::Deserialize;
use serde_json::Value;

/// Top-level body of the card detail endpoint
#[derive(Deserialize, Debug, Default)]
pub struct DetailResponse {
    /// Payload wrapper, absent on some empty answers
    pub data: Option<DetailData>,
}

/// Payload of the card detail endpoint
#[derive(Deserialize, Debug, Default)]
pub struct DetailData {
    /// Products matching the requested article, left undecoded
    pub products: Option<Vec<Value>>,
}

/// Product card as returned by the catalog, only the fields we read
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawProduct {
    /// Human-readable product name
    pub name: Option<String>,
    /// Size variants, each with its own price, left undecoded
    pub sizes: Option<Vec<Value>>,
}

impl RawProduct {
    /// Decodes the first size variant, `None` if missing or of another shape
    pub fn first_size(&self) -> Option<ProductSize> {
        let head = self.sizes.as_ref()?.first()?;
        ProductSize::deserialize(head).ok()
    }
}

/// Single size variant of a product
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProductSize {
    pub price: Option<SizePrice>,
}

/// Price block of a size variant
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SizePrice {
    /// Final price in kopecks
    pub product: Option<i64>,
}

/// Name and price of a product, price in whole roubles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInfo {
    pub name: String,
    pub price: i64,
}
