//! Name and price lookup for Wildberries products.
//!
//! Fetches the product card for an article from the public catalog API and
//! reduces it to a [`ProductInfo`]. Every failure along the way yields `None`.

pub mod config;
pub mod fetch;
pub mod lookup;
pub mod models;
pub mod parse;

pub use config::Config;
pub use fetch::fetch_product_data;
pub use lookup::get_product_summary;
pub use models::{ProductInfo, RawProduct};
pub use parse::parse_product_info;
