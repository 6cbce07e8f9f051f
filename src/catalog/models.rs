use serde::{Deserialize, Serialize};

/// A single product from the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One page window of products plus the catalog-wide item count
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
}
