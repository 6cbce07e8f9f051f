use crate::catalog::models::{Product, ProductPage};
use crate::catalog::paging;
use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Product listing response wrapper
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
    total: u64,
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch one page of products (1-based page index)
    pub async fn get_products(&self, page: u64) -> Result<ProductPage, CatalogError> {
        if page == 0 {
            return Err(CatalogError::InvalidInput(
                "Page number must be greater than 0".to_string(),
            ));
        }

        let url = format!("{}/products", self.base_url);
        let params = paging::page_query(page);

        debug!("Catalog API: GET {} with {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header("User-Agent", "vitrine/0.1")
            .send()
            .await?;

        if response.status().is_success() {
            let listing: ProductsResponse = response.json().await?;

            debug!(
                "Catalog returned {} product(s) of {} total",
                listing.products.len(),
                listing.total
            );

            Ok(ProductPage {
                products: listing.products,
                total: listing.total,
            })
        } else {
            let status = response.status();
            warn!("Catalog API error: {}", status);
            Err(CatalogError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_client_creation() {
        let client = CatalogClient::new("https://dummyjson.com".to_string());
        assert_eq!(client.base_url, "https://dummyjson.com");
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected_without_a_request() {
        let client = CatalogClient::new("http://localhost:1".to_string());
        let result = client.get_products(0).await;
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_products_response() {
        let body = r#"{
            "products": [
                {
                    "id": 1,
                    "title": "Essence Mascara Lash Princess",
                    "description": "A popular mascara known for volumizing effects.",
                    "category": "beauty",
                    "price": 9.99,
                    "rating": 4.94,
                    "stock": 5,
                    "tags": ["beauty", "mascara"],
                    "thumbnail": "https://cdn.dummyjson.com/products/images/1/thumbnail.png"
                },
                {
                    "id": 2,
                    "title": "Eyeshadow Palette with Mirror",
                    "description": "A versatile palette with a built-in mirror.",
                    "price": 19.99,
                    "rating": 3.28,
                    "thumbnail": "https://cdn.dummyjson.com/products/images/2/thumbnail.png"
                }
            ],
            "total": 194,
            "skip": 0,
            "limit": 10
        }"#;

        let listing: ProductsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(listing.total, 194);
        assert_eq!(listing.products.len(), 2);
        assert_eq!(listing.products[0].tags, vec!["beauty", "mascara"]);
        // A missing tags array deserializes as empty
        assert!(listing.products[1].tags.is_empty());
    }
}
