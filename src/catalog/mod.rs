pub mod client;
pub mod models;
pub mod paging;

pub use client::{CatalogClient, CatalogError};
pub use models::{Product, ProductPage};
pub use paging::PAGE_SIZE;
