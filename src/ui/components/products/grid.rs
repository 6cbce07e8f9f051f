use super::card::ProductCard;
use crate::catalog::Product;
use dioxus::prelude::*;

/// Grid of product cards for the current page
#[component]
pub fn ProductGrid(products: Vec<Product>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8",
            for product in products.iter() {
                ProductCard {
                    key: "{product.id}",
                    product: product.clone(),
                }
            }
        }
    }
}
