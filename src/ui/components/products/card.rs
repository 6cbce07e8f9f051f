use crate::catalog::Product;
use dioxus::prelude::*;

/// Individual product card
#[component]
pub fn ProductCard(product: Product) -> Element {
    rsx! {
        div { class: "bg-white p-6 rounded-lg shadow-lg border border-gray-200 hover:shadow-xl transition duration-300",
            img {
                src: "{product.thumbnail}",
                alt: "{product.title}",
                class: "w-full h-64 object-cover rounded-lg mb-4",
            }

            h2 { class: "text-2xl font-semibold text-gray-900", "{product.title}" }
            p { class: "text-gray-600 mt-2 text-sm line-clamp-3", "{product.description}" }

            div { class: "flex justify-between items-center mt-4",
                p { class: "text-lg font-bold text-green-600", "${product.price}" }
                p { class: "text-yellow-500 font-semibold", "★ {product.rating}" }
            }

            if !product.tags.is_empty() {
                div { class: "mt-4 flex flex-wrap gap-2",
                    for tag in product.tags.iter() {
                        span { class: "text-xs font-semibold bg-gray-200 text-gray-700 px-3 py-1 rounded-full",
                            "#{tag}"
                        }
                    }
                }
            }

            button { class: "w-full bg-blue-600 hover:bg-blue-700 text-white py-3 rounded-lg text-lg font-semibold mt-6 transition duration-300",
                "Buy Now"
            }
        }
    }
}
