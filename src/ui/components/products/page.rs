use super::grid::ProductGrid;
use super::pagination::PaginationStrip;
use crate::ui::products_context::ProductsContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Product browsing page: the grid for the current page plus the pagination
/// strip below it.
#[component]
pub fn Products() -> Element {
    let products_ctx = use_context::<Rc<ProductsContext>>();

    // Fetch on first display and again whenever the page selection changes.
    // Nothing else triggers a reload.
    use_effect({
        let products_ctx = products_ctx.clone();
        move || {
            let page = *products_ctx.page().read();
            let products_ctx = products_ctx.clone();
            spawn(async move {
                products_ctx.load(page).await;
            });
        }
    });

    let products = products_ctx.products().read().clone();

    // Until the first page has resolved there is nothing to show but the
    // placeholder. After that the last successful page stays on screen even
    // if a later fetch fails.
    if products.is_empty() {
        return rsx! {
            div { class: "flex justify-center items-center py-12",
                div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
                p { class: "ml-4 text-gray-600", "Loading products..." }
            }
        };
    }

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold text-center mb-8", "Our Products" }

            ProductGrid { products }

            PaginationStrip {}
        }
    }
}
