use crate::ui::products_context::ProductsContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Row of page-selector controls below the grid.
///
/// "Previous" renders only past the first page and "next" only before the
/// last; the control for the current page is marked active. Activating any
/// control goes through `select_page`, so out-of-range targets are ignored.
#[component]
pub fn PaginationStrip() -> Element {
    let products_ctx = use_context::<Rc<ProductsContext>>();
    let page = *products_ctx.page().read();
    let total_pages = *products_ctx.total_pages().read();

    if total_pages == 0 {
        return rsx! {
            div {}
        };
    }

    rsx! {
        div { class: "p-2 my-4 flex justify-center gap-1",
            if page > 1 {
                span {
                    class: "pagination-child",
                    onclick: {
                        let products_ctx = products_ctx.clone();
                        move |_| products_ctx.select_page(page - 1)
                    },
                    "←"
                }
            }

            for target in 1..=total_pages {
                span {
                    key: "{target}",
                    class: if target == page { "pagination-child active" } else { "pagination-child" },
                    onclick: {
                        let products_ctx = products_ctx.clone();
                        move |_| products_ctx.select_page(target)
                    },
                    "{target}"
                }
            }

            if page < total_pages {
                span {
                    class: "pagination-child",
                    onclick: {
                        let products_ctx = products_ctx.clone();
                        move |_| products_ctx.select_page(page + 1)
                    },
                    "→"
                }
            }
        }
    }
}
