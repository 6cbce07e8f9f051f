use crate::catalog::paging;
use crate::catalog::{CatalogClient, Product};
use crate::config::use_config;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{debug, warn};

/// Shared product browsing state: current page index, the last-fetched page
/// of products, and the derived page count.
pub struct ProductsContext {
    pub(crate) page: Signal<u64>,
    pub(crate) products: Signal<Vec<Product>>,
    pub(crate) total_pages: Signal<u64>,
    /// Monotonic fetch counter. A response is applied only while its sequence
    /// number is still the latest, so an out-of-order completion cannot
    /// overwrite a newer page.
    pub(crate) load_seq: Signal<u64>,
    pub(crate) client: CatalogClient,
}

impl ProductsContext {
    pub fn new(config: &crate::config::Config) -> Self {
        Self {
            page: Signal::new(1),
            products: Signal::new(Vec::new()),
            total_pages: Signal::new(0),
            load_seq: Signal::new(0),
            client: CatalogClient::new(config.catalog_base_url.clone()),
        }
    }

    pub fn page(&self) -> Signal<u64> {
        self.page
    }

    pub fn products(&self) -> Signal<Vec<Product>> {
        self.products
    }

    pub fn total_pages(&self) -> Signal<u64> {
        self.total_pages
    }

    /// Fetch `page` and replace the displayed window with the result.
    ///
    /// A failed fetch is logged and leaves the signals untouched; the last
    /// successful page stays on screen.
    pub async fn load(&self, page: u64) {
        let mut load_seq = self.load_seq;
        let seq = *load_seq.peek() + 1;
        load_seq.set(seq);

        match self.client.get_products(page).await {
            Ok(listing) => {
                if *self.load_seq.peek() != seq {
                    debug!("Discarding stale response for page {}", page);
                    return;
                }

                let mut total_pages = self.total_pages;
                let mut products = self.products;
                total_pages.set(paging::total_pages(listing.total));
                products.set(listing.products);
            }
            Err(e) => {
                warn!("Failed to fetch product page {}: {}", page, e);
            }
        }
    }

    /// Select a page from the pagination strip. Out-of-range targets are
    /// silently ignored; in-range targets update `page`, which triggers the
    /// next load.
    pub fn select_page(&self, target: u64) {
        if !paging::in_range(target, *self.total_pages.peek()) {
            return;
        }

        let mut page = self.page;
        page.set(target);
    }
}

/// Provider component to make product browsing state available throughout
/// the app
#[component]
pub fn ProductsContextProvider(children: Element) -> Element {
    let config = use_config();
    let products_ctx = ProductsContext::new(&config);

    use_context_provider(move || Rc::new(products_ctx));

    rsx! {
        {children}
    }
}
