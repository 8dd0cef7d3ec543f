//! Predictive search and the search modal.
//!
//! Queries below the minimum length are ignored outright, with no timer
//! debounce. Requests can't be cancelled, so results are applied only if
//! they belong to the latest query typed.

use crate::controller::{OPEN, SEARCH_MODAL, Storefront};
use crate::page::Page;
use storefront_types::{ProductSuggestion, SuggestQuery};
use tracing::{debug, error};

pub const SEARCH_INPUT: &str = ".search-input";
pub const SEARCH_RESULTS: &str = ".search-results";
pub const RESULT_ITEM: &str = "search-result-item";
pub const NO_RESULTS: &str = "No products found";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    TooShort,
    Rendered(usize),
    Stale,
    Failed,
}

impl<P: Page> Storefront<P> {
    pub async fn handle_search(&self, query: &str) -> SearchOutcome {
        if query.chars().count() < self.config.search_min_chars {
            return SearchOutcome::TooShort;
        }

        let ticket = self.search_gate.begin();
        let request = SuggestQuery::products(query, self.config.search_limit);
        match self.api.search_suggest(&request).await {
            Ok(_) if !self.search_gate.is_current(ticket) => {
                debug!(query, "dropping results for superseded query");
                SearchOutcome::Stale
            }
            Ok(products) => {
                self.display_search_results(&products);
                SearchOutcome::Rendered(products.len())
            }
            Err(e) => {
                error!(query, "Search error: {}", e);
                SearchOutcome::Failed
            }
        }
    }

    /// Replace the results panel. Items are built as elements so product
    /// titles are never interpreted as markup.
    pub fn display_search_results(&self, products: &[ProductSuggestion]) {
        let Some(panel) = self.page.query(SEARCH_RESULTS) else {
            return;
        };
        self.page.clear_children(&panel);

        if products.is_empty() {
            let empty = self.page.create_element("p");
            self.page.set_text(&empty, NO_RESULTS);
            self.page.append_child(&panel, &empty);
            return;
        }

        for product in products {
            let item = self.page.create_element("div");
            self.page.add_class(&item, RESULT_ITEM);

            let img = self.page.create_element("img");
            if let Some(url) = product.image_url() {
                self.page.set_attr(&img, "src", url);
            }
            self.page.set_attr(&img, "alt", &product.title);
            self.page.append_child(&item, &img);

            let content = self.page.create_element("div");
            self.page.add_class(&content, "search-result-content");
            let title = self.page.create_element("h4");
            self.page.set_text(&title, &product.title);
            let price = self.page.create_element("p");
            self.page.set_text(&price, &product.price);
            self.page.append_child(&content, &title);
            self.page.append_child(&content, &price);
            self.page.append_child(&item, &content);

            self.page.append_child(&panel, &item);
        }
    }

    pub fn toggle_search_modal(&self) {
        let Some(modal) = self.page.query(SEARCH_MODAL) else {
            return;
        };
        self.page.toggle_class(&modal, OPEN);
        if let Some(input) = self.page.query_within(&modal, SEARCH_INPUT) {
            self.page.focus(&input);
        }
    }

    pub fn close_search_modal(&self) {
        if let Some(modal) = self.page.query(SEARCH_MODAL) {
            self.page.remove_class(&modal, OPEN);
        }
    }
}
