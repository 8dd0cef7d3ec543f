//! Runtime configuration.
//!
//! Read from an optional `<script id="storefront-config" type="application/json">`
//! block so a theme can relocate endpoints or relabel the cart button without
//! rebuilding the module. Every field is optional.

use crate::page::Page;
use serde::{Deserialize, Serialize};
use storefront_types::ThemeMode;

pub const CONFIG_SELECTOR: &str = "#storefront-config";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Prefix for both endpoints; empty means same origin.
    pub shop_root: String,
    pub cart_add_path: String,
    pub search_suggest_path: String,
    pub search_limit: u32,
    pub search_min_chars: usize,
    pub theme_storage_key: String,
    pub default_theme: ThemeMode,
    pub notification_ms: u32,
    pub adding_label: String,
    pub log_level: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            shop_root: String::new(),
            cart_add_path: "/cart/add.js".to_owned(),
            search_suggest_path: "/search/suggest.json".to_owned(),
            search_limit: 5,
            search_min_chars: 2,
            theme_storage_key: "theme".to_owned(),
            default_theme: ThemeMode::Dark,
            notification_ms: 3000,
            adding_label: "Adding...".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl StorefrontConfig {
    pub fn cart_add_url(&self) -> String {
        format!("{}{}", self.shop_root.trim_end_matches('/'), self.cart_add_path)
    }

    pub fn search_suggest_url(&self) -> String {
        format!(
            "{}{}",
            self.shop_root.trim_end_matches('/'),
            self.search_suggest_path
        )
    }
}

/// Load the config block from the page, falling back to defaults.
pub fn load<P: Page>(page: &P) -> StorefrontConfig {
    let Some(node) = page.query(CONFIG_SELECTOR) else {
        return StorefrontConfig::default();
    };
    let raw = page.text(&node);
    if raw.trim().is_empty() {
        return StorefrontConfig::default();
    }
    match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring invalid storefront config: {}", e);
            StorefrontConfig::default()
        }
    }
}
