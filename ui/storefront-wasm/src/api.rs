//! Storefront HTTP API.
//!
//! Two calls: add a variant to the cart and fetch predictive search
//! suggestions. `HttpApi` speaks to the shop with `gloo-net`; the trait
//! lets tests substitute a scripted client.

use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use async_trait::async_trait;
use gloo_net::http::Request;
use storefront_types::{
    CartAddRequest, CartAddResponse, ProductSuggestion, SearchSuggestResponse, SuggestQuery,
};

#[async_trait(?Send)]
pub trait StorefrontApi {
    async fn add_to_cart(&self, request: &CartAddRequest) -> Result<CartAddResponse>;
    async fn search_suggest(&self, query: &SuggestQuery) -> Result<Vec<ProductSuggestion>>;
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    cart_add_url: String,
    search_suggest_url: String,
}

impl HttpApi {
    pub fn new(config: &StorefrontConfig) -> Self {
        HttpApi {
            cart_add_url: config.cart_add_url(),
            search_suggest_url: config.search_suggest_url(),
        }
    }
}

#[async_trait(?Send)]
impl StorefrontApi for HttpApi {
    /// POST /cart/add.js
    async fn add_to_cart(&self, request: &CartAddRequest) -> Result<CartAddResponse> {
        let resp = Request::post(&self.cart_add_url)
            .header("Accept", "application/json")
            .json(request)?
            .send()
            .await?;

        if !resp.ok() {
            return Err(StorefrontError::Status {
                status: resp.status(),
            });
        }
        Ok(resp.json::<CartAddResponse>().await?)
    }

    /// GET /search/suggest.json?q=..&resources[type]=product&resources[limit]=5
    async fn search_suggest(&self, query: &SuggestQuery) -> Result<Vec<ProductSuggestion>> {
        let params = query.params();
        let resp = Request::get(&self.search_suggest_url)
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await?;

        if !resp.ok() {
            return Err(StorefrontError::Status {
                status: resp.status(),
            });
        }
        let body = resp.json::<SearchSuggestResponse>().await?;
        Ok(body.into_products())
    }
}

#[cfg(test)]
pub use mock::MockApi;
