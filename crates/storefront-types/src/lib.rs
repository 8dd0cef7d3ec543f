use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parses the raw value kept in local storage. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartAddRequest {
    pub id: String,
    pub quantity: u32,
}

impl CartAddRequest {
    pub fn single(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quantity: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartAddResponse {
    pub item_count: u32,
}

/// Query for the predictive search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestQuery {
    pub q: String,
    pub limit: u32,
}

impl SuggestQuery {
    pub fn products(q: impl Into<String>, limit: u32) -> Self {
        Self { q: q.into(), limit }
    }

    /// Query-string pairs in the order the endpoint documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.q.clone()),
            ("resources[type]", "product".to_owned()),
            ("resources[limit]", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchSuggestResponse {
    pub resources: SuggestResources,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuggestResources {
    pub results: SuggestResults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuggestResults {
    #[serde(default)]
    pub products: Vec<ProductSuggestion>,
}

impl SearchSuggestResponse {
    pub fn into_products(self) -> Vec<ProductSuggestion> {
        self.resources.results.products
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductSuggestion {
    pub title: String,
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
}

impl ProductSuggestion {
    pub fn image_url(&self) -> Option<&str> {
        self.featured_image.as_ref().map(FeaturedImage::url)
    }
}

/// Older themes send a bare URL, newer ones an image object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FeaturedImage {
    Url(String),
    Object {
        url: String,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl FeaturedImage {
    pub fn url(&self) -> &str {
        match self {
            FeaturedImage::Url(url) => url,
            FeaturedImage::Object { url, .. } => url,
        }
    }
}

fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(f64),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(n) => n.to_string(),
    })
}
