//! Request URL construction.
//!
//! Query strings always begin with `page` then `pageSize`, followed by one
//! entry per search parameter in the order given. Names and values are
//! percent-encoded; nothing is validated or de-duplicated.
//!
//! # Example
//!
//! ```rust
//! use mtg_sdk::{CardQueryParameterType, CardSearchParameter, SearchConfiguration, UrlBuilder};
//!
//! let url = UrlBuilder::default()
//!     .card_search_url(
//!         &[CardSearchParameter::new(CardQueryParameterType::Name, "Lightning Bolt")],
//!         &SearchConfiguration::default(),
//!     )
//!     .unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.magicthegathering.io/v1/cards?page=1&pageSize=100&name=Lightning%20Bolt"
//! );
//! ```

use reqwest::Url;

use crate::config;
use crate::parameters::{
    CardSearchParameter, SearchConfiguration, SearchParameter, SetSearchParameter,
};

/// Builds endpoint URLs against a fixed API origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(config::API_BASE)
    }
}

impl UrlBuilder {
    /// Create a builder for the given origin (scheme, host, optional port and
    /// path prefix). The origin is only checked when a URL is built.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL for `/v1/cards` with the given filters.
    pub fn card_search_url(
        &self,
        parameters: &[CardSearchParameter],
        config: &SearchConfiguration,
    ) -> Option<Url> {
        self.build(parameters, config::CARDS_PATH, config)
    }

    /// URL for `/v1/sets` with the given filters.
    pub fn set_search_url(
        &self,
        parameters: &[SetSearchParameter],
        config: &SearchConfiguration,
    ) -> Option<Url> {
        self.build(parameters, config::SETS_PATH, config)
    }

    /// Compose origin, `path` and the query string.
    ///
    /// Returns `None` when the pieces cannot form a URL, e.g. an origin
    /// that does not parse or cannot carry a path.
    pub fn build<P: SearchParameter>(
        &self,
        parameters: &[P],
        path: &str,
        config: &SearchConfiguration,
    ) -> Option<Url> {
        let mut url = self.origin()?;

        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", prefix, path));
        url.set_query(Some(&query_string(parameters, config)));

        if config::logging_enabled() {
            tracing::debug!(url = %url, "built request URL");
        }

        Some(url)
    }

    /// URL for `/v1/sets/{set_code}/booster`.
    ///
    /// The set code is encoded as a single path segment, so a `/` in it
    /// cannot escape into another route.
    pub fn booster_url(&self, set_code: &str) -> Option<Url> {
        let mut url = self.origin()?;
        {
            let mut segments = url.path_segments_mut().ok()?;
            segments.pop_if_empty();
            segments.extend(config::SETS_PATH.split('/').filter(|s| !s.is_empty()));
            segments.push(set_code);
            segments.push(config::BOOSTER_SEGMENT);
        }
        Some(url)
    }

    /// The parsed base with any query or fragment dropped; only scheme,
    /// authority and path prefix carry into request URLs.
    fn origin(&self) -> Option<Url> {
        let mut url = Url::parse(&self.base).ok()?;
        if url.cannot_be_a_base() {
            return None;
        }
        url.set_query(None);
        url.set_fragment(None);
        Some(url)
    }
}

/// Encode `page`, `pageSize` and every parameter as `name=value` pairs.
pub fn query_string<P: SearchParameter>(parameters: &[P], config: &SearchConfiguration) -> String {
    let mut pairs = Vec::with_capacity(parameters.len() + 2);
    pairs.push(format!("page={}", config.page));
    pairs.push(format!("pageSize={}", config.page_size));

    for p in parameters {
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(p.name()),
            urlencoding::encode(p.value())
        ));
    }

    pairs.join("&")
}
