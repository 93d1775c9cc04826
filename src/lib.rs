//! Magic: The Gathering SDK for Rust.
//!
//! An async client for the [magicthegathering.io](https://magicthegathering.io)
//! REST API. Search parameters are composed into a request URL, the request is
//! sent over a pooled `reqwest` client, and the JSON response is parsed into
//! [`Card`] and [`CardSet`] records. Parsing is tolerant: a field the API omits
//! or changes is left unset instead of failing the record.
//!
//! # Quick start
//!
//! ```no_run
//! use mtg_sdk::{CardQueryParameterType, CardSearchParameter, MtgSdk, SearchConfiguration};
//!
//! # async fn example() -> mtg_sdk::Result<()> {
//! let sdk = MtgSdk::builder().build()?;
//!
//! // Search cards
//! let name = CardSearchParameter::new(CardQueryParameterType::Name, "Lightning Bolt");
//! let cards = sdk.search_cards(&[name], None).await?;
//! let unique = mtg_sdk::remove_duplicates_by_name(cards);
//!
//! // Open a booster pack
//! let pack = sdk.generate_booster("KTK").await?;
//!
//! // Smaller pages
//! let sets = sdk.search_sets(&[], Some(SearchConfiguration::new(10, 2))).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Diagnostics are emitted through `tracing` and can be silenced process-wide
//! with [`config::set_logging_enabled`].

pub mod config;
pub mod error;
pub mod filter;
pub mod json;
pub mod models;
pub mod parameters;
pub mod parser;
pub mod service;
pub mod url_builder;

pub use error::{NetworkError, Result};
pub use filter::remove_duplicates_by_name;
pub use json::JsonResults;
pub use models::{Card, CardSet, ForeignName, Ruling};
pub use parameters::{
    CardQueryParameterType, CardSearchParameter, SearchConfiguration, SearchParameter,
    SetQueryParameterType, SetSearchParameter,
};
pub use service::MtgApiService;
pub use url_builder::UrlBuilder;

use std::fmt;
use std::time::Duration;

use reqwest::Url;

// ---------------------------------------------------------------------------
// MtgSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`MtgSdk`] instance.
///
/// Use [`MtgSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MtgSdkBuilder::build) to create the SDK.
pub struct MtgSdkBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
}

impl Default for MtgSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: None,
            user_agent: None,
            client: None,
        }
    }
}

impl MtgSdkBuilder {
    /// Set the API origin.
    ///
    /// Defaults to `https://api.magicthegathering.io`. A path prefix is kept,
    /// so `http://proxy.local/mtg` sends card searches to
    /// `http://proxy.local/mtg/v1/cards`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Set a per-request deadline on the HTTP client.
    ///
    /// Unset by default, leaving the transport's own behavior in place.
    /// Ignored when a client is supplied with [`client()`](Self::client).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send a `User-Agent` header. No header is added unless this is set.
    ///
    /// Ignored when a client is supplied with [`client()`](Self::client).
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Use an existing `reqwest` client instead of building one.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the SDK.
    ///
    /// The base URL is not checked here. If it cannot form request URLs,
    /// each operation fails with [`NetworkError::Misc`] before any request
    /// is sent. Fails with [`NetworkError::Request`] if the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<MtgSdk> {
        let service = match self.client {
            Some(client) => MtgApiService::with_client(client),
            None => MtgApiService::new(self.timeout, self.user_agent.as_deref())?,
        };

        Ok(MtgSdk {
            service,
            urls: UrlBuilder::new(&self.base_url),
        })
    }
}

// ---------------------------------------------------------------------------
// MtgSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Every retrieval runs the same pipeline: build the URL, send one request,
/// parse the response. A failure at any step is returned unchanged and the
/// later steps are skipped.
///
/// Cheaply cloneable; clones share one connection pool, and concurrent calls
/// are fully independent requests.
#[derive(Debug, Clone)]
pub struct MtgSdk {
    service: MtgApiService,
    urls: UrlBuilder,
}

impl MtgSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> MtgSdkBuilder {
        MtgSdkBuilder::default()
    }

    // -- Searches ----------------------------------------------------------

    /// Retrieve the cards matching `parameters`.
    ///
    /// See <https://docs.magicthegathering.io/#api_v1cards_list>. `config`
    /// defaults to [`SearchConfiguration::DEFAULT`].
    pub async fn search_cards(
        &self,
        parameters: &[CardSearchParameter],
        config: Option<SearchConfiguration>,
    ) -> Result<Vec<Card>> {
        let config = config.unwrap_or_default();
        let url = self
            .urls
            .card_search_url(parameters, &config)
            .ok_or_else(|| url_build_failed("search_cards"))?;

        let json = self.service.query(url).await?;
        Ok(parser::parse_cards(&json))
    }

    /// Retrieve the sets matching `parameters`.
    ///
    /// See <https://docs.magicthegathering.io/#api_v1sets_list>.
    pub async fn search_sets(
        &self,
        parameters: &[SetSearchParameter],
        config: Option<SearchConfiguration>,
    ) -> Result<Vec<CardSet>> {
        let config = config.unwrap_or_default();
        let url = self
            .urls
            .set_search_url(parameters, &config)
            .ok_or_else(|| url_build_failed("search_sets"))?;

        let json = self.service.query(url).await?;
        Ok(parser::parse_sets(&json))
    }

    /// Run a search and return the decoded JSON object without parsing it.
    ///
    /// The endpoint follows the parameter type: card parameters query
    /// `/v1/cards`, set parameters query `/v1/sets`.
    pub async fn fetch_json<P: SearchParameter>(
        &self,
        parameters: &[P],
        config: Option<SearchConfiguration>,
    ) -> Result<JsonResults> {
        let config = config.unwrap_or_default();
        let url = self
            .urls
            .build(parameters, P::ENDPOINT, &config)
            .ok_or_else(|| url_build_failed("fetch_json"))?;

        self.service.query(url).await
    }

    // -- Boosters and images -----------------------------------------------

    /// Simulate opening a booster pack of the given set.
    ///
    /// The pack is generated by the API; this only parses the returned cards.
    pub async fn generate_booster(&self, set_code: &str) -> Result<Vec<Card>> {
        let url = self
            .urls
            .booster_url(set_code)
            .ok_or_else(|| url_build_failed("generate_booster"))?;

        let json = self.service.query(url).await?;
        Ok(parser::parse_cards(&json))
    }

    /// Download and decode the artwork at `card.image_url`.
    ///
    /// Every failure, including transport errors, is reported as
    /// [`NetworkError::FetchImage`].
    pub async fn fetch_image(&self, card: &Card) -> Result<image::DynamicImage> {
        let raw = card.image_url.as_deref().ok_or_else(|| {
            NetworkError::FetchImage("fetch_image: card has no image url".to_string())
        })?;

        let url = Url::parse(raw).map_err(|e| {
            NetworkError::FetchImage(format!("fetch_image: malformed image url '{}': {}", raw, e))
        })?;

        let bytes = self.service.fetch_bytes(url).await.map_err(|e| {
            NetworkError::FetchImage(format!("fetch_image: download failed: {}", e))
        })?;

        image::load_from_memory(&bytes).map_err(|e| {
            NetworkError::FetchImage(format!("fetch_image: could not decode image data: {}", e))
        })
    }

    // -- Accessors ---------------------------------------------------------

    /// The URL builder bound to this SDK's origin.
    pub fn url_builder(&self) -> &UrlBuilder {
        &self.urls
    }

    /// The underlying HTTP service, for issuing custom queries.
    pub fn service(&self) -> &MtgApiService {
        &self.service
    }
}

fn url_build_failed(operation: &str) -> NetworkError {
    NetworkError::Misc(format!("{}: url build failed", operation))
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MtgSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MtgSdk(base_url={}, logging={})",
            self.urls.base(),
            config::logging_enabled()
        )
    }
}
