//! HTTP transport for the API.
//!
//! One GET per call, no retries. The transport result and status code are
//! mapped onto [`NetworkError`] here; decoding stops at a generic JSON
//! object and model parsing is left to [`crate::parser`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::config;
use crate::error::{NetworkError, Result};
use crate::json::JsonResults;

/// Issues queries against the API over a shared, pooled HTTP client.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct MtgApiService {
    client: Client,
}

impl MtgApiService {
    /// Create a service with its own HTTP client.
    ///
    /// With `None` for both, requests carry only the transport's default
    /// headers and no deadline beyond the transport's own.
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing client, e.g. one shared with the rest of an application.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET `url` and decode the body as a JSON object.
    ///
    /// # Errors
    ///
    /// * [`NetworkError::Request`] if the request could not be completed.
    /// * [`NetworkError::UnexpectedHttpResponse`] for any status outside
    ///   `200..300`; the body is not read.
    /// * [`NetworkError::Misc`] for an empty body, malformed JSON, or JSON
    ///   whose top level is not an object.
    pub async fn query(&self, url: Url) -> Result<JsonResults> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if config::logging_enabled() {
            tracing::debug!(status = status.as_u16(), url = %resp.url(), "MTG API response");
        }

        if !status.is_success() {
            return Err(NetworkError::UnexpectedHttpResponse {
                status,
                url: resp.url().clone(),
                headers: resp.headers().clone(),
            });
        }

        let body = resp.bytes().await?;
        if body.is_empty() {
            return Err(NetworkError::Misc(
                "network operation: no data returned".to_string(),
            ));
        }

        decode_object(&body)
    }

    /// GET `url` and return the raw body of a 2xx response.
    pub async fn fetch_bytes(&self, url: Url) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Decode `body` as a JSON object.
pub fn decode_object(body: &[u8]) -> Result<JsonResults> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(NetworkError::Misc(
            "network operation: invalid json response".to_string(),
        )),
        Err(e) => Err(NetworkError::Misc(format!(
            "network operation: invalid json response ({})",
            e
        ))),
    }
}
