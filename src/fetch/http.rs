// src/fetch/http.rs
// =============================================================================
// This module fetches HTML pages over HTTP(S).
//
// Key functionality:
// - Makes HTTP GET requests with a fixed user agent and a Bangla language
//   preference
// - Only accepts responses whose Content-Type says HTML
// - If a request fails (network error or non-2xx status), retries ONCE with
//   the other scheme (https -> http, or http -> https)
//
// Rust concepts:
// - async/await: For network I/O
// - thiserror: To describe why a single attempt failed
// - Option<T>: The crawler only cares whether it got a page or not
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use url::Url;

use super::PageSource;
use crate::config::FetchConfig;

/// Why a single fetch attempt did not produce HTML.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Timeout, DNS failure, refused connection, TLS failure, broken body...
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("not an HTML page (content-type: {0:?})")]
    NotHtml(String),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl FetchError {
    /// Only transport failures and error statuses are worth a second try
    /// on the other scheme. A page that is simply not HTML stays that way.
    fn wants_fallback(&self) -> bool {
        matches!(self, FetchError::Http(_) | FetchError::Status(_))
    }
}

/// The production page source.
///
/// Cloning is cheap: reqwest's Client is a reference-counted handle to one
/// shared connection pool, so every domain task can use the same fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)?,
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }

    // One GET request, no retries
    async fn fetch_once(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::NotHtml(content_type));
        }

        // text() decodes using the charset from the Content-Type header
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Option<String> {
        let first_error = match self.fetch_once(url).await {
            Ok(html) => return Some(html),
            Err(e) => e,
        };

        if !first_error.wants_fallback() {
            debug!(%url, error = %first_error, "skipping page");
            return None;
        }

        let fallback = match toggle_scheme(url) {
            Some(fallback) => fallback,
            None => {
                warn!(%url, error = %first_error, "fetch failed and no fallback scheme exists");
                return None;
            }
        };

        warn!(
            %url,
            error = %first_error,
            "fetch failed, attempting fallback to {}",
            fallback.scheme()
        );

        match self.fetch_once(&fallback).await {
            Ok(html) => {
                info!(%url, %fallback, "fallback successful");
                Some(html)
            }
            Err(e) => {
                error!(%url, error = %e, "fallback also failed");
                None
            }
        }
    }
}

/// Returns the same URL with http and https swapped.
///
/// Host, port, path and query are kept as they are. Any other scheme has
/// no fallback and yields None.
pub fn toggle_scheme(url: &Url) -> Option<Url> {
    let other = match url.scheme() {
        "https" => "http",
        "http" => "https",
        _ => return None,
    };

    let mut fallback = url.clone();
    // Switching between two "special" schemes always succeeds
    fallback.set_scheme(other).ok()?;
    Some(fallback)
}

fn is_html(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}
