// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// Submodules:
// - http: The real fetcher (reqwest) with the https <-> http fallback
//
// The crawler never talks to reqwest directly. It only knows about the
// PageSource trait below, which lets tests plug in a fake website.
// =============================================================================

mod http;

pub use http::HttpFetcher;

use async_trait::async_trait;
use url::Url;

/// Anything that can turn a URL into HTML.
///
/// `None` means "no usable page here" (network failure, error status,
/// not HTML). It is an ordinary outcome, never an error for the crawl.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &Url) -> Option<String>;
}
