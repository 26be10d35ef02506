// src/crawl/mod.rs
// =============================================================================
// This module handles crawling.
//
// Features:
// - Breadth-first crawling of each domain, starting at https://<domain>/
// - Same-host restriction (doesn't wander onto other sites)
// - A page budget per domain and a polite delay after every page
// - Many domains at once, capped by a worker limit
// - Ctrl-c support through a shared cancellation token
//
// Submodules:
// - frontier: queue + seen-set for one domain
// - domain: the crawl loop for one domain
// - pool: runs many domain loops concurrently and gathers their matches
// =============================================================================

mod domain;
mod frontier;
mod pool;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::crawl_domain;
pub use pool::run;

use serde::Serialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::CrawlConfig;

/// One "word found on page" result.
///
/// The serde names double as the CSV header and the JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Matched Word")]
    pub word: String,
}

impl MatchRecord {
    pub fn new(url: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            word: word.into(),
        }
    }
}

/// Everything a crawl run needs, created once and shared by every domain task.
pub struct CrawlContext<S> {
    pub config: CrawlConfig,
    /// Target words, in the order they were given
    pub words: Vec<String>,
    /// Where pages come from (the real HTTP fetcher, or a fake in tests)
    pub source: S,
    /// Cancelled on shutdown; loops stop before their next fetch
    pub cancel: CancellationToken,
}

impl<S> CrawlContext<S> {
    pub fn new(config: CrawlConfig, words: Vec<String>, source: S) -> Self {
        Self {
            config,
            words,
            source,
            cancel: CancellationToken::new(),
        }
    }
}

/// What a single domain's crawl did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainReport {
    pub domain: String,
    /// HTML pages that were searched (this is what the budget counts)
    pub pages_processed: usize,
    /// Every fetch attempt, including ones that came back empty
    pub fetch_attempts: usize,
    pub matches: usize,
}

/// Result of a whole run.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// All matches, in the order they were collected
    pub records: Vec<MatchRecord>,
    pub reports: Vec<DomainReport>,
    /// Domains whose crawl failed or crashed
    pub failed_domains: Vec<String>,
}

/// Failures that end one domain's crawl (never the whole run).
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("'{domain}' is not a valid domain: {source}")]
    InvalidDomain {
        domain: String,
        source: url::ParseError,
    },
    #[error("match collector stopped before the crawl finished")]
    CollectorClosed,
}
