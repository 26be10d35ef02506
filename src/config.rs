// src/config.rs
// =============================================================================
// Run configuration.
//
// Everything here is decided once at startup (from CLI flags and defaults)
// and never changes while the crawl is running.
//
// - FetchConfig: how we talk to web servers (user agent, language, timeout)
// - CrawlConfig: how hard we crawl (page budget, delay, worker cap)
// =============================================================================

use std::time::Duration;

/// Identifies the crawler to the sites it visits.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; BanglaCrawler/1.0)";

/// Prefer Bangla pages when a site offers several languages.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "bn-BD,bn;q=0.9,en-US;q=0.8,en;q=0.7";

pub const DEFAULT_MAX_PAGES: usize = 100;
pub const DEFAULT_WORKERS: usize = 10;

// Fixed politeness gap; not exposed on the command line
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Settings for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub accept_language: String,
    /// Per-request timeout (applies to each attempt, including the fallback)
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Limits that shape a crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Maximum number of HTML pages processed per domain
    pub max_pages_per_domain: usize,
    /// Sleep after every processed page
    pub delay: Duration,
    /// Maximum number of domains crawled at the same time
    pub workers: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages_per_domain: DEFAULT_MAX_PAGES,
            delay: DEFAULT_DELAY,
            workers: DEFAULT_WORKERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_pages_per_domain, 100);
        assert_eq!(config.workers, 10);
        assert_eq!(config.delay, Duration::from_secs(1));
    }

    #[test]
    fn test_fetch_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.accept_language.starts_with("bn-BD"));
    }
}
