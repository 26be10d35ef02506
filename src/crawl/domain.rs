// src/crawl/domain.rs
// =============================================================================
// This module implements the crawl of ONE domain, breadth-first.
//
// How it works:
// 1. Start with https://<domain>/ in the frontier
// 2. While the frontier has URLs and the page budget isn't used up:
//    - Take the next URL (it is now visited, whatever happens next)
//    - Fetch it. No page? Move on, the budget is not charged
//    - Search the page text for the target words, send every match on
//    - Queue the same-host links we haven't seen yet
//    - Count the page and sleep for the politeness delay
// 3. Stop when the frontier is empty, the budget is reached, or the run
//    is cancelled
//
// Politeness:
// - The delay runs after every processed page, match or no match
// - Only the domain's own host is crawled
// =============================================================================

use tokio::sync::mpsc::UnboundedSender;
use tracing::info;
use url::Url;

use super::frontier::Frontier;
use super::{CrawlContext, CrawlError, DomainReport, MatchRecord};
use crate::extract::{links_of, search, text_of};
use crate::fetch::PageSource;

// Crawls a single domain
//
// Parameters:
//   ctx: shared run context (config, words, page source, cancel token)
//   domain: bare host name, e.g. "example.com"
//   matches: where match records go; the receiver outlives every domain
//
// Returns: a report of what was crawled, or an error if the domain could
// not be crawled at all
pub async fn crawl_domain<S: PageSource>(
    ctx: &CrawlContext<S>,
    domain: &str,
    matches: &UnboundedSender<MatchRecord>,
) -> Result<DomainReport, CrawlError> {
    let seed = seed_url(domain)?;

    info!(domain, "starting to crawl domain");

    let mut frontier = Frontier::new(seed);
    let mut report = DomainReport {
        domain: domain.to_string(),
        ..DomainReport::default()
    };

    while !frontier.is_empty() && report.pages_processed < ctx.config.max_pages_per_domain {
        if ctx.cancel.is_cancelled() {
            info!(domain, "crawl cancelled");
            break;
        }

        let Some(url) = frontier.pop() else {
            break;
        };

        report.fetch_attempts += 1;

        let Some(html) = ctx.source.fetch(&url).await else {
            continue;
        };

        let text = text_of(&html);
        for word in search(&text, &ctx.words) {
            matches
                .send(MatchRecord::new(url.as_str(), word))
                .map_err(|_| CrawlError::CollectorClosed)?;
            report.matches += 1;
        }

        for link in links_of(&url, &html) {
            frontier.push(link);
        }

        report.pages_processed += 1;

        tokio::select! {
            _ = tokio::time::sleep(ctx.config.delay) => {}
            _ = ctx.cancel.cancelled() => {}
        }
    }

    info!(
        domain,
        pages = report.pages_processed,
        discovered = frontier.seen_count(),
        matches = report.matches,
        "finished crawling domain"
    );

    Ok(report)
}

// The root page of a domain, always tried over https first
fn seed_url(domain: &str) -> Result<Url, CrawlError> {
    // An empty or malformed host makes the parse itself fail
    Url::parse(&format!("https://{}/", domain)).map_err(|source| CrawlError::InvalidDomain {
        domain: domain.to_string(),
        source,
    })
}
