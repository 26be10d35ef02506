// src/crawl/pool.rs
// =============================================================================
// This module runs one crawl per domain, several at a time.
//
// Key functionality:
// - At most `workers` domains are crawling at any moment; the rest wait
//   for a free slot
// - Each domain runs in its own tokio task, so a crash (panic) in one
//   domain is caught here and the other domains keep going
// - Matches from every domain flow through a channel to a single collector
//   task, which owns the result list
//
// Rust concepts:
// - Arc: Share one context between many tasks
// - mpsc channel: Many senders (domains), one receiver (the collector)
// - buffer_unordered: Run up to N futures at once
// =============================================================================

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinError;
use tracing::{error, info};

use super::{crawl_domain, CrawlContext, CrawlError, CrawlOutcome, DomainReport, MatchRecord};
use crate::fetch::PageSource;

// How one domain ended up
enum DomainResult {
    Finished(DomainReport),
    Failed(CrawlError),
    Crashed(JoinError),
    Skipped,
}

// Crawls every domain and returns everything that was found
//
// Parameters:
//   ctx: the run context, shared by all domain tasks
//   domains: bare host names, crawled in this order as slots free up
//
// Returns: all match records plus a per-domain report. A domain that fails
// or panics is listed in `failed_domains`; whatever it found before that
// point is kept.
pub async fn run<S>(ctx: Arc<CrawlContext<S>>, domains: Vec<String>) -> CrawlOutcome
where
    S: PageSource + 'static,
{
    let workers = ctx.config.workers.max(1);
    info!(domains = domains.len(), workers, "starting crawl");

    let (tx, mut rx) = mpsc::unbounded_channel::<MatchRecord>();

    let collector = tokio::spawn(async move {
        let mut records = Vec::new();
        while let Some(record) = rx.recv().await {
            info!(url = %record.url, word = %record.word, "found match");
            records.push(record);
        }
        records
    });

    let crawls = domains.into_iter().map(|domain| {
        let ctx = Arc::clone(&ctx);
        let tx = tx.clone();
        async move {
            // Domains still waiting for a slot when the run is cancelled
            // never start
            if ctx.cancel.is_cancelled() {
                return (domain, DomainResult::Skipped);
            }

            let task_domain = domain.clone();
            let handle =
                tokio::spawn(async move { crawl_domain(&ctx, &task_domain, &tx).await });

            let result = match handle.await {
                Ok(Ok(report)) => DomainResult::Finished(report),
                Ok(Err(e)) => DomainResult::Failed(e),
                Err(e) => DomainResult::Crashed(e),
            };
            (domain, result)
        }
    });

    // The futures above only spawn their task once buffer_unordered polls
    // them, so this is what enforces the worker cap
    let results: Vec<(String, DomainResult)> = stream::iter(crawls)
        .buffer_unordered(workers)
        .collect()
        .await;

    // Every domain task is done; dropping the last sender ends the collector
    drop(tx);

    let records = match collector.await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "match collector crashed, results are lost");
            Vec::new()
        }
    };

    let mut outcome = CrawlOutcome {
        records,
        ..CrawlOutcome::default()
    };

    for (domain, result) in results {
        match result {
            DomainResult::Finished(report) => outcome.reports.push(report),
            DomainResult::Failed(e) => {
                error!(%domain, error = %e, "domain crawl failed");
                outcome.failed_domains.push(domain);
            }
            DomainResult::Crashed(e) => {
                error!(%domain, error = %e, "domain crawl crashed");
                outcome.failed_domains.push(domain);
            }
            DomainResult::Skipped => info!(%domain, "skipped, crawl was cancelled"),
        }
    }

    info!(
        domains = outcome.reports.len(),
        failed = outcome.failed_domains.len(),
        matches = outcome.records.len(),
        "crawl finished"
    );

    outcome
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tokio::spawn inside buffer_unordered?
//    - buffer_unordered alone would run every crawl inside this one future,
//      so a panic in any domain would take the whole run down
//    - A spawned task that panics just returns Err(JoinError) when awaited
//
// 2. Why a channel instead of Arc<Mutex<Vec<_>>>?
//    - Only the collector task ever touches the result list, so no lock
//    - Each domain sends its matches in order, which keeps per-domain
//      order in the final list
//
// 3. When does the collector stop?
//    - recv() returns None once every Sender has been dropped
//    - Each domain task owns a clone; we drop the original after all
//      domains are done
// -----------------------------------------------------------------------------
