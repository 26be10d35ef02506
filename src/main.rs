// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Save the results and print a summary
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: Because we crawl many domains concurrently
// - Arc: One crawl context shared by every domain task
// - Result<T, E>: For error handling
// =============================================================================

mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - run configuration and defaults
mod crawl;     // src/crawl/ - frontier, per-domain loop, worker pool
mod extract;   // src/extract/ - links, visible text, keyword search
mod fetch;     // src/fetch/ - HTTP fetching with scheme fallback
mod input;     // src/input.rs - domain/word list files
mod logging;   // src/logging.rs - tracing setup
mod output;    // src/output.rs - CSV/JSON result files

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use cli::{Cli, Commands, CrawlArgs};
use config::{CrawlConfig, FetchConfig};
use crawl::{CrawlContext, CrawlOutcome};
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl(args) => handle_crawl(args).await,
        Commands::Samples { dir } => handle_samples(&dir),
    }
}

// Handles the 'crawl' subcommand
//
// Input files are read before anything touches the network, so a typo in a
// path fails immediately.
async fn handle_crawl(args: CrawlArgs) -> Result<i32> {
    logging::init(Some(&args.log_file))?;

    let domains = input::load_list(&args.domains)?;
    let words = input::load_list(&args.words)?;

    if domains.is_empty() || words.is_empty() {
        warn!(
            domains = domains.len(),
            words = words.len(),
            "nothing to crawl, domain or word list is empty"
        );
        return Ok(0);
    }

    info!("Starting Bangla Word Web Crawler");

    let config = CrawlConfig {
        max_pages_per_domain: args.max_pages,
        workers: args.workers,
        ..CrawlConfig::default()
    };
    let fetcher = HttpFetcher::new(&FetchConfig::default())?;
    let ctx = Arc::new(CrawlContext::new(config, words, fetcher));

    // Ctrl-c stops new fetches; pages already in flight finish or time out,
    // and whatever was found so far is still saved
    let cancel = ctx.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("shutdown requested, finishing pages in flight");
            cancel.cancel();
        }
    });

    let outcome = crawl::run(ctx, domains).await;

    save_results(&args.output, &outcome, args.format)?;
    print_summary(&outcome, &args.output);

    info!("Crawling completed");
    Ok(0)
}

fn save_results(path: &Path, outcome: &CrawlOutcome, format: output::OutputFormat) -> Result<()> {
    if let Err(e) = output::write_results(path, &outcome.records, format) {
        error!(error = %format!("{:#}", e), "error saving results");
        return Err(e);
    }

    info!(
        path = %path.display(),
        total = outcome.records.len(),
        "results saved"
    );
    Ok(())
}

// Handles the 'samples' subcommand
fn handle_samples(dir: &Path) -> Result<i32> {
    logging::init(None)?;

    let (domains_path, words_path) = input::write_samples(dir)?;
    info!(
        domains = %domains_path.display(),
        words = %words_path.display(),
        "sample files created"
    );
    Ok(0)
}

fn print_summary(outcome: &CrawlOutcome, output_path: &Path) {
    let pages: usize = outcome.reports.iter().map(|r| r.pages_processed).sum();
    let attempts: usize = outcome.reports.iter().map(|r| r.fetch_attempts).sum();

    println!();
    println!("📊 Summary:");
    println!("   🌐 Domains crawled: {}", outcome.reports.len());
    for report in &outcome.reports {
        println!(
            "      {:<40} {:>5} page(s) {:>5} match(es)",
            report.domain, report.pages_processed, report.matches
        );
    }
    if !outcome.failed_domains.is_empty() {
        println!(
            "   ❌ Domains failed: {} ({})",
            outcome.failed_domains.len(),
            outcome.failed_domains.join(", ")
        );
    }
    println!("   📄 Pages searched: {} ({} fetch attempts)", pages, attempts);
    println!("   🔍 Matches: {}", outcome.records.len());
    println!("   💾 Saved to: {}", output_path.display());
}
