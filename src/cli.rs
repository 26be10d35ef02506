// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two subcommands:
// - crawl: the real work
// - samples: writes example input files to get started with
// =============================================================================

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_MAX_PAGES, DEFAULT_WORKERS};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "bangla-crawler",
    version = "0.1.0",
    about = "Crawls websites looking for Bangla words",
    long_about = "bangla-crawler crawls each domain in a list, breadth-first, and records every page \
                  where one of the target words appears. Results are saved as CSV (or JSON)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl the given domains and save the matches
    ///
    /// Example: bangla-crawler crawl --domains domain_list.txt --words word_list.txt
    Crawl(CrawlArgs),

    /// Write sample domain_list.txt and word_list.txt files
    ///
    /// Example: bangla-crawler samples --dir inputs/
    Samples {
        /// Directory to write the sample files into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// File with one domain per line (e.g. example.com, no scheme)
    #[arg(long, value_name = "FILE")]
    pub domains: PathBuf,

    /// File with one target word per line (UTF-8)
    #[arg(long, value_name = "FILE")]
    pub words: PathBuf,

    /// Where to save the results
    #[arg(long, value_name = "FILE", default_value = "results.csv")]
    pub output: PathBuf,

    /// Output file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Maximum number of pages to crawl per domain
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_PAGES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_pages: usize,

    /// Number of domains crawled at the same time
    #[arg(
        long,
        default_value_t = DEFAULT_WORKERS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub workers: usize,

    /// Log file (appended to, in addition to stderr)
    #[arg(long, value_name = "FILE", default_value = "crawler.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::try_parse_from([
            "bangla-crawler",
            "crawl",
            "--domains",
            "d.txt",
            "--words",
            "w.txt",
        ])
        .unwrap();

        let Commands::Crawl(args) = cli.command else {
            panic!("expected crawl subcommand");
        };
        assert_eq!(args.output, PathBuf::from("results.csv"));
        assert_eq!(args.max_pages, 100);
        assert_eq!(args.workers, 10);
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.log_file, PathBuf::from("crawler.log"));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = Cli::try_parse_from([
            "bangla-crawler",
            "crawl",
            "--domains",
            "d.txt",
            "--words",
            "w.txt",
            "--workers",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_crawl_requires_input_files() {
        let result = Cli::try_parse_from(["bangla-crawler", "crawl", "--words", "w.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_format() {
        let cli = Cli::try_parse_from([
            "bangla-crawler",
            "crawl",
            "--domains",
            "d.txt",
            "--words",
            "w.txt",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Crawl(args) = cli.command else {
            panic!("expected crawl subcommand");
        };
        assert_eq!(args.format, OutputFormat::Json);
    }
}
