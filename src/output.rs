// src/output.rs
// =============================================================================
// Saving the match records.
//
// Two formats:
// - csv (default): header "URL,Matched Word", one row per match
// - json: a pretty-printed array of {"URL": ..., "Matched Word": ...}
//
// Rows keep the order in which matches were collected. A failure here is
// fatal for the run, because it means losing everything we crawled.
// =============================================================================

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::crawl::MatchRecord;

const CSV_HEADER: [&str; 2] = ["URL", "Matched Word"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

pub fn write_results(path: &Path, records: &[MatchRecord], format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => write_csv(writer, records),
        OutputFormat::Json => write_json(writer, records),
    }
    .with_context(|| format!("Failed to write results to {}", path.display()))
}

fn write_csv<W: Write>(writer: W, records: &[MatchRecord]) -> Result<()> {
    // The header is written by hand so that an empty result still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, records: &[MatchRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
