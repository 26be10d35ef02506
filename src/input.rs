// src/input.rs
// =============================================================================
// Reading the domain and word lists, and writing sample copies of them.
//
// File format (both lists): UTF-8 text, one entry per line. Surrounding
// whitespace is trimmed and blank lines are ignored.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_DOMAINS_FILE: &str = "domain_list.txt";
pub const SAMPLE_WORDS_FILE: &str = "word_list.txt";

const SAMPLE_DOMAINS: [&str; 2] = ["example.com", "wikipedia.org"];
const SAMPLE_WORDS: [&str; 3] = ["বাংলাদেশ", "আমাদের", "সফটওয়্যার"];

/// Loads a list file, keeping the order of its entries.
///
/// A missing or unreadable file is an error; the crawl must not start.
pub fn load_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_list(&content))
}

fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Writes `domain_list.txt` and `word_list.txt` into `dir`.
///
/// Returns the two paths that were written.
pub fn write_samples(dir: &Path) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let domains_path = dir.join(SAMPLE_DOMAINS_FILE);
    fs::write(&domains_path, SAMPLE_DOMAINS.join("\n"))
        .with_context(|| format!("Failed to write {}", domains_path.display()))?;

    let words_path = dir.join(SAMPLE_WORDS_FILE);
    fs::write(&words_path, SAMPLE_WORDS.join("\n"))
        .with_context(|| format!("Failed to write {}", words_path.display()))?;

    Ok((domains_path, words_path))
}
