// src/extract/mod.rs
// =============================================================================
// This module turns fetched HTML into things the crawler can use.
//
// Submodules:
// - html: Same-origin link discovery and visible-text rendering
// - keywords: Substring search for the target words
//
// Everything here is pure: same input, same output, no I/O.
// =============================================================================

mod html;
mod keywords;

pub use html::{links_of, text_of};
pub use keywords::search;
