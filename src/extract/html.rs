// src/extract/html.rs
// =============================================================================
// This module pulls two things out of an HTML page:
// - The links we should crawl next (same host only, no #fragments)
// - The visible text, which is what we search for target words
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Never fails on broken markup (html5ever repairs it like a browser would)
//
// And the `url` crate to resolve relative links against the page URL.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

// Elements whose text content is never shown to a reader
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

// Parsed on first use and shared by every page after that
static LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn link_selector() -> &'static Selector {
    // The selector is a constant and known to be valid, so unwrap() is fine
    LINK_SELECTOR.get_or_init(|| Selector::parse("a[href]").unwrap())
}

// Extracts the same-origin links from a page
//
// Parameters:
//   base: the URL of the page (for resolving relative links)
//   html: the HTML content to parse
//
// Returns: unique absolute URLs, in the order they first appear in the page
//
// Example:
//   base = "http://a.com/x"
//   html = "<a href='/y'>Y</a> <a href='http://b.com/z'>Z</a>"
//   result = ["http://a.com/y"]
pub fn links_of(base: &Url, html: &str) -> Vec<Url> {
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(link_selector()) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // join() handles relative ("/docs", "../a") and absolute hrefs alike.
        // Hrefs it cannot make sense of are simply skipped.
        let Ok(mut link) = base.join(href.trim()) else {
            continue;
        };

        if !is_same_origin(base, &link) {
            continue;
        }

        link.set_fragment(None);

        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

// Renders the text a reader would see, one space between text runs
//
// Script/style contents are dropped and runs of whitespace (including
// newlines between block elements) collapse to a single space.
pub fn text_of(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            .unwrap_or(false);

        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}

// Same host and port as the page we came from, over http or https.
// The scheme itself may differ: http://a.com/y is a valid link from https://a.com/.
// Subdomains do not count (www.a.com is not a.com).
fn is_same_origin(base: &Url, link: &Url) -> bool {
    matches!(link.scheme(), "http" | "https")
        && link.host_str().is_some()
        && link.host_str() == base.host_str()
        && link.port() == base.port()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does base.join(href) do?
//    - The same thing a browser does when you click a link
//    - "https://a.com/x/y" + "../z" = "https://a.com/z"
//    - An absolute href ("https://b.com/") simply replaces the base
//
// 2. Why let-else?
//    - let Some(x) = ... else { continue; } reads as "take x or skip"
//    - It keeps the happy path un-nested
//
// 3. Why return Vec<&str> pieces and join them?
//    - The &str slices borrow from the parsed document, no copying
//    - join(" ") allocates the final String once
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn as_strings(links: Vec<Url>) -> Vec<String> {
        links.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_keeps_only_same_host() {
        let html = r#"
            <a href="http://a.com/y">Y</a>
            <a href="http://b.com/z">Z</a>
        "#;
        let links = links_of(&url("http://a.com/x"), html);
        assert_eq!(as_strings(links), vec!["http://a.com/y"]);
    }

    #[test]
    fn test_resolves_relative_links() {
        let html = r#"<a href="/docs">Docs</a><a href="../about">About</a>"#;
        let links = links_of(&url("https://example.com/page/sub/"), html);
        assert_eq!(
            as_strings(links),
            vec!["https://example.com/docs", "https://example.com/page/about"]
        );
    }

    #[test]
    fn test_strips_fragments_and_dedups() {
        let html = r#"
            <a href="/page2#top">Top</a>
            <a href="/page2#bottom">Bottom</a>
            <a href="/page2">Plain</a>
        "#;
        let links = links_of(&url("https://d1.test/"), html);
        assert_eq!(as_strings(links), vec!["https://d1.test/page2"]);
    }

    #[test]
    fn test_subdomain_is_not_same_origin() {
        let html = r#"<a href="https://www.a.com/">www</a>"#;
        assert!(links_of(&url("https://a.com/"), html).is_empty());
    }

    #[test]
    fn test_other_scheme_same_host_is_kept() {
        let html = r#"<a href="http://a.com/plain">plain</a>"#;
        let links = links_of(&url("https://a.com/"), html);
        assert_eq!(as_strings(links), vec!["http://a.com/plain"]);
    }

    #[test]
    fn test_skips_non_http_and_bad_links() {
        let html = r#"
            <a href="mailto:test@a.com">Email</a>
            <a href="javascript:void(0)">JS</a>
            <a href="http://[::1">Broken</a>
            <a>No href</a>
        "#;
        assert!(links_of(&url("https://a.com/"), html).is_empty());
    }

    #[test]
    fn test_text_skips_markup_and_scripts() {
        let html = r#"
            <html>
              <head><title>শিরোনাম</title><style>p { color: red; }</style></head>
              <body>
                <h1>hello</h1>
                <p>world
                   again</p>
                <script>var hidden = "secret";</script>
              </body>
            </html>
        "#;
        assert_eq!(text_of(html), "শিরোনাম hello world again");
    }

    #[test]
    fn test_selector_is_reused_across_pages() {
        let first = links_of(&url("https://a.com/"), r#"<a href="/one">1</a>"#);
        let second = links_of(&url("https://b.com/"), r#"<a href="/two">2</a>"#);

        assert_eq!(as_strings(first), vec!["https://a.com/one"]);
        assert_eq!(as_strings(second), vec!["https://b.com/two"]);
        assert!(std::ptr::eq(link_selector(), link_selector()));
    }

    #[test]
    fn test_text_of_empty_document() {
        assert_eq!(text_of(""), "");
    }
}
