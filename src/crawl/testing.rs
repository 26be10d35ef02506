// src/crawl/testing.rs
// An in-memory website for crawl tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

use crate::fetch::PageSource;

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
    latency: Duration,
    panic_on: Option<String>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `html` at `url` (exact normalized URL string).
    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Makes every fetch take this long, so concurrent crawls overlap.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Panics when asked for this URL.
    pub fn panic_on(mut self, url: &str) -> Self {
        self.panic_on = Some(url.to_string());
        self
    }

    /// Every URL requested so far, in request order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetched().iter().filter(|u| u.as_str() == url).count()
    }

    /// Highest number of fetches that were running at the same moment.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for FakeSite {
    async fn fetch(&self, url: &Url) -> Option<String> {
        self.fetched.lock().unwrap().push(url.to_string());

        if self.panic_on.as_deref() == Some(url.as_str()) {
            panic!("fake site exploded on {}", url);
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.pages.get(url.as_str()).cloned()
    }
}
