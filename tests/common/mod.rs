// tests/common/mod.rs
//! Test doubles for the `NewsSource` capability.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mindful_headlines::context::{CancelHandle, RunContext};
use mindful_headlines::error::FetchError;
use mindful_headlines::ingest::{NewsSource, RawArticle};

pub fn article(title: &str, link: &str, description: &str) -> RawArticle {
    RawArticle {
        title: title.into(),
        link: link.into(),
        description: description.into(),
        pub_date: "2026-10-17 06:00:00".into(),
        ..Default::default()
    }
}

pub fn fixture_articles() -> Vec<RawArticle> {
    let raw = std::fs::read_to_string("tests/fixtures/newsdata_latest.json").expect("fixture");
    let env: mindful_headlines::ingest::NewsEnvelope =
        serde_json::from_str(&raw).expect("fixture decodes");
    env.results
}

/// Returns a fixed list, optionally after a delay.
pub struct StaticSource {
    pub articles: Vec<RawArticle>,
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(articles: Vec<RawArticle>) -> Self {
        Self {
            articles,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn slow(articles: Vec<RawArticle>, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(articles)
        }
    }
}

#[async_trait::async_trait]
impl NewsSource for StaticSource {
    async fn fetch_articles(&self, _ctx: &RunContext) -> Result<Vec<RawArticle>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        Ok(self.articles.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Always fails with an upstream API status error.
pub struct FailingSource;

#[async_trait::async_trait]
impl NewsSource for FailingSource {
    async fn fetch_articles(&self, _ctx: &RunContext) -> Result<Vec<RawArticle>, FetchError> {
        Err(FetchError::ApiStatus("error".into()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Returns its articles but trips the cancel handle on the way out, so cancellation
/// lands between fetch and the transform loop.
pub struct CancelOnReturnSource {
    pub articles: Vec<RawArticle>,
    pub handle: Mutex<Option<CancelHandle>>,
}

#[async_trait::async_trait]
impl NewsSource for CancelOnReturnSource {
    async fn fetch_articles(&self, _ctx: &RunContext) -> Result<Vec<RawArticle>, FetchError> {
        if let Some(h) = self.handle.lock().expect("handle mutex").as_ref() {
            h.cancel();
        }
        Ok(self.articles.clone())
    }

    fn name(&self) -> &'static str {
        "cancel-on-return"
    }
}

pub fn shared<S: NewsSource + 'static>(s: S) -> Arc<dyn NewsSource> {
    Arc::new(s)
}
