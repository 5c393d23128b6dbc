// src/ingest/providers/newsdata.rs
//! NewsData.io `/latest` client for the fixed mindfulness query.

use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::{Client, Url};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::context::RunContext;
use crate::error::FetchError;
use crate::ingest::types::{NewsEnvelope, NewsSource, RawArticle};

pub const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1";

/// Title must contain at least one of these terms.
pub const TITLE_QUERY: &str =
    "(mindfulness OR meditation OR wellness OR \"inner peace\" OR \"self-confidence\")";
pub const CATEGORY: &str = "health";
pub const LANGUAGE: &str = "en";

const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct NewsDataProvider {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NewsDataProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(concat!("mindful-headlines/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .timeout(CLIENT_TIMEOUT)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Full request URL including query parameters.
    pub fn request_url(&self) -> Result<Url, FetchError> {
        let endpoint = format!("{}/latest", self.base_url);
        Url::parse_with_params(
            &endpoint,
            &[
                ("apikey", self.api_key.as_str()),
                ("qInTitle", TITLE_QUERY),
                ("category", CATEGORY),
                ("language", LANGUAGE),
            ],
        )
        .map_err(|_| FetchError::InvalidUrl(self.base_url.clone()))
    }

    /// One GET, no retries. `budget` tightens the client timeout to the caller's deadline.
    async fn fetch_once(&self, budget: Option<Duration>) -> Result<Vec<RawArticle>, FetchError> {
        let url = self.request_url()?;
        let t0 = Instant::now();

        let mut req = self.http.get(url);
        if let Some(left) = budget {
            req = req.timeout(left.min(CLIENT_TIMEOUT));
        }
        let rsp = req
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = rsp.status();
        let body = rsp.bytes().await.map_err(FetchError::Transport)?;
        histogram!("newsdata_request_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let articles = decode_envelope(&body)?;
        counter!("newsdata_articles_total").increment(articles.len() as u64);
        Ok(articles)
    }
}

/// Decode a success body and validate the envelope status.
pub fn decode_envelope(body: &[u8]) -> Result<Vec<RawArticle>, FetchError> {
    let envelope: NewsEnvelope = serde_json::from_slice(body).map_err(FetchError::Decode)?;

    if envelope.status != "success" {
        return Err(FetchError::ApiStatus(envelope.status));
    }

    if let Some(next) = envelope.next_page.as_deref() {
        debug!(target: "newsdata", next_page = next, "pagination not followed");
    }

    if envelope.results.is_empty() {
        info!(target: "newsdata", "no articles found matching mindfulness keywords");
        return Ok(Vec::new());
    }

    debug!(
        target: "newsdata",
        total_results = envelope.total_results,
        page_len = envelope.results.len(),
        "decoded NewsData.io page"
    );
    Ok(envelope.results)
}

#[async_trait]
impl NewsSource for NewsDataProvider {
    async fn fetch_articles(&self, ctx: &RunContext) -> Result<Vec<RawArticle>, FetchError> {
        self.fetch_once(ctx.remaining()).await
    }

    fn name(&self) -> &'static str {
        "NewsData.io"
    }
}
