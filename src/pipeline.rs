// src/pipeline.rs
//! Headline enrichment: fetch once, then fingerprint, score, extract keywords and theme
//! for each article, preserving provider order.

use chrono::{DateTime, Utc};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::analyze::{assign_theme, extract_keywords, fingerprint, reflection_for};
use crate::context::RunContext;
use crate::error::PipelineError;
use crate::ingest::{NewsSource, RawArticle};
use crate::sentiment::{SentimentAnalyzer, SentimentLabel};

pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("headlines_pipeline_runs_total", "Pipeline runs started.");
        describe_counter!(
            "headlines_pipeline_errors_total",
            "Pipeline runs that failed, by kind."
        );
        describe_counter!("headlines_enriched_total", "Headlines enriched and returned.");
        describe_histogram!(
            "headlines_pipeline_duration_ms",
            "Pipeline wall time in milliseconds."
        );
    });
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTag {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHeadline {
    pub hash: String,
    pub title: String,
    pub source: String,
    pub url: String,
    pub description: String,
    /// Provider string, passed through untouched.
    pub published_at: String,
    pub sentiment: SentimentLabel,
    pub sentiment_score: f64,
    pub keywords: Vec<String>,
    pub processed_at: DateTime<Utc>,
    pub theme: ThemeTag,
    pub reflection: String,
}

/// Output of one run. `count` always equals `headlines.len()`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResult {
    headlines: Vec<EnrichedHeadline>,
    count: usize,
    fetched_at: DateTime<Utc>,
}

impl HeadlinesResult {
    /// Stamps `fetched_at` now; call once the sequence is complete.
    pub fn new(headlines: Vec<EnrichedHeadline>) -> Self {
        Self {
            count: headlines.len(),
            headlines,
            fetched_at: Utc::now(),
        }
    }

    pub fn headlines(&self) -> &[EnrichedHeadline] {
        &self.headlines
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// `source_name`, else `source_id`, else "Unknown Source".
pub fn resolve_source_label(source_name: &str, source_id: &str) -> String {
    [source_name, source_id]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_SOURCE)
        .to_string()
}

/// Pure per-article transform, apart from the `processed_at` stamp.
pub fn enrich_article(analyzer: &SentimentAnalyzer, article: RawArticle) -> EnrichedHeadline {
    let hash = fingerprint(&article.title, &article.link);
    let sentiment = analyzer.score(&article.title, &article.description);
    let keywords = extract_keywords(&article.title, &article.description);
    let theme = assign_theme(&keywords);
    let reflection = reflection_for(sentiment.label, &hash).to_string();
    let source = resolve_source_label(&article.source_name, &article.source_id);

    EnrichedHeadline {
        hash,
        title: article.title,
        source,
        url: article.link,
        description: article.description,
        published_at: article.pub_date,
        sentiment: sentiment.label,
        sentiment_score: sentiment.score,
        keywords,
        processed_at: Utc::now(),
        theme: ThemeTag {
            name: theme.name.to_string(),
            color: theme.color.to_string(),
        },
        reflection,
    }
}

pub struct HeadlinePipeline {
    source: Arc<dyn NewsSource>,
    analyzer: SentimentAnalyzer,
}

impl HeadlinePipeline {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self {
            source,
            analyzer: SentimentAnalyzer::new(),
        }
    }

    /// One fetch, then an order-preserving transform loop. The context is checked
    /// before every article; on cancellation no partial result is returned.
    pub async fn run(&self, ctx: &RunContext) -> Result<HeadlinesResult, PipelineError> {
        ensure_metrics_described();
        counter!("headlines_pipeline_runs_total").increment(1);
        let t0 = Instant::now();

        let out = self.run_inner(ctx).await;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("headlines_pipeline_duration_ms").record(ms);
        match &out {
            Ok(res) => {
                counter!("headlines_enriched_total").increment(res.count() as u64);
                info!(
                    target: "pipeline",
                    source = self.source.name(),
                    count = res.count(),
                    elapsed_ms = ms,
                    "headlines enriched"
                );
            }
            Err(e) => {
                counter!("headlines_pipeline_errors_total", "kind" => e.kind()).increment(1);
                warn!(
                    target: "pipeline",
                    source = self.source.name(),
                    kind = e.kind(),
                    error = %e,
                    "pipeline run failed"
                );
            }
        }
        out
    }

    async fn run_inner(&self, ctx: &RunContext) -> Result<HeadlinesResult, PipelineError> {
        let source = &self.source;
        let fetched = ctx
            .run(async { source.fetch_articles(ctx).await.map_err(PipelineError::from) })
            .await;

        let articles = match fetched {
            Ok(articles) => articles,
            // A transport timeout that raced the deadline is still a cancellation.
            Err(e) => return Err(ctx.check().err().map(PipelineError::from).unwrap_or(e)),
        };
        debug!(target: "pipeline", fetched = articles.len(), "articles fetched");

        let mut headlines = Vec::with_capacity(articles.len());
        for article in articles {
            ctx.check()?;
            headlines.push(enrich_article(&self.analyzer, article));
        }

        Ok(HeadlinesResult::new(headlines))
    }
}
