// src/ingest/types.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::context::RunContext;
use crate::error::FetchError;

/// Article as delivered by the news provider. Missing or `null` text fields decode as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub article_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(rename = "pubDate", default, deserialize_with = "null_as_empty")]
    pub pub_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_icon: Option<String>,
}

/// Outer JSON returned by `/latest`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(rename = "totalResults", default, deserialize_with = "null_as_zero")]
    pub total_results: u64,
    /// A `null` entry decodes as an all-empty article rather than failing the page.
    #[serde(default, deserialize_with = "null_as_empty_articles")]
    pub results: Vec<RawArticle>,
    #[serde(rename = "nextPage", default)]
    pub next_page: Option<String>,
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(d: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(d)?.unwrap_or_default())
}

fn null_as_empty_articles<'de, D>(d: D) -> Result<Vec<RawArticle>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<RawArticle>>>::deserialize(d)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// The single capability the pipeline needs from a news backend: fetch the articles for
/// the fixed mindfulness query. Implementations must stop promptly when `ctx` is
/// cancelled or its deadline passes.
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_articles(&self, ctx: &RunContext) -> Result<Vec<RawArticle>, FetchError>;
    fn name(&self) -> &'static str;
}
