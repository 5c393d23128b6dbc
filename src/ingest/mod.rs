// src/ingest/mod.rs
//! News ingestion boundary: wire types, the `NewsSource` capability and providers.

pub mod providers;
pub mod types;

pub use crate::ingest::providers::newsdata::NewsDataProvider;
pub use crate::ingest::types::{NewsEnvelope, NewsSource, RawArticle};
