// tests/pipeline_e2e.rs
//
// Pipeline behavior against test-double news sources:
// order preservation, count invariant, empty upstream, error and cancellation paths.

mod common;

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{
    article, fixture_articles, shared, CancelOnReturnSource, FailingSource, StaticSource,
};
use mindful_headlines::analyze::fingerprint;
use mindful_headlines::error::{CancellationError, FetchError, PipelineError};
use mindful_headlines::pipeline::HeadlinePipeline;
use mindful_headlines::sentiment::SentimentLabel;
use mindful_headlines::RunContext;

#[tokio::test]
async fn fixture_articles_are_enriched_in_order() {
    let source = Arc::new(StaticSource::new(fixture_articles()));
    let pipeline = HeadlinePipeline::new(source.clone());

    let res = pipeline
        .run(&RunContext::with_timeout(Duration::from_secs(5)))
        .await
        .expect("pipeline ok");

    assert_eq!(source.calls.load(Ordering::SeqCst), 1, "exactly one fetch");
    assert_eq!(res.count(), 3);
    assert_eq!(res.count(), res.headlines().len());

    let h = res.headlines();

    assert_eq!(
        h[0].title,
        "Mindfulness program brings hope and progress to hospital staff"
    );
    assert_eq!(h[0].source, "Example Health");
    assert_eq!(h[0].sentiment, SentimentLabel::Positive);
    assert!((h[0].sentiment_score - 0.5).abs() < 1e-12);
    assert_eq!(
        h[0].keywords,
        vec!["mindfulness", "program", "brings", "hope", "progress"]
    );
    assert_eq!(h[0].theme.name, "Mindfulness");
    assert_eq!(h[0].published_at, "2026-10-17 05:12:00");
    assert_eq!(
        h[0].hash,
        fingerprint(
            "Mindfulness program brings hope and progress to hospital staff",
            "https://news.example.com/health/mindfulness-hospital-staff"
        )
    );

    assert_eq!(h[1].source, "examplewire");
    assert_eq!(h[1].sentiment, SentimentLabel::Negative);
    assert_eq!(h[1].sentiment_score, -1.0);
    assert_eq!(
        h[1].keywords,
        vec!["meditation", "breach", "apps", "face", "privacy"]
    );

    assert_eq!(h[2].source, "Unknown Source");
    assert_eq!(h[2].sentiment, SentimentLabel::Neutral);
    assert_eq!(h[2].sentiment_score, 0.0);
    assert_eq!(h[2].description, "");
    assert_eq!(
        h[2].keywords,
        vec!["five", "wellness", "habits", "inner", "peace"]
    );

    for hl in h {
        assert!(hl.processed_at <= res.fetched_at());
    }
}

#[tokio::test]
async fn duplicates_are_kept_and_order_preserved() {
    let a = article("Calm at work", "https://x.test/1", "");
    let b = article("Yoga at dawn", "https://x.test/2", "");
    let pipeline = HeadlinePipeline::new(shared(StaticSource::new(vec![
        a.clone(),
        b,
        a,
    ])));

    let res = pipeline.run(&RunContext::background()).await.unwrap();
    let titles: Vec<&str> = res.headlines().iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Calm at work", "Yoga at dawn", "Calm at work"]);
    assert_eq!(res.headlines()[0].hash, res.headlines()[2].hash);
}

#[tokio::test]
async fn empty_upstream_yields_empty_result() {
    let pipeline = HeadlinePipeline::new(shared(StaticSource::new(Vec::new())));
    let res = pipeline
        .run(&RunContext::with_timeout(Duration::from_secs(1)))
        .await
        .expect("empty is not an error");
    assert_eq!(res.count(), 0);
    assert!(res.headlines().is_empty());

    let v = serde_json::to_value(&res).unwrap();
    assert_eq!(v["headlines"], serde_json::json!([]));
    assert_eq!(v["count"], 0);
}

#[tokio::test]
async fn fetch_error_is_surfaced_as_fetch() {
    let pipeline = HeadlinePipeline::new(shared(FailingSource));
    let err = pipeline.run(&RunContext::background()).await.unwrap_err();
    assert!(!err.is_cancellation());
    assert!(matches!(err, PipelineError::Fetch(FetchError::ApiStatus(_))));
}

#[tokio::test]
async fn cancel_before_fetch_completes() {
    let pipeline = HeadlinePipeline::new(shared(StaticSource::slow(
        fixture_articles(),
        Duration::from_secs(10),
    )));
    let (ctx, handle) = RunContext::background().with_cancel();

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.cancel();
    });

    let started = std::time::Instant::now();
    let err = pipeline.run(&ctx).await.unwrap_err();
    canceller.await.unwrap();

    assert!(matches!(
        err,
        PipelineError::Cancelled(CancellationError::Cancelled)
    ));
    assert!(started.elapsed() < Duration::from_secs(5), "returned promptly");
}

#[tokio::test]
async fn deadline_during_fetch() {
    let pipeline = HeadlinePipeline::new(shared(StaticSource::slow(
        fixture_articles(),
        Duration::from_secs(10),
    )));
    let err = pipeline
        .run(&RunContext::with_timeout(Duration::from_millis(30)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Cancelled(CancellationError::DeadlineExceeded)
    ));
}

#[tokio::test]
async fn cancel_between_fetch_and_transform_returns_no_partial_result() {
    let (ctx, handle) = RunContext::background().with_cancel();
    let source = CancelOnReturnSource {
        articles: fixture_articles(),
        handle: Mutex::new(Some(handle)),
    };
    let pipeline = HeadlinePipeline::new(shared(source));

    let err = pipeline.run(&ctx).await.unwrap_err();
    assert!(err.is_cancellation());
}

#[tokio::test]
async fn already_cancelled_context_never_fetches() {
    let source = Arc::new(StaticSource::new(fixture_articles()));
    let pipeline = HeadlinePipeline::new(source.clone());
    let (ctx, handle) = RunContext::background().with_cancel();
    handle.cancel();

    let err = pipeline.run(&ctx).await.unwrap_err();
    assert!(err.is_cancellation());
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}
