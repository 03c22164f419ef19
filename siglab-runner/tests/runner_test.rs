//! Batch runner behavior: isolation, fallback, report shape, progress hooks.

use std::sync::Mutex;

use chrono::{Duration, NaiveDate};
use serde_json::json;

use siglab_core::data::RawRecord;
use siglab_core::domain::SignalKind;
use siglab_core::ensemble::StrategyWeights;
use siglab_runner::{
    run_batch, BatchProgress, FeedError, Narrative, NarrativeError, NarrativeGenerator,
    NullNarrative, NullProgress, PriceFeed, RunError, SignalBundle,
};

/// Feed serving a synthetic rising series for any ticker except "MISSING".
struct FakeFeed;

impl PriceFeed for FakeFeed {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn fetch(&self, ticker: &str) -> Result<Vec<RawRecord>, FeedError> {
        if ticker == "MISSING" {
            return Err(FeedError::TickerNotFound(ticker.to_string()));
        }
        let base = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let records = (0..150)
            .map(|i| {
                let close = 100.0 * 1.005f64.powi(i);
                serde_json::from_value(json!({
                    "time": (base + Duration::days(i as i64)).format("%Y-%m-%d").to_string(),
                    "open": close / 1.005,
                    "high": close * 1.01,
                    "low": close * 0.99,
                    "close": close,
                    "volume": 1_000_000.0 + 1_000.0 * i as f64,
                }))
                .unwrap()
            })
            .collect();
        Ok(records)
    }
}

struct AlwaysFailsNarrative;
impl NarrativeGenerator for AlwaysFailsNarrative {
    fn summarize(&self, _: &SignalBundle) -> Result<Narrative, NarrativeError> {
        Err(NarrativeError::InvalidResponse("garbage".to_string()))
    }
}

#[derive(Default)]
struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl BatchProgress for RecordingProgress {
    fn on_start(&self, ticker: &str, index: usize, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {ticker} {index}/{total}"));
    }

    fn on_complete(&self, ticker: &str, _: usize, _: usize, result: &Result<(), RunError>) {
        let outcome = if result.is_ok() { "ok" } else { "err" };
        self.events
            .lock()
            .unwrap()
            .push(format!("complete {ticker} {outcome}"));
    }

    fn on_batch_complete(&self, succeeded: usize, failed: usize, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("batch {succeeded}/{failed}/{total}"));
    }
}

fn tickers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn batch_continues_past_a_failing_ticker() {
    let result = run_batch(
        &tickers(&["AAA", "MISSING", "BBB"]),
        &FakeFeed,
        &NullNarrative,
        &StrategyWeights::default(),
        &NullProgress,
    );
    assert_eq!(result.reports.len(), 2);
    assert_eq!(result.reports[0].ticker, "AAA");
    assert_eq!(result.reports[1].ticker, "BBB");
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].0, "MISSING");
    assert!(matches!(
        result.failures[0].1,
        RunError::Feed(FeedError::TickerNotFound(_))
    ));
}

#[test]
fn narrative_failure_falls_back_instead_of_failing_the_ticker() {
    let result = run_batch(
        &tickers(&["AAA"]),
        &FakeFeed,
        &AlwaysFailsNarrative,
        &StrategyWeights::default(),
        &NullProgress,
    );
    assert_eq!(result.failures.len(), 0);
    let report = &result.reports[0];
    assert_eq!(report.reasoning, Narrative::fallback().reasoning);
    // The numeric signal survives even when the narrative backend is down.
    assert_eq!(report.signal, SignalKind::Bullish);
}

#[test]
fn report_has_all_five_strategy_keys_and_percent_confidence() {
    let result = run_batch(
        &tickers(&["AAA"]),
        &FakeFeed,
        &NullNarrative,
        &StrategyWeights::default(),
        &NullProgress,
    );
    let report = &result.reports[0];

    let keys: Vec<_> = report.per_strategy.keys().copied().collect();
    let mut expected = vec![
        "trend_following",
        "mean_reversion",
        "momentum",
        "volatility",
        "statistical_arbitrage",
    ];
    expected.sort();
    assert_eq!(keys, expected);

    assert!((0.0..=100.0).contains(&report.confidence));
    assert_eq!(report.confidence, report.confidence.round());
    for breakdown in report.per_strategy.values() {
        assert!((0.0..=100.0).contains(&breakdown.confidence));
    }

    let json = serde_json::to_value(report).unwrap();
    assert!(json["per_strategy"]["trend_following"]["metrics"].is_object());
}

#[test]
fn progress_hooks_fire_in_order() {
    let progress = RecordingProgress::default();
    run_batch(
        &tickers(&["AAA", "MISSING"]),
        &FakeFeed,
        &NullNarrative,
        &StrategyWeights::default(),
        &progress,
    );
    let events = progress.events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            "start AAA 0/2",
            "complete AAA ok",
            "start MISSING 1/2",
            "complete MISSING err",
            "batch 1/1/2",
        ]
    );
}

#[test]
fn empty_feed_result_is_an_analysis_failure() {
    struct EmptyFeed;
    impl PriceFeed for EmptyFeed {
        fn name(&self) -> &'static str {
            "empty"
        }
        fn fetch(&self, _: &str) -> Result<Vec<RawRecord>, FeedError> {
            Ok(Vec::new())
        }
    }

    let result = run_batch(
        &tickers(&["AAA"]),
        &EmptyFeed,
        &NullNarrative,
        &StrategyWeights::default(),
        &NullProgress,
    );
    assert!(result.reports.is_empty());
    assert!(matches!(result.failures[0].1, RunError::Analysis(_)));
}
