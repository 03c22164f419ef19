//! Batch orchestrator: feed → normalize → analyze → narrate, per ticker.

use std::collections::BTreeMap;

use serde::Serialize;
use siglab_core::data::normalize_records;
use siglab_core::engine::{analyze, AnalyzeError};
use siglab_core::ensemble::StrategyWeights;
use siglab_core::domain::SignalKind;
use thiserror::Error;
use tracing::debug;

use crate::feed::{FeedError, PriceFeed};
use crate::narrative::{summarize_with_retry, NarrativeGenerator, SignalBundle};
use crate::progress::BatchProgress;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Analysis(#[from] AnalyzeError),
}

/// One strategy's contribution in the final report. Confidence is a rounded
/// percentage in 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyBreakdown {
    pub signal: SignalKind,
    pub confidence: f64,
    pub metrics: BTreeMap<String, f64>,
}

/// Final per-ticker report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerReport {
    pub ticker: String,
    pub signal: SignalKind,
    /// Rounded percentage in 0..=100.
    pub confidence: f64,
    pub per_strategy: BTreeMap<&'static str, StrategyBreakdown>,
    pub reasoning: String,
}

/// Outcome of a batch run. Per-ticker failures are collected, never fatal.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<TickerReport>,
    pub failures: Vec<(String, RunError)>,
}

fn to_percent(confidence: f64) -> f64 {
    (confidence * 100.0).round()
}

/// Run the full pipeline for one ticker.
pub fn analyze_ticker(
    ticker: &str,
    feed: &dyn PriceFeed,
    generator: &dyn NarrativeGenerator,
    weights: &StrategyWeights,
) -> Result<TickerReport, RunError> {
    let records = feed.fetch(ticker)?;
    let series = normalize_records(&records);
    debug!(ticker, feed = feed.name(), bars = series.len(), "normalized");

    let analysis = analyze(&series, weights)?;

    let bundle = SignalBundle {
        ticker: ticker.to_string(),
        ensemble: analysis.ensemble,
        strategies: analysis.strategies,
        weights: *weights,
    };
    let narrative = summarize_with_retry(generator, &bundle);

    let per_strategy = bundle
        .strategies
        .iter()
        .map(|(name, signal)| {
            (
                name,
                StrategyBreakdown {
                    signal: signal.signal,
                    confidence: to_percent(signal.confidence),
                    metrics: signal.metrics.clone(),
                },
            )
        })
        .collect();

    Ok(TickerReport {
        ticker: ticker.to_string(),
        signal: bundle.ensemble.signal,
        confidence: to_percent(bundle.ensemble.confidence),
        per_strategy,
        reasoning: narrative.reasoning,
    })
}

/// Walk the ticker list sequentially. A failing ticker is recorded and the
/// batch moves on; the report order matches the input order.
pub fn run_batch(
    tickers: &[String],
    feed: &dyn PriceFeed,
    generator: &dyn NarrativeGenerator,
    weights: &StrategyWeights,
    progress: &dyn BatchProgress,
) -> BatchResult {
    let total = tickers.len();
    let mut result = BatchResult::default();

    for (index, ticker) in tickers.iter().enumerate() {
        progress.on_start(ticker, index, total);
        match analyze_ticker(ticker, feed, generator, weights) {
            Ok(report) => {
                progress.on_complete(ticker, index, total, &Ok(()));
                result.reports.push(report);
            }
            Err(error) => {
                let failed = Err(error);
                progress.on_complete(ticker, index, total, &failed);
                if let Err(error) = failed {
                    result.failures.push((ticker.clone(), error));
                }
            }
        }
    }

    progress.on_batch_complete(result.reports.len(), result.failures.len(), total);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounding() {
        assert_eq!(to_percent(0.656), 66.0);
        assert_eq!(to_percent(0.0), 0.0);
        assert_eq!(to_percent(1.0), 100.0);
        assert_eq!(to_percent(0.005), 1.0);
    }
}
