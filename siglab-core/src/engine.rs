//! Analysis entry point: run every strategy over a series and combine.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{EnsembleSignal, PriceSeries};
use crate::ensemble::{combine, StrategySignals, StrategyWeights};
use crate::strategies::{
    MeanReversion, Momentum, StatArb, Strategy, TrendFollowing, Volatility,
};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("no usable price data")]
    NoPriceData,
}

/// Full output of one analysis run: the ensemble verdict plus the five
/// per-strategy signals that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub ensemble: EnsembleSignal,
    pub strategies: StrategySignals,
}

/// Evaluate all five strategies on `series` and merge their votes.
///
/// An empty series is an error; a short series is not — each strategy gates
/// on its own minimum history and reports a neutral zero-confidence signal
/// when it cannot run.
pub fn analyze(
    series: &PriceSeries,
    weights: &StrategyWeights,
) -> Result<TechnicalAnalysis, AnalyzeError> {
    if series.is_empty() {
        return Err(AnalyzeError::NoPriceData);
    }

    let strategies = StrategySignals {
        trend: TrendFollowing.evaluate(series),
        mean_reversion: MeanReversion.evaluate(series),
        momentum: Momentum.evaluate(series),
        volatility: Volatility.evaluate(series),
        stat_arb: StatArb.evaluate(series),
    };
    let ensemble = combine(&strategies, weights);

    debug!(
        bars = series.len(),
        signal = %ensemble.signal,
        confidence = ensemble.confidence,
        "analysis complete"
    );

    Ok(TechnicalAnalysis {
        ensemble,
        strategies,
    })
}
