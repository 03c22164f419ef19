//! Weighted-vote ensemble — merges the five strategy signals into one.
//!
//! Each strategy's vote (+1 bullish, -1 bearish, 0 neutral) is scaled by a
//! fixed weight and its own confidence; the sum is normalized by the total
//! confidence-weighted mass. Pure and deterministic: same inputs, same
//! output, bit for bit.

use serde::{Deserialize, Serialize};

use crate::domain::{EnsembleSignal, SignalKind, StrategySignal};

/// Final score beyond which the ensemble commits to a direction.
const DIRECTION_THRESHOLD: f64 = 0.2;

/// Fixed importance weights for the five strategies. The defaults sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub trend: f64,
    pub mean_reversion: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub stat_arb: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            trend: 0.25,
            mean_reversion: 0.20,
            momentum: 0.25,
            volatility: 0.15,
            stat_arb: 0.15,
        }
    }
}

impl StrategyWeights {
    pub fn sum(&self) -> f64 {
        self.trend + self.mean_reversion + self.momentum + self.volatility + self.stat_arb
    }
}

/// The five per-strategy outputs for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySignals {
    pub trend: StrategySignal,
    pub mean_reversion: StrategySignal,
    pub momentum: StrategySignal,
    pub volatility: StrategySignal,
    pub stat_arb: StrategySignal,
}

impl StrategySignals {
    /// Iterate (report key, signal) pairs in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StrategySignal)> {
        [
            ("trend_following", &self.trend),
            ("mean_reversion", &self.mean_reversion),
            ("momentum", &self.momentum),
            ("volatility", &self.volatility),
            ("statistical_arbitrage", &self.stat_arb),
        ]
        .into_iter()
    }
}

/// Combine the five strategy signals into one ensemble verdict.
///
/// `score = Σ(vote · weight · confidence) / Σ(weight · confidence)`; when
/// every strategy reports zero confidence the normalizer vanishes and the
/// score is 0 (neutral). Output confidence is |score|.
pub fn combine(signals: &StrategySignals, weights: &StrategyWeights) -> EnsembleSignal {
    let pairs = [
        (&signals.trend, weights.trend),
        (&signals.mean_reversion, weights.mean_reversion),
        (&signals.momentum, weights.momentum),
        (&signals.volatility, weights.volatility),
        (&signals.stat_arb, weights.stat_arb),
    ];

    let mut weighted_sum = 0.0;
    let mut total_confidence = 0.0;
    for (signal, weight) in pairs {
        weighted_sum += signal.signal.score() * weight * signal.confidence;
        total_confidence += weight * signal.confidence;
    }

    let final_score = if total_confidence > 0.0 {
        weighted_sum / total_confidence
    } else {
        0.0
    };

    let signal = if final_score > DIRECTION_THRESHOLD {
        SignalKind::Bullish
    } else if final_score < -DIRECTION_THRESHOLD {
        SignalKind::Bearish
    } else {
        SignalKind::Neutral
    };

    EnsembleSignal {
        signal,
        confidence: final_score.abs(),
    }
}
