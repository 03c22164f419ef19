//! Signal types — per-strategy and ensemble outputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Directional verdict of a strategy or the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Bullish,
    Bearish,
    Neutral,
}

impl SignalKind {
    /// Numeric vote used by the ensemble combiner.
    pub fn score(self) -> f64 {
        match self {
            SignalKind::Bullish => 1.0,
            SignalKind::Bearish => -1.0,
            SignalKind::Neutral => 0.0,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalKind::Bullish => "bullish",
            SignalKind::Bearish => "bearish",
            SignalKind::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Clamp a raw confidence to [0, 1]. Non-finite values collapse to 0 — an
/// indicator that produced NaN or inf carries no conviction.
pub fn clamp_confidence(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Output of one strategy for one ticker. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySignal {
    pub signal: SignalKind,
    /// Always within [0, 1] — constructors clamp.
    pub confidence: f64,
    /// Diagnostic indicator snapshot. Never consulted by the combiner.
    pub metrics: BTreeMap<String, f64>,
}

impl StrategySignal {
    pub fn new(signal: SignalKind, confidence: f64, metrics: BTreeMap<String, f64>) -> Self {
        Self {
            signal,
            confidence: clamp_confidence(confidence),
            metrics,
        }
    }

    /// Neutral zero-confidence signal returned when a series is shorter than
    /// a strategy's minimum history. No computation happened; metrics empty.
    pub fn insufficient_history() -> Self {
        Self {
            signal: SignalKind::Neutral,
            confidence: 0.0,
            metrics: BTreeMap::new(),
        }
    }
}

/// Output of the ensemble combiner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleSignal {
    pub signal: SignalKind,
    /// Magnitude of the weighted vote, within [0, 1].
    pub confidence: f64,
}
