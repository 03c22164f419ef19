//! Narrative seam — turning a numeric signal bundle into prose.
//!
//! The generator is a trait so the numeric pipeline never depends on any
//! particular language-model backend. Generation is best-effort: after the
//! retry budget is exhausted the runner falls back to a neutral narrative
//! rather than failing the ticker.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use siglab_core::domain::{EnsembleSignal, SignalKind};
use siglab_core::ensemble::{StrategySignals, StrategyWeights};
use thiserror::Error;
use tracing::warn;

/// Attempts before giving up and using the fallback narrative.
const NARRATIVE_ATTEMPTS: u32 = 3;

/// Everything a narrative backend gets to see for one ticker.
#[derive(Debug, Clone, Serialize)]
pub struct SignalBundle {
    pub ticker: String,
    pub ensemble: EnsembleSignal,
    pub strategies: StrategySignals,
    pub weights: StrategyWeights,
}

impl SignalBundle {
    /// JSON rendering handed to prompt-building backends.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Prose summary of a signal, with the signal restated so downstream
/// consumers never have to parse the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub signal: SignalKind,
    /// Percentage in 0..=100.
    pub confidence: f64,
    pub reasoning: String,
}

impl Narrative {
    /// Used when every generation attempt failed.
    pub fn fallback() -> Self {
        Self {
            signal: SignalKind::Neutral,
            confidence: 0.0,
            reasoning: "Technical narrative unavailable; defaulting to neutral.".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative generation failed")]
    Generation(#[source] anyhow::Error),
    #[error("narrative backend returned an unusable response: {0}")]
    InvalidResponse(String),
}

pub trait NarrativeGenerator: Send + Sync {
    fn summarize(&self, bundle: &SignalBundle) -> Result<Narrative, NarrativeError>;
}

/// Call the generator up to [`NARRATIVE_ATTEMPTS`] times, then fall back.
pub fn summarize_with_retry(
    generator: &dyn NarrativeGenerator,
    bundle: &SignalBundle,
) -> Narrative {
    for attempt in 1..=NARRATIVE_ATTEMPTS {
        match generator.summarize(bundle) {
            Ok(narrative) => return narrative,
            Err(error) => {
                warn!(
                    ticker = %bundle.ticker,
                    attempt,
                    max_attempts = NARRATIVE_ATTEMPTS,
                    %error,
                    "narrative generation failed"
                );
            }
        }
    }
    Narrative::fallback()
}

/// Generator that skips prose entirely and restates the numeric signal.
pub struct NullNarrative;

impl NarrativeGenerator for NullNarrative {
    fn summarize(&self, bundle: &SignalBundle) -> Result<Narrative, NarrativeError> {
        Ok(Narrative {
            signal: bundle.ensemble.signal,
            confidence: (bundle.ensemble.confidence * 100.0).round(),
            reasoning: format!(
                "Ensemble signal for {} is {} at {:.0}% confidence.",
                bundle.ticker,
                bundle.ensemble.signal,
                bundle.ensemble.confidence * 100.0
            ),
        })
    }
}
