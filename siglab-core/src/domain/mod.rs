//! Domain types shared across the engine.

pub mod bar;
pub mod signal;

pub use bar::{PriceBar, PriceSeries};
pub use signal::{clamp_confidence, EnsembleSignal, SignalKind, StrategySignal};
