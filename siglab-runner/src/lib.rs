//! SigLab Runner — batch orchestration over the signal engine.
//!
//! This crate builds on `siglab-core` to provide:
//! - The `PriceFeed` seam for pulling raw records from a market-data source
//! - Per-ticker pipeline (fetch, normalize, analyze, narrate)
//! - Best-effort narrative generation with retry and neutral fallback
//! - Sequential batch runner with progress hooks and failure isolation

pub mod feed;
pub mod narrative;
pub mod progress;
pub mod runner;

pub use feed::{FeedError, PriceFeed};
pub use narrative::{
    summarize_with_retry, Narrative, NarrativeError, NarrativeGenerator, NullNarrative,
    SignalBundle,
};
pub use progress::{BatchProgress, LogProgress, NullProgress};
pub use runner::{
    analyze_ticker, run_batch, BatchResult, RunError, StrategyBreakdown, TickerReport,
};
