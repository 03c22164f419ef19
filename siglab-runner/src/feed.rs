//! Price feed seam — where raw market data enters the pipeline.

use siglab_core::data::RawRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("ticker not found: {0}")]
    TickerNotFound(String),
    #[error("upstream feed failure")]
    Upstream(#[from] anyhow::Error),
}

/// Source of raw price records for a ticker.
///
/// Implementations wrap whatever the deployment has available — an HTTP
/// vendor API, a database, a fixture file. The runner only sees records.
pub trait PriceFeed: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch the most recent daily records for `ticker`, oldest first.
    /// Ordering is not load-bearing: the normalizer re-sorts.
    fn fetch(&self, ticker: &str) -> Result<Vec<RawRecord>, FeedError>;
}
