//! PriceBar and PriceSeries — the engine's market data units.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar for a single ticker on a single trading day.
///
/// `low <= open,close <= high` is expected but not enforced: real feeds
/// occasionally violate it and the indicators tolerate the violation.
/// `is_sane()` is a diagnostic, not a gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    /// Returns true if any OHLCV field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan()
            || self.high.is_nan()
            || self.low.is_nan()
            || self.close.is_nan()
            || self.volume.is_nan()
    }

    /// Basic OHLCV sanity check: high >= low, open/close within range,
    /// positive close, non-negative volume.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.close > 0.0
            && self.volume >= 0.0
    }
}

/// Ordered bar sequence for one ticker: strictly ascending timestamps,
/// no duplicates.
///
/// Built fresh per analysis run by the normalizer; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars in arbitrary order: stable sort ascending by
    /// timestamp, then collapse duplicate timestamps keeping the first
    /// occurrence. Applying this to an already-canonical series is the
    /// identity.
    pub fn from_bars(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);
        bars.dedup_by_key(|b| b.timestamp);
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Most recent bar, if any.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar {
            timestamp: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn bar_is_sane() {
        assert!(bar(2, 100.0).is_sane());
    }

    #[test]
    fn bar_detects_void() {
        let mut b = bar(2, 100.0);
        b.close = f64::NAN;
        assert!(b.is_void());
        assert!(!b.is_sane());
    }

    #[test]
    fn bar_detects_inverted_range() {
        let mut b = bar(2, 100.0);
        b.high = b.low - 1.0;
        assert!(!b.is_sane());
    }

    #[test]
    fn series_sorts_ascending() {
        let series = PriceSeries::from_bars(vec![bar(5, 103.0), bar(2, 100.0), bar(3, 101.0)]);
        let dates: Vec<u32> = series
            .bars()
            .iter()
            .map(|b| b.timestamp.format("%d").to_string().parse().unwrap())
            .collect();
        assert_eq!(dates, vec![2, 3, 5]);
    }

    #[test]
    fn series_drops_duplicate_timestamps_keeping_first() {
        let mut dup = bar(3, 999.0);
        dup.volume = 42.0;
        let series = PriceSeries::from_bars(vec![bar(2, 100.0), bar(3, 101.0), dup]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.bars()[1].close, 101.0);
    }

    #[test]
    fn from_bars_is_idempotent() {
        let series = PriceSeries::from_bars(vec![bar(5, 103.0), bar(2, 100.0), bar(3, 101.0)]);
        let again = PriceSeries::from_bars(series.bars().to_vec());
        assert_eq!(series, again);
    }

    #[test]
    fn column_extraction() {
        let series = PriceSeries::from_bars(vec![bar(2, 100.0), bar(3, 101.0)]);
        assert_eq!(series.closes(), vec![100.0, 101.0]);
        assert_eq!(series.highs(), vec![101.0, 102.0]);
        assert_eq!(series.volumes(), vec![1000.0, 1000.0]);
    }

    #[test]
    fn bar_serialization_roundtrip() {
        let b = bar(2, 100.0);
        let json = serde_json::to_string(&b).unwrap();
        let deser: PriceBar = serde_json::from_str(&json).unwrap();
        assert_eq!(b, deser);
    }
}
