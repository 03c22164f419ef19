//! OHLCV normalizer — adapts heterogeneous feed records into a `PriceSeries`.
//!
//! Upstream feeds disagree on key names (`time` vs `date`, `close` vs
//! `current_price`) and on value types (numbers, numeric strings, nulls).
//! All shape-sniffing lives in this one module; the rest of the engine only
//! ever sees `PriceSeries`.
//!
//! Repair policy: a record without a parseable timestamp or a finite close
//! is dropped with a warning — a defaulted close of 0.0 would poison every
//! indicator downstream. The remaining numeric fields default to 0.0 when
//! missing or unparseable. A fully malformed input yields an empty series,
//! never an error.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{PriceBar, PriceSeries};

/// One raw per-bar record as supplied by a price feed.
///
/// Fields are loosely typed `serde_json::Value`s so that numbers, numeric
/// strings, and nulls all deserialize; coercion happens in
/// [`normalize_records`]. Serde aliases absorb the key-name variants seen in
/// the wild.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "time", alias = "date")]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub open: Option<Value>,
    #[serde(default)]
    pub high: Option<Value>,
    #[serde(default)]
    pub low: Option<Value>,
    #[serde(default, alias = "current_price")]
    pub close: Option<Value>,
    #[serde(default, alias = "vol")]
    pub volume: Option<Value>,
}

/// Coerce a loose JSON value to a finite float, if possible.
fn coerce_finite(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Parse a timestamp value in the date shapes feeds actually emit.
fn parse_timestamp(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Convert a raw record list into a canonical price series.
///
/// Output is sorted ascending by timestamp with duplicate timestamps
/// collapsed keep-first. Empty input produces an empty series. Never panics
/// and never fails: malformed records are skipped with a warning.
pub fn normalize_records(records: &[RawRecord]) -> PriceSeries {
    let mut bars = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let Some(timestamp) = record.timestamp.as_ref().and_then(parse_timestamp) else {
            warn!(index, "dropping price record with missing or unparseable timestamp");
            continue;
        };
        let Some(close) = coerce_finite(record.close.as_ref()) else {
            warn!(
                index,
                date = %timestamp,
                "dropping price record with missing or non-numeric close"
            );
            continue;
        };

        bars.push(PriceBar {
            timestamp,
            open: coerce_finite(record.open.as_ref()).unwrap_or(0.0),
            high: coerce_finite(record.high.as_ref()).unwrap_or(0.0),
            low: coerce_finite(record.low.as_ref()).unwrap_or(0.0),
            close,
            volume: coerce_finite(record.volume.as_ref()).unwrap_or(0.0),
        });
    }

    PriceSeries::from_bars(bars)
}
