//! Boundary between raw feed records and the engine's price series.

pub mod normalize;

pub use normalize::{normalize_records, RawRecord};
