//! SigLab Core — multi-strategy technical signal engine.
//!
//! This crate contains the numerical heart of the analysis pipeline:
//! - Domain types (price bars, price series, strategy and ensemble signals)
//! - OHLCV normalizer adapting heterogeneous feed records into one series shape
//! - Indicator library (EMA, RSI, Bollinger Bands, ADX, ATR, Hurst exponent)
//! - Five strategy signal functions (trend following, mean reversion,
//!   momentum, volatility, statistical arbitrage)
//! - Deterministic weighted-vote ensemble combiner
//!
//! Everything here is pure and synchronous: data in memory, signals out.
//! Fetching prices and generating narratives live in `siglab-runner`.

pub mod data;
pub mod domain;
pub mod engine;
pub mod ensemble;
pub mod indicators;
pub mod strategies;
