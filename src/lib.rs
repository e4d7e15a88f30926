//! Tickerlens: technical analysis engine for equity price series.
//!
//! The engine itself ([`analysis`], [`indicators`]) is a pure, stateless
//! pipeline: price history in, indicator report out. The [`core`] module
//! exposes it over HTTP; fetching price data is the caller's concern.

pub mod analysis;
pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
