//! Core domain types and derivation logic for air-quality analytics
//!
//! This crate holds the pure, synchronous half of the dashboard: typed
//! observation records, aggregation into monthly and hourly views, record
//! filtering, chart-series merging, and display formatting. Everything here
//! is a pure function of its inputs; network and state live in `aq-api` and
//! `aq-view`.

pub mod aggregate;
pub mod correlation;
pub mod filter;
pub mod format;
pub mod merge;
pub mod types;

pub use aggregate::*;
pub use correlation::*;
pub use filter::*;
pub use format::*;
pub use merge::*;
pub use types::*;
