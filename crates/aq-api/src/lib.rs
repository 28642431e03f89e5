//! HTTP client for the air-quality metrics API
//!
//! This crate owns everything that touches the network: typed wire DTOs for
//! the seven read-only endpoints, the [`AirQualityApi`] trait seam that lets
//! the view layer run against a fake, the reqwest-backed [`HttpApi`], and the
//! concurrent [`fetch_snapshot`] that a city refresh fans out into.

pub mod client;
pub mod error;
pub mod wire;

pub use client::*;
pub use error::*;
