//! View-state layer for the air-quality dashboard
//!
//! Selection, fetched data, and every derived collection live in one
//! [`DashboardState`] that is mutated only through [`Action`]s. The async
//! [`ViewController`] drives refresh cycles through the `aq-api` trait seam
//! and applies results back as actions, so a stale in-flight response can
//! never overwrite newer state.

pub mod controller;
pub mod state;

pub use controller::*;
pub use state::*;
