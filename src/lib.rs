//! presencemon - employee presence statistics over HTTP.
//!
//! Parses a flat CSV presence log (time-in/time-out per user per date)
//! into an in-memory store, derives weekday-grouped statistics from it,
//! and serves the results as read-only JSON endpoints for a browser
//! dashboard. The parsed dataset is cached with a TTL so request bursts
//! do not re-read the file.

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod users;

pub use error::{Error, Result};
