//! Core types shared by the glider telemetry crates
//!
//! Provides the unified error type used across the workspace and the small
//! time conversions every crate leans on.

pub mod error;
pub mod time;

pub use error::{Error, Result};
pub use time::epoch_nanos;
