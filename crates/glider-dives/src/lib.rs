//! Dive segmentation for underwater glider depth traces
//!
//! This crate turns a raw (time, depth) trace into discrete dive phases and
//! fractional dive numbers:
//!
//! - [`vertical_velocity`] derives an instantaneous vertical velocity signal
//!   (cm/s, positive descending) from the depth trace.
//! - [`DivePhaseClassifier`] thresholds depth and velocity into one
//!   [`DivePhase`] label per sample, using an ordered rule table.
//! - [`DiveNumberer`] converts the label sequence into a non-decreasing
//!   fractional dive number that rises by a half-step at the start of each
//!   descent and ascent run: for a trace that begins mid-descent, `n.0`
//!   through a descent and `n.5` through the following ascent.
//!
//! # Example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use glider_dives::{DiveNumberer, DivePhaseClassifier};
//!
//! // One dive: surface, down to 80 m, back up
//! let time: Vec<DateTime<Utc>> = (0..6)
//!     .map(|m| DateTime::from_timestamp(m * 60, 0).unwrap())
//!     .collect();
//! let depth = [2.0, 40.0, 80.0, 60.0, 20.0, 2.0];
//!
//! let phases = DivePhaseClassifier::new().classify_track(&time, &depth)?;
//! let dives = DiveNumberer::new().number(&phases);
//!
//! assert!(dives.windows(2).all(|w| w[0] <= w[1]));
//! # Ok::<(), glider_core::Error>(())
//! ```

pub mod numbering;
pub mod phase;
pub mod types;
pub mod velocity;

pub use numbering::{dive_number_from_track, DiveNumberer};
pub use phase::DivePhaseClassifier;
pub use types::DivePhase;
pub use velocity::vertical_velocity;
