//! Glider telemetry processing toolkit
//!
//! Turns raw underwater-glider telemetry (time, depth/pressure, lon/lat)
//! into a segmented, dive-indexed time series for oceanographic analysis.
//! This crate re-exports the workspace members:
//!
//! - `glider-core` — shared error type and time conversions
//! - `glider-dives` — vertical velocity, dive-phase classification, and
//!   fractional dive numbering
//! - `glider-profiles` — per-dive grouping, depth masking, and
//!   representative dive times
//! - `glider-series` — time-indexed frames and multi-rate merging with
//!   bounded gap filling
//! - `glider-geo` — great-circle distances along the surface track
//!
//! # Pipeline example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use glider_telemetry::{
//!     dive_midpoint_time, DiveNumberer, DivePhaseClassifier, ProfileGroups,
//! };
//!
//! // A short deployment sampled once a minute
//! let depth = [2.0, 40.0, 80.0, 60.0, 20.0, 2.0, 35.0, 75.0, 50.0, 10.0];
//! let time: Vec<DateTime<Utc>> = (0..depth.len() as i64)
//!     .map(|m| DateTime::from_timestamp(m * 60, 0).unwrap())
//!     .collect();
//!
//! // Raw track -> phases -> dive numbers -> per-dive view
//! let phases = DivePhaseClassifier::new().classify_track(&time, &depth)?;
//! let dives = DiveNumberer::new().number(&phases);
//! let groups = ProfileGroups::from_dive_numbers(&dives);
//!
//! // Mask everything above 30 m, per dive, and get a per-dive time axis
//! let keep = groups.mask_above(&depth, &30.0.into())?;
//! let axis = dive_midpoint_time(&groups, &time)?;
//!
//! assert_eq!(keep.len(), depth.len());
//! assert_eq!(axis.len(), depth.len());
//! # Ok::<(), glider_telemetry::Error>(())
//! ```

pub use glider_core::{epoch_nanos, Error, Result};
pub use glider_dives::{
    dive_number_from_track, vertical_velocity, DiveNumberer, DivePhase, DivePhaseClassifier,
};
pub use glider_geo::{adjacent_distance, reference_distance, EARTH_RADIUS_M};
pub use glider_profiles::{dive_midpoint_time, DepthThreshold, ProfileGroups};
pub use glider_series::{Column, FrameMerger, TimeFrame, TimeIndex};
