//! Per-dive grouping, masking, and summarization
//!
//! Once a trace has fractional dive numbers (see `glider-dives`), this crate
//! provides the per-dive view of the data:
//!
//! - [`ProfileGroups`] maps each dive number to the ordered row indices of
//!   its samples. The grouping is computed once and reused by masking and
//!   summarization.
//! - [`ProfileGroups::mask_above`] / [`ProfileGroups::mask_below`] build
//!   per-dive keep-masks against a uniform or per-dive depth cutoff
//!   ([`DepthThreshold`]).
//! - [`dive_midpoint_time`] assigns every row the midpoint of its dive's
//!   time span, for use as a per-dive time axis.

pub mod dive_time;
pub mod groups;
pub mod mask;

pub use dive_time::dive_midpoint_time;
pub use groups::ProfileGroups;
pub use mask::DepthThreshold;
