//! Time-indexed column frames and multi-rate merging
//!
//! Glider sensors sample at different rates — the primary CTD on one clock,
//! auxiliary science instruments on another. This crate aligns them:
//!
//! - [`TimeFrame`] is a small column-oriented frame over a strictly
//!   increasing [`TimeIndex`].
//! - [`FrameMerger`] donates a secondary frame's columns onto a primary
//!   frame's time grid via an outer join, bounded linear interpolation over
//!   integer nanoseconds, and bounded back-filling.
//!
//! Gaps wider than the interpolation limit stay missing (NaN for float
//! columns, `None` for time columns) rather than being papered over.

pub mod frame;
pub mod merge;

pub use frame::{Column, TimeFrame, TimeIndex};
pub use merge::FrameMerger;
