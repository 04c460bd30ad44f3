//! Per-dive depth masking

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use glider_core::{Error, Result};

use crate::groups::ProfileGroups;

/// Depth cutoff for masking: one value for the whole deployment, or one per
/// dive (e.g. an externally computed mixed-layer depth keyed by dive
/// number).
#[derive(Debug, Clone, PartialEq)]
pub enum DepthThreshold {
    /// The same cutoff applied to every dive
    Uniform(f64),
    /// A cutoff per dive number
    PerDive(BTreeMap<OrderedFloat<f64>, f64>),
}

impl DepthThreshold {
    /// Cutoff for one dive; a missing per-dive entry is an error.
    fn for_dive(&self, dive: f64) -> Result<f64> {
        match self {
            DepthThreshold::Uniform(v) => Ok(*v),
            DepthThreshold::PerDive(map) => {
                map.get(&OrderedFloat(dive)).copied().ok_or_else(|| {
                    Error::InvalidInput(format!("no depth threshold for dive {dive}"))
                })
            }
        }
    }
}

impl From<f64> for DepthThreshold {
    fn from(v: f64) -> Self {
        DepthThreshold::Uniform(v)
    }
}

impl FromIterator<(f64, f64)> for DepthThreshold {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        DepthThreshold::PerDive(
            iter.into_iter()
                .map(|(dive, v)| (OrderedFloat(dive), v))
                .collect(),
        )
    }
}

impl ProfileGroups {
    /// Keep-mask retaining samples below the cutoff, per dive.
    ///
    /// True marks a sample that survives masking; the source data is never
    /// touched. A NaN cutoff fails every comparison and masks that dive
    /// entirely, as do rows outside any group; NaN depth samples are always
    /// masked.
    pub fn mask_above(&self, depth: &[f64], threshold: &DepthThreshold) -> Result<Vec<bool>> {
        self.mask_depth(depth, threshold, true)
    }

    /// Keep-mask retaining samples above the cutoff, per dive.
    pub fn mask_below(&self, depth: &[f64], threshold: &DepthThreshold) -> Result<Vec<bool>> {
        self.mask_depth(depth, threshold, false)
    }

    fn mask_depth(
        &self,
        depth: &[f64],
        threshold: &DepthThreshold,
        above: bool,
    ) -> Result<Vec<bool>> {
        if depth.len() != self.n_rows() {
            return Err(Error::shape_mismatch(
                "mask_depth",
                self.n_rows(),
                depth.len(),
            ));
        }
        let mut keep = vec![false; depth.len()];
        for (dive, rows) in self.iter() {
            let cutoff = threshold.for_dive(dive)?;
            for &row in rows {
                keep[row] = if above {
                    depth[row] > cutoff
                } else {
                    depth[row] < cutoff
                };
            }
        }
        Ok(keep)
    }
}
