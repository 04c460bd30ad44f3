//! Grouping of rows by fractional dive number

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use glider_core::{Error, Result};

/// Row-index view of a dataset grouped by dive number.
///
/// The grouping is computed once from the dive-number column alone and holds
/// only row indices, so any column can afterwards be aggregated or masked
/// per dive without regrouping. One group corresponds to one down-cast
/// (`n.0`) or up-cast (`n.5`).
///
/// Rows with a non-finite dive number belong to no group: they are skipped
/// by aggregation, always masked, and receive no representative time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileGroups {
    groups: BTreeMap<OrderedFloat<f64>, Vec<usize>>,
    n_rows: usize,
}

impl ProfileGroups {
    /// Group row indices by their dive number.
    pub fn from_dive_numbers(dives: &[f64]) -> Self {
        let mut groups: BTreeMap<OrderedFloat<f64>, Vec<usize>> = BTreeMap::new();
        for (row, &dive) in dives.iter().enumerate() {
            if dive.is_finite() {
                groups.entry(OrderedFloat(dive)).or_default().push(row);
            }
        }
        Self {
            groups,
            n_rows: dives.len(),
        }
    }

    /// Number of rows in the source dataset
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of distinct dives
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no row carried a finite dive number
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Dive numbers in ascending order
    pub fn dives(&self) -> impl Iterator<Item = f64> + '_ {
        self.groups.keys().map(|k| k.into_inner())
    }

    /// Row indices belonging to one dive
    pub fn rows(&self, dive: f64) -> Option<&[usize]> {
        self.groups.get(&OrderedFloat(dive)).map(|v| v.as_slice())
    }

    /// Iterate (dive number, row indices) in ascending dive order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[usize])> {
        self.groups.iter().map(|(k, v)| (k.into_inner(), v.as_slice()))
    }

    /// Reduce one column to a single value per dive.
    ///
    /// `column` must be aligned with the rows the grouping was built from.
    /// Only the requested column is touched, which keeps per-dive statistics
    /// over a handful of variables cheap on wide datasets.
    pub fn aggregate<F>(&self, column: &[f64], reducer: F) -> Result<Vec<(f64, f64)>>
    where
        F: Fn(&[f64]) -> f64,
    {
        if column.len() != self.n_rows {
            return Err(Error::shape_mismatch("aggregate", self.n_rows, column.len()));
        }
        let mut out = Vec::with_capacity(self.groups.len());
        let mut scratch = Vec::new();
        for (dive, rows) in self.iter() {
            scratch.clear();
            scratch.extend(rows.iter().map(|&r| column[r]));
            out.push((dive, reducer(&scratch)));
        }
        Ok(out)
    }
}
