//! Merging of streams sampled at different rates

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use glider_core::{epoch_nanos, Error, Result};

use crate::frame::{Column, TimeFrame, TimeIndex};

/// Donates a secondary stream's columns onto a primary stream's time grid.
///
/// The two indices are outer-joined, every column of both frames is carried
/// onto the union grid, interior gaps are linearly interpolated over integer
/// nanoseconds with at most `interp_lim` consecutive samples filled per gap,
/// remaining gaps are back-filled from the next valid sample up to the same
/// limit, and the result is cut back to exactly the primary index. The
/// secondary stream's own timestamps do not survive; they only anchor
/// donated values.
///
/// A secondary column whose name collides with a primary column comes out
/// with a `_drop` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMerger {
    interp_lim: usize,
}

impl Default for FrameMerger {
    fn default() -> Self {
        Self { interp_lim: 3 }
    }
}

impl FrameMerger {
    /// Create a merger filling at most `interp_lim` consecutive gap samples
    pub fn new(interp_lim: usize) -> Self {
        Self { interp_lim }
    }

    /// The configured gap-filling limit
    pub fn interp_lim(&self) -> usize {
        self.interp_lim
    }

    /// Merge `secondary`'s columns onto `primary`'s time grid.
    ///
    /// Both indices must be the same [`TimeIndex`] kind; mixing kinds is an
    /// error raised before any computation. The output has exactly the
    /// primary frame's index and row count.
    #[instrument(skip_all, fields(interp_lim = self.interp_lim))]
    pub fn merge(&self, primary: &TimeFrame, secondary: &TimeFrame) -> Result<TimeFrame> {
        match (primary.index(), secondary.index()) {
            (TimeIndex::Absolute(_), TimeIndex::Absolute(_)) => {}
            (TimeIndex::Relative(_), TimeIndex::Relative(_)) => {}
            (left, right) => {
                return Err(Error::index_type_mismatch(left.kind(), right.kind()));
            }
        }

        let p_nanos = primary.index().as_nanos()?;
        let s_nanos = secondary.index().as_nanos()?;
        let (grid, p_pos, s_pos) = union_sorted(&p_nanos, &s_nanos);
        debug!(
            primary = p_nanos.len(),
            secondary = s_nanos.len(),
            union = grid.len(),
            "outer-joined indices"
        );

        let mut out = TimeFrame::new(primary.index().clone())?;
        for (name, column) in primary.columns() {
            let filled = self.fill_onto_grid(column, &p_pos, &grid, &p_pos)?;
            out.push_column(name.clone(), filled)?;
        }
        for (name, column) in secondary.columns() {
            let out_name = if primary.column(name).is_some() {
                format!("{name}_drop")
            } else {
                name.clone()
            };
            let filled = self.fill_onto_grid(column, &s_pos, &grid, &p_pos)?;
            out.push_column(out_name, filled)?;
        }
        Ok(out)
    }

    /// Scatter a source column onto the union grid, fill its gaps, and
    /// gather the values landing on the output grid positions.
    ///
    /// `own_pos` maps the column's source rows onto the grid; `take_pos`
    /// marks the grid positions gathered for the output.
    fn fill_onto_grid(
        &self,
        column: &Column,
        own_pos: &[usize],
        grid: &[i64],
        take_pos: &[usize],
    ) -> Result<Column> {
        let mut vals = vec![f64::NAN; grid.len()];
        match column {
            Column::Float(v) => {
                for (row, &g) in own_pos.iter().enumerate() {
                    vals[g] = v[row];
                }
            }
            Column::Time(v) => {
                for (row, &g) in own_pos.iter().enumerate() {
                    if let Some(t) = v[row] {
                        vals[g] = epoch_nanos(&t)? as f64;
                    }
                }
            }
        }

        interpolate_limit(grid, &mut vals, self.interp_lim);
        backfill_limit(&mut vals, self.interp_lim);

        match column {
            Column::Float(_) => Ok(Column::Float(
                take_pos.iter().map(|&g| vals[g]).collect(),
            )),
            Column::Time(src) => {
                // Restore source samples exactly; only donated values go
                // through the nanosecond image.
                let mut exact: Vec<Option<DateTime<Utc>>> = vec![None; grid.len()];
                for (row, &g) in own_pos.iter().enumerate() {
                    exact[g] = src[row];
                }
                let out = take_pos
                    .iter()
                    .map(|&g| {
                        if let Some(t) = exact[g] {
                            Some(t)
                        } else if vals[g].is_nan() {
                            None
                        } else {
                            Some(DateTime::from_timestamp_nanos(vals[g].round() as i64))
                        }
                    })
                    .collect();
                Ok(Column::Time(out))
            }
        }
    }
}

/// Sorted union of two strictly increasing integer indices, with the union
/// position of every source sample.
fn union_sorted(a: &[i64], b: &[i64]) -> (Vec<i64>, Vec<usize>, Vec<usize>) {
    let mut grid = Vec::with_capacity(a.len() + b.len());
    let mut a_pos = Vec::with_capacity(a.len());
    let mut b_pos = Vec::with_capacity(b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let take_a = j >= b.len() || (i < a.len() && a[i] <= b[j]);
        let take_b = i >= a.len() || (j < b.len() && b[j] <= a[i]);
        let key = if take_a { a[i] } else { b[j] };
        if take_a {
            a_pos.push(grid.len());
            i += 1;
        }
        if take_b {
            b_pos.push(grid.len());
            j += 1;
        }
        grid.push(key);
    }
    (grid, a_pos, b_pos)
}

/// Linear interpolation over integer time, filling at most `limit` leading
/// samples of each interior gap.
fn interpolate_limit(xs: &[i64], vals: &mut [f64], limit: usize) {
    let valid: Vec<usize> = (0..vals.len()).filter(|&i| !vals[i].is_nan()).collect();
    for pair in valid.windows(2) {
        let (l, r) = (pair[0], pair[1]);
        let span = (xs[r] - xs[l]) as f64;
        for (k, j) in (l + 1..r).enumerate() {
            if k >= limit {
                break;
            }
            let w = (xs[j] - xs[l]) as f64 / span;
            vals[j] = vals[l] + w * (vals[r] - vals[l]);
        }
    }
}

/// Back-fill runs of missing values from the next valid sample, at most
/// `limit` samples per run.
fn backfill_limit(vals: &mut [f64], limit: usize) {
    let mut next: Option<f64> = None;
    let mut dist = 0usize;
    for i in (0..vals.len()).rev() {
        if vals[i].is_nan() {
            dist += 1;
            if let Some(v) = next {
                if dist <= limit {
                    vals[i] = v;
                }
            }
        } else {
            next = Some(vals[i]);
            dist = 0;
        }
    }
}
