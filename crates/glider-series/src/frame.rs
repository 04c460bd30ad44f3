//! Time-indexed column frames

use chrono::{DateTime, Utc};

use glider_core::{epoch_nanos, Error, Result};

/// Sample index of a frame: absolute instants or elapsed seconds.
///
/// Two frames can only be merged when their indices are the same kind; the
/// kinds exist so that mixing them is a surfaced error rather than a silent
/// coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeIndex {
    /// Absolute timestamps
    Absolute(Vec<DateTime<Utc>>),
    /// Seconds relative to an external origin
    Relative(Vec<f64>),
}

impl TimeIndex {
    /// Number of samples in the index
    pub fn len(&self) -> usize {
        match self {
            TimeIndex::Absolute(v) => v.len(),
            TimeIndex::Relative(v) => v.len(),
        }
    }

    /// True when the index holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the index kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            TimeIndex::Absolute(_) => "absolute",
            TimeIndex::Relative(_) => "relative",
        }
    }

    /// Integer nanosecond image of the index.
    ///
    /// Relative seconds are rounded to whole nanoseconds.
    pub(crate) fn as_nanos(&self) -> Result<Vec<i64>> {
        match self {
            TimeIndex::Absolute(times) => times.iter().map(epoch_nanos).collect(),
            TimeIndex::Relative(secs) => secs
                .iter()
                .map(|&s| {
                    let ns = s * 1e9;
                    if !ns.is_finite() || ns < i64::MIN as f64 || ns > i64::MAX as f64 {
                        return Err(Error::InvalidInput(format!(
                            "relative time {s}s is not representable in nanoseconds"
                        )));
                    }
                    Ok(ns.round() as i64)
                })
                .collect(),
        }
    }
}

/// One named column of samples.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Floating-point samples; NaN marks a missing value
    Float(Vec<f64>),
    /// Timestamp samples; None marks a missing value
    Time(Vec<Option<DateTime<Utc>>>),
}

impl Column {
    /// Number of samples in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Time(v) => v.len(),
        }
    }

    /// True when the column holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column-oriented data indexed by sample time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFrame {
    index: TimeIndex,
    columns: Vec<(String, Column)>,
}

impl TimeFrame {
    /// Frame over an index with no columns yet.
    ///
    /// The index must be strictly increasing in time.
    pub fn new(index: TimeIndex) -> Result<Self> {
        let nanos = index.as_nanos()?;
        if nanos.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidInput(
                "frame index must be strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            index,
            columns: Vec::new(),
        })
    }

    /// Append a column.
    ///
    /// Its length must match the index and its name must be unused.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        if self.columns.iter().any(|(n, _)| *n == name) {
            return Err(Error::InvalidParameter(format!(
                "duplicate column name {name:?}"
            )));
        }
        if column.len() != self.index.len() {
            return Err(Error::shape_mismatch(
                &format!("column {name:?}"),
                self.index.len(),
                column.len(),
            ));
        }
        self.columns.push((name, column));
        Ok(())
    }

    /// Builder-style [`push_column`](Self::push_column)
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        self.push_column(name, column)?;
        Ok(self)
    }

    /// The frame's time index
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub(crate) fn columns(&self) -> &[(String, Column)] {
        &self.columns
    }
}
