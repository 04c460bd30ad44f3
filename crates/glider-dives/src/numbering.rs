//! Fractional dive numbering from a phase label sequence

use chrono::{DateTime, Utc};
use glider_core::Result;

use crate::phase::DivePhaseClassifier;
use crate::types::DivePhase;

/// Converts a phase label sequence into fractional dive numbers.
///
/// Two cumulative counters track how many Descent runs and how many Ascent
/// runs have started; the dive number at a sample is the mean of the two, so
/// it rises by one half-step at the first sample of every counted run. A run
/// already in progress at the start of the sequence has no preceding sample
/// to transition from and is not counted — a trace trimmed to begin
/// mid-descent therefore reads `n.0` through each descent and `n.5` through
/// the following ascent.
///
/// A run of a single sample counts as a full transition, so label spikes on
/// noisy traces over-segment. That is the default behavior on purpose;
/// `min_run` is the debounce knob for callers that want runs shorter than a
/// given length ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiveNumberer {
    min_run: usize,
}

impl Default for DiveNumberer {
    fn default() -> Self {
        Self { min_run: 1 }
    }
}

impl DiveNumberer {
    /// Create a numberer with spike-sensitive counting (`min_run = 1`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `min_run` consecutive samples before a phase run counts as a
    /// transition. `min_run = 1` reproduces the spike-sensitive counting.
    pub fn with_min_run(min_run: usize) -> Self {
        Self {
            min_run: min_run.max(1),
        }
    }

    /// The configured minimum run length
    pub fn min_run(&self) -> usize {
        self.min_run
    }

    /// Fractional dive number per sample.
    ///
    /// Non-decreasing; every value is `k/2` for some non-negative integer k.
    pub fn number(&self, phases: &[DivePhase]) -> Vec<f64> {
        let descents = self.run_start_counts(phases, DivePhase::Descent);
        let ascents = self.run_start_counts(phases, DivePhase::Ascent);
        descents
            .iter()
            .zip(&ascents)
            .map(|(&d, &u)| (d + u) as f64 / 2.0)
            .collect()
    }

    /// Cumulative count of qualifying `target` run starts at each sample.
    fn run_start_counts(&self, phases: &[DivePhase], target: DivePhase) -> Vec<u32> {
        let n = phases.len();
        let mut starts = vec![false; n];
        let mut i = 0;
        while i < n {
            if phases[i] == target {
                let start = i;
                while i < n && phases[i] == target {
                    i += 1;
                }
                starts[start] = start > 0 && (i - start) >= self.min_run;
            } else {
                i += 1;
            }
        }

        let mut counts = vec![0u32; n];
        let mut total = 0u32;
        for (i, started) in starts.iter().enumerate() {
            if *started {
                total += 1;
            }
            counts[i] = total;
        }
        counts
    }
}

/// Dive number for a raw (time, depth) track.
///
/// Classifies phases with the given surface threshold, then numbers them
/// with the default counter.
pub fn dive_number_from_track(
    time: &[DateTime<Utc>],
    depth: &[f64],
    dive_depth_threshold: f64,
) -> Result<Vec<f64>> {
    let phases =
        DivePhaseClassifier::with_threshold(dive_depth_threshold).classify_track(time, depth)?;
    Ok(DiveNumberer::new().number(&phases))
}
