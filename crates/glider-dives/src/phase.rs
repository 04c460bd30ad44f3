//! Dive-phase classification over depth and vertical velocity

use chrono::{DateTime, Utc};
use glider_core::{Error, Result};

use crate::types::DivePhase;
use crate::velocity::vertical_velocity;

/// Vertical velocity band (cm/s) inside which a sample counts as stationary.
const VELOCITY_BAND_CM_S: f64 = 0.5;

/// Classifies each sample of a depth trace into a [`DivePhase`].
///
/// The classification is an ordered rule table evaluated in sequence; a
/// later match overwrites an earlier one, so the table order is
/// authoritative:
///
/// 1. velocity above +0.5 cm/s → [`DivePhase::Descent`]
/// 2. velocity below −0.5 cm/s → [`DivePhase::Ascent`]
/// 3. deeper than the surface threshold, inside the band → [`DivePhase::Inflexion`]
/// 4. at or above the surface threshold → [`DivePhase::Surface`]
///
/// Rule 4 overrides the motion rules for shallow samples. Samples no rule
/// matches — an undefined velocity at depth, such as the first sample of a
/// trace that starts deep — are [`DivePhase::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub struct DivePhaseClassifier {
    dive_depth_threshold: f64,
}

impl Default for DivePhaseClassifier {
    fn default() -> Self {
        Self {
            dive_depth_threshold: 15.0,
        }
    }
}

impl DivePhaseClassifier {
    /// Create a classifier with the default 15 m surface threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom surface threshold (m or dbar).
    ///
    /// The threshold should be shallower than the shallowest expected dive.
    pub fn with_threshold(dive_depth_threshold: f64) -> Self {
        Self {
            dive_depth_threshold,
        }
    }

    /// The configured surface threshold
    pub fn dive_depth_threshold(&self) -> f64 {
        self.dive_depth_threshold
    }

    /// Classify from depth and a precomputed velocity signal (cm/s).
    ///
    /// `velocity` must be aligned with `depth`, as produced by
    /// [`vertical_velocity`].
    pub fn classify(&self, depth: &[f64], velocity: &[f64]) -> Result<Vec<DivePhase>> {
        if depth.len() != velocity.len() {
            return Err(Error::shape_mismatch(
                "classify",
                depth.len(),
                velocity.len(),
            ));
        }

        let thr = self.dive_depth_threshold;
        let descending = |_d: f64, v: f64| v > VELOCITY_BAND_CM_S;
        let ascending = |_d: f64, v: f64| v < -VELOCITY_BAND_CM_S;
        let inflecting =
            |d: f64, v: f64| d > thr && v >= -VELOCITY_BAND_CM_S && v <= VELOCITY_BAND_CM_S;
        let at_surface = |d: f64, _v: f64| d <= thr;

        // Ordered rule table; a later match overwrites an earlier one.
        let rules: [(DivePhase, &dyn Fn(f64, f64) -> bool); 4] = [
            (DivePhase::Descent, &descending),
            (DivePhase::Ascent, &ascending),
            (DivePhase::Inflexion, &inflecting),
            (DivePhase::Surface, &at_surface),
        ];

        let mut labels: Vec<Option<DivePhase>> = vec![None; depth.len()];
        for (phase, applies) in rules {
            for (i, label) in labels.iter_mut().enumerate() {
                if applies(depth[i], velocity[i]) {
                    *label = Some(phase);
                }
            }
        }

        Ok(labels
            .into_iter()
            .map(|l| l.unwrap_or(DivePhase::Unknown))
            .collect())
    }

    /// Classify a raw (time, depth) track, deriving the velocity signal
    /// internally.
    pub fn classify_track(
        &self,
        time: &[DateTime<Utc>],
        depth: &[f64],
    ) -> Result<Vec<DivePhase>> {
        let velocity = vertical_velocity(time, depth)?;
        self.classify(depth, &velocity)
    }
}
