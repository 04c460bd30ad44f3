//! Types used for dive segmentation

use std::fmt;

/// Motion state of a single glider sample, using the EGO phase codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivePhase {
    /// At or above the surface-drift depth threshold
    Surface = 0,
    /// Moving down faster than the stationary velocity band
    Descent = 1,
    /// At depth with near-zero vertical velocity (turning point)
    Inflexion = 3,
    /// Moving up faster than the stationary velocity band
    Ascent = 4,
    /// Velocity undefined for this sample
    Unknown = 6,
}

impl DivePhase {
    /// Numeric EGO code for this phase
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DivePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivePhase::Surface => write!(f, "Surface"),
            DivePhase::Descent => write!(f, "Descent"),
            DivePhase::Inflexion => write!(f, "Inflexion"),
            DivePhase::Ascent => write!(f, "Ascent"),
            DivePhase::Unknown => write!(f, "Unknown"),
        }
    }
}
