//! Non-dimensionalization of the problem.
//!
//! All sampling happens in the unit interval. `ScaleFactors` converts
//! constraints into that space and the finished ensemble back out of it.
//! Normalized constraints are derived values; the registry never sees them.

use crate::constraint::Constraint;
use crate::error::{PathGenError, Result};
use crate::math_utils::scale_factor;
use crate::window::Window;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub time: f64,
    pub temperature: f64,
}

/// A constraint expressed in unit space, tagged with its repair slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedConstraint {
    pub slot: usize,
    pub time: Window,
    pub temperature: Window,
}

impl ScaleFactors {
    /// Derive factors from the caller's time and temperature ranges.
    ///
    /// A range whose largest magnitude is zero (or not finite) cannot be
    /// normalized against.
    pub fn from_ranges(time_range: (f64, f64), temperature_range: (f64, f64)) -> Result<Self> {
        let time = scale_factor(time_range);
        let temperature = scale_factor(temperature_range);

        if !time.is_finite() || time == 0.0 {
            return Err(PathGenError::InvalidConfiguration(format!(
                "time range {:?} has no usable scale",
                time_range
            )));
        }
        if !temperature.is_finite() || temperature == 0.0 {
            return Err(PathGenError::InvalidConfiguration(format!(
                "temperature range {:?} has no usable scale",
                temperature_range
            )));
        }

        Ok(ScaleFactors { time, temperature })
    }

    pub fn normalize(&self, constraint: &Constraint) -> NormalizedConstraint {
        NormalizedConstraint {
            slot: constraint.slot,
            time: constraint.time_window.scaled_down(self.time),
            temperature: constraint.temperature_window.scaled_down(self.temperature),
        }
    }

    pub fn normalize_all(&self, constraints: &[Constraint]) -> Vec<NormalizedConstraint> {
        constraints.iter().map(|c| self.normalize(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintRegistry;

    #[test]
    fn test_factors_use_largest_magnitude() {
        let scale = ScaleFactors::from_ranges((100.0, 0.0), (0.0, 400.0)).unwrap();
        assert_eq!(scale.time, 100.0);
        assert_eq!(scale.temperature, 400.0);
    }

    #[test]
    fn test_zero_range_rejected() {
        let err = ScaleFactors::from_ranges((0.0, 0.0), (0.0, 400.0)).unwrap_err();
        assert!(matches!(err, PathGenError::InvalidConfiguration(_)));

        let err = ScaleFactors::from_ranges((0.0, 100.0), (0.0, f64::NAN)).unwrap_err();
        assert!(matches!(err, PathGenError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_normalize_leaves_source_untouched() {
        let scale = ScaleFactors::from_ranges((0.0, 100.0), (0.0, 400.0)).unwrap();
        let mut registry = ConstraintRegistry::new();
        registry.add((40.0, 44.0), (60.0, 90.0));
        let original = registry.as_slice()[0];

        let first = scale.normalize(&original);
        let second = scale.normalize(&registry.as_slice()[0]);

        assert_eq!(first, second);
        assert_eq!(first.time.min(), 0.4);
        assert_eq!(first.temperature.max(), 0.225);
        assert_eq!(registry.as_slice()[0], original);
    }
}
