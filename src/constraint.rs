// src/constraint.rs - time/temperature boxes and the ordered registry that owns them

use crate::window::Window;
use serde::{Deserialize, Serialize};

/// A rectangular region of (time, temperature) space every path must pass through.
///
/// Windows are stored in native units exactly as supplied. `slot` is the
/// column of the raw ensemble that time repair writes to for this constraint;
/// it is fixed when the constraint is registered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub time_window: Window,
    pub temperature_window: Window,
    pub slot: usize,
}

/// Native-unit rectangle for plot overlays: origin at the window minima.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintExtent {
    pub time: f64,
    pub temperature: f64,
    pub width: f64,
    pub height: f64,
}

impl Constraint {
    pub fn contains(&self, time: f64, temperature: f64) -> bool {
        self.time_window.contains(time) && self.temperature_window.contains(temperature)
    }

    pub fn extent(&self) -> ConstraintExtent {
        ConstraintExtent {
            time: self.time_window.min(),
            temperature: self.temperature_window.min(),
            width: self.time_window.width(),
            height: self.temperature_window.width(),
        }
    }
}

/// Ordered list of constraints. Insertion order decides slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstraintRegistry {
    constraints: Vec<Constraint>,
}

impl ConstraintRegistry {
    pub fn new() -> Self {
        ConstraintRegistry { constraints: Vec::new() }
    }

    /// Append a constraint. Overlaps and out-of-order windows are accepted as-is.
    pub fn add(&mut self, time_window: impl Into<Window>, temperature_window: impl Into<Window>) -> &[Constraint] {
        let slot = self.constraints.len();
        self.constraints.push(Constraint {
            time_window: time_window.into(),
            temperature_window: temperature_window.into(),
            slot,
        });
        &self.constraints
    }

    pub fn clear(&mut self) -> &[Constraint] {
        self.constraints.clear();
        &self.constraints
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }
}
