//! Closed intervals read through min/max.
//!
//! A `Window` keeps whatever pair the caller supplied. Reversed bounds are
//! legal and are never rejected; every consumer asks for `min()`/`max()`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub a: f64,
    pub b: f64,
}

impl Window {
    pub fn new(a: f64, b: f64) -> Self {
        Window { a, b }
    }

    /// A degenerate window holding a single value.
    pub fn point(value: f64) -> Self {
        Window { a: value, b: value }
    }

    pub fn min(&self) -> f64 {
        self.a.min(self.b)
    }

    pub fn max(&self) -> f64 {
        self.a.max(self.b)
    }

    pub fn width(&self) -> f64 {
        self.max() - self.min()
    }

    pub fn is_point(&self) -> bool {
        self.a == self.b
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Same window with both ends divided by `factor`.
    pub fn scaled_down(&self, factor: f64) -> Self {
        Window { a: self.a / factor, b: self.b / factor }
    }
}

impl From<(f64, f64)> for Window {
    fn from((a, b): (f64, f64)) -> Self {
        Window { a, b }
    }
}
