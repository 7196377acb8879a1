//! Dense storage for a generated batch of thermal histories.
//!
//! Logically a `(npaths, npoints, 2)` array; stored row-major as one
//! `TtPoint` per (path, point). Each path runs oldest first and ends at
//! present day, which is the order annealing kernels consume it in.

use crate::constraint::Constraint;
use crate::error::{PathGenError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TtPoint {
    pub time: f64,
    pub temperature: f64,
}

impl TtPoint {
    pub fn new(time: f64, temperature: f64) -> Self {
        TtPoint { time, temperature }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.time, self.temperature]
    }
}

/// Bounding box of an ensemble in native units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleExtent {
    pub time_min: f64,
    pub time_max: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEnsemble {
    npaths: usize,
    npoints: usize,
    points: Vec<TtPoint>,
}

impl PathEnsemble {
    /// Assemble from separate time and temperature arrays of `npaths * npoints` values.
    pub(crate) fn from_columns(npaths: usize, npoints: usize, time: &[f64], temperature: &[f64]) -> Self {
        debug_assert_eq!(time.len(), npaths * npoints);
        debug_assert_eq!(temperature.len(), npaths * npoints);

        let points = time
            .iter()
            .zip(temperature)
            .map(|(&t, &temp)| TtPoint::new(t, temp))
            .collect();

        PathEnsemble { npaths, npoints, points }
    }

    /// `[npaths, npoints, 2]`
    pub fn shape(&self) -> [usize; 3] {
        [self.npaths, self.npoints, 2]
    }

    pub fn npaths(&self) -> usize {
        self.npaths
    }

    pub fn npoints(&self) -> usize {
        self.npoints
    }

    pub fn path(&self, index: usize) -> Option<&[TtPoint]> {
        if index >= self.npaths {
            return None;
        }
        let start = index * self.npoints;
        Some(&self.points[start..start + self.npoints])
    }

    pub fn point(&self, path: usize, point: usize) -> Option<TtPoint> {
        if point >= self.npoints {
            return None;
        }
        self.path(path).map(|p| p[point])
    }

    pub fn iter_paths(&self) -> impl Iterator<Item = &[TtPoint]> {
        // chunks_exact panics on zero, and an empty row set has nothing to yield anyway
        let rows = if self.npoints == 0 { 0 } else { self.npaths };
        (0..rows).map(move |i| {
            let start = i * self.npoints;
            &self.points[start..start + self.npoints]
        })
    }

    pub fn times(&self, path: usize) -> impl Iterator<Item = f64> + '_ {
        self.path(path).unwrap_or(&[]).iter().map(|p| p.time)
    }

    pub fn temperatures(&self, path: usize) -> impl Iterator<Item = f64> + '_ {
        self.path(path).unwrap_or(&[]).iter().map(|p| p.temperature)
    }

    /// All points, row-major.
    pub fn as_slice(&self) -> &[TtPoint] {
        &self.points
    }

    /// Nested `[path][point][time, temperature]` copy, the layout plotting code expects.
    pub fn to_nested(&self) -> Vec<Vec<[f64; 2]>> {
        self.iter_paths()
            .map(|path| path.iter().map(TtPoint::as_array).collect())
            .collect()
    }

    /// Time and temperature bounds over every point, or `None` for an empty ensemble.
    pub fn extent(&self) -> Option<EnsembleExtent> {
        let first = self.points.first()?;
        let init = EnsembleExtent {
            time_min: first.time,
            time_max: first.time,
            temperature_min: first.temperature,
            temperature_max: first.temperature,
        };
        Some(self.points.iter().fold(init, |acc, p| EnsembleExtent {
            time_min: acc.time_min.min(p.time),
            time_max: acc.time_max.max(p.time),
            temperature_min: acc.temperature_min.min(p.temperature),
            temperature_max: acc.temperature_max.max(p.temperature),
        }))
    }

    /// Number of paths with at least one point inside the constraint's box.
    pub fn count_satisfying(&self, constraint: &Constraint) -> usize {
        self.iter_paths()
            .filter(|path| path.iter().any(|p| constraint.contains(p.time, p.temperature)))
            .count()
    }

    /// True when every path passes through the constraint's box.
    pub fn satisfies(&self, constraint: &Constraint) -> bool {
        self.count_satisfying(constraint) == self.npaths
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PathGenError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintRegistry;

    fn sample_ensemble() -> PathEnsemble {
        // two paths, three points each
        let time = [100.0, 42.0, 0.0, 80.0, 20.0, 0.0];
        let temperature = [200.0, 75.0, 10.0, 180.0, 40.0, 5.0];
        PathEnsemble::from_columns(2, 3, &time, &temperature)
    }

    #[test]
    fn test_shape_and_access() {
        let ensemble = sample_ensemble();
        assert_eq!(ensemble.shape(), [2, 3, 2]);
        assert_eq!(ensemble.point(0, 1), Some(TtPoint::new(42.0, 75.0)));
        assert_eq!(ensemble.point(1, 2), Some(TtPoint::new(0.0, 5.0)));
        assert_eq!(ensemble.point(2, 0), None);
        assert_eq!(ensemble.point(0, 3), None);
        assert_eq!(ensemble.times(1).collect::<Vec<_>>(), vec![80.0, 20.0, 0.0]);
        assert_eq!(ensemble.temperatures(0).collect::<Vec<_>>(), vec![200.0, 75.0, 10.0]);
        assert_eq!(ensemble.times(5).count(), 0);
    }

    #[test]
    fn test_nested_layout() {
        let nested = sample_ensemble().to_nested();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0][1], [42.0, 75.0]);
        assert_eq!(nested[1][0], [80.0, 180.0]);
    }

    #[test]
    fn test_extent() {
        let extent = sample_ensemble().extent().unwrap();
        assert_eq!(extent.time_min, 0.0);
        assert_eq!(extent.time_max, 100.0);
        assert_eq!(extent.temperature_min, 5.0);
        assert_eq!(extent.temperature_max, 200.0);

        let empty = PathEnsemble::from_columns(3, 0, &[], &[]);
        assert!(empty.extent().is_none());
        assert_eq!(empty.iter_paths().count(), 0);
    }

    #[test]
    fn test_satisfies() {
        let ensemble = sample_ensemble();
        let mut registry = ConstraintRegistry::new();
        registry.add((40.0, 44.0), (60.0, 90.0));
        registry.add((0.0, 0.0), (0.0, 20.0));

        let box_4044 = registry.as_slice()[0];
        assert_eq!(ensemble.count_satisfying(&box_4044), 1);
        assert!(!ensemble.satisfies(&box_4044));
        assert!(ensemble.satisfies(&registry.as_slice()[1]));
    }

    #[test]
    fn test_json_export() {
        let json = sample_ensemble().to_json().unwrap();
        let back: PathEnsemble = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample_ensemble());
    }
}
