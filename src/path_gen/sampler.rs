//! Unconstrained draws for a whole ensemble.

use rand::Rng;

/// Raw (time, temperature) columns in unit space, row-major `npaths x npoints`.
///
/// Neither constraint-satisfying nor sorted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPaths {
    pub npaths: usize,
    pub npoints: usize,
    pub time: Vec<f64>,
    pub temperature: Vec<f64>,
}

impl RawPaths {
    pub fn time_row(&self, path: usize) -> &[f64] {
        let start = path * self.npoints;
        &self.time[start..start + self.npoints]
    }

    pub fn time_row_mut(&mut self, path: usize) -> &mut [f64] {
        let start = path * self.npoints;
        &mut self.time[start..start + self.npoints]
    }
}

/// Draw `npaths x npoints` control points.
///
/// Times are `1 - u` for `u` in [0, 1), so they land in (0, 1]. The last
/// column is pinned to 0 (present day) before any sorting. Temperatures are
/// independent uniform draws in [0, 1).
pub fn sample_raw_paths<R: Rng>(rng: &mut R, npaths: usize, npoints: usize) -> RawPaths {
    let total = npaths * npoints;

    let mut time: Vec<f64> = (0..total).map(|_| 1.0 - rng.random::<f64>()).collect();
    if npoints > 0 {
        for row in time.chunks_exact_mut(npoints) {
            row[npoints - 1] = 0.0;
        }
    }

    let temperature: Vec<f64> = (0..total).map(|_| rng.random::<f64>()).collect();

    RawPaths { npaths, npoints, time, temperature }
}
