//! Repair a raw ensemble so every path passes through every constraint.
//!
//! Time repair is positional: a path with no point inside a constraint's
//! time window gets a fresh draw written to that constraint's slot. The
//! present-day column and any earlier constraint's only hit are never
//! overwritten; the draw moves to a free column instead. Rows are
//! then sorted oldest first, which scrambles slots, so temperature repair
//! matches points by time value instead. Later constraints overwrite earlier
//! ones where time windows overlap.

use crate::math_utils::lerp_within;
use crate::path_gen::sampler::RawPaths;
use crate::scale::NormalizedConstraint;
use crate::window::Window;
use rand::Rng;
use tracing::{trace, warn};

/// Per-constraint bookkeeping from one enforcement pass, in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepairReport {
    /// Paths that received a time draw.
    pub time_repairs: Vec<usize>,
    /// Points whose temperature was overwritten.
    pub temperature_writes: Vec<usize>,
}

fn draw_in<R: Rng>(rng: &mut R, window: &Window) -> f64 {
    lerp_within(window.min(), window.max(), rng.random::<f64>())
}

/// Columns of a row that time repair must not overwrite.
///
/// The last column holds present day. Any column that is the only hit of an
/// already-processed constraint is held too.
fn guarded_columns(row: &[f64], earlier: &[NormalizedConstraint]) -> Vec<bool> {
    let mut guarded = vec![false; row.len()];
    if let Some(last) = guarded.last_mut() {
        *last = true;
    }
    for constraint in earlier {
        let mut hits = row
            .iter()
            .enumerate()
            .filter(|(_, t)| constraint.time.contains(**t))
            .map(|(j, _)| j);
        if let (Some(only), None) = (hits.next(), hits.next()) {
            guarded[only] = true;
        }
    }
    guarded
}

/// Column a repair draw lands in: the slot when unguarded, else the first
/// unguarded column. When every column is guarded an earlier constraint's
/// only hit is given up, but present day never is.
fn target_column(slot: usize, guarded: &[bool]) -> Option<usize> {
    if guarded.get(slot) == Some(&false) {
        return Some(slot);
    }
    if let Some(free) = guarded.iter().position(|g| !g) {
        return Some(free);
    }
    let last = guarded.len().checked_sub(1)?;
    if slot < last {
        Some(slot)
    } else if last > 0 {
        Some(0)
    } else {
        None
    }
}

/// Give every path at least one time inside each constraint's window.
///
/// Returns the number of paths repaired per constraint.
pub fn repair_times<R: Rng>(raw: &mut RawPaths, constraints: &[NormalizedConstraint], rng: &mut R) -> Vec<usize> {
    let mut repairs = Vec::with_capacity(constraints.len());

    for (i, constraint) in constraints.iter().enumerate() {
        let earlier = &constraints[..i];
        let mut repaired = 0;
        let mut moved = 0;
        let mut stranded = 0;

        for path in 0..raw.npaths {
            let row = raw.time_row_mut(path);
            if row.iter().any(|&t| constraint.time.contains(t)) {
                continue;
            }
            let guarded = guarded_columns(row, earlier);
            match target_column(constraint.slot, &guarded) {
                Some(column) => {
                    row[column] = draw_in(rng, &constraint.time);
                    repaired += 1;
                    if column != constraint.slot {
                        moved += 1;
                    }
                }
                None => stranded += 1,
            }
        }

        if stranded > 0 {
            warn!(slot = constraint.slot, stranded, "no column free for time repair");
        }
        trace!(slot = constraint.slot, repaired, moved, "time repair");
        repairs.push(repaired);
    }

    repairs
}

/// Sort every row's times into non-increasing order (oldest first).
pub fn sort_rows_descending(raw: &mut RawPaths) {
    for path in 0..raw.npaths {
        raw.time_row_mut(path).sort_unstable_by(|a, b| b.total_cmp(a));
    }
}

/// Overwrite the temperature of every point whose time falls in a constraint's window.
pub fn repair_temperatures<R: Rng>(
    raw: &mut RawPaths,
    constraints: &[NormalizedConstraint],
    rng: &mut R,
) -> Vec<usize> {
    let mut writes = Vec::with_capacity(constraints.len());

    for constraint in constraints {
        let mut written = 0;
        for (t, temp) in raw.time.iter().zip(raw.temperature.iter_mut()) {
            if constraint.time.contains(*t) {
                *temp = draw_in(rng, &constraint.temperature);
                written += 1;
            }
        }
        if written == 0 && raw.npaths > 0 && raw.npoints > 0 {
            warn!(slot = constraint.slot, "constraint time window matched no points after sorting");
        }
        trace!(slot = constraint.slot, written, "temperature repair");
        writes.push(written);
    }

    writes
}

/// Full pass: time repair, sort, temperature repair.
pub fn enforce_constraints<R: Rng>(
    raw: &mut RawPaths,
    constraints: &[NormalizedConstraint],
    rng: &mut R,
) -> RepairReport {
    let time_repairs = repair_times(raw, constraints, rng);
    sort_rows_descending(raw);
    let temperature_writes = repair_temperatures(raw, constraints, rng);

    RepairReport { time_repairs, temperature_writes }
}
