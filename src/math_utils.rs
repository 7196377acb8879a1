//! Mathematical helpers shared by the sampler and the enforcer
//!
//! Everything here works on plain `f64` values; the batched array work
//! lives in `path_gen`.

/// Linear interpolation between two values
///
/// # Arguments
/// * `a` - Start value
/// * `b` - End value
/// * `ratio` - Interpolation ratio (0.0 = a, 1.0 = b)
///
/// # Examples
/// ```
/// use ftracks_paths::math_utils::lerp;
///
/// assert_eq!(lerp(40.0, 44.0, 0.5), 42.0);
/// assert_eq!(lerp(60.0, 90.0, 0.0), 60.0);
/// ```
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Map a unit draw into `[min, max]`.
///
/// The result is clamped to both ends so rounding in `lerp` can never step
/// outside the window.
pub fn lerp_within(min: f64, max: f64, ratio: f64) -> f64 {
    lerp(min, max, ratio).min(max).max(min)
}

/// Normalization divisor for a caller-supplied range: the largest magnitude of its ends.
///
/// # Examples
/// ```
/// use ftracks_paths::math_utils::scale_factor;
///
/// assert_eq!(scale_factor((0.0, 100.0)), 100.0);
/// assert_eq!(scale_factor((-273.15, 20.0)), 273.15);
/// ```
pub fn scale_factor(range: (f64, f64)) -> f64 {
    range.0.abs().max(range.1.abs())
}
