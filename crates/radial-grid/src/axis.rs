//! Numeric helpers for building grid axes.
//!
//! Rounding is half-to-even at a given number of decimals and `arange`
//! produces `ceil((stop - start) / step)` evenly spaced values, so axes come
//! out identical to the ones the instruments' own tooling writes.

/// Round to `digits` decimals, ties to even.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round_ties_even() / scale
}

/// Integer lookup key for a value rounded to `digits` decimals.
pub fn key(value: f64, digits: u32) -> i64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round_ties_even() as i64
}

/// Sorted distinct values, NaN excluded.
pub fn unique_sorted(values: &[f64]) -> Vec<f64> {
    let mut unique: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    unique.sort_by(f64::total_cmp);
    unique.dedup();
    unique
}

/// Sorted distinct values after rounding to `digits` decimals.
pub fn unique_rounded(values: &[f64], digits: u32) -> Vec<f64> {
    let rounded: Vec<f64> = values.iter().map(|&v| round_to(v, digits)).collect();
    unique_sorted(&rounded)
}

/// Gaps between consecutive values of a sorted axis.
pub fn gaps(sorted: &[f64]) -> impl Iterator<Item = f64> + '_ {
    sorted.windows(2).map(|w| w[1] - w[0])
}

/// Smallest gap of a sorted axis, `None` with fewer than two values.
pub fn min_gap(sorted: &[f64]) -> Option<f64> {
    gaps(sorted).min_by(f64::total_cmp)
}

/// Evenly spaced values in `[start, stop)` (or `(stop, start]` for a
/// negative step).
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step == 0.0 || !step.is_finite() || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let count = arange_len(start, stop, step);
    if count == 0.0 {
        return Vec::new();
    }
    (0..count as usize).map(|k| start + k as f64 * step).collect()
}

/// Longest axis a re-indexer will generate.
pub const MAX_AXIS_LEN: usize = 100_000;

/// Absolute slack on `gap / resolution` accepted as an integer multiple.
const MULTIPLE_TOLERANCE: f64 = 1e-9;

/// Whether `gap` is an integer multiple of `resolution`.
pub fn is_multiple(gap: f64, resolution: f64) -> bool {
    if resolution == 0.0 || !resolution.is_finite() {
        return false;
    }
    let ratio = gap / resolution;
    (ratio - ratio.round()).abs() <= MULTIPLE_TOLERANCE
}

/// Whether `gap` equals a whole number of `resolution` steps once both are
/// rounded to `digits` decimals.
pub fn is_multiple_at(gap: f64, resolution: f64, digits: u32) -> bool {
    if resolution == 0.0 || !resolution.is_finite() {
        return false;
    }
    let steps = (gap / resolution).round();
    key(gap, digits) == key(steps * resolution, digits)
}

/// Number of values `arange(start, stop, step)` would produce.
pub fn arange_len(start: f64, stop: f64, step: f64) -> f64 {
    ((stop - start) / step).ceil().max(0.0)
}

/// numpy-style `isclose`.
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}
