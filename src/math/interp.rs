//! Search-and-interpolate over tables sorted on one scalar field.
//!
//! The spline's reparameterization table is queried on either of its two
//! fields (key or distance), so the utilities here are generic over the
//! element type and take accessor closures instead of hard-coding a field.

/// Maps `v` into `[0, 1]` relative to the range `[min, max]`, clamped.
///
/// A zero-width range maps values at or above `max` to 1 and everything
/// else to 0, which turns plateaus in a monotonic table into step edges
/// instead of NaN.
#[must_use]
pub fn normalize_clamped(min: f64, max: f64, v: f64) -> f64 {
    let width = max - min;
    if width == 0.0 {
        return if v >= max { 1.0 } else { 0.0 };
    }
    ((v - min) / width).clamp(0.0, 1.0)
}

/// Locates the pair of adjacent indices whose `field` values bracket
/// `target` in a table sorted ascending on that field.
///
/// Targets at or beyond either end clamp to `(0, 0)` or
/// `(len − 1, len − 1)`; an exact interior hit returns the matching index
/// twice. The table must be non-empty.
#[must_use]
pub fn find_bounds<T>(table: &[T], target: f64, field: impl Fn(&T) -> f64) -> (usize, usize) {
    let last = table.len() - 1;
    if target <= field(&table[0]) {
        return (0, 0);
    }
    if target >= field(&table[last]) {
        return (last, last);
    }

    let mut lo = 0;
    let mut hi = last;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let value = field(&table[mid]);
        if value == target {
            return (mid, mid);
        }
        if value < target {
            lo = mid + 1;
        } else {
            // mid > 0 here: target is strictly above the first entry.
            hi = mid - 1;
        }
    }

    (hi, lo)
}

/// Searches a monotonic table on the `search` field and linearly
/// interpolates the `output` field at `target`.
///
/// Returns `None` only for an empty table. Targets outside the table's
/// range clamp to the boundary samples.
pub fn sample_monotonic<T>(
    table: &[T],
    target: f64,
    search: impl Fn(&T) -> f64,
    output: impl Fn(&T) -> f64,
) -> Option<f64> {
    if table.is_empty() {
        return None;
    }

    let (lo, hi) = find_bounds(table, target, &search);
    let t = normalize_clamped(search(&table[lo]), search(&table[hi]), target);
    let v0 = output(&table[lo]);
    let v1 = output(&table[hi]);
    Some(v0 + (v1 - v0) * t)
}
