//! Evaluation grids
//!
//! Densities are drawn by evaluating at "nice" round positions: ticks spaced
//! by 1, 2 or 5 times a power of ten, chosen so roughly `count` of them cover
//! the interval.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Largest grid [`nice_ticks`] will allocate
pub const MAX_TICKS: usize = 1_000_000;

/// Tick indices beyond this are not exactly representable as `f64`
const MAX_INDEX: f64 = 9.0e15;

/// Integer tick range and increment. A negative increment means ticks are `i / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    if !power.is_finite() {
        return None;
    }
    let power = power as i32;
    let error = step / 10f64.powi(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0 {
        let scale = 10f64.powi(-power) / factor;
        if (start * scale).abs().max((stop * scale).abs()) > MAX_INDEX {
            return None;
        }
        i1 = (start * scale).round() as i64;
        i2 = (stop * scale).round() as i64;
        if (i1 as f64) / scale < start {
            i1 += 1;
        }
        if (i2 as f64) / scale > stop {
            i2 -= 1;
        }
        inc = -scale;
    } else {
        let scale = 10f64.powi(power) * factor;
        if (start / scale).abs().max((stop / scale).abs()) > MAX_INDEX {
            return None;
        }
        i1 = (start / scale).round() as i64;
        i2 = (stop / scale).round() as i64;
        if (i1 as f64) * scale < start {
            i1 += 1;
        }
        if (i2 as f64) * scale > stop {
            i2 -= 1;
        }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Round tick values covering `[lo, hi]`, about `count` of them
///
/// Ticks are exact multiples of the step (computed as `i / k` for fractional
/// steps so that `0.1` is `1 / 10`, not `1 * 0.1`). Returns an empty vector
/// for non-finite bounds, a zero count or a grid of more than [`MAX_TICKS`]
/// positions, and `[lo]` when `lo == hi`. A reversed interval yields
/// descending ticks.
///
/// ```rust
/// use density_kde::nice_ticks;
///
/// assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
/// assert_eq!(nice_ticks(-3.0, 6.0, 600).len(), 451);
/// ```
pub fn nice_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }

    let reverse = hi < lo;
    let (start, stop) = if reverse { (hi, lo) } else { (lo, hi) };
    let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 || i128::from(i2) - i128::from(i1) >= MAX_TICKS as i128 {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Step between consecutive [`nice_ticks`], if there are at least two
pub fn tick_step(lo: f64, hi: f64, count: usize) -> Option<f64> {
    let ticks = nice_ticks(lo, hi, count);
    match ticks.as_slice() {
        [a, b, ..] => Some((b - a).abs()),
        _ => None,
    }
}
