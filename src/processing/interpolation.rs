// src/processing/interpolation.rs
//! Numeric helpers for arc-length resampling

use crate::stroke::Point;

/// Cumulative Euclidean distance along the `(x, y)` path, starting at 0
pub fn cumulative_arc_length(points: &[&Point]) -> Vec<f64> {
    let mut cum = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance_to(point);
        }
        cum.push(total);
    }
    cum
}

/// `count` evenly spaced values over `[start, stop]`; the last value is
/// exactly `stop`
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Piecewise-linear interpolation of `fp` over the non-decreasing axis `xp`,
/// evaluated at each of `x`.
///
/// Values outside the axis clamp to the end values. When several samples share
/// one axis value the last of them is used at exactly that value.
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    debug_assert_eq!(xp.len(), fp.len());
    if xp.is_empty() {
        return vec![f64::NAN; x.len()];
    }

    let last = xp.len() - 1;
    x.iter()
        .map(|&t| {
            if t < xp[0] {
                fp[0]
            } else if t >= xp[last] {
                fp[last]
            } else {
                // xp[j] <= t < xp[j + 1]
                let j = xp.partition_point(|&v| v <= t) - 1;
                let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
                slope * (t - xp[j]) + fp[j]
            }
        })
        .collect()
}
