//! Error-bounded piecewise-linear curve simplification.
//!
//! Given a densely sampled curve, selects a sparse subset of its points such
//! that linear interpolation through the kept points deviates from the
//! original y by at most `max_error` at every original x. The scan is a
//! greedy forward pass, not an exact minimizer: it yields a small point set,
//! not a provably minimal one. Worst case is O(n²) since each candidate
//! extension re-evaluates the open segment; fine for curves up to a few
//! thousand points, a known scaling limit beyond that.

use crate::errors::CurveError;

/// An ordered sampled curve. `x` strictly increasing, `y` arbitrary.
#[derive(Debug, Clone)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, CurveError> {
        if x.len() != y.len() {
            return Err(CurveError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if let Some(index) = (1..x.len()).find(|&i| x[i] <= x[i - 1]) {
            return Err(CurveError::NonIncreasingX { index });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Indices into the original curve whose piecewise-linear reconstruction
/// stays within the requested error bound. Always contains the first and
/// last original index (when the curve has any points).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampledCurve {
    pub indices: Vec<usize>,
}

impl ResampledCurve {
    /// Materializes the kept `(x, y)` pairs from the source curve.
    pub fn points(&self, curve: &Curve) -> (Vec<f64>, Vec<f64>) {
        let xs = self.indices.iter().map(|&i| curve.x[i]).collect();
        let ys = self.indices.iter().map(|&i| curve.y[i]).collect();
        (xs, ys)
    }
}

/// Maximum absolute deviation between the original curve and the
/// piecewise-linear reconstruction through `(x_res, y_res)`.
///
/// For each consecutive resampled pair, every original point whose x lies in
/// the closed segment interval is compared against the segment's linear
/// interpolation at that x; the largest deviation across all segments is
/// returned.
pub fn max_interpolation_error(x: &[f64], y: &[f64], x_res: &[f64], y_res: &[f64]) -> f64 {
    let mut error: f64 = 0.0;
    for seg in 0..x_res.len().saturating_sub(1) {
        let (x0, x1) = (x_res[seg], x_res[seg + 1]);
        let (y0, y1) = (y_res[seg], y_res[seg + 1]);
        for k in 0..x.len() {
            if x[k] < x0 || x[k] > x1 {
                continue;
            }
            let interp = lerp(x[k], x0, y0, x1, y1);
            let deviation = (y[k] - interp).abs();
            if deviation > error {
                error = deviation;
            }
        }
    }
    error
}

// Exact at both endpoints so that a segment between two kept sample points
// never reports a spurious rounding deviation against those samples. A
// zero-width segment cannot arise from a strictly increasing curve, but the
// error function is public; fall back to the left endpoint then.
fn lerp(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    if x == x0 {
        return y0;
    }
    if x == x1 {
        return y1;
    }
    let dx = x1 - x0;
    if dx == 0.0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / dx
}

/// Greedy error-bounded resampling.
///
/// Starting from index 0, the candidate endpoint advances until the segment
/// error first EXCEEDS `max_error`; the previous candidate then becomes the
/// next anchor. The last index is always appended. With `max_error = 0`
/// every point where any deviation exists is kept, so the result converges
/// to the full curve unless it is already piecewise-linear.
///
/// Curves with fewer than two points are returned unchanged (trivially
/// within any bound).
pub fn resample_max_error(curve: &Curve, max_error: f64) -> Result<ResampledCurve, CurveError> {
    if max_error < 0.0 {
        return Err(CurveError::NegativeMaxError { value: max_error });
    }
    let n = curve.len();
    if n < 2 {
        return Ok(ResampledCurve {
            indices: (0..n).collect(),
        });
    }

    let mut indices = vec![0usize];
    let mut anchor = 0usize;
    while anchor < n - 1 {
        let mut candidate = anchor + 1;
        let mut split = None;
        while candidate < n {
            let error = max_interpolation_error(
                &curve.x,
                &curve.y,
                &[curve.x[anchor], curve.x[candidate]],
                &[curve.y[anchor], curve.y[candidate]],
            );
            if error > max_error {
                // The previous candidate is the last endpoint still within
                // bounds; restart the scan from it.
                split = Some(candidate - 1);
                break;
            }
            candidate += 1;
        }
        match split {
            Some(at) => {
                indices.push(at);
                anchor = at;
            }
            None => break,
        }
    }
    if *indices.last().unwrap_or(&0) != n - 1 {
        indices.push(n - 1);
    }
    Ok(ResampledCurve { indices })
}
