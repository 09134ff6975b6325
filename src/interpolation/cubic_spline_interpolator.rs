use ndarray::s;
use serde::{Deserialize, Serialize};

use crate::estimation::method::Method;
use crate::interpolation::estimation_trait::{locate, CanEstimate1D};
use crate::prelude::*;
use crate::samples::sample_set::SampleSet;

/// A spline needs at least a chord
pub const MIN_KNOTS: usize = 2;

/// End conditions applied at the first and last knot.
///
/// - `NotAKnot`: the third derivative is continuous across the first and last interior knots,
///   so the two end intervals share one cubic with their neighbour. With 3 knots this collapses
///   to the parabola through the knots, with 2 knots to the chord.
/// - `Natural`: zero second derivative at both ends. With 2 knots this is the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineBoundary {
    #[default]
    NotAKnot,
    Natural,
}

/// One cubic piece: S_i(x) = a + b*(x - x_i) + c*(x - x_i)^2 + d*(x - x_i)^3
#[derive(Debug, Clone, Copy, PartialEq)]
struct SplineSegment {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

/// This struct implements a C2 cubic spline interpolation for y = f(x).
/// The knots are the sample abscissas sorted in increasing order.
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator {
    knots: R1D,
    segments: Vec<SplineSegment>,
    boundary: SplineBoundary,
}

impl CubicSplineInterpolator {
    /// Sort the samples by x and build one cubic per interval between consecutive knots.
    pub fn fit(samples: &SampleSet, boundary: SplineBoundary) -> Result<Self, EstimationError> {
        let n = samples.len();
        if n < MIN_KNOTS {
            return Err(EstimationError::InsufficientData {
                method: Method::Spline.into(),
                required: MIN_KNOTS,
                actual: n,
            });
        }
        let sorted = samples.sorted_by_x();
        let x = sorted.x_values();
        let y = sorted.y_values();

        // Interval widths and secant slopes
        let h = R1D::from_iter(x.iter().zip(x.iter().skip(1)).map(|(&x0, &x1)| x1 - x0));
        let delta = R1D::from_iter((0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]));

        let m = second_derivatives(&h, &delta, boundary);
        let segments = (0..n - 1)
            .map(|i| SplineSegment {
                a: y[i],
                b: delta[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0,
                c: m[i] / 2.0,
                d: (m[i + 1] - m[i]) / (6.0 * h[i]),
            })
            .collect();

        tracing::debug!(knots = n, ?boundary, "fitted cubic spline");
        Ok(CubicSplineInterpolator {
            knots: x.to_owned(),
            segments,
            boundary,
        })
    }

    pub fn knots(&self) -> VR1D<'_> {
        self.knots.view()
    }

    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }
}

/// Second derivatives M_i of the spline at every knot.
///
/// Interior knots satisfy
/// h[i-1]*M[i-1] + 2*(h[i-1] + h[i])*M[i] + h[i]*M[i+1] = 6*(delta[i] - delta[i-1]).
/// For not-a-knot, M[0] and M[n-1] are eliminated from the first and last rows,
/// which keeps the system tridiagonal.
fn second_derivatives(h: &R1D, delta: &R1D, boundary: SplineBoundary) -> R1D {
    let n = h.len() + 1;
    let mut m = R1D::zeros(n);
    if n == 2 {
        return m;
    }
    if n == 3 && boundary == SplineBoundary::NotAKnot {
        // A single parabola, constant curvature
        m.fill(2.0 * (delta[1] - delta[0]) / (h[0] + h[1]));
        return m;
    }

    let k = n - 2;
    let mut sub = R1D::zeros(k);
    let mut diag = R1D::zeros(k);
    let mut sup = R1D::zeros(k);
    let mut rhs = R1D::zeros(k);
    for r in 0..k {
        let i = r + 1;
        sub[r] = h[i - 1];
        diag[r] = 2.0 * (h[i - 1] + h[i]);
        sup[r] = h[i];
        rhs[r] = 6.0 * (delta[i] - delta[i - 1]);
    }

    let (h0, h1) = (h[0], h[1]);
    let (ha, hb) = (h[n - 3], h[n - 2]);
    if boundary == SplineBoundary::NotAKnot {
        // M[0] = ((h0 + h1)*M[1] - h0*M[2]) / h1
        diag[0] = (h0 + h1) * (h0 + 2.0 * h1) / h1;
        sup[0] = (h1 - h0) * (h1 + h0) / h1;
        // M[n-1] = ((ha + hb)*M[n-2] - hb*M[n-3]) / ha
        sub[k - 1] = (ha - hb) * (ha + hb) / ha;
        diag[k - 1] = (ha + hb) * (2.0 * ha + hb) / ha;
    }

    let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs);
    m.slice_mut(s![1..n - 1]).assign(&interior);

    if boundary == SplineBoundary::NotAKnot {
        m[0] = ((h0 + h1) * m[1] - h0 * m[2]) / h1;
        m[n - 1] = ((ha + hb) * m[n - 2] - hb * m[n - 3]) / ha;
    }
    m
}

/// Thomas algorithm. Row r reads sub[r]*u[r-1] + diag[r]*u[r] + sup[r]*u[r+1] = rhs[r],
/// sub[0] and sup[k-1] are ignored. The systems built above are diagonally dominant.
fn solve_tridiagonal(sub: &R1D, diag: &R1D, sup: &R1D, rhs: &R1D) -> R1D {
    let k = diag.len();
    let mut mu = R1D::zeros(k);
    let mut z = R1D::zeros(k);

    mu[0] = sup[0] / diag[0];
    z[0] = rhs[0] / diag[0];
    for r in 1..k {
        let l = diag[r] - sub[r] * mu[r - 1];
        mu[r] = sup[r] / l;
        z[r] = (rhs[r] - sub[r] * z[r - 1]) / l;
    }

    let mut u = R1D::zeros(k);
    u[k - 1] = z[k - 1];
    for r in (0..k - 1).rev() {
        u[r] = z[r] - mu[r] * u[r + 1];
    }
    u
}

impl CanEstimate1D for CubicSplineInterpolator {
    fn method(&self) -> Method {
        Method::Spline
    }

    /// Outside the knots the end cubics are extended
    fn estimate_at(&self, x: f64) -> f64 {
        let jlo = locate(self.knots.view(), x);
        let seg = &self.segments[jlo];
        let dx = x - self.knots[jlo];
        seg.a + dx * (seg.b + dx * (seg.c + dx * seg.d))
    }
}
