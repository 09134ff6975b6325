use crate::estimation::method::Method;
use crate::interpolation::estimation_trait::CanEstimate1D;
use crate::prelude::*;
use crate::samples::sample_set::SampleSet;

/// Evaluates the Lagrange form of the interpolating polynomial directly.
/// There is no fitting step, the interpolator only borrows the samples.
/// Each evaluation costs O(n^2).
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<'a> {
    x_values: VR1D<'a>,
    y_values: VR1D<'a>,
}

impl<'a> LagrangeInterpolator<'a> {
    pub fn new(samples: &'a SampleSet) -> Self {
        tracing::debug!(samples = samples.len(), "prepared Lagrange basis");
        LagrangeInterpolator {
            x_values: samples.x_values(),
            y_values: samples.y_values(),
        }
    }
}

impl CanEstimate1D for LagrangeInterpolator<'_> {
    fn method(&self) -> Method {
        Method::Lagrange
    }

    fn estimate_at(&self, x: f64) -> f64 {
        let n = self.x_values.len();
        let mut total = 0.0;
        for i in 0..n {
            let mut term = self.y_values[i];
            for j in 0..n {
                if i != j {
                    term *= (x - self.x_values[j]) / (self.x_values[i] - self.x_values[j]);
                }
            }
            total += term;
        }
        total
    }
}
