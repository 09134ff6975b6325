use crate::estimation::method::Method;
use crate::interpolation::estimation_trait::CanEstimate1D;
use crate::prelude::*;
use crate::samples::sample_set::SampleSet;

/// Above this many samples a single global polynomial tends to oscillate between knots
pub const HIGH_DEGREE_WARNING: usize = 12;

/// This struct implements polynomial interpolation for y = f(x)
/// This uses Newtons divided differences for efficient computation
#[derive(Debug, Clone)]
pub struct NewtonInterpolator<'a> {
    x_values: VR1D<'a>,
    coefficients: R1D,
}

/// Compute Newton divided differences coefficients.
///
/// # Arguments
/// * `x_values` - View of x-coordinates, pairwise distinct
/// * `y_values` - View of y-coordinates
///
/// # Returns
/// Coefficients `a` such that
/// P(x) = a[0] + a[1](x - x0) + a[2](x - x0)(x - x1) + ...
///
/// The inputs are left untouched, a fresh coefficient array is returned.
pub fn divided_differences(x_values: VR1D, y_values: VR1D) -> R1D {
    let n = x_values.len();
    let mut coefficients = y_values.to_owned();
    for j in 1..n {
        // Walk down so that coefficients[i - 1] still holds the previous order
        for i in (j..n).rev() {
            coefficients[i] =
                (coefficients[i] - coefficients[i - 1]) / (x_values[i] - x_values[i - j]);
        }
    }
    coefficients
}

impl<'a> NewtonInterpolator<'a> {
    /// Fit the divided difference table over a validated sample set
    pub fn fit(samples: &'a SampleSet) -> Result<Self, EstimationError> {
        let n = samples.len();
        if n >= HIGH_DEGREE_WARNING {
            tracing::warn!(
                samples = n,
                "Newton polynomial of degree {} may oscillate between samples",
                n - 1
            );
        }
        let coefficients = divided_differences(samples.x_values(), samples.y_values());
        tracing::debug!(samples = n, "fitted Newton divided differences");
        Ok(NewtonInterpolator {
            x_values: samples.x_values(),
            coefficients,
        })
    }

    pub fn coefficients(&self) -> VR1D<'_> {
        self.coefficients.view()
    }
}

impl CanEstimate1D for NewtonInterpolator<'_> {
    fn method(&self) -> Method {
        Method::Newton
    }

    /// Evaluate the Newton interpolating polynomial at a given x.
    ///
    /// Uses Horner's method for efficiency.
    fn estimate_at(&self, x: f64) -> f64 {
        let last_index = self.coefficients.len() - 1;
        let mut result = self.coefficients[last_index];
        for i in (0..last_index).rev() {
            result = result * (x - self.x_values[i]) + self.coefficients[i];
        }
        result
    }
}
