use crate::estimation::method::Method;
use crate::interpolation::estimation_trait::CanEstimate1D;
use crate::prelude::*;
use crate::samples::sample_set::SampleSet;

/// Ordinary least squares needs two points to pin down a line
pub const MIN_SAMPLES: usize = 2;

/// Degree-1 least squares fit y = slope * x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegressor {
    slope: f64,
    intercept: f64,
}

impl LinearRegressor {
    /// Closed form OLS over centred sums:
    /// slope = Sxy / Sxx, intercept = mean(y) - slope * mean(x)
    ///
    /// Deviations from the mean are divided by their largest magnitude before squaring,
    /// so abscissas near the ends of the f64 range neither underflow nor overflow.
    pub fn fit(samples: &SampleSet) -> Result<Self, EstimationError> {
        let n = samples.len();
        if n < MIN_SAMPLES {
            return Err(EstimationError::InsufficientData {
                method: Method::LinearRegression.into(),
                required: MIN_SAMPLES,
                actual: n,
            });
        }
        let x = samples.x_values();
        let y = samples.y_values();
        let x_mean = x.iter().map(|&xi| xi / n as f64).sum::<f64>();
        let y_mean = y.iter().map(|&yi| yi / n as f64).sum::<f64>();

        let scale = x.iter().fold(0.0_f64, |s, &xi| s.max((xi - x_mean).abs()));
        if scale == 0.0 {
            return Err(EstimationError::DegenerateInput(
                "x values have zero variance, the normal equations are singular",
            ));
        }

        // Sums over u = (x - mean) / scale, so |u| <= 1
        let (suu, suy) = x
            .iter()
            .zip(y.iter())
            .fold((0.0, 0.0), |(suu, suy), (&xi, &yi)| {
                let u = (xi - x_mean) / scale;
                (suu + u * u, suy + u * (yi - y_mean))
            });

        let slope = suy / (suu * scale);
        let intercept = y_mean - slope * x_mean;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(EstimationError::DegenerateInput(
                "least squares line is not representable in f64",
            ));
        }
        tracing::debug!(samples = n, slope, intercept, "fitted least squares line");
        Ok(LinearRegressor { slope, intercept })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl CanEstimate1D for LinearRegressor {
    fn method(&self) -> Method {
        Method::LinearRegression
    }

    fn estimate_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
