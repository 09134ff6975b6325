use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::interpolation::cubic_spline_interpolator::{self, CubicSplineInterpolator, SplineBoundary};
use crate::interpolation::estimation_trait::CanEstimate1D;
use crate::interpolation::lagrange_interpolator::LagrangeInterpolator;
use crate::interpolation::newton_interpolator::NewtonInterpolator;
use crate::prelude::*;
use crate::regression::linear_regressor::{self, LinearRegressor};
use crate::samples::sample_set::SampleSet;

/// The closed set of estimation methods. Declaration order is the fan-out order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Method {
    Newton,
    Lagrange,
    Spline,
    LinearRegression,
}

impl Method {
    /// All methods in canonical order
    pub fn all() -> Vec<Method> {
        Method::iter().collect()
    }

    /// Fewest samples the method accepts
    pub fn min_samples(self) -> usize {
        match self {
            Method::Newton | Method::Lagrange => 1,
            Method::Spline => cubic_spline_interpolator::MIN_KNOTS,
            Method::LinearRegression => linear_regressor::MIN_SAMPLES,
        }
    }

    /// Fit this method over the samples.
    /// The spline boundary is only consulted by `Method::Spline`.
    pub fn fit<'a>(
        self,
        samples: &'a SampleSet,
        boundary: SplineBoundary,
    ) -> Result<FittedEstimator<'a>, EstimationError> {
        Ok(match self {
            Method::Newton => FittedEstimator::Newton(NewtonInterpolator::fit(samples)?),
            Method::Lagrange => FittedEstimator::Lagrange(LagrangeInterpolator::new(samples)),
            Method::Spline => {
                FittedEstimator::Spline(CubicSplineInterpolator::fit(samples, boundary)?)
            }
            Method::LinearRegression => {
                FittedEstimator::LinearRegression(LinearRegressor::fit(samples)?)
            }
        })
    }
}

/// A fitted estimator of any method, dispatching the shared contract
#[derive(Debug, Clone)]
pub enum FittedEstimator<'a> {
    Newton(NewtonInterpolator<'a>),
    Lagrange(LagrangeInterpolator<'a>),
    Spline(CubicSplineInterpolator),
    LinearRegression(LinearRegressor),
}

impl CanEstimate1D for FittedEstimator<'_> {
    fn method(&self) -> Method {
        match self {
            FittedEstimator::Newton(e) => e.method(),
            FittedEstimator::Lagrange(e) => e.method(),
            FittedEstimator::Spline(e) => e.method(),
            FittedEstimator::LinearRegression(e) => e.method(),
        }
    }

    fn estimate_at(&self, x: f64) -> f64 {
        match self {
            FittedEstimator::Newton(e) => e.estimate_at(x),
            FittedEstimator::Lagrange(e) => e.estimate_at(x),
            FittedEstimator::Spline(e) => e.estimate_at(x),
            FittedEstimator::LinearRegression(e) => e.estimate_at(x),
        }
    }
}
