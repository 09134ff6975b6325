use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::EstimationConfig;
use crate::estimation::method::Method;
use crate::interpolation::estimation_trait::CanEstimate1D;
use crate::prelude::*;
use crate::samples::sample_set::{QuerySet, SampleSet};

/// Per-method estimates aligned to the queries they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    queries: R1D,
    estimates: BTreeMap<Method, R1D>,
}

impl EstimationResult {
    pub fn queries(&self) -> VR1D<'_> {
        self.queries.view()
    }

    /// Estimates of one method, one per query in query order
    pub fn get(&self, method: Method) -> Option<VR1D<'_>> {
        self.estimates.get(&method).map(|y| y.view())
    }

    /// (method, estimates) in canonical method order
    pub fn iter(&self) -> impl Iterator<Item = (Method, VR1D<'_>)> {
        self.estimates.iter().map(|(m, y)| (*m, y.view()))
    }
}

/// Per-method (x, y) polylines for plotting
pub type DenseCurves = BTreeMap<Method, Vec<(f64, f64)>>;

/// Validates inputs, fans them out to every method and gathers the results.
/// Holds configuration only, nothing carries over between calls.
#[derive(Debug, Clone, Default)]
pub struct EstimationOrchestrator {
    config: EstimationConfig,
}

impl EstimationOrchestrator {
    pub fn new(config: EstimationConfig) -> Self {
        EstimationOrchestrator { config }
    }

    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    /// Estimate y at every query with every method.
    ///
    /// Sample-count minimums of all methods are checked before any of them is fitted,
    /// so a failure reports exactly one error and computes nothing.
    pub fn estimate(
        &self,
        samples: &SampleSet,
        queries: &QuerySet,
    ) -> Result<EstimationResult, EstimationError> {
        tracing::info!(
            samples = samples.len(),
            queries = queries.len(),
            parallel = self.config.parallel,
            "estimating"
        );
        self.check_minimums(samples)?;
        let estimates = self.fan_out(samples, queries.x_values())?;
        Ok(EstimationResult {
            queries: queries.x_values().to_owned(),
            estimates,
        })
    }

    /// Sample every method uniformly across [min x, max x] at `resolution` points.
    pub fn dense_curve(
        &self,
        samples: &SampleSet,
        resolution: usize,
    ) -> Result<DenseCurves, EstimationError> {
        if resolution < 2 {
            return Err(EstimationError::InsufficientData {
                method: "dense_curve",
                required: 2,
                actual: resolution,
            });
        }
        self.check_minimums(samples)?;
        let (lo, hi) = samples.x_range();
        let grid = R1D::linspace(lo, hi, resolution);
        let estimates = self.fan_out(samples, grid.view())?;
        Ok(estimates
            .into_iter()
            .map(|(method, y)| {
                let points: Vec<(f64, f64)> = grid.iter().copied().zip(y.iter().copied()).collect();
                (method, points)
            })
            .collect())
    }

    /// `dense_curve` at the configured resolution
    pub fn dense_curve_default(&self, samples: &SampleSet) -> Result<DenseCurves, EstimationError> {
        self.dense_curve(samples, self.config.dense_resolution)
    }

    fn check_minimums(&self, samples: &SampleSet) -> Result<(), EstimationError> {
        match Method::all()
            .into_iter()
            .find(|m| samples.len() < m.min_samples())
        {
            Some(method) => Err(EstimationError::InsufficientData {
                method: method.into(),
                required: method.min_samples(),
                actual: samples.len(),
            }),
            None => Ok(()),
        }
    }

    fn fan_out(
        &self,
        samples: &SampleSet,
        x: VR1D,
    ) -> Result<BTreeMap<Method, R1D>, EstimationError> {
        let boundary = self.config.spline_boundary;
        let run = |method: Method| -> Result<(Method, R1D), EstimationError> {
            let fitted = method.fit(samples, boundary)?;
            Ok((method, fitted.estimate(x)))
        };
        if self.config.parallel {
            Method::all().into_par_iter().map(run).collect()
        } else {
            Method::all().into_iter().map(run).collect()
        }
    }
}
