use std::collections::BTreeMap;

use crate::estimation::method::Method;
use crate::estimation::orchestrator::EstimationResult;
use crate::prelude::*;
use crate::samples::sample_set::SampleSet;

/// |estimate - reference| for every method and query.
///
/// Each query x must appear exactly in `reference`, otherwise `MissingReference(x)`.
pub fn absolute_errors(
    result: &EstimationResult,
    reference: &SampleSet,
) -> Result<BTreeMap<Method, R1D>, EstimationError> {
    let truth = result
        .queries()
        .iter()
        .map(|&x| reference.y_at(x).ok_or(EstimationError::MissingReference(x)))
        .collect::<Result<R1D, _>>()?;
    Ok(result
        .iter()
        .map(|(method, y)| (method, (&y - &truth).mapv(f64::abs)))
        .collect())
}

/// Mean absolute error per method, NaN-free as long as there is at least one query
pub fn mean_absolute_errors(
    result: &EstimationResult,
    reference: &SampleSet,
) -> Result<BTreeMap<Method, f64>, EstimationError> {
    Ok(absolute_errors(result, reference)?
        .into_iter()
        .filter_map(|(method, errors)| errors.mean().map(|mae| (method, mae)))
        .collect())
}
