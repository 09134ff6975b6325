use crate::prelude::*;

/// An ordered set of known (x, y) samples with pairwise distinct abscissas.
///
/// The set can only be built through [`SampleSet::new`], so holding one means:
/// - x and y have the same length, and it is at least 1
/// - every value is finite
/// - no two samples share an x value
///
/// The x values keep the caller's order. Methods that need them sorted
/// (the cubic spline) ask for [`SampleSet::sorted_by_x`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x_values: R1D,
    y_values: R1D,
}

impl SampleSet {
    /// Validate and build a sample set from parallel x and y vectors.
    pub fn new(x_values: Vec<f64>, y_values: Vec<f64>) -> Result<Self, EstimationError> {
        if x_values.len() != y_values.len() {
            return Err(EstimationError::CountMismatch {
                x_count: x_values.len(),
                y_count: y_values.len(),
            });
        }
        if x_values.is_empty() {
            return Err(EstimationError::InsufficientData {
                method: "SampleSet",
                required: 1,
                actual: 0,
            });
        }
        check_finite(&x_values)?;
        check_finite(&y_values)?;

        // Sort a copy and compare neighbours, O(n log n)
        let mut sorted = x_values.clone();
        sorted.sort_by(f64::total_cmp);
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(EstimationError::DuplicateAbscissa(pair[0]));
        }

        Ok(SampleSet {
            x_values: R1D::from_vec(x_values),
            y_values: R1D::from_vec(y_values),
        })
    }

    /// Build from (x, y) pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, EstimationError> {
        let (x, y) = pairs.iter().copied().unzip();
        Self::new(x, y)
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Always false for a validated set, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    pub fn x_values(&self) -> VR1D<'_> {
        self.x_values.view()
    }

    pub fn y_values(&self) -> VR1D<'_> {
        self.y_values.view()
    }

    /// The smallest and largest abscissa.
    pub fn x_range(&self) -> (f64, f64) {
        self.x_values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    }

    /// The y value recorded at exactly `x`, if any.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        self.x_values
            .iter()
            .position(|&xi| xi == x)
            .map(|i| self.y_values[i])
    }

    /// A copy of the set ordered by strictly increasing x.
    pub fn sorted_by_x(&self) -> SampleSet {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.x_values[a].total_cmp(&self.x_values[b]));
        SampleSet {
            x_values: order.iter().map(|&i| self.x_values[i]).collect(),
            y_values: order.iter().map(|&i| self.y_values[i]).collect(),
        }
    }
}

/// The points at which estimates are requested. Order is significant,
/// results come back aligned to it. An empty set is allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySet {
    x_values: R1D,
}

impl QuerySet {
    pub fn new(x_values: Vec<f64>) -> Result<Self, EstimationError> {
        check_finite(&x_values)?;
        Ok(QuerySet {
            x_values: R1D::from_vec(x_values),
        })
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    pub fn x_values(&self) -> VR1D<'_> {
        self.x_values.view()
    }
}

fn check_finite(values: &[f64]) -> Result<(), EstimationError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(bad) => Err(EstimationError::ParseFailure(bad.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_sample_set() -> Result<(), EstimationError> {
        let samples = SampleSet::new(vec![3.0, 1.0, 2.0], vec![9.0, 1.0, 4.0])?;
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.x_range(), (1.0, 3.0));
        assert_eq!(samples.y_at(2.0), Some(4.0));
        assert_eq!(samples.y_at(2.5), None);
        // Caller order is kept
        assert_eq!(samples.x_values().to_vec(), vec![3.0, 1.0, 2.0]);
        Ok(())
    }

    #[test]
    fn test_sorted_view() -> Result<(), EstimationError> {
        let samples = SampleSet::from_pairs(&[(3.0, 9.0), (1.0, 1.0), (2.0, 4.0)])?;
        let sorted = samples.sorted_by_x();
        assert_eq!(sorted.x_values().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(sorted.y_values().to_vec(), vec![1.0, 4.0, 9.0]);
        Ok(())
    }

    #[test]
    fn test_count_mismatch() {
        let result = SampleSet::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]);
        assert_eq!(
            result,
            Err(EstimationError::CountMismatch {
                x_count: 3,
                y_count: 2
            })
        );
    }

    #[test]
    fn test_duplicate_abscissa() {
        let result = SampleSet::new(vec![1.0, 1.0], vec![1.0, 2.0]);
        assert_eq!(result, Err(EstimationError::DuplicateAbscissa(1.0)));
        let result = SampleSet::new(vec![4.0, 2.0, 7.0, 2.0], vec![0.0; 4]);
        assert_eq!(result, Err(EstimationError::DuplicateAbscissa(2.0)));
    }

    #[test]
    fn test_empty_and_non_finite() {
        assert!(matches!(
            SampleSet::new(vec![], vec![]),
            Err(EstimationError::InsufficientData { required: 1, .. })
        ));
        assert!(matches!(
            SampleSet::new(vec![1.0, f64::NAN], vec![1.0, 2.0]),
            Err(EstimationError::ParseFailure(_))
        ));
        assert!(matches!(
            SampleSet::new(vec![1.0, 2.0], vec![f64::INFINITY, 2.0]),
            Err(EstimationError::ParseFailure(_))
        ));
        assert!(matches!(
            QuerySet::new(vec![0.5, f64::NEG_INFINITY]),
            Err(EstimationError::ParseFailure(_))
        ));
    }

    #[test]
    fn test_empty_query_set() -> Result<(), EstimationError> {
        let queries = QuerySet::new(vec![])?;
        assert!(queries.is_empty());
        Ok(())
    }
}
