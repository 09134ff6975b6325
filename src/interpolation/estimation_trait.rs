use crate::estimation::method::Method;
use crate::prelude::*;

/// The contract shared by every fitted estimator.
/// Fitting happens in each estimator's constructor, so an instance is always ready to evaluate.
pub trait CanEstimate1D {
    /// Which of the estimation methods this is
    fn method(&self) -> Method;

    /// Estimate y at a single x
    fn estimate_at(&self, x: f64) -> f64;

    /// Estimate y at every query, in query order
    fn estimate(&self, queries: VR1D) -> R1D {
        queries.mapv(|x| self.estimate_at(x))
    }
}

/// Given an ascending table `x_values` and a value x, return j such that x lies in
/// [x_values[j], x_values[j+1]). Values outside the table clamp to the first or last interval,
/// so the result is never greater than n-2. The table must hold at least 2 values.
pub fn locate(x_values: VR1D, x: f64) -> usize {
    let mut ju = x_values.len() - 1;
    let mut jl = 0;
    // Converge in on the bracket by bisection
    while ju - jl > 1 {
        let jm = (ju + jl) >> 1;
        if x >= x_values[jm] {
            jl = jm;
        } else {
            ju = jm;
        }
    }
    jl
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_locate() {
        let x = R1D::from_vec(vec![0.0, 1.0, 2.0, 4.0, 8.0]);
        assert_eq!(locate(x.view(), 0.0), 0);
        assert_eq!(locate(x.view(), 0.5), 0);
        assert_eq!(locate(x.view(), 1.0), 1);
        assert_eq!(locate(x.view(), 3.9), 2);
        assert_eq!(locate(x.view(), 4.0), 3);
        // The last knot belongs to the last interval
        assert_eq!(locate(x.view(), 8.0), 3);
        // Clamped outside the table
        assert_eq!(locate(x.view(), -3.0), 0);
        assert_eq!(locate(x.view(), 100.0), 3);
    }

    #[test]
    fn test_locate_two_knots() {
        let x = R1D::from_vec(vec![-1.0, 1.0]);
        assert_eq!(locate(x.view(), -5.0), 0);
        assert_eq!(locate(x.view(), 0.0), 0);
        assert_eq!(locate(x.view(), 5.0), 0);
    }
}
