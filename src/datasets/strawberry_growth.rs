//! Height of a strawberry plant (cm) against elapsed days.
//! The known samples leave out days 9 and 15, which are the default queries,
//! and the full daily record serves as ground truth for comparing methods.

use crate::prelude::*;
use crate::samples::sample_set::{QuerySet, SampleSet};

pub const KNOWN_DAYS: [f64; 10] = [1.0, 3.0, 6.0, 12.0, 13.0, 14.0, 16.0, 18.0, 20.0, 24.0];
pub const KNOWN_HEIGHTS: [f64; 10] = [0.5, 1.2, 3.0, 7.5, 8.2, 8.8, 9.7, 10.6, 11.3, 12.2];
pub const DEFAULT_QUERY_DAYS: [f64; 2] = [9.0, 15.0];

/// Every day from 1 to 24
pub const DAILY_RECORD: [(f64, f64); 24] = [
    (1.0, 0.5),
    (2.0, 0.8),
    (3.0, 1.2),
    (4.0, 1.7),
    (5.0, 2.3),
    (6.0, 3.0),
    (7.0, 3.8),
    (8.0, 4.5),
    (9.0, 5.3),
    (10.0, 6.0),
    (11.0, 6.8),
    (12.0, 7.5),
    (13.0, 8.2),
    (14.0, 8.8),
    (15.0, 9.3),
    (16.0, 9.7),
    (17.0, 10.2),
    (18.0, 10.6),
    (19.0, 11.0),
    (20.0, 11.3),
    (21.0, 11.6),
    (22.0, 11.8),
    (23.0, 12.0),
    (24.0, 12.2),
];

pub fn known_samples() -> Result<SampleSet, EstimationError> {
    SampleSet::new(KNOWN_DAYS.to_vec(), KNOWN_HEIGHTS.to_vec())
}

pub fn default_queries() -> Result<QuerySet, EstimationError> {
    QuerySet::new(DEFAULT_QUERY_DAYS.to_vec())
}

pub fn daily_record() -> Result<SampleSet, EstimationError> {
    SampleSet::from_pairs(&DAILY_RECORD)
}
