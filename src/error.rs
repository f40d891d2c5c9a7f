use thiserror::Error;

/// Reasons an [`IntervalIndex`](crate::interval_index::IntervalIndex) refuses to build.
///
/// The index is left empty whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Start and end slices differ in length: {starts} starts, {ends} ends")]
    LengthMismatch { starts: usize, ends: usize },
    #[error("Interval {index} has an endpoint outside the total order (NaN)")]
    UnorderedEndpoint { index: usize },
}
