//! A static index ([`interval_index::IntervalIndex`]) answering *stabbing queries* over
//! half-open intervals `[start, end)`: given a point `p`, which intervals contain it?
//!
//! The index is built once by an offline sweep over the interval endpoints, in
//! `O(n log n)`. The sweep compacts the intervals into a sorted table of breakpoints,
//! each mapped to the exact set of intervals active from that breakpoint up to the next.
//! Queries are then a binary search over that table, in `O(log n)`, and return a slice
//! borrowed from the index.
//!
//! Any ordered numeric type implementing [`endpoint::Endpoint`] can bound the intervals.
//! Floating-point domains use their infinities as sentinels below and above every interval;
//! integral domains use their minimum and maximum values.
//!
//! The [`oracle`] module carries a brute-force reference to check results against.

/// The ordered domain of interval endpoints.
pub mod endpoint;
/// Errors raised while building an index.
pub mod error;
/// The stabbing-query index itself.
pub mod interval_index;
pub mod oracle;
mod sweep;

pub use endpoint::Endpoint;
pub use error::BuildError;
pub use interval_index::IntervalIndex;
