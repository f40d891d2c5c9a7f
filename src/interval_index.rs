use crate::endpoint::Endpoint;
use crate::error::BuildError;
use crate::sweep::{self, Tables};
use log::debug;
use std::fmt;
use std::ops::Range;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of every query that stabs no interval.
const EMPTY: &[usize] = &[];

/// A static index over half-open intervals `[start, end)`, answering stabbing queries.
///
/// Intervals are identified by their position in the input. Building sweeps them once
/// into a table of breakpoints, each mapped to the set of intervals containing every
/// point from that breakpoint up to the next one. A query is then a binary search over
/// the breakpoints.
///
/// ```
/// use stab_index::interval_index::IntervalIndex;
///
/// let index = IntervalIndex::from_bounds(&[0, 5, 10, 15], &[8, 7, 13, 25]).unwrap();
///
/// assert_eq!(index.query(6), &[0, 1]);
/// assert_eq!(index.query(8), &[1]);
/// assert!(index.query(13).is_empty());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalIndex<T> {
    breakpoints: Vec<T>,
    active: Vec<Box<[usize]>>,
}

impl<T> Default for IntervalIndex<T> {
    fn default() -> IntervalIndex<T> {
        IntervalIndex::new()
    }
}

impl<T> IntervalIndex<T> {
    /// Creates an empty index; every query on it returns the empty set.
    pub fn new() -> IntervalIndex<T> {
        IntervalIndex {
            breakpoints: vec![],
            active: vec![],
        }
    }

    /// Drops every interval, returning the index to its unbuilt state.
    pub fn clear(&mut self) {
        self.breakpoints.clear();
        self.active.clear();
    }

    /// Whether the index holds no table at all (never built, cleared, or a failed build).
    ///
    /// A successful build over zero intervals still produces the two sentinel rows.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Number of rows in the breakpoint table.
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// The strictly increasing breakpoints, sentinels included.
    pub fn breakpoints(&self) -> &[T] {
        &self.breakpoints
    }

    /// The active set of each breakpoint, in table order.
    pub fn active_sets(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.active.iter().map(|set| &**set)
    }
}

impl<T> IntervalIndex<T>
where
    T: Endpoint,
{
    /// Builds an index over the intervals `[starts[i], ends[i])`.
    pub fn from_bounds(starts: &[T], ends: &[T]) -> Result<IntervalIndex<T>, BuildError> {
        let mut index = IntervalIndex::new();
        index.build(starts, ends)?;
        Ok(index)
    }

    /// Builds an index over `ranges`; the position of a range in the slice is its identity.
    pub fn from_ranges(ranges: &[Range<T>]) -> Result<IntervalIndex<T>, BuildError> {
        let (starts, ends): (Vec<T>, Vec<T>) = ranges.iter().map(|r| (r.start, r.end)).unzip();
        IntervalIndex::from_bounds(&starts, &ends)
    }

    /// Rebuilds the index from the intervals `[starts[i], ends[i])`, replacing whatever
    /// it held before.
    ///
    /// Empty intervals (`start == end`) never appear in any result. Reversed intervals
    /// (`start > end`) are not rejected; they cannot disturb the results of the other
    /// intervals but their own membership is meaningless.
    ///
    /// On error the index is left empty.
    pub fn build(&mut self, starts: &[T], ends: &[T]) -> Result<(), BuildError> {
        self.clear();

        if starts.len() != ends.len() {
            return Err(BuildError::LengthMismatch {
                starts: starts.len(),
                ends: ends.len(),
            });
        }
        if let Some(index) = starts
            .iter()
            .zip(ends)
            .position(|(s, e)| !s.is_comparable() || !e.is_comparable())
        {
            return Err(BuildError::UnorderedEndpoint { index });
        }

        let Tables {
            breakpoints,
            active,
            kept,
        } = sweep::sweep(starts, ends);
        debug!(
            "IntervalIndex::build(): {} intervals ({} non-empty) mapped onto {} breakpoints",
            starts.len(),
            kept,
            breakpoints.len()
        );
        self.breakpoints = breakpoints;
        self.active = active;
        Ok(())
    }

    /// Returns the intervals containing `p`, in ascending order.
    ///
    /// Runs a binary search over the breakpoints; the result borrows from the index.
    pub fn query(&self, p: T) -> &[usize] {
        // The wanted row is the last one whose breakpoint is at or below `p`.
        let at_or_below = self.breakpoints.partition_point(|b| *b <= p);
        match at_or_below.checked_sub(1).and_then(|x| self.active.get(x)) {
            Some(set) => &**set,
            None => EMPTY,
        }
    }

    /// Whether any interval contains `p`.
    pub fn contains(&self, p: T) -> bool {
        !self.query(p).is_empty()
    }

    /// Iterates the `(breakpoint, active set)` rows of the table.
    pub fn regions(&self) -> impl Iterator<Item = (T, &[usize])> + '_ {
        self.breakpoints.iter().copied().zip(self.active_sets())
    }
}

impl<T> fmt::Display for IntervalIndex<T>
where
    T: Endpoint + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bound = |x: &T| {
            if Some(*x) == T::NEG_INFINITY {
                String::from("-∞")
            } else if Some(*x) == T::INFINITY {
                String::from("∞")
            } else {
                format!("{}", x)
            }
        };

        for (k, (at, set)) in self.regions().enumerate() {
            let start = if Some(at) == T::NEG_INFINITY {
                format!("]{}", bound(&at))
            } else {
                format!("[{}", bound(&at))
            };
            let end = match self.breakpoints.get(k + 1) {
                Some(next) => format!("{}[", bound(next)),
                None => format!("{}]", bound(&T::upper_sentinel())),
            };

            write!(f, " {{ {},{} {:?} }} ", start, end, set)?;
        }
        Ok(())
    }
}
