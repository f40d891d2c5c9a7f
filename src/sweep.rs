use crate::endpoint::Endpoint;
use log::trace;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// The two parallel tables produced by one offline sweep.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Tables<T> {
    pub breakpoints: Vec<T>,
    pub active: Vec<Box<[usize]>>,
    /// Number of non-degenerate intervals that took part in the sweep.
    pub kept: usize,
}

impl<T> Tables<T>
where
    T: Endpoint,
{
    fn with_capacity(kept: usize) -> Tables<T> {
        // One row per start and end, plus the two sentinels.
        let capacity = 2 * kept + 2;

        Tables {
            breakpoints: Vec::with_capacity(capacity),
            active: Vec::with_capacity(capacity),
            kept,
        }
    }

    fn push(&mut self, at: T, row: Box<[usize]>) {
        debug_assert!(self.breakpoints.len() < self.breakpoints.capacity());
        debug_assert!(self.breakpoints.last().map_or(true, |last| *last < at));
        self.breakpoints.push(at);
        self.active.push(row);
    }

    /// Records the active set in effect from `at` up to the next breakpoint.
    fn record(&mut self, at: T, active: &BTreeSet<usize>) {
        let row: Box<[usize]> = active.iter().copied().collect();

        // The first event sits on the opening sentinel; it takes over that row.
        if self.breakpoints.last() == Some(&at) {
            if let Some(last) = self.active.last_mut() {
                *last = row;
            }
            return;
        }
        // Only reversed intervals can leave the active set unchanged.
        if self.active.last().is_some_and(|prev| **prev == *row) {
            trace!("sweep: active set unchanged at breakpoint #{}, coalescing", self.breakpoints.len());
            return;
        }
        self.push(at, row);
    }
}

fn by_value<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Sweeps the intervals `[starts[i], ends[i])` from the lower to the upper sentinel,
/// recording a breakpoint wherever the set of intervals containing the sweep position
/// changes.
///
/// Every endpoint must be comparable. Degenerate intervals are skipped.
pub(crate) fn sweep<T>(starts: &[T], ends: &[T]) -> Tables<T>
where
    T: Endpoint,
{
    let mut by_start: Vec<usize> = (0..starts.len()).filter(|&i| starts[i] != ends[i]).collect();
    let mut by_end = by_start.clone();
    by_start.sort_unstable_by(|&a, &b| by_value(&starts[a], &starts[b]));
    by_end.sort_unstable_by(|&a, &b| by_value(&ends[a], &ends[b]));

    let mut tables = Tables::with_capacity(by_start.len());
    tables.push(T::lower_sentinel(), Box::default());

    let mut active = BTreeSet::new();
    let (mut i, mut j) = (0, 0);
    loop {
        let next_start = by_start.get(i).map(|&s| starts[s]);
        let next_end = by_end.get(j).map(|&e| ends[e]);
        let at = match (next_start, next_end) {
            (Some(s), Some(e)) => {
                if e <= s {
                    e
                } else {
                    s
                }
            }
            (Some(s), None) => s,
            (None, Some(e)) => e,
            (None, None) => break,
        };

        while let Some(&s) = by_start.get(i).filter(|&&s| starts[s] == at) {
            active.insert(s);
            i += 1;
        }
        while let Some(&e) = by_end.get(j).filter(|&&e| ends[e] == at) {
            active.remove(&e);
            j += 1;
        }
        tables.record(at, &active);
    }

    if tables.breakpoints.last() != Some(&T::upper_sentinel()) {
        tables.push(T::upper_sentinel(), Box::default());
    }
    tables
}
