//! Reference answers and random workloads for checking an
//! [`IntervalIndex`](crate::interval_index::IntervalIndex) against a linear scan.

use rand::Rng;

/// Indices `i` with `starts[i] <= p < ends[i]`, ascending, found by scanning every interval.
///
/// Lengths are not checked; surplus entries of the longer slice are ignored.
pub fn brute_force<T: PartialOrd>(starts: &[T], ends: &[T], p: &T) -> Vec<usize> {
    starts
        .iter()
        .zip(ends)
        .enumerate()
        .filter(|(_, (s, e))| *s <= p && p < *e)
        .map(|(i, _)| i)
        .collect()
}

/// Draws `count` intervals with integral endpoints in `[0, max)`.
///
/// Each start is uniform in `[0, max)` and each end uniform in `[start, max)`, so empty
/// intervals turn up regularly. With `max == 0` every interval is `[0, 0)`.
pub fn random_bounds<T, R>(rng: &mut R, count: usize, max: u16) -> (Vec<T>, Vec<T>)
where
    T: From<u16>,
    R: Rng + ?Sized,
{
    let mut starts = Vec::with_capacity(count);
    let mut ends = Vec::with_capacity(count);

    for _ in 0..count {
        let (start, end) = if max == 0 {
            (0, 0)
        } else {
            let start = rng.gen_range(0..max);
            (start, rng.gen_range(start..max))
        };
        starts.push(T::from(start));
        ends.push(T::from(end));
    }
    (starts, ends)
}
