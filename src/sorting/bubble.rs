use std::cmp::Ordering;
use std::convert::Infallible;

use crate::error::SortError;

/// Work done by a single bubble sort call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
    /// Set when a pass made no swaps and the remaining passes were skipped.
    pub early_exit: bool,
}

// After pass `i` the last `i + 1` elements are in their final place, so the
// inner scan shrinks by one each time.
fn bubble_passes<T, E, F>(arr: &mut [T], mut is_greater: F) -> Result<SortStats, E>
where
    F: FnMut(usize, &T, &T) -> Result<bool, E>,
{
    let mut stats = SortStats::default();
    let n = arr.len();
    if n < 2 {
        return Ok(stats);
    }
    for i in 0..n - 1 {
        stats.passes += 1;
        let mut was_swap = false;
        for j in 0..(n - 1 - i) {
            stats.comparisons += 1;
            if is_greater(j, &arr[j], &arr[j + 1])? {
                arr.swap(j, j + 1);
                stats.swaps += 1;
                was_swap = true;
            }
        }
        if !was_swap {
            log::trace!("pass {} made no swaps, stopping early", i + 1);
            stats.early_exit = true;
            break;
        }
    }
    Ok(stats)
}

fn sort_total<T, F>(arr: &mut [T], mut is_greater: F) -> SortStats
where
    F: FnMut(&T, &T) -> bool,
{
    let result: Result<SortStats, Infallible> =
        bubble_passes(arr, |_, a, b| Ok(is_greater(a, b)));
    match result {
        Ok(stats) => stats,
        Err(never) => match never {},
    }
}

/// Sorts the slice in place in non-descending order and hands it back.
///
/// Only strictly greater pairs are swapped, so equal elements keep their
/// relative order. Already sorted input costs a single pass.
///
/// ```
/// use bubble_sort::sorting::bubble_sort;
///
/// let mut arr = [64, 34, 25, 12, 22, 11, 90];
/// bubble_sort(&mut arr);
/// assert_eq!(arr, [11, 12, 22, 25, 34, 64, 90]);
/// ```
pub fn bubble_sort<T>(arr: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    sort_total(arr, |a, b| a > b);
    arr
}

/// Returns a sorted copy and leaves `arr` untouched.
pub fn bubble_sorted<T>(arr: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut out = arr.to_vec();
    bubble_sort(&mut out);
    out
}

pub fn bubble_sort_by<T, F>(arr: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_total(arr, |a, b| compare(a, b) == Ordering::Greater);
    arr
}

pub fn bubble_sort_by_key<T, K, F>(arr: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_total(arr, |a, b| key(a) > key(b));
    arr
}

/// Same as [`bubble_sort`], but reports how many passes, comparisons and
/// swaps it took.
pub fn bubble_sort_stats<T>(arr: &mut [T]) -> SortStats
where
    T: Ord,
{
    sort_total(arr, |a, b| a > b)
}

/// Sorts elements that only have a partial order, such as floats.
///
/// Fails on the first adjacent pair that `partial_cmp` cannot order. The
/// slice is then left partially sorted, but still holds exactly the input
/// elements.
pub fn try_bubble_sort<T>(arr: &mut [T]) -> Result<&mut [T], SortError>
where
    T: PartialOrd,
{
    bubble_passes(arr, |index, a, b| {
        a.partial_cmp(b)
            .map(|ord| ord == Ordering::Greater)
            .ok_or(SortError::IncomparableElements { index })
    })?;
    Ok(arr)
}

pub fn is_sorted<T>(arr: &[T]) -> bool
where
    T: PartialOrd,
{
    arr.windows(2).all(|w| w[0] <= w[1])
}
