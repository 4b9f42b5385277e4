//! Array algorithms: balance point, in-place sort, and digit permutation.

use std::ops::Range;

use branchwork_core::Digits;

/// Returns the first index whose strictly-left sum equals its strictly-right sum.
///
/// Runs in a single pass after computing the total. Sums are accumulated in
/// `i128`, so they cannot overflow. Returns `None` if no such index exists.
///
/// # Examples
///
/// ```
/// use branchwork::balance_index;
///
/// assert_eq!(balance_index(&[1, 2, 5, 3, 0]), Some(2));
/// assert_eq!(balance_index(&[2, 3, 9, 5]), Some(2));
/// assert_eq!(balance_index(&[1, 2, 3, 4, 5]), None);
/// ```
#[must_use]
pub fn balance_index(values: &[i64]) -> Option<usize> {
    let total: i128 = values.iter().copied().map(i128::from).sum();
    let mut left = 0_i128;
    for (i, value) in values.iter().copied().map(i128::from).enumerate() {
        if left == total - left - value {
            return Some(i);
        }
        left += value;
    }
    None
}

/// Sorts `values` in ascending order in place and returns it.
///
/// This is a quicksort with Lomuto partitioning around the last element of
/// each range. Pending ranges live on an explicit stack instead of the call
/// stack. The smaller side of each partition is always taken next, which
/// keeps the stack at `O(log n)` entries. The sort is not stable.
///
/// # Examples
///
/// ```
/// use branchwork::sort_ascending;
///
/// let mut values = [-2, 9, 5, -3];
/// assert_eq!(sort_ascending(&mut values), [-3, -2, 5, 9]);
/// assert_eq!(values, [-3, -2, 5, 9]);
/// ```
pub fn sort_ascending<T>(values: &mut [T]) -> &mut [T]
where
    T: PartialOrd,
{
    let mut pending: Vec<Range<usize>> = vec![0..values.len()];
    let mut peak = pending.len();
    while let Some(range) = pending.pop() {
        if range.len() < 2 {
            continue;
        }
        let pivot = range.start + partition(&mut values[range.clone()]);
        let below = range.start..pivot;
        let above = pivot + 1..range.end;
        if below.len() > above.len() {
            pending.push(below);
            pending.push(above);
        } else {
            pending.push(above);
            pending.push(below);
        }
        peak = peak.max(pending.len());
    }
    log::trace!("sorted {} values, peak stack depth {peak}", values.len());
    values
}

/// Partitions `values` around its last element and returns the pivot's final index.
///
/// Everything before the returned index is less than the pivot; everything
/// after it is not.
fn partition<T>(values: &mut [T]) -> usize
where
    T: PartialOrd,
{
    let last = values.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if values[i] < values[last] {
            values.swap(store, i);
            store += 1;
        }
    }
    values.swap(store, last);
    store
}

/// Returns the smallest number greater than `number` made of the same digits.
///
/// Returns `number` itself when its digits are already in non-increasing
/// order, since no larger arrangement exists. The same happens if the larger
/// arrangement does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use branchwork::next_bigger;
///
/// assert_eq!(next_bigger(12345), 12354);
/// assert_eq!(next_bigger(90822), 92028);
/// assert_eq!(next_bigger(321_321), 322_113);
/// assert_eq!(next_bigger(54321), 54321);
/// ```
#[must_use]
pub fn next_bigger(number: u64) -> u64 {
    let mut digits = Digits::from_number(number);
    let d = digits.as_mut_slice();

    // rightmost digit smaller than its right neighbour
    let Some(pivot) = d.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        log::trace!("{number} is already the largest arrangement of its digits");
        return number;
    };
    let pivot_digit = d[pivot];
    // d[pivot + 1] always qualifies, so the search never comes up empty
    let successor = pivot + 1 + d[pivot + 1..]
        .iter()
        .rposition(|&digit| digit > pivot_digit)
        .unwrap_or(0);
    d.swap(pivot, successor);
    // the suffix is non-increasing, so reversing it sorts it ascending
    d[pivot + 1..].reverse();

    digits.to_number().unwrap_or_else(|| {
        log::debug!("next arrangement of {number} overflows u64, returning it unchanged");
        number
    })
}
