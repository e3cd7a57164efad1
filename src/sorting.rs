//! In-place bubble sort.
//!
//! Each pass carries the largest remaining element to the end of the
//! unsorted prefix, so the prefix shrinks by one per pass. A pass without
//! swaps means the slice is sorted and ends the sort early.

use std::cmp::Ordering;

/// Sorts `items` in ascending order and returns the number of swaps made.
///
/// Stable: equal elements are never swapped. Elements that do not compare
/// (such as NaN) are treated as already in order.
///
/// # Example
///
/// ```rust
/// use graphpaths::sorting::bubble_sort;
///
/// let mut list = [37, 45, 29, 8];
/// bubble_sort(&mut list);
/// assert_eq!(list, [8, 29, 37, 45]);
/// ```
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) -> usize {
    bubble_sort_by(items, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Sorts `items` with a comparator and returns the number of swaps made.
///
/// ```rust
/// use graphpaths::sorting::bubble_sort_by;
///
/// let mut words = ["pear", "fig", "banana"];
/// bubble_sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(words, ["fig", "pear", "banana"]);
/// ```
pub fn bubble_sort_by<T, F>(items: &mut [T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut swaps = 0;
    for end in (1..items.len()).rev() {
        let mut swapped = false;
        for j in 0..end {
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped {
            break;
        }
    }
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_sorts_small_list() {
        let mut list = vec![37, 45, 29, 8];
        let swaps = bubble_sort(&mut list);
        assert_eq!(list, vec![8, 29, 37, 45]);
        assert_eq!(swaps, 5);
    }

    #[test]
    fn test_nearly_sorted_exits_early() {
        let mut list = vec![1, 2, 3, 5, 4];
        assert_eq!(bubble_sort(&mut list), 1);
        assert_eq!(list, vec![1, 2, 3, 4, 5]);

        let mut sorted = vec![1, 2, 3];
        assert_eq!(bubble_sort(&mut sorted), 0);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(bubble_sort(&mut empty), 0);

        let mut single = vec![9];
        bubble_sort(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        bubble_sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_floats() {
        let mut values = vec![2.5, -1.0, 0.0, 10.25];
        bubble_sort(&mut values);
        assert_eq!(values, vec![-1.0, 0.0, 2.5, 10.25]);
    }

    #[test]
    fn test_matches_std_sort() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in [0, 1, 2, 7, 31, 64] {
            let mut ours: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            let mut expected = ours.clone();
            expected.sort();

            bubble_sort(&mut ours);
            assert_eq!(ours, expected, "length {len}");
        }
    }
}
