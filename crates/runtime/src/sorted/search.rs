use crate::{RValue, Result, sorted::compare_keys};
use std::cmp::Ordering;

/// The result of [search_equal_run]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// The number of elements that matched the key
    pub count: usize,
    /// The index of the first match, or where the key could be inserted if there were no matches
    pub start: usize,
}

/// Finds the run of elements matching `key` in a sorted slice
///
/// A binary search finds a matching element, and then the run is extended in both directions
/// while neighbouring elements are equal to the key, so the cost is logarithmic in the length of
/// the slice plus linear in the number of matches.
///
/// If nothing matches, `start` is the index at which the key could be inserted while keeping the
/// slice sorted.
pub fn search_equal_run(elements: &[RValue], key: &RValue) -> Result<SearchResult> {
    let is_match = |index: usize| -> Result<bool> {
        Ok(compare_keys(key, &elements[index])? == Ordering::Equal)
    };

    // The candidate window is elements[start..start + size]
    let mut start = 0;
    let mut size = elements.len();

    while size > 0 {
        let mid = size / 2;
        match compare_keys(key, &elements[start + mid])? {
            Ordering::Less => size = mid,
            Ordering::Greater => {
                start += mid + 1;
                size -= mid + 1;
            }
            Ordering::Equal => {
                start += mid;
                let mut count = 1;
                while start > 0 && is_match(start - 1)? {
                    start -= 1;
                    count += 1;
                }
                while start + count < elements.len() && is_match(start + count)? {
                    count += 1;
                }
                return Ok(SearchResult { count, start });
            }
        }
    }

    Ok(SearchResult { count: 0, start })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<RValue> {
        values.iter().map(|n| RValue::Int(*n)).collect()
    }

    fn search(values: &[i64], key: i64) -> (usize, usize) {
        let result = search_equal_run(&ints(values), &key.into()).unwrap();
        (result.count, result.start)
    }

    #[test]
    fn finds_the_whole_run() {
        assert_eq!(search(&[1, 3, 3, 3, 5, 7], 3), (3, 1));
        assert_eq!(search(&[2, 2, 2, 2, 2, 2, 2], 2), (7, 0));
        assert_eq!(search(&[1, 2, 3, 4, 5, 9, 9], 9), (2, 5));
    }

    #[test]
    fn insertion_points() {
        assert_eq!(search(&[1, 3, 3, 3, 5, 7], 4), (0, 4));
        assert_eq!(search(&[1, 3, 3, 3, 5, 7], 0), (0, 0));
        assert_eq!(search(&[1, 3, 3, 3, 5, 7], 8), (0, 6));
        assert_eq!(search(&[], 9), (0, 0));
    }

    #[test]
    fn comparator_errors_are_propagated() {
        let error = search_equal_run(&ints(&[1, 2, 3]), &"2".into()).unwrap_err();
        assert!(matches!(error.kind(), crate::ErrorKind::TypeMismatch { .. }));
    }
}
