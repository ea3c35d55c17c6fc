//! `parlor-sort` — stable merge sort, generic over element and key.
//!
//! This crate contains a single divide-and-conquer sorting routine used to
//! produce ordered views of a collection without mutating it. Stability is
//! part of the contract: elements whose keys compare equal keep the relative
//! order they had in the input.

/// Sort a slice into a new `Vec`, ordered ascending by `key_fn`.
///
/// The input is not mutated. Recursion splits at `n / 2` into two contiguous
/// halves (non-owning subslices) and merges them back; sequences of length 0
/// or 1 are returned as-is. `O(n log n)` time, `O(n)` auxiliary space per
/// merge level.
///
/// Stability: when two elements have equal keys, the element from the left
/// half is emitted first, so equal-key elements preserve their input order
/// across every level of the recursion.
pub fn merge_sort<T, K, F>(items: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], key_fn);
    let right = merge_sort(&items[mid..], key_fn);

    merge(left, right, key_fn)
}

/// Merge two ascending sequences into one.
///
/// Consumes both from the front; the strictly smaller key goes first, and a
/// tie takes the left element. Once one side is exhausted the remainder of
/// the other is appended in order.
fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key_fn: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                // `<=` keeps the left element on ties: the stability contract.
                if key_fn(l) <= key_fn(r) {
                    result.push(left.next().unwrap());
                } else {
                    result.push(right.next().unwrap());
                }
            }
            (Some(_), None) => result.extend(left.by_ref()),
            (None, Some(_)) => result.extend(right.by_ref()),
            (None, None) => break,
        }
    }

    result
}
