#![cfg(test)]

use super::*;
use crate::util::error::{ComparatorNotSet, CompareError, IndexOutOfRange};

/// Two parallel columns, sorted by the first while keeping rows together.
struct Columns {
    keys: Vec<u32>,
    names: Vec<&'static str>,
}

impl Sortable for Columns {
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn less_than(&self, a: usize, b: usize) -> Result<bool, CompareError> {
        match (self.keys.get(a), self.keys.get(b)) {
            (Some(a), Some(b)) => Ok(a < b),
            _ => Err(IndexOutOfRange { index: a.max(b) as isize, len: self.len() }.into()),
        }
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfRange> {
        if a.max(b) >= self.len() {
            return Err(IndexOutOfRange { index: a.max(b) as isize, len: self.len() });
        }
        self.keys.swap(a, b);
        self.names.swap(a, b);
        Ok(())
    }
}

/// Orders nothing, like a container without a comparator.
struct Unordered(usize);

impl Sortable for Unordered {
    fn len(&self) -> usize {
        self.0
    }

    fn less_than(&self, _: usize, _: usize) -> Result<bool, CompareError> {
        Err(ComparatorNotSet.into())
    }

    fn swap(&mut self, _: usize, _: usize) -> Result<(), IndexOutOfRange> {
        Ok(())
    }
}

#[test]
fn test_sort_parallel_columns() {
    let mut columns = Columns {
        keys: vec![3, 1, 4, 1, 5, 9, 2, 6],
        names: vec!["c", "a", "d", "a", "e", "i", "b", "f"],
    };

    sort(&mut columns).unwrap();

    assert_eq!(columns.keys, [1, 1, 2, 3, 4, 5, 6, 9]);
    assert_eq!(
        columns.names,
        ["a", "a", "b", "c", "d", "e", "f", "i"],
        "Rows should be moved together through swap."
    );
}

#[test]
fn test_sort_trivial_lengths() {
    assert_eq!(sort(&mut Unordered(0)), Ok(()));
    assert_eq!(sort(&mut Unordered(1)), Ok(()), "One element never needs comparing.");
    assert_eq!(
        sort(&mut Unordered(2)),
        Err(CompareError::ComparatorNotSet(ComparatorNotSet))
    );
}

#[test]
fn test_search() {
    let sorted = [1, 2, 3, 7, 9, 15];
    assert_eq!(search(sorted.len(), |i| sorted[i] >= 2), 1);
    assert_eq!(search(sorted.len(), |i| sorted[i] >= 1), 0);
    assert_eq!(search(sorted.len(), |i| sorted[i] >= 8), 4);
    assert_eq!(search(sorted.len(), |i| sorted[i] > 15), sorted.len());
    assert_eq!(search(0, |_| unreachable!()), 0, "An empty range shouldn't be probed.");
}
