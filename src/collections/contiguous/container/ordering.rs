use std::cmp::Ordering;

use super::Container;
use crate::collections::traits::Sortable;
use crate::util::error::{
    ComparatorNotSet, CompareError, EmptyContainer, ExtremumError, IndexOutOfRange,
};

impl<T> Container<T> {
    /// Returns true if the element at `a` orders strictly before the element at `b`, according to
    /// the Container's comparator.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::{ComparatorNotSet, CompareError, Container};
    /// let mut con = Container::new();
    /// con.append_all([4, 2]);
    /// assert_eq!(con.less_than(0, 1), Err(CompareError::ComparatorNotSet(ComparatorNotSet)));
    ///
    /// con.set_comparator(Some(i32::cmp));
    /// assert_eq!(con.less_than(0, 1), Ok(false));
    /// assert_eq!(con.less_than(-1, -2), Ok(true));
    /// ```
    pub fn less_than(&self, a: isize, b: isize) -> Result<bool, CompareError> {
        let compare = self.compare.ok_or(ComparatorNotSet)?;
        let a = self.get(a)?;
        let b = self.get(b)?;
        Ok(compare(a, b) == Ordering::Less)
    }

    /// Returns the first smallest element, found with a linear scan.
    pub fn min(&self) -> Result<&T, ExtremumError> {
        self.extremum(Ordering::Less)
    }

    /// Returns the first largest element, found with a linear scan.
    pub fn max(&self) -> Result<&T, ExtremumError> {
        self.extremum(Ordering::Greater)
    }

    /// Sorts the elements with the comparator. The sort is stable.
    pub fn sort(&mut self) -> Result<(), ComparatorNotSet> {
        let compare = self.compare.ok_or(ComparatorNotSet)?;
        self.elements.sort_by(compare);
        Ok(())
    }

    /// Returns the first index for which `predicate` holds, assuming that it holds for every
    /// element after that one too (as for a sorted Container). Returns `len` if it never does.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let mut con = container![9, 3, 15, 1, 7, 2].with_comparator(i32::cmp);
    /// con.sort().unwrap();
    /// assert_eq!(con.search(|v| *v >= 2), 1);
    /// assert_eq!(con.search(|v| *v >= 100), con.len());
    /// ```
    pub fn search<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> usize {
        self.elements.partition_point(|e| !predicate(e))
    }

    /// Scans for the element which no other element orders `wanted` of.
    fn extremum(&self, wanted: Ordering) -> Result<&T, ExtremumError> {
        let compare = self.compare.ok_or(ComparatorNotSet)?;
        let mut iter = self.elements.iter();
        let mut found = iter.next().ok_or(EmptyContainer)?;

        for e in iter {
            if compare(e, found) == wanted {
                found = e;
            }
        }

        Ok(found)
    }

    /// Bounds checks a raw position. Positions past `isize::MAX` can never be in range and are
    /// reported saturated to `isize::MAX`.
    fn check(&self, index: usize) -> Result<usize, IndexOutOfRange> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len: self.len(),
            })
        }
    }
}

impl<T> Sortable for Container<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn less_than(&self, a: usize, b: usize) -> Result<bool, CompareError> {
        let compare = self.compare.ok_or(ComparatorNotSet)?;
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok(compare(&self.elements[a], &self.elements[b]) == Ordering::Less)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfRange> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        self.elements.swap(a, b);
        Ok(())
    }
}
