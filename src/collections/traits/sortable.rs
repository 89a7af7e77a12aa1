use crate::util::error::{CompareError, IndexOutOfRange};

/// The minimal interface needed to sort a sequence in place without knowing its element type:
/// a length, a strict "less than" between two positions, and a swap of two positions.
///
/// Indices are plain positions in `0..len`.
pub trait Sortable {
    fn len(&self) -> usize;

    /// Returns true if the element at `a` orders strictly before the element at `b`.
    fn less_than(&self, a: usize, b: usize) -> Result<bool, CompareError>;

    fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfRange>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorts `data` in place using only the [`Sortable`] interface. The sort is an unstable heap sort,
/// so it runs in `O(n log n)` without allocating.
///
/// The first error reported by `data` aborts the sort, leaving the elements permuted but intact.
///
/// # Examples
/// ```
/// # use container_lib::collections::contiguous::Container;
/// # use container_lib::collections::traits;
/// let mut con = Container::ordered();
/// con.append_all([15, 7, 1, 9, 3, 2]);
/// traits::sort(&mut con).unwrap();
/// assert_eq!(con.as_slice(), &[1, 2, 3, 7, 9, 15]);
/// ```
pub fn sort<S: Sortable + ?Sized>(data: &mut S) -> Result<(), CompareError> {
    let len = data.len();

    for root in (0..len / 2).rev() {
        sift_down(data, root, len)?;
    }

    for end in (1..len).rev() {
        data.swap(0, end)?;
        sift_down(data, 0, end)?;
    }

    Ok(())
}

/// Returns the smallest index in `0..n` for which `predicate` holds, or `n` if there is none.
/// `predicate` must be false up to some index and true from there on, such as `v >= x` over a
/// sorted sequence.
///
/// # Examples
/// ```
/// # use container_lib::collections::traits;
/// let sorted = [1, 2, 3, 7, 9, 15];
/// assert_eq!(traits::search(sorted.len(), |i| sorted[i] >= 2), 1);
/// assert_eq!(traits::search(sorted.len(), |i| sorted[i] >= 16), 6);
/// ```
pub fn search<F: FnMut(usize) -> bool>(n: usize, mut predicate: F) -> usize {
    let (mut low, mut high) = (0, n);
    while low < high {
        let mid = low + (high - low) / 2;
        if predicate(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

/// Restores the max-heap property for the subtree at `root`, considering only `0..end`.
fn sift_down<S: Sortable + ?Sized>(
    data: &mut S,
    mut root: usize,
    end: usize,
) -> Result<(), CompareError> {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return Ok(());
        }

        if child + 1 < end && data.less_than(child, child + 1)? {
            child += 1;
        }

        if !data.less_than(root, child)? {
            return Ok(());
        }

        data.swap(root, child)?;
        root = child;
    }
}
