use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::util::error::{EmptyContainer, IndexOutOfRange, InvalidRange, RangeError};
use crate::util::fmt::DebugRaw;
use crate::util::log::{debug_log, trace_log};
use crate::util::result::ResultExtension;

/// The equality strategy used by a [`Container`] for membership and lookup.
pub type Equality<T> = fn(&T, &T) -> bool;

/// The ordering strategy used by a [`Container`] for [`min`](Container::min),
/// [`max`](Container::max), [`sort`](Container::sort) and
/// [`less_than`](Container::less_than).
///
/// It should be a strict weak ordering which agrees with the container's [`Equality`].
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// An ordered, resizable sequence addressed by signed indices, where negative indices count back
/// from the end: `-1` is the last element, `-2` the second to last and so on.
///
/// Membership queries ([`index_of`](Container::index_of), [`contains`](Container::contains),
/// [`remove_element`](Container::remove_element), ...) go through the container's [`Equality`],
/// which is [`PartialEq::eq`] unless replaced. Ordering operations require a [`Comparator`], which
/// is unset by default.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Container.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `append` / `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_all` | `O(n-i+m)` |
/// | `remove_at` | `O(n-i)` |
/// | `remove_where` | `O(n)` |
/// | `index_of` / `contains` | `O(n)` |
/// | `min` / `max` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// \* Amortized, growing the backing storage takes `O(n)`.
pub struct Container<T> {
    pub(crate) elements: Vec<T>,
    pub(crate) equals: Equality<T>,
    pub(crate) compare: Option<Comparator<T>>,
}

impl<T: PartialEq> Container<T> {
    /// Creates a new, empty Container using [`PartialEq::eq`] for equality and no comparator.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Container;
    /// let con: Container<u8> = Container::new();
    /// assert_eq!(con.len(), 0);
    /// assert!(con.comparator().is_none());
    /// ```
    pub fn new() -> Container<T> {
        Container::with_equality(T::eq)
    }

    /// Creates a new, empty Container able to hold `cap` elements without reallocating.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Container;
    /// let con: Container<u8> = Container::with_cap(5);
    /// assert!(con.cap() >= 5);
    /// assert!(con.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> Container<T> {
        Container {
            elements: Vec::with_capacity(cap),
            equals: T::eq,
            compare: None,
        }
    }
}

impl<T: Ord> Container<T> {
    /// Creates a new, empty Container which is ordered by [`Ord::cmp`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Container;
    /// let mut con = Container::ordered();
    /// con.append_all([3, 1, 2]);
    /// assert_eq!(con.min(), Ok(&1));
    /// ```
    pub fn ordered() -> Container<T> {
        Container::new().with_comparator(T::cmp)
    }
}

impl<T> Container<T> {
    /// Creates a new, empty Container which uses `equals` to compare elements.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Container;
    /// fn loose(a: &&str, b: &&str) -> bool {
    ///     a.eq_ignore_ascii_case(b)
    /// }
    ///
    /// let mut con = Container::with_equality(loose);
    /// con.append_all(["Alpha", "Beta"]);
    /// assert_eq!(con.index_of(&"BETA"), Some(1));
    /// ```
    pub fn with_equality(equals: Equality<T>) -> Container<T> {
        Container {
            elements: Vec::new(),
            equals,
            compare: None,
        }
    }

    /// Sets the comparator, consuming and returning the Container.
    pub fn with_comparator(mut self, compare: Comparator<T>) -> Container<T> {
        self.compare = Some(compare);
        self
    }

    /// Replaces the equality used by membership queries and removal by value.
    pub fn set_equality(&mut self, equals: Equality<T>) {
        self.equals = equals;
    }

    /// Sets or unsets the comparator used by ordering operations.
    pub fn set_comparator(&mut self, compare: Option<Comparator<T>>) {
        self.compare = compare;
    }

    /// Returns the comparator, if one has been set.
    pub fn comparator(&self) -> Option<Comparator<T>> {
        self.compare
    }

    /// Returns the number of elements in the Container.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the capacity of the backing storage.
    pub fn cap(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns true if the Container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`, which may be negative to count from the end.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let con = container![1, 2, 3, 7, 9, 15];
    /// assert_eq!(con.get(2), Ok(&3));
    /// assert_eq!(con.get(-2), Ok(&9));
    /// assert!(con.get(6).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, IndexOutOfRange> {
        let index = self.resolve(index)?;
        Ok(&self.elements[index])
    }

    /// Returns a mutable reference to the element at `index`, which may be negative to count from
    /// the end.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, IndexOutOfRange> {
        let index = self.resolve(index)?;
        Ok(&mut self.elements[index])
    }

    /// Returns the first element, or [`EmptyContainer`] if there is none.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// # use container_lib::collections::contiguous::{Container, EmptyContainer};
    /// assert_eq!(container![1, 2, 3].first(), Ok(&1));
    /// assert_eq!(Container::<u8>::new().first(), Err(EmptyContainer));
    /// ```
    pub fn first(&self) -> Result<&T, EmptyContainer> {
        self.elements.first().ok_or(EmptyContainer)
    }

    /// Returns the last element, or [`EmptyContainer`] if there is none. The same as
    /// [`peek`](Container::peek).
    pub fn last(&self) -> Result<&T, EmptyContainer> {
        self.elements.last().ok_or(EmptyContainer)
    }

    /// Returns the lowest index holding an element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|e| (self.equals)(e, value))
    }

    /// Returns true if an element equal to `value` is present, according to the Container's
    /// [`Equality`].
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns true if every one of `values` is contained. Vacuously true for no values.
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Returns true if at least one of `values` is contained.
    pub fn contains_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().any(|v| self.contains(v))
    }

    /// Returns true if `predicate` holds for every element, stopping at the first that fails.
    pub fn all<F: FnMut(&T) -> bool>(&self, predicate: F) -> bool {
        self.elements.iter().all(predicate)
    }

    /// Returns true if `predicate` holds for any element, stopping at the first that passes.
    pub fn any<F: FnMut(&T) -> bool>(&self, predicate: F) -> bool {
        self.elements.iter().any(predicate)
    }

    /// Returns the index of the first element matching `predicate`, which receives each index
    /// along with its element.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let con = container!["D", "E", "A", "D"];
    /// assert_eq!(con.find(|_, e| *e == "D"), Some(0));
    /// assert_eq!(con.find(|i, e| i > 0 && *e == "D"), Some(3));
    /// assert_eq!(con.find(|_, e| *e == "Z"), None);
    /// ```
    pub fn find<F: FnMut(usize, &T) -> bool>(&self, mut predicate: F) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .position(|(i, e)| predicate(i, e))
    }

    /// Joins the [`Display`] form of every element, with `sep` between each pair.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let con = container!["D", "E", "A", "D", "B", "E", "E", "F"];
    /// assert_eq!(con.join(""), "DEADBEEF");
    /// assert_eq!(container![1, 2, 3].join("|"), "1|2|3");
    /// ```
    pub fn join(&self, sep: &str) -> String
    where
        T: Display,
    {
        let mut joined = String::new();
        for (i, e) in self.elements.iter().enumerate() {
            if i != 0 {
                joined.push_str(sep);
            }
            // Writing to a String can't fail.
            let _ = write!(joined, "{}", e);
        }
        joined
    }

    /// Adds `value` to the end of the Container.
    pub fn append(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Adds every one of `values` to the end of the Container, in order.
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.elements.extend(values);
    }

    /// Adds a copy of every element of `other` to the end of the Container.
    pub fn append_container(&mut self, other: &Container<T>)
    where
        T: Clone,
    {
        self.elements.extend_from_slice(&other.elements);
    }

    /// Moves every element of `other` to the end of the Container.
    pub fn append_owned(&mut self, mut other: Container<T>) {
        self.elements.append(&mut other.elements);
    }

    /// Inserts `value` before the element currently at `index`, shifting it and every following
    /// element right by one.
    ///
    /// `index` has to resolve to an existing element, use [`append`](Container::append) to add to
    /// the end.
    pub fn insert(&mut self, index: isize, value: T) -> Result<(), IndexOutOfRange> {
        let index = self.resolve(index)?;
        self.elements.insert(index, value);
        Ok(())
    }

    /// Inserts all of `values` before the element currently at `index`, so that they occupy
    /// `index..index + n` in their original order.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let mut con = container![1, 2, 3];
    /// con.insert_all(-1, [10, 20]).unwrap();
    /// assert_eq!(con.as_slice(), &[1, 2, 10, 20, 3]);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: isize,
        values: I,
    ) -> Result<(), IndexOutOfRange> {
        let index = self.resolve(index)?;
        // The splice is empty, so dropping it only performs the insertion.
        drop(self.elements.splice(index..index, values));
        Ok(())
    }

    /// Inserts a copy of every element of `other` before the element currently at `index`.
    pub fn insert_container(
        &mut self,
        index: isize,
        other: &Container<T>,
    ) -> Result<(), IndexOutOfRange>
    where
        T: Clone,
    {
        self.insert_all(index, other.elements.iter().cloned())
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    pub fn set(&mut self, index: isize, value: T) -> Result<T, IndexOutOfRange> {
        let index = self.resolve(index)?;
        Ok(mem::replace(&mut self.elements[index], value))
    }

    /// Removes and returns the element at `index`, shifting all following elements left.
    pub fn remove_at(&mut self, index: isize) -> Result<T, IndexOutOfRange> {
        let index = self.resolve(index)?;
        Ok(self.elements.remove(index))
    }

    /// Removes every element from `from` to `to`, both inclusive.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let mut con = container!['a', 'b', 'c', 'd', 'e'];
    /// con.remove_range(1, -2).unwrap();
    /// assert_eq!(con.join(""), "ae");
    /// ```
    pub fn remove_range(&mut self, from: isize, to: isize) -> Result<(), RangeError> {
        let (from, to) = self.resolve_range(from, to)?;
        self.elements.drain(from..=to);
        Ok(())
    }

    /// Removes and returns the first element equal to `value`. Nothing happens if there is none.
    pub fn remove_element(&mut self, value: &T) -> Option<T> {
        match self.index_of(value) {
            Some(index) => Some(self.elements.remove(index)),
            None => {
                debug_log!("remove_element: no matching element in {} elements", self.len());
                None
            },
        }
    }

    /// Removes every element equal to `value`, returning how many were removed.
    pub fn remove_all_elements(&mut self, value: &T) -> usize {
        let equals = self.equals;
        self.remove_where(|e| equals(value, e))
    }

    /// Removes every element matching `predicate` by compacting the survivors in place, keeping
    /// their relative order. Returns the number of removed elements.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Container;
    /// let mut con: Container<char> = "THIBAUT".chars().collect();
    /// assert_eq!(con.remove_where(|c| *c <= 'H'), 3);
    /// assert_eq!(con.join(""), "TIUT");
    /// ```
    pub fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) -> usize {
        let before = self.len();
        self.elements.retain(|e| !predicate(e));
        let removed = before - self.len();
        trace_log!("remove_where: compacted {} elements away, {} left", removed, self.len());
        removed
    }

    /// Removes every element and releases the backing storage.
    pub fn clear(&mut self) {
        debug_log!("clear: releasing capacity {}", self.cap());
        self.elements = Vec::new();
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let mut start = 0;
        let mut end = self.len().saturating_sub(1);
        while start < end {
            self.elements.swap(start, end);
            start += 1;
            end -= 1;
        }
    }

    /// Exchanges the elements at `a` and `b`.
    pub fn swap(&mut self, a: isize, b: isize) -> Result<(), IndexOutOfRange> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        self.elements.swap(a, b);
        Ok(())
    }

    /// Pushes `value` onto the end of the Container, the same as [`append`](Container::append).
    pub fn push(&mut self, value: T) {
        self.append(value);
    }

    /// Removes and returns the last element.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// # use container_lib::collections::contiguous::EmptyContainer;
    /// let mut con = container!["A", "B"];
    /// assert_eq!(con.pop(), Ok("B"));
    /// assert_eq!(con.pop(), Ok("A"));
    /// assert_eq!(con.pop(), Err(EmptyContainer));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.elements.pop().ok_or(EmptyContainer)
    }

    /// Returns the last element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.last()
    }

    /// Appends `count` copies of `value`.
    pub fn fill(&mut self, value: T, count: usize)
    where
        T: Clone,
    {
        self.elements.extend(iter::repeat_n(value, count));
    }

    /// Ensures that the Container can hold `extra` more elements without reallocating.
    pub fn reserve(&mut self, extra: usize) {
        self.elements.reserve(extra);
    }

    /// Shrinks the capacity of the Container as close to its length as possible.
    pub fn shrink_to_fit(&mut self) {
        debug_log!("shrink_to_fit: capacity {} to length {}", self.cap(), self.len());
        self.elements.shrink_to_fit();
    }

    /// Collects copies of every element matching `predicate` into a new Container with the same
    /// equality and comparator. `predicate` receives each index along with its element.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let con = container!["D", "E", "A", "D", "B", "E", "E", "F"];
    /// assert_eq!(con.find_all(|i, _| i % 2 == 0).join(""), "DABE");
    /// assert_eq!(con.find_all(|_, e| *e == "E").join(""), "EEE");
    /// ```
    pub fn find_all<F: FnMut(usize, &T) -> bool>(&self, mut predicate: F) -> Container<T>
    where
        T: Clone,
    {
        self.derive(
            self.elements
                .iter()
                .enumerate()
                .filter(|&(i, e)| predicate(i, e))
                .map(|(_, e)| e.clone())
                .collect(),
        )
    }

    /// Copies the elements from `from` to `to`, both inclusive, into a new Container with the same
    /// equality and comparator.
    pub fn clone_range(&self, from: isize, to: isize) -> Result<Container<T>, RangeError>
    where
        T: Clone,
    {
        let (from, to) = self.resolve_range(from, to)?;
        Ok(self.derive(self.elements[from..=to].to_vec()))
    }

    /// Copies every element into a [`Vec`].
    pub fn export_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Copies the elements from `from` to `to`, both inclusive, into a [`Vec`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let con = container![1, 2, 3, 4];
    /// assert_eq!(con.export_range(-3, -1), Ok(vec![2, 3, 4]));
    /// ```
    pub fn export_range(&self, from: isize, to: isize) -> Result<Vec<T>, RangeError>
    where
        T: Clone,
    {
        let (from, to) = self.resolve_range(from, to)?;
        Ok(self.elements[from..=to].to_vec())
    }

    /// Converts the Container into a [`Vec`] without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns the elements as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the elements as a mutable slice, in order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Returns an iterator over references to the elements, first to last.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator over mutable references to the elements, first to last.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Translates a possibly negative `index` into a position in `0..len`.
    pub(crate) fn resolve(&self, index: isize) -> Result<usize, IndexOutOfRange> {
        let len = self.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };

        match resolved {
            Some(i) if i < len => Ok(i),
            _ => Err(IndexOutOfRange { index, len }),
        }
    }

    /// Resolves both ends of an inclusive range, which must not be reversed.
    pub(crate) fn resolve_range(&self, from: isize, to: isize) -> Result<(usize, usize), RangeError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        if from > to {
            return Err(InvalidRange { from, to }.into());
        }
        Ok((from, to))
    }

    /// Wraps `elements` in a new Container sharing this one's strategies.
    pub(crate) fn derive(&self, elements: Vec<T>) -> Container<T> {
        Container {
            elements,
            equals: self.equals,
            compare: self.compare,
        }
    }
}

impl<T: PartialEq> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Container<T> {
    fn clone(&self) -> Self {
        self.derive(self.elements.clone())
    }
}

impl<T: PartialEq> From<Vec<T>> for Container<T> {
    fn from(value: Vec<T>) -> Self {
        Container {
            elements: value,
            equals: T::eq,
            compare: None,
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Container<T> {
    fn from(value: [T; N]) -> Self {
        Vec::from(value).into()
    }
}

impl<T> From<Container<T>> for Vec<T> {
    fn from(value: Container<T>) -> Self {
        value.into_vec()
    }
}

impl<T> Index<isize> for Container<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` doesn't resolve to an element.
    fn index(&self, index: isize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<isize> for Container<T> {
    /// # Panics
    /// Panics if `index` doesn't resolve to an element.
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> AsRef<[T]> for Container<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Container<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Container<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Container<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Containers are equal when their elements are, regardless of their strategies.
impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T: Debug> Debug for Container<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("contents", &self.elements)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field(
                "compare",
                &DebugRaw(if self.compare.is_some() { "set" } else { "unset" }),
            )
            .finish()
    }
}

/// Formats as `Container[len] [a b c]`.
impl<T: Display> Display for Container<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Container[{}] [{}]", self.len(), self.join(" "))
    }
}
