use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// A resolved index fell outside `[0, len)`. `index` is the index as requested by the caller, so
/// negative values are reported as they were provided. Positions given as `usize` through
/// [`Sortable`](crate::collections::traits::Sortable) saturate at `isize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct IndexOutOfRange {
    /// The index that was requested.
    pub index: isize,
    /// The number of elements at the time of the request.
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for container with {} elements!", self.index, self.len)
    }
}

/// An operation that reads or removes an element was called on an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("operation requires a non-empty container")]
pub struct EmptyContainer;

/// An ordering operation was called on a container without a comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no comparator has been set for the container")]
pub struct ComparatorNotSet;

/// An inclusive range resolved with its start after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("range start {from} is after range end {to}")]
pub struct InvalidRange {
    /// The resolved start of the range.
    pub from: usize,
    /// The resolved, inclusive end of the range.
    pub to: usize,
}

/// Errors from operations over an inclusive index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum RangeError {
    /// One of the bounds fell outside the container.
    IndexOutOfRange(IndexOutOfRange),
    /// The start resolved after the end.
    InvalidRange(InvalidRange),
}

/// Errors from [`min`](crate::collections::contiguous::Container::min) and
/// [`max`](crate::collections::contiguous::Container::max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum ExtremumError {
    /// No comparator to rank elements with.
    ComparatorNotSet(ComparatorNotSet),
    /// No elements to choose from.
    EmptyContainer(EmptyContainer),
}

/// Errors from comparing two elements by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum CompareError {
    /// No comparator to compare with.
    ComparatorNotSet(ComparatorNotSet),
    /// One of the positions fell outside the container.
    IndexOutOfRange(IndexOutOfRange),
}

/// Every failure a [`Container`](crate::collections::contiguous::Container) can report, for callers
/// that would rather propagate a single type with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum ContainerError {
    /// See [`IndexOutOfRange`].
    IndexOutOfRange(IndexOutOfRange),
    /// See [`EmptyContainer`].
    EmptyContainer(EmptyContainer),
    /// See [`ComparatorNotSet`].
    ComparatorNotSet(ComparatorNotSet),
    /// See [`InvalidRange`].
    InvalidRange(InvalidRange),
}

impl From<RangeError> for ContainerError {
    fn from(value: RangeError) -> Self {
        match value {
            RangeError::IndexOutOfRange(e) => e.into(),
            RangeError::InvalidRange(e) => e.into(),
        }
    }
}

impl From<ExtremumError> for ContainerError {
    fn from(value: ExtremumError) -> Self {
        match value {
            ExtremumError::ComparatorNotSet(e) => e.into(),
            ExtremumError::EmptyContainer(e) => e.into(),
        }
    }
}

impl From<CompareError> for ContainerError {
    fn from(value: CompareError) -> Self {
        match value {
            CompareError::ComparatorNotSet(e) => e.into(),
            CompareError::IndexOutOfRange(e) => e.into(),
        }
    }
}
