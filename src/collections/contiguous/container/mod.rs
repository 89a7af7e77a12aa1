//! A module containing [`Container`] and associated types.
//!
//! Owned and borrowed iteration reuse [`std::vec::IntoIter`] and the [`std::slice`] iterators.
//! The error types returned by Container's fallible methods are re-exported here.
//!
//! [`Container`] is also re-exported under the parent module.

mod container;
mod iter;
mod ordering;
mod visit;

pub use container::*;

#[doc(inline)]
pub use crate::util::error::{
    ComparatorNotSet, CompareError, ContainerError, EmptyContainer, ExtremumError,
    IndexOutOfRange, InvalidRange, RangeError,
};

/// Creates a [`Container`] from a list of elements, or from an element and a count, in the same
/// way as [`vec!`].
///
/// # Examples
/// ```
/// # use container_lib::container;
/// let con = container![1, 2, 3];
/// assert_eq!(con.join(","), "1,2,3");
///
/// let con = container!["A"; 3];
/// assert_eq!(con.join(""), "AAA");
/// ```
#[macro_export]
macro_rules! container {
    () => {
        $crate::collections::contiguous::Container::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut con = $crate::collections::contiguous::Container::new();
        con.fill($elem, $n);
        con
    }};
    ($($x:expr),+ $(,)?) => {
        $crate::collections::contiguous::Container::from([$($x),+])
    };
}
