//! A growable list type with the conveniences of a dynamically-typed language's array, written
//! with plain generics.
//!
//! # Purpose
//! [`Container`](collections::contiguous::Container) collects the list helpers that otherwise get
//! rewritten in every project: negative indexing (`-1` is the last element), membership and
//! removal by value, stack methods, predicates, folds, range-bounded visiting with early exit and
//! copying ranges back out into a [`Vec`].
//!
//! # Strategies
//! Each Container carries its own equality function, [`PartialEq::eq`] by default, and an optional
//! comparator. Different Containers of the same element type can therefore disagree about what
//! "equal" or "smaller" means, without wrapper types. Ordering operations report
//! [`ComparatorNotSet`](collections::contiguous::ComparatorNotSet) instead of guessing.
//!
//! # Error Handling
//! Every bounds or precondition violation is reported through a [`Result`], with a small error
//! struct per condition and enums joining them where an operation can fail in more than one way.
//! All of them implement [`Error`](std::error::Error) and convert into
//! [`ContainerError`](collections::contiguous::ContainerError) for callers that want a single type.
//! No method mutates the Container before its checks pass. Indexing with `container[i]` panics with
//! the error's message instead.
//!
//! # Sorting
//! Besides [`Container::sort`](collections::contiguous::Container::sort), which defers to the
//! standard library, Container implements [`Sortable`](collections::traits::Sortable): the
//! length / less-than / swap contract that the generic [`sort`](collections::traits::sort) and
//! [`search`](collections::traits::search) algorithms are written against.
//!
//! # Features
//! - `log` (default): emits `debug`/`trace` records through the [`log`](https://docs.rs/log)
//!   facade for capacity releases and compaction.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
