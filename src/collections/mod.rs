//! General-purpose collection types.
//!
//! # Purpose
//! [`Container`](contiguous::Container) is a list with the conveniences of a scripting language's
//! array: negative indexing, membership by a pluggable equality, stack methods, folds and
//! range-bounded visiting with early exit.

pub mod contiguous;
pub mod traits;
