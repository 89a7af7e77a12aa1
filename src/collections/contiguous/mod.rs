//! Contiguous collection types. Namely [`Container`], a growable list addressed by signed indices.

pub mod container;

#[doc(inline)]
pub use container::*;
