//! Traits describing collection capabilities, along with algorithms written against them.

mod sortable;
mod tests;

pub use sortable::*;
