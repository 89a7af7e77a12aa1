#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod fmt;
pub mod log;
pub mod panic;
pub mod result;
