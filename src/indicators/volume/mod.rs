//! Volume context: trailing average vs. latest

pub mod summary;

pub use summary::*;
