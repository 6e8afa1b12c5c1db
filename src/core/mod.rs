//! Core types shared across the codebase.

mod priority;

pub use priority::Priority;
