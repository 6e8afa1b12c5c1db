//! Path utilities.
//!
//! Pure functions for site path manipulation. No side effects.
//!
//! - [`route`]: Site path canonicalization (`normalize_path`, `strip_leading_slash`, `join_index`)

pub mod route;

pub use route::{join_index, normalize_path, strip_leading_slash, with_leading_slash};
