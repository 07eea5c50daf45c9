// ============================================================================
// Generic Sums Library
// Type-specific and trait-bounded summation over numeric maps
// ============================================================================

//! # Generic Sums
//!
//! Adds up the values of string-keyed numeric maps four ways, from one
//! function per value type down to a single function bounded by a named
//! constraint.
//!
//! ## Features
//!
//! - **Type-specific sums** for `i64` and `f64` maps
//! - **Generic sums** with inline bounds or the sealed [`numeric::Number`] trait
//! - **Checked summation** that reports overflow as a [`numeric::NumericError`]
//! - **Generic print** for any slice of `Display` values
//! - **Work capability** trait for generic code that calls methods on elements
//!
//! ## Example
//!
//! ```rust
//! use generic_sums::prelude::*;
//! use std::collections::HashMap;
//!
//! let ints = HashMap::from([("first", 34i64), ("second", 12)]);
//! assert_eq!(sum_ints(&ints), 46);
//! assert_eq!(sum_numbers(&ints), 46);
//!
//! let floats = HashMap::from([("first", 35.98f64), ("second", 26.99)]);
//! assert!((sum_numbers(&floats) - 62.97).abs() < 1e-9);
//!
//! let mut out = Vec::new();
//! write_each(&mut out, &[1, 2, 3]).unwrap();
//! assert_eq!(out, b"123");
//! ```

pub mod demo;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod output;
pub mod sum;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{DemoConfig, SumReport, FLOATS, INTS};
    pub use crate::interfaces::{do_work, Work, Worker};
    pub use crate::numeric::{Number, NumericError, NumericResult};
    pub use crate::output::{print, write_each};
    pub use crate::sum::{sum_floats, sum_ints, sum_ints_or_floats, sum_numbers, try_sum_numbers};
}
