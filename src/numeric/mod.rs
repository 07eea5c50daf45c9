// ============================================================================
// Numeric Module
// The closed set of value types eligible for generic summation
// ============================================================================
//
// This module provides:
// - Number: sealed constraint implemented for i64 and f64 only
// - NumericError: Error types for checked accumulation
//
// Code outside this crate can name `Number` in bounds but cannot add types to it.

mod errors;
mod number;

pub use errors::{NumericError, NumericResult};
pub use number::Number;
