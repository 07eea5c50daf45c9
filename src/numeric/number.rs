// ============================================================================
// Number Constraint
// Named, reusable bound for "one of the supported numeric types"
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::ops::Add;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A value type that generic summation accepts: `i64` or `f64`.
///
/// The trait is sealed, so the set of implementors is closed. It carries the
/// two capabilities summation needs, an additive identity (`ZERO`) and
/// addition, plus a checked form of addition for callers that want overflow
/// reported instead of following native arithmetic.
///
/// # Example
/// ```
/// use generic_sums::numeric::Number;
///
/// fn total<V: Number>(values: &[V]) -> V {
///     values.iter().fold(V::ZERO, |acc, &v| acc + v)
/// }
///
/// assert_eq!(total(&[1i64, 2, 3]), 6);
/// assert_eq!(total::<f64>(&[]), 0.0);
/// ```
pub trait Number:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + Add<Output = Self>
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Additive identity
    const ZERO: Self;

    /// Short type name, used in log output
    const NAME: &'static str;

    /// Add `rhs`, reporting overflow or non-finite values as an error.
    ///
    /// # Errors
    /// - `Overflow` / `Underflow` if the result leaves the representable range
    /// - `InvalidInput` if either operand is not finite (floats only)
    fn checked_accumulate(self, rhs: Self) -> NumericResult<Self>;
}

impl Number for i64 {
    const ZERO: Self = 0;
    const NAME: &'static str = "i64";

    #[inline]
    fn checked_accumulate(self, rhs: Self) -> NumericResult<Self> {
        self.checked_add(rhs).ok_or(if rhs > 0 {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })
    }
}

impl Number for f64 {
    const ZERO: Self = 0.0;
    const NAME: &'static str = "f64";

    #[inline]
    fn checked_accumulate(self, rhs: Self) -> NumericResult<Self> {
        if !self.is_finite() || !rhs.is_finite() {
            return Err(NumericError::InvalidInput);
        }

        let sum = self + rhs;
        if sum.is_finite() {
            Ok(sum)
        } else if sum > 0.0 {
            Err(NumericError::Overflow)
        } else {
            Err(NumericError::Underflow)
        }
    }
}
