// ============================================================================
// Summation Module
// Type-specific, inline-bounded and constraint-bounded map summation
// ============================================================================
//
// Four ways to add up the values of a map:
// - sum_ints / sum_floats: one function per value type
// - sum_ints_or_floats: one generic function, bounds spelled out inline
// - sum_numbers: the same function over the named `Number` constraint
// - try_sum_numbers: checked accumulation, reports overflow instead of
//   following native integer arithmetic
//
// All of them visit every entry exactly once. Map iteration order is
// unspecified, so float results may differ in the last bits between calls
// on equal maps.

use crate::numeric::{Number, NumericResult};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

/// Add together the values of `m`.
pub fn sum_ints(m: &HashMap<&str, i64>) -> i64 {
    let mut s: i64 = 0;
    for v in m.values() {
        s += v;
    }
    s
}

/// Add together the values of `m`.
pub fn sum_floats(m: &HashMap<&str, f64>) -> f64 {
    let mut s: f64 = 0.0;
    for v in m.values() {
        s += v;
    }
    s
}

/// Sum the values of `m` for any value type that can be added and has a
/// default (zero) value.
///
/// # Example
/// ```
/// use generic_sums::sum::sum_ints_or_floats;
/// use std::collections::HashMap;
///
/// let ints = HashMap::from([("first", 34i64), ("second", 12)]);
/// let floats = HashMap::from([("first", 0.5f64), ("second", 0.25)]);
///
/// // Type arguments spelled out...
/// assert_eq!(sum_ints_or_floats::<&str, i64, _>(&ints), 46);
/// // ...or inferred from the argument.
/// assert_eq!(sum_ints_or_floats(&floats), 0.75);
/// ```
pub fn sum_ints_or_floats<K, V, S>(m: &HashMap<K, V, S>) -> V
where
    K: Eq + Hash,
    V: Copy + Default + Add<Output = V>,
{
    let mut s = V::default();
    for &v in m.values() {
        s = s + v;
    }
    s
}

/// Sum the values of `m`. Supports both integers and floats as map values.
pub fn sum_numbers<K, V, S>(m: &HashMap<K, V, S>) -> V
where
    K: Eq + Hash,
    V: Number,
{
    m.values().fold(V::ZERO, |acc, &v| acc + v)
}

/// Checked variant of [`sum_numbers`].
///
/// # Errors
/// Returns the first [`NumericError`](crate::numeric::NumericError) hit while
/// accumulating: `Overflow`/`Underflow` when the running sum leaves the
/// representable range, `InvalidInput` for a non-finite float value.
pub fn try_sum_numbers<K, V, S>(m: &HashMap<K, V, S>) -> NumericResult<V>
where
    K: Eq + Hash,
    V: Number,
{
    m.values()
        .try_fold(V::ZERO, |acc, &v| acc.checked_accumulate(v))
        .inspect_err(|err| {
            tracing::debug!(
                value_type = V::NAME,
                entries = m.len(),
                "checked summation failed: {}",
                err
            );
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FLOATS, INTS};
    use crate::numeric::NumericError;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_sum_ints_fixed_table() {
        assert_eq!(sum_ints(&INTS), 46);
    }

    #[test]
    fn test_sum_floats_fixed_table() {
        assert!((sum_floats(&FLOATS) - 62.97).abs() < EPSILON);
    }

    #[test]
    fn test_generic_sums_fixed_tables() {
        assert_eq!(sum_ints_or_floats::<&str, i64, _>(&*INTS), 46);
        assert!((sum_ints_or_floats::<&str, f64, _>(&*FLOATS) - 62.97).abs() < EPSILON);

        assert_eq!(sum_numbers(&*INTS), 46);
        assert!((sum_numbers(&*FLOATS) - 62.97).abs() < EPSILON);
    }

    #[test]
    fn test_empty_maps_sum_to_zero() {
        let ints: HashMap<&str, i64> = HashMap::new();
        let floats: HashMap<&str, f64> = HashMap::new();

        assert_eq!(sum_ints(&ints), 0);
        assert_eq!(sum_floats(&floats), 0.0);
        assert_eq!(sum_ints_or_floats(&ints), 0);
        assert_eq!(sum_ints_or_floats(&floats), 0.0);
        assert_eq!(sum_numbers(&ints), 0);
        assert_eq!(sum_numbers(&floats), 0.0);
        assert_eq!(try_sum_numbers(&ints), Ok(0));
        assert_eq!(try_sum_numbers(&floats), Ok(0.0));
    }

    #[test]
    fn test_non_string_keys() {
        let m: HashMap<u32, i64> = HashMap::from([(1, -5), (2, 5), (3, 7)]);
        assert_eq!(sum_ints_or_floats(&m), 7);
        assert_eq!(sum_numbers(&m), 7);
    }

    #[test]
    fn test_try_sum_overflow() {
        let m = HashMap::from([("a", i64::MAX), ("b", 1)]);
        assert_eq!(try_sum_numbers(&m), Err(NumericError::Overflow));
    }

    #[test]
    fn test_try_sum_underflow() {
        let m = HashMap::from([("a", i64::MIN), ("b", -1)]);
        assert_eq!(try_sum_numbers(&m), Err(NumericError::Underflow));
    }

    #[test]
    fn test_try_sum_float_errors() {
        let nan = HashMap::from([("a", 1.0), ("b", f64::NAN)]);
        assert_eq!(try_sum_numbers(&nan), Err(NumericError::InvalidInput));

        let huge = HashMap::from([("a", f64::MAX), ("b", f64::MAX)]);
        assert_eq!(try_sum_numbers(&huge), Err(NumericError::Overflow));
    }

    #[test]
    fn test_try_sum_matches_fixed_tables() {
        assert_eq!(try_sum_numbers(&*INTS), Ok(46));
        let floats = try_sum_numbers(&*FLOATS).unwrap();
        assert!((floats - 62.97).abs() < EPSILON);
    }

    fn close(a: f64, b: f64, scale: f64) -> bool {
        (a - b).abs() <= EPSILON * (scale + 1.0)
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_int_sum_is_order_independent(
                m in prop::collection::hash_map("[a-z]{1,8}", -1_000_000_000i64..1_000_000_000, 0..64)
            ) {
                let mut values: Vec<i64> = m.values().copied().collect();
                values.sort_unstable();
                let ascending: i64 = values.iter().sum();
                let descending: i64 = values.iter().rev().sum();

                prop_assert_eq!(sum_numbers(&m), ascending);
                prop_assert_eq!(sum_numbers(&m), descending);
            }

            #[test]
            fn prop_float_sum_is_order_independent(
                m in prop::collection::hash_map("[a-z]{1,8}", -1.0e6f64..1.0e6, 0..64)
            ) {
                let mut values: Vec<f64> = m.values().copied().collect();
                values.sort_by(|a, b| a.total_cmp(b));
                let ascending: f64 = values.iter().sum();
                let descending: f64 = values.iter().rev().sum();
                let scale: f64 = values.iter().map(|v| v.abs()).sum();

                let total = sum_numbers(&m);
                prop_assert!(close(total, ascending, scale));
                prop_assert!(close(total, descending, scale));
            }

            #[test]
            fn prop_inline_and_named_bounds_agree(
                ints in prop::collection::hash_map(any::<String>(), -1_000_000_000i64..1_000_000_000, 0..32),
                floats in prop::collection::hash_map(any::<u16>(), -1.0e6f64..1.0e6, 0..32),
            ) {
                prop_assert_eq!(sum_ints_or_floats(&ints), sum_numbers(&ints));

                // Same map, same iteration order, same rounding.
                prop_assert_eq!(sum_ints_or_floats(&floats), sum_numbers(&floats));
            }

            #[test]
            fn prop_type_specific_matches_generic(
                m in prop::collection::hash_map("[a-z]{1,8}", -1_000_000_000i64..1_000_000_000, 0..32)
            ) {
                let borrowed: HashMap<&str, i64> =
                    m.iter().map(|(k, &v)| (k.as_str(), v)).collect();
                prop_assert_eq!(sum_ints(&borrowed), sum_numbers(&m));
            }
        }

        quickcheck::quickcheck! {
            fn qc_checked_matches_unchecked(entries: HashMap<String, i32>) -> bool {
                let m: HashMap<String, i64> = entries
                    .into_iter()
                    .map(|(k, v)| (k, i64::from(v)))
                    .collect();
                try_sum_numbers(&m) == Ok(sum_numbers(&m))
            }
        }
    }
}
