// ============================================================================
// Sum Report
// One labelled line pairing an integer sum with a float sum
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of summing both fixed tables through one summation strategy.
///
/// Renders as `"{label}: {int_sum} and {float_sum}"`, using the shortest
/// representation that round-trips for the float.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SumReport {
    /// Human-readable description of the strategy
    pub label: String,

    /// Sum of the integer table
    pub int_sum: i64,

    /// Sum of the float table
    pub float_sum: f64,
}

impl SumReport {
    pub fn new(label: impl Into<String>, int_sum: i64, float_sum: f64) -> Self {
        Self {
            label: label.into(),
            int_sum,
            float_sum,
        }
    }

    /// Serialize the report as a JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} and {}", self.label, self.int_sum, self.float_sum)
    }
}
