// ============================================================================
// Demo Configuration
// Inputs for the print and work sections of the demo run
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a demo run.
///
/// The summation section always uses the fixed tables; this struct only
/// controls what the print calls receive and whether workers report in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemoConfig {
    /// Strings printed back to back
    pub strings: Vec<String>,

    /// Integers printed back to back, no separators
    pub integers: Vec<i64>,

    /// Worker names; empty means the work section is skipped
    pub workers: Vec<String>,
}

impl DemoConfig {
    /// Create a new configuration with the print sequences
    pub fn new(strings: Vec<String>, integers: Vec<i64>) -> Self {
        Self {
            strings,
            integers,
            workers: Vec::new(),
        }
    }

    /// Builder method: Replace the printed strings
    pub fn with_strings<I, S>(mut self, strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings = strings.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Replace the printed integers
    pub fn with_integers(mut self, integers: Vec<i64>) -> Self {
        self.integers = integers;
        self
    }

    /// Builder method: Add workers to the run
    pub fn with_workers<I, S>(mut self, workers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workers = workers.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.workers.iter().any(|name| name.trim().is_empty()) {
            return Err("Worker names cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(
            vec!["Hello, ".to_string(), "playground\n".to_string()],
            vec![1, 2, 3],
        )
    }
}
