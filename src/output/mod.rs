// ============================================================================
// Output Module
// Generic printing of sequences
// ============================================================================

mod print;

pub use print::{print, write_each};
