// ============================================================================
// Fixed Tables
// Process-wide read-only maps summed by the demo
// ============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

/// Integer table: `{"first": 34, "second": 12}`
pub static INTS: LazyLock<HashMap<&'static str, i64>> =
    LazyLock::new(|| HashMap::from([("first", 34), ("second", 12)]));

/// Float table: `{"first": 35.98, "second": 26.99}`
pub static FLOATS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| HashMap::from([("first", 35.98), ("second", 26.99)]));
