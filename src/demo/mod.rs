// ============================================================================
// Demo Runner
// Sums the fixed tables every supported way, then prints the sequences
// ============================================================================

use crate::domain::{DemoConfig, SumReport, FLOATS, INTS};
use crate::interfaces::{do_work, Worker};
use crate::output::write_each;
use crate::sum::{sum_floats, sum_ints, sum_ints_or_floats, sum_numbers};
use std::io::{self, Write};

/// Build the three generic summation reports for the fixed tables.
///
/// Order: explicit type arguments, inferred type arguments, named constraint.
pub fn generic_reports() -> [SumReport; 3] {
    [
        SumReport::new(
            "Generic Sums",
            sum_ints_or_floats::<&str, i64, _>(&*INTS),
            sum_ints_or_floats::<&str, f64, _>(&*FLOATS),
        ),
        SumReport::new(
            "Generic Sums, type parameters inferred",
            sum_ints_or_floats(&*INTS),
            sum_ints_or_floats(&*FLOATS),
        ),
        SumReport::new(
            "Generic Sums with Constraint",
            sum_numbers(&*INTS),
            sum_numbers(&*FLOATS),
        ),
    ]
}

/// Run the demo, writing all output to `out`.
///
/// With the default configuration this writes exactly:
///
/// ```text
/// Generic Sums: 46 and 62.97
/// Generic Sums, type parameters inferred: 46 and 62.97
/// Generic Sums with Constraint: 46 and 62.97
/// Hello, playground
/// 123
/// ```
///
/// with no newline after `123`. Configured workers follow on a new line.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> io::Result<()> {
    tracing::debug!(
        "Non-generic sums: {} and {}",
        sum_ints(&INTS),
        sum_floats(&FLOATS)
    );

    for report in generic_reports() {
        writeln!(out, "{}", report)?;
    }

    write_each(out, &config.strings)?;
    write_each(out, &config.integers)?;

    if !config.workers.is_empty() {
        let workers: Vec<Worker> = config.workers.iter().map(Worker::new).collect();
        writeln!(out)?;
        do_work(&workers, out)?;
    }

    out.flush()?;
    tracing::info!("demo run complete");
    Ok(())
}
