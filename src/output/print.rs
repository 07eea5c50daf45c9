// ============================================================================
// Generic Print
// Writes each element of a slice with no separators
// ============================================================================

use std::fmt::Display;
use std::io::{self, Write};

/// Write every element of `items` to `out` in order.
///
/// Nothing is added between elements and no newline is appended; any
/// separators must come from the elements' own `Display` output.
pub fn write_each<W, T>(out: &mut W, items: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    for v in items {
        write!(out, "{}", v)?;
    }
    Ok(())
}

/// Print every element of `items` to standard output in order.
///
/// A failed write is logged and otherwise ignored.
pub fn print<T: Display>(items: &[T]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = write_each(&mut out, items).and_then(|()| out.flush()) {
        tracing::warn!("failed to print {} items: {}", items.len(), err);
    }
}
