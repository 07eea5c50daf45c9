// ============================================================================
// Work Capability
// Trait for elements that know how to do work, and a driver over slices
// ============================================================================

use std::fmt;
use std::io::{self, Write};

/// Something that can do work and report on it.
///
/// Generic code can only call `work` on a type parameter bounded by this
/// trait; an unbounded `T` exposes no such method.
pub trait Work {
    /// Do the work, writing a progress line to `out`.
    fn work(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A named worker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Worker(pub String);

impl Worker {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Work for Worker {
    fn work(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} is working", self.0)
    }
}

impl<T: Work + ?Sized> Work for Box<T> {
    fn work(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).work(out)
    }
}

/// Call [`Work::work`] on every element of `things`, in order.
pub fn do_work<T: Work>(things: &[T], out: &mut dyn Write) -> io::Result<()> {
    for v in things {
        v.work(out)?;
    }
    tracing::debug!("{} workers reported", things.len());
    Ok(())
}
