// ============================================================================
// Domain Models Module
// Fixed input tables, run configuration and result reports
// ============================================================================

pub mod config;
pub mod report;
pub mod tables;

pub use config::DemoConfig;
pub use report::SumReport;
pub use tables::{FLOATS, INTS};
