// ============================================================================
// Interfaces Module
// Capability traits for generic code
// ============================================================================

mod work;

pub use work::{do_work, Work, Worker};
