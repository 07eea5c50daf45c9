// ============================================================================
// Generic Sums Demo
// ============================================================================

use generic_sums::demo;
use generic_sums::domain::DemoConfig;
use std::io;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = DemoConfig::default();
    if let Err(reason) = config.validate() {
        tracing::error!("invalid demo configuration: {}", reason);
        return;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = demo::run(&config, &mut out) {
        tracing::warn!("failed to write demo output: {}", err);
    }
}
