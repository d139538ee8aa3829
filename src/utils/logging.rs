// src/utils/logging.rs
use std::panic;
use std::thread;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber and routes panic reports through it.
/// Filters come from `RUST_LOG`; without it everything at INFO and above is shown.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();

    // Decoder panics on worker threads are caught and recorded per file, so they only
    // show up at DEBUG. A panic on the main thread ends the run and is logged as an error.
    panic::set_hook(Box::new(|info| {
        let current = thread::current();
        let name = current.name().unwrap_or("<unnamed>");
        if panic_ends_run(current.name()) {
            tracing::error!("Thread '{}' {}", name, info);
        } else {
            tracing::debug!("Thread '{}' {}", name, info);
        }
    }));

    tracing::debug!("Logging setup complete.");
}

fn panic_ends_run(thread_name: Option<&str>) -> bool {
    thread_name == Some("main")
}
