//! Structured logging using **tracing**.
//!
//! Library code only emits events (`debug!` for analysis decisions, `info!`
//! per generated file, `warn!` for skipped files). Installing a subscriber is
//! left to the binary, which calls [`init_structured_logging`] once.

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's runtime.
/// It configures structured JSON output to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=casegen_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // stdout stays clean for reports
        .with_writer(std::io::stderr)
        .init();
}
