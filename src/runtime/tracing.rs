/// Initializes the tracing/logging infrastructure for the application.
///
/// Diagnostic logs (emitter lifecycle, per-cycle debug output) go through the
/// `tracing` crate; the JSON order line itself is data-plane output and goes
/// to the event sink, not here.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control diagnostic verbosity:
/// - `RUST_LOG=info` - Lifecycle messages only
/// - `RUST_LOG=debug` - One structured debug line per cycle
/// - `RUST_LOG=order_pulse=debug` - Debug only for this crate
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    // Diagnostics go to stderr so they never interleave with the JSON
    // event lines on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
