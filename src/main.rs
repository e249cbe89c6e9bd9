//! # Order Pulse
//!
//! Binary entry point for the synthetic order feed.
//!
//! Wires the production capabilities together and runs the emitter until the
//! process receives Ctrl-C:
//! 1. Set up tracing (diagnostics on stderr, `RUST_LOG`-filtered).
//! 2. Bridge Ctrl-C to a watch channel the emitter observes at each cooldown.
//! 3. Run the [`OrderEmitter`] with the thread RNG source and stdout sink.
//!
//! The process takes no arguments and produces unbounded output until
//! terminated. A sink failure (e.g. broken pipe) propagates out of `run` and
//! ends the process with a nonzero status.

use order_pulse::runtime::setup_tracing;
use order_pulse::{EmitterError, OrderEmitter, StdoutSink, ThreadRngSource};
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), EmitterError> {
    setup_tracing();

    info!("Starting synthetic order feed");

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            let _ = stop_tx.send(true);
        }
    });

    let mut emitter = OrderEmitter::new(ThreadRngSource, StdoutSink);
    if let Err(e) = emitter.run(stop_rx).await {
        error!(error = %e, "Emitter terminated with error");
        return Err(e);
    }

    info!("Order feed stopped cleanly");
    Ok(())
}
