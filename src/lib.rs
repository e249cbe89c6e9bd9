//! # Order Pulse
//!
//! A synthetic order-event generator: a single sequential loop that fabricates
//! a fake e-commerce order each cycle, assigns an outcome by weighted random
//! selection, optionally pauses to simulate processing latency, and emits one
//! structured JSON line per cycle.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`OrderRecord`], [`OrderEvent`]) and the
//!   outcome threshold mapping.
//! - **[source]**: The [`RandomSource`] capability — uniform draws and unique
//!   tokens, injected so tests can substitute deterministic scripts.
//! - **[sink]**: The [`EventSink`] capability — "write one line" to stdout or
//!   anywhere else line-oriented.
//! - **[emitter]**: The [`OrderEmitter`] loop that ties the capabilities
//!   together: one record per cycle, a conditional 3000 ms processing delay,
//!   and a fixed 1000 ms cooldown between cycles.
//! - **[runtime]**: Tracing/logging setup for the binary.
//! - **[mock]**: Deterministic test doubles ([`mock::ScriptedRandom`],
//!   [`mock::MemorySink`]) for unit and integration tests.
//!
//! ## Concurrency Model
//!
//! Strictly sequential: no two cycles ever overlap. The only suspension points
//! are the two timed pauses, and the loop checks its shutdown signal at each
//! cooldown rather than spinning forever unconditionally.
//!
//! ## Quick Start
//!
//! ```no_run
//! use order_pulse::{OrderEmitter, StdoutSink, ThreadRngSource};
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), order_pulse::EmitterError> {
//!     let (_stop, stop_rx) = watch::channel(false);
//!     let mut emitter = OrderEmitter::new(ThreadRngSource, StdoutSink);
//!     emitter.run(stop_rx).await
//! }
//! ```

pub mod emitter;
pub mod error;
pub mod mock;
pub mod model;
pub mod runtime;
pub mod sink;
pub mod source;

// Re-export core types for convenience
pub use emitter::OrderEmitter;
pub use error::EmitterError;
pub use model::{OrderEvent, OrderRecord};
pub use sink::{EventSink, StdoutSink};
pub use source::{RandomSource, ThreadRngSource};
