//! # Event Sink Capability
//!
//! The emitter's only observable effect is one written line per cycle, so the
//! output side is a single-method trait: "write one line". The production
//! sink is stdout; tests use [`crate::mock::MemorySink`] to capture lines
//! in memory.

use async_trait::async_trait;
use std::io::{self, Write};

/// Line-oriented output sink for emitted order records.
///
/// There is no buffering, retry, or alternate sink: a write failure is
/// returned to the caller, which is expected to let it propagate and
/// terminate the process.
#[async_trait]
pub trait EventSink: Send {
    /// Writes one complete line (the newline is appended by the sink).
    async fn emit(&mut self, line: &str) -> io::Result<()>;
}

/// Production sink: one line per record on standard output.
///
/// A broken pipe (e.g. a downstream log collector going away) surfaces as an
/// `Err` from `emit`; there is no recovery semantic.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

#[async_trait]
impl EventSink for StdoutSink {
    async fn emit(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}
