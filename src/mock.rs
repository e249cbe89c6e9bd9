//! # Test Doubles
//!
//! Deterministic substitutes for the two injected capabilities. These live in
//! the library (not behind `#[cfg(test)]`) so integration tests in `tests/`
//! can use them too.
//!
//! ## Testing Strategy
//! The emitter's behavior is fully determined by its random draws, so the
//! interesting tests script those draws and assert on the emitted lines:
//!
//! - [`ScriptedRandom`] replays queued tokens and uniform values; it panics if
//!   a test consumes more draws than it scripted, which catches accidental
//!   extra cycles.
//! - [`MemorySink`] captures every emitted line for inspection. It is `Clone`,
//!   so a test can keep a handle while the emitter owns another.
//! - [`FailingSink`] simulates a broken pipe to exercise error propagation.

use crate::sink::EventSink;
use crate::source::RandomSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

/// Random source that replays pre-scripted draws in FIFO order.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    uniforms: VecDeque<f64>,
    tokens: VecDeque<String>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one uniform draw.
    pub fn push_uniform(&mut self, value: f64) -> &mut Self {
        self.uniforms.push_back(value);
        self
    }

    /// Queues one token draw.
    pub fn push_token(&mut self, token: &str) -> &mut Self {
        self.tokens.push_back(token.to_string());
        self
    }

    /// Queues one full cycle worth of draws, in the order the emitter
    /// consumes them: token, customer digit, amount, outcome.
    pub fn push_cycle(&mut self, token: &str, customer: f64, amount: f64, outcome: f64) {
        self.push_token(token)
            .push_uniform(customer)
            .push_uniform(amount)
            .push_uniform(outcome);
    }
}

impl RandomSource for ScriptedRandom {
    fn next_uniform(&mut self) -> f64 {
        self.uniforms
            .pop_front()
            .expect("scripted uniform draws exhausted")
    }

    fn next_token(&mut self) -> String {
        self.tokens.pop_front().expect("scripted tokens exhausted")
    }
}

/// Sink that captures emitted lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn emit(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Sink that fails every write, simulating a broken pipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSink;

#[async_trait]
impl EventSink for FailingSink {
    async fn emit(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_replay_in_order() {
        let mut random = ScriptedRandom::new();
        random.push_token("aaaaaa").push_uniform(0.1).push_uniform(0.2);

        assert_eq!(random.next_token(), "aaaaaa");
        assert_eq!(random.next_uniform(), 0.1);
        assert_eq!(random.next_uniform(), 0.2);
    }

    #[tokio::test]
    async fn memory_sink_captures_lines() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.emit("one").await.unwrap();
        writer.emit("two").await.unwrap();

        assert_eq!(sink.lines(), vec!["one".to_string(), "two".to_string()]);
    }
}
