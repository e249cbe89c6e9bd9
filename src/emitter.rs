//! # Order Emitter Loop
//!
//! The heart of the system: one sequential loop that fabricates an order,
//! assigns an outcome, optionally sleeps to simulate a slow cycle, writes one
//! JSON line, cools down, and repeats.
//!
//! # Architecture Note
//! The emitter owns its two capabilities ([`RandomSource`] and [`EventSink`])
//! by value and processes cycles strictly one at a time. There is no shared
//! mutable state between cycles: every [`OrderRecord`] is built, emitted, and
//! dropped within a single call to [`OrderEmitter::run_cycle`]. The only
//! suspension points are the two timed pauses, and the shutdown signal is
//! observed at the cooldown rather than looping unconditionally forever.

use crate::error::EmitterError;
use crate::model::{OrderEvent, OrderRecord, AMOUNT_MAX, AMOUNT_MIN};
use crate::sink::EventSink;
use crate::source::RandomSource;
use chrono::{SecondsFormat, Utc};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

/// Extra wall-clock pause taken when a cycle draws [`OrderEvent::ProcessingDelay`].
pub const PROCESSING_DELAY: Duration = Duration::from_millis(3000);

/// Fixed pause between consecutive cycles.
pub const CYCLE_COOLDOWN: Duration = Duration::from_millis(1000);

/// Produces one synthetic order-outcome record per cycle.
///
/// Generic over its random source and output sink so tests can swap in the
/// deterministic doubles from [`crate::mock`].
pub struct OrderEmitter<R, S> {
    random: R,
    sink: S,
}

impl<R: RandomSource, S: EventSink> OrderEmitter<R, S> {
    pub fn new(random: R, sink: S) -> Self {
        Self { random, sink }
    }

    /// Runs one full cycle: synthesize, classify, optionally delay, emit.
    ///
    /// Draw order within a cycle is fixed: token, customer digit, amount,
    /// outcome. Scripted test sources rely on that order.
    ///
    /// The emitted line is the observable effect; the record is also returned
    /// so callers and tests can inspect what was written.
    pub async fn run_cycle(&mut self) -> Result<OrderRecord, EmitterError> {
        let token = self.random.next_token();
        let order_id = format!("ORD-{}", &token[..6]);
        let customer_id = format!("CUST-{}", (self.random.next_uniform() * 10.0) as u32);
        let amount_span = f64::from(AMOUNT_MAX - AMOUNT_MIN + 1);
        let amount = AMOUNT_MIN + (self.random.next_uniform() * amount_span) as u32;

        let start = Instant::now();
        let outcome = self.random.next_uniform();
        let event = OrderEvent::from_outcome(outcome);

        if event == OrderEvent::ProcessingDelay {
            // Real elapsed time, not simulated retroactively: the delay
            // inflates processing_time_ms below.
            sleep(PROCESSING_DELAY).await;
        }

        let record = OrderRecord {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            order_id,
            customer_id,
            event,
            amount,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        let line = serde_json::to_string(&record)?;
        self.sink.emit(&line).await?;

        debug!(
            order_id = %record.order_id,
            event = %record.event,
            amount = record.amount,
            processing_time_ms = record.processing_time_ms,
            "cycle emitted"
        );
        Ok(record)
    }

    /// Runs cycles until the shutdown signal fires.
    ///
    /// The signal is checked at the top of each iteration and raced against
    /// the cooldown pause. A cycle that has already started always completes,
    /// including its processing delay, so every started cycle emits exactly
    /// one record. Dropping the [`watch::Sender`] also stops the loop.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<(), EmitterError> {
        info!("order emitter started");
        loop {
            if *shutdown.borrow() {
                break;
            }
            self.run_cycle().await?;
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = sleep(CYCLE_COOLDOWN) => {}
            }
        }
        info!("order emitter stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FailingSink, MemorySink, ScriptedRandom};

    fn emitter_with(
        random: ScriptedRandom,
        sink: MemorySink,
    ) -> OrderEmitter<ScriptedRandom, MemorySink> {
        OrderEmitter::new(random, sink)
    }

    #[tokio::test(start_paused = true)]
    async fn cycle_fields_follow_the_formats() {
        let mut random = ScriptedRandom::new();
        random.push_cycle("a1b2c3d4", 0.75, 0.5, 0.99);
        let sink = MemorySink::new();
        let mut emitter = emitter_with(random, sink.clone());

        let record = emitter.run_cycle().await.unwrap();

        assert_eq!(record.order_id, "ORD-a1b2c3");
        assert_eq!(record.customer_id, "CUST-7");
        assert_eq!(record.amount, 2600);
        assert_eq!(record.event, OrderEvent::OrderSuccess);
        assert_eq!(sink.lines().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn amount_covers_the_closed_range() {
        let mut random = ScriptedRandom::new();
        random.push_cycle("000000", 0.0, 0.0, 0.99);
        random.push_cycle("000000", 0.0, 0.9999999, 0.99);
        let mut emitter = emitter_with(random, MemorySink::new());

        let low = emitter.run_cycle().await.unwrap();
        let high = emitter.run_cycle().await.unwrap();
        assert_eq!(low.amount, 100);
        assert_eq!(high.amount, 5099);
    }

    #[tokio::test(start_paused = true)]
    async fn sink_failure_propagates() {
        let mut random = ScriptedRandom::new();
        random.push_cycle("deadbe", 0.1, 0.1, 0.99);
        let mut emitter = OrderEmitter::new(random, FailingSink);

        let result = emitter.run_cycle().await;
        assert!(matches!(result, Err(EmitterError::Sink(_))));
    }
}
