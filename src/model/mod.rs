//! # Domain Model
//!
//! Pure data structures for the synthetic order feed. Nothing in this module
//! performs I/O or touches a clock; records are built by the emitter and
//! discarded once their log line has been written.

pub mod order;

pub use order::{OrderEvent, OrderRecord, AMOUNT_MAX, AMOUNT_MIN};
