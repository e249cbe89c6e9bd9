//! # Random Source Capability
//!
//! Randomness is an injected capability rather than a global generator. The
//! emitter only needs two primitives — a uniform draw and a unique token — so
//! that is the whole contract. Tests substitute [`crate::mock::ScriptedRandom`]
//! to pin every draw and make threshold behavior deterministic.

use rand::Rng;
use uuid::Uuid;

/// Source of the random values consumed by the emitter.
///
/// Implementations must uphold two contracts:
/// - [`next_uniform`](RandomSource::next_uniform) returns a value in `[0, 1)`.
/// - [`next_token`](RandomSource::next_token) returns at least six ASCII
///   alphanumeric characters; the emitter truncates to the first six.
pub trait RandomSource: Send {
    /// Uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Unique alphanumeric token, at least six characters long.
    fn next_token(&mut self) -> String;
}

/// Production source: thread-local RNG for uniform draws, UUID v4 hex for
/// order tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn next_token(&mut self) -> String {
        // 32 lowercase hex chars; callers take the leading slice they need.
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_draws_stay_in_unit_interval() {
        let mut source = ThreadRngSource;
        for _ in 0..1_000 {
            let u = source.next_uniform();
            assert!((0.0..1.0).contains(&u), "draw out of range: {u}");
        }
    }

    #[test]
    fn tokens_are_long_enough_and_alphanumeric() {
        let mut source = ThreadRngSource;
        let token = source.next_token();
        assert!(token.len() >= 6);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn tokens_are_unique_across_draws() {
        let mut source = ThreadRngSource;
        let a = source.next_token();
        let b = source.next_token();
        assert_ne!(a, b);
    }
}
