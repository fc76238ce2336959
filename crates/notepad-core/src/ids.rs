//! Note identifier generation.

use rand::Rng;

/// Source of identifiers for newly created notes.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Uniformly random non-negative identifiers.
///
/// Uniqueness is not checked. Two notes drawing the same id collide and the
/// later `put` replaces the earlier note.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> i64 {
        rand::thread_rng().gen_range(0..=i64::MAX)
    }
}
