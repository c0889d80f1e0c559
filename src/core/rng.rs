//! Deterministic selection for abilities that pick among candidates.
//!
//! ## Key Properties
//!
//! - **Deterministic**: the same match seed produces identical picks on
//!   every validating node, regardless of platform.
//! - **Fresh per invocation**: a new generator is built from the match seed
//!   for every ability invocation that needs randomness. There is no shared
//!   long-lived stream, so adding unrelated randomness between the seed
//!   point and a draw can never shift an existing pick.
//! - **Permutation, indexed pick**: selection shuffles the candidate index
//!   range once and the k-th pick within an invocation consumes permutation
//!   slot k.
//!
//! ```
//! use duelcore::core::SelectionRng;
//!
//! // Same seed, same candidate count: the pick never changes.
//! let a = SelectionRng::pick_slot(42, 5, 0);
//! let b = SelectionRng::pick_slot(42, 5, 0);
//! assert_eq!(a, b);
//!
//! // No candidates: no pick.
//! assert_eq!(SelectionRng::pick_slot(42, 0, 0), None);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded generator used for all in-match random selection.
///
/// Uses ChaCha8 for speed while keeping a platform-independent sequence.
#[derive(Clone, Debug)]
pub struct SelectionRng {
    inner: ChaCha8Rng,
}

impl SelectionRng {
    /// Create a generator from the match seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same seed and context always produce the same stream. Used to
    /// keep deck shuffling separate from in-match ability selection.
    #[must_use]
    pub fn for_context(seed: u64, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Produce a permutation of `0..len`.
    #[must_use]
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        self.shuffle(&mut indices);
        indices
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// The "new generator, permutation, indexed pick" pattern.
    ///
    /// Builds a fresh generator from `seed`, permutes the candidate index
    /// range, and returns the index sitting in permutation slot
    /// `slot % len`. Returns `None` when there are no candidates.
    #[must_use]
    pub fn pick_slot(seed: u64, len: usize, slot: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let perm = Self::new(seed).permutation(len);
        Some(perm[slot % len])
    }
}
