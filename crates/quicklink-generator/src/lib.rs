//! Short code generators.
//!
//! A [`Generator`] draws candidate codes; [`Generator::allocate`] turns those
//! draws into a code that is not already taken.

pub mod error;
pub mod random;
pub mod seq;

pub use error::Error;
pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use quicklink_core::ShortCode;
use std::collections::HashSet;
use tracing::trace;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is established by [`Generator::allocate`] against the set of
/// codes the caller already holds.
pub trait Generator: Send + Sync + 'static {
    /// Draws one candidate code. Consecutive draws may repeat.
    fn generate(&self) -> ShortCode;

    /// Draws until the candidate is absent from `existing`.
    ///
    /// There is no retry limit. The caller must make sure the code space is
    /// not exhausted, otherwise this never returns.
    fn allocate(&self, existing: &HashSet<ShortCode>) -> ShortCode {
        let mut attempts: u64 = 1;
        loop {
            let code = self.generate();
            if !existing.contains(&code) {
                trace!(code = %code, attempts, "allocated short code");
                return code;
            }
            trace!(code = %code, attempts, "short code already taken, drawing again");
            attempts += 1;
        }
    }
}
