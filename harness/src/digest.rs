//! Content digest of a solution, for cross-run and cross-process
//! determinism checks.

use sha2::{Digest, Sha256};

use crate::state::AggState;

/// Domain prefix separating solution digests from any other SHA-256 use.
pub const DOMAIN_SOLUTION: &[u8] = b"MUSCLE::SOLUTION::V1\0";

/// `sha256:<hex>` over the unit names in order, the total length, and the
/// corridor segments. Floats are hashed by bit pattern.
#[must_use]
pub fn solution_digest(state: &AggState) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_SOLUTION);
    hasher.update((state.sequence().len() as u64).to_le_bytes());
    for action in state.sequence() {
        hasher.update(action.name().as_bytes());
        hasher.update([0u8]);
    }
    hasher.update(state.total_length().to_bits().to_le_bytes());
    for length in state.corridor_lengths() {
        hasher.update(length.to_bits().to_le_bytes());
    }
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
