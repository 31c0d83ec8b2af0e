//! src/rng.rs
//!
//! Randomness per worker. Er is nooit een gedeelde generator: elke worker krijgt
//! bij de start één eigen `ChaCha8Rng`.
//! - Met een vaste seed: dezelfde seed, maar een eigen ChaCha-stream per worker,
//!   zodat de permutaties van gelijktijdige trials niet gecorreleerd zijn.
//! - Zonder seed: eenmalig geseed uit `OsRng`. Faalt de OS-bron, dan faalt de
//!   run meteen in plaats van terug te vallen op een vaste volgorde.

use crate::error::SampleError;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator voor worker `stream`.
pub fn worker_rng(seed: Option<u64>, stream: u64) -> Result<ChaCha8Rng, SampleError> {
    match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(stream);
            Ok(rng)
        }
        None => Ok(ChaCha8Rng::from_rng(OsRng)?),
    }
}
