use fwl_hash::stable_hash_code;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::entropy::{EntropySource, SystemEntropy};

/// The string whose hash forms the high half of a UID.
pub fn identity_string(host_name: &str, world_name: &str, world_seed: &str) -> String {
    format!("{host_name}:{world_name}:{world_seed}")
}

/// Non-negative 31-bit value drawn from a PRNG seeded with `random_seed`.
///
/// The same seed always yields the same value.
pub fn random_component(random_seed: i64) -> i64 {
    let mut rng = ChaCha8Rng::seed_from_u64(random_seed as u64);
    i64::from(rng.next_u32() >> 1)
}

/// Derive a world UID from explicit inputs. Pure.
pub fn generate_uid(host_name: &str, world_name: &str, world_seed: &str, random_seed: i64) -> i64 {
    let hash = stable_hash_code(&identity_string(host_name, world_name, world_seed));
    (i64::from(hash) << 32).wrapping_add(random_component(random_seed))
}

/// Generates world UIDs using host inputs from an [`EntropySource`].
#[derive(Clone, Debug, Default)]
pub struct UidGenerator<E = SystemEntropy> {
    entropy: E,
}

impl UidGenerator<SystemEntropy> {
    /// Generator backed by the real host name and the system clock.
    pub fn system() -> Self {
        Self::new(SystemEntropy)
    }
}

impl<E: EntropySource> UidGenerator<E> {
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Generate a UID for a world with the given name and seed.
    pub fn generate(&self, world_name: &str, world_seed: &str) -> i64 {
        let host_name = self.entropy.host_name();
        let random_seed = self.entropy.random_seed();
        let uid = generate_uid(&host_name, world_name, world_seed, random_seed);
        trace!(host = %host_name, world = %world_name, uid, "generated world uid");
        uid
    }

    pub fn entropy(&self) -> &E {
        &self.entropy
    }
}
