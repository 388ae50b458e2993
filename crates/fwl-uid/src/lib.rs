//! World UID generation for `.fwl` metadata.
//!
//! A world UID packs two halves into one `i64`: the high 32 bits hold the
//! stable hash of `host:name:seed`, the low 32 bits a non-negative value drawn
//! from a seeded PRNG. Host name and PRNG seed come from an [`EntropySource`]
//! so tests can pin both.

pub mod entropy;
pub mod generator;

pub use entropy::{EntropySource, FixedEntropy, SystemEntropy, UNKNOWN_HOST};
pub use generator::{generate_uid, identity_string, random_component, UidGenerator};
