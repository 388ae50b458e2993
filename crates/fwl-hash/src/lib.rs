//! Stable string hashing for `.fwl` world metadata.
//!
//! The game derives the numeric generation seed and part of every world UID
//! from a two-lane djb2 variant. The result must match the game bit for bit,
//! so all arithmetic wraps on 32-bit signed integers exactly as the game's
//! runtime does.

pub mod stable;

pub use stable::{
    stable_hash_bytes, stable_hash_code, verify_seed, HASH_MULTIPLIER, HASH_SEED,
};
