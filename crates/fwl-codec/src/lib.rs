//! Binary codec for `.fwl` world metadata files.
//!
//! # Format
//!
//! All integers are little-endian.
//!
//! ```text
//! [i32 body length]
//! [i32 world version]
//! [i8 name length N] [N bytes name]
//! [i8 seed length M] [M bytes seed]
//! [i32 seed value] [i64 uid] [i32 world generation version]
//! ```
//!
//! There is no magic number or checksum. Encoding finalizes the record first
//! (see [`WorldEncoder::finalize`]); decoding takes every field verbatim.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{CodecError, CodecResult};
pub use fwl_hash::{stable_hash_code, verify_seed};
pub use fwl_types::{
    World, WorldDefaults, DEFAULT_WORLD_GEN_VERSION, DEFAULT_WORLD_VERSION, MAX_STRING_LEN,
};
pub use fwl_uid::{EntropySource, FixedEntropy, SystemEntropy};
pub use reader::{decode, WorldDecoder};
pub use writer::{encoded_len, exceeds_length_field, WorldEncoder, LENGTH_PREFIX_SIZE};

/// Create a fully populated world from a name and seed, using the real host
/// name and clock for its UID.
pub fn new_world(name: impl Into<String>, seed: impl Into<String>) -> World {
    new_world_with(name, seed, SystemEntropy)
}

/// Create a fully populated world, drawing UID inputs from `entropy`.
pub fn new_world_with<E: EntropySource>(
    name: impl Into<String>,
    seed: impl Into<String>,
    entropy: E,
) -> World {
    let mut world = World::bare(name, seed);
    WorldEncoder::new(entropy).finalize(&mut world);
    world
}

/// Finalize `world` in place and encode it with default versions.
pub fn encode(world: &mut World) -> CodecResult<Vec<u8>> {
    WorldEncoder::system().encode(world)
}
