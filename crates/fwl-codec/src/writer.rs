use std::io::Write;

use fwl_hash::stable_hash_code;
use fwl_types::{World, WorldDefaults, MAX_STRING_LEN};
use fwl_uid::{EntropySource, SystemEntropy, UidGenerator};
use tracing::{debug, warn};

use crate::error::CodecResult;

/// Size of the little-endian `i32` length prefix.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Bytes in a record body besides the name and seed text:
/// world version, two length bytes, seed value, uid, and generation version.
const FIXED_BODY_SIZE: usize = 4 + 1 + 1 + 4 + 8 + 4;

/// Exact number of bytes [`WorldEncoder::encode`] produces for `world`.
pub fn encoded_len(world: &World) -> usize {
    LENGTH_PREFIX_SIZE + FIXED_BODY_SIZE + world.name.len() + world.seed.len()
}

/// Finalizes and serializes worlds into `.fwl` bytes.
#[derive(Debug)]
pub struct WorldEncoder<E = SystemEntropy> {
    uids: UidGenerator<E>,
    defaults: WorldDefaults,
}

impl WorldEncoder<SystemEntropy> {
    /// Encoder using the real host name and clock for new UIDs.
    pub fn system() -> Self {
        Self::new(SystemEntropy)
    }
}

impl<E: EntropySource> WorldEncoder<E> {
    pub fn new(entropy: E) -> Self {
        Self {
            uids: UidGenerator::new(entropy),
            defaults: WorldDefaults::default(),
        }
    }

    /// Replace the version defaults applied to zero fields.
    pub fn with_defaults(mut self, defaults: WorldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &WorldDefaults {
        &self.defaults
    }

    /// Populate every derived field of `world`.
    ///
    /// Zero versions take the configured defaults, a zero UID is replaced
    /// with a fresh one, and the seed value is always recomputed from the
    /// seed text.
    pub fn finalize(&self, world: &mut World) {
        world.apply_defaults(&self.defaults);
        if !world.has_uid() {
            world.uid = self.uids.generate(&world.name, &world.seed);
        }
        world.seed_value = stable_hash_code(&world.seed);
    }

    /// Finalize `world` and write its length-prefixed encoding to `out`.
    pub fn write_to<W: Write>(&self, world: &mut World, mut out: W) -> CodecResult<()> {
        self.finalize(world);
        let body = encode_body(world);

        out.write_all(&(body.len() as i32).to_le_bytes())?;
        out.write_all(&body)?;

        debug!(
            world = %world.name,
            uid = world.uid,
            bytes = LENGTH_PREFIX_SIZE + body.len(),
            "encoded world"
        );
        Ok(())
    }

    /// Finalize `world` and return its length-prefixed encoding.
    pub fn encode(&self, world: &mut World) -> CodecResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(encoded_len(world));
        self.write_to(world, &mut buf)?;
        Ok(buf)
    }
}

/// Returns `true` if `world`'s name or seed is longer than [`MAX_STRING_LEN`]
/// and would wrap its 1-byte length field.
pub fn exceeds_length_field(world: &World) -> bool {
    world.name.len() > MAX_STRING_LEN || world.seed.len() > MAX_STRING_LEN
}

/// Serialize the record body. Lengths above [`MAX_STRING_LEN`] wrap the
/// length byte; they are logged, not rejected.
fn encode_body(world: &World) -> Vec<u8> {
    if exceeds_length_field(world) {
        warn!(
            name_len = world.name.len(),
            seed_len = world.seed.len(),
            max = MAX_STRING_LEN,
            "world text too long for its length byte"
        );
    }
    let mut body = Vec::with_capacity(FIXED_BODY_SIZE + world.name.len() + world.seed.len());

    body.extend_from_slice(&world.world_version.to_le_bytes());
    body.extend_from_slice(&(world.name.len() as i8).to_le_bytes());
    body.extend_from_slice(world.name.as_bytes());
    body.extend_from_slice(&(world.seed.len() as i8).to_le_bytes());
    body.extend_from_slice(world.seed.as_bytes());
    body.extend_from_slice(&world.seed_value.to_le_bytes());
    body.extend_from_slice(&world.uid.to_le_bytes());
    body.extend_from_slice(&world.world_gen_version.to_le_bytes());

    body
}
