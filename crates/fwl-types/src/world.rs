use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defaults::WorldDefaults;

/// Longest name or seed the 1-byte signed length field can describe.
///
/// Not enforced: longer strings wrap the length byte and produce a file the
/// game cannot read back.
pub const MAX_STRING_LEN: usize = i8::MAX as usize;

/// A game world's metadata as stored in a `.fwl` file.
///
/// A `World` is either built fresh from a name and seed, with every derived
/// field computed up front, or reconstructed verbatim from file bytes. It is a
/// plain value with no references to other records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct World {
    /// Name of the world. Must match the file stem of the `.fwl` and `.db` files.
    pub name: String,
    /// Human readable ASCII seed provided as input for world generation.
    pub seed: String,
    /// Hash of `seed` that the game actually feeds into generation.
    pub seed_value: i32,
    /// Unique identifier used to sync per-world player state in clients.
    pub uid: i64,
    /// Version of the world file format.
    pub world_version: i32,
    /// Version of the world generation algorithm.
    pub world_gen_version: i32,
}

impl World {
    /// Create a record with only name and seed set. Derived fields stay zero.
    pub fn bare(name: impl Into<String>, seed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: seed.into(),
            ..Self::default()
        }
    }

    /// Returns `true` once a UID has been assigned.
    pub fn has_uid(&self) -> bool {
        self.uid != 0
    }

    /// Fill zero version fields from `defaults`. Non-zero values are kept.
    pub fn apply_defaults(&mut self, defaults: &WorldDefaults) {
        if self.world_version == 0 {
            self.world_version = defaults.world_version;
        }
        if self.world_gen_version == 0 {
            self.world_gen_version = defaults.world_gen_version;
        }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (seed {:?} -> {}, uid {}, v{}/gen{})",
            self.name,
            self.seed,
            self.seed_value,
            self.uid,
            self.world_version,
            self.world_gen_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_leaves_derived_fields_zero() {
        let w = World::bare("Midgard", "abc");
        assert_eq!(w.name, "Midgard");
        assert_eq!(w.seed, "abc");
        assert_eq!(w.seed_value, 0);
        assert!(!w.has_uid());
        assert_eq!(w.world_version, 0);
        assert_eq!(w.world_gen_version, 0);
    }

    #[test]
    fn apply_defaults_fills_zero_versions() {
        let mut w = World::bare("a", "b");
        w.apply_defaults(&WorldDefaults::default());
        assert_eq!(w.world_version, 26);
        assert_eq!(w.world_gen_version, 1);
    }

    #[test]
    fn apply_defaults_keeps_existing_versions() {
        let mut w = World {
            world_version: 20,
            world_gen_version: 2,
            ..World::bare("a", "b")
        };
        w.apply_defaults(&WorldDefaults::default());
        assert_eq!(w.world_version, 20);
        assert_eq!(w.world_gen_version, 2);
    }

    #[test]
    fn serde_roundtrip() {
        let w = World {
            seed_value: -1132280621,
            uid: 47948118,
            world_version: 26,
            world_gen_version: 1,
            ..World::bare("servertest", "tKqGBzNgfA")
        };
        let json = serde_json::to_string(&w).unwrap();
        let parsed: World = serde_json::from_str(&json).unwrap();
        assert_eq!(w, parsed);
    }

    #[test]
    fn display_mentions_name_and_uid() {
        let w = World {
            uid: 42,
            ..World::bare("Abarat", "vnzWCsnImq")
        };
        let s = w.to_string();
        assert!(s.starts_with("Abarat"));
        assert!(s.contains("uid 42"));
    }

    #[test]
    fn max_string_len_is_i8_max() {
        assert_eq!(MAX_STRING_LEN, 127);
    }
}
