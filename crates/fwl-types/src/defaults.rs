use serde::{Deserialize, Serialize};

/// World file format version written by current game builds.
pub const DEFAULT_WORLD_VERSION: i32 = 26;

/// World generation algorithm version written by current game builds.
pub const DEFAULT_WORLD_GEN_VERSION: i32 = 1;

/// Version values substituted for zero fields when a world is finalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDefaults {
    pub world_version: i32,
    pub world_gen_version: i32,
}

impl Default for WorldDefaults {
    fn default() -> Self {
        Self {
            world_version: DEFAULT_WORLD_VERSION,
            world_gen_version: DEFAULT_WORLD_GEN_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_defaults() {
        let d = WorldDefaults::default();
        assert_eq!(d.world_version, 26);
        assert_eq!(d.world_gen_version, 1);
    }

    #[test]
    fn deserialize_from_json() {
        let d: WorldDefaults =
            serde_json::from_str(r#"{"world_version":27,"world_gen_version":2}"#).unwrap();
        assert_eq!(d.world_version, 27);
        assert_eq!(d.world_gen_version, 2);
    }
}
