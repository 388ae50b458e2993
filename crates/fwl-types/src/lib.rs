//! Foundation types for `.fwl` world metadata files.
//!
//! A `.fwl` file is the small descriptor that sits next to a world's `.db`
//! file. It carries the world's name, its human readable seed, the hashed
//! seed value used for generation, a unique world identifier, and two
//! format version integers.
//!
//! # Key Types
//!
//! - [`World`] : In-memory world descriptor
//! - [`WorldDefaults`] : Version values applied to records that leave them unset

pub mod defaults;
pub mod world;

pub use defaults::{WorldDefaults, DEFAULT_WORLD_GEN_VERSION, DEFAULT_WORLD_VERSION};
pub use world::{World, MAX_STRING_LEN};
