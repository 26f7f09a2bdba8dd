//! Armature Core - Foundational types for the Armature editor
//!
//! This crate provides the types that all other Armature crates depend on:
//! - `Mat4` and the affine math functions (translation, axis rotations,
//!   composition, inversion, camera matrices)
//! - `Vec3`, `Transform` - Spatial types
//! - `BoneId`, `CubeId` - Scene-allocated identifiers
//! - Error types and Result alias

mod error;
mod id;
pub mod math;
mod types;

pub use error::{ArmatureError, Result};
pub use id::{BoneId, CubeId};
pub use math::Mat4;
pub use types::{Transform, Vec3};
