//! Error types for Armature
//!
//! The error taxonomy is deliberately narrow: most illegal operations in the
//! core (self-parenting, cycle creation, degenerate inversion, empty picks)
//! silently no-op instead of erroring. Errors exist only for id-based
//! commands that reference entities the scene has never allocated.

use crate::id::{BoneId, CubeId};
use thiserror::Error;

/// The main error type for Armature operations
#[derive(Debug, Error)]
pub enum ArmatureError {
    #[error("Bone not found: {0}")]
    BoneNotFound(BoneId),

    #[error("Cube not found: {0}")]
    CubeNotFound(CubeId),
}

/// Result type alias for Armature operations
pub type Result<T> = std::result::Result<T, ArmatureError>;
