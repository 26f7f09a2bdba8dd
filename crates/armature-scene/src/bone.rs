//! Bone - a named hierarchy element with local and world matrices

use armature_core::math::{mat4_identity, Mat4};
use armature_core::{BoneId, Vec3};

/// A bone in the scene hierarchy.
///
/// Parent and children are plain ids into the scene's bone table; neither
/// reference implies ownership. `model_matrix` is derived from
/// position/rotation and `world_matrix` from the full ancestor chain; both
/// are lazily stale between edits and the scene's recomputation passes.
#[derive(Debug, Clone)]
pub struct Bone {
    pub id: BoneId,
    /// Display name: caller-supplied base name plus the id
    pub name: String,
    pub parent: Option<BoneId>,
    pub children: Vec<BoneId>,
    pub position: Vec3,
    /// Euler angles in radians, applied in X·Y·Z order
    pub rotation: Vec3,
    pub model_matrix: Mat4,
    pub world_matrix: Mat4,
    pub selected: bool,
}

impl Bone {
    pub(crate) fn new(id: BoneId, base_name: &str) -> Self {
        Self {
            id,
            name: format!("{}_{}", base_name, id),
            parent: None,
            children: Vec::new(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            model_matrix: mat4_identity(),
            world_matrix: mat4_identity(),
            selected: false,
        }
    }

    /// Translation column of the world matrix (valid after the last
    /// recomputation pass)
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(
            self.world_matrix[3][0],
            self.world_matrix[3][1],
            self.world_matrix[3][2],
        )
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
