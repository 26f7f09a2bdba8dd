//! Armature Scene - hierarchy and registry
//!
//! The scene owns every bone and cube in flat, ordered tables; bones refer to
//! each other only through `BoneId`, so the parent/child graph carries no
//! ownership cycles. All hierarchy mutation (reparenting, matrix
//! recomputation, selection) goes through `Scene` methods.

mod bone;
mod cube;
mod mesh;
mod scene;

pub use bone::Bone;
pub use cube::Cube;
pub use mesh::{create_box_mesh, Mesh, Vertex};
pub use scene::{Scene, Selection};
