//! Rendering collaborator interface
//!
//! The editor core never draws; it hands mesh data and matrices to whatever
//! implements `RenderBackend` and treats the result as opaque.

use armature_core::math::Mat4;
use armature_scene::Vertex;

/// Opaque handle to a mesh owned by the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// The interface the rendering collaborator implements.
///
/// Matrices handed to `draw_mesh` are read-only snapshots for the frame;
/// the backend must not retain them across ticks.
pub trait RenderBackend {
    /// Upload mesh data, returning a handle for later draws
    fn create_mesh(&mut self, vertices: &[Vertex], indices: &[u32]) -> MeshHandle;

    /// Draw a previously created mesh with the given world matrix
    fn draw_mesh(&mut self, mesh: MeshHandle, matrix: &Mat4);

    /// Draw a colored line segment in world space
    fn draw_line(&mut self, p0: [f32; 3], p1: [f32; 3], color: [f32; 3]);
}
