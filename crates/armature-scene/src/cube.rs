//! Cube - a transformable box primitive, optionally bound to a bone

use armature_core::math::{mat4_identity, Mat4};
use armature_core::{BoneId, CubeId, Transform, Vec3};

use crate::mesh::{create_box_mesh, Mesh};

/// A box primitive with its own transform and optional bone binding.
///
/// When bound, `final_matrix` is the bound bone's world matrix composed with
/// the cube's local matrix; when unbound it is the local matrix alone.
/// Multiple cubes may bind the same bone; the binding is non-owning.
#[derive(Debug, Clone)]
pub struct Cube {
    pub id: CubeId,
    pub transform: Transform,
    half_extents: Vec3,
    pub bone: Option<BoneId>,
    mesh: Mesh,
    /// Bumped whenever the geometry regenerates, so consumers holding
    /// uploaded copies know to refresh them
    generation: u32,
    pub final_matrix: Mat4,
    pub selected: bool,
}

impl Cube {
    pub(crate) fn new(id: CubeId, bone: Option<BoneId>) -> Self {
        let half_extents = Vec3::ONE;
        Self {
            id,
            transform: Transform::IDENTITY,
            half_extents,
            bone,
            mesh: create_box_mesh(half_extents),
            generation: 0,
            final_matrix: mat4_identity(),
            selected: false,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Store new half-extents and regenerate the box geometry
    pub fn set_half_extents(&mut self, half_extents: Vec3) {
        self.half_extents = half_extents;
        self.mesh = create_box_mesh(half_extents);
        self.generation += 1;
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Translation column of the final matrix (valid after the last
    /// recomputation pass)
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(
            self.final_matrix[3][0],
            self.final_matrix[3][1],
            self.final_matrix[3][2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cube_has_unit_box_geometry() {
        let cube = Cube::new(CubeId::from_raw(1), None);
        assert_eq!(cube.mesh().vertex_count(), 24);
        assert_eq!(cube.half_extents(), Vec3::ONE);
    }

    #[test]
    fn changing_half_extents_regenerates_geometry() {
        let mut cube = Cube::new(CubeId::from_raw(1), None);
        cube.set_half_extents(Vec3::new(3.0, 1.0, 1.0));

        let max_x = cube
            .mesh()
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - 3.0).abs() < 1e-6);
    }
}
