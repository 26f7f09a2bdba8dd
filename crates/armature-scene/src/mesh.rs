//! Box mesh generation for cube primitives

use armature_core::Vec3;
use bytemuck::{Pod, Zeroable};

/// A vertex with position, normal, and UV coordinates.
///
/// `Pod`/`Zeroable` so the rendering collaborator can upload vertex buffers
/// as raw byte slices.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// A mesh with vertices and indices
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Create a box mesh from half-extents: 24 unique vertices (per-face normals
/// and UVs), 12 triangles.
pub fn create_box_mesh(half_extents: Vec3) -> Mesh {
    let hx = half_extents.x;
    let hy = half_extents.y;
    let hz = half_extents.z;

    // 8 corners
    let positions = [
        [-hx, -hy, -hz], // 0: back-bottom-left
        [hx, -hy, -hz],  // 1: back-bottom-right
        [hx, hy, -hz],   // 2: back-top-right
        [-hx, hy, -hz],  // 3: back-top-left
        [-hx, -hy, hz],  // 4: front-bottom-left
        [hx, -hy, hz],   // 5: front-bottom-right
        [hx, hy, hz],    // 6: front-top-right
        [-hx, hy, hz],   // 7: front-top-left
    ];

    let normals = [
        [0.0, 0.0, -1.0], // back
        [0.0, 0.0, 1.0],  // front
        [-1.0, 0.0, 0.0], // left
        [1.0, 0.0, 0.0],  // right
        [0.0, -1.0, 0.0], // bottom
        [0.0, 1.0, 0.0],  // top
    ];

    // 6 faces x 4 vertices; vertex order per face produces CCW winding for
    // the outward normal when indexed with [base, base+1, base+2, base,
    // base+2, base+3]. UVs span [0,1] per face.
    let vertices = vec![
        // Back face (z-)
        Vertex { position: positions[0], normal: normals[0], uv: [0.0, 0.0] },
        Vertex { position: positions[3], normal: normals[0], uv: [0.0, 1.0] },
        Vertex { position: positions[2], normal: normals[0], uv: [1.0, 1.0] },
        Vertex { position: positions[1], normal: normals[0], uv: [1.0, 0.0] },
        // Front face (z+)
        Vertex { position: positions[4], normal: normals[1], uv: [0.0, 0.0] },
        Vertex { position: positions[5], normal: normals[1], uv: [1.0, 0.0] },
        Vertex { position: positions[6], normal: normals[1], uv: [1.0, 1.0] },
        Vertex { position: positions[7], normal: normals[1], uv: [0.0, 1.0] },
        // Left face (x-)
        Vertex { position: positions[0], normal: normals[2], uv: [0.0, 0.0] },
        Vertex { position: positions[4], normal: normals[2], uv: [1.0, 0.0] },
        Vertex { position: positions[7], normal: normals[2], uv: [1.0, 1.0] },
        Vertex { position: positions[3], normal: normals[2], uv: [0.0, 1.0] },
        // Right face (x+)
        Vertex { position: positions[5], normal: normals[3], uv: [0.0, 0.0] },
        Vertex { position: positions[1], normal: normals[3], uv: [1.0, 0.0] },
        Vertex { position: positions[2], normal: normals[3], uv: [1.0, 1.0] },
        Vertex { position: positions[6], normal: normals[3], uv: [0.0, 1.0] },
        // Bottom face (y-)
        Vertex { position: positions[0], normal: normals[4], uv: [0.0, 0.0] },
        Vertex { position: positions[1], normal: normals[4], uv: [1.0, 0.0] },
        Vertex { position: positions[5], normal: normals[4], uv: [1.0, 1.0] },
        Vertex { position: positions[4], normal: normals[4], uv: [0.0, 1.0] },
        // Top face (y+)
        Vertex { position: positions[3], normal: normals[5], uv: [0.0, 0.0] },
        Vertex { position: positions[7], normal: normals[5], uv: [0.0, 1.0] },
        Vertex { position: positions[6], normal: normals[5], uv: [1.0, 1.0] },
        Vertex { position: positions[2], normal: normals[5], uv: [1.0, 0.0] },
    ];

    // Indices (two triangles per face)
    let indices: Vec<u32> = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_mesh_has_24_vertices_and_12_triangles() {
        let mesh = create_box_mesh(Vec3::ONE);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < 24));
    }

    #[test]
    fn box_mesh_spans_half_extents() {
        let mesh = create_box_mesh(Vec3::new(1.5, 2.0, 0.5));
        for v in &mesh.vertices {
            assert!((v.position[0].abs() - 1.5).abs() < 1e-6);
            assert!((v.position[1].abs() - 2.0).abs() < 1e-6);
            assert!((v.position[2].abs() - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn box_mesh_is_deterministic() {
        let a = create_box_mesh(Vec3::ONE);
        let b = create_box_mesh(Vec3::ONE);
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.position, vb.position);
            assert_eq!(va.normal, vb.normal);
            assert_eq!(va.uv, vb.uv);
        }
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn each_face_normal_matches_its_positions() {
        let mesh = create_box_mesh(Vec3::ONE);
        for face in 0..6 {
            let n = mesh.vertices[face * 4].normal;
            for v in &mesh.vertices[face * 4..face * 4 + 4] {
                assert_eq!(v.normal, n);
                // Every vertex of a face lies on the face's plane
                let d = v.position[0] * n[0] + v.position[1] * n[1] + v.position[2] * n[2];
                assert!((d - 1.0).abs() < 1e-6);
            }
        }
    }
}
