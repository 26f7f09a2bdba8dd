//! 4x4 affine transform math
//!
//! All matrices are column-major `[[f32; 4]; 4]` (`m[col][row]`), the same
//! convention the rendering collaborator consumes. Every function here is a
//! pure function over its inputs; there is no shared state.

use crate::types::Vec3;

/// A 4x4 column-major matrix
pub type Mat4 = [[f32; 4]; 4];

/// The identity matrix
pub fn mat4_identity() -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Translation by (x, y, z)
pub fn mat4_translation(x: f32, y: f32, z: f32) -> Mat4 {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ]
}

/// Rotation around the X axis by `angle` radians
pub fn mat4_rotation_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation around the Y axis by `angle` radians
pub fn mat4_rotation_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation around the Z axis by `angle` radians
pub fn mat4_rotation_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Non-uniform scale by (x, y, z)
pub fn mat4_scaling(x: f32, y: f32, z: f32) -> Mat4 {
    [
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Multiply two matrices: the result applies `b` first, then `a`
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }
    result
}

/// Transform a 4D vector by a matrix
pub fn mat4_transform_vec4(m: &Mat4, v: [f32; 4]) -> [f32; 4] {
    [
        m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2] + m[3][0] * v[3],
        m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2] + m[3][1] * v[3],
        m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2] + m[3][2] * v[3],
        m[0][3] * v[0] + m[1][3] * v[1] + m[2][3] * v[2] + m[3][3] * v[3],
    ]
}

/// Transform a 3D point by a matrix (with perspective divide)
pub fn mat4_transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    let [x, y, z, w] = mat4_transform_vec4(m, [p[0], p[1], p[2], 1.0]);
    if w.abs() < 1e-10 {
        [x, y, z]
    } else {
        [x / w, y / w, z / w]
    }
}

/// Compute the inverse using cofactor expansion.
///
/// Returns the identity matrix when the determinant is zero; callers must not
/// rely on inversion succeeding in degenerate configurations.
pub fn mat4_inverse(m: &Mat4) -> Mat4 {
    let s = |col: usize, row: usize| -> f32 { m[col][row] };

    let c00 = s(2, 2) * s(3, 3) - s(3, 2) * s(2, 3);
    let c02 = s(1, 2) * s(3, 3) - s(3, 2) * s(1, 3);
    let c03 = s(1, 2) * s(2, 3) - s(2, 2) * s(1, 3);

    let c04 = s(2, 1) * s(3, 3) - s(3, 1) * s(2, 3);
    let c06 = s(1, 1) * s(3, 3) - s(3, 1) * s(1, 3);
    let c07 = s(1, 1) * s(2, 3) - s(2, 1) * s(1, 3);

    let c08 = s(2, 1) * s(3, 2) - s(3, 1) * s(2, 2);
    let c10 = s(1, 1) * s(3, 2) - s(3, 1) * s(1, 2);
    let c11 = s(1, 1) * s(2, 2) - s(2, 1) * s(1, 2);

    let c12 = s(2, 0) * s(3, 3) - s(3, 0) * s(2, 3);
    let c14 = s(1, 0) * s(3, 3) - s(3, 0) * s(1, 3);
    let c15 = s(1, 0) * s(2, 3) - s(2, 0) * s(1, 3);

    let c16 = s(2, 0) * s(3, 2) - s(3, 0) * s(2, 2);
    let c18 = s(1, 0) * s(3, 2) - s(3, 0) * s(1, 2);
    let c19 = s(1, 0) * s(2, 2) - s(2, 0) * s(1, 2);

    let c20 = s(2, 0) * s(3, 1) - s(3, 0) * s(2, 1);
    let c22 = s(1, 0) * s(3, 1) - s(3, 0) * s(1, 1);
    let c23 = s(1, 0) * s(2, 1) - s(2, 0) * s(1, 1);

    let f0 = [c00, c00, c02, c03];
    let f1 = [c04, c04, c06, c07];
    let f2 = [c08, c08, c10, c11];
    let f3 = [c12, c12, c14, c15];
    let f4 = [c16, c16, c18, c19];
    let f5 = [c20, c20, c22, c23];

    let v0 = [s(1, 0), s(0, 0), s(0, 0), s(0, 0)];
    let v1 = [s(1, 1), s(0, 1), s(0, 1), s(0, 1)];
    let v2 = [s(1, 2), s(0, 2), s(0, 2), s(0, 2)];
    let v3 = [s(1, 3), s(0, 3), s(0, 3), s(0, 3)];

    let mut inv = [[0.0f32; 4]; 4];
    let sign_a = [1.0, -1.0, 1.0, -1.0];
    let sign_b = [-1.0, 1.0, -1.0, 1.0];

    for i in 0..4 {
        inv[0][i] = sign_a[i] * (v1[i] * f0[i] - v2[i] * f1[i] + v3[i] * f2[i]);
        inv[1][i] = sign_b[i] * (v0[i] * f0[i] - v2[i] * f3[i] + v3[i] * f4[i]);
        inv[2][i] = sign_a[i] * (v0[i] * f1[i] - v1[i] * f3[i] + v3[i] * f5[i]);
        inv[3][i] = sign_b[i] * (v0[i] * f2[i] - v1[i] * f4[i] + v2[i] * f5[i]);
    }

    let det = s(0, 0) * inv[0][0] + s(1, 0) * inv[0][1] + s(2, 0) * inv[0][2] + s(3, 0) * inv[0][3];

    if det.abs() < 1e-10 {
        return mat4_identity();
    }

    let inv_det = 1.0 / det;
    for col in &mut inv {
        for val in col.iter_mut() {
            *val *= inv_det;
        }
    }
    inv
}

/// Right-handed perspective projection. `fov_y` is the vertical field of view
/// in radians.
pub fn mat4_perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let depth = far - near;

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, -(far + near) / depth, -1.0],
        [0.0, 0.0, -(2.0 * far * near) / depth, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn mat4_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(&up).normalized();
    let u = s.cross(&f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat4_near(a: &Mat4, b: &Mat4, eps: f32) {
        for col in 0..4 {
            for row in 0..4 {
                assert!(
                    (a[col][row] - b[col][row]).abs() < eps,
                    "m[{}][{}] = {}, expected {}",
                    col,
                    row,
                    a[col][row],
                    b[col][row]
                );
            }
        }
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = mat4_mul(&mat4_translation(1.0, 2.0, 3.0), &mat4_rotation_y(0.7));
        assert_mat4_near(&mat4_mul(&mat4_identity(), &m), &m, 1e-6);
        assert_mat4_near(&mat4_mul(&m, &mat4_identity()), &m, 1e-6);
    }

    #[test]
    fn translation_moves_point() {
        let m = mat4_translation(1.0, -2.0, 3.0);
        let p = mat4_transform_point(&m, [1.0, 1.0, 1.0]);
        assert!((p[0] - 2.0).abs() < 1e-6);
        assert!((p[1] - -1.0).abs() < 1e-6);
        assert!((p[2] - 4.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_z_quarter_turn_maps_x_to_y() {
        let m = mat4_rotation_z(std::f32::consts::FRAC_PI_2);
        let p = mat4_transform_point(&m, [1.0, 0.0, 0.0]);
        assert!(p[0].abs() < 1e-6);
        assert!((p[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_x_quarter_turn_maps_y_to_z() {
        let m = mat4_rotation_x(std::f32::consts::FRAC_PI_2);
        let p = mat4_transform_point(&m, [0.0, 1.0, 0.0]);
        assert!(p[1].abs() < 1e-6);
        assert!((p[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn multiply_applies_right_operand_first() {
        // T * R rotates the point, then translates it
        let m = mat4_mul(
            &mat4_translation(10.0, 0.0, 0.0),
            &mat4_rotation_z(std::f32::consts::FRAC_PI_2),
        );
        let p = mat4_transform_point(&m, [1.0, 0.0, 0.0]);
        assert!((p[0] - 10.0).abs() < 1e-5);
        assert!((p[1] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn inverse_of_identity_is_identity() {
        assert_mat4_near(&mat4_inverse(&mat4_identity()), &mat4_identity(), 1e-6);
    }

    #[test]
    fn inverse_round_trips_affine_matrix() {
        let mut m = mat4_translation(3.0, -1.0, 2.5);
        m = mat4_mul(&m, &mat4_rotation_x(0.3));
        m = mat4_mul(&m, &mat4_rotation_y(-1.1));
        m = mat4_mul(&m, &mat4_rotation_z(2.4));

        let product = mat4_mul(&m, &mat4_inverse(&m));
        assert_mat4_near(&product, &mat4_identity(), 1e-5);
    }

    #[test]
    fn degenerate_matrix_inverts_to_identity() {
        let m = mat4_scaling(0.0, 1.0, 1.0);
        assert_mat4_near(&mat4_inverse(&m), &mat4_identity(), 1e-6);
    }

    #[test]
    fn look_at_maps_eye_to_view_origin() {
        let view = mat4_look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
        let p = mat4_transform_point(&view, [0.0, 0.0, 5.0]);
        assert!(p[0].abs() < 1e-6 && p[1].abs() < 1e-6 && p[2].abs() < 1e-6);

        // A point at the origin ends up in front of the camera (negative view z)
        let q = mat4_transform_point(&view, [0.0, 0.0, 0.0]);
        assert!(q[2] < 0.0);
    }

    #[test]
    fn perspective_projects_center_point_to_ndc_origin() {
        let proj = mat4_perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let clip = mat4_transform_vec4(&proj, [0.0, 0.0, -10.0, 1.0]);
        assert!(clip[0].abs() < 1e-6);
        assert!(clip[1].abs() < 1e-6);
        // w carries the view-space depth
        assert!((clip[3] - 10.0).abs() < 1e-5);
    }
}
