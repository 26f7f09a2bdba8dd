//! Shared projection math for the manipulation layer — pointer-to-NDC
//! mapping, world-to-NDC projection, and 2D segment distance.
//!
//! Used by both the gizmo axis picker and the editor's pointer handling.

use armature_core::math::{mat4_transform_vec4, Mat4};

/// Map a pointer position from origin-top-left pixel space into Y-flipped
/// `[-1, 1]` normalized device coordinates.
pub fn pointer_to_ndc(pointer_x: f32, pointer_y: f32, viewport: [f32; 2]) -> [f32; 2] {
    [
        (pointer_x / viewport[0]) * 2.0 - 1.0,
        -((pointer_y / viewport[1]) * 2.0 - 1.0),
    ]
}

/// Project a world-space point through view then projection into NDC.
/// Returns None when the point is at or behind the camera plane.
pub fn project_to_ndc(view: &Mat4, proj: &Mat4, point: [f32; 3]) -> Option<[f32; 2]> {
    let eye = mat4_transform_vec4(view, [point[0], point[1], point[2], 1.0]);
    let clip = mat4_transform_vec4(proj, eye);

    if clip[3] <= 0.001 {
        return None;
    }

    Some([clip[0] / clip[3], clip[1] / clip[3]])
}

/// Perpendicular distance from `p` to the segment `a`..`b`, with the closest
/// point clamped to the segment (`t` in `[0, 1]`).
pub fn segment_distance_2d(p: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    let vx = b[0] - a[0];
    let vy = b[1] - a[1];
    let wx = p[0] - a[0];
    let wy = p[1] - a[1];

    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 {
        ((wx * vx + wy * vy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let cx = a[0] + vx * t;
    let cy = a[1] + vy * t;
    let dx = p[0] - cx;
    let dy = p[1] - cy;
    (dx * dx + dy * dy).sqrt()
}
