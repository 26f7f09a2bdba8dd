//! Interactive translate gizmo
//!
//! Picks a manipulation axis by projecting the three unit axes from the
//! target's world position into NDC and testing the pointer against each
//! projected segment; an active drag constrains pointer deltas to the locked
//! axis, applied from the recorded drag-start position.

use armature_core::math::Mat4;
use armature_core::Vec3;

use crate::backend::RenderBackend;
use crate::projection::{project_to_ndc, segment_distance_2d};

/// Maximum NDC distance at which an axis segment still counts as picked
pub const AXIS_PICK_THRESHOLD: f32 = 0.05;
/// World units per pointer pixel while dragging
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// World-space length of the drawn and picked axis segments
const AXIS_LENGTH: f32 = 1.0;

const X_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const Y_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
const Z_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

/// A manipulation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Enumeration order used for picking; first axis wins exact ties
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit_dir(&self) -> [f32; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }

    fn color(&self) -> [f32; 3] {
        match self {
            Axis::X => X_COLOR,
            Axis::Y => Y_COLOR,
            Axis::Z => Z_COLOR,
        }
    }
}

/// Observable state of the gizmo's interaction machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoPhase {
    Idle,
    AxisHover,
    Dragging,
}

/// Translate gizmo state.
pub struct Gizmo {
    hovered_axis: Option<Axis>,
    active_axis: Option<Axis>,
    dragging: bool,
    start_pointer: [f32; 2],
    start_position: Vec3,
}

impl Default for Gizmo {
    fn default() -> Self {
        Self::new()
    }
}

impl Gizmo {
    pub fn new() -> Self {
        Self {
            hovered_axis: None,
            active_axis: None,
            dragging: false,
            start_pointer: [0.0, 0.0],
            start_position: Vec3::ZERO,
        }
    }

    pub fn phase(&self) -> GizmoPhase {
        if self.dragging {
            GizmoPhase::Dragging
        } else if self.hovered_axis.is_some() {
            GizmoPhase::AxisHover
        } else {
            GizmoPhase::Idle
        }
    }

    pub fn hovered_axis(&self) -> Option<Axis> {
        self.hovered_axis
    }

    pub fn active_axis(&self) -> Option<Axis> {
        self.active_axis
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pick test: which axis segment (if any) lies within the pick threshold
    /// of the pointer in NDC.
    ///
    /// Both the target origin and each axis endpoint are projected through
    /// view then projection with perspective divide; the nearest segment
    /// below the threshold wins, first of X, Y, Z on exact ties.
    pub fn pick_axis(
        &self,
        pointer_ndc: [f32; 2],
        target_world: [f32; 3],
        view: &Mat4,
        proj: &Mat4,
    ) -> Option<Axis> {
        let origin = project_to_ndc(view, proj, target_world)?;

        let mut best_axis = None;
        let mut best_dist = AXIS_PICK_THRESHOLD;

        for axis in Axis::ALL {
            let dir = axis.unit_dir();
            let tip_world = [
                target_world[0] + dir[0] * AXIS_LENGTH,
                target_world[1] + dir[1] * AXIS_LENGTH,
                target_world[2] + dir[2] * AXIS_LENGTH,
            ];
            let Some(tip) = project_to_ndc(view, proj, tip_world) else {
                continue;
            };

            let dist = segment_distance_2d(pointer_ndc, origin, tip);
            if dist < best_dist {
                best_dist = dist;
                best_axis = Some(axis);
            }
        }

        best_axis
    }

    /// Refresh the hovered axis from the pointer position. Ignored while a
    /// drag is in progress.
    pub fn update_hover(
        &mut self,
        pointer_ndc: [f32; 2],
        target_world: [f32; 3],
        view: &Mat4,
        proj: &Mat4,
    ) {
        if self.dragging {
            return;
        }
        self.hovered_axis = self.pick_axis(pointer_ndc, target_world, view, proj);
    }

    /// Lock `axis` and record the drag origin: the pointer position in
    /// pixels and a copy of the target's local position.
    pub fn begin_drag(&mut self, axis: Axis, pointer_px: [f32; 2], target_local_position: Vec3) {
        self.active_axis = Some(axis);
        self.dragging = true;
        self.start_pointer = pointer_px;
        self.start_position = target_local_position;
    }

    /// New local position for the drag target given the current pointer.
    ///
    /// The delta is measured from the drag-start pointer and applied to the
    /// locked axis from the recorded start position (absolute positioning,
    /// not per-frame accumulation). X and Z take the horizontal delta;
    /// Y takes the vertical delta negated so screen-up is world-up.
    pub fn drag_position(&self, pointer_px: [f32; 2]) -> Option<Vec3> {
        if !self.dragging {
            return None;
        }
        let axis = self.active_axis?;

        let dx = (pointer_px[0] - self.start_pointer[0]) * DRAG_SENSITIVITY;
        let dy = (pointer_px[1] - self.start_pointer[1]) * DRAG_SENSITIVITY;

        let mut position = self.start_position;
        match axis {
            Axis::X => position.x += dx,
            Axis::Y => position.y -= dy,
            Axis::Z => position.z += dx,
        }
        Some(position)
    }

    /// Release the drag: back to Idle, no axis locked. Hover state is
    /// re-derived on the next pointer move.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.active_axis = None;
        self.hovered_axis = None;
    }

    /// Draw the three axis segments from the target's world position.
    pub fn draw(&self, target_world: [f32; 3], backend: &mut impl RenderBackend) {
        for axis in Axis::ALL {
            let dir = axis.unit_dir();
            let tip = [
                target_world[0] + dir[0] * AXIS_LENGTH,
                target_world[1] + dir[1] * AXIS_LENGTH,
                target_world[2] + dir[2] * AXIS_LENGTH,
            ];
            backend.draw_line(target_world, tip, axis.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::projection::project_to_ndc;

    fn test_camera() -> Camera {
        // Default orbit camera: eye (0,0,5) looking at the origin
        Camera::default()
    }

    #[test]
    fn pick_axis_hits_axis_at_projected_endpoint() {
        let camera = test_camera();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();
        let gizmo = Gizmo::new();
        let target = [0.0, 0.0, 0.0];

        // Place the pointer exactly on the X axis endpoint's projection
        let tip = project_to_ndc(&view, &proj, [1.0, 0.0, 0.0]).unwrap();
        assert_eq!(gizmo.pick_axis(tip, target, &view, &proj), Some(Axis::X));

        let tip = project_to_ndc(&view, &proj, [0.0, 1.0, 0.0]).unwrap();
        assert_eq!(gizmo.pick_axis(tip, target, &view, &proj), Some(Axis::Y));
    }

    #[test]
    fn pick_axis_returns_none_beyond_threshold() {
        let camera = test_camera();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();
        let gizmo = Gizmo::new();

        // Far corner of NDC space: no axis within 0.05
        assert_eq!(
            gizmo.pick_axis([-0.9, -0.9], [0.0, 0.0, 0.0], &view, &proj),
            None
        );
    }

    #[test]
    fn pick_axis_prefers_first_axis_on_exact_tie() {
        let camera = test_camera();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();
        let gizmo = Gizmo::new();

        // The shared origin of all three segments is equidistant (zero) from
        // each; the X axis wins by enumeration order.
        let origin = project_to_ndc(&view, &proj, [0.0, 0.0, 0.0]).unwrap();
        assert_eq!(
            gizmo.pick_axis(origin, [0.0, 0.0, 0.0], &view, &proj),
            Some(Axis::X)
        );
    }

    #[test]
    fn drag_along_y_inverts_vertical_delta() {
        let mut gizmo = Gizmo::new();
        gizmo.begin_drag(Axis::Y, [100.0, 100.0], Vec3::new(0.0, 2.0, 0.0));

        // 10 px down at sensitivity 0.01 moves Y by exactly -0.1
        let pos = gizmo.drag_position([100.0, 110.0]).unwrap();
        assert!((pos.y - 1.9).abs() < 1e-6);
        assert!(pos.x.abs() < 1e-6 && pos.z.abs() < 1e-6);
    }

    #[test]
    fn drag_is_absolute_from_start_not_cumulative() {
        let mut gizmo = Gizmo::new();
        gizmo.begin_drag(Axis::X, [0.0, 0.0], Vec3::ZERO);

        // Repeatedly querying the same pointer position yields the same
        // result; the delta is never re-applied
        let first = gizmo.drag_position([50.0, 0.0]).unwrap();
        let second = gizmo.drag_position([50.0, 0.0]).unwrap();
        assert_eq!(first, second);
        assert!((first.x - 0.5).abs() < 1e-6);

        // Moving back to the start pointer restores the start position
        let back = gizmo.drag_position([0.0, 0.0]).unwrap();
        assert_eq!(back, Vec3::ZERO);
    }

    #[test]
    fn drag_locks_to_one_axis() {
        let mut gizmo = Gizmo::new();
        gizmo.begin_drag(Axis::Z, [0.0, 0.0], Vec3::ZERO);
        let pos = gizmo.drag_position([30.0, 40.0]).unwrap();
        assert!((pos.z - 0.3).abs() < 1e-6);
        assert!(pos.x.abs() < 1e-6);
        assert!(pos.y.abs() < 1e-6);
    }

    #[test]
    fn phases_follow_hover_drag_release() {
        let camera = test_camera();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();
        let mut gizmo = Gizmo::new();
        assert_eq!(gizmo.phase(), GizmoPhase::Idle);

        let tip = project_to_ndc(&view, &proj, [1.0, 0.0, 0.0]).unwrap();
        gizmo.update_hover(tip, [0.0, 0.0, 0.0], &view, &proj);
        assert_eq!(gizmo.phase(), GizmoPhase::AxisHover);

        gizmo.begin_drag(Axis::X, [0.0, 0.0], Vec3::ZERO);
        assert_eq!(gizmo.phase(), GizmoPhase::Dragging);

        gizmo.end_drag();
        assert_eq!(gizmo.phase(), GizmoPhase::Idle);
        assert_eq!(gizmo.active_axis(), None);
        assert!(!gizmo.is_dragging());
    }

    #[test]
    fn draw_emits_one_line_per_axis() {
        struct Recorder {
            lines: Vec<([f32; 3], [f32; 3], [f32; 3])>,
        }
        impl RenderBackend for Recorder {
            fn create_mesh(
                &mut self,
                _vertices: &[armature_scene::Vertex],
                _indices: &[u32],
            ) -> crate::MeshHandle {
                crate::MeshHandle(0)
            }
            fn draw_mesh(&mut self, _mesh: crate::MeshHandle, _matrix: &Mat4) {}
            fn draw_line(&mut self, p0: [f32; 3], p1: [f32; 3], color: [f32; 3]) {
                self.lines.push((p0, p1, color));
            }
        }

        let mut recorder = Recorder { lines: Vec::new() };
        Gizmo::new().draw([1.0, 2.0, 3.0], &mut recorder);

        assert_eq!(recorder.lines.len(), 3);
        assert_eq!(recorder.lines[0].1, [2.0, 2.0, 3.0]);
        assert_eq!(recorder.lines[1].1, [1.0, 3.0, 3.0]);
        assert_eq!(recorder.lines[2].1, [1.0, 2.0, 4.0]);
        assert_eq!(recorder.lines[0].2, [1.0, 0.0, 0.0]);
    }
}
