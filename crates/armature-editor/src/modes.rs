//! Mode-based editing: move/rotate/scale from raw pointer deltas
//!
//! A simpler parallel input path to the gizmo: one active mode gates how
//! per-frame pointer deltas are added to the selected entity's transform.
//! Mode switches are instantaneous and carry no transition guards.

use armature_core::Vec3;
use armature_scene::{Scene, Selection};

/// World units (or radians) per pointer pixel in mode-based editing
pub const MODE_SENSITIVITY: f32 = 0.01;

/// The active pointer-editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    None,
    Move,
    Rotate,
    Scale,
}

/// Apply one frame's pointer delta to the selected entity according to the
/// active mode. Unlike gizmo drags this path accumulates per frame.
///
/// Move: horizontal delta on X, vertical (inverted) on Y. Rotate: horizontal
/// spins around Y, vertical tilts around X. Scale: uniform, horizontal delta
/// only; bones carry no scale, so scale mode leaves them untouched.
pub fn apply_pointer_delta(scene: &mut Scene, mode: EditMode, dx: f32, dy: f32) {
    if scene.selection() == Selection::None {
        return;
    }

    match mode {
        EditMode::None => {}
        EditMode::Move => {
            if let Some(position) = scene.selected_position() {
                scene.set_selected_position(
                    position + Vec3::new(dx * MODE_SENSITIVITY, -dy * MODE_SENSITIVITY, 0.0),
                );
            }
        }
        EditMode::Rotate => {
            if let Some(rotation) = scene.selected_rotation() {
                scene.set_selected_rotation(
                    rotation + Vec3::new(dy * MODE_SENSITIVITY, dx * MODE_SENSITIVITY, 0.0),
                );
            }
        }
        EditMode::Scale => {
            if let Some(scale) = scene.selected_scale() {
                let d = dx * MODE_SENSITIVITY;
                scene.set_selected_scale(scale + Vec3::new(d, d, d));
            }
        }
    }
}
