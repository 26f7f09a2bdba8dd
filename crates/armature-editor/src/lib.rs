//! Armature Editor - the screen-space manipulation layer
//!
//! Turns 2D pointer input into 3D transform edits: a translate gizmo with
//! NDC-space axis picking and axis-constrained drags, plus a simpler
//! mode-based editing path (move/rotate/scale from raw pointer deltas).
//! Rendering and windowing stay behind the `RenderBackend` trait; the editor
//! only produces matrices and consumes pointer coordinates.

mod backend;
mod camera;
mod editor;
mod gizmo;
mod modes;
pub mod projection;

pub use backend::{MeshHandle, RenderBackend};
pub use camera::Camera;
pub use editor::Editor;
pub use gizmo::{Axis, Gizmo, GizmoPhase, AXIS_PICK_THRESHOLD, DRAG_SENSITIVITY};
pub use modes::{apply_pointer_delta, EditMode, MODE_SENSITIVITY};
