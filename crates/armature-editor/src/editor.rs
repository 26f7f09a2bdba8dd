//! Editor context - scene, camera, gizmo, and edit mode threaded through the
//! pointer event handlers
//!
//! One instance replaces any shared renderer/camera globals: every handler
//! and the per-frame update run against this explicit state.

use std::collections::HashMap;

use armature_core::{CubeId, Vec3};
use armature_scene::{Scene, Selection};

use crate::backend::{MeshHandle, RenderBackend};
use crate::camera::Camera;
use crate::gizmo::Gizmo;
use crate::modes::{apply_pointer_delta, EditMode};
use crate::projection::pointer_to_ndc;

/// The editor session state.
///
/// Pointer handlers mutate local transforms only; derived matrices refresh
/// in the fixed per-frame order inside `frame()`.
pub struct Editor {
    pub scene: Scene,
    pub camera: Camera,
    pub gizmo: Gizmo,
    pub mode: EditMode,
    viewport: [f32; 2],
    last_pointer: [f32; 2],
    mesh_cache: HashMap<CubeId, (u32, MeshHandle)>,
}

impl Editor {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Camera::new();
        camera.aspect = viewport_width / viewport_height;
        Self {
            scene: Scene::new(),
            camera,
            gizmo: Gizmo::new(),
            mode: EditMode::None,
            viewport: [viewport_width, viewport_height],
            last_pointer: [0.0, 0.0],
            mesh_cache: HashMap::new(),
        }
    }

    pub fn viewport(&self) -> [f32; 2] {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = [width, height];
        self.camera.aspect = width / height;
    }

    /// Pointer press: try the gizmo first when something is selected, then
    /// fall back to entity picking.
    pub fn pointer_pressed(&mut self, pointer_x: f32, pointer_y: f32) {
        let ndc = pointer_to_ndc(pointer_x, pointer_y, self.viewport);
        self.last_pointer = [pointer_x, pointer_y];

        if let Some(target) = self.scene.selected_world_position() {
            let view = self.camera.view_matrix();
            let proj = self.camera.projection_matrix();
            if let Some(axis) = self.gizmo.pick_axis(ndc, target.to_array(), &view, &proj) {
                if let Some(start) = self.scene.selected_position() {
                    self.gizmo.begin_drag(axis, [pointer_x, pointer_y], start);
                    return;
                }
            }
        }

        let picked = self.scene.pick_entity(ndc);
        self.scene.select(picked);
    }

    /// Pointer move: feed an active gizmo drag, otherwise the active edit
    /// mode, otherwise just the hover state.
    pub fn pointer_moved(&mut self, pointer_x: f32, pointer_y: f32) {
        let delta = [
            pointer_x - self.last_pointer[0],
            pointer_y - self.last_pointer[1],
        ];
        self.last_pointer = [pointer_x, pointer_y];

        if self.gizmo.is_dragging() {
            if let Some(position) = self.gizmo.drag_position([pointer_x, pointer_y]) {
                self.scene.set_selected_position(position);
            }
            return;
        }

        if self.mode != EditMode::None {
            apply_pointer_delta(&mut self.scene, self.mode, delta[0], delta[1]);
            return;
        }

        if let Some(target) = self.scene.selected_world_position() {
            let ndc = pointer_to_ndc(pointer_x, pointer_y, self.viewport);
            let view = self.camera.view_matrix();
            let proj = self.camera.projection_matrix();
            self.gizmo.update_hover(ndc, target.to_array(), &view, &proj);
        }
    }

    /// Pointer release: any drag ends, no axis stays locked.
    pub fn pointer_released(&mut self) {
        self.gizmo.end_drag();
    }

    /// Per-frame update: recompute every bone subtree, then every cube's
    /// final matrix. Input edits have already been applied by the handlers.
    pub fn frame(&mut self) {
        self.scene.update();
    }

    /// Hand the frame to the rendering collaborator: cube meshes (uploaded
    /// on first sight or after regeneration) and the gizmo overlay for the
    /// current selection.
    pub fn draw(&mut self, backend: &mut impl RenderBackend) {
        for cube in self.scene.cubes() {
            let entry = self.mesh_cache.get(&cube.id).copied();
            let handle = match entry {
                Some((generation, handle)) if generation == cube.generation() => handle,
                _ => {
                    let mesh = cube.mesh();
                    let handle = backend.create_mesh(&mesh.vertices, &mesh.indices);
                    self.mesh_cache
                        .insert(cube.id, (cube.generation(), handle));
                    handle
                }
            };
            backend.draw_mesh(handle, &cube.final_matrix);
        }

        if let Some(target) = self.scene.selected_world_position() {
            self.gizmo.draw(target.to_array(), backend);
        }
    }

    /// Local position of the current selection, if any
    pub fn selected_position(&self) -> Option<Vec3> {
        self.scene.selected_position()
    }
}
