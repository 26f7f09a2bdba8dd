//! Scene registry - ordered bone and cube tables, selection, picking,
//! reparenting, and the per-frame matrix recomputation pass

use armature_core::math::{
    mat4_identity, mat4_inverse, mat4_mul, mat4_rotation_x, mat4_rotation_y, mat4_rotation_z,
    mat4_translation, Mat4,
};
use armature_core::{ArmatureError, BoneId, CubeId, Result, Vec3};

use crate::bone::Bone;
use crate::cube::Cube;

/// Fixed factor mapping entity world positions into the normalized pointer
/// space used by the simplified 2D hit test.
const PICK_SCALE: f32 = 0.2;
/// Maximum normalized distance at which an entity still counts as hit.
const PICK_RADIUS: f32 = 0.15;

/// The scene's single-selection state: at most one bone XOR one cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Bone(BoneId),
    Cube(CubeId),
}

/// The scene registry.
///
/// Owns every bone and cube in creation order and allocates their ids
/// (monotonically increasing, never reused). Bones form a forest: reparent
/// operations that would introduce a cycle are rejected.
pub struct Scene {
    bones: Vec<Bone>,
    cubes: Vec<Cube>,
    next_bone_id: u64,
    next_cube_id: u64,
    selection: Selection,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bones: Vec::new(),
            cubes: Vec::new(),
            next_bone_id: 1,
            next_cube_id: 1,
            selection: Selection::None,
        }
    }

    // --- Bones ---

    /// Create a bone with identity transforms and no parent. The display
    /// name is `base_name` plus the allocated id.
    pub fn add_bone(&mut self, base_name: &str) -> BoneId {
        let id = BoneId::from_raw(self.next_bone_id);
        self.next_bone_id += 1;
        self.bones.push(Bone::new(id, base_name));
        id
    }

    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.iter().find(|b| b.id == id)
    }

    pub fn bone_mut(&mut self, id: BoneId) -> Option<&mut Bone> {
        self.bones.iter_mut().find(|b| b.id == id)
    }

    /// Bones in creation order
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// (id, display name) pairs for selection and parent pickers
    pub fn bone_list(&self) -> Vec<(BoneId, &str)> {
        self.bones.iter().map(|b| (b.id, b.name.as_str())).collect()
    }

    fn bone_index(&self, id: BoneId) -> Option<usize> {
        self.bones.iter().position(|b| b.id == id)
    }

    /// Walk `bone`'s parent chain looking for `ancestor`.
    pub fn is_descendant_of(&self, bone: BoneId, ancestor: BoneId) -> bool {
        let mut current = self.bone(bone).and_then(|b| b.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.bone(id).and_then(|b| b.parent);
        }
        false
    }

    /// Reparent `child` under `new_parent` (or detach it to a root when
    /// `None`), preserving the child's world-space placement.
    ///
    /// Errors only on unknown ids. Self-parenting and reparents that would
    /// create a cycle silently leave the graph unchanged; callers that need
    /// to know must compare state before and after.
    ///
    /// The child's position is re-derived from the translation column of its
    /// new local matrix. Rotation fields are left untouched even though the
    /// new local matrix may carry a rotation difference; the UI treats the
    /// rotation fields as authoritative.
    pub fn set_parent(&mut self, child: BoneId, new_parent: Option<BoneId>) -> Result<()> {
        if self.bone(child).is_none() {
            return Err(ArmatureError::BoneNotFound(child));
        }
        if let Some(parent) = new_parent {
            if self.bone(parent).is_none() {
                return Err(ArmatureError::BoneNotFound(parent));
            }
            if parent == child {
                return Ok(());
            }
            // Cycle guard: the new parent must not sit below the child
            if self.is_descendant_of(parent, child) {
                return Ok(());
            }
        }

        // Refresh the child under its current parent and capture its world
        // placement before detaching.
        self.update_bone_matrix(child);
        let old_world = self
            .bone(child)
            .map(|b| b.world_matrix)
            .unwrap_or_else(mat4_identity);

        // The new parent's chain must be current before its world matrix is
        // inverted against the captured placement.
        let parent_inv = match new_parent {
            Some(parent) => {
                self.update_bone_matrix(parent);
                let parent_world = self
                    .bone(parent)
                    .map(|b| b.world_matrix)
                    .unwrap_or_else(mat4_identity);
                mat4_inverse(&parent_world)
            }
            None => mat4_identity(),
        };

        // Detach from the old parent's children list
        let old_parent = self.bone(child).and_then(|b| b.parent);
        if let Some(old_parent) = old_parent {
            if let Some(bone) = self.bone_mut(old_parent) {
                bone.children.retain(|&c| c != child);
            }
        }

        // Attach
        if let Some(parent) = new_parent {
            if let Some(bone) = self.bone_mut(parent) {
                bone.children.push(child);
            }
        }

        let model = mat4_mul(&parent_inv, &old_world);
        if let Some(bone) = self.bone_mut(child) {
            bone.parent = new_parent;
            bone.model_matrix = model;
            // parent.world x model still equals the old world placement
            bone.world_matrix = old_world;
            bone.position = Vec3::new(model[3][0], model[3][1], model[3][2]);
        }

        Ok(())
    }

    /// Recompute matrices for the whole tree containing `id`.
    ///
    /// Walks up to the root first, then recomputes model and world matrices
    /// top-down, so no stale matrix can be read anywhere in the tree after a
    /// call on any of its members.
    pub fn update_bone_matrix(&mut self, id: BoneId) {
        let Some(mut root) = self.bone(id).map(|b| b.id) else {
            return;
        };
        while let Some(parent) = self.bone(root).and_then(|b| b.parent) {
            root = parent;
        }
        self.update_bone_subtree(root, None);
    }

    /// Recompute `root`'s subtree top-down given the parent's world matrix
    /// (`None` at a tree root).
    fn update_bone_subtree(&mut self, root: BoneId, parent_world: Option<Mat4>) {
        let mut stack = vec![(root, parent_world)];
        while let Some((id, parent_world)) = stack.pop() {
            let Some(index) = self.bone_index(id) else {
                continue;
            };
            let bone = &mut self.bones[index];
            let model = bone_local_matrix(bone.position, bone.rotation);
            bone.model_matrix = model;
            bone.world_matrix = match parent_world {
                Some(parent) => mat4_mul(&parent, &model),
                None => model,
            };
            let world = bone.world_matrix;
            for &child in &bone.children {
                stack.push((child, Some(world)));
            }
        }
    }

    // --- Cubes ---

    /// Create a cube with unit half-extents. New cubes default-bind to the
    /// first-created bone when the scene has one.
    pub fn add_cube(&mut self) -> CubeId {
        let id = CubeId::from_raw(self.next_cube_id);
        self.next_cube_id += 1;
        let default_bone = self.bones.first().map(|b| b.id);
        self.cubes.push(Cube::new(id, default_bone));
        id
    }

    pub fn cube(&self, id: CubeId) -> Option<&Cube> {
        self.cubes.iter().find(|c| c.id == id)
    }

    pub fn cube_mut(&mut self, id: CubeId) -> Option<&mut Cube> {
        self.cubes.iter_mut().find(|c| c.id == id)
    }

    /// Cubes in creation order
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    fn cube_index(&self, id: CubeId) -> Option<usize> {
        self.cubes.iter().position(|c| c.id == id)
    }

    /// Bind a cube to a bone (or unbind with `None`). The bone must exist in
    /// the registry at bind time; nothing else is validated.
    pub fn bind_cube(&mut self, cube: CubeId, bone: Option<BoneId>) -> Result<()> {
        if let Some(bone) = bone {
            if self.bone(bone).is_none() {
                return Err(ArmatureError::BoneNotFound(bone));
            }
        }
        match self.cube_mut(cube) {
            Some(c) => {
                c.bone = bone;
                Ok(())
            }
            None => Err(ArmatureError::CubeNotFound(cube)),
        }
    }

    pub fn set_cube_half_extents(&mut self, cube: CubeId, half_extents: Vec3) -> Result<()> {
        match self.cube_mut(cube) {
            Some(c) => {
                c.set_half_extents(half_extents);
                Ok(())
            }
            None => Err(ArmatureError::CubeNotFound(cube)),
        }
    }

    /// Recompute one cube's final matrix, forcing the bound bone's tree up
    /// to date first.
    pub fn update_cube_matrix(&mut self, id: CubeId) {
        let Some(index) = self.cube_index(id) else {
            return;
        };
        if let Some(bone_id) = self.cubes[index].bone {
            self.update_bone_matrix(bone_id);
        }
        self.refresh_cube_final(index);
    }

    /// Compose a cube's final matrix from the (already current) bound bone
    /// world matrix and the cube's local matrix.
    fn refresh_cube_final(&mut self, index: usize) {
        let local = self.cubes[index].transform.to_matrix();
        let bone_world = self.cubes[index]
            .bone
            .and_then(|id| self.bone(id))
            .map(|b| b.world_matrix);
        self.cubes[index].final_matrix = match bone_world {
            Some(world) => mat4_mul(&world, &local),
            None => local,
        };
    }

    // --- Frame update pass ---

    /// Recompute every matrix in the scene in the fixed frame order:
    /// every root bone's subtree first, then every cube's final matrix.
    pub fn update(&mut self) {
        let roots: Vec<BoneId> = self
            .bones
            .iter()
            .filter(|b| b.is_root())
            .map(|b| b.id)
            .collect();
        for root in roots {
            self.update_bone_subtree(root, None);
        }
        for index in 0..self.cubes.len() {
            self.refresh_cube_final(index);
        }
    }

    // --- Selection ---

    /// Replace the current selection, clearing the previous entity's flag.
    /// Selecting a bone and a cube are mutually exclusive.
    pub fn select(&mut self, selection: Selection) {
        match self.selection {
            Selection::Bone(id) => {
                if let Some(bone) = self.bone_mut(id) {
                    bone.selected = false;
                }
            }
            Selection::Cube(id) => {
                if let Some(cube) = self.cube_mut(id) {
                    cube.selected = false;
                }
            }
            Selection::None => {}
        }

        self.selection = match selection {
            Selection::Bone(id) => match self.bone_mut(id) {
                Some(bone) => {
                    bone.selected = true;
                    selection
                }
                None => Selection::None,
            },
            Selection::Cube(id) => match self.cube_mut(id) {
                Some(cube) => {
                    cube.selected = true;
                    selection
                }
                None => Selection::None,
            },
            Selection::None => Selection::None,
        };
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// World position of the selected entity, if any
    pub fn selected_world_position(&self) -> Option<Vec3> {
        match self.selection {
            Selection::Bone(id) => self.bone(id).map(|b| b.world_position()),
            Selection::Cube(id) => self.cube(id).map(|c| c.world_position()),
            Selection::None => None,
        }
    }

    /// Nearest-entity hit test in a simplified 2D projection: entity world
    /// positions scaled by a fixed factor are compared against the pointer's
    /// normalized coordinates. An approximation, not a true ray cast; depth
    /// is ignored.
    pub fn pick_entity(&self, pointer_ndc: [f32; 2]) -> Selection {
        let mut best = Selection::None;
        let mut best_dist = PICK_RADIUS;

        let bones = self
            .bones
            .iter()
            .map(|b| (Selection::Bone(b.id), b.world_position()));
        let cubes = self
            .cubes
            .iter()
            .map(|c| (Selection::Cube(c.id), c.world_position()));

        for (candidate, world) in bones.chain(cubes) {
            let dx = pointer_ndc[0] - world.x * PICK_SCALE;
            let dy = pointer_ndc[1] - world.y * PICK_SCALE;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }

        best
    }

    // --- Accessors for the selected entity (UI surface) ---

    /// Local position of the selected entity
    pub fn selected_position(&self) -> Option<Vec3> {
        match self.selection {
            Selection::Bone(id) => self.bone(id).map(|b| b.position),
            Selection::Cube(id) => self.cube(id).map(|c| c.transform.position),
            Selection::None => None,
        }
    }

    pub fn set_selected_position(&mut self, position: Vec3) {
        match self.selection {
            Selection::Bone(id) => {
                if let Some(bone) = self.bone_mut(id) {
                    bone.position = position;
                }
            }
            Selection::Cube(id) => {
                if let Some(cube) = self.cube_mut(id) {
                    cube.transform.position = position;
                }
            }
            Selection::None => {}
        }
    }

    pub fn selected_rotation(&self) -> Option<Vec3> {
        match self.selection {
            Selection::Bone(id) => self.bone(id).map(|b| b.rotation),
            Selection::Cube(id) => self.cube(id).map(|c| c.transform.rotation),
            Selection::None => None,
        }
    }

    pub fn set_selected_rotation(&mut self, rotation: Vec3) {
        match self.selection {
            Selection::Bone(id) => {
                if let Some(bone) = self.bone_mut(id) {
                    bone.rotation = rotation;
                }
            }
            Selection::Cube(id) => {
                if let Some(cube) = self.cube_mut(id) {
                    cube.transform.rotation = rotation;
                }
            }
            Selection::None => {}
        }
    }

    /// Scale of the selected cube; bones carry no scale
    pub fn selected_scale(&self) -> Option<Vec3> {
        match self.selection {
            Selection::Cube(id) => self.cube(id).map(|c| c.transform.scale),
            _ => None,
        }
    }

    pub fn set_selected_scale(&mut self, scale: Vec3) {
        if let Selection::Cube(id) = self.selection {
            if let Some(cube) = self.cube_mut(id) {
                cube.transform.scale = scale;
            }
        }
    }

    /// Half-extents of the selected cube
    pub fn selected_half_extents(&self) -> Option<Vec3> {
        match self.selection {
            Selection::Cube(id) => self.cube(id).map(|c| c.half_extents()),
            _ => None,
        }
    }

    pub fn set_selected_half_extents(&mut self, half_extents: Vec3) {
        if let Selection::Cube(id) = self.selection {
            if let Some(cube) = self.cube_mut(id) {
                cube.set_half_extents(half_extents);
            }
        }
    }
}

/// Bone local matrix: T · Rx · Ry · Rz (bones carry no scale)
fn bone_local_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    let mut m = mat4_translation(position.x, position.y, position.z);
    m = mat4_mul(&m, &mat4_rotation_x(rotation.x));
    m = mat4_mul(&m, &mat4_rotation_y(rotation.y));
    mat4_mul(&m, &mat4_rotation_z(rotation.z))
}
