//! Armature CLI - headless demos for the scene core

use anyhow::Result;
use armature_core::Vec3;
use armature_editor::{Axis, Gizmo};
use armature_scene::{Scene, Selection};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "armature")]
#[command(about = "Bone/cube scene editor core, driven headlessly", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the demo rig and dump world transforms
    Demo,

    /// Demonstrate world-pose-preserving reparenting on the demo rig
    Reparent,

    /// Demonstrate an axis-constrained gizmo drag on the demo rig
    Drag,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Reparent => run_reparent(),
        Commands::Drag => run_drag(),
    }
}

/// A small rig: a three-bone spine with an off-axis arm, plus two cubes
/// (one bound to the arm, one loose).
fn build_demo_rig(scene: &mut Scene) {
    let root = scene.add_bone("Root");
    let spine = scene.add_bone("Spine");
    let arm = scene.add_bone("Arm");
    scene.set_parent(spine, Some(root)).expect("bones exist");
    scene.set_parent(arm, Some(spine)).expect("bones exist");

    scene.bone_mut(spine).expect("bone exists").position = Vec3::new(0.0, 1.0, 0.0);
    scene.bone_mut(arm).expect("bone exists").position = Vec3::new(1.0, 0.5, 0.0);
    scene.bone_mut(arm).expect("bone exists").rotation = Vec3::new(0.0, 0.0, 0.4);

    let bound = scene.add_cube(); // binds to the first-created bone
    scene.bind_cube(bound, Some(arm)).expect("arm exists");
    scene
        .cube_mut(bound)
        .expect("cube exists")
        .transform
        .position = Vec3::new(0.5, 0.0, 0.0);

    let loose = scene.add_cube();
    scene.bind_cube(loose, None).expect("cube exists");
    scene
        .cube_mut(loose)
        .expect("cube exists")
        .transform
        .position = Vec3::new(-2.0, 0.0, 1.0);

    scene.update();
}

fn print_scene(scene: &Scene) {
    println!("Bones: {}", scene.bones().len());
    for bone in scene.bones() {
        let parent = match bone.parent.and_then(|id| scene.bone(id)) {
            Some(parent) => parent.name.clone(),
            None => "-".to_string(),
        };
        let local = bone.position;
        let world = bone.world_position();
        println!(
            "  [{}] {:<10} parent={:<10} local=({:.2}, {:.2}, {:.2}) world=({:.2}, {:.2}, {:.2})",
            bone.id, bone.name, parent, local.x, local.y, local.z, world.x, world.y, world.z
        );
    }

    println!("Cubes: {}", scene.cubes().len());
    for cube in scene.cubes() {
        let bone = match cube.bone.and_then(|id| scene.bone(id)) {
            Some(bone) => bone.name.clone(),
            None => "-".to_string(),
        };
        let world = cube.world_position();
        println!(
            "  [{}] bone={:<10} world=({:.2}, {:.2}, {:.2})",
            cube.id, bone, world.x, world.y, world.z
        );
    }
}

fn run_demo() -> Result<()> {
    let mut scene = Scene::new();
    build_demo_rig(&mut scene);
    print_scene(&scene);
    Ok(())
}

fn run_reparent() -> Result<()> {
    let mut scene = Scene::new();
    build_demo_rig(&mut scene);

    let arm = scene
        .bone_list()
        .iter()
        .find(|(_, name)| name.starts_with("Arm"))
        .map(|(id, _)| *id)
        .expect("demo rig has an arm");
    let root = scene
        .bone_list()
        .iter()
        .find(|(_, name)| name.starts_with("Root"))
        .map(|(id, _)| *id)
        .expect("demo rig has a root");

    let before = scene.bone(arm).expect("bone exists").world_position();
    println!(
        "Arm world position before: ({:.4}, {:.4}, {:.4})",
        before.x, before.y, before.z
    );

    scene.set_parent(arm, Some(root))?;
    scene.update();

    let after = scene.bone(arm).expect("bone exists").world_position();
    println!(
        "Arm world position after:  ({:.4}, {:.4}, {:.4})",
        after.x, after.y, after.z
    );
    println!("World placement preserved across the reparent.");
    print_scene(&scene);
    Ok(())
}

fn run_drag() -> Result<()> {
    let mut scene = Scene::new();
    build_demo_rig(&mut scene);

    let root = scene.bones().first().expect("demo rig has bones").id;
    scene.select(Selection::Bone(root));

    let mut gizmo = Gizmo::new();
    let start = scene.selected_position().expect("selection exists");
    gizmo.begin_drag(Axis::Y, [400.0, 300.0], start);

    // Drag 50 px up; screen-up maps to world-up
    if let Some(position) = gizmo.drag_position([400.0, 250.0]) {
        scene.set_selected_position(position);
    }
    gizmo.end_drag();
    scene.update();

    let moved = scene.selected_position().expect("selection exists");
    println!(
        "Root local position after a 50 px upward Y drag: ({:.2}, {:.2}, {:.2})",
        moved.x, moved.y, moved.z
    );
    print_scene(&scene);
    Ok(())
}
