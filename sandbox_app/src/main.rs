//! Headless sandbox for the engine runtime
//!
//! Builds a small scene with a light, a static cube, and a Lua-scripted
//! spinner, runs it for a few simulated frames against a recording render
//! surface, then saves and reloads the scene to exercise persistence.

use ember_engine::prelude::*;

fn main() {
    ember_engine::foundation::logging::init();

    let config = EngineConfig::load_or_default("sandbox.toml");
    log::info!(
        "{} ({}x{})",
        config.window_title,
        config.window_width,
        config.window_height
    );

    let library = MeshLibrary::with_primitives();
    let mut surface = RecordingSurface::with_library(library);

    let mut scene = Scene::new();
    if let Some(path) = &config.startup_scene {
        if let Err(err) = scene.load_from_file(path) {
            log::error!("could not load startup scene {path}: {err}");
        }
    }
    if scene.is_empty() {
        build_demo_scene(&mut scene);
    }

    scene.set_play_mode(true);

    let mut timer = Timer::new();
    for _ in 0..120 {
        timer.update();
        // fixed step keeps the headless run deterministic
        scene.update(1.0 / 60.0);
    }
    surface.clear();
    scene.render(&mut surface);

    let spinner_yaw = scene
        .find_by_name("spinner")
        .map(|o| o.transform().euler_angles_deg().y)
        .unwrap_or_default();
    log::info!(
        "{} frames, {} draw calls, spinner at {spinner_yaw:.1} degrees",
        timer.frame_count(),
        surface.draw_calls().len()
    );

    let scene_path = std::env::temp_dir().join("sandbox_scene.json");
    if let Err(err) = scene.save_to_file(&scene_path) {
        log::error!("save failed: {err}");
        return;
    }
    let mut reloaded = Scene::new();
    match reloaded.load_from_file(&scene_path) {
        Ok(()) => log::info!("reloaded {} objects", reloaded.len()),
        Err(err) => log::error!("reload failed: {err}"),
    }
}

fn build_demo_scene(scene: &mut Scene) {
    let lamp = scene.create_game_object("lamp");
    lamp.transform_mut().position = Vec3::new(2.0, 4.0, 2.0);
    if let Err(err) = lamp.attach(Component::Light(LightComponent::point(
        Vec3::new(1.0, 1.0, 1.0),
        1.5,
        20.0,
    ))) {
        log::error!("failed to attach light: {err}");
    }

    let floor = scene.create_game_object("floor");
    floor.is_static = true;
    floor.transform_mut().scale = Vec3::new(10.0, 0.1, 10.0);
    if let Err(err) = floor.attach(Component::MeshRenderer(MeshRendererComponent::new(
        "Cube",
        Vec3::new(0.4, 0.4, 0.4),
    ))) {
        log::error!("failed to attach floor mesh: {err}");
    }

    let spinner = scene.create_game_object("spinner");
    spinner.transform_mut().position = Vec3::new(0.0, 1.0, 0.0);
    if let Err(err) = spinner.attach(Component::MeshRenderer(MeshRendererComponent::new(
        "Sphere",
        Vec3::new(0.7, 0.2, 0.2),
    ))) {
        log::error!("failed to attach spinner mesh: {err}");
    }
    let script = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/spin.lua");
    if let Err(err) = spinner.attach(Component::Script(ScriptComponent::new(script))) {
        log::error!("failed to attach spinner script: {err}");
    }
}
