//! Wire4D - interactive 3D/4D wireframe visualizer

use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use wire4d::app::App;
use wire4d::cli::{Cli, ShapeArg};
use wire4d::config::AppConfig;
use wire4d::scene::Scene;
use wire4d_core::Color;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Starting Wire4D");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {e}. Using defaults.");
        AppConfig::default()
    });

    let scene = match &cli.mesh {
        Some(path) => {
            let [r, g, b] = config.view.mesh_color;
            match Scene::from_mesh(path, Color::rgb(r, g, b)) {
                Ok(scene) => scene,
                Err(e) => {
                    log::error!("Failed to load mesh {}: {e}", path.display());
                    std::process::exit(1);
                }
            }
        }
        None => match cli.shape {
            ShapeArg::Cube => Scene::cube(config.view.shape_size),
            ShapeArg::Tesseract => Scene::tesseract(config.view.shape_size),
        },
    };
    let (points, edges) = scene.shape_counts();
    log::info!(
        "Displaying a {}D shape: {points} points, {edges} edges",
        scene.dimension()
    );

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, scene, cli.fullscreen);
    event_loop.run_app(&mut app).expect("Event loop error");
}
