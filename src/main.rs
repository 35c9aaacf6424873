//! Scanline Engine: painter's-algorithm software 3D renderer
//!
//! Meshes are rotated, culled, lit, projected and filled into horizontal
//! scanline strokes which are drawn straight onto the window - there is
//! no framebuffer and no depth buffer. The world auto-rotates at a fixed
//! rate consumed in whole ticks of the configured frame rate.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod renderer;

use app::App;
use macroquad::prelude::*;
use renderer::Mesh;

const CONFIG_PATH: &str = "assets/config.ron";
const MODEL_PATH: &str = "assets/models/cube.obj";

fn window_conf() -> Conf {
    let config = config::load_config_or_default(CONFIG_PATH);
    Conf {
        window_title: format!("Scanline Engine v{}", VERSION),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config::load_config_or_default(CONFIG_PATH);
    println!("=== Scanline Engine v{} ===", VERSION);
    println!(
        "{}x{} @ {} fps, fov {} deg",
        config.width, config.height, config.fps, config.fov_degrees
    );

    let mesh = match Mesh::load(MODEL_PATH) {
        Ok(mesh) => {
            println!("Loaded {}: {} faces", MODEL_PATH, mesh.faces.len());
            mesh
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}, using built-in cube", MODEL_PATH, e);
            Mesh::cube()
        }
    };

    let mut app = App::new(mesh, &config);

    loop {
        app.advance(get_frame_time());

        let segments = app.build_frame();

        clear_background(BLACK);
        for seg in &segments {
            draw_line(
                seg.a.x,
                seg.a.y,
                seg.b.x,
                seg.b.y,
                seg.width,
                Color::from_rgba(seg.color.r, seg.color.g, seg.color.b, seg.color.a),
            );
        }

        let fps = 1.0 / get_frame_time().max(f32::EPSILON);
        draw_text(
            &format!("fps: {:.0} | faces: {}", fps, app.mesh.faces.len()),
            10.0,
            20.0,
            20.0,
            WHITE,
        );

        next_frame().await;
    }
}
