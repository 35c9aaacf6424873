//! Application state: mesh, camera, light and the frame tick
//!
//! The tick source and the frame build are strictly serialized: whole
//! ticks of elapsed time advance the rotation angle first, then the frame
//! is built against the settled camera state. The angle never changes
//! mid-frame.

use crate::config::EngineConfig;
use crate::renderer::{render_mesh, Camera, Light, Mesh, RenderSettings, Segment, Vec3};

/// World rotation rate in radians per second
pub const ROTATION_RATE: f32 = 1.0;

pub struct App {
    pub mesh: Mesh,
    pub camera: Camera,
    pub light: Light,
    pub settings: RenderSettings,
    width: f32,
    height: f32,
    /// Seconds per tick (1 / fps)
    tick: f32,
    accumulator: f32,
}

impl App {
    pub fn new(mesh: Mesh, config: &EngineConfig) -> Self {
        Self {
            mesh,
            camera: Camera::new(
                config.near,
                config.far,
                config.fov_degrees,
                config.width,
                config.height,
            ),
            light: Light::new(Vec3::new(0.0, 0.0, -1.0)),
            settings: RenderSettings::default(),
            width: config.width,
            height: config.height,
            tick: 1.0 / config.fps,
            accumulator: 0.0,
        }
    }

    /// Consume whole ticks of elapsed time, each advancing the rotation
    /// angle. Fractional remainders carry over to the next call.
    pub fn advance(&mut self, dt: f32) {
        self.accumulator += dt;
        while self.accumulator >= self.tick {
            self.camera.angle += ROTATION_RATE * self.tick;
            self.accumulator -= self.tick;
        }
    }

    /// Build one frame's stroke list from the current state
    pub fn build_frame(&self) -> Vec<Segment> {
        render_mesh(
            &self.mesh,
            &self.camera,
            &self.light,
            &self.settings,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.001;

    fn test_app() -> App {
        App::new(Mesh::cube(), &EngineConfig::default())
    }

    #[test]
    fn test_advance_consumes_whole_ticks() {
        let mut app = test_app();
        // half a tick: no rotation yet
        app.advance(0.5 / 60.0);
        assert_eq!(app.camera.angle, 0.0);
        // the carried remainder completes one tick
        app.advance(0.6 / 60.0);
        assert!((app.camera.angle - ROTATION_RATE / 60.0).abs() < EPS);
    }

    #[test]
    fn test_advance_one_second_of_ticks() {
        let mut app = test_app();
        for _ in 0..60 {
            app.advance(1.0 / 60.0);
        }
        assert!((app.camera.angle - ROTATION_RATE).abs() < EPS);
    }

    #[test]
    fn test_build_frame_is_repeatable() {
        let app = test_app();
        // the frame is a pure function of the settled state
        let first = app.build_frame();
        let second = app.build_frame();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
