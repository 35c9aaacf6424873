//! Core types for the render pipeline

use super::math::{Vec2, Vec3};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Grayscale shade, the form face lighting produces
    pub fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v, a: 255 }
    }
}

/// A horizontal stroke in screen space, the pipeline's only output
/// primitive. The display surface draws these in sequence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub width: f32,
    pub color: Color,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2, width: f32, color: Color) -> Self {
        Self { a, b, width, color }
    }
}

/// Camera state. The rotation angle is driven externally between frames;
/// everything else is fixed at construction.
#[derive(Debug, Clone)]
pub struct Camera {
    pub near: f32,
    pub far: f32,
    pub fov_degrees: f32,
    /// height / width of the output surface
    pub aspect_ratio: f32,
    /// 1 / tan(fov / 2)
    pub fov_scale: f32,
    /// Rotation angle applied to the world each frame
    pub angle: f32,
    /// Eye point for the backface test
    pub position: Vec3,
}

impl Camera {
    pub fn new(near: f32, far: f32, fov_degrees: f32, width: f32, height: f32) -> Self {
        Self {
            near,
            far,
            fov_degrees,
            aspect_ratio: height / width,
            fov_scale: 1.0 / (fov_degrees * 0.5).to_radians().tan(),
            angle: 0.0,
            position: Vec3::ZERO,
        }
    }
}

/// Directional light: arrives uniformly from `direction`, normalized at use.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub direction: Vec3,
}

impl Light {
    pub fn new(direction: Vec3) -> Self {
        Self { direction }
    }
}

/// Render settings
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Vertical distance between scanlines (sub-pixel sampling density)
    pub scan_step: f32,
    /// Stroke width for spans emitted while walking down the screen
    pub descend_stroke: f32,
    /// Stroke width for spans emitted while walking up the screen
    pub ascend_stroke: f32,
    /// Clamp lighting intensity to [0, 1] before quantizing
    pub clamp_shading: bool,
    /// Distance the mesh is pushed along +Z in front of the camera
    pub forward_offset: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scan_step: 0.5,
            descend_stroke: 0.5,
            ascend_stroke: 1.0,
            clamp_shading: false,
            forward_offset: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.001;

    #[test]
    fn test_camera_derived_values() {
        let cam = Camera::new(0.5, 100.0, 90.0, 1280.0, 720.0);
        assert!((cam.aspect_ratio - 0.5625).abs() < EPS);
        // tan(45 deg) == 1
        assert!((cam.fov_scale - 1.0).abs() < EPS);
        assert_eq!(cam.angle, 0.0);
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn test_gray_color() {
        let c = Color::gray(200);
        assert_eq!(c, Color::new(200, 200, 200));
        assert_eq!(c.a, 255);
        assert_eq!(Color::gray(0), Color::BLACK);
        assert_eq!(Color::gray(255), Color::WHITE);
    }

    #[test]
    fn test_default_settings_pin_current_behavior() {
        let s = RenderSettings::default();
        assert_eq!(s.scan_step, 0.5);
        assert_eq!(s.descend_stroke, 0.5);
        assert_eq!(s.ascend_stroke, 1.0);
        assert!(!s.clamp_shading);
        assert_eq!(s.forward_offset, 12.0);
    }
}
