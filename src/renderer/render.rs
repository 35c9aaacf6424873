//! Core rendering: transform, cull, light, depth-sort and scanline fill
//!
//! One frame is a pure function of (mesh, camera, light, settings, output
//! size). Faces are rotated into view, backfaces dropped, survivors shaded
//! and projected, then rasterized back-to-front into horizontal strokes.

use super::math::{Mat4, Vec2, Vec3};
use super::mesh::Mesh;
use super::types::{Camera, Color, Light, RenderSettings, Segment};

/// A face that survived culling: screen-space vertices (z retained for
/// depth ordering) and the shade computed from its normal.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedFace {
    pub p: [Vec3; 3],
    pub color: Color,
}

impl ProjectedFace {
    fn mean_depth(&self) -> f32 {
        (self.p[0].z + self.p[1].z + self.p[2].z) / 3.0
    }
}

/// Build one frame: every face of the mesh is processed from scratch and
/// the surviving faces' strokes are concatenated in painter's order.
pub fn render_mesh(
    mesh: &Mesh,
    camera: &Camera,
    light: &Light,
    settings: &RenderSettings,
    width: f32,
    height: f32,
) -> Vec<Segment> {
    let rot_z = Mat4::rotation_z(camera.angle);
    // the X spin runs at half the Z rate
    let rot_x = Mat4::rotation_x(camera.angle * 0.5);
    let projection = Mat4::projection(camera.aspect_ratio, camera.fov_scale, camera.far, camera.near);
    let light_dir = light.direction.normalize();

    let mut visible: Vec<ProjectedFace> = Vec::with_capacity(mesh.faces.len());

    for face in &mesh.faces {
        // rotate the world, then push it out in front of the camera
        let mut p = face.p.map(|v| rot_x.transform(rot_z.transform(v)));
        for v in &mut p {
            v.z += settings.forward_offset;
        }

        // keep only faces whose normal points back toward the eye;
        // zero-area faces normalize to zero and always fail this test
        let normal = face_normal(&p);
        if normal.dot(p[0] - camera.position) >= 0.0 {
            continue;
        }

        let color = shade_color(normal, light_dir, settings);
        let p = p.map(|v| to_screen(projection.transform(v), width, height));
        visible.push(ProjectedFace { p, color });
    }

    sort_by_depth(&mut visible);

    let mut segments = Vec::new();
    for face in &visible {
        fill_triangle(face, settings, &mut segments);
    }
    segments
}

/// Surface normal from the two edges out of vertex 0
fn face_normal(p: &[Vec3; 3]) -> Vec3 {
    let line1 = p[1] - p[0];
    let line2 = p[2] - p[0];
    line1.cross(line2).normalize()
}

/// Lambert term against the light direction, quantized to a gray byte.
/// The saturating cast pins out-of-range intensities to 0 or 255.
fn shade_color(normal: Vec3, light_dir: Vec3, settings: &RenderSettings) -> Color {
    let mut intensity = normal.dot(light_dir);
    if settings.clamp_shading {
        intensity = intensity.clamp(0.0, 1.0);
    }
    Color::gray((255.0 * intensity).round() as u8)
}

/// Remap normalized device coordinates to pixels
fn to_screen(v: Vec3, width: f32, height: f32) -> Vec3 {
    Vec3 {
        x: (v.x + 1.0) * 0.5 * width,
        y: (v.y + 1.0) * 0.5 * height,
        z: v.z,
    }
}

/// Ascending mean projected depth. Under this projection a nearer face
/// carries the greater projected z, so ascending order rasterizes far
/// faces first. Stable, so equal-depth faces keep mesh order.
fn sort_by_depth(faces: &mut [ProjectedFace]) {
    faces.sort_by(|a, b| a.mean_depth().total_cmp(&b.mean_depth()));
}

/// Scanline-fill one screen-space triangle into horizontal strokes.
///
/// Vertices are sorted ascending by y and the triangle is routed on where
/// its flat edge sits: flat edge at the smaller y walks down to the apex,
/// flat edge at the larger y walks up to it, and the general case splits
/// on the long edge at the middle vertex's y into one of each.
fn fill_triangle(face: &ProjectedFace, settings: &RenderSettings, out: &mut Vec<Segment>) {
    let [mut a, mut b, mut c] = face.p;
    if a.y > b.y {
        std::mem::swap(&mut a, &mut b);
    }
    if a.y > c.y {
        std::mem::swap(&mut a, &mut c);
    }
    if b.y > c.y {
        std::mem::swap(&mut b, &mut c);
    }

    if a.y == c.y {
        // zero height
        return;
    }

    if a.y == b.y {
        fill_descending(a, b, c, settings, face.color, out);
    } else if b.y == c.y {
        fill_ascending(b, c, a, settings, face.color, out);
    } else {
        let split = Vec3 {
            x: a.x + (b.y - a.y) / (c.y - a.y) * (c.x - a.x),
            y: b.y,
            z: 0.0,
        };
        fill_ascending(b, split, a, settings, face.color, out);
        fill_descending(b, split, c, settings, face.color, out);
    }
}

/// Fill from a flat edge at the smaller y down to the apex, inclusive
fn fill_descending(
    f1: Vec3,
    f2: Vec3,
    apex: Vec3,
    settings: &RenderSettings,
    color: Color,
    out: &mut Vec<Segment>,
) {
    let invslope1 = (apex.x - f1.x) / (apex.y - f1.y);
    let invslope2 = (apex.x - f2.x) / (apex.y - f2.y);
    let mut cur_x1 = f1.x;
    let mut cur_x2 = f2.x;

    let mut scanline_y = f1.y;
    while scanline_y <= apex.y {
        out.push(Segment::new(
            Vec2::new(cur_x1, scanline_y),
            Vec2::new(cur_x2, scanline_y),
            settings.descend_stroke,
            color,
        ));
        cur_x1 += invslope1 * settings.scan_step;
        cur_x2 += invslope2 * settings.scan_step;
        scanline_y += settings.scan_step;
    }
}

/// Fill from a flat edge at the larger y up toward the apex, exclusive.
/// A zero-height call never enters the loop and emits nothing.
fn fill_ascending(
    f1: Vec3,
    f2: Vec3,
    apex: Vec3,
    settings: &RenderSettings,
    color: Color,
    out: &mut Vec<Segment>,
) {
    let invslope1 = (f1.x - apex.x) / (f1.y - apex.y);
    let invslope2 = (f2.x - apex.x) / (f2.y - apex.y);
    let mut cur_x1 = f1.x;
    let mut cur_x2 = f2.x;

    let mut scanline_y = f1.y;
    while scanline_y > apex.y {
        out.push(Segment::new(
            Vec2::new(cur_x1, scanline_y),
            Vec2::new(cur_x2, scanline_y),
            settings.ascend_stroke,
            color,
        ));
        cur_x1 -= invslope1 * settings.scan_step;
        cur_x2 -= invslope2 * settings.scan_step;
        scanline_y -= settings.scan_step;
    }
}
