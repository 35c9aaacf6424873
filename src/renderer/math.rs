//! Vector and matrix math for the render pipeline

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Zero-length vectors normalize to zero rather than dividing by zero.
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l == 0.0 {
            return Vec3::ZERO;
        }
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

/// 2D Vector (screen-space points)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 4x4 homogeneous transform matrix, row-vector convention:
/// a vertex multiplies as `[x y z 1] * M`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Rotation about the Z axis
    pub fn rotation_z(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Mat4 {
            m: [
                [cos, sin, 0.0, 0.0],
                [-sin, cos, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation about the X axis
    pub fn rotation_x(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Mat4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, cos, sin, 0.0],
                [0.0, -sin, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Perspective projection. The zero in `m[3][3]` makes the homogeneous
    /// w of every transformed vertex a multiple of its z, so `transform`
    /// applies the perspective divide to all projected points.
    pub fn projection(aspect_ratio: f32, fov_scale: f32, far: f32, near: f32) -> Self {
        let q = far / (far - near);
        let p = (-far * near) / (far - near);
        Mat4 {
            m: [
                [aspect_ratio * fov_scale, 0.0, 0.0, 0.0],
                [0.0, fov_scale, 0.0, 0.0],
                [0.0, 0.0, q, p],
                [0.0, 0.0, p, 0.0],
            ],
        }
    }

    /// Transform a point with an implicit w of 1, dividing by the computed
    /// w only when it is non-zero. Rotations leave w at 1 and pass through
    /// unchanged; projections produce a z-scaled w and get the perspective
    /// divide.
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        let x = v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + m[3][0];
        let y = v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + m[3][1];
        let z = v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + m[3][2];
        let w = v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + m[3][3];

        if w != 0.0 {
            Vec3 { x: x / w, y: y / w, z: z / w }
        } else {
            Vec3 { x, y, z }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.001;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < EPS);
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert!((c.z - 1.0).abs() < EPS);
        assert!(c.x.abs() < EPS && c.y.abs() < EPS);
    }

    #[test]
    fn test_vec3_arithmetic() {
        let v = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0) - Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(4.0, 6.0, 8.0));
        assert_eq!(v * 0.5, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec3::new(3.0, -4.0, 12.0).normalize();
        assert!((v.len() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        let v = Vec3::ZERO.normalize();
        assert_eq!(v, Vec3::ZERO);
    }

    #[test]
    fn test_identity_transform() {
        let v = Vec3::new(1.5, -2.5, 3.5);
        let out = Mat4::IDENTITY.transform(v);
        assert!((out.x - v.x).abs() < EPS);
        assert!((out.y - v.y).abs() < EPS);
        assert!((out.z - v.z).abs() < EPS);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let out = m.transform(Vec3::new(1.0, 0.0, 0.0));
        assert!(out.x.abs() < EPS);
        assert!((out.y - 1.0).abs() < EPS);
        assert!(out.z.abs() < EPS);
    }

    #[test]
    fn test_rotation_x_quarter_turn() {
        let m = Mat4::rotation_x(std::f32::consts::FRAC_PI_2);
        let out = m.transform(Vec3::new(0.0, 1.0, 0.0));
        assert!(out.x.abs() < EPS);
        assert!(out.y.abs() < EPS);
        assert!((out.z - 1.0).abs() < EPS);
    }

    #[test]
    fn test_projection_applies_perspective_divide() {
        // 1280x720 defaults: aspect 0.5625, 90 degree fov scale of 1.0
        let m = Mat4::projection(0.5625, 1.0, 100.0, 0.5);
        let out = m.transform(Vec3::new(0.0, 0.0, 12.0));
        assert!(out.x.abs() < EPS);
        assert!(out.y.abs() < EPS);
        // (12 * 100/99.5 - 50/99.5) / (12 * -50/99.5)
        assert!((out.z - -1.9166666).abs() < EPS);
    }

    #[test]
    fn test_projection_skips_divide_at_zero_w() {
        let m = Mat4::projection(0.5625, 1.0, 100.0, 0.5);
        // z = 0 makes the homogeneous w zero; raw components come back
        let out = m.transform(Vec3::new(2.0, 3.0, 0.0));
        assert!((out.x - 2.0 * 0.5625).abs() < EPS);
        assert!((out.y - 3.0).abs() < EPS);
        assert!((out.z - (-100.0 * 0.5 / 99.5)).abs() < EPS);
    }
}
