use std::f32::consts::TAU;

use super::{Matrix, Vector4};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl_component_ops!(Vector2 { x, y });

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    #[inline]
    pub fn distance(self, v: Vector2) -> f32 {
        (v - self).length()
    }

    /// Direction from `self` towards `v` in radians, in `[0, 2π)`.
    pub fn angle_to(self, v: Vector2) -> f32 {
        let angle = (v.y - self.y).atan2(v.x - self.x);
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }

    /// Unit vector in the same direction; a zero vector stays zero.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self / length
        } else {
            self
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_component_ops!(Vector3 { x, y, z });

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    #[inline]
    pub fn distance(self, v: Vector3) -> f32 {
        (v - self).length()
    }

    pub fn cross(self, v: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * v.z - self.z * v.y,
            y: self.z * v.x - self.x * v.z,
            z: self.x * v.y - self.y * v.x,
        }
    }

    /// A vector perpendicular to `self`, crossed against the least dominant cardinal axis.
    pub fn perpendicular(self) -> Vector3 {
        let mut min = self.x.abs();
        let mut cardinal = Vector3::new(1.0, 0.0, 0.0);
        if self.y.abs() < min {
            min = self.y.abs();
            cardinal = Vector3::new(0.0, 1.0, 0.0);
        }
        if self.z.abs() < min {
            cardinal = Vector3::new(0.0, 0.0, 1.0);
        }
        self.cross(cardinal)
    }

    pub fn normalize(self) -> Self {
        let length = self.length();
        if length != 0.0 {
            self * (1.0 / length)
        } else {
            self
        }
    }

    /// Gram-Schmidt orthonormalization of the pair.
    pub fn ortho_normalize(v1: Vector3, v2: Vector3) -> (Vector3, Vector3) {
        let v1 = v1.normalize();
        let vn = v1.cross(v2).normalize();
        (v1, vn.cross(v1))
    }

    pub fn transform(self, mat: &Matrix) -> Vector3 {
        let m = &mat.0;
        Vector3 {
            x: m[0] * self.x + m[4] * self.y + m[8] * self.z + m[12],
            y: m[1] * self.x + m[5] * self.y + m[9] * self.z + m[13],
            z: m[2] * self.x + m[6] * self.y + m[10] * self.z + m[14],
        }
    }

    pub fn rotate_by_quaternion(self, q: Vector4) -> Vector3 {
        let Vector3 { x, y, z } = self;
        Vector3 {
            x: x * (q.x * q.x + q.w * q.w - q.y * q.y - q.z * q.z)
                + y * (2.0 * q.x * q.y - 2.0 * q.w * q.z)
                + z * (2.0 * q.x * q.z + 2.0 * q.w * q.y),
            y: x * (2.0 * q.w * q.z + 2.0 * q.x * q.y)
                + y * (q.w * q.w - q.x * q.x + q.y * q.y - q.z * q.z)
                + z * (-2.0 * q.w * q.x + 2.0 * q.y * q.z),
            z: x * (-2.0 * q.w * q.y + 2.0 * q.x * q.z)
                + y * (2.0 * q.w * q.x + 2.0 * q.y * q.z)
                + z * (q.w * q.w - q.x * q.x - q.y * q.y + q.z * q.z),
        }
    }

    /// Reflection of `self` across the plane defined by `normal`.
    pub fn reflect(self, normal: Vector3) -> Vector3 {
        let dot = self.dot(normal);
        self - normal * (2.0 * dot)
    }

    pub fn min(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x.min(v.x), self.y.min(v.y), self.z.min(v.z))
    }

    pub fn max(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x.max(v.x), self.y.max(v.y), self.z.max(v.z))
    }

    /// Barycentric coordinates `(u, v, w)` of point `p` in triangle `(a, b, c)`.
    pub fn barycenter(p: Vector3, a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
        let v0 = b - a;
        let v1 = c - a;
        let v2 = p - a;
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;
        let y = (d11 * d20 - d01 * d21) / denom;
        let z = (d00 * d21 - d01 * d20) / denom;
        Vector3::new(1.0 - (z + y), y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_wraps() {
        let origin = Vector2::ZERO;
        assert_eq!(origin.angle_to(Vector2::new(1.0, 0.0)), 0.0);
        let down = origin.angle_to(Vector2::new(0.0, -1.0));
        assert!((down - 1.5 * std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_cross_and_perpendicular() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));

        let v = Vector3::new(3.0, -2.0, 7.0);
        assert!(v.perpendicular().dot(v).abs() < 1e-5);
    }

    #[test]
    fn test_ortho_normalize() {
        let (a, b) = Vector3::ortho_normalize(Vector3::new(2.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(a, Vector3::new(1.0, 0.0, 0.0));
        assert!((b.length() - 1.0).abs() < 1e-6);
        assert!(a.dot(b).abs() < 1e-6);
    }

    #[test]
    fn test_barycenter() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 0.0, 0.0);
        let c = Vector3::new(0.0, 1.0, 0.0);
        let bc = Vector3::barycenter(Vector3::new(0.25, 0.25, 0.0), a, b, c);
        assert!((bc.x - 0.5).abs() < 1e-6);
        assert!((bc.y - 0.25).abs() < 1e-6);
        assert!((bc.z - 0.25).abs() < 1e-6);
    }
}
