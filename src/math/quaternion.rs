use super::{Matrix, Vector3, EPSILON};

/// Four component vector, also used as a quaternion `(x, y, z, w)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_component_ops!(Vector4 { x, y, z, w });

impl Vector4 {
    pub const ZERO: Vector4 = Vector4::new(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Vector4 = Vector4::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }

    pub fn normalize(self) -> Self {
        let mut length = self.length();
        if length == 0.0 {
            length = 1.0;
        }
        self * (1.0 / length)
    }

    pub fn invert(self) -> Self {
        let length_sq = self.dot(self);
        if length_sq == 0.0 {
            return self;
        }
        let inv = 1.0 / length_sq;
        Vector4::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
    }

    /// Hamilton product `self * q`.
    pub fn quat_mul(self, q: Vector4) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (q.x, q.y, q.z, q.w);
        Vector4 {
            x: ax * bw + aw * bx + ay * bz - az * by,
            y: ay * bw + aw * by + az * bx - ax * bz,
            z: az * bw + aw * bz + ax * by - ay * bx,
            w: aw * bw - ax * bx - ay * by - az * bz,
        }
    }

    pub fn nlerp(self, q: Vector4, amount: f32) -> Self {
        self.lerp(q, amount).normalize()
    }

    /// Spherical interpolation, falling back to `nlerp` for nearly parallel quaternions.
    pub fn slerp(self, q: Vector4, amount: f32) -> Self {
        let mut q2 = q;
        let mut cos_half_theta = self.dot(q2);
        if cos_half_theta < 0.0 {
            q2 = -q2;
            cos_half_theta = -cos_half_theta;
        }

        if cos_half_theta.abs() >= 1.0 {
            self
        } else if cos_half_theta > 0.95 {
            self.nlerp(q2, amount)
        } else {
            let half_theta = cos_half_theta.acos();
            let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();
            if sin_half_theta.abs() < 0.001 {
                (self + q2) * 0.5
            } else {
                let ratio_a = ((1.0 - amount) * half_theta).sin() / sin_half_theta;
                let ratio_b = (amount * half_theta).sin() / sin_half_theta;
                self * ratio_a + q2 * ratio_b
            }
        }
    }

    /// Rotation taking direction `from` onto direction `to`.
    pub fn from_vector3_to_vector3(from: Vector3, to: Vector3) -> Self {
        let cos2_theta = from.dot(to);
        let cross = from.cross(to);
        Vector4::new(cross.x, cross.y, cross.z, 1.0 + cos2_theta).normalize()
    }

    pub fn from_matrix(mat: &Matrix) -> Self {
        let m = &mat.0;
        let four_w = m[0] + m[5] + m[10];
        let four_x = m[0] - m[5] - m[10];
        let four_y = m[5] - m[0] - m[10];
        let four_z = m[10] - m[0] - m[5];

        let mut biggest_index = 0;
        let mut biggest = four_w;
        for (index, value) in [(1, four_x), (2, four_y), (3, four_z)] {
            if value > biggest {
                biggest = value;
                biggest_index = index;
            }
        }

        let biggest_val = (biggest + 1.0).sqrt() * 0.5;
        let mult = 0.25 / biggest_val;

        match biggest_index {
            0 => Vector4::new(
                (m[6] - m[9]) * mult,
                (m[8] - m[2]) * mult,
                (m[1] - m[4]) * mult,
                biggest_val,
            ),
            1 => Vector4::new(
                biggest_val,
                (m[1] + m[4]) * mult,
                (m[8] + m[2]) * mult,
                (m[6] - m[9]) * mult,
            ),
            2 => Vector4::new(
                (m[1] + m[4]) * mult,
                biggest_val,
                (m[6] + m[9]) * mult,
                (m[8] - m[2]) * mult,
            ),
            _ => Vector4::new(
                (m[8] + m[2]) * mult,
                (m[6] + m[9]) * mult,
                biggest_val,
                (m[1] - m[4]) * mult,
            ),
        }
    }

    pub fn to_matrix(self) -> Matrix {
        let Vector4 { x, y, z, w } = self;
        let (a2, b2, c2) = (x * x, y * y, z * z);
        let (ac, ab, bc) = (x * z, x * y, y * z);
        let (ad, bd, cd) = (w * x, w * y, w * z);

        let mut result = Matrix::identity();
        let m = &mut result.0;
        m[0] = 1.0 - 2.0 * (b2 + c2);
        m[1] = 2.0 * (ab + cd);
        m[2] = 2.0 * (ac - bd);
        m[4] = 2.0 * (ab - cd);
        m[5] = 1.0 - 2.0 * (a2 + c2);
        m[6] = 2.0 * (bc + ad);
        m[8] = 2.0 * (ac + bd);
        m[9] = 2.0 * (bc - ad);
        m[10] = 1.0 - 2.0 * (a2 + b2);
        result
    }

    /// Rotation of `angle` radians around `axis`.
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        if axis.length() == 0.0 {
            return Vector4::IDENTITY;
        }
        let axis = axis.normalize();
        let (sin, cos) = (angle * 0.5).sin_cos();
        Vector4::new(axis.x * sin, axis.y * sin, axis.z * sin, cos).normalize()
    }

    /// Axis and angle (radians) of this rotation.
    pub fn to_axis_angle(self) -> (Vector3, f32) {
        let q = if self.w.abs() > 1.0 { self.normalize() } else { self };
        let angle = 2.0 * q.w.acos();
        let den = (1.0 - q.w * q.w).sqrt();
        let axis = if den > EPSILON {
            Vector3::new(q.x / den, q.y / den, q.z / den)
        } else {
            // Any axis is valid for a null rotation
            Vector3::new(1.0, 0.0, 0.0)
        };
        (axis, angle)
    }

    /// Rotation from Euler angles in radians (roll around x, pitch around y, yaw around z).
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (x1, x0) = (roll * 0.5).sin_cos();
        let (y1, y0) = (pitch * 0.5).sin_cos();
        let (z1, z0) = (yaw * 0.5).sin_cos();
        Vector4 {
            x: x1 * y0 * z0 - x0 * y1 * z1,
            y: x0 * y1 * z0 + x1 * y0 * z1,
            z: x0 * y0 * z1 - x1 * y1 * z0,
            w: x0 * y0 * z0 + x1 * y1 * z1,
        }
    }

    /// Euler angles in radians.
    pub fn to_euler(self) -> Vector3 {
        let Vector4 { x, y, z, w } = self;

        let x0 = 2.0 * (w * x + y * z);
        let x1 = 1.0 - 2.0 * (x * x + y * y);

        let y0 = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0);

        let z0 = 2.0 * (w * z + x * y);
        let z1 = 1.0 - 2.0 * (y * y + z * z);

        Vector3::new(x0.atan2(x1), y0.asin(), z0.atan2(z1))
    }

    pub fn transform(self, mat: &Matrix) -> Self {
        let m = &mat.0;
        Vector4 {
            x: m[0] * self.x + m[4] * self.y + m[8] * self.z + m[12] * self.w,
            y: m[1] * self.x + m[5] * self.y + m[9] * self.z + m[13] * self.w,
            z: m[2] * self.x + m[6] * self.y + m[10] * self.z + m[14] * self.w,
            w: m[3] * self.x + m[7] * self.y + m[11] * self.z + m[15] * self.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector4, b: Vector4) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_matrix_round_trip() {
        let q = Vector4::from_axis_angle(Vector3::new(1.0, 2.0, 3.0), 0.7);
        assert_close(Vector4::from_matrix(&q.to_matrix()), q);
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Vector4::from_euler(0.0, 0.0, 0.0);
        let b = Vector4::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 2.0);
        assert_close(a.slerp(b, 0.0), a);
        assert_close(a.slerp(b, 1.0), b);
    }

    #[test]
    fn test_euler_axes() {
        let yaw = Vector4::from_euler(0.0, 0.0, 0.9);
        assert_close(yaw, Vector4::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 0.9));
        let roll = Vector4::from_euler(0.4, 0.0, 0.0);
        assert_close(roll, Vector4::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), 0.4));
    }

    #[test]
    fn test_invert() {
        let q = Vector4::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 1.2);
        assert_close(q.quat_mul(q.invert()), Vector4::IDENTITY);
    }
}
