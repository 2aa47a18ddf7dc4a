use std::ops::{Add, Mul, Sub};

use super::Vector3;

/// 4x4 matrix. `self.0[i]` is raylib's field `m<i>`, so the array is column-major.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix(pub [f32; 16]);

impl Matrix {
    pub const ZERO: Matrix = Matrix([0.0; 16]);

    pub const fn identity() -> Self {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Matrix(m)
    }

    pub fn determinant(&self) -> f32 {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] = self.0;

        a30 * a21 * a12 * a03 - a20 * a31 * a12 * a03 - a30 * a11 * a22 * a03
            + a10 * a31 * a22 * a03
            + a20 * a11 * a32 * a03
            - a10 * a21 * a32 * a03
            - a30 * a21 * a02 * a13
            + a20 * a31 * a02 * a13
            + a30 * a01 * a22 * a13
            - a00 * a31 * a22 * a13
            - a20 * a01 * a32 * a13
            + a00 * a21 * a32 * a13
            + a30 * a11 * a02 * a23
            - a10 * a31 * a02 * a23
            - a30 * a01 * a12 * a23
            + a00 * a31 * a12 * a23
            + a10 * a01 * a32 * a23
            - a00 * a11 * a32 * a23
            - a20 * a11 * a02 * a33
            + a10 * a21 * a02 * a33
            + a20 * a01 * a12 * a33
            - a00 * a21 * a12 * a33
            - a10 * a01 * a22 * a33
            + a00 * a11 * a22 * a33
    }

    pub fn trace(&self) -> f32 {
        self.0[0] + self.0[5] + self.0[10] + self.0[15]
    }

    pub fn transpose(&self) -> Self {
        let mut result = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                result[row * 4 + col] = self.0[col * 4 + row];
            }
        }
        Matrix(result)
    }

    /// Inverse matrix. A singular matrix produces non-finite components.
    pub fn invert(&self) -> Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] = self.0;

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let inv_det = 1.0 / (b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06);

        Matrix([
            (a11 * b11 - a12 * b10 + a13 * b09) * inv_det,
            (-a01 * b11 + a02 * b10 - a03 * b09) * inv_det,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv_det,
            (-a21 * b05 + a22 * b04 - a23 * b03) * inv_det,
            (-a10 * b11 + a12 * b08 - a13 * b07) * inv_det,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv_det,
            (-a30 * b05 + a32 * b02 - a33 * b01) * inv_det,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv_det,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv_det,
            (-a00 * b10 + a01 * b08 - a03 * b06) * inv_det,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv_det,
            (-a20 * b04 + a21 * b02 - a23 * b00) * inv_det,
            (-a10 * b09 + a11 * b07 - a12 * b06) * inv_det,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv_det,
            (-a30 * b03 + a31 * b01 - a32 * b00) * inv_det,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv_det,
        ])
    }

    /// Every component divided by the determinant.
    pub fn normalize(&self) -> Self {
        let det = self.determinant();
        Matrix(self.0.map(|v| v / det))
    }

    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        let mut result = Matrix::identity();
        result.0[12] = x;
        result.0[13] = y;
        result.0[14] = z;
        result
    }

    /// Rotation of `angle` radians around `axis`.
    pub fn rotate(axis: Vector3, angle: f32) -> Self {
        let Vector3 { mut x, mut y, mut z } = axis;
        let length_sq = x * x + y * y + z * z;
        if length_sq != 1.0 && length_sq != 0.0 {
            let inv_length = 1.0 / length_sq.sqrt();
            x *= inv_length;
            y *= inv_length;
            z *= inv_length;
        }

        let (sin, cos) = angle.sin_cos();
        let t = 1.0 - cos;

        Matrix([
            x * x * t + cos,
            y * x * t + z * sin,
            z * x * t - y * sin,
            0.0,
            x * y * t - z * sin,
            y * y * t + cos,
            z * y * t + x * sin,
            0.0,
            x * z * t + y * sin,
            y * z * t - x * sin,
            z * z * t + cos,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    pub fn rotate_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Matrix::identity();
        result.0[5] = cos;
        result.0[6] = sin;
        result.0[9] = -sin;
        result.0[10] = cos;
        result
    }

    pub fn rotate_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Matrix::identity();
        result.0[0] = cos;
        result.0[2] = -sin;
        result.0[8] = sin;
        result.0[10] = cos;
        result
    }

    pub fn rotate_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Matrix::identity();
        result.0[0] = cos;
        result.0[1] = sin;
        result.0[4] = -sin;
        result.0[5] = cos;
        result
    }

    /// Combined rotation from Euler angles in radians.
    pub fn rotate_xyz(angle: Vector3) -> Self {
        let (sinz, cosz) = (-angle.z).sin_cos();
        let (siny, cosy) = (-angle.y).sin_cos();
        let (sinx, cosx) = (-angle.x).sin_cos();

        let mut result = Matrix::identity();
        let m = &mut result.0;
        m[0] = cosz * cosy;
        m[1] = (cosz * siny * sinx) - (sinz * cosx);
        m[2] = (cosz * siny * cosx) + (sinz * sinx);

        m[4] = sinz * cosy;
        m[5] = (sinz * siny * sinx) + (cosz * cosx);
        m[6] = (sinz * siny * cosx) - (cosz * sinx);

        m[8] = -siny;
        m[9] = cosy * sinx;
        m[10] = cosy * cosx;
        result
    }

    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut result = Matrix::identity();
        result.0[0] = x;
        result.0[5] = y;
        result.0[10] = z;
        result
    }

    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fn_ = far - near;

        let mut m = [0.0; 16];
        m[0] = (near * 2.0) / rl;
        m[5] = (near * 2.0) / tb;
        m[8] = (right + left) / rl;
        m[9] = (top + bottom) / tb;
        m[10] = -(far + near) / fn_;
        m[11] = -1.0;
        m[14] = -(far * near * 2.0) / fn_;
        Matrix(m)
    }

    /// Perspective projection, `fovy` in radians.
    pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let top = near * (fovy * 0.5).tan();
        let right = top * aspect;
        Matrix::frustum(-right, right, -top, top, near, far)
    }

    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fn_ = far - near;

        let mut m = [0.0; 16];
        m[0] = 2.0 / rl;
        m[5] = 2.0 / tb;
        m[10] = -2.0 / fn_;
        m[12] = -(left + right) / rl;
        m[13] = -(top + bottom) / tb;
        m[14] = -(far + near) / fn_;
        m[15] = 1.0;
        Matrix(m)
    }

    /// View matrix looking from `eye` towards `target`.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let vz = (eye - target).normalize();
        let vx = up.cross(vz).normalize();
        let vy = vz.cross(vx);

        Matrix([
            vx.x,
            vy.x,
            vz.x,
            0.0,
            vx.y,
            vy.y,
            vz.y,
            0.0,
            vx.z,
            vy.z,
            vz.z,
            0.0,
            -vx.dot(eye),
            -vy.dot(eye),
            -vz.dot(eye),
            1.0,
        ])
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        let mut result = self.0;
        for (r, v) in result.iter_mut().zip(rhs.0) {
            *r += v;
        }
        Matrix(result)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Matrix {
        let mut result = self.0;
        for (r, v) in result.iter_mut().zip(rhs.0) {
            *r -= v;
        }
        Matrix(result)
    }
}

/// raylib's `MatrixMultiply(self, rhs)`: `rhs` is applied after `self`.
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        let (l, r) = (&self.0, &rhs.0);
        let mut result = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                result[row * 4 + col] = (0..4).map(|k| l[row * 4 + k] * r[k * 4 + col]).sum();
            }
        }
        Matrix(result)
    }
}

impl From<Matrix> for ffi::Matrix {
    fn from(m: Matrix) -> Self {
        let m = m.0;
        ffi::Matrix {
            m0: m[0],
            m4: m[4],
            m8: m[8],
            m12: m[12],
            m1: m[1],
            m5: m[5],
            m9: m[9],
            m13: m[13],
            m2: m[2],
            m6: m[6],
            m10: m[10],
            m14: m[14],
            m3: m[3],
            m7: m[7],
            m11: m[11],
            m15: m[15],
        }
    }
}

impl From<ffi::Matrix> for Matrix {
    fn from(m: ffi::Matrix) -> Self {
        Matrix([
            m.m0, m.m1, m.m2, m.m3, m.m4, m.m5, m.m6, m.m7, m.m8, m.m9, m.m10, m.m11, m.m12, m.m13,
            m.m14, m.m15,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Matrix, b: &Matrix) {
        for (x, y) in a.0.iter().zip(b.0.iter()) {
            assert!((x - y).abs() < 1e-4, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_invert_round_trip() {
        let m = Matrix::translate(1.0, -2.0, 3.0) * Matrix::rotate(Vector3::new(0.3, 1.0, 0.2), 0.8);
        assert_close(&m.invert().invert(), &m);
        assert_close(&(m * m.invert()), &Matrix::identity());
    }

    #[test]
    fn test_translate_moves_point() {
        let p = Vector3::new(1.0, 1.0, 1.0).transform(&Matrix::translate(2.0, 3.0, 4.0));
        assert_eq!(p, Vector3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Matrix::identity().determinant(), 1.0);
        assert_eq!(Matrix::scale(2.0, 3.0, 4.0).determinant(), 24.0);
        assert_eq!(Matrix::ZERO.determinant(), 0.0);
    }

    #[test]
    fn test_ffi_field_order() {
        let mut m = Matrix::ZERO;
        m.0[12] = 5.0;
        m.0[3] = 7.0;
        let raw: ffi::Matrix = m.into();
        assert_eq!(raw.m12, 5.0);
        assert_eq!(raw.m3, 7.0);
        assert_eq!(Matrix::from(raw), m);
    }
}
