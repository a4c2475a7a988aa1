/// 4x4 transform matrix with in-place affine edits
///
/// Components are stored as four rows of four values, with row 3 holding the
/// translation. The memory layout is the same as a column-major WebGL matrix,
/// so the data can be uploaded to a shader as-is.
use nalgebra::{Matrix4, Point3, Vector4};

use crate::error::MatrixError;

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// Order in which per-axis rotations are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationOrder {
    #[default]
    Xyz,
    Zyx,
    Zxy,
    Yxz,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    pub const fn identity() -> Self {
        Self { data: IDENTITY }
    }

    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    /// Wrap 16 values, row by row
    pub const fn from_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    pub fn from_slice(data: &[f32]) -> Result<Self, MatrixError> {
        <[f32; 16]>::try_from(data)
            .map(Self::from_array)
            .map_err(|_| MatrixError::Length(data.len()))
    }

    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    /// Compose two transforms without touching either operand.
    ///
    /// `c[i][j] = sum_k a[k][j] * b[i][k]`, which is `b * a` in row-major
    /// terms. The result is `self` with `other` applied in its local space:
    /// `m.multiply(&Mat4::translation(x, y, z))` equals `m.translate(x, y, z)`.
    /// For points, `other` acts first and `self` second, so a world transform
    /// is `parent.multiply(&local)`.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        let a = &self.data;
        let b = &other.data;
        let mut out = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                out[i * 4 + j] = a[j] * b[i * 4]
                    + a[4 + j] * b[i * 4 + 1]
                    + a[8 + j] * b[i * 4 + 2]
                    + a[12 + j] * b[i * 4 + 3];
            }
        }
        Mat4::from_array(out)
    }

    /// OpenGL-style right-handed perspective projection
    pub fn perspective(fov_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = (std::f32::consts::FRAC_PI_2 - 0.5 * fov_radians).tan();
        let range_inv = 1.0 / (near - far);
        Mat4::from_array([
            f / aspect, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, (near + far) * range_inv, -1.0, //
            0.0, 0.0, near * far * range_inv * 2.0, 0.0,
        ])
    }

    /// Map a `[0, width] x [0, height] x [0, depth]` volume to clip space with
    /// y pointing down. Depth lands in `[0, 2]`; this mapping has not been
    /// checked against a renderer yet.
    pub fn projection(width: f32, height: f32, depth: f32) -> Mat4 {
        Mat4::from_array([
            2.0 / width, 0.0, 0.0, 0.0, //
            0.0, -2.0 / height, 0.0, 0.0, //
            0.0, 0.0, 2.0 / depth, 0.0, //
            -1.0, 1.0, 0.0, 1.0,
        ])
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.translate(x, y, z);
        m
    }

    pub fn rotation_x(angle: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.rotate_x(angle);
        m
    }

    pub fn rotation_y(angle: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.rotate_y(angle);
        m
    }

    pub fn rotation_z(angle: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.rotate_z(angle);
        m
    }

    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
        let mut m = Mat4::identity();
        m.scale(sx, sy, sz);
        m
    }

    /// Right-handed rotation from a unit quaternion
    pub fn from_quaternion(x: f32, y: f32, z: f32, w: f32) -> Mat4 {
        Mat4::from_array([
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + w * z),
            2.0 * (x * z - w * y),
            0.0,
            2.0 * (x * y - w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + w * x),
            0.0,
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    pub fn transpose(&self) -> Mat4 {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.data[row * 4 + col];
            }
        }
        Mat4::from_array(out)
    }

    /// `None` when the matrix is singular
    pub fn inverse(&self) -> Option<Mat4> {
        Matrix4::from(*self).try_inverse().map(Mat4::from)
    }

    /// Translate in the matrix's own basis
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        let a = &mut self.data;
        for c in 0..4 {
            let offset = x * a[c] + y * a[4 + c] + z * a[8 + c];
            a[12 + c] += offset;
        }
        self
    }

    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        self.rotate_rows(1, 2, cos, sin)
    }

    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        self.rotate_rows(0, 2, cos, -sin)
    }

    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        self.rotate_rows(0, 1, cos, sin)
    }

    /// Rotate about X, then Y, then Z
    pub fn rotate(&mut self, rx: f32, ry: f32, rz: f32) -> &mut Self {
        self.rotate_ordered(RotationOrder::Xyz, rx, ry, rz)
    }

    pub fn rotate_ordered(&mut self, order: RotationOrder, rx: f32, ry: f32, rz: f32) -> &mut Self {
        match order {
            RotationOrder::Xyz => self.rotate_x(rx).rotate_y(ry).rotate_z(rz),
            RotationOrder::Zyx => self.rotate_z(rz).rotate_y(ry).rotate_x(rx),
            RotationOrder::Zxy => self.rotate_z(rz).rotate_x(rx).rotate_y(ry),
            RotationOrder::Yxz => self.rotate_y(ry).rotate_x(rx).rotate_z(rz),
        }
    }

    /// Scale the three basis rows; translation is left alone
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        for (row, factor) in [sx, sy, sz].into_iter().enumerate() {
            for value in &mut self.data[row * 4..row * 4 + 4] {
                *value *= factor;
            }
        }
        self
    }

    /// `x * row0 + y * row1 + z * row2 + w * row3`
    pub fn transform_vector(&self, v: &Vector4<f32>) -> Vector4<f32> {
        Matrix4::from(*self) * v
    }

    /// Transform a point, dividing by the resulting w
    pub fn transform_point(&self, p: &Point3<f32>) -> Point3<f32> {
        Matrix4::from(*self).transform_point(p)
    }

    // new_a = cos * a + sin * b, new_b = cos * b - sin * a
    fn rotate_rows(&mut self, a: usize, b: usize, cos: f32, sin: f32) -> &mut Self {
        for c in 0..4 {
            let l = self.data[a * 4 + c];
            let r = self.data[b * 4 + c];
            self.data[a * 4 + c] = l * cos + r * sin;
            self.data[b * 4 + c] = r * cos - l * sin;
        }
        self
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Mat4> for Matrix4<f32> {
    fn from(m: Mat4) -> Self {
        Matrix4::from_column_slice(&m.data)
    }
}

impl From<Matrix4<f32>> for Mat4 {
    fn from(m: Matrix4<f32>) -> Self {
        let mut data = [0.0; 16];
        data.copy_from_slice(m.as_slice());
        Mat4::from_array(data)
    }
}
