// Math utilities for the affine viewer
//
// Matrices are stored row-major as `m[row][column]` and act on row vectors
// from the left (`p' = p * M`), so the translation lives in row 3.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// A three component vector of `f32`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// A 4x4 homogeneous transform, row-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn row(&self, row: usize) -> [f32; 4] {
        self.m[row]
    }

    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.m[row][column]
    }

    /// The 16 scalars in row-major order.
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.m)
    }

    /// Multiplies the row vector `v` by this matrix.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (column, value) in out.iter_mut().enumerate() {
            *value = (0..4).map(|k| v[k] * self.m[k][column]).sum();
        }
        out
    }

    /// Transforms a point (w = 1). No perspective divide is applied.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let [x, y, z, _] = self.transform([p.x, p.y, p.z, 1.0]);
        Vector3::new(x, y, z)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        multiply(&self, &other)
    }
}

/// Reinterprets the rows as glam columns. Row vector on the left with `M` is
/// the same transform as column vector on the right with `M^T`.
impl From<Matrix4x4> for glam::Mat4 {
    fn from(matrix: Matrix4x4) -> Self {
        glam::Mat4::from_cols_array_2d(&matrix.m)
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Matrix product `a * b`.
pub fn multiply(a: &Matrix4x4, b: &Matrix4x4) -> Matrix4x4 {
    let mut result = Matrix4x4::ZERO;

    for row in 0..4 {
        for column in 0..4 {
            result.m[row][column] = a.m[row][0] * b.m[0][column]
                + a.m[row][1] * b.m[1][column]
                + a.m[row][2] * b.m[2][column]
                + a.m[row][3] * b.m[3][column];
        }
    }

    result
}

pub fn make_translate_matrix(translate: Vector3) -> Matrix4x4 {
    Matrix4x4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [translate.x, translate.y, translate.z, 1.0],
    ])
}

pub fn make_scale_matrix(scale: Vector3) -> Matrix4x4 {
    Matrix4x4::from_rows([
        [scale.x, 0.0, 0.0, 0.0],
        [0.0, scale.y, 0.0, 0.0],
        [0.0, 0.0, scale.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the X axis, `radian` in radians.
pub fn make_rotate_x_matrix(radian: f32) -> Matrix4x4 {
    let (sin, cos) = radian.sin_cos();
    Matrix4x4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, sin, 0.0],
        [0.0, -sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Y axis, `radian` in radians.
pub fn make_rotate_y_matrix(radian: f32) -> Matrix4x4 {
    let (sin, cos) = radian.sin_cos();
    Matrix4x4::from_rows([
        [cos, 0.0, -sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Z axis, `radian` in radians.
pub fn make_rotate_z_matrix(radian: f32) -> Matrix4x4 {
    let (sin, cos) = radian.sin_cos();
    Matrix4x4::from_rows([
        [cos, sin, 0.0, 0.0],
        [-sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Scale, then rotate about X, Y and Z in that order, then translate.
///
/// `rotate` holds the per-axis angles in radians.
pub fn make_affine_matrix(scale: Vector3, rotate: Vector3, translate: Vector3) -> Matrix4x4 {
    let rotate_xyz = multiply(
        &make_rotate_x_matrix(rotate.x),
        &multiply(&make_rotate_y_matrix(rotate.y), &make_rotate_z_matrix(rotate.z)),
    );
    let scale_rotate = multiply(&make_scale_matrix(scale), &rotate_xyz);
    multiply(&scale_rotate, &make_translate_matrix(translate))
}
