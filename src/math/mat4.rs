//! 4x4 transformation matrix using row-major convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `Vec * Mat4`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B
//!
//! # Example
//! ```ignore
//! let transform = rotation * translation;  // rotation applied first
//! let result = vertex * transform;         // transform the vertex
//! ```

use std::ops::Mul;

use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with row-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last row (row-major convention).
    pub fn translation(offset: Vec4) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [offset.x, offset.y, offset.z, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(factors: Vec4) -> Self {
        Mat4::new([
            [factors.x, 0.0, 0.0, 0.0],
            [0.0, factors.y, 0.0, 0.0],
            [0.0, 0.0, factors.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a combined Euler rotation, composed X then Y then Z.
    pub fn rotation(euler: Vec4) -> Self {
        Mat4::identity()
            * Mat4::rotation_x(euler.x)
            * Mat4::rotation_y(euler.y)
            * Mat4::rotation_z(euler.z)
    }

    /// Creates a perspective projection matrix.
    ///
    /// `fov_scale` is `1 / tan(fov_degrees / 2)` with the angle in
    /// radians; `aspect` is height over width. After transforming, x/y/z
    /// must be divided by the resulting `w` (which holds the view-space
    /// depth) to reach normalized device coordinates.
    pub fn perspective(aspect: f32, fov_scale: f32, near: f32, far: f32) -> Self {
        let mut m = Mat4::identity();
        m.data[0][0] = aspect * fov_scale;
        m.data[1][1] = fov_scale;
        m.data[2][2] = far / (far - near);
        m.data[3][2] = (-far * near) / (far - near);
        m.data[2][3] = 1.0;
        m.data[3][3] = 0.0;
        m
    }

    /// Builds a camera-to-world matrix for a camera at `pos` looking at
    /// `target`.
    ///
    /// The rows hold the camera basis (right, up, forward) and the
    /// translation row holds `pos`. Invert it to obtain the
    /// world-to-view matrix.
    pub fn look_at(pos: Vec4, target: Vec4, up: Vec4) -> Self {
        let forward = (target - pos).normalize();

        // Re-orthogonalize up against the new forward direction.
        let up = (up - forward * up.dot(forward)).normalize();
        let right = up.cross(forward);

        Mat4::new([
            [right.x, right.y, right.z, 0.0],
            [up.x, up.y, up.z, 0.0],
            [forward.x, forward.y, forward.z, 0.0],
            [pos.x, pos.y, pos.z, 1.0],
        ])
    }

    /// Computes the inverse by Gauss-Jordan elimination with partial row
    /// pivoting.
    ///
    /// A fully singular input (no usable pivot in some column) returns
    /// the identity matrix so rendering can continue with a wrong but
    /// finite camera transform.
    pub fn inverse(&self) -> Mat4 {
        let mut m = self.data;
        let mut inverse = Mat4::identity().data;

        for i in 0..4 {
            if m[i][i] == 0.0 {
                // Pivot is zero: swap with a lower row that has a
                // non-zero entry in this column.
                let swap = ((i + 1)..4).find(|&row| m[row][i] != 0.0);
                match swap {
                    Some(row) => {
                        m.swap(i, row);
                        inverse.swap(i, row);
                    }
                    None => return Mat4::identity(),
                }
            }

            let pivot = m[i][i];
            for j in 0..4 {
                m[i][j] /= pivot;
                inverse[i][j] /= pivot;
            }

            for row in 0..4 {
                if row == i {
                    continue;
                }
                let factor = m[row][i];
                for j in 0..4 {
                    m[row][j] -= factor * m[i][j];
                    inverse[row][j] -= factor * inverse[i][j];
                }
            }
        }

        Mat4::new(inverse)
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For row-vector convention, `v * A * B` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}
