//! Homogeneous 4-component vector.
//!
//! # Convention
//! - Vectors are **row vectors** transformed on the left: `v * Mat4`
//! - Points carry `w = 1`; the transform uses all four components
//! - Arithmetic (`+`, `-`, scalar `*`, scalar `/`) acts on the spatial
//!   components only and always yields a homogeneous point (`w = 1`)
//!
//! The same type doubles as an RGBA color with channels in `[0, 1]` and
//! `w` carrying alpha (normally 1).

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::mat4::Mat4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::point(0.0, 0.0, 0.0);
    pub const UP: Self = Self::point(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::point(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a homogeneous point (w = 1).
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// 3-component dot product. `w` does not participate.
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Normalize the spatial components; `w` is preserved.
    ///
    /// A zero-length input divides by zero and propagates NaN/Inf, same
    /// as the behavior this renderer reproduces. The pipeline only
    /// normalizes cross products of non-degenerate triangle edges.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        Self::new(self.x / length, self.y / length, self.z / length, self.w)
    }

    /// Right-handed cross product. The result is a point (w = 1).
    pub fn cross(&self, other: Self) -> Self {
        Self::point(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Snap x, y and z to a pixel grid with cells of `scale` units.
    ///
    /// This is the source of the renderer's deliberately blocky look.
    pub fn pixel_align(&self, scale: f32) -> Self {
        Self::new(
            (self.x / scale).round() * scale,
            (self.y / scale).round() * scale,
            (self.z / scale).round() * scale,
            self.w,
        )
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Self::point(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Self::point(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scalar multiplication of the spatial components.
impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::point(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Scalar division of the spatial components.
///
/// The perspective divide uses this: dividing by the post-projection `w`
/// leaves the homogeneous component itself untouched.
impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        Self::point(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Self::point(-self.x, -self.y, -self.z)
    }
}

/// Row-vector transform: `v * M` using all four homogeneous components.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, m: Mat4) -> Self::Output {
        Vec4::new(
            self.x * m.get(0, 0) + self.y * m.get(1, 0) + self.z * m.get(2, 0) + self.w * m.get(3, 0),
            self.x * m.get(0, 1) + self.y * m.get(1, 1) + self.z * m.get(2, 1) + self.w * m.get(3, 1),
            self.x * m.get(0, 2) + self.y * m.get(1, 2) + self.z * m.get(2, 2) + self.w * m.get(3, 2),
            self.x * m.get(0, 3) + self.y * m.get(1, 3) + self.z * m.get(2, 3) + self.w * m.get(3, 3),
        )
    }
}
