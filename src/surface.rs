//! The sink boundary: where shaded polygons leave the pipeline.

use crate::math::Vec4;

/// A host surface that can report its size, wipe itself and paint
/// filled polygons.
///
/// The pipeline calls [`clear`](Surface::clear) once per frame, then
/// zero or more [`fill_polygon`](Surface::fill_polygon) calls in
/// back-to-front draw order. Vertices are in pixel space; the color is
/// RGBA with channels in `[0, 1]`.
pub trait Surface {
    /// Current viewport size as (width, height) in pixels.
    fn viewport(&self) -> (u32, u32);

    /// Wipe the frame buffer at the start of a frame.
    fn clear(&mut self);

    /// Paint a filled convex polygon (3 or 4 vertices in draw order).
    fn fill_polygon(&mut self, points: &[Vec4], color: Vec4);
}

/// A surface that swallows every draw call. Useful for benchmarks and
/// for running the pipeline headless.
pub struct NullSurface {
    width: u32,
    height: u32,
}

impl NullSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Surface for NullSurface {
    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {}

    fn fill_polygon(&mut self, _points: &[Vec4], _color: Vec4) {}
}
