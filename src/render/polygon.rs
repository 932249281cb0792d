//! Scanline convex-polygon fill.
//!
//! Polygons arrive from the pipeline with 3 or 4 vertices. They are fan
//! decomposed into triangles, and each triangle is filled with the
//! flat-top/flat-bottom scanline approach:
//!
//! 1. Sort vertices by Y coordinate
//! 2. Split the triangle into flat-bottom and/or flat-top halves
//! 3. Rasterize each scanline from left to right

use super::framebuffer::FrameBuffer;
use crate::math::Vec4;

/// Fill a convex polygon. Inputs with fewer than 3 vertices are
/// ignored.
pub fn fill_convex_polygon(buffer: &mut FrameBuffer, points: &[Vec4], color: u32) {
    if points.len() < 3 {
        return;
    }
    for i in 1..points.len() - 1 {
        fill_triangle(buffer, points[0], points[i], points[i + 1], color);
    }
}

/// Fill a single triangle.
pub fn fill_triangle(buffer: &mut FrameBuffer, mut v0: Vec4, mut v1: Vec4, mut v2: Vec4, color: u32) {
    sort_by_y(&mut v0, &mut v1, &mut v2);

    // Flat-bottom triangle (bottom two vertices share a row).
    if (v1.y - v2.y).abs() < f32::EPSILON {
        fill_flat_bottom(buffer, v0, v1, v2, color);
        return;
    }

    // Flat-top triangle (top two vertices share a row).
    if (v0.y - v1.y).abs() < f32::EPSILON {
        fill_flat_top(buffer, v0, v1, v2, color);
        return;
    }

    // General case: split at the middle vertex's row.
    let split = split_point(v0, v1, v2);
    fill_flat_bottom(buffer, v0, v1, split, color);
    fill_flat_top(buffer, v1, split, v2, color);
}

fn sort_by_y(v0: &mut Vec4, v1: &mut Vec4, v2: &mut Vec4) {
    if v1.y < v0.y {
        std::mem::swap(v0, v1);
    }
    if v2.y < v1.y {
        std::mem::swap(v1, v2);
    }
    if v1.y < v0.y {
        std::mem::swap(v0, v1);
    }
}

/// Point on the long edge v0->v2 at the height of v1. Assumes the
/// vertices are already sorted by Y.
fn split_point(v0: Vec4, v1: Vec4, v2: Vec4) -> Vec4 {
    let x_slope = (v2.x - v0.x) / (v2.y - v0.y);
    let my = v1.y;
    let mx = v0.x + x_slope * (my - v0.y);
    Vec4::point(mx, my, v0.z)
}

fn fill_flat_bottom(buffer: &mut FrameBuffer, v0: Vec4, v1: Vec4, v2: Vec4, color: u32) {
    let inv_slope_1 = (v1.x - v0.x) / (v1.y - v0.y);
    let inv_slope_2 = (v2.x - v0.x) / (v2.y - v0.y);

    let y_start = v0.y.ceil() as i32;
    let y_end = v1.y.floor() as i32;

    for y in y_start..=y_end {
        let dy = y as f32 - v0.y;
        let x1 = v0.x + inv_slope_1 * dy;
        let x2 = v0.x + inv_slope_2 * dy;
        // Don't assume which is left/right - use min/max
        buffer.fill_scanline(y, x1.min(x2).ceil() as i32, x1.max(x2).floor() as i32, color);
    }
}

fn fill_flat_top(buffer: &mut FrameBuffer, v0: Vec4, v1: Vec4, v2: Vec4, color: u32) {
    let inv_slope_1 = (v2.x - v0.x) / (v2.y - v0.y);
    let inv_slope_2 = (v2.x - v1.x) / (v2.y - v1.y);

    let y_start = v0.y.ceil() as i32;
    let y_end = v2.y.floor() as i32;

    for y in y_start..=y_end {
        let dy = y as f32 - v0.y;
        let x1 = v0.x + inv_slope_1 * dy;
        let x2 = v1.x + inv_slope_2 * dy;
        buffer.fill_scanline(y, x1.min(x2).ceil() as i32, x1.max(x2).floor() as i32, color);
    }
}
