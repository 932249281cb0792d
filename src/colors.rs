//! Color conversion and channel-mixing helpers.
//!
//! Colors travel through the pipeline as [`Vec4`] values with channels
//! in `[0, 1]` (`w` = alpha). The blend math and the canvas work in the
//! 0..255 byte domain, so the conversions live here.

use crate::math::Vec4;

/// Clamp a `[0, 1]` channel and widen it to the 0..255 domain.
#[inline]
pub fn to_byte_range(channel: f32) -> f32 {
    (channel * 255.0).clamp(0.0, 255.0)
}

/// Mix two 0..255 channels: `a * ratio + b * (1 - ratio)`.
///
/// The sum is truncated to an integer value, matching the discrete
/// color steps the shading tables are built from, then clamped to the
/// byte range.
#[inline]
pub fn mix_channel(a: f32, b: f32, ratio: f32) -> f32 {
    let mixed = a * ratio + b * (1.0 - ratio);
    (mixed as i32 as f32).clamp(0.0, 255.0)
}

/// Pack an RGBA color vector into ARGB8888 for the canvas.
pub fn pack_color(color: Vec4) -> u32 {
    let r = to_byte_range(color.x) as u32;
    let g = to_byte_range(color.y) as u32;
    let b = to_byte_range(color.z) as u32;
    let a = to_byte_range(color.w) as u32;
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Unpack an ARGB8888 value back into an RGBA color vector.
pub fn unpack_color(packed: u32) -> Vec4 {
    Vec4::new(
        ((packed >> 16) & 0xFF) as f32 / 255.0,
        ((packed >> 8) & 0xFF) as f32 / 255.0,
        (packed & 0xFF) as f32 / 255.0,
        ((packed >> 24) & 0xFF) as f32 / 255.0,
    )
}
