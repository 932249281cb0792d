//! CPU pixel surface.
//!
//! [`Canvas`] owns an ARGB8888 color buffer and implements [`Surface`]
//! with a scanline polygon fill, standing in for a host 2D drawing
//! context. Present it by handing [`Canvas::as_bytes`] to a window.

pub(crate) mod framebuffer;
pub(crate) mod polygon;

pub use framebuffer::FrameBuffer;

use crate::colors;
use crate::math::Vec4;
use crate::surface::Surface;

/// Background color used by [`Canvas::clear`], ARGB8888.
pub const BACKGROUND: u32 = 0xFF1E1E1E;

/// An owning CPU frame buffer that the pipeline can draw into.
pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![BACKGROUND; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![BACKGROUND; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The buffer as raw ARGB8888 bytes, for streaming into a texture.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Read back a pixel, or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }
}

impl Surface for Canvas {
    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.color_buffer.fill(BACKGROUND);
    }

    fn fill_polygon(&mut self, points: &[Vec4], color: Vec4) {
        let packed = colors::pack_color(color);
        let mut fb = FrameBuffer::new(&mut self.color_buffer, self.width, self.height);
        polygon::fill_convex_polygon(&mut fb, points, packed);
    }
}
