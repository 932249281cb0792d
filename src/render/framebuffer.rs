//! Frame buffer abstraction for 2D pixel access.
//!
//! Wraps a 1D color slice with width/height metadata for safe 2D pixel
//! writes. There is no depth buffer: hidden surfaces are handled by the
//! pipeline's back-to-front draw order.

/// A borrowed view into a color buffer.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set a pixel at (x, y). Silently ignores out-of-bounds
    /// coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Fill the horizontal run `x_left..=x_right` on row `y`, clamped
    /// to the buffer.
    #[inline]
    pub fn fill_scanline(&mut self, y: i32, x_left: i32, x_right: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x_start = x_left.max(0);
        let x_end = x_right.min(self.width as i32 - 1);
        if x_start > x_end {
            return;
        }
        let row = y as u32 * self.width;
        let range = (row + x_start as u32) as usize..=(row + x_end as u32) as usize;
        self.color_buffer[range].fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut fb = FrameBuffer::new(&mut buffer, 4, 4);
        fb.set_pixel(-1, 0, 0xFFFFFFFF);
        fb.set_pixel(4, 0, 0xFFFFFFFF);
        fb.set_pixel(0, 4, 0xFFFFFFFF);
        assert!(buffer.iter().all(|&p| p == 0));
    }

    #[test]
    fn fill_scanline_clamps_to_row() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut fb = FrameBuffer::new(&mut buffer, 4, 4);
        fb.fill_scanline(1, -5, 10, 0xFF00FF00);
        assert!(buffer[4..8].iter().all(|&p| p == 0xFF00FF00));
        assert!(buffer[0..4].iter().all(|&p| p == 0));
        assert!(buffer[8..].iter().all(|&p| p == 0));
    }

    #[test]
    fn fill_scanline_off_screen_is_a_no_op() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut fb = FrameBuffer::new(&mut buffer, 4, 4);
        fb.fill_scanline(-1, 0, 3, 0xFFFFFFFF);
        fb.fill_scanline(4, 0, 3, 0xFFFFFFFF);
        fb.fill_scanline(2, 3, 1, 0xFFFFFFFF);
        assert!(buffer.iter().all(|&p| p == 0));
    }
}
