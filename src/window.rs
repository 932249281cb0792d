//! SDL2 presentation of rendered frames.
//!
//! SDL is used only to put pixels on screen and read input. [`Window`]
//! consumes whole [`Canvas`] frames: `present` uploads the canvas bytes
//! into a streaming texture, recreating it whenever the canvas size has
//! changed, so callers resize the canvas and nothing else.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::render::Canvas;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Paces the frame loop to a target rate.
pub struct FrameLimiter {
    frame_budget: Duration,
    last_tick: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / target_fps,
            last_tick: Instant::now(),
        }
    }

    /// Sleeps off whatever is left of the frame budget and returns the
    /// seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame_budget {
            std::thread::sleep(self.frame_budget - elapsed);
        }
        let delta = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        delta.as_secs_f32()
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    texture_size: (u32, u32),
    event_pump: sdl2::EventPump,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let texture = streaming_texture(texture_creator.as_ref(), width, height)?;
        let event_pump = sdl_context.event_pump()?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            texture_size: (width, height),
            event_pump,
        })
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => return WindowEvent::Resize(w as u32, h as u32),
                _ => {}
            }
        }
        WindowEvent::None
    }

    /// Upload a finished frame and present it. The streaming texture
    /// tracks the canvas size, so a resized canvas just works.
    pub fn present(&mut self, frame: &Canvas) -> Result<(), String> {
        let size = (frame.width(), frame.height());
        if size != self.texture_size {
            self.texture = streaming_texture(self.texture_creator.as_ref(), size.0, size.1)?;
            self.texture_size = size;
        }

        self.texture
            .update(None, frame.as_bytes(), (size.0 * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, size.0, size.1)))?;
        self.canvas.present();
        Ok(())
    }
}

/// Create a streaming ARGB8888 texture borrowed from the window's boxed
/// creator.
fn streaming_texture(
    creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    width: u32,
    height: u32,
) -> Result<sdl2::render::Texture<'static>, String> {
    // SAFETY: the creator lives in a Box on the Window for the window's
    // whole lifetime, and Window's field order drops the texture first.
    let creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
        unsafe { &*(creator as *const _) };
    creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
        .map_err(|e| e.to_string())
}
