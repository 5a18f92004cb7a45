//! SDL2 display: window, presentation, snapshots and event pumping.
//!
//! The display owns the shared [`Framebuffer`] workers write into. Each
//! frame the main loop renders into it, presents, then pumps pending
//! events into the key-state table. SDL errors surface as `String`s, as
//! the sdl2 crate reports them.

use std::path::PathBuf;
use std::time::Instant;

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::input::InputState;
use crate::render::Framebuffer;

/// Average-FPS and frame-delta tracking for the window title.
pub struct FpsCounter {
    start: Instant,
    last: Instant,
    frames: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frames: 0,
        }
    }

    /// Advances to the next frame and returns the seconds elapsed since
    /// the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.frames += 1;
        delta
    }

    /// Average frames per second since the counter was created.
    pub fn fps(&self) -> f32 {
        self.frames as f32 / self.start.elapsed().as_secs_f32().max(f32::EPSILON)
    }

    /// Total frames ticked so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

/// SDL2 window owning the shared framebuffer and its streaming texture.
pub struct Display {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    frame: Framebuffer,
    width: u32,
    height: u32,
}

impl Display {
    /// Initializes SDL video and creates the window. Failure here is a
    /// fatal startup error; the caller reports it and exits non-zero.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as
        // Display. Field declaration order drops texture before it.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        info!("display ready: {width}x{height}");
        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            frame: Framebuffer::new(width, height),
            width,
            height,
        })
    }

    /// The shared write surface.
    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// Mutable access for the dispatcher's row-band partition.
    pub fn frame_mut(&mut self) -> &mut Framebuffer {
        &mut self.frame
    }

    /// Uploads the framebuffer and flips. Called only after the frame's
    /// join barrier, so no partial frame is ever shown.
    pub fn present(&mut self) -> Result<(), String> {
        self.texture
            .update(None, self.frame.as_bytes(), (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(
            &self.texture,
            None,
            Some(Rect::new(0, 0, self.width, self.height)),
        )?;
        self.canvas.present();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
    }

    /// Writes the current framebuffer to `<name>.png` in the working
    /// directory and returns the path.
    pub fn save_to_file(&self, name: &str) -> Result<PathBuf, String> {
        let path = PathBuf::from(format!("{name}.png"));

        let mut rgba = Vec::with_capacity(self.frame.pixels().len() * 4);
        for &pixel in self.frame.pixels() {
            rgba.push(((pixel >> 16) & 0xFF) as u8);
            rgba.push(((pixel >> 8) & 0xFF) as u8);
            rgba.push((pixel & 0xFF) as u8);
            rgba.push((pixel >> 24) as u8);
        }
        image::save_buffer(
            &path,
            &rgba,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| e.to_string())?;

        info!("saved snapshot to {}", path.display());
        Ok(path)
    }

    /// Pumps pending events into the key-state table.
    ///
    /// Returns `false` on a quit signal (window close or Escape).
    pub fn poll_events(&mut self, input: &mut InputState) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return false,
                Event::KeyDown {
                    scancode: Some(scancode),
                    ..
                } => input.set_scancode(scancode as usize, true),
                Event::KeyUp {
                    scancode: Some(scancode),
                    ..
                } => input.set_scancode(scancode as usize, false),
                _ => {}
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_counter_ticks_monotonically() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.frames(), 0);

        let delta = counter.tick();
        assert!(delta >= 0.0);
        assert_eq!(counter.frames(), 1);

        counter.tick();
        assert_eq!(counter.frames(), 2);
        assert!(counter.fps() > 0.0);
    }
}
