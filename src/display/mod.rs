//! # Display Module
//!
//! The drawing surface the widget tree paints onto.
//!
//! ## Modules
//!
//! - `config`: Panel presets (`DisplayConfig`)
//! - `font`: Metrics of `embedded-graphics` mono fonts
//! - `framebuffer`: `BufferedDisplay`, a 1-bit frame in RAM that is
//!   transferred to any `DrawTarget<Color = BinaryColor>` on flush
//!
//! ## Contract
//!
//! The core only talks to the `Display` trait. Drawing goes into a buffer and
//! reaches the panel on `flush`, which the painter calls at most once per
//! frame. Every draw call honours the current draw color and clip window.
//! The core assumes all of these calls succeed; transport failures belong to
//! the implementation.
//!
//! Single threaded: the painter issues clip/color/draw state changes without
//! any locking, so one rendering thread must own the surface.

pub mod config;
pub mod font;
pub mod framebuffer;

pub use config::DisplayConfig;
pub use framebuffer::{BufferedDisplay, FrameBuffer};

use embedded_graphics::mono_font::MonoFont;

use crate::geometry::{Point, Rect, Size};

/// Ink mode of a 1-bit plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawColor {
    /// Foreground ink
    #[default]
    Primary,
    /// Background, used to erase
    Secondary,
    /// Toggle whatever is already there
    Invert,
}

pub trait Display {
    fn size(&self) -> Size;

    /// Blank the buffer without touching the panel
    fn clear_buffer(&mut self);

    /// Blank the buffer and the panel
    fn clear(&mut self) {
        self.clear_buffer();
        self.flush();
    }

    /// Transfer the buffer to the panel
    fn flush(&mut self);

    fn set_draw_color(&mut self, color: DrawColor);
    fn set_font(&mut self, font: &'static MonoFont<'static>);

    /// Limit subsequent draw calls to `rect` (global coordinates)
    fn set_clip_rect(&mut self, rect: Rect);
    fn reset_clip_rect(&mut self);

    fn font_ascent(&self) -> i32;
    fn font_descent(&self) -> i32;
    fn max_char_height(&self) -> i32;
    fn text_width(&self, text: &str) -> i32;

    /// `pos` is the left end of the text baseline
    fn draw_text(&mut self, pos: Point, text: &str);
    fn draw_bitmap(&mut self, pos: Point, size: Size, data: &[u8]);
    fn draw_line(&mut self, from: Point, to: Point);
    fn draw_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
}
