//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use embedded_graphics::mono_font::MonoFont;

use crate::display::{Display, DrawColor};
use crate::geometry::{Point, Rect, Size};
use crate::ui::Widget;

/// One call made on a `RecordingDisplay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ClearBuffer,
    Flush,
    SetDrawColor(DrawColor),
    SetFont,
    SetClipRect(Rect),
    ResetClipRect,
    DrawText(Point, String),
    DrawBitmap(Point, Size),
    DrawLine(Point, Point),
    DrawRect(Rect),
    FillRect(Rect),
}

/// Display that only records what it was asked to do.
///
/// Metrics mimic a 6x10 cell font: ascent 7, descent 3.
pub struct RecordingDisplay {
    size: Size,
    calls: Vec<Call>,
}

impl RecordingDisplay {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: Vec::new(),
        }
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn flushes(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Flush).count()
    }
}

impl Display for RecordingDisplay {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_buffer(&mut self) {
        self.calls.push(Call::ClearBuffer);
    }

    fn flush(&mut self) {
        self.calls.push(Call::Flush);
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.calls.push(Call::SetDrawColor(color));
    }

    fn set_font(&mut self, _font: &'static MonoFont<'static>) {
        self.calls.push(Call::SetFont);
    }

    fn set_clip_rect(&mut self, rect: Rect) {
        self.calls.push(Call::SetClipRect(rect));
    }

    fn reset_clip_rect(&mut self) {
        self.calls.push(Call::ResetClipRect);
    }

    fn font_ascent(&self) -> i32 {
        7
    }

    fn font_descent(&self) -> i32 {
        3
    }

    fn max_char_height(&self) -> i32 {
        10
    }

    fn text_width(&self, text: &str) -> i32 {
        6 * text.chars().count() as i32
    }

    fn draw_text(&mut self, pos: Point, text: &str) {
        self.calls.push(Call::DrawText(pos, text.to_string()));
    }

    fn draw_bitmap(&mut self, pos: Point, size: Size, _data: &[u8]) {
        self.calls.push(Call::DrawBitmap(pos, size));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.calls.push(Call::DrawLine(from, to));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.calls.push(Call::DrawRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(Call::FillRect(rect));
    }
}

/// Widget that writes its name when painted and counts geometry changes
#[derive(Debug, Default)]
pub struct Probe {
    pub name: &'static str,
    pub geometry_changes: usize,
    pub last_rect: Rect,
}

impl Probe {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

impl<D: Display + ?Sized> Widget<D> for Probe {
    fn paint(&mut self, display: &mut D, global: Rect) {
        display.draw_text(global.top_left(), self.name);
    }

    fn on_geometry_changed(&mut self, _display: &mut D, rect: Rect) {
        self.geometry_changes += 1;
        self.last_rect = rect;
    }
}
