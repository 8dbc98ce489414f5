// Leaf and container widgets built on the Widget capability
use alloc::format;
use alloc::string::String;

use embedded_graphics::mono_font::{
    ascii::{FONT_4X6, FONT_6X10},
    MonoFont,
};

use super::widget::Widget;
use crate::display::{Display, DrawColor};
use crate::geometry::{Point, Rect, Size};

/// Plain container; the painter clears its background, it adds an optional border
#[derive(Debug, Clone, Copy, Default)]
pub struct Panel {
    pub border: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self { border: false }
    }

    pub fn bordered() -> Self {
        Self { border: true }
    }
}

impl<D: Display + ?Sized> Widget<D> for Panel {
    fn paint(&mut self, display: &mut D, global: Rect) {
        if self.border {
            display.set_draw_color(DrawColor::Primary);
            display.draw_rect(global);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How a label derives its height from the font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightCalculation {
    /// Full glyph cell, descenders included
    #[default]
    WithDescent,
    /// Only the part above the baseline
    NoDescent,
}

/// Single line of text. Its height follows the font, its width is set by
/// the caller.
pub struct Label {
    text: String,
    font: &'static MonoFont<'static>,
    alignment: Align,
    height_calculation: HeightCalculation,
    // baseline start, relative to the widget's top-left corner
    anchor: Point,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: &FONT_6X10,
            alignment: Align::Left,
            height_calculation: HeightCalculation::WithDescent,
            anchor: Point::zero(),
        }
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    pub fn with_alignment(mut self, alignment: Align) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_font(&mut self, font: &'static MonoFont<'static>) {
        self.font = font;
    }

    pub fn alignment(&self) -> Align {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Align) {
        self.alignment = alignment;
    }

    pub fn set_height_calculation(&mut self, height_calculation: HeightCalculation) {
        self.height_calculation = height_calculation;
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

impl<D: Display + ?Sized> Widget<D> for Label {
    fn paint(&mut self, display: &mut D, global: Rect) {
        display.set_draw_color(DrawColor::Primary);
        display.set_font(self.font);
        display.draw_text(global.top_left() + self.anchor, &self.text);
    }

    fn on_geometry_changed(&mut self, display: &mut D, rect: Rect) {
        display.set_font(self.font);
        let x = match self.alignment {
            Align::Left => 0,
            Align::Center => rect.width() / 2 - display.text_width(&self.text) / 2,
            Align::Right => rect.width() - display.text_width(&self.text),
        };
        self.anchor = Point::new(x, display.font_ascent());
    }

    fn size_hint(&mut self, display: &mut D, current: Size) -> Option<Size> {
        display.set_font(self.font);
        let height = match self.height_calculation {
            HeightCalculation::WithDescent => display.max_char_height(),
            HeightCalculation::NoDescent => display.font_ascent(),
        };
        Some(Size::new(current.width(), height))
    }
}

/// 1-bit image in `embedded-graphics` raw layout (MSB first, byte-padded rows)
#[derive(Debug, Clone, Copy, Default)]
pub struct Bitmap {
    data: &'static [u8],
    image_size: Size,
    inverted: bool,
}

impl Bitmap {
    pub fn new(data: &'static [u8], image_size: Size) -> Self {
        let mut bitmap = Self::default();
        bitmap.set_image(data, image_size);
        bitmap
    }

    /// Ignores empty data and zero sizes, keeping the previous image
    pub fn set_image(&mut self, data: &'static [u8], image_size: Size) {
        if data.is_empty() || image_size.width() == 0 || image_size.height() == 0 {
            return;
        }
        self.data = data;
        self.image_size = image_size;
    }

    /// Draw set bits in the background color
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn is_null(&self) -> bool {
        self.data.is_empty() || !self.image_size.is_valid()
    }
}

impl<D: Display + ?Sized> Widget<D> for Bitmap {
    fn paint(&mut self, display: &mut D, global: Rect) {
        if self.is_null() {
            return;
        }
        display.set_draw_color(if self.inverted {
            DrawColor::Secondary
        } else {
            DrawColor::Primary
        });
        display.draw_bitmap(global.top_left(), self.image_size, self.data);
    }

    fn size_hint(&mut self, _display: &mut D, _current: Size) -> Option<Size> {
        if self.is_null() {
            None
        } else {
            Some(self.image_size)
        }
    }
}

/// Horizontal bar with a percentage caption drawn in invert mode
pub struct ProgressBar {
    position: i32,
    text: String,
    font: &'static MonoFont<'static>,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            position: 0,
            text: String::new(),
            font: &FONT_4X6,
        }
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// Clamped to 0..=100
    pub fn set_position(&mut self, position: i32) {
        self.position = position.clamp(0, 100);
    }

    /// An empty text falls back to the percentage
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_font(&mut self, font: &'static MonoFont<'static>) {
        self.font = font;
    }

    pub fn caption(&self) -> String {
        if self.text.is_empty() {
            format!("{}%", self.position)
        } else {
            self.text.clone()
        }
    }

    /// Filled part of the bar, 2px inside the frame
    pub fn indicator(&self, global: Rect) -> Rect {
        let max = global.width() - 4;
        Rect::new(
            global.x() + 2,
            global.y() + 2,
            max * self.position / 100,
            global.height() - 4,
        )
    }
}

impl<D: Display + ?Sized> Widget<D> for ProgressBar {
    fn paint(&mut self, display: &mut D, global: Rect) {
        display.set_draw_color(DrawColor::Primary);
        display.draw_rect(global);

        let indicator = self.indicator(global);
        if indicator.width() > 0 {
            display.fill_rect(indicator);
        }

        let caption = self.caption();
        display.set_font(self.font);
        display.set_draw_color(DrawColor::Invert);
        let x = global.x() + global.width() / 2 - display.text_width(&caption) / 2;
        let y = global.y() + global.height() / 2 - display.max_char_height() / 2
            + display.font_ascent();
        display.draw_text(Point::new(x, y), &caption);
    }
}
