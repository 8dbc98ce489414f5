use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoFont};

use crate::geometry::Size;

/// Panel description used to set up a `BufferedDisplay`
#[derive(Clone, Copy)]
pub struct DisplayConfig {
    pub size: Size,
    /// Font selected until a widget picks another one
    pub font: &'static MonoFont<'static>,
    /// Transfer primary ink as `BinaryColor::Off`
    pub inverted: bool,
}

impl DisplayConfig {
    /// 240x160 ST7586S reflective panel
    pub fn erc240160() -> Self {
        Self {
            size: Size::new(240, 160),
            font: &FONT_6X10,
            inverted: false,
        }
    }

    /// 128x64 SSD1306 OLED, lit pixels are ink
    pub fn ssd1306() -> Self {
        Self {
            size: Size::new(128, 64),
            font: &FONT_6X10,
            inverted: false,
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

impl core::fmt::Debug for DisplayConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisplayConfig")
            .field("size", &self.size)
            .field("font", &self.font.character_size)
            .field("inverted", &self.inverted)
            .finish()
    }
}
