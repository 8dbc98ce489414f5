//! 1-bit frame buffer drawn with embedded-graphics
use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt::Debug;

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{MonoFont, MonoTextStyle},
    primitives::{Line, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Baseline, Text},
    Drawable,
};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::OriginDimensions,
    pixelcolor::BinaryColor,
    Pixel,
};

use super::{font, Display, DisplayConfig, DrawColor};
use crate::geometry::{Point, Rect, Size};

/// Bit-packed frame, one bit per pixel, set bits are primary ink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bits: Vec<u8>,
    width: usize,
    height: usize,
    stride: usize,
}

impl FrameBuffer {
    pub fn new(size: Size) -> Self {
        let width = size.width().max(0) as usize;
        let height = size.height().max(0) as usize;
        let stride = width.div_ceil(8);
        Self {
            bits: vec![0; stride * height],
            width,
            height,
            stride,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    fn index(&self, p: Point) -> Option<(usize, u8)> {
        if p.x() < 0 || p.y() < 0 {
            return None;
        }
        let (x, y) = (p.x() as usize, p.y() as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.stride + x / 8, 0x80 >> (x % 8)))
    }

    /// Ink at `p`; false outside the frame
    pub fn get(&self, p: Point) -> bool {
        self.index(p)
            .map(|(i, mask)| self.bits[i] & mask != 0)
            .unwrap_or(false)
    }

    /// Apply one ink operation, ignored outside the frame
    pub fn apply(&mut self, p: Point, color: DrawColor) {
        if let Some((i, mask)) = self.index(p) {
            match color {
                DrawColor::Primary => self.bits[i] |= mask,
                DrawColor::Secondary => self.bits[i] &= !mask,
                DrawColor::Invert => self.bits[i] ^= mask,
            }
        }
    }

    /// Row-major ink values of the whole frame
    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| self.get(Point::new(x as i32, y as i32)))
        })
    }

    pub fn ink_count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }
}

/// Draw target handed to embedded-graphics primitives.
///
/// Primitives are always styled `BinaryColor::On`; the pen turns each lit
/// pixel into the current ink operation. Off pixels are transparent.
struct Pen<'a> {
    frame: &'a mut FrameBuffer,
    color: DrawColor,
    clip: Rect,
}

impl DrawTarget for Pen<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_off() {
                continue;
            }
            let p = Point::from(point);
            if self.clip.contains(p) {
                self.frame.apply(p, self.color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Pen<'_> {
    fn size(&self) -> embedded_graphics_core::geometry::Size {
        self.frame.size().into()
    }
}

/// `Display` over any binary embedded-graphics target.
///
/// All drawing lands in a RAM frame; `flush` transfers the frame to the
/// target in one `fill_contiguous` call.
pub struct BufferedDisplay<T> {
    target: T,
    frame: FrameBuffer,
    origin: Point,
    inverted: bool,
    font: &'static MonoFont<'static>,
    color: DrawColor,
    clip: Rect,
}

impl<T> BufferedDisplay<T>
where
    T: DrawTarget<Color = BinaryColor>,
{
    /// The frame is clamped to the target's bounding box
    pub fn new(target: T, config: DisplayConfig) -> Self {
        let bounds = target.bounding_box();
        let available = Size::from(bounds.size);
        let size = Size::new(
            config.size.width().min(available.width()),
            config.size.height().min(available.height()),
        );
        log::debug!("buffered display {} on target {}", size, available);

        Self {
            target,
            frame: FrameBuffer::new(size),
            origin: bounds.top_left.into(),
            inverted: config.inverted,
            font: config.font,
            color: DrawColor::Primary,
            clip: Rect::from_point_size(Point::zero(), size),
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn release(self) -> T {
        self.target
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn draw_color(&self) -> DrawColor {
        self.color
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip
    }

    /// Send the frame to the target
    pub fn try_flush(&mut self) -> Result<(), T::Error> {
        let area = Rectangle::new(self.origin.into(), self.frame.size().into());
        let inverted = self.inverted;
        let colors = self.frame.pixels().map(|ink| {
            if ink != inverted {
                BinaryColor::On
            } else {
                BinaryColor::Off
            }
        });
        self.target.fill_contiguous(&area, colors)
    }

    fn pen(&mut self) -> Pen<'_> {
        Pen {
            frame: &mut self.frame,
            color: self.color,
            clip: self.clip,
        }
    }

    fn full_frame(&self) -> Rect {
        Rect::from_point_size(Point::zero(), self.frame.size())
    }
}

impl<T> Display for BufferedDisplay<T>
where
    T: DrawTarget<Color = BinaryColor>,
    T::Error: Debug,
{
    fn size(&self) -> Size {
        self.frame.size()
    }

    fn clear_buffer(&mut self) {
        self.frame.clear();
    }

    fn flush(&mut self) {
        if let Err(e) = self.try_flush() {
            log::warn!("display flush failed: {:?}", e);
        }
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.color = color;
    }

    fn set_font(&mut self, font: &'static MonoFont<'static>) {
        self.font = font;
    }

    fn set_clip_rect(&mut self, rect: Rect) {
        self.clip = rect;
    }

    fn reset_clip_rect(&mut self) {
        self.clip = self.full_frame();
    }

    fn font_ascent(&self) -> i32 {
        font::ascent(self.font)
    }

    fn font_descent(&self) -> i32 {
        font::descent(self.font)
    }

    fn max_char_height(&self) -> i32 {
        font::max_char_height(self.font)
    }

    fn text_width(&self, text: &str) -> i32 {
        font::text_width(self.font, text)
    }

    fn draw_text(&mut self, pos: Point, text: &str) {
        let style = MonoTextStyle::new(self.font, BinaryColor::On);
        Text::with_baseline(text, pos.into(), style, Baseline::Alphabetic)
            .draw(&mut self.pen())
            .ok();
    }

    fn draw_bitmap(&mut self, pos: Point, size: Size, data: &[u8]) {
        if size.is_empty() {
            return;
        }
        let stride = (size.width() as usize).div_ceil(8);
        let len = (stride * size.height() as usize).min(data.len());
        let raw = ImageRaw::<BinaryColor>::new(&data[..len], size.width() as u32);
        Image::new(&raw, pos.into()).draw(&mut self.pen()).ok();
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        Line::new(from.into(), to.into())
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.pen())
            .ok();
    }

    fn draw_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(BinaryColor::On)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Rectangle::from(rect)
            .into_styled(style)
            .draw(&mut self.pen())
            .ok();
    }

    fn fill_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        Rectangle::from(rect)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.pen())
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> BufferedDisplay<MockDisplay<BinaryColor>> {
        let mut target = MockDisplay::new();
        target.set_allow_overdraw(true);
        BufferedDisplay::new(target, DisplayConfig::ssd1306().with_size(Size::new(32, 16)))
    }

    #[test]
    fn frame_buffer_ink_operations() {
        let mut frame = FrameBuffer::new(Size::new(10, 2));
        let p = Point::new(9, 1);
        frame.apply(p, DrawColor::Primary);
        assert!(frame.get(p));
        frame.apply(p, DrawColor::Invert);
        assert!(!frame.get(p));
        frame.apply(p, DrawColor::Invert);
        frame.apply(p, DrawColor::Secondary);
        assert!(!frame.get(p));

        frame.apply(Point::new(10, 0), DrawColor::Primary);
        frame.apply(Point::new(-1, 0), DrawColor::Primary);
        assert_eq!(frame.ink_count(), 0);
    }

    #[test]
    fn frame_is_clamped_to_target() {
        let target = MockDisplay::<BinaryColor>::new();
        let d = BufferedDisplay::new(target, DisplayConfig::erc240160());
        assert_eq!(d.size(), Size::new(64, 64));
        assert_eq!(d.clip_rect(), Rect::new(0, 0, 64, 64));
    }

    #[test]
    fn fill_respects_clip_window() {
        let mut d = display();
        d.set_clip_rect(Rect::new(2, 2, 3, 3));
        d.fill_rect(Rect::new(0, 0, 10, 10));
        assert_eq!(d.frame().ink_count(), 9);
        assert!(d.frame().get(Point::new(2, 2)));
        assert!(!d.frame().get(Point::new(5, 5)));

        d.reset_clip_rect();
        d.fill_rect(Rect::new(0, 0, 10, 10));
        assert_eq!(d.frame().ink_count(), 100);
    }

    #[test]
    fn null_clip_discards_everything() {
        let mut d = display();
        d.set_clip_rect(Rect::NULL);
        d.fill_rect(Rect::new(0, 0, 32, 16));
        d.draw_line(Point::new(0, 0), Point::new(31, 15));
        assert_eq!(d.frame().ink_count(), 0);
    }

    #[test]
    fn secondary_erases_and_invert_toggles() {
        let mut d = display();
        d.fill_rect(Rect::new(0, 0, 4, 4));
        d.set_draw_color(DrawColor::Secondary);
        d.fill_rect(Rect::new(0, 0, 2, 4));
        assert_eq!(d.frame().ink_count(), 8);

        d.set_draw_color(DrawColor::Invert);
        d.fill_rect(Rect::new(0, 0, 4, 1));
        assert_eq!(d.frame().ink_count(), 8);
        assert!(d.frame().get(Point::new(0, 0)));
        assert!(!d.frame().get(Point::new(3, 0)));
    }

    #[test]
    fn outline_is_one_pixel_inside() {
        let mut d = display();
        d.draw_rect(Rect::new(1, 1, 4, 3));
        assert_eq!(d.frame().ink_count(), 10);
        assert!(d.frame().get(Point::new(1, 1)));
        assert!(d.frame().get(Point::new(4, 3)));
        assert!(!d.frame().get(Point::new(2, 2)));
    }

    #[test]
    fn bitmap_draws_set_bits_only() {
        let mut d = display();
        // 8x2: first row solid, second row alternating
        d.draw_bitmap(Point::new(0, 0), Size::new(8, 2), &[0xff, 0xaa]);
        assert_eq!(d.frame().ink_count(), 12);
        assert!(d.frame().get(Point::new(0, 1)));
        assert!(!d.frame().get(Point::new(1, 1)));
    }

    #[test]
    fn text_lands_inside_its_cell() {
        let mut d = display();
        let ascent = d.font_ascent();
        d.draw_text(Point::new(0, ascent), "H");
        assert!(d.frame().ink_count() > 0);
        assert_eq!(d.text_width("H"), 6);
    }

    #[test]
    fn flush_transfers_frame() {
        let mut d = display();
        d.fill_rect(Rect::new(0, 0, 2, 1));
        d.flush();
        let target = d.target();
        assert_eq!(target.get_pixel(Point::new(0, 0).into()), Some(BinaryColor::On));
        assert_eq!(target.get_pixel(Point::new(2, 0).into()), Some(BinaryColor::Off));
        assert_eq!(target.get_pixel(Point::new(40, 0).into()), None);
    }

    #[test]
    fn inverted_panel_swaps_polarity() {
        let mut target = MockDisplay::new();
        target.set_allow_overdraw(true);
        let config = DisplayConfig::ssd1306()
            .with_size(Size::new(4, 4))
            .with_inverted(true);
        let mut d = BufferedDisplay::new(target, config);
        d.fill_rect(Rect::new(0, 0, 1, 1));
        d.try_flush().unwrap();
        let target = d.release();
        assert_eq!(target.get_pixel(Point::new(0, 0).into()), Some(BinaryColor::Off));
        assert_eq!(target.get_pixel(Point::new(1, 0).into()), Some(BinaryColor::On));
    }
}
