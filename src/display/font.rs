//! Metrics of `embedded-graphics` mono fonts
//!
//! Text is drawn with an alphabetic baseline: the glyph cell starts
//! `baseline` rows above the anchor point.
use embedded_graphics::mono_font::MonoFont;

/// Rows above the baseline
pub fn ascent(font: &MonoFont<'_>) -> i32 {
    font.baseline as i32
}

/// Rows from the baseline down to the bottom of the cell
pub fn descent(font: &MonoFont<'_>) -> i32 {
    font.character_size.height as i32 - font.baseline as i32
}

pub fn max_char_height(font: &MonoFont<'_>) -> i32 {
    font.character_size.height as i32
}

pub fn text_width(font: &MonoFont<'_>, text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        return 0;
    }
    n * font.character_size.width as i32 + (n - 1) * font.character_spacing as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    #[test]
    fn metrics_of_6x10() {
        assert_eq!(max_char_height(&FONT_6X10), 10);
        assert_eq!(ascent(&FONT_6X10) + descent(&FONT_6X10), 10);
        assert_eq!(text_width(&FONT_6X10, ""), 0);
        assert_eq!(text_width(&FONT_6X10, "abc"), 18);
    }
}
