//! Dirty-region widget tree for small monochrome displays.
//!
//! Widgets live in a [`ui::WidgetTree`]; changing a widget marks it dirty and
//! the [`ui::Painter`] redraws only the dirty subtrees once per frame, then
//! flushes the [`display::Display`] a single time.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod display;
pub mod geometry;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use display::{BufferedDisplay, Display, DisplayConfig, DrawColor};
pub use geometry::{Point, Rect, Size};
pub use ui::{Painter, TreeError, Widget, WidgetId, WidgetTree};
