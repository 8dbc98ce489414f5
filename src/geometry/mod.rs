//! # Geometry Module
//!
//! Integer value types shared by the widget tree, the painter and the
//! drawing surface.
//!
//! ## Types
//!
//! - `Point`: a position
//! - `Size`: a width/height pair
//! - `Rect`: two inclusive corners, with `|` (union) and `&` (intersection)
//!
//! All operations are total. Degenerate inputs never fail; they collapse to
//! the null rectangle, which the painter reads as "nothing to draw".
//!
//! `From` conversions to the `embedded-graphics` geometry types are provided
//! so widgets can hand coordinates straight to its primitives.

pub mod point;
pub mod rect;
pub mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
