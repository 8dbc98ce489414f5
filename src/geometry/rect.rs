//! Corner-based rectangle
//!
//! A `Rect` stores its top-left and bottom-right corners, both inclusive, so
//! `width = right - left + 1`. The default value is the null rectangle
//! (`right = left - 1`, `bottom = top - 1`): it covers no pixel, is the
//! identity of `|` and absorbs `&`.
//!
//! Neither operator ever fails. Corners stored the wrong way round are read
//! as an exclusive span on that axis, and anything that cannot overlap
//! collapses to the null rectangle. Arithmetic is done in `i64` and
//! saturated back into `i32`, so corners anywhere in the `i32` range are
//! safe.
use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use embedded_graphics::primitives::Rectangle;

use super::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Default for Rect {
    fn default() -> Self {
        Self::NULL
    }
}

/// Ordered `[low, high]` bounds of one axis.
///
/// A span whose end lies more than one before its start is stored inverted;
/// it is read as the exclusive range between the two corners.
const fn span(start: i32, end: i32) -> (i32, i32) {
    if (end as i64) < (start as i64) - 1 {
        (end + 1, start - 1)
    } else {
        (start, end)
    }
}

const fn saturate(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else if v < i32::MIN as i64 {
        i32::MIN
    } else {
        v as i32
    }
}

/// Far edge of an extent starting at `start`
const fn end_of(start: i32, extent: i32) -> i32 {
    saturate(start as i64 + extent as i64 - 1)
}

const fn shifted(v: i32, by: i64) -> i32 {
    saturate(v as i64 + by)
}

impl Rect {
    pub const NULL: Rect = Rect { x1: 0, y1: 0, x2: -1, y2: -1 };

    /// Rectangle from its top-left corner and extent
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            x1: left,
            y1: top,
            x2: end_of(left, width),
            y2: end_of(top, height),
        }
    }

    pub const fn null() -> Self {
        Self::NULL
    }

    /// Both corners inclusive
    pub const fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self {
            x1: top_left.x(),
            y1: top_left.y(),
            x2: bottom_right.x(),
            y2: bottom_right.y(),
        }
    }

    pub const fn from_point_size(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x(), top_left.y(), size.width(), size.height())
    }

    pub const fn is_null(&self) -> bool {
        self.x2 as i64 == self.x1 as i64 - 1 && self.y2 as i64 == self.y1 as i64 - 1
    }

    pub const fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    pub const fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    pub const fn left(&self) -> i32 {
        self.x1
    }

    pub const fn top(&self) -> i32 {
        self.y1
    }

    pub const fn right(&self) -> i32 {
        self.x2
    }

    pub const fn bottom(&self) -> i32 {
        self.y2
    }

    pub const fn x(&self) -> i32 {
        self.x1
    }

    pub const fn y(&self) -> i32 {
        self.y1
    }

    // Edge setters keep the opposite edge where it is, so the size changes.

    pub fn set_left(&mut self, pos: i32) {
        self.x1 = pos;
    }

    pub fn set_top(&mut self, pos: i32) {
        self.y1 = pos;
    }

    pub fn set_right(&mut self, pos: i32) {
        self.x2 = pos;
    }

    pub fn set_bottom(&mut self, pos: i32) {
        self.y2 = pos;
    }

    pub fn set_x(&mut self, pos: i32) {
        self.x1 = pos;
    }

    pub fn set_y(&mut self, pos: i32) {
        self.y1 = pos;
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub const fn bottom_right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub const fn top_right(&self) -> Point {
        Point::new(self.x2, self.y1)
    }

    pub const fn bottom_left(&self) -> Point {
        Point::new(self.x1, self.y2)
    }

    pub const fn center(&self) -> Point {
        Point::new(
            ((self.x1 as i64 + self.x2 as i64) / 2) as i32,
            ((self.y1 as i64 + self.y2 as i64) / 2) as i32,
        )
    }

    pub const fn width(&self) -> i32 {
        saturate(self.x2 as i64 - self.x1 as i64 + 1)
    }

    pub const fn height(&self) -> i32 {
        saturate(self.y2 as i64 - self.y1 as i64 + 1)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Keeps the top-left corner fixed
    pub fn set_width(&mut self, width: i32) {
        self.x2 = end_of(self.x1, width);
    }

    /// Keeps the top-left corner fixed
    pub fn set_height(&mut self, height: i32) {
        self.y2 = end_of(self.y1, height);
    }

    pub fn set_size(&mut self, size: Size) {
        self.set_width(size.width());
        self.set_height(size.height());
    }

    // Movers keep the size and drag the opposite edge along.

    pub fn move_left(&mut self, pos: i32) {
        self.x2 = shifted(self.x2, pos as i64 - self.x1 as i64);
        self.x1 = pos;
    }

    pub fn move_top(&mut self, pos: i32) {
        self.y2 = shifted(self.y2, pos as i64 - self.y1 as i64);
        self.y1 = pos;
    }

    pub fn move_right(&mut self, pos: i32) {
        self.x1 = shifted(self.x1, pos as i64 - self.x2 as i64);
        self.x2 = pos;
    }

    pub fn move_bottom(&mut self, pos: i32) {
        self.y1 = shifted(self.y1, pos as i64 - self.y2 as i64);
        self.y2 = pos;
    }

    pub fn move_top_left(&mut self, p: Point) {
        self.move_left(p.x());
        self.move_top(p.y());
    }

    pub fn move_bottom_right(&mut self, p: Point) {
        self.move_right(p.x());
        self.move_bottom(p.y());
    }

    pub fn move_top_right(&mut self, p: Point) {
        self.move_right(p.x());
        self.move_top(p.y());
    }

    pub fn move_bottom_left(&mut self, p: Point) {
        self.move_left(p.x());
        self.move_bottom(p.y());
    }

    pub fn move_center(&mut self, p: Point) {
        let w = self.x2 as i64 - self.x1 as i64;
        let h = self.y2 as i64 - self.y1 as i64;
        self.x1 = shifted(p.x(), -(w / 2));
        self.y1 = shifted(p.y(), -(h / 2));
        self.x2 = shifted(self.x1, w);
        self.y2 = shifted(self.y1, h);
    }

    /// Moves the top-left corner to `p`, keeping the size
    pub fn move_to(&mut self, p: Point) {
        self.move_top_left(p);
    }

    pub fn translate(&mut self, offset: Point) {
        *self = self.translated(offset);
    }

    pub const fn translated(&self, offset: Point) -> Rect {
        Rect {
            x1: shifted(self.x1, offset.x() as i64),
            y1: shifted(self.y1, offset.y() as i64),
            x2: shifted(self.x2, offset.x() as i64),
            y2: shifted(self.y2, offset.y() as i64),
        }
    }

    /// Same top-left corner, width and height swapped
    pub const fn transposed(&self) -> Rect {
        Rect::from_point_size(self.top_left(), self.size().transposed())
    }

    /// Moves each edge by its own delta
    pub fn adjust(&mut self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) {
        *self = self.adjusted(dx1, dy1, dx2, dy2);
    }

    pub const fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Rect {
        Rect {
            x1: shifted(self.x1, dx1 as i64),
            y1: shifted(self.y1, dy1 as i64),
            x2: shifted(self.x2, dx2 as i64),
            y2: shifted(self.y2, dy2 as i64),
        }
    }

    /// Inclusive on all four edges
    pub const fn contains(&self, p: Point) -> bool {
        p.x() >= self.x1 && p.x() <= self.x2 && p.y() >= self.y1 && p.y() <= self.y2
    }

    pub fn united(&self, other: &Rect) -> Rect {
        *self | *other
    }

    pub fn intersected(&self, other: &Rect) -> Rect {
        *self & *other
    }
}

impl BitOr for Rect {
    type Output = Rect;

    /// Bounding rectangle of both operands
    fn bitor(self, r: Rect) -> Rect {
        if self.is_null() {
            return r;
        }
        if r.is_null() {
            return self;
        }

        let (l1, r1) = span(self.x1, self.x2);
        let (l2, r2) = span(r.x1, r.x2);
        let (t1, b1) = span(self.y1, self.y2);
        let (t2, b2) = span(r.y1, r.y2);

        Rect {
            x1: l1.min(l2),
            y1: t1.min(t2),
            x2: r1.max(r2),
            y2: b1.max(b2),
        }
    }
}

impl BitAnd for Rect {
    type Output = Rect;

    /// Overlap of both operands, null when they do not meet
    fn bitand(self, r: Rect) -> Rect {
        if self.is_null() || r.is_null() {
            return Rect::NULL;
        }

        let (l1, r1) = span(self.x1, self.x2);
        let (l2, r2) = span(r.x1, r.x2);
        if l1 > r2 || l2 > r1 {
            return Rect::NULL;
        }

        let (t1, b1) = span(self.y1, self.y2);
        let (t2, b2) = span(r.y1, r.y2);
        if t1 > b2 || t2 > b1 {
            return Rect::NULL;
        }

        Rect {
            x1: l1.max(l2),
            y1: t1.max(t2),
            x2: r1.min(r2),
            y2: b1.min(b2),
        }
    }
}

impl BitOrAssign for Rect {
    fn bitor_assign(&mut self, r: Rect) {
        *self = *self | r;
    }
}

impl BitAndAssign for Rect {
    fn bitand_assign(&mut self, r: Rect) {
        *self = *self & r;
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{};{} {}x{}}}", self.x(), self.y(), self.width(), self.height())
    }
}

/// Empty rectangles map to a zero-sized `Rectangle` at the same corner
impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Self {
        Rectangle::new(r.top_left().into(), r.size().into())
    }
}

impl From<Rectangle> for Rect {
    fn from(r: Rectangle) -> Self {
        Rect::from_point_size(r.top_left.into(), r.size.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_corners_and_extent() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 109);
        assert_eq!(r.bottom(), 69);
        assert_eq!(r.size(), Size::new(100, 50));
        assert_eq!(r.top_right(), Point::new(109, 20));
        assert_eq!(r.bottom_left(), Point::new(10, 69));
        assert_eq!(r.center(), Point::new(59, 44));
    }

    #[test]
    fn null_rect_properties() {
        let n = Rect::default();
        assert!(n.is_null());
        assert!(n.is_empty());
        assert!(!n.is_valid());
        assert_eq!(n.size(), Size::new(0, 0));
        assert!(!n.contains(Point::zero()));

        // zero area but not the null rectangle
        let thin = Rect::new(5, 5, 0, 3);
        assert!(!thin.is_null());
        assert!(thin.is_empty());
    }

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a & b, Rect::new(5, 5, 5, 5));
        assert_eq!(b & a, Rect::new(5, 5, 5, 5));
        assert_eq!(a | b, Rect::new(0, 0, 15, 15));
        assert_eq!(b | a, Rect::new(0, 0, 15, 15));
    }

    #[test]
    fn disjoint_rects() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert!((a & b).is_null());
        assert!((b & a).is_null());

        let u = a | b;
        assert_eq!(u, Rect::from_corners(Point::new(0, 0), Point::new(14, 14)));
        assert_eq!(u, b | a);
    }

    #[test]
    fn disjoint_on_one_axis_only() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(2, 20, 5, 5);
        assert_eq!(a & b, Rect::NULL);
    }

    #[test]
    fn touching_edges_share_a_line() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(4, 0, 5, 5);
        assert_eq!(a & b, Rect::new(4, 0, 1, 5));
    }

    #[test]
    fn null_is_identity_and_absorbing() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(-3, 7, 1, 1),
            Rect::new(5, 5, 0, 4),
            Rect::from_corners(Point::new(10, 10), Point::new(2, 2)),
        ];
        for r in rects {
            assert_eq!(r | Rect::NULL, r);
            assert_eq!(Rect::NULL | r, r);
            assert_eq!(r & Rect::NULL, Rect::NULL);
            assert_eq!(Rect::NULL & r, Rect::NULL);
        }
        assert_eq!(Rect::NULL | Rect::NULL, Rect::NULL);
    }

    #[test]
    fn inverted_corners_read_as_exclusive_span() {
        // corners swapped: span is the range strictly between them, 3..=9
        let inverted = Rect::from_corners(Point::new(10, 10), Point::new(2, 2));
        let a = Rect::new(0, 0, 5, 5);

        assert_eq!(inverted & a, Rect::from_corners(Point::new(3, 3), Point::new(4, 4)));
        assert_eq!(a & inverted, inverted & a);
        assert_eq!(inverted | a, Rect::from_corners(Point::new(0, 0), Point::new(9, 9)));
        assert_eq!(a | inverted, inverted | a);
    }

    #[test]
    fn degenerate_operand_does_not_panic() {
        let collapsed = Rect::from_corners(Point::new(4, 4), Point::new(3, 3));
        let a = Rect::new(0, 0, 10, 10);
        assert!((collapsed & Rect::new(20, 20, 2, 2)).is_null());
        assert_eq!(collapsed | a, a | collapsed);
    }

    #[test]
    fn corners_at_the_i32_limits_do_not_overflow() {
        let edge = Rect::from_corners(Point::new(i32::MIN, 0), Point::new(i32::MIN + 5, 5));
        let a = Rect::new(0, 0, 3, 3);
        assert!(!edge.is_null());
        assert_eq!(edge.width(), 6);
        assert_eq!(
            edge | a,
            Rect::from_corners(Point::new(i32::MIN, 0), Point::new(2, 5))
        );
        assert!((edge & a).is_null());

        let whole = Rect::from_corners(
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
        );
        assert!(whole.is_valid());
        assert_eq!(whole.width(), i32::MAX);
        assert_eq!(whole.center(), Point::new(0, 0));
        assert_eq!(whole & a, a);

        let inverted = Rect::from_corners(Point::new(i32::MAX, 0), Point::new(i32::MIN, 3));
        assert_eq!(inverted & a, a);

        let mut far = Rect::new(i32::MAX - 1, 0, 10, 1);
        assert_eq!(far.right(), i32::MAX);
        far.translate(Point::new(5, 0));
        assert_eq!(far.left(), i32::MAX);
        far.move_left(i32::MIN);
        assert_eq!(far.left(), i32::MIN);
    }

    #[test]
    fn assign_operators() {
        let mut r = Rect::new(0, 0, 4, 4);
        r |= Rect::new(2, 2, 4, 4);
        assert_eq!(r, Rect::new(0, 0, 6, 6));
        r &= Rect::new(3, 3, 10, 10);
        assert_eq!(r, Rect::new(3, 3, 3, 3));
        assert_eq!(r.united(&Rect::NULL), r);
        assert_eq!(r.intersected(&Rect::NULL), Rect::NULL);
    }

    #[test]
    fn movers_keep_size() {
        let mut r = Rect::new(0, 0, 10, 6);
        r.move_left(5);
        assert_eq!(r, Rect::new(5, 0, 10, 6));
        r.move_bottom(20);
        assert_eq!(r, Rect::new(5, 15, 10, 6));
        r.move_bottom_right(Point::new(9, 5));
        assert_eq!(r, Rect::new(0, 0, 10, 6));
        r.move_to(Point::new(-2, 3));
        assert_eq!(r, Rect::new(-2, 3, 10, 6));
        r.move_center(Point::new(50, 50));
        assert_eq!(r.size(), Size::new(10, 6));
        assert_eq!(r.top_left(), Point::new(46, 48));
    }

    #[test]
    fn setters_and_resizes_keep_opposite_corner() {
        let mut r = Rect::new(2, 2, 10, 10);
        r.set_left(0);
        assert_eq!(r.right(), 11);
        assert_eq!(r.width(), 12);

        r.set_size(Size::new(3, 4));
        assert_eq!(r, Rect::new(0, 2, 3, 4));
        r.set_width(0);
        assert!(r.is_empty());
    }

    #[test]
    fn translate_adjust_transpose() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.translated(Point::new(10, 20)), Rect::new(11, 22, 3, 4));
        assert_eq!(r.adjusted(1, 1, -1, -1), Rect::new(2, 3, 1, 2));
        assert_eq!(r.transposed(), Rect::new(1, 2, 4, 3));

        let mut m = r;
        m.translate(Point::new(-1, -2));
        m.adjust(0, 0, 1, 1);
        assert_eq!(m, Rect::new(0, 0, 4, 5));
    }

    #[test]
    fn converts_to_rectangle() {
        let r: Rectangle = Rect::new(3, 4, 5, 6).into();
        assert_eq!(r.top_left, embedded_graphics_core::geometry::Point::new(3, 4));
        assert_eq!(r.size, embedded_graphics_core::geometry::Size::new(5, 6));

        let empty: Rectangle = Rect::NULL.into();
        assert_eq!(empty.size, embedded_graphics_core::geometry::Size::zero());
        assert_eq!(Rect::from(r), Rect::new(3, 4, 5, 6));
    }
}
