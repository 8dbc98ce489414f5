//! Integer 2D point
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// True for the origin
    pub const fn is_null(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Sum of the absolute coordinates
    pub const fn manhattan_length(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Mul<Point> for i32 {
    type Output = Point;

    fn mul(self, p: Point) -> Point {
        p * self
    }
}

impl MulAssign<i32> for Point {
    fn mul_assign(&mut self, factor: i32) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point> for embedded_graphics_core::geometry::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<embedded_graphics_core::geometry::Point> for Point {
    fn from(p: embedded_graphics_core::geometry::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3, -4);
        let b = Point::new(1, 2);
        assert_eq!(a + b, Point::new(4, -2));
        assert_eq!(a - b, Point::new(2, -6));
        assert_eq!(a * 2, Point::new(6, -8));
        assert_eq!(2 * a, Point::new(6, -8));
        assert_eq!(-a, Point::new(-3, 4));

        let mut c = a;
        c += b;
        c -= Point::new(0, 1);
        c *= 3;
        assert_eq!(c, Point::new(12, -9));
    }

    #[test]
    fn point_manhattan_length() {
        assert_eq!(Point::new(3, -4).manhattan_length(), 7);
        assert_eq!(Point::zero().manhattan_length(), 0);
        assert!(Point::zero().is_null());
        assert!(!Point::new(0, 1).is_null());
    }
}
