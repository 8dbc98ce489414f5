//! Integer 2D size
use core::fmt;
use core::ops::{Add, AddAssign, MulAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    pub const fn is_null(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Covers no pixel at all
    pub const fn is_empty(&self) -> bool {
        self.width < 1 || self.height < 1
    }

    /// Both components are non-negative; zero is allowed
    pub const fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    pub fn transpose(&mut self) {
        core::mem::swap(&mut self.width, &mut self.height);
    }

    pub const fn transposed(&self) -> Size {
        Size::new(self.height, self.width)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) {
        self.width += rhs.width;
        self.height += rhs.height;
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Size) {
        self.width -= rhs.width;
        self.height -= rhs.height;
    }
}

impl MulAssign<i32> for Size {
    fn mul_assign(&mut self, factor: i32) {
        self.width *= factor;
        self.height *= factor;
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<embedded_graphics_core::geometry::Size> for Size {
    fn from(s: embedded_graphics_core::geometry::Size) -> Self {
        Self::new(
            i32::try_from(s.width).unwrap_or(i32::MAX),
            i32::try_from(s.height).unwrap_or(i32::MAX),
        )
    }
}

/// Negative components clamp to zero
impl From<Size> for embedded_graphics_core::geometry::Size {
    fn from(s: Size) -> Self {
        Self::new(s.width.max(0) as u32, s.height.max(0) as u32)
    }
}
