/// A shape with integer dimensions.
pub trait Shape {
    /// Returns the width.
    fn width(&self) -> u32;

    /// Returns the height.
    fn height(&self) -> u32;

    /// Returns `width * height`.
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

/// A shape whose width and height can be set.
pub trait Resizable: Shape {
    /// Sets the width.
    fn set_width(&mut self, width: u32);

    /// Sets the height.
    fn set_height(&mut self, height: u32);
}

/// A rectangle with independent width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if width and height are equal.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Resizable for Rectangle {
    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

/// A square. Setting either dimension sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    side: u32,
}

impl Square {
    /// Creates a square.
    #[must_use]
    pub const fn new(side: u32) -> Self {
        Self { side }
    }

    /// Returns the side length.
    #[must_use]
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Sets the side length.
    pub const fn set_side(&mut self, side: u32) {
        self.side = side;
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }
}

impl Resizable for Square {
    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Self::new(square.side, square.side)
    }
}
