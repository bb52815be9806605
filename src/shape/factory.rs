use super::Rectangle;

/// Creates rectangles, including square ones, without a `Square` subtype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectangleFactory;

impl RectangleFactory {
    /// Creates a `width` by `height` rectangle.
    #[must_use]
    pub const fn create_rectangle(width: u32, height: u32) -> Rectangle {
        Rectangle::new(width, height)
    }

    /// Creates a rectangle whose sides are both `size`.
    #[must_use]
    pub const fn create_square(size: u32) -> Rectangle {
        Rectangle::new(size, size)
    }
}
