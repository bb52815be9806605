use super::Resizable;

/// The outcome of [`process`]: the area a caller expected versus the area
/// the shape actually reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCheck {
    expected: u64,
    actual: u64,
}

impl AreaCheck {
    /// Returns the area expected from the original width and the new height.
    #[must_use]
    pub const fn expected(&self) -> u64 {
        self.expected
    }

    /// Returns the area the shape reports.
    #[must_use]
    pub const fn actual(&self) -> u64 {
        self.actual
    }

    /// Returns `true` if the shape behaved like a rectangle.
    #[must_use]
    pub const fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Height that [`process`] assigns to the shape.
pub const PROCESS_HEIGHT: u32 = 10;

/// Sets the height of `shape` to [`PROCESS_HEIGHT`] and compares the
/// resulting area with what a rectangle would report.
pub fn process<S>(shape: &mut S) -> AreaCheck
where
    S: Resizable + ?Sized,
{
    let width = shape.width();
    shape.set_height(PROCESS_HEIGHT);

    AreaCheck {
        expected: u64::from(width) * u64::from(PROCESS_HEIGHT),
        actual: shape.area(),
    }
}
