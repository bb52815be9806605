use super::{Color, Product, Size};
use crate::specification::Specification;

/// Satisfied by products of one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    /// Creates a specification matching `color`.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Returns the colour this specification matches.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color() == self.color
    }
}

/// Satisfied by products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    /// Creates a specification matching `size`.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    /// Returns the size this specification matches.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size() == self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Color::Green, true)]
    #[case(Color::Red, false)]
    #[case(Color::Blue, false)]
    fn color_specification_compares_color(#[case] color: Color, #[case] expected: bool) {
        let apple = Product::new("Apple", Color::Green, Size::Small);

        assert_eq!(ColorSpecification::new(color).is_satisfied(&apple), expected);
    }

    #[rstest]
    #[case(Size::Small, false)]
    #[case(Size::Medium, false)]
    #[case(Size::Large, true)]
    fn size_specification_compares_size(#[case] size: Size, #[case] expected: bool) {
        let house = Product::new("House", Color::Blue, Size::Large);

        assert_eq!(SizeSpecification::new(size).is_satisfied(&house), expected);
    }
}
