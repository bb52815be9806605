use super::{Color, Product, Size};

/// A filter with one hard-coded method per criterion.
///
/// Every new way of filtering means another method here, which is exactly
/// what the Open/Closed principle warns against. Prefer
/// [`BetterFilter`](crate::specification::BetterFilter) with
/// [`ColorSpecification`](super::ColorSpecification) and
/// [`SizeSpecification`](super::SizeSpecification).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter;

impl ProductFilter {
    /// Returns the products of the given colour.
    #[must_use]
    pub fn by_color<'a>(&self, items: &'a [Product], color: Color) -> Vec<&'a Product> {
        items.iter().filter(|item| item.color() == color).collect()
    }

    /// Returns the products of the given size.
    #[must_use]
    pub fn by_size<'a>(&self, items: &'a [Product], size: Size) -> Vec<&'a Product> {
        items.iter().filter(|item| item.size() == size).collect()
    }

    /// Returns the products of the given colour and size.
    #[must_use]
    pub fn by_size_and_color<'a>(
        &self,
        items: &'a [Product],
        color: Color,
        size: Size,
    ) -> Vec<&'a Product> {
        items
            .iter()
            .filter(|item| item.size() == size && item.color() == color)
            .collect()
    }
}
