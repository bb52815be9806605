//! Products filtered by colour and size.
//!
//! This module shows both sides of the Open/Closed principle:
//!
//! - [`ProductFilter`] needs a new method for every new criterion, so it is
//!   closed for extension.
//! - [`ColorSpecification`] and [`SizeSpecification`] plug into
//!   [`BetterFilter`](crate::specification::BetterFilter); new criteria are
//!   new specifications and existing code stays untouched.
//!
//! # Examples
//!
//! ```rust
//! use solid::product::{Color, ColorSpecification, Product, Size, SizeSpecification};
//! use solid::specification::{BetterFilter, Filter, SpecificationExt};
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let blue_and_large = ColorSpecification::new(Color::Blue)
//!     .and(SizeSpecification::new(Size::Large));
//!
//! let matched = BetterFilter.filter(&products, &blue_and_large);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].name(), "House");
//! ```

mod legacy_filter;
mod model;
mod specifications;

pub use legacy_filter::ProductFilter;
pub use model::{Color, Product, Size};
pub use specifications::{ColorSpecification, SizeSpecification};
