//! # solid
//!
//! The five SOLID design principles expressed as small Rust modules.
//!
//! ## Overview
//!
//! The reusable part of this crate is a predicate composition library
//! built around the *specification* pattern (Open/Closed principle):
//!
//! - **Specifications**: [`Specification`](specification::Specification)
//!   predicates, composed with [`and`](specification::SpecificationExt::and)
//! - **Filters**: [`Filter`](specification::Filter) implementations that
//!   return the order-preserving subset of a slice matching a specification
//! - **Algebra**: [`Semigroup`](algebra::Semigroup) and
//!   [`Monoid`](algebra::Monoid), under which conjunction folds any number
//!   of specifications into one
//!
//! The remaining modules are self-contained domain models, one per principle:
//!
//! - `product`: products filtered by colour and size (Open/Closed)
//! - `journal`: journal entries kept apart from their persistence (Single Responsibility)
//! - `shape`: rectangles and squares (Liskov Substitution)
//! - `machine`: printers, scanners and a multi-function machine (Interface Segregation)
//! - `relationship`: family relationships behind a browser trait (Dependency Inversion)
//!
//! ## Feature Flags
//!
//! - `product`, `journal`, `shape`, `machine`, `relationship`: domain modules (default)
//! - `arc`: share specifications through `Arc` instead of `Rc`
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//! - `full`: enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use solid::prelude::*;
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let green_and_large = ColorSpecification::new(Color::Green)
//!     .and(SizeSpecification::new(Size::Large));
//!
//! let names: Vec<&str> = BetterFilter
//!     .filter(&products, &green_and_large)
//!     .into_iter()
//!     .map(Product::name)
//!     .collect();
//! assert_eq!(names, vec!["Tree"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use solid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;

    pub use crate::specification::*;

    #[cfg(feature = "product")]
    pub use crate::product::*;

    #[cfg(feature = "journal")]
    pub use crate::journal::*;

    #[cfg(feature = "shape")]
    pub use crate::shape::*;

    #[cfg(feature = "machine")]
    pub use crate::machine::*;

    #[cfg(feature = "relationship")]
    pub use crate::relationship::*;
}

pub mod algebra;

pub mod specification;

#[cfg(feature = "product")]
pub mod product;

#[cfg(feature = "journal")]
pub mod journal;

#[cfg(feature = "shape")]
pub mod shape;

#[cfg(feature = "machine")]
pub mod machine;

#[cfg(feature = "relationship")]
pub mod relationship;
