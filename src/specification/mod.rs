//! Composable specifications and the filters that apply them.
//!
//! A *specification* is a reusable, parameterised, pure boolean test over
//! an item. Specifications are combined with [`SpecificationExt::and`] and
//! applied to a slice with a [`Filter`]:
//!
//! - [`Specification`]: the predicate trait
//! - [`AndSpecification`]: logical conjunction of two specifications
//! - [`SharedSpecification`]: a cloneable, type-erased, reference-counted handle
//! - [`Always`], [`Never`], [`FnSpecification`]: ready-made leaves
//! - [`Filter`], [`BetterFilter`]: stable filtering of a slice
//!
//! # Ownership
//!
//! A conjunction owns its operands through [`SharedSpecification`] handles,
//! so an operand can never be dropped while a conjunction still uses it.
//! The same operand may be shared by any number of conjunctions.
//!
//! # Examples
//!
//! ```rust
//! use solid::specification::{BetterFilter, Filter, SpecificationExt, from_fn};
//!
//! let words = vec!["apple", "tree", "house", "ant"];
//!
//! let starts_with_a = from_fn(|word: &&str| word.starts_with('a'));
//! let short = from_fn(|word: &&str| word.len() <= 3);
//!
//! let matched = BetterFilter.filter(&words, &starts_with_a.and(short));
//! assert_eq!(matched, vec![&"ant"]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Marker for values that may be stored behind a [`SharedSpecification`].
///
/// With the `arc` feature this requires `Send + Sync`; otherwise every type
/// qualifies.
#[cfg(feature = "arc")]
pub trait ThreadSafety: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> ThreadSafety for T {}

/// Marker for values that may be stored behind a [`SharedSpecification`].
///
/// With the `arc` feature this requires `Send + Sync`; otherwise every type
/// qualifies.
#[cfg(not(feature = "arc"))]
pub trait ThreadSafety {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> ThreadSafety for T {}

mod conjunction;
mod filter;
mod predicate;
mod shared;

pub use conjunction::AndSpecification;
pub use filter::{BetterFilter, Filter};
pub use predicate::{Always, FnSpecification, Never, Specification, SpecificationExt, from_fn};
pub use shared::SharedSpecification;
