//! Monoid - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use solid::algebra::Monoid;
/// use solid::specification::{SharedSpecification, Specification, from_fn};
///
/// let rules = vec![
///     SharedSpecification::new(from_fn(|value: &u8| *value > 10)),
///     SharedSpecification::new(from_fn(|value: &u8| *value < 20)),
/// ];
/// let in_range = SharedSpecification::combine_all(rules);
/// assert!(in_range.is_satisfied(&15));
/// assert!(!in_range.is_satisfied(&25));
///
/// // No rules at all accepts everything
/// let unconstrained = SharedSpecification::<u8>::combine_all(Vec::new());
/// assert!(unconstrained.is_satisfied(&0));
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}
