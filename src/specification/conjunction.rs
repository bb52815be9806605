//! Logical conjunction of two specifications.

use super::{SharedSpecification, Specification, ThreadSafety};

/// A specification satisfied when both of its operands are satisfied.
///
/// Operands are held as [`SharedSpecification`] handles, so the conjunction
/// keeps them alive for as long as it exists. Evaluation short-circuits:
/// `second` is not consulted when `first` rejects the item.
///
/// # Examples
///
/// ```rust
/// use solid::specification::{AndSpecification, Specification, from_fn};
///
/// let vowel = from_fn(|letter: &char| "aeiou".contains(*letter));
/// let late = from_fn(|letter: &char| *letter > 'm');
///
/// let late_vowel = AndSpecification::new(vowel, late);
/// assert!(late_vowel.is_satisfied(&'o'));
/// assert!(!late_vowel.is_satisfied(&'e'));
/// assert!(!late_vowel.is_satisfied(&'z'));
/// ```
pub struct AndSpecification<T: ?Sized> {
    first: SharedSpecification<T>,
    second: SharedSpecification<T>,
}

impl<T: ?Sized> AndSpecification<T> {
    /// Creates the conjunction of `first` and `second`.
    #[must_use]
    pub fn new<A, B>(first: A, second: B) -> Self
    where
        A: Specification<T> + ThreadSafety + 'static,
        B: Specification<T> + ThreadSafety + 'static,
    {
        Self::from_shared(SharedSpecification::new(first), SharedSpecification::new(second))
    }

    /// Creates the conjunction of two already shared specifications.
    #[must_use]
    pub const fn from_shared(first: SharedSpecification<T>, second: SharedSpecification<T>) -> Self {
        Self { first, second }
    }

    /// Returns the left operand.
    #[must_use]
    pub const fn first(&self) -> &SharedSpecification<T> {
        &self.first
    }

    /// Returns the right operand.
    #[must_use]
    pub const fn second(&self) -> &SharedSpecification<T> {
        &self.second
    }
}

impl<T: ?Sized> Specification<T> for AndSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

impl<T: ?Sized> Clone for AndSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for AndSpecification<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AndSpecification")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
