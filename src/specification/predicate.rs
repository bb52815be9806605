//! The [`Specification`] trait and its simplest implementations.

use std::marker::PhantomData;

use super::{AndSpecification, SharedSpecification, ThreadSafety};

/// A pure boolean test over an item of type `T`.
///
/// Evaluation must depend only on the item and on parameters fixed when the
/// specification was built. It is total: every well-formed item yields an
/// answer, and evaluating has no observable side effects.
///
/// # Examples
///
/// ```rust
/// use solid::specification::Specification;
///
/// struct Even;
///
/// impl Specification<u32> for Even {
///     fn is_satisfied(&self, item: &u32) -> bool {
///         item % 2 == 0
///     }
/// }
///
/// assert!(Even.is_satisfied(&4));
/// assert!(!Even.is_satisfied(&5));
/// ```
pub trait Specification<T: ?Sized> {
    /// Returns `true` if `item` meets this specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Combinators available on every [`Specification`].
pub trait SpecificationExt<T: ?Sized>: Specification<T> {
    /// Combines `self` and `other` into their logical conjunction.
    ///
    /// The result is itself a specification and can be combined again, so
    /// n-ary conjunctions are built by chaining `and`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solid::specification::{Specification, SpecificationExt, from_fn};
    ///
    /// let positive = from_fn(|value: &i64| *value > 0);
    /// let small = from_fn(|value: &i64| *value < 100);
    /// let odd = from_fn(|value: &i64| value % 2 != 0);
    ///
    /// let candidate = positive.and(small).and(odd);
    /// assert!(candidate.is_satisfied(&7));
    /// assert!(!candidate.is_satisfied(&8));
    /// assert!(!candidate.is_satisfied(&-7));
    /// ```
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + ThreadSafety + 'static,
        S: Specification<T> + ThreadSafety + 'static,
    {
        AndSpecification::new(self, other)
    }

    /// Erases the concrete type behind a cloneable [`SharedSpecification`].
    fn shared(self) -> SharedSpecification<T>
    where
        Self: Sized + ThreadSafety + 'static,
    {
        SharedSpecification::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> SpecificationExt<T> for S {}

// =============================================================================
// Constant Specifications
// =============================================================================

/// A specification every item satisfies.
///
/// `Always` is the identity element of conjunction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Always;

impl<T: ?Sized> Specification<T> for Always {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// A specification no item satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Never;

impl<T: ?Sized> Specification<T> for Never {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

// =============================================================================
// Closure-backed Specification
// =============================================================================

/// A specification backed by a plain function or closure.
///
/// Created with [`from_fn`]. The closure must be pure for filtering to be
/// meaningful.
pub struct FnSpecification<T: ?Sized, F>
where
    F: Fn(&T) -> bool,
{
    predicate: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FnSpecification<T, F>
where
    F: Fn(&T) -> bool,
{
    /// Creates a new `FnSpecification` from the given predicate.
    #[must_use]
    pub const fn new(predicate: F) -> Self {
        Self {
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Clone for FnSpecification<T, F>
where
    F: Fn(&T) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.predicate.clone())
    }
}

impl<T: ?Sized, F> std::fmt::Debug for FnSpecification<T, F>
where
    F: Fn(&T) -> bool,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FnSpecification")
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Specification<T> for FnSpecification<T, F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

/// Creates a specification from a predicate closure.
///
/// # Examples
///
/// ```rust
/// use solid::specification::{Specification, from_fn};
///
/// let empty = from_fn(|text: &str| text.is_empty());
/// assert!(empty.is_satisfied(""));
/// assert!(!empty.is_satisfied("journal"));
/// ```
#[must_use]
pub const fn from_fn<T: ?Sized, F>(predicate: F) -> FnSpecification<T, F>
where
    F: Fn(&T) -> bool,
{
    FnSpecification::new(predicate)
}
