//! Type-erased, reference-counted specifications.

use super::{Always, AndSpecification, ReferenceCounter, Specification, ThreadSafety};
use crate::algebra::{Monoid, Semigroup};

/// Object-safe view of a specification that may live behind a
/// [`ReferenceCounter`].
trait ShareableSpecification<T: ?Sized>: Specification<T> + ThreadSafety {}

impl<T: ?Sized, S: Specification<T> + ThreadSafety + ?Sized> ShareableSpecification<T> for S {}

/// A cloneable handle to any specification over `T`.
///
/// Cloning a `SharedSpecification` is cheap: it only bumps a reference
/// count (`Rc`, or `Arc` with the `arc` feature). The wrapped
/// specification is dropped when the last handle goes away.
///
/// Under conjunction `SharedSpecification` is a [`Monoid`], with
/// [`Always`] as its identity.
///
/// # Examples
///
/// ```rust
/// use solid::specification::{SharedSpecification, Specification, from_fn};
///
/// let rules: Vec<SharedSpecification<i32>> = vec![
///     SharedSpecification::new(from_fn(|value: &i32| *value > 0)),
///     SharedSpecification::new(from_fn(|value: &i32| *value < 10)),
/// ];
///
/// assert!(rules.iter().all(|rule| rule.is_satisfied(&5)));
/// ```
pub struct SharedSpecification<T: ?Sized> {
    inner: ReferenceCounter<dyn ShareableSpecification<T>>,
}

impl<T: ?Sized> SharedSpecification<T> {
    /// Wraps `specification` in a new shared handle.
    #[must_use]
    pub fn new<S>(specification: S) -> Self
    where
        S: Specification<T> + ThreadSafety + 'static,
    {
        Self {
            inner: ReferenceCounter::new(specification),
        }
    }

    /// Returns `true` if both handles point to the same specification.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Specification<T> for SharedSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.inner.is_satisfied(item)
    }
}

impl<T: ?Sized> Clone for SharedSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for SharedSpecification<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SharedSpecification")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Semigroup and Monoid Implementations
// =============================================================================

impl<T: ?Sized + 'static> Semigroup for SharedSpecification<T> {
    fn combine(self, other: Self) -> Self {
        Self::new(AndSpecification::from_shared(self, other))
    }
}

impl<T: ?Sized + 'static> Monoid for SharedSpecification<T> {
    fn empty() -> Self {
        Self::new(Always)
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SharedSpecification<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(AndSpecification<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "arc"))]
mod send_sync_tests {
    use super::*;
    use rstest::rstest;
    use std::thread;

    #[rstest]
    fn shared_specification_used_across_threads() {
        let positive = SharedSpecification::new(crate::specification::from_fn(|value: &i32| *value > 0));

        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let positive = positive.clone();
                thread::spawn(move || positive.is_satisfied(&offset))
            })
            .collect();

        let results: Vec<bool> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(results, vec![false, true, true, true]);
    }
}
