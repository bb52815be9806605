//! Filtering a slice with a specification.

use super::Specification;

/// Selects the items of a slice that satisfy a specification.
///
/// Implementations must be stable: matching items are returned in the order
/// they appear in `items`. Neither the items nor the specification are
/// modified.
pub trait Filter<T> {
    /// Returns references to every item in `items` satisfying `specification`.
    fn filter<'a, S>(&self, items: &'a [T], specification: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized;
}

/// The generic, specification-driven [`Filter`].
///
/// New criteria are added by writing new specifications; the filter itself
/// never changes.
///
/// # Examples
///
/// ```rust
/// use solid::specification::{Always, BetterFilter, Filter, Never};
///
/// let items = vec![3, 1, 2];
///
/// assert_eq!(BetterFilter.filter(&items, &Always), vec![&3, &1, &2]);
/// assert!(BetterFilter.filter(&items, &Never).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a, S>(&self, items: &'a [T], specification: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        let matched: Vec<&'a T> = items
            .iter()
            .filter(|item| specification.is_satisfied(item))
            .collect();

        tracing::trace!(
            total = items.len(),
            matched = matched.len(),
            "filtered items by specification"
        );

        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::{Always, Never, SpecificationExt, from_fn};
    use rstest::rstest;

    #[rstest]
    fn empty_input_yields_empty_output() {
        let items: Vec<i32> = Vec::new();

        assert!(BetterFilter.filter(&items, &Always).is_empty());
    }

    #[rstest]
    fn always_returns_everything_in_order() {
        let items = vec![5, 3, 9, 1];

        let matched: Vec<i32> = BetterFilter
            .filter(&items, &Always)
            .into_iter()
            .copied()
            .collect();

        assert_eq!(matched, items);
    }

    #[rstest]
    fn never_returns_nothing() {
        let items = vec!["a", "b"];

        assert!(BetterFilter.filter(&items, &Never).is_empty());
    }

    #[rstest]
    fn matches_keep_relative_order() {
        let items = vec![8, 1, 6, 3, 4, 7, 2];
        let even = from_fn(|value: &i32| value % 2 == 0);

        assert_eq!(BetterFilter.filter(&items, &even), vec![&8, &6, &4, &2]);
    }

    #[rstest]
    fn returned_references_point_into_input() {
        let items = vec![String::from("keep"), String::from("drop")];
        let keep = from_fn(|value: &String| value == "keep");

        let matched = BetterFilter.filter(&items, &keep);

        assert_eq!(matched.len(), 1);
        assert!(std::ptr::eq(matched[0], &items[0]));
    }

    #[rstest]
    fn accepts_trait_objects() {
        let items = vec![1, 20, 300];
        let large: Box<dyn Specification<i32>> = Box::new(from_fn(|value: &i32| *value >= 20));

        assert_eq!(BetterFilter.filter(&items, large.as_ref()), vec![&20, &300]);
    }

    #[rstest]
    fn accepts_conjunctions() {
        let items = vec![10, 15, 20, 25, 30];
        let between = from_fn(|value: &i32| *value > 10).and(from_fn(|value: &i32| *value < 30));

        assert_eq!(BetterFilter.filter(&items, &between), vec![&15, &20, &25]);
    }
}
