//! Algebraic structures used to combine specifications.
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! Specifications form a monoid under conjunction: `combine` is logical AND
//! and `empty` is the specification every item satisfies. Folding a list of
//! specifications with [`Monoid::combine_all`] yields their n-ary conjunction.
//!
//! # Examples
//!
//! ```rust
//! use solid::algebra::{Monoid, Semigroup};
//! use solid::specification::{SharedSpecification, Specification, from_fn};
//!
//! let positive = SharedSpecification::new(from_fn(|value: &i32| *value > 0));
//! let even = SharedSpecification::new(from_fn(|value: &i32| value % 2 == 0));
//!
//! let both = positive.combine(even);
//! assert!(both.is_satisfied(&4));
//! assert!(!both.is_satisfied(&3));
//!
//! let anything: SharedSpecification<i32> = SharedSpecification::empty();
//! assert!(anything.is_satisfied(&-7));
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
