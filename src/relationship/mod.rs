//! Family relationships and the Dependency Inversion principle.
//!
//! [`Research`] is the high-level module: it asks questions about a family.
//! [`Relationships`] is the low-level module: it stores relationship
//! triples. Neither depends on the other; both depend on the
//! [`RelationshipBrowser`] abstraction.
//!
//! # Examples
//!
//! ```rust
//! use solid::relationship::{Person, Relationships, Research};
//!
//! let mut relationships = Relationships::new();
//! relationships.add_parent_and_child(Person::new("John"), Person::new("Chris"));
//! relationships.add_parent_and_child(Person::new("John"), Person::new("Matt"));
//! relationships.add_parent_and_child(Person::new("Greg"), Person::new("Dominic"));
//!
//! let research = Research::new(&relationships, "Greg");
//! assert_eq!(research.children(), ["Dominic"]);
//! ```

mod browser;
mod model;
mod research;
mod store;

pub use browser::RelationshipBrowser;
pub use model::{Person, Relationship};
pub use research::Research;
pub use store::Relationships;
