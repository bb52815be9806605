//! Rectangles, squares and the Liskov Substitution principle.
//!
//! A [`Square`] can pretend to be a resizable rectangle, but code written
//! against [`Resizable`] expects width and height to change independently.
//! [`process`] makes the broken expectation observable. The
//! [`RectangleFactory`] avoids the problem by producing plain
//! [`Rectangle`]s, square or not.
//!
//! # Examples
//!
//! ```rust
//! use solid::shape::{Rectangle, Square, process};
//!
//! let mut rectangle = Rectangle::new(3, 4);
//! assert!(process(&mut rectangle).holds());
//!
//! let mut square = Square::new(5);
//! let check = process(&mut square);
//! assert_eq!(check.expected(), 50);
//! assert_eq!(check.actual(), 100);
//! assert!(!check.holds());
//! ```

mod factory;
mod model;
mod substitution;

pub use factory::RectangleFactory;
pub use model::{Rectangle, Resizable, Shape, Square};
pub use substitution::{AreaCheck, PROCESS_HEIGHT, process};
