//! A journal kept apart from its persistence.
//!
//! [`Journal`] only manages entries. Writing a journal somewhere is the
//! job of [`PersistenceManager`], so changes to storage never touch the
//! journal and vice versa (Single Responsibility principle).
//!
//! # Examples
//!
//! ```rust
//! use solid::journal::{Journal, PersistenceManager};
//!
//! let mut journal = Journal::new("Dear Diary");
//! journal.add_entry("I ate a bug");
//! journal.add_entry("I cried today");
//!
//! let mut buffer = Vec::new();
//! PersistenceManager.write_to(&journal, &mut buffer)?;
//! assert_eq!(String::from_utf8_lossy(&buffer), "1: I ate a bug\n2: I cried today\n");
//! # Ok::<(), solid::journal::PersistenceError>(())
//! ```

mod error;
mod model;
mod persistence;

pub use error::PersistenceError;
pub use model::Journal;
pub use persistence::PersistenceManager;
