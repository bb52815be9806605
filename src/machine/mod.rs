//! Office machines and the Interface Segregation principle.
//!
//! Instead of one wide machine interface that forces a plain scanner to
//! implement printing and faxing, each capability is its own trait:
//! [`Printer`], [`Scanner`] and [`Fax`]. A device that does several things
//! implements several traits, and [`Machine`] builds a multi-function
//! device out of independent components.
//!
//! # Examples
//!
//! ```rust
//! use solid::machine::{Document, Machine, Printer, Scanner, SimplePrinter, SimpleScanner};
//!
//! let mut machine = Machine::new(SimplePrinter::default(), SimpleScanner::default());
//! let report = Document::new("quarterly report");
//!
//! machine.print(&report);
//! machine.scan(&report);
//!
//! assert_eq!(machine.printer().printed(), ["quarterly report"]);
//! assert_eq!(machine.scanner().scanned(), ["quarterly report"]);
//! ```

mod devices;
mod document;
mod multifunction;

pub use devices::{Fax, Printer, Scanner, SimplePrinter, SimpleScanner};
pub use document::Document;
pub use multifunction::{Machine, MultiFunctionDevice};
