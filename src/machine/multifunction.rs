use super::{Document, Printer, Scanner};

/// A device that can both print and scan.
///
/// Implemented automatically for every type that is a [`Printer`] and a
/// [`Scanner`].
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner + ?Sized> MultiFunctionDevice for T {}

/// A multi-function device assembled from a separate printer and scanner.
///
/// Each operation is delegated to the component responsible for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Machine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> Machine<P, S> {
    /// Creates a machine from its components.
    #[must_use]
    pub const fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }

    /// Returns the printer component.
    #[must_use]
    pub const fn printer(&self) -> &P {
        &self.printer
    }

    /// Returns the scanner component.
    #[must_use]
    pub const fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Splits the machine back into its components.
    #[must_use]
    pub fn into_parts(self) -> (P, S) {
        (self.printer, self.scanner)
    }
}

impl<P: Printer, S> Printer for Machine<P, S> {
    fn print(&mut self, document: &Document) {
        self.printer.print(document);
    }
}

impl<P, S: Scanner> Scanner for Machine<P, S> {
    fn scan(&mut self, document: &Document) {
        self.scanner.scan(document);
    }
}
