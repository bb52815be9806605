use super::Document;

/// Something that can print documents.
pub trait Printer {
    /// Prints `document`.
    fn print(&mut self, document: &Document);
}

/// Something that can scan documents.
pub trait Scanner {
    /// Scans `document`.
    fn scan(&mut self, document: &Document);
}

/// Something that can fax documents.
pub trait Fax {
    /// Faxes `document`.
    fn fax(&mut self, document: &Document);
}

/// A printer that remembers the titles it printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplePrinter {
    printed: Vec<String>,
}

impl SimplePrinter {
    /// Returns the titles printed so far, oldest first.
    #[must_use]
    pub fn printed(&self) -> &[String] {
        &self.printed
    }
}

impl Printer for SimplePrinter {
    fn print(&mut self, document: &Document) {
        self.printed.push(document.title().to_owned());
    }
}

/// A scanner that remembers the titles it scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleScanner {
    scanned: Vec<String>,
}

impl SimpleScanner {
    /// Returns the titles scanned so far, oldest first.
    #[must_use]
    pub fn scanned(&self) -> &[String] {
        &self.scanned
    }
}

impl Scanner for SimpleScanner {
    fn scan(&mut self, document: &Document) {
        self.scanned.push(document.title().to_owned());
    }
}
