//! Error types for journal persistence.

use std::io;

/// Represents a failure to write a journal to its destination.
///
/// # Examples
///
/// ```rust
/// use std::io;
/// use solid::journal::PersistenceError;
///
/// let error = PersistenceError::new("Dear Diary", io::Error::other("disk full"));
/// assert_eq!(
///     format!("{error}"),
///     "failed to persist journal \"Dear Diary\": disk full"
/// );
/// ```
#[derive(Debug)]
pub struct PersistenceError {
    journal_title: String,
    source: io::Error,
}

impl PersistenceError {
    /// Creates a new error for the journal with the given title.
    #[must_use]
    pub fn new(journal_title: impl Into<String>, source: io::Error) -> Self {
        Self {
            journal_title: journal_title.into(),
            source,
        }
    }

    /// Returns the title of the journal that could not be written.
    #[must_use]
    pub fn journal_title(&self) -> &str {
        &self.journal_title
    }

    /// Returns the kind of the underlying I/O error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "failed to persist journal \"{}\": {}",
            self.journal_title, self.source
        )
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
