use std::io;

use super::{Journal, PersistenceError};

/// Writes journals to any [`io::Write`] destination.
///
/// All entries are rendered into one buffer, one entry per line, and
/// handed to the writer in a single call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistenceManager;

impl PersistenceManager {
    /// Writes every entry of `journal` to `writer`, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if writing to or flushing `writer` fails.
    pub fn write_to<W>(&self, journal: &Journal, mut writer: W) -> Result<(), PersistenceError>
    where
        W: io::Write,
    {
        let buffer = Self::render(journal);

        writer
            .write_all(buffer.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|error| PersistenceError::new(journal.title(), error))?;

        tracing::debug!(
            title = journal.title(),
            entries = journal.len(),
            bytes = buffer.len(),
            "persisted journal"
        );
        Ok(())
    }

    fn render(journal: &Journal) -> String {
        journal
            .entries()
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }
}
