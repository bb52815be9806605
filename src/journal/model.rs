/// A titled list of numbered entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Journal {
    title: String,
    entries: Vec<String>,
}

impl Journal {
    /// Creates an empty journal with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the journal title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entries, each already prefixed with its number.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Appends an entry, prefixed with its 1-based position (`"3: text"`).
    ///
    /// Numbering is per journal.
    pub fn add_entry(&mut self, entry: impl AsRef<str>) {
        let number = self.entries.len() + 1;
        self.entries.push(format!("{number}: {}", entry.as_ref()));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the journal has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
