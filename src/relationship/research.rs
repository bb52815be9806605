use super::RelationshipBrowser;

/// Findings about one person's children.
///
/// Built against any [`RelationshipBrowser`], never against a concrete
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Research {
    parent: String,
    children: Vec<String>,
}

impl Research {
    /// Looks up the children of `name` through `browser`.
    pub fn new<B>(browser: &B, name: &str) -> Self
    where
        B: RelationshipBrowser + ?Sized,
    {
        let children: Vec<String> = browser
            .find_all_children_of(name)
            .into_iter()
            .map(|child| child.name().to_owned())
            .collect();

        tracing::debug!(parent = name, children = children.len(), "researched children");

        Self {
            parent: name.to_owned(),
            children,
        }
    }

    /// Returns the name of the researched person.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Returns the names of the researched person's children.
    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }
}
