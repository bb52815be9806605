use super::Person;

/// Read access to family relationships.
///
/// High-level code depends on this trait instead of on a particular
/// storage layout.
pub trait RelationshipBrowser {
    /// Returns every child of the person called `name`, in the order the
    /// relationships were recorded.
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;
}
