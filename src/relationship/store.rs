use super::{Person, Relationship, RelationshipBrowser};

/// In-memory store of `(person, relationship, person)` triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            relations: Vec::new(),
        }
    }

    /// Records that `parent` is a parent of `child`, and the inverse.
    pub fn add_parent_and_child(&mut self, parent: Person, child: Person) {
        tracing::trace!(parent = parent.name(), child = child.name(), "recording parent and child");

        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child, Relationship::Parent.inverse(), parent));
    }

    /// Returns every recorded triple, oldest first.
    #[must_use]
    pub fn relations(&self) -> &[(Person, Relationship, Person)] {
        &self.relations
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|(first, relationship, _)| {
                first.name() == name && *relationship == Relationship::Parent
            })
            .map(|(_, _, second)| second)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn family() -> Relationships {
        let mut relationships = Relationships::new();
        relationships.add_parent_and_child(Person::new("John"), Person::new("Chris"));
        relationships.add_parent_and_child(Person::new("John"), Person::new("Matt"));
        relationships.add_parent_and_child(Person::new("Greg"), Person::new("Dominic"));
        relationships
    }

    #[rstest]
    fn add_records_both_directions() {
        let mut relationships = Relationships::new();
        relationships.add_parent_and_child(Person::new("John"), Person::new("Chris"));

        assert_eq!(
            relationships.relations(),
            [
                (Person::new("John"), Relationship::Parent, Person::new("Chris")),
                (Person::new("Chris"), Relationship::Child, Person::new("John")),
            ]
        );
    }

    #[rstest]
    #[case("John", vec!["Chris", "Matt"])]
    #[case("Greg", vec!["Dominic"])]
    #[case("Chris", vec![])]
    #[case("Nobody", vec![])]
    fn finds_children_in_insertion_order(
        family: Relationships,
        #[case] name: &str,
        #[case] expected: Vec<&str>,
    ) {
        let children: Vec<&str> = family
            .find_all_children_of(name)
            .into_iter()
            .map(Person::name)
            .collect();

        assert_eq!(children, expected);
    }
}
