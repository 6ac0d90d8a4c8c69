use super::Tag;
use std::collections::VecDeque;

/// A notification about a single mutation of a
/// collection. The index is the position of the tag
/// at the time of the mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Add { index: usize, tag: Tag },
    Remove { index: usize, tag: Tag },
    Update { index: usize, tag: Tag },
}

/// An ordered list of Tags. Insertion order is display order.
///
/// Uniqueness of names is NOT enforced here, callers
/// check with `find_by_name` before inserting. Every
/// mutation queues a `Change` which observers drain to
/// keep their own state index-aligned with ours.
#[derive(Debug, Default)]
pub struct Tags {
    tags: Vec<Tag>,
    changes: VecDeque<Change>,
}

impl Tags {

    pub fn new() -> Self {
        Self { tags: Vec::new(), changes: VecDeque::new() }
    }

    /// Build a collection from initial names. This is the
    /// starting state, so no changes are queued. Repeated
    /// names keep their first occurrence.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item=&'a str>
    {
        let mut tags: Vec<Tag> = Vec::new();
        for name in names {
            if tags.iter().any(|t| t.is_named(name)) {
                warn!("duplicate tag: '{}'", name);
            } else {
                tags.push(Tag::new(name));
            }
        }
        Self { tags, changes: VecDeque::new() }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item=&'a Tag> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    /// Return the names in display order
    pub fn names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.as_str()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.tags.iter().position(|t| t.is_named(name))
    }

    /// Linear search by name
    pub fn find_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.is_named(name))
    }

    /// Insert a tag at the given index, or append it.
    /// Out of range indices append as well.
    /// Returns the index the tag landed at.
    pub fn add(&mut self, tag: Tag, at: Option<usize>) -> usize {
        let index = at.map(|i| i.min(self.tags.len())).unwrap_or(self.tags.len());
        self.tags.insert(index, tag.clone());
        self.changes.push_back(Change::Add { index, tag });
        index
    }

    /// Append a tag
    pub fn push(&mut self, tag: Tag) -> usize {
        self.add(tag, None)
    }

    /// Remove the first tag with the given name
    pub fn remove(&mut self, name: &str) -> Option<(usize, Tag)> {
        let index = self.position(name)?;
        self.remove_at(index).map(|tag| (index, tag))
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Tag> {
        if index >= self.tags.len() {
            return None
        }
        let tag = self.tags.remove(index);
        self.changes.push_back(Change::Remove { index, tag: tag.clone() });
        Some(tag)
    }

    /// Remove and return the last tag
    pub fn pop(&mut self) -> Option<Tag> {
        match self.tags.len() {
            0 => None,
            n => self.remove_at(n - 1),
        }
    }

    /// Rename a tag in place, keeping its position.
    /// Returns false if there is no such tag.
    pub fn rename(&mut self, name: &str, new_name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                let tag = Tag::new(new_name);
                self.tags[index] = tag.clone();
                self.changes.push_back(Change::Update { index, tag });
                true
            },
            None => false,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Take all queued changes, oldest first
    pub fn drain_changes(&mut self) -> Vec<Change> {
        self.changes.drain(..).collect()
    }
}

#[cfg(test)]
mod suite {
    use super::*;

    fn tags(names: &[&str]) -> Tags {
        Tags::from_names(names.iter().cloned())
    }

    #[test]
    fn check_from_names_keeps_first() {
        let t = tags(&["a", "b", "a"]);
        assert_eq!(t.names(), vec!["a", "b"]);
        assert!(!t.has_changes());
    }

    #[test]
    fn check_push_and_pop() {
        let mut t = Tags::new();
        assert_eq!(t.push(Tag::new("a")), 0);
        assert_eq!(t.push(Tag::new("b")), 1);
        assert_eq!(t.pop(), Some(Tag::new("b")));
        assert_eq!(t.names(), vec!["a"]);
        assert_eq!(t.drain_changes(), vec![
            Change::Add { index: 0, tag: Tag::new("a") },
            Change::Add { index: 1, tag: Tag::new("b") },
            Change::Remove { index: 1, tag: Tag::new("b") },
        ]);
        assert!(!t.has_changes());
    }

    #[test]
    fn check_pop_empty() {
        let mut t = Tags::new();
        assert_eq!(t.pop(), None);
        assert!(!t.has_changes());
    }

    #[test]
    fn check_add_at() {
        let mut t = tags(&["a", "c"]);
        assert_eq!(t.add(Tag::new("b"), Some(1)), 1);
        assert_eq!(t.add(Tag::new("d"), Some(99)), 3);
        assert_eq!(t.names(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn check_remove_by_name() {
        let mut t = tags(&["x", "y", "z"]);
        assert_eq!(t.remove("y"), Some((1, Tag::new("y"))));
        assert_eq!(t.remove("y"), None);
        assert_eq!(t.names(), vec!["x", "z"]);
        assert_eq!(t.drain_changes(), vec![Change::Remove { index: 1, tag: Tag::new("y") }]);
    }

    #[test]
    fn check_find_by_name() {
        let t = tags(&["red", "blue"]);
        assert_eq!(t.find_by_name("blue"), Some(&Tag::new("blue")));
        assert_eq!(t.find_by_name("Blue"), None);
        assert_eq!(t.position("red"), Some(0));
    }

    #[test]
    fn check_rename() {
        let mut t = tags(&["a", "b"]);
        assert!(t.rename("a", "c"));
        assert!(!t.rename("a", "d"));
        assert_eq!(t.names(), vec!["c", "b"]);
        assert_eq!(t.drain_changes(), vec![Change::Update { index: 0, tag: Tag::new("c") }]);
    }
}
