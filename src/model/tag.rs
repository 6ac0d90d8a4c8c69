use internship::IStr;

/// A tag is just a name. Editors tend to hold the same
/// handful of names over and over (every chip, every
/// change notification), so the strings are interned.
#[derive(Hash, Eq, PartialEq, Clone)]
pub struct Tag (IStr);

impl Tag {

    /// Create a new Tag
    pub fn new(name: &str) -> Self {
        Self(IStr::new(name))
    }

    /// Return the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tags are duplicates when their names match exactly
    pub fn is_named(&self, name: &str) -> bool {
        self.as_str() == name
    }
}

use std::borrow::Borrow;
impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

use core::fmt::{Debug, Display, Formatter, Error as FmtError};
impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "Tag[{:?}]", self.as_str())
    }
}

impl serde::Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
