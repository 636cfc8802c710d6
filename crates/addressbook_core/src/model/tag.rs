//! Tag labels and the per-person tag set.
//!
//! # Invariants
//! - A `Tag` is a non-empty ASCII alphanumeric label.
//! - A `TagSet` never holds the same tag twice; building one from input that
//!   repeats a tag fails instead of silently collapsing it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Tag construction and tag-set errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    Invalid(String),
    Duplicate(String),
}

impl Display for TagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(_) => write!(f, "Tag names should be alphanumeric"),
            Self::Duplicate(value) => write!(f, "Duplicate tag: {value}"),
        }
    }
}

impl Error for TagError {}

/// Validated tag label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self, TagError> {
        let trimmed = raw.trim();
        if !TAG_RE.is_match(trimmed) {
            return Err(TagError::Invalid(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// Duplicate-free set of tags attached to one person.
///
/// Iteration order is sorted by tag text, so rendering and persistence are
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `tags`, rejecting input that repeats a tag.
    pub fn try_from_tags(tags: impl IntoIterator<Item = Tag>) -> Result<Self, TagError> {
        let mut set = Self::new();
        for tag in tags {
            set.add(tag)?;
        }
        Ok(set)
    }

    /// Validates raw labels and builds a set from them.
    pub fn parse<S: AsRef<str>>(raw_tags: &[S]) -> Result<Self, TagError> {
        let tags = raw_tags
            .iter()
            .map(|raw| Tag::new(raw.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from_tags(tags)
    }

    /// Adds one tag. Fails when the tag is already present.
    pub fn add(&mut self, tag: Tag) -> Result<(), TagError> {
        if self.tags.contains(&tag) {
            return Err(TagError::Duplicate(tag.0));
        }
        self.tags.insert(tag);
        Ok(())
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }
}

impl Display for TagSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Tag>> for TagSet {
    type Error = TagError;

    fn try_from(tags: Vec<Tag>) -> Result<Self, Self::Error> {
        Self::try_from_tags(tags)
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.tags.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TagError, TagSet};

    #[test]
    fn tag_rejects_non_alphanumeric_labels() {
        assert!(Tag::new("friends").is_ok());
        assert_eq!(
            Tag::new("best friend").unwrap_err(),
            TagError::Invalid("best friend".to_string())
        );
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn tag_set_rejects_repeated_input() {
        let err = TagSet::parse(&["work", "gym", "work"]).expect_err("repeat must fail");
        assert_eq!(err, TagError::Duplicate("work".to_string()));
    }

    #[test]
    fn tag_set_renders_sorted_bracketed_labels() {
        let set = TagSet::parse(&["work", "family"]).expect("tags should be valid");
        assert_eq!(set.to_string(), "[family][work]");
        assert_eq!(set.len(), 2);
    }
}
