//! Display snapshot: the index space of targeted commands.
//!
//! # Invariants
//! - Visible indices are 1-based positions in capture order.
//! - Entries are copies taken at capture time; the entry id is what commands
//!   resolve against the live book, so a snapshot can go stale but can never
//!   expose or alter a live record.

use crate::model::person::{Person, PersonId};

/// Offset between a visible index and its position in the snapshot.
pub const DISPLAYED_INDEX_OFFSET: i64 = 1;

/// One listed person with the stable id it had when listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    id: PersonId,
    person: Person,
}

impl SnapshotEntry {
    pub fn new(id: PersonId, person: Person) -> Self {
        Self { id, person }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

/// Ordered, read-only view of persons shown by the last listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySnapshot {
    entries: Vec<SnapshotEntry>,
}

impl DisplaySnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the entry shown at `visible_index`, or `None` when the index
    /// falls outside `1..=len`.
    pub fn resolve(&self, visible_index: i64) -> Option<&SnapshotEntry> {
        let offset = visible_index.checked_sub(DISPLAYED_INDEX_OFFSET)?;
        let offset = usize::try_from(offset).ok()?;
        self.entries.get(offset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.entries.iter().map(SnapshotEntry::person)
    }
}

impl FromIterator<SnapshotEntry> for DisplaySnapshot {
    fn from_iter<I: IntoIterator<Item = SnapshotEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplaySnapshot, SnapshotEntry};
    use crate::model::field::{Address, Email, Name, Phone};
    use crate::model::person::Person;
    use crate::model::tag::TagSet;
    use uuid::Uuid;

    fn entry(name: &str) -> SnapshotEntry {
        let person = Person::new(
            Name::new(name, false).unwrap(),
            Phone::new("123", false).unwrap(),
            Email::new("a@b.c", false).unwrap(),
            Address::new("somewhere", false).unwrap(),
            TagSet::new(),
        );
        SnapshotEntry::new(Uuid::new_v4(), person)
    }

    #[test]
    fn resolve_uses_one_based_positions() {
        let snapshot: DisplaySnapshot = vec![entry("Amy"), entry("Bob")].into_iter().collect();

        assert_eq!(
            snapshot.resolve(1).unwrap().person().name().value(),
            "Amy"
        );
        assert_eq!(
            snapshot.resolve(2).unwrap().person().name().value(),
            "Bob"
        );
    }

    #[test]
    fn resolve_rejects_out_of_range_indices() {
        let snapshot: DisplaySnapshot = vec![entry("Amy")].into_iter().collect();

        assert!(snapshot.resolve(0).is_none());
        assert!(snapshot.resolve(-1).is_none());
        assert!(snapshot.resolve(2).is_none());
        assert!(snapshot.resolve(i64::MIN).is_none());
        assert!(DisplaySnapshot::empty().resolve(1).is_none());
    }
}
