//! Uniqueness-enforcing in-memory person collection.
//!
//! # Responsibility
//! - Own every person record and its stable `PersonId`.
//! - Keep insertion order for listing and persistence.
//! - Route every mutation of a stored record through a re-validating path.
//!
//! # Invariants
//! - No two members are equal (full-field equality).
//! - `update` commits only if the edited record stays unique; otherwise the
//!   stored record is left exactly as it was.

use crate::model::person::{Person, PersonId};
use crate::repo::snapshot::{DisplaySnapshot, SnapshotEntry};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Collection-level membership errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressBookError {
    DuplicatePerson,
    PersonNotFound,
}

impl Display for AddressBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => write!(f, "This person already exists in the address book"),
            Self::PersonNotFound => write!(f, "Person could not be found in address book"),
        }
    }
}

impl Error for AddressBookError {}

#[derive(Debug, Clone)]
struct Member {
    id: PersonId,
    person: Person,
}

/// Ordered, duplicate-free person collection.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    members: Vec<Member>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a book from persons in order, rejecting repeats.
    pub fn from_persons(
        persons: impl IntoIterator<Item = Person>,
    ) -> Result<Self, AddressBookError> {
        let mut book = Self::new();
        for person in persons {
            book.add(person)?;
        }
        Ok(book)
    }

    /// Appends `person` and returns its newly assigned id.
    pub fn add(&mut self, person: Person) -> Result<PersonId, AddressBookError> {
        if self.contains(&person) {
            return Err(AddressBookError::DuplicatePerson);
        }
        let id = Uuid::new_v4();
        self.members.push(Member { id, person });
        Ok(id)
    }

    /// Removes the member equal to `person`.
    pub fn remove(&mut self, person: &Person) -> Result<Person, AddressBookError> {
        let position = self
            .members
            .iter()
            .position(|member| &member.person == person)
            .ok_or(AddressBookError::PersonNotFound)?;
        Ok(self.members.remove(position).person)
    }

    /// Removes the member with stable id `id`.
    pub fn remove_by_id(&mut self, id: PersonId) -> Result<Person, AddressBookError> {
        let position = self
            .position_of(id)
            .ok_or(AddressBookError::PersonNotFound)?;
        Ok(self.members.remove(position).person)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.members.iter().any(|member| &member.person == person)
    }

    pub fn contains_id(&self, id: PersonId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the id of the member equal to `person`.
    pub fn id_of(&self, person: &Person) -> Option<PersonId> {
        self.members
            .iter()
            .find(|member| &member.person == person)
            .map(|member| member.id)
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.position_of(id).map(|position| &self.members[position].person)
    }

    /// Returns copies of all members in insertion order.
    pub fn all(&self) -> Vec<Person> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.members.iter().map(|member| &member.person)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Applies `mutation` to member `id` and re-checks uniqueness.
    ///
    /// The mutation runs on a working copy. The stored record is replaced only
    /// when the mutation succeeds and the result equals no other member; in
    /// every other case the stored record is unchanged.
    ///
    /// # Errors
    /// - `PersonNotFound` (converted into `E`) when `id` is not a member.
    /// - Whatever `mutation` returns.
    /// - `DuplicatePerson` (converted into `E`) when the edit would collide.
    pub fn update<F, E>(&mut self, id: PersonId, mutation: F) -> Result<&Person, E>
    where
        F: FnOnce(&mut Person) -> Result<(), E>,
        E: From<AddressBookError>,
    {
        let position = self
            .position_of(id)
            .ok_or(AddressBookError::PersonNotFound)?;

        let mut working = self.members[position].person.clone();
        mutation(&mut working)?;

        let collides = self
            .members
            .iter()
            .enumerate()
            .any(|(index, member)| index != position && member.person == working);
        if collides {
            return Err(AddressBookError::DuplicatePerson.into());
        }

        self.members[position].person = working;
        Ok(&self.members[position].person)
    }

    /// Captures every member, in order, as a display snapshot.
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.snapshot_where(|_| true)
    }

    /// Captures the members accepted by `predicate`, in order.
    pub fn snapshot_where(&self, predicate: impl Fn(&Person) -> bool) -> DisplaySnapshot {
        self.members
            .iter()
            .filter(|member| predicate(&member.person))
            .map(|member| SnapshotEntry::new(member.id, member.person.clone()))
            .collect()
    }

    fn position_of(&self, id: PersonId) -> Option<usize> {
        self.members.iter().position(|member| member.id == id)
    }
}

/// Two books are equal when they hold equal persons in the same order.
/// Member ids are bookkeeping and do not take part.
impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for AddressBook {}
