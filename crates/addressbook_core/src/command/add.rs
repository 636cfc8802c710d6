//! `add`: builds a person from raw input and appends it.

use super::{messages, CommandError, CommandResult};
use crate::model::field::{Address, Email, Name, Phone};
use crate::model::person::Person;
use crate::model::tag::TagSet;
use crate::repo::address_book::AddressBook;

pub const COMMAND_WORD: &str = "add";

/// Raw add-command arguments. Field rules are applied at execution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCommand {
    pub name: String,
    pub phone: String,
    pub phone_private: bool,
    pub email: String,
    pub email_private: bool,
    pub address: String,
    pub address_private: bool,
    pub tags: Vec<String>,
}

impl AddCommand {
    /// Validates every argument and assembles the person to add.
    pub fn to_person(&self) -> Result<Person, CommandError> {
        Ok(Person::new(
            Name::new(&self.name, false)?,
            Phone::new(&self.phone, self.phone_private)?,
            Email::new(&self.email, self.email_private)?,
            Address::new(&self.address, self.address_private)?,
            TagSet::parse(self.tags.as_slice())?,
        ))
    }

    pub(super) fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        let person = self.to_person()?;
        let message = messages::person_added(&person);
        book.add(person)?;
        Ok(CommandResult::success(message))
    }
}
