//! `edit INDEX FIELD VALUE`: replaces one field of a listed person.
//!
//! # Invariants
//! - Checks run in order: index bounds, snapshot staleness, field selector,
//!   field validation, uniqueness. The first failure is reported and the
//!   record is left exactly as it was.
//! - A successful edit changes exactly the selected field; privacy flags
//!   and tags are kept.

use super::{messages, resolve_target, CommandError, CommandResult};
use crate::model::field::FieldKind;
use crate::repo::address_book::AddressBook;
use crate::repo::snapshot::DisplaySnapshot;

pub const COMMAND_WORD: &str = "edit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub target_index: i64,
    /// Raw field selector, validated at execution time.
    pub field: String,
    pub new_value: String,
}

impl EditCommand {
    pub fn new(target_index: i64, field: impl Into<String>, new_value: impl Into<String>) -> Self {
        Self {
            target_index,
            field: field.into(),
            new_value: new_value.into(),
        }
    }

    pub(super) fn execute(
        &self,
        book: &mut AddressBook,
        last_shown: &DisplaySnapshot,
    ) -> Result<CommandResult, CommandError> {
        let id = resolve_target(book, last_shown, self.target_index)?;
        let field = FieldKind::parse(&self.field)
            .ok_or_else(|| CommandError::InvalidEditField(self.field.clone()))?;

        let edited = book.update(id, |person| {
            person
                .set_field(field, &self.new_value)
                .map_err(CommandError::from)
        })?;
        Ok(CommandResult::success(messages::person_edited(edited)))
    }
}
