//! `delete INDEX`: removes the person at a visible index.

use super::{messages, resolve_target, CommandError, CommandResult};
use crate::repo::address_book::AddressBook;
use crate::repo::snapshot::DisplaySnapshot;

pub const COMMAND_WORD: &str = "delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    pub target_index: i64,
}

impl DeleteCommand {
    pub fn new(target_index: i64) -> Self {
        Self { target_index }
    }

    pub(super) fn execute(
        &self,
        book: &mut AddressBook,
        last_shown: &DisplaySnapshot,
    ) -> Result<CommandResult, CommandError> {
        let id = resolve_target(book, last_shown, self.target_index)?;
        let removed = book.remove_by_id(id)?;
        Ok(CommandResult::success(messages::person_deleted(&removed)))
    }
}
