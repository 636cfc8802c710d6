//! `view INDEX` / `viewall INDEX`: shows one listed person.

use super::{messages, resolve_target, CommandError, CommandResult};
use crate::repo::address_book::AddressBook;
use crate::repo::snapshot::DisplaySnapshot;

pub const COMMAND_WORD: &str = "view";
pub const COMMAND_WORD_ALL: &str = "viewall";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCommand {
    pub target_index: i64,
    /// `viewall` reveals private fields; `view` hides them.
    pub show_private: bool,
}

impl ViewCommand {
    pub fn new(target_index: i64, show_private: bool) -> Self {
        Self {
            target_index,
            show_private,
        }
    }

    pub fn word(&self) -> &'static str {
        if self.show_private {
            COMMAND_WORD_ALL
        } else {
            COMMAND_WORD
        }
    }

    pub(super) fn execute(
        &self,
        book: &AddressBook,
        last_shown: &DisplaySnapshot,
    ) -> Result<CommandResult, CommandError> {
        let id = resolve_target(book, last_shown, self.target_index)?;
        let person = book.get(id).ok_or(CommandError::PersonNotInAddressBook)?;
        let text = if self.show_private {
            person.to_string()
        } else {
            person.as_text_hide_private()
        };
        Ok(CommandResult::success(messages::person_viewed(&text)))
    }
}
