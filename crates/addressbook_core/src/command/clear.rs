//! `clear`: removes every person.

use super::{messages, CommandResult};
use crate::repo::address_book::AddressBook;

pub const COMMAND_WORD: &str = "clear";

pub(super) fn execute(book: &mut AddressBook) -> CommandResult {
    book.clear();
    CommandResult::success(messages::MESSAGE_ADDRESS_BOOK_CLEARED)
}
