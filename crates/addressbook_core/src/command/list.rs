//! `list`: shows every person in insertion order.

use super::{messages, CommandResult};
use crate::repo::address_book::AddressBook;

pub const COMMAND_WORD: &str = "list";

pub(super) fn execute(book: &AddressBook) -> CommandResult {
    let listed = book.snapshot();
    CommandResult::listing(messages::persons_listed(listed.len()), listed)
}
