//! `find KEYWORDS`: lists persons whose name contains any keyword.

use super::{messages, CommandResult};
use crate::repo::address_book::AddressBook;
use std::collections::BTreeSet;

pub const COMMAND_WORD: &str = "find";

/// Keyword search over name words. Matching is whole-word and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindCommand {
    pub keywords: BTreeSet<String>,
}

impl FindCommand {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub(super) fn execute(&self, book: &AddressBook) -> CommandResult {
        let found = book.snapshot_where(|person| {
            person
                .name()
                .words()
                .any(|word| self.keywords.contains(word))
        });
        CommandResult::listing(messages::persons_listed(found.len()), found)
    }
}
