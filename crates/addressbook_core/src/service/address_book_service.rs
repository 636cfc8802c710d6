//! Address book session service.
//!
//! # Responsibility
//! - Own the live `AddressBook` and the snapshot shown by the last listing.
//! - Execute commands one at a time and save after successful mutations.
//!
//! # Invariants
//! - `execute` takes `&mut self`, so commands never interleave.
//! - The last snapshot is replaced only by results that carry a listing.
//! - A failed save is reported as an unsuccessful result; the in-memory
//!   book keeps the change.

use crate::command::{Command, CommandResult};
use crate::repo::address_book::AddressBook;
use crate::repo::snapshot::DisplaySnapshot;
use crate::repo::store::{AddressBookStore, StoreResult};
use log::{error, info};
use std::time::Instant;

/// Single-writer session over one address book and its store.
pub struct AddressBookService<S: AddressBookStore> {
    store: S,
    book: AddressBook,
    last_shown: DisplaySnapshot,
}

impl<S: AddressBookStore> AddressBookService<S> {
    /// Loads the book from `store` and starts with nothing listed.
    pub fn open(store: S) -> StoreResult<Self> {
        let book = store.load()?;
        info!(
            "event=session_open module=service status=ok persons={}",
            book.len()
        );
        Ok(Self {
            store,
            book,
            last_shown: DisplaySnapshot::empty(),
        })
    }

    /// Executes one command and records its effects.
    pub fn execute(&mut self, command: &Command) -> CommandResult {
        let started_at = Instant::now();
        let mut result = command.execute(&mut self.book, &self.last_shown);

        if let Some(listed) = &result.listed {
            self.last_shown = listed.clone();
        }

        if result.success && command.mutates() {
            if let Err(err) = self.store.save(&self.book) {
                error!(
                    "event=command_execute module=service status=error command={} error_code=save_failed error={}",
                    command.word(),
                    err
                );
                result = CommandResult::failure(format!(
                    "{}\nFailed to save address book: {err}",
                    result.message
                ));
            }
        }

        info!(
            "event=command_execute module=service status={} command={} duration_ms={}",
            if result.success { "ok" } else { "rejected" },
            command.word(),
            started_at.elapsed().as_millis()
        );
        result
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    /// Snapshot that visible indices currently refer to.
    pub fn last_shown(&self) -> &DisplaySnapshot {
        &self.last_shown
    }
}
