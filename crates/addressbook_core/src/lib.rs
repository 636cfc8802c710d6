//! Core domain logic for the address book.
//! This crate owns every contact invariant: field validation, record
//! uniqueness and the command execution protocol.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::{
    AddCommand, Command, CommandError, CommandResult, DeleteCommand, EditCommand, FindCommand,
    ViewCommand,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::field::{Address, Email, FieldKind, FieldValueError, Name, Phone};
pub use model::person::{Person, PersonId};
pub use model::tag::{Tag, TagError, TagSet};
pub use repo::address_book::{AddressBook, AddressBookError};
pub use repo::snapshot::{DisplaySnapshot, SnapshotEntry};
pub use repo::store::{AddressBookStore, SqliteAddressBookStore, StoreError, StoreResult};
pub use service::address_book_service::AddressBookService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
