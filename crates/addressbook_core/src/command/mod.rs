//! Command execution protocol.
//!
//! # Responsibility
//! - Model every user command as a value bound to an address book and the
//!   last display snapshot only at execution time.
//! - Resolve visible indices to live records and apply one operation.
//! - Turn every outcome, including every failure, into a `CommandResult`.
//!
//! # Invariants
//! - Targeted commands check, in order: index bounds, then snapshot
//!   staleness, then command-specific arguments. The first failure wins and
//!   nothing is mutated.
//! - No error escapes `Command::execute`.

use crate::model::field::FieldValueError;
use crate::model::person::PersonId;
use crate::model::tag::TagError;
use crate::repo::address_book::{AddressBook, AddressBookError};
use crate::repo::snapshot::DisplaySnapshot;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod messages;
pub mod view;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use find::FindCommand;
pub use view::ViewCommand;

/// Recoverable command failure, rendered verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Visible index outside the last snapshot.
    InvalidDisplayedIndex(i64),
    /// Snapshot entry no longer present in the address book.
    PersonNotInAddressBook,
    /// Edit selector is not a known field.
    InvalidEditField(String),
    InvalidFieldValue(FieldValueError),
    InvalidTag(TagError),
    DuplicatePerson,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDisplayedIndex(_) => {
                f.write_str(messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX)
            }
            Self::PersonNotInAddressBook => {
                f.write_str(messages::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK)
            }
            Self::InvalidEditField(_) => f.write_str(messages::MESSAGE_EDIT_FIELD_INVALID),
            Self::InvalidFieldValue(err) => write!(f, "{err}"),
            Self::InvalidTag(err) => write!(f, "{err}"),
            Self::DuplicatePerson => f.write_str(messages::MESSAGE_DUPLICATE_PERSON),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFieldValue(err) => Some(err),
            Self::InvalidTag(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AddressBookError> for CommandError {
    fn from(value: AddressBookError) -> Self {
        match value {
            AddressBookError::DuplicatePerson => Self::DuplicatePerson,
            AddressBookError::PersonNotFound => Self::PersonNotInAddressBook,
        }
    }
}

impl From<FieldValueError> for CommandError {
    fn from(value: FieldValueError) -> Self {
        Self::InvalidFieldValue(value)
    }
}

impl From<TagError> for CommandError {
    fn from(value: TagError) -> Self {
        Self::InvalidTag(value)
    }
}

/// Outcome of one command, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Feedback text shown to the user.
    pub message: String,
    pub success: bool,
    /// New display snapshot, set only by listing commands.
    pub listed: Option<DisplaySnapshot>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            listed: None,
        }
    }

    pub fn listing(message: impl Into<String>, listed: DisplaySnapshot) -> Self {
        Self {
            message: message.into(),
            success: true,
            listed: Some(listed),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            listed: None,
        }
    }
}

impl From<CommandError> for CommandResult {
    fn from(err: CommandError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Fully-formed user command produced by a parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Find(FindCommand),
    List,
    Clear,
    View(ViewCommand),
}

impl Command {
    /// Command word used in logs and usage text.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => add::COMMAND_WORD,
            Self::Delete(_) => delete::COMMAND_WORD,
            Self::Edit(_) => edit::COMMAND_WORD,
            Self::Find(_) => find::COMMAND_WORD,
            Self::List => list::COMMAND_WORD,
            Self::Clear => clear::COMMAND_WORD,
            Self::View(command) => command.word(),
        }
    }

    /// Returns whether a successful run changes the address book.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Delete(_) | Self::Edit(_) | Self::Clear
        )
    }

    /// Runs the command against `book`, targeting indices in `last_shown`.
    pub fn execute(&self, book: &mut AddressBook, last_shown: &DisplaySnapshot) -> CommandResult {
        let outcome = match self {
            Self::Add(command) => command.execute(book),
            Self::Delete(command) => command.execute(book, last_shown),
            Self::Edit(command) => command.execute(book, last_shown),
            Self::Find(command) => Ok(command.execute(book)),
            Self::List => Ok(list::execute(book)),
            Self::Clear => Ok(clear::execute(book)),
            Self::View(command) => command.execute(book, last_shown),
        };

        outcome.unwrap_or_else(|err| {
            debug!(
                "event=command_rejected module=command command={} reason={}",
                self.word(),
                error_code(&err)
            );
            err.into()
        })
    }
}

/// Resolves `visible_index` in `last_shown` to the id of a live member.
///
/// Stops at the first failing check: out-of-range index, then a snapshot
/// entry whose person is no longer in the book. An entry is located by id
/// first and by record equality when its id is unknown to `book`.
pub(crate) fn resolve_target(
    book: &AddressBook,
    last_shown: &DisplaySnapshot,
    visible_index: i64,
) -> Result<PersonId, CommandError> {
    let entry = last_shown
        .resolve(visible_index)
        .ok_or(CommandError::InvalidDisplayedIndex(visible_index))?;
    if book.contains_id(entry.id()) {
        return Ok(entry.id());
    }
    // Snapshot captured under other ids: fall back to record equality.
    book.id_of(entry.person()).ok_or(CommandError::PersonNotInAddressBook)
}

fn error_code(err: &CommandError) -> &'static str {
    match err {
        CommandError::InvalidDisplayedIndex(_) => "invalid_displayed_index",
        CommandError::PersonNotInAddressBook => "person_not_in_address_book",
        CommandError::InvalidEditField(_) => "invalid_edit_field",
        CommandError::InvalidFieldValue(_) => "invalid_field_value",
        CommandError::InvalidTag(_) => "invalid_tag",
        CommandError::DuplicatePerson => "duplicate_person",
    }
}
