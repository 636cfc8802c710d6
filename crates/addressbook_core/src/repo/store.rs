//! Address book persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Load the full member list into an `AddressBook` and save it back.
//! - Keep SQL details behind the `AddressBookStore` trait.
//!
//! # Invariants
//! - `save` replaces every stored row in a single transaction.
//! - `load` re-validates persisted values and rejects invalid data instead
//!   of masking it.

use crate::model::field::{Address, Email, FieldValueError, Name, Phone};
use crate::model::person::Person;
use crate::model::tag::{Tag, TagError, TagSet};
use crate::repo::address_book::{AddressBook, AddressBookError};
use log::info;
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for opening, loading and saving address books.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The database was migrated by a newer build than this one.
    SchemaTooNew { found: u32, supported: u32 },
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "address book storage failed: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "address book schema version {found} is newer than supported {supported}"
            ),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted address book data: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Storage backend for the whole person collection.
pub trait AddressBookStore {
    /// Loads every stored person in saved order.
    fn load(&self) -> StoreResult<AddressBook>;
    /// Replaces stored content with `book`.
    fn save(&mut self, book: &AddressBook) -> StoreResult<()>;
}

/// SQLite-backed address book store.
pub struct SqliteAddressBookStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteAddressBookStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl AddressBookStore for SqliteAddressBookStore<'_> {
    fn load(&self) -> StoreResult<AddressBook> {
        let started_at = Instant::now();
        let mut tags_by_position = load_tags(self.conn)?;

        let mut stmt = self.conn.prepare(
            "SELECT
                position,
                name, name_private,
                phone, phone_private,
                email, email_private,
                address, address_private
             FROM persons
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();
        while let Some(row) = rows.next()? {
            let position: i64 = row.get("position")?;
            let tags = tags_by_position.remove(&position).unwrap_or_default();
            persons.push(parse_person_row(row, tags)?);
        }

        if let Some(position) = tags_by_position.keys().next() {
            return Err(StoreError::InvalidData(format!(
                "tags reference missing person position {position}"
            )));
        }

        let book = AddressBook::from_persons(persons).map_err(invalid_membership)?;

        info!(
            "event=store_load module=repo status=ok persons={} duration_ms={}",
            book.len(),
            started_at.elapsed().as_millis()
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> StoreResult<()> {
        let started_at = Instant::now();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute("DELETE FROM person_tags;", [])?;
        tx.execute("DELETE FROM persons;", [])?;

        {
            let mut insert_person = tx.prepare(
                "INSERT INTO persons (
                    position,
                    name, name_private,
                    phone, phone_private,
                    email, email_private,
                    address, address_private
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            )?;
            let mut insert_tag =
                tx.prepare("INSERT INTO person_tags (person_position, tag) VALUES (?1, ?2);")?;

            for (position, person) in (0_i64..).zip(book.iter()) {
                insert_person.execute(params![
                    position,
                    person.name().value(),
                    bool_to_int(person.name().is_private()),
                    person.phone().value(),
                    bool_to_int(person.phone().is_private()),
                    person.email().value(),
                    bool_to_int(person.email().is_private()),
                    person.address().value(),
                    bool_to_int(person.address().is_private()),
                ])?;
                for tag in person.tags().iter() {
                    insert_tag.execute(params![position, tag.as_str()])?;
                }
            }
        }

        tx.commit()?;
        info!(
            "event=store_save module=repo status=ok persons={} duration_ms={}",
            book.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

fn load_tags(conn: &Connection) -> StoreResult<BTreeMap<i64, TagSet>> {
    let mut stmt = conn.prepare(
        "SELECT person_position, tag
         FROM person_tags
         ORDER BY person_position ASC, tag ASC;",
    )?;
    let mut rows = stmt.query([])?;
    let mut tags: BTreeMap<i64, TagSet> = BTreeMap::new();
    while let Some(row) = rows.next()? {
        let position: i64 = row.get("person_position")?;
        let raw: String = row.get("tag")?;
        let tag = Tag::new(&raw).map_err(|err| invalid_tag(&raw, err))?;
        tags.entry(position)
            .or_default()
            .add(tag)
            .map_err(|err| invalid_tag(&raw, err))?;
    }
    Ok(tags)
}

fn parse_person_row(row: &Row<'_>, tags: TagSet) -> StoreResult<Person> {
    let name = Name::new(
        &row.get::<_, String>("name")?,
        parse_flag(row, "name_private")?,
    )
    .map_err(invalid_field)?;
    let phone = Phone::new(
        &row.get::<_, String>("phone")?,
        parse_flag(row, "phone_private")?,
    )
    .map_err(invalid_field)?;
    let email = Email::new(
        &row.get::<_, String>("email")?,
        parse_flag(row, "email_private")?,
    )
    .map_err(invalid_field)?;
    let address = Address::new(
        &row.get::<_, String>("address")?,
        parse_flag(row, "address_private")?,
    )
    .map_err(invalid_field)?;

    Ok(Person::new(name, phone, email, address, tags))
}

fn parse_flag(row: &Row<'_>, column: &str) -> StoreResult<bool> {
    match row.get::<_, i64>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(StoreError::InvalidData(format!(
            "invalid flag value `{other}` in persons.{column}"
        ))),
    }
}

fn invalid_field(err: FieldValueError) -> StoreError {
    StoreError::InvalidData(format!(
        "invalid {} value `{}` in persons.{}",
        err.field, err.value, err.field
    ))
}

fn invalid_membership(err: AddressBookError) -> StoreError {
    StoreError::InvalidData(format!("persons table violates uniqueness: {err}"))
}

fn invalid_tag(raw: &str, err: TagError) -> StoreError {
    StoreError::InvalidData(format!("tag `{raw}` rejected: {err}"))
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
