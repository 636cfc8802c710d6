//! SQLite connection bootstrap and schema migrations.
//!
//! # Responsibility
//! - Open file-backed or in-memory SQLite connections for address book storage.
//! - Bring the schema up to date before any person row is read or written.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - A database written by a newer binary is refused with
//!   `StoreError::SchemaTooNew`, never downgraded.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
