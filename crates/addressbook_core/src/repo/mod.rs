//! Person collection, display snapshots and persistence.
//!
//! # Responsibility
//! - Own the authoritative in-memory person collection.
//! - Capture point-in-time listings for index-based commands.
//! - Isolate SQLite details behind the `AddressBookStore` contract.
//!
//! # Invariants
//! - The collection never holds two equal persons.
//! - Storage round-trips preserve member order.

pub mod address_book;
pub mod snapshot;
pub mod store;
