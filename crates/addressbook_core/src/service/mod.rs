//! Session-level use-case orchestration.
//!
//! # Responsibility
//! - Bind commands to the live address book and the last display snapshot.
//! - Persist the book after successful mutations.

pub mod address_book_service;
