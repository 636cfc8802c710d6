//! Contact domain model.
//!
//! # Responsibility
//! - Define validated field values, tags and the person aggregate.
//! - Keep every validation rule in one place so commands, storage and
//!   deserialization all share it.
//!
//! # Invariants
//! - No model type can be observed in a partially valid state.

pub mod field;
pub mod person;
pub mod tag;
