//! Person record model.
//!
//! # Responsibility
//! - Aggregate the validated fields and tag set of one contact.
//! - Provide atomic per-field setters.
//!
//! # Invariants
//! - All five parts (name, phone, email, address, tags) are always present.
//! - A setter validates the replacement before assigning it; a rejected
//!   value leaves the record untouched.
//! - Equality and hashing cover every field including privacy flags and tags.

use crate::model::field::{Address, Email, FieldKind, FieldValueError, Name, Phone};
use crate::model::tag::TagSet;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a person when it joins an address book.
///
/// Survives field edits and is never reused for another member.
pub type PersonId = Uuid;

/// One contact entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: TagSet,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: TagSet) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns an independent copy of the tag set.
    pub fn tags(&self) -> TagSet {
        self.tags.clone()
    }

    pub fn set_name(&mut self, raw: &str) -> Result<(), FieldValueError> {
        self.name = self.name.with_value(raw)?;
        Ok(())
    }

    pub fn set_phone(&mut self, raw: &str) -> Result<(), FieldValueError> {
        self.phone = self.phone.with_value(raw)?;
        Ok(())
    }

    pub fn set_email(&mut self, raw: &str) -> Result<(), FieldValueError> {
        self.email = self.email.with_value(raw)?;
        Ok(())
    }

    pub fn set_address(&mut self, raw: &str) -> Result<(), FieldValueError> {
        self.address = self.address.with_value(raw)?;
        Ok(())
    }

    /// Replaces one scalar field selected by `field`.
    ///
    /// Every `FieldKind` maps to exactly one setter; adding a field kind
    /// without a setter fails to compile.
    pub fn set_field(&mut self, field: FieldKind, raw: &str) -> Result<(), FieldValueError> {
        match field {
            FieldKind::Name => self.set_name(raw),
            FieldKind::Phone => self.set_phone(raw),
            FieldKind::Email => self.set_email(raw),
            FieldKind::Address => self.set_address(raw),
        }
    }

    /// Replaces the whole tag set.
    pub fn set_tags(&mut self, replacement: TagSet) {
        self.tags = replacement;
    }

    /// Renders the person without any field marked private, the name included.
    pub fn as_text_hide_private(&self) -> String {
        let mut parts = Vec::with_capacity(5);
        if !self.name.is_private() {
            parts.push(self.name.to_string());
        }
        if !self.phone.is_private() {
            parts.push(format!("Phone: {}", self.phone));
        }
        if !self.email.is_private() {
            parts.push(format!("Email: {}", self.email));
        }
        if !self.address.is_private() {
            parts.push(format!("Address: {}", self.address));
        }
        parts.push(format!("Tags: {}", self.tags));
        parts.join(" ")
    }
}

fn private_marker(is_private: bool) -> &'static str {
    if is_private {
        "(private) "
    } else {
        ""
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} Phone: {}{} Email: {}{} Address: {}{} Tags: {}",
            private_marker(self.name.is_private()),
            self.name,
            private_marker(self.phone.is_private()),
            self.phone,
            private_marker(self.email.is_private()),
            self.email,
            private_marker(self.address.is_private()),
            self.address,
            self.tags
        )
    }
}
