//! Validated scalar field values of a person record.
//!
//! # Responsibility
//! - Validate raw input for name/phone/email/address fields.
//! - Carry the per-field privacy flag next to the validated value.
//!
//! # Invariants
//! - A field value exists only if its trimmed input passed the field rule.
//! - Values are immutable. Editing builds a replacement via `with_value`,
//!   which keeps the privacy flag of the value it replaces.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.]+@[A-Za-z0-9_.]+$").expect("valid email regex")
});
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\r\n]+$").expect("valid address regex"));

/// Editable scalar field of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
}

impl FieldKind {
    /// Every editable field, in display order.
    pub const ALL: [FieldKind; 4] = [Self::Name, Self::Phone, Self::Email, Self::Address];

    /// Stable selector string used by edit commands.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    /// Parses an edit selector. Matching is exact and case-sensitive.
    pub fn parse(selector: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == selector)
    }

    /// User-facing description of the accepted format.
    pub fn constraint(self) -> &'static str {
        match self {
            Self::Name => "Person names should be spaces or alphanumeric characters",
            Self::Phone => "Person phone numbers should only contain numbers",
            Self::Email => "Person emails should be 2 alphanumeric/period strings separated by '@'",
            Self::Address => "Person addresses can be in any format",
        }
    }

    /// Returns whether `raw` would be accepted for this field.
    pub fn is_valid(self, raw: &str) -> bool {
        self.pattern().is_match(raw.trim())
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Name => &NAME_RE,
            Self::Phone => &PHONE_RE,
            Self::Email => &EMAIL_RE,
            Self::Address => &ADDRESS_RE,
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value rejected by a field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValueError {
    pub field: FieldKind,
    pub value: String,
}

impl FieldValueError {
    /// Accepted-format description for the rejected field.
    pub fn constraint(&self) -> &'static str {
        self.field.constraint()
    }
}

impl Display for FieldValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {}.", self.field)
    }
}

impl Error for FieldValueError {}

/// Serialized shape shared by every field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub value: String,
    pub is_private: bool,
}

fn validate(field: FieldKind, raw: &str) -> Result<String, FieldValueError> {
    let trimmed = raw.trim();
    if field.pattern().is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(FieldValueError {
            field,
            value: raw.to_string(),
        })
    }
}

macro_rules! field_value {
    ($(#[$meta:meta])* $type_name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "FieldRecord", into = "FieldRecord")]
        pub struct $type_name {
            value: String,
            is_private: bool,
        }

        impl $type_name {
            /// Field this value type validates.
            pub const KIND: FieldKind = $kind;

            /// Validates `raw` (after trimming) and builds the value.
            pub fn new(raw: &str, is_private: bool) -> Result<Self, FieldValueError> {
                let value = validate(Self::KIND, raw)?;
                Ok(Self { value, is_private })
            }

            /// Builds a replacement from a new raw value with the same privacy flag.
            pub fn with_value(&self, raw: &str) -> Result<Self, FieldValueError> {
                Self::new(raw, self.is_private)
            }

            pub fn value(&self) -> &str {
                &self.value
            }

            pub fn is_private(&self) -> bool {
                self.is_private
            }
        }

        impl Display for $type_name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl TryFrom<FieldRecord> for $type_name {
            type Error = FieldValueError;

            fn try_from(record: FieldRecord) -> Result<Self, Self::Error> {
                Self::new(&record.value, record.is_private)
            }
        }

        impl From<$type_name> for FieldRecord {
            fn from(field: $type_name) -> Self {
                FieldRecord {
                    value: field.value,
                    is_private: field.is_private,
                }
            }
        }
    };
}

field_value!(
    /// Person name: ASCII letters, digits and spaces.
    Name => FieldKind::Name
);
field_value!(
    /// Phone number: ASCII digits only.
    Phone => FieldKind::Phone
);
field_value!(
    /// Email in `local@domain` form.
    Email => FieldKind::Email
);
field_value!(
    /// Free-form single-line postal address.
    Address => FieldKind::Address
);

impl Name {
    /// Whitespace-separated words of the name, used by keyword search.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.value.split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Email, FieldKind, Name, Phone};

    #[test]
    fn trims_accepted_input() {
        let name = Name::new("  John Doe ", false).expect("name should be valid");
        assert_eq!(name.value(), "John Doe");
    }

    #[test]
    fn rejects_values_outside_field_rules() {
        assert!(Name::new("John*Doe", false).is_err());
        assert!(Name::new("   ", false).is_err());
        assert!(Phone::new("+65 9123", false).is_err());
        assert!(Email::new("john.doe", false).is_err());
        assert!(Email::new("john@@doe.com", false).is_err());
        assert!(Address::new("", true).is_err());
        assert!(Address::new("line one\nline two", true).is_err());
    }

    #[test]
    fn error_names_the_rejected_field() {
        let err = Phone::new("abc", false).expect_err("letters are not a phone number");
        assert_eq!(err.field, FieldKind::Phone);
        assert_eq!(err.to_string(), "Invalid phone.");
        assert!(err.constraint().contains("numbers"));
    }

    #[test]
    fn with_value_keeps_privacy_flag() {
        let phone = Phone::new("61234567", true).expect("phone should be valid");
        let edited = phone.with_value("91112222").expect("edit should be valid");
        assert_eq!(edited.value(), "91112222");
        assert!(edited.is_private());
    }

    #[test]
    fn parse_selector_is_exact() {
        assert_eq!(FieldKind::parse("email"), Some(FieldKind::Email));
        assert_eq!(FieldKind::parse("Email"), None);
        assert_eq!(FieldKind::parse("nickname"), None);
        assert_eq!(FieldKind::parse(" name"), None);
    }

    #[test]
    fn name_words_split_on_whitespace() {
        let name = Name::new("Jane  Mary Doe", false).expect("name should be valid");
        assert_eq!(name.words().collect::<Vec<_>>(), vec!["Jane", "Mary", "Doe"]);
    }
}
