//! User-facing message templates shared by commands.

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_PERSON_NOT_IN_ADDRESSBOOK: &str = "Person could not be found in address book";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_EDIT_FIELD_INVALID: &str =
    "Field is invalid. Accepted fields are name, phone, email, and address.";
pub const MESSAGE_ADDRESS_BOOK_CLEARED: &str = "Address book has been cleared!";

pub fn persons_listed(count: usize) -> String {
    format!("{count} persons listed!")
}

pub fn person_added(person: &impl std::fmt::Display) -> String {
    format!("New person added: {person}")
}

pub fn person_deleted(person: &impl std::fmt::Display) -> String {
    format!("Deleted Person: {person}")
}

pub fn person_edited(person: &impl std::fmt::Display) -> String {
    format!("Edit successful. Person details: {person}")
}

pub fn person_viewed(text: &str) -> String {
    format!("Viewing person: {text}")
}
