use addressbook_core::command::messages::{
    MESSAGE_ADDRESS_BOOK_CLEARED, MESSAGE_DUPLICATE_PERSON, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
    MESSAGE_PERSON_NOT_IN_ADDRESSBOOK,
};
use addressbook_core::{
    AddCommand, AddressBook, Command, DeleteCommand, DisplaySnapshot, FindCommand, ViewCommand,
};

fn add_command(name: &str, phone: &str) -> AddCommand {
    AddCommand {
        name: name.to_string(),
        phone: phone.to_string(),
        phone_private: true,
        email: format!("{}@mail.com", name.to_lowercase().replace(' ', ".")),
        email_private: false,
        address: "10 Kent Ridge".to_string(),
        address_private: false,
        tags: vec!["friend".to_string()],
    }
}

fn book_with(names: &[&str]) -> AddressBook {
    let mut book = AddressBook::new();
    for (index, name) in names.iter().enumerate() {
        let result = Command::Add(add_command(name, &format!("9000000{index}")))
            .execute(&mut book, &DisplaySnapshot::empty());
        assert!(result.success, "{}", result.message);
    }
    book
}

#[test]
fn add_appends_and_reports_full_person() {
    let mut book = AddressBook::new();
    let result = Command::Add(add_command("Amy Tan", "81234567"))
        .execute(&mut book, &DisplaySnapshot::empty());

    assert!(result.success);
    assert_eq!(
        result.message,
        "New person added: Amy Tan Phone: (private) 81234567 Email: amy.tan@mail.com Address: 10 Kent Ridge Tags: [friend]"
    );
    assert_eq!(book.len(), 1);
}

#[test]
fn add_rejects_duplicate_person() {
    let mut book = book_with(&["Amy Tan"]);
    let result = Command::Add(add_command("Amy Tan", "90000000"))
        .execute(&mut book, &DisplaySnapshot::empty());

    assert!(!result.success);
    assert_eq!(result.message, MESSAGE_DUPLICATE_PERSON);
    assert_eq!(book.len(), 1);
}

#[test]
fn add_rejects_invalid_fields_and_tags() {
    let mut book = AddressBook::new();

    let mut bad_phone = add_command("Amy Tan", "81234567");
    bad_phone.phone = "8123 abc".to_string();
    let result = Command::Add(bad_phone).execute(&mut book, &DisplaySnapshot::empty());
    assert_eq!(result.message, "Invalid phone.");

    let mut bad_tag = add_command("Amy Tan", "81234567");
    bad_tag.tags = vec!["best friend".to_string()];
    let result = Command::Add(bad_tag).execute(&mut book, &DisplaySnapshot::empty());
    assert_eq!(result.message, "Tag names should be alphanumeric");

    let mut repeated_tag = add_command("Amy Tan", "81234567");
    repeated_tag.tags = vec!["gym".to_string(), "gym".to_string()];
    let result = Command::Add(repeated_tag).execute(&mut book, &DisplaySnapshot::empty());
    assert_eq!(result.message, "Duplicate tag: gym");

    assert!(book.is_empty());
}

#[test]
fn list_returns_snapshot_in_insertion_order() {
    let mut book = book_with(&["Amy Tan", "Bob Lee", "Cat Ng"]);
    let result = Command::List.execute(&mut book, &DisplaySnapshot::empty());

    assert!(result.success);
    assert_eq!(result.message, "3 persons listed!");
    let listed = result.listed.expect("list must produce a snapshot");
    let names: Vec<_> = listed.persons().map(|p| p.name().value()).collect();
    assert_eq!(names, vec!["Amy Tan", "Bob Lee", "Cat Ng"]);
}

#[test]
fn find_matches_whole_words_case_sensitively() {
    let mut book = book_with(&["Amy Tan", "Bob Tan", "Tanya Lee", "Cat Ng"]);

    let result = Command::Find(FindCommand::new(["Tan", "Ng"]))
        .execute(&mut book, &DisplaySnapshot::empty());
    let listed = result.listed.expect("find must produce a snapshot");
    let names: Vec<_> = listed.persons().map(|p| p.name().value()).collect();
    assert_eq!(names, vec!["Amy Tan", "Bob Tan", "Cat Ng"]);
    assert_eq!(result.message, "3 persons listed!");

    let result =
        Command::Find(FindCommand::new(["tan"])).execute(&mut book, &DisplaySnapshot::empty());
    assert_eq!(result.message, "0 persons listed!");
    assert!(result.listed.expect("empty listing").is_empty());
}

#[test]
fn delete_removes_listed_person() {
    let mut book = book_with(&["Amy Tan", "Bob Lee"]);
    let last_shown = book.snapshot();

    let result = Command::Delete(DeleteCommand::new(2)).execute(&mut book, &last_shown);

    assert!(result.success);
    assert!(result.message.starts_with("Deleted Person: Bob Lee Phone:"));
    assert_eq!(book.len(), 1);
}

#[test]
fn delete_through_listing_of_equal_persons_removes_live_record() {
    let mut book = book_with(&["Amy Tan", "Bob Lee"]);
    let listed_elsewhere = book_with(&["Amy Tan", "Bob Lee"]).snapshot();

    let result = Command::Delete(DeleteCommand::new(2)).execute(&mut book, &listed_elsewhere);

    assert!(result.success, "{}", result.message);
    assert_eq!(book.len(), 1);
    assert_eq!(book.all()[0].name().value(), "Amy Tan");
}

#[test]
fn delete_checks_index_then_staleness() {
    let mut book = book_with(&["Amy Tan", "Bob Lee"]);
    let last_shown = book.snapshot();

    let result = Command::Delete(DeleteCommand::new(3)).execute(&mut book, &last_shown);
    assert_eq!(result.message, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);

    assert!(Command::Delete(DeleteCommand::new(1))
        .execute(&mut book, &last_shown)
        .success);
    let result = Command::Delete(DeleteCommand::new(1)).execute(&mut book, &last_shown);
    assert!(!result.success);
    assert_eq!(result.message, MESSAGE_PERSON_NOT_IN_ADDRESSBOOK);
    assert_eq!(book.len(), 1);
}

#[test]
fn view_hides_private_fields_and_viewall_shows_them() {
    let mut book = book_with(&["Amy Tan"]);
    let last_shown = book.snapshot();

    let hidden = Command::View(ViewCommand::new(1, false)).execute(&mut book, &last_shown);
    assert_eq!(
        hidden.message,
        "Viewing person: Amy Tan Email: amy.tan@mail.com Address: 10 Kent Ridge Tags: [friend]"
    );

    let shown = Command::View(ViewCommand::new(1, true)).execute(&mut book, &last_shown);
    assert!(shown.message.contains("Phone: (private) 90000000"));
    assert!(shown.listed.is_none());
}

#[test]
fn clear_removes_everyone() {
    let mut book = book_with(&["Amy Tan", "Bob Lee"]);
    let result = Command::Clear.execute(&mut book, &DisplaySnapshot::empty());

    assert!(result.success);
    assert_eq!(result.message, MESSAGE_ADDRESS_BOOK_CLEARED);
    assert!(book.is_empty());
}

#[test]
fn only_mutating_commands_report_mutation() {
    assert!(Command::Clear.mutates());
    assert!(Command::Delete(DeleteCommand::new(1)).mutates());
    assert!(!Command::List.mutates());
    assert!(!Command::View(ViewCommand::new(1, true)).mutates());
    assert_eq!(Command::View(ViewCommand::new(1, true)).word(), "viewall");
}
