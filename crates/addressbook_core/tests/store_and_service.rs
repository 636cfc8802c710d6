use addressbook_core::db::migrations::latest_version;
use addressbook_core::db::{open_db, open_db_in_memory};
use addressbook_core::{
    AddCommand, Address, AddressBook, AddressBookService, AddressBookStore, Command,
    DeleteCommand, EditCommand, Email, Name, Person, Phone, SqliteAddressBookStore, StoreError,
    TagSet,
};
use rusqlite::Connection;

fn person(name: &str, phone: &str, phone_private: bool, tags: &[&str]) -> Person {
    Person::new(
        Name::new(name, false).unwrap(),
        Phone::new(phone, phone_private).unwrap(),
        Email::new("someone@mail.com", false).unwrap(),
        Address::new("2 Science Drive", true).unwrap(),
        TagSet::parse(tags).unwrap(),
    )
}

fn add(name: &str, phone: &str) -> Command {
    Command::Add(AddCommand {
        name: name.to_string(),
        phone: phone.to_string(),
        email: "someone@mail.com".to_string(),
        address: "2 Science Drive".to_string(),
        ..AddCommand::default()
    })
}

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    for table in ["persons", "person_tags"] {
        let exists: i64 = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1, "table {table} does not exist");
    }
}

#[test]
fn opening_database_with_newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("address book schema version 999 is newer than supported {}", latest_version())
    );
    match err {
        StoreError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn save_and_load_preserve_order_flags_and_tags() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteAddressBookStore::new(&mut conn);
    let book = AddressBook::from_persons([
        person("Zed Lim", "111", true, &["gym"]),
        person("Amy Tan", "222", false, &["friend", "family"]),
        person("Bob Lee", "333", false, &[]),
    ])
    .unwrap();

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, book);
    assert!(loaded.all()[0].phone().is_private());
    assert!(loaded.all()[1].address().is_private());
}

#[test]
fn save_replaces_previous_content() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteAddressBookStore::new(&mut conn);
    let first = AddressBook::from_persons([person("Amy Tan", "1", false, &["a"])]).unwrap();
    let second = AddressBook::from_persons([person("Bob Lee", "2", false, &[])]).unwrap();

    store.save(&first).unwrap();
    store.save(&second).unwrap();

    assert_eq!(store.load().unwrap(), second);
}

#[test]
fn load_rejects_invalid_persisted_values() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO persons (position, name, phone, email, address)
         VALUES (0, 'Amy Tan', 'not-a-phone', 'amy@tan.com', 'somewhere');",
        [],
    )
    .unwrap();

    let store = SqliteAddressBookStore::new(&mut conn);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)), "unexpected error: {err}");
}

#[test]
fn service_persists_mutations_and_tracks_last_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.sqlite3");

    {
        let mut conn = open_db(&path).unwrap();
        let mut service = AddressBookService::open(SqliteAddressBookStore::new(&mut conn)).unwrap();

        assert!(service.execute(&add("Amy Tan", "81234567")).success);
        assert!(service.execute(&add("Bob Lee", "91234567")).success);
        assert!(service.last_shown().is_empty());

        let listed = service.execute(&Command::List);
        assert_eq!(listed.message, "2 persons listed!");
        assert_eq!(service.last_shown().len(), 2);

        let edited = service.execute(&Command::Edit(EditCommand::new(2, "phone", "90000000")));
        assert!(edited.success, "{}", edited.message);
        assert!(service.execute(&Command::Delete(DeleteCommand::new(1))).success);
    }

    let mut conn = open_db(&path).unwrap();
    let service = AddressBookService::open(SqliteAddressBookStore::new(&mut conn)).unwrap();
    let persons = service.address_book().all();
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].name().value(), "Bob Lee");
    assert_eq!(persons[0].phone().value(), "90000000");
}

#[test]
fn rejected_command_keeps_previous_listing() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = AddressBookService::open(SqliteAddressBookStore::new(&mut conn)).unwrap();
    service.execute(&add("Amy Tan", "81234567"));
    service.execute(&Command::List);

    let result = service.execute(&Command::Edit(EditCommand::new(1, "nickname", "A")));

    assert!(!result.success);
    assert_eq!(service.last_shown().len(), 1);
}
