//! Turns one line of user input into a core command descriptor.
//!
//! # Invariants
//! - Parsing never touches the address book; all business validation
//!   (field rules, index bounds) happens in core at execution time.

use addressbook_core::command::{add, clear, delete, edit, find, list, view};
use addressbook_core::{AddCommand, Command, DeleteCommand, EditCommand, FindCommand, ViewCommand};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const HELP_WORD: &str = "help";
const EXIT_WORD: &str = "exit";
const TAG_PREFIX: &str = " t/";

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<word>\S+)(?:\s+(?P<arguments>.*))?$").expect("valid command regex")
});
static ADD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^/]+) (?P<phone_private>p?)p/(?P<phone>[^/]+) (?P<email_private>p?)e/(?P<email>[^/]+) (?P<address_private>p?)a/(?P<address>[^/]+)(?P<tags>(?: t/[^/]+)*)$",
    )
    .expect("valid add regex")
});
static EDIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<index>\S+)\s+(?P<field>\S+)\s+(?P<value>.+)$").expect("valid edit regex")
});

/// Parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
    Exit,
    /// Malformed input, with the message to show.
    Invalid(String),
}

pub fn usage() -> String {
    [
        add_usage(),
        format!(
            "{0}: Deletes the person at INDEX of the last listing.\n\tExample: {0} 1",
            delete::COMMAND_WORD
        ),
        edit_usage(),
        format!(
            "{0}: Lists persons whose names contain any of the keywords (case-sensitive).\n\tExample: {0} alice bob",
            find::COMMAND_WORD
        ),
        format!("{}: Lists all persons.", list::COMMAND_WORD),
        format!("{}: Removes every person.", clear::COMMAND_WORD),
        format!(
            "{0}: Shows the person at INDEX without private fields.\n\tExample: {0} 1",
            view::COMMAND_WORD
        ),
        format!(
            "{0}: Shows the person at INDEX including private fields.\n\tExample: {0} 1",
            view::COMMAND_WORD_ALL
        ),
        format!("{HELP_WORD}: Shows this usage text."),
        format!("{EXIT_WORD}: Exits the program."),
    ]
    .join("\n")
}

pub fn parse(line: &str) -> Input {
    let Some(caps) = COMMAND_RE.captures(line.trim()) else {
        return invalid_format(&usage());
    };
    let arguments = caps.name("arguments").map_or("", |m| m.as_str().trim());

    match &caps["word"] {
        add::COMMAND_WORD => parse_add(arguments),
        delete::COMMAND_WORD => match parse_index(arguments) {
            Some(index) => Input::Command(Command::Delete(DeleteCommand::new(index))),
            None => invalid_format(&usage_for(delete::COMMAND_WORD)),
        },
        edit::COMMAND_WORD => parse_edit(arguments),
        find::COMMAND_WORD => {
            if arguments.is_empty() {
                return invalid_format(&usage_for(find::COMMAND_WORD));
            }
            Input::Command(Command::Find(FindCommand::new(arguments.split_whitespace())))
        }
        list::COMMAND_WORD => Input::Command(Command::List),
        clear::COMMAND_WORD => Input::Command(Command::Clear),
        word @ (view::COMMAND_WORD | view::COMMAND_WORD_ALL) => match parse_index(arguments) {
            Some(index) => Input::Command(Command::View(ViewCommand::new(
                index,
                word == view::COMMAND_WORD_ALL,
            ))),
            None => invalid_format(&usage_for(word)),
        },
        HELP_WORD => Input::Help,
        EXIT_WORD => Input::Exit,
        _ => Input::Invalid(format!("Unknown command!\n{}", usage())),
    }
}

fn parse_add(arguments: &str) -> Input {
    let Some(caps) = ADD_RE.captures(arguments) else {
        return invalid_format(&add_usage());
    };
    Input::Command(Command::Add(AddCommand {
        name: caps["name"].to_string(),
        phone: caps["phone"].to_string(),
        phone_private: is_private(&caps, "phone_private"),
        email: caps["email"].to_string(),
        email_private: is_private(&caps, "email_private"),
        address: caps["address"].to_string(),
        address_private: is_private(&caps, "address_private"),
        tags: caps["tags"]
            .split(TAG_PREFIX)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
    }))
}

fn parse_edit(arguments: &str) -> Input {
    let Some(caps) = EDIT_RE.captures(arguments) else {
        return invalid_format(&edit_usage());
    };
    match parse_index(&caps["index"]) {
        Some(index) => Input::Command(Command::Edit(EditCommand::new(
            index,
            &caps["field"],
            caps["value"].trim(),
        ))),
        None => invalid_format(&edit_usage()),
    }
}

fn parse_index(arguments: &str) -> Option<i64> {
    arguments.trim().parse().ok()
}

fn is_private(caps: &Captures<'_>, group: &str) -> bool {
    caps.name(group).is_some_and(|m| !m.as_str().is_empty())
}

fn invalid_format(usage: &str) -> Input {
    Input::Invalid(format!("Invalid command format! \n{usage}"))
}

fn usage_for(word: &str) -> String {
    usage()
        .lines()
        .skip_while(|line| !line.starts_with(&format!("{word}:")))
        .take(2)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_usage() -> String {
    format!(
        "{0}: Adds a person. Contact details can be marked private by prepending 'p' to the prefix.\n\tExample: {0} John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney",
        add::COMMAND_WORD
    )
}

fn edit_usage() -> String {
    format!(
        "{0}: Edits one field (name, phone, email or address) of the person at INDEX.\n\tExample: {0} 1 phone 91234567",
        edit::COMMAND_WORD
    )
}
