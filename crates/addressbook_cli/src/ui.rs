//! Plain-text presentation of command results.

use addressbook_core::{CommandResult, DisplaySnapshot};
use std::io::{self, Write};

const DIVIDER: &str = "===================================================";
const PROMPT: &str = "Enter command: ";

/// Formats a listing as 1-based numbered lines with private fields hidden.
pub fn format_listing(listed: &DisplaySnapshot) -> String {
    listed
        .persons()
        .enumerate()
        .map(|(offset, person)| format!("{}. {}", offset + 1, person.as_text_hide_private()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show_result(out: &mut impl Write, result: &CommandResult) -> io::Result<()> {
    if let Some(listed) = &result.listed {
        if !listed.is_empty() {
            writeln!(out, "{}", format_listing(listed))?;
        }
    }
    writeln!(out, "{}", result.message)?;
    writeln!(out, "{DIVIDER}")
}

pub fn show_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")?;
    writeln!(out, "{DIVIDER}")
}

pub fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}
