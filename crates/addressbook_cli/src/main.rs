//! Interactive address book shell.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the database.
//! - Read commands line by line and print each result.

mod config;
mod parser;
mod ui;

use addressbook_core::db::open_db;
use addressbook_core::{init_logging, AddressBookService, SqliteAddressBookStore};
use anyhow::{anyhow, Context, Result};
use clap::Parser as _;
use config::{Args, Config};
use log::info;
use parser::Input;
use std::io::{self, BufRead};

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    let log_dir = config
        .log_dir
        .to_str()
        .context("log directory must be valid UTF-8")?;
    init_logging(&config.log_level, log_dir).map_err(|err| anyhow!(err))?;

    let mut conn = open_db(&config.db_path)
        .with_context(|| format!("cannot open address book `{}`", config.db_path.display()))?;
    let mut service = AddressBookService::open(SqliteAddressBookStore::new(&mut conn))
        .context("cannot load address book")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    ui::show_message(
        &mut stdout,
        &format!(
            "Welcome to your address book ({} persons). Type `help` for commands.",
            service.address_book().len()
        ),
    )?;

    let mut lines = stdin.lock().lines();
    loop {
        ui::prompt(&mut stdout)?;
        let Some(line) = lines.next() else {
            break;
        };
        match parser::parse(&line?) {
            Input::Command(command) => {
                let result = service.execute(&command);
                ui::show_result(&mut stdout, &result)?;
            }
            Input::Help => ui::show_message(&mut stdout, &parser::usage())?,
            Input::Invalid(message) => ui::show_message(&mut stdout, &message)?,
            Input::Exit => break,
        }
    }

    info!("event=app_exit module=cli status=ok");
    Ok(())
}
