//! The `consolar` binary: a small password toolkit built on the library.

pub mod password;

use consolar::{AppConfig, Consolar, Result};

const HELP_TEMPLATE: &str = include_str!("templates/help.txt");

pub fn app() -> Result<Consolar> {
    let config = AppConfig::new("Consolar")
        .version(env!("CARGO_PKG_VERSION"))
        .help_template(HELP_TEMPLATE);

    Ok(Consolar::new(config)?
        .command("pwd:check", "Rate the strength of a password", || password::Check)
        .command(
            "pwd:compare",
            "Confirm a password and its confirmation match",
            || password::Compare,
        )
        .command("pwd:policy", "Describe a password policy", || password::Policy))
}
