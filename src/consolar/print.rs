//! Writes a [`Report`] to the terminal.
//!
//! Normal output (help, version, handler logs) goes to stdout. Failures and warnings
//! go to stderr in red and yellow.

use crate::dispatch::{Outcome, Report};
use crate::message::{Message, MessageLevel};
use colored::Colorize;
use std::io::{self, Write};

pub fn print_report(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_report(report, &mut stdout.lock(), &mut stderr.lock())
}

pub fn write_report<O: Write, E: Write>(
    report: &Report,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    write_messages(&report.messages, out, err)?;

    match &report.outcome {
        Outcome::Version(version) => writeln!(out, "{}", version.cyan())?,
        Outcome::Help(text) => writeln!(out, "{}", text)?,
        Outcome::Completed => {}
        Outcome::Failure {
            message,
            details,
            help,
            ..
        } => {
            writeln!(err, "{}", message.red())?;
            for item in details {
                writeln!(err, "* {}", item)?;
            }
            if let Some(help) = help {
                writeln!(out, "{}", help)?;
            }
        }
    }

    out.flush()?;
    err.flush()
}

fn write_messages<O: Write, E: Write>(
    messages: &[Message],
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Plain | MessageLevel::Step => message.content.normal(),
            MessageLevel::Info => message.content.cyan(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Failure => message.content.red(),
        };
        if message.level.is_error_channel() {
            writeln!(err, "{}", line)?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
