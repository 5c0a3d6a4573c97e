//! # Dispatch
//!
//! Decides what one invocation does and does it. The decision is a fixed sequence,
//! first match wins:
//!
//! ```text
//!                 ┌─ --version / -v ──────────────────────▶ ShowVersion
//!                 │
//! Invocation ─────┼─ --help / -h, with a command ─────────▶ ShowCommandHelp
//!                 │
//!                 ├─ --help / -h, or no command ──────────▶ ShowGeneralHelp
//!                 │
//!                 └─ otherwise ───────────────────────────▶ RunCommand
//! ```
//!
//! With a pinned command there is always a command, so help flags lead to the
//! command's own help.
//!
//! Nothing here prints or exits. Every path ends in a [`Report`]; turning that into
//! output and an exit code is [`print`](crate::print)'s job.

use crate::command::Command;
use crate::config::AppConfig;
use crate::context::Context;
use crate::error::ConsolarError;
use crate::help::HelpRenderer;
use crate::invocation::Invocation;
use crate::message::Message;
use crate::registry::CommandRegistry;
use tracing::debug;

const VERSION_FLAGS: &[&str] = &["v", "version"];
const HELP_FLAGS: &[&str] = &["h", "help"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ShowVersion,
    ShowCommandHelp,
    ShowGeneralHelp,
    RunCommand,
}

impl Step {
    pub fn select(invocation: &Invocation, pinned: bool) -> Step {
        let wants_help = invocation.any_flag(HELP_FLAGS);

        if invocation.any_flag(VERSION_FLAGS) {
            return Step::ShowVersion;
        }
        if wants_help && invocation.has_command() {
            return Step::ShowCommandHelp;
        }
        let general = if pinned {
            wants_help && !invocation.has_command()
        } else {
            wants_help || !invocation.has_command()
        };
        if general {
            Step::ShowGeneralHelp
        } else {
            Step::RunCommand
        }
    }
}

/// Process exit status of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Validation failures, handler errors, broken templates.
    Failure,
    /// The command name did not resolve.
    Halt,
}

impl Status {
    pub fn code(&self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Halt => 255,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Version(String),
    Help(String),
    Completed,
    Failure {
        status: Status,
        message: String,
        /// Items listed under the message, e.g. missing argument names.
        details: Vec<String>,
        /// Command help shown after a validation failure.
        help: Option<String>,
    },
}

impl Outcome {
    fn failure(status: Status, message: impl Into<String>) -> Self {
        Outcome::Failure {
            status,
            message: message.into(),
            details: Vec::new(),
            help: None,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Outcome::Failure { status, .. } => *status,
            _ => Status::Success,
        }
    }
}

/// Everything one dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub step: Step,
    pub outcome: Outcome,
    /// Messages logged by the handler, in order.
    pub messages: Vec<Message>,
}

impl Report {
    pub fn status(&self) -> Status {
        self.outcome.status()
    }

    pub fn exit_code(&self) -> u8 {
        self.status().code()
    }
}

pub struct Dispatcher<'a> {
    config: &'a AppConfig,
    registry: &'a CommandRegistry,
    help: &'a HelpRenderer,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        config: &'a AppConfig,
        registry: &'a CommandRegistry,
        help: &'a HelpRenderer,
    ) -> Self {
        Self {
            config,
            registry,
            help,
        }
    }

    pub fn dispatch(&self, invocation: Invocation) -> Report {
        let step = Step::select(&invocation, self.config.is_pinned());
        debug!(?step, command = invocation.command(), "dispatching");

        let mut ctx = Context::new(invocation, self.config, self.registry, self.help);
        let outcome = match step {
            Step::ShowVersion => Outcome::Version(self.config.version.clone()),
            Step::ShowCommandHelp => self.command_help(&mut ctx),
            Step::ShowGeneralHelp => match ctx.render_general_help() {
                Ok(text) => Outcome::Help(text),
                Err(e) => Outcome::failure(Status::Failure, e.to_string()),
            },
            Step::RunCommand => self.run_command(&mut ctx),
        };

        debug!(status = ?outcome.status(), "dispatch finished");
        Report {
            step,
            outcome,
            messages: ctx.into_messages(),
        }
    }

    fn command_help(&self, ctx: &mut Context<'_>) -> Outcome {
        let mut handler = match self.registry.load(ctx.command()) {
            Ok(handler) => handler,
            Err(ConsolarError::UnsupportedCommand(command)) => {
                return Outcome::failure(
                    Status::Halt,
                    format!("The {} command is not supported!", command),
                )
            }
            Err(e) => return Outcome::failure(Status::Failure, e.to_string()),
        };

        let rendered = handler
            .init(ctx)
            .and_then(|()| handler.render_help(ctx));
        match rendered {
            Ok(text) => Outcome::Help(text),
            Err(e) => self.handler_failure(handler.as_ref(), ctx, e),
        }
    }

    fn run_command(&self, ctx: &mut Context<'_>) -> Outcome {
        let mut handler = match self.registry.load(ctx.command()) {
            Ok(handler) => handler,
            Err(e @ ConsolarError::UnsupportedCommand(_)) => {
                return Outcome::failure(Status::Halt, e.to_string())
            }
            Err(e) => return Outcome::failure(Status::Failure, e.to_string()),
        };

        match handler.init(ctx).and_then(|()| handler.run(ctx)) {
            Ok(()) => Outcome::Completed,
            Err(e) => self.handler_failure(handler.as_ref(), ctx, e),
        }
    }

    /// Validation errors list what is missing and fall back to the command's help;
    /// anything else is reported by its message.
    fn handler_failure(
        &self,
        handler: &dyn Command,
        ctx: &Context<'_>,
        error: ConsolarError,
    ) -> Outcome {
        if !error.is_validation() {
            debug!(%error, "command failed");
            return Outcome::failure(Status::Failure, error.to_string());
        }

        let help = match handler.render_help(ctx) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(error = %e, "command help failed after validation error");
                None
            }
        };
        Outcome::Failure {
            status: Status::Failure,
            message: error.to_string(),
            details: error.missing().to_vec(),
            help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::InvocationBuilder;

    fn select(raw: &[&str]) -> Step {
        let inv = InvocationBuilder::default().build(raw.iter().copied());
        Step::select(&inv, false)
    }

    fn select_pinned(raw: &[&str]) -> Step {
        let inv = InvocationBuilder::default()
            .pinned("solo")
            .build(raw.iter().copied());
        Step::select(&inv, true)
    }

    #[test]
    fn test_empty_input_shows_general_help() {
        assert_eq!(select(&[]), Step::ShowGeneralHelp);
    }

    #[test]
    fn test_version_wins_over_everything() {
        assert_eq!(select(&["--version"]), Step::ShowVersion);
        assert_eq!(select(&["-v"]), Step::ShowVersion);
        assert_eq!(select(&["cmd", "--help", "--version"]), Step::ShowVersion);
        assert_eq!(select_pinned(&["-v"]), Step::ShowVersion);
    }

    #[test]
    fn test_help_with_command() {
        assert_eq!(select(&["gen:pwd", "--help"]), Step::ShowCommandHelp);
        assert_eq!(select(&["-h", "gen:pwd"]), Step::ShowCommandHelp);
    }

    #[test]
    fn test_help_without_command() {
        assert_eq!(select(&["--help"]), Step::ShowGeneralHelp);
    }

    #[test]
    fn test_options_without_command_show_general_help() {
        assert_eq!(select(&["--verbose"]), Step::ShowGeneralHelp);
    }

    #[test]
    fn test_switched_off_flags_are_ignored() {
        assert_eq!(select(&["cmd", "--no-help"]), Step::RunCommand);
        assert_eq!(select(&["cmd", "--version=false"]), Step::RunCommand);
    }

    #[test]
    fn test_command_runs() {
        assert_eq!(select(&["gen:pwd", "abc"]), Step::RunCommand);
    }

    #[test]
    fn test_pinned_mode() {
        assert_eq!(select_pinned(&[]), Step::RunCommand);
        assert_eq!(select_pinned(&["arg"]), Step::RunCommand);
        assert_eq!(select_pinned(&["--help"]), Step::ShowCommandHelp);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Success.code(), 0);
        assert_eq!(Status::Failure.code(), 1);
        assert_eq!(Status::Halt.code(), 255);
        assert_ne!(Status::Failure.code(), Status::Halt.code());
    }
}
