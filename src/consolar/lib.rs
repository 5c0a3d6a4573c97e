//! # Consolar Architecture
//!
//! Consolar is a micro-framework for multi-command console applications. An app is a
//! name, a version, a help template and a set of commands; consolar turns the raw
//! process arguments into a call to one of those commands, or into help.
//!
//! ## The Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Raw tokens   ["gen:pwd", "abc", "--dry-run"]                │
//! └──────────────────────────────────────────────────────────────┘
//!                               │  tokenizer + invocation
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Invocation   command, positional args, camelCase options    │
//! └──────────────────────────────────────────────────────────────┘
//!                               │  dispatch
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Step         version │ command help │ general help │ run    │
//! │               resolver → registry → Command handler          │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Report       outcome + logged messages                      │
//! │               printed by `print`, exit code from `Status`    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only [`Consolar::run`] touches stdout, stderr or the exit status, and even it
//! returns the code rather than exiting. Everything before that is plain data, which
//! is how the tests drive it: [`Consolar::dispatch`] with a token list, then assert
//! on the [`Report`].
//!
//! ## Exit Codes
//!
//! | Code  | Meaning                                                         |
//! |-------|-----------------------------------------------------------------|
//! | `0`   | version shown, help shown, command completed                    |
//! | `1`   | missing arguments or options, command error, template error     |
//! | `255` | the command name is not registered                              |
//!
//! ## Module Overview
//!
//! - [`tokenizer`]: raw tokens to positionals and options (`clap_lex`)
//! - [`invocation`]: the [`Invocation`] model and its builder
//! - [`resolver`]: command names to handler identifiers
//! - [`registry`]: identifiers to handler factories
//! - [`command`]: the [`Command`] handler trait
//! - [`context`]: the per-invocation [`Context`] handlers work with
//! - [`validate`]: required argument and option checks
//! - [`dispatch`]: the decision sequence and the [`Report`]
//! - [`help`]: help templates
//! - [`print`]: report output
//! - [`config`]: [`AppConfig`]
//! - [`error`]: error types

pub mod app;
pub mod command;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod invocation;
pub mod message;
pub mod print;
pub mod registry;
pub mod resolver;
pub mod theme;
pub mod tokenizer;
pub mod validate;

pub use app::Consolar;
pub use command::Command;
pub use config::{AppConfig, ColorChoice};
pub use context::Context;
pub use dispatch::{Outcome, Report, Status, Step};
pub use error::{ConsolarError, Result};
pub use invocation::{Invocation, OptionValue};
pub use resolver::{PrefixMatch, SeparatorStyle};
