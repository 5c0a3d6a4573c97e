//! # The handler contract
//!
//! Every console command is a type implementing [`Command`]. The framework creates a
//! fresh handler per invocation from the factory it was registered with, then:
//!
//! 1. calls [`Command::init`] with the [`Context`] for this invocation,
//! 2. calls either [`Command::run`] or, when help was asked for,
//!    [`Command::render_help`].
//!
//! Handlers never print or exit. Output goes through the context's logging helpers,
//! failures are returned as errors:
//!
//! - `ctx.require_args(&[...])?` / `ctx.require_opts(&[...])?` stop the command and
//!   show its help with the list of what is missing;
//! - [`ConsolarError::command`](crate::error::ConsolarError::command) reports any other
//!   failure verbatim.
//!
//! ```rust
//! use consolar::{Command, Context, Result};
//!
//! struct Greet;
//!
//! impl Command for Greet {
//!     fn run(&mut self, ctx: &mut Context<'_>) -> Result<()> {
//!         ctx.require_args(&["name"])?;
//!         let name = ctx.named_arg("name").unwrap_or_default().to_string();
//!         ctx.log_success(format!("Hello, {name}!"));
//!         Ok(())
//!     }
//!
//!     fn render_help(&self, ctx: &Context<'_>) -> Result<String> {
//!         ctx.render("Usage: {{ name | primary }} greet <name>", &ctx.help_context())
//!     }
//! }
//! ```

use crate::context::Context;
use crate::error::Result;

pub trait Command {
    /// Prepares the handler. Runs before both `run` and `render_help`.
    fn init(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    fn run(&mut self, ctx: &mut Context<'_>) -> Result<()>;

    /// Usage text for this command.
    fn render_help(&self, ctx: &Context<'_>) -> Result<String>;
}
