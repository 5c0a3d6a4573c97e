//! The per-invocation context handed to command handlers.
//!
//! A [`Context`] owns the [`Invocation`] being dispatched and everything a handler
//! may produce along the way: named argument bindings and log messages. Nothing on
//! it outlives the dispatch, so two dispatches never see each other's state.

use crate::config::AppConfig;
use crate::error::Result;
use crate::help::{HelpContext, HelpRenderer};
use crate::invocation::{Invocation, OptionValue};
use crate::message::{Message, MessageLevel};
use crate::registry::CommandRegistry;
use crate::validate;
use serde::Serialize;
use std::collections::BTreeMap;

pub struct Context<'a> {
    invocation: Invocation,
    config: &'a AppConfig,
    registry: &'a CommandRegistry,
    help: &'a HelpRenderer,
    messages: Vec<Message>,
    step: usize,
}

impl<'a> Context<'a> {
    pub fn new(
        invocation: Invocation,
        config: &'a AppConfig,
        registry: &'a CommandRegistry,
        help: &'a HelpRenderer,
    ) -> Self {
        Self {
            invocation,
            config,
            registry,
            help,
            messages: Vec::new(),
            step: 1,
        }
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn config(&self) -> &AppConfig {
        self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    pub fn command(&self) -> &str {
        self.invocation.command()
    }

    pub fn args(&self) -> &[String] {
        self.invocation.positional_args()
    }

    pub fn opts(&self) -> &BTreeMap<String, OptionValue> {
        self.invocation.options()
    }

    pub fn opt(&self, key: &str) -> Option<&OptionValue> {
        self.invocation.option(key)
    }

    pub fn named_arg(&self, name: &str) -> Option<&str> {
        self.invocation.named_arg(name)
    }

    /// See [`validate::require_args`].
    pub fn require_args(&mut self, names: &[&str]) -> Result<()> {
        validate::require_args(&mut self.invocation, names)
    }

    /// See [`validate::require_opts`].
    pub fn require_opts(&self, names: &[&str]) -> Result<()> {
        validate::require_opts(&self.invocation, names)
    }

    pub fn log(&mut self, content: impl Into<String>) {
        self.messages.push(Message::plain(content));
    }

    pub fn log_info(&mut self, content: impl Into<String>) {
        self.messages.push(Message::info(content));
    }

    pub fn log_success(&mut self, content: impl Into<String>) {
        self.messages.push(Message::success(content));
    }

    pub fn log_warning(&mut self, content: impl Into<String>) {
        self.messages.push(Message::warning(content));
    }

    pub fn log_failure(&mut self, content: impl Into<String>) {
        self.messages.push(Message::failure(content));
    }

    /// Logs a numbered progress line; numbering starts at 1 for each invocation.
    pub fn log_step(&mut self, content: &str) {
        self.messages.push(Message::step(self.step, content));
        self.step += 1;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn has_failures(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Failure)
    }

    /// Template data describing this invocation and the registered commands.
    pub fn help_context(&self) -> HelpContext<'_> {
        HelpContext::new(self.config, &self.invocation, &self.registry.specs())
    }

    /// Renders a template source with the help filters (`primary`, `accent`, ...).
    pub fn render<T: Serialize>(&self, source: &str, data: &T) -> Result<String> {
        self.help.render_str(source, data)
    }

    /// Renders a template file found under the base path.
    pub fn render_file<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.help.render_file(name, data)
    }

    pub(crate) fn render_general_help(&self) -> Result<String> {
        self.help.render_general(&self.help_context())
    }

    pub(crate) fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
