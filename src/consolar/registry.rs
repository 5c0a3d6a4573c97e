//! Command registry and metadata.
//!
//! Maps handler identifiers (see [`resolver`](crate::resolver)) to factories. A
//! command registered as `generate:password` is stored under its identifier, so
//! `generate:password`, `generate-password` and `myapp-generate:password` typed on the
//! console all find it.

use crate::command::Command;
use crate::error::{ConsolarError, Result};
use crate::resolver::Resolver;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Name and one-line description of a registered command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub summary: String,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
        }
    }
}

pub type CommandFactory = Box<dyn Fn() -> Box<dyn Command>>;

struct Entry {
    spec: CommandSpec,
    factory: CommandFactory,
}

pub struct CommandRegistry {
    resolver: Resolver,
    entries: BTreeMap<String, Entry>,
}

impl CommandRegistry {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            entries: BTreeMap::new(),
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Registers a factory. A later registration resolving to the same identifier
    /// replaces the earlier one.
    pub fn register<F, C>(&mut self, name: &str, summary: &str, factory: F)
    where
        F: Fn() -> C + 'static,
        C: Command + 'static,
    {
        let identifier = self.resolver.resolve(name).identifier;
        debug!(name, identifier = %identifier, "registering command");
        let entry = Entry {
            spec: CommandSpec::new(name, summary),
            factory: Box::new(move || Box::new(factory()) as Box<dyn Command>),
        };
        if self.entries.insert(identifier, entry).is_some() {
            debug!(name, "replaced existing command");
        }
    }

    pub fn contains(&self, command: &str) -> bool {
        let identifier = self.resolver.resolve(command).identifier;
        self.entries.contains_key(&identifier)
    }

    /// Creates a fresh handler for `command`.
    pub fn load(&self, command: &str) -> Result<Box<dyn Command>> {
        let resolution = self.resolver.resolve(command);
        match self.entries.get(&resolution.identifier) {
            Some(entry) => {
                debug!(command, identifier = %resolution.identifier, "loaded command");
                Ok((entry.factory)())
            }
            None => {
                debug!(command, identifier = %resolution.identifier, "no command registered");
                Err(ConsolarError::UnsupportedCommand(command.to_string()))
            }
        }
    }

    /// Registered commands in identifier order.
    pub fn specs(&self) -> Vec<CommandSpec> {
        self.entries.values().map(|entry| entry.spec.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
