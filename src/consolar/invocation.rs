//! # Invocations
//!
//! An [`Invocation`] is one console call after tokenizing: the command name, the
//! positional arguments that follow it and the options, keyed by lower camel case.
//!
//! ```text
//! myapp generate:password abc123 --dry-run --length=12
//!       └──── command ──┘ └args┘ └──────── options ──────┘
//!                                 dryRun = true, length = 12
//! ```
//!
//! Named arguments start empty and are filled in by
//! [`require_args`](crate::validate::require_args) as handlers declare what their
//! positionals mean.

use crate::tokenizer::Tokenizer;
use heck::ToLowerCamelCase;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;

/// Value of a single option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    Number(f64),
}

impl OptionValue {
    /// Interprets a raw value: numeric-looking text becomes a number.
    pub fn parse(raw: &str) -> Self {
        match parse_number(raw) {
            Some(n) => OptionValue::Number(n),
            None => OptionValue::Text(raw.to_string()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Non-negative integral numbers as `usize`.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            OptionValue::Number(n)
                if *n >= 0.0 && n.fract() == 0.0 && *n <= usize::MAX as f64 =>
            {
                Some(*n as usize)
            }
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Bool(b) => serializer.serialize_bool(*b),
            OptionValue::Text(s) => serializer.serialize_str(s),
            OptionValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            OptionValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

/// Parses decimal, exponent and `0x` hex numbers. Anything else is not a number.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok().map(|n| n as f64);
    }
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    if !raw.chars().any(|c| c.is_ascii_digit()) || !raw.chars().all(allowed) {
        return None;
    }
    raw.parse::<f64>().ok()
}

const MAX_CANONICAL_PASSES: usize = 4;

/// Canonical form of an option key: lower camel case.
///
/// `dry-run`, `dry_run`, `DRY_RUN` and `dryRun` all become `dryRun`, and applying it
/// twice changes nothing.
///
/// One pass is not a fixed point for runs of one-letter words: `a-b-c` gives `aBC`,
/// and `aBC` gives `aBc`. The conversion is repeated until it settles.
pub fn canonicalize(key: &str) -> String {
    let mut current = key.to_lower_camel_case();
    for _ in 0..MAX_CANONICAL_PASSES {
        let next = current.to_lower_camel_case();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// One parsed console call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    command: String,
    positional_args: Vec<String>,
    options: BTreeMap<String, OptionValue>,
    named_args: BTreeMap<String, String>,
}

impl Invocation {
    /// The first positional token, empty when none was given.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }

    /// Positional tokens after the command, in input order.
    pub fn positional_args(&self) -> &[String] {
        &self.positional_args
    }

    pub fn options(&self) -> &BTreeMap<String, OptionValue> {
        &self.options
    }

    /// Looks up an option by any spelling of its key.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(&canonicalize(key))
    }

    pub fn has_option(&self, key: &str) -> bool {
        self.option(key).is_some()
    }

    /// True when any of the keys was given and not switched off with `--no-<key>`
    /// or `=false`.
    pub fn any_flag(&self, keys: &[&str]) -> bool {
        keys.iter()
            .filter_map(|key| self.option(key))
            .any(|value| value != &OptionValue::Bool(false))
    }

    pub fn named_args(&self) -> &BTreeMap<String, String> {
        &self.named_args
    }

    pub fn named_arg(&self, name: &str) -> Option<&str> {
        self.named_args.get(name).map(String::as_str)
    }

    pub(crate) fn bind(&mut self, name: &str, value: String) {
        self.named_args.insert(name.to_string(), value);
    }
}

/// Builds [`Invocation`]s from raw tokens.
#[derive(Debug, Clone, Default)]
pub struct InvocationBuilder {
    tokenizer: Tokenizer,
    pinned: Option<String>,
}

impl InvocationBuilder {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            pinned: None,
        }
    }

    /// Forces `command` for single-purpose apps: the pinned name is put in front of
    /// whatever positionals the user typed.
    pub fn pinned(mut self, command: impl Into<String>) -> Self {
        self.pinned = Some(command.into());
        self
    }

    pub fn build<I, S>(&self, raw: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let tokens = self.tokenizer.tokenize(raw);

        let mut positionals = tokens.positionals.into_iter();
        let pinned = self.pinned.clone();
        let command = match pinned {
            Some(name) => name,
            None => positionals.next().unwrap_or_default(),
        };

        let mut options = BTreeMap::new();
        for (key, value) in tokens.options {
            options.insert(canonicalize(&key), value);
        }

        Invocation {
            command,
            positional_args: positionals.collect(),
            options,
            named_args: BTreeMap::new(),
        }
    }
}
