//! Splits raw console tokens into positionals and options.
//!
//! Lexing is done by `clap_lex`; this module only decides what each token means.
//! Options are returned in input order with their keys as typed, canonicalization is
//! the [`InvocationBuilder`](crate::invocation::InvocationBuilder)'s job.
//!
//! | Input              | Result                                   |
//! |--------------------|------------------------------------------|
//! | `--key=value`      | `key = value`                            |
//! | `--key value`      | `key = value` (unless `key` is boolean)  |
//! | `--key`            | `key = true`                             |
//! | `--no-key`         | `key = false`                            |
//! | `-abc`             | `a = true, b = true, c = true`           |
//! | `-n5`, `-n=5`      | `n = 5`                                  |
//! | `--`               | everything after is positional           |
//! | `-`                | positional                               |

use crate::invocation::{canonicalize, parse_number, OptionValue};
use clap_lex::{ArgCursor, ParsedArg, RawArgs};
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

/// Flags that never consume the following token.
pub const DEFAULT_BOOLEAN_FLAGS: &[&str] = &["h", "help", "v", "version"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokens {
    pub positionals: Vec<String>,
    pub options: Vec<(String, OptionValue)>,
}

impl Tokens {
    fn push(&mut self, key: impl Into<String>, value: OptionValue) {
        self.options.push((key.into(), value));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    booleans: BTreeSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_BOOLEAN_FLAGS.iter().copied())
    }
}

impl Tokenizer {
    pub fn new<I, S>(booleans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            booleans: booleans
                .into_iter()
                .map(|flag| canonicalize(&Into::<String>::into(flag)))
                .collect(),
        }
    }

    /// Matches `key` in any spelling, like option lookups on the invocation.
    pub fn is_boolean(&self, key: &str) -> bool {
        self.booleans.contains(&canonicalize(key))
    }

    pub fn tokenize<I, S>(&self, raw: I) -> Tokens
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let raw = RawArgs::new(raw);
        let mut cursor = raw.cursor();
        let mut tokens = Tokens::default();

        while let Some(arg) = raw.next(&mut cursor) {
            if arg.is_escape() {
                tokens
                    .positionals
                    .extend(raw.remaining(&mut cursor).map(lossy));
                break;
            }

            if let Some((key, inline)) = arg.to_long() {
                let key = match key {
                    Ok(key) => key.to_string(),
                    Err(os) => lossy(os),
                };
                match inline {
                    Some(value) => {
                        let value = self.inline_value(&key, &lossy(value));
                        tokens.push(key, value);
                    }
                    None => match key.strip_prefix("no-") {
                        Some(negated) if !negated.is_empty() => {
                            tokens.push(negated, OptionValue::Bool(false))
                        }
                        _ => {
                            let value = self.trailing_value(&key, &raw, &mut cursor);
                            tokens.push(key, value);
                        }
                    },
                }
                continue;
            }

            if arg.is_short() && !arg.is_negative_number() {
                let cluster = lossy(arg.to_value_os());
                self.read_short_cluster(&cluster[1..], &raw, &mut cursor, &mut tokens);
                continue;
            }

            tokens.positionals.push(lossy(arg.to_value_os()));
        }

        tokens
    }

    /// `-abc`, `-n5`, `-k=v`, `-a.b`: every letter but the last is a flag unless
    /// what follows it reads as a value.
    fn read_short_cluster(
        &self,
        cluster: &str,
        raw: &RawArgs,
        cursor: &mut ArgCursor,
        tokens: &mut Tokens,
    ) {
        let letters: Vec<char> = cluster.chars().collect();
        let Some((&last, leading)) = letters.split_last() else {
            return;
        };

        for (i, &letter) in leading.iter().enumerate() {
            let rest: String = letters[i + 1..].iter().collect();
            let key = letter.to_string();

            if let Some(value) = rest.strip_prefix('=') {
                let value = self.inline_value(&key, value);
                tokens.push(key, value);
                return;
            }
            if letter.is_ascii_alphabetic() && parse_number(&rest).is_some() {
                tokens.push(key, OptionValue::parse(&rest));
                return;
            }
            let next = letters[i + 1];
            if !(next.is_alphanumeric() || next == '_') {
                tokens.push(key, OptionValue::Text(rest));
                return;
            }
            tokens.push(key, OptionValue::Bool(true));
        }

        let key = last.to_string();
        let value = self.trailing_value(&key, raw, cursor);
        tokens.push(key, value);
    }

    fn inline_value(&self, key: &str, value: &str) -> OptionValue {
        if self.is_boolean(key) {
            OptionValue::Bool(value != "false")
        } else {
            OptionValue::parse(value)
        }
    }

    /// Value for a flag written without `=`: the next token when it is not a flag.
    fn trailing_value(&self, key: &str, raw: &RawArgs, cursor: &mut ArgCursor) -> OptionValue {
        let Some(next) = raw.peek(cursor) else {
            return OptionValue::Bool(true);
        };

        if self.is_boolean(key) {
            let literal = next.to_value().ok().and_then(|v| match v {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            });
            return match literal {
                Some(b) => {
                    raw.next(cursor);
                    OptionValue::Bool(b)
                }
                None => OptionValue::Bool(true),
            };
        }

        if is_value(&next) {
            let value = lossy(next.to_value_os());
            raw.next(cursor);
            OptionValue::parse(&value)
        } else {
            OptionValue::Bool(true)
        }
    }
}

fn is_value(arg: &ParsedArg<'_>) -> bool {
    arg.is_stdio()
        || arg.is_negative_number()
        || !(arg.is_escape() || arg.is_long() || arg.is_short())
}

fn lossy(os: &OsStr) -> String {
    os.to_string_lossy().into_owned()
}
