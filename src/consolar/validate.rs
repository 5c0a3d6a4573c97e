//! Required argument and option checks.
//!
//! Both checks look at every requirement before failing, so the user sees the full
//! list of what is missing in one go.

use crate::error::{ConsolarError, Result};
use crate::invocation::Invocation;

/// Binds positional arguments to names, in order.
///
/// `names[i]` is bound to the i-th positional. A missing or empty positional is
/// reported; present ones are still bound so callers can inspect them.
pub fn require_args(invocation: &mut Invocation, names: &[&str]) -> Result<()> {
    let mut missing = Vec::new();

    for (i, name) in names.iter().enumerate() {
        match invocation.positional_args().get(i) {
            Some(value) if !value.is_empty() => {
                let value = value.clone();
                invocation.bind(name, value);
            }
            _ => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConsolarError::MissingArguments(missing))
    }
}

/// Checks that every named option was given. Names may use any spelling.
pub fn require_opts(invocation: &Invocation, names: &[&str]) -> Result<()> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| !invocation.has_option(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConsolarError::MissingOptions(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::InvocationBuilder;

    fn build(raw: &[&str]) -> Invocation {
        InvocationBuilder::default().build(raw.iter().copied())
    }

    #[test]
    fn test_all_args_present() {
        let mut inv = build(&["pwd:check", "hunter2", "12"]);
        require_args(&mut inv, &["password", "length"]).unwrap();
        assert_eq!(inv.named_arg("password"), Some("hunter2"));
        assert_eq!(inv.named_arg("length"), Some("12"));
    }

    #[test]
    fn test_one_of_two_missing() {
        let mut inv = build(&["pwd:check", "hunter2"]);
        let err = require_args(&mut inv, &["password", "length"]).unwrap_err();

        assert!(matches!(err, ConsolarError::MissingArguments(_)));
        assert_eq!(err.missing(), &["length"]);
        assert_eq!(inv.named_arg("password"), Some("hunter2"));
        assert_eq!(inv.named_arg("length"), None);
    }

    #[test]
    fn test_reports_every_missing_arg() {
        let mut inv = build(&["cmd"]);
        let err = require_args(&mut inv, &["a", "b", "c"]).unwrap_err();
        assert_eq!(err.missing(), &["a", "b", "c"]);
        assert!(inv.named_args().is_empty());
    }

    #[test]
    fn test_empty_positional_counts_as_missing() {
        let mut inv = build(&["cmd", "", "x"]);
        let err = require_args(&mut inv, &["first", "second"]).unwrap_err();
        assert_eq!(err.missing(), &["first"]);
        assert_eq!(inv.named_arg("second"), Some("x"));
    }

    #[test]
    fn test_no_requirements() {
        let mut inv = build(&[]);
        require_args(&mut inv, &[]).unwrap();
        require_opts(&inv, &[]).unwrap();
    }

    #[test]
    fn test_opts_present_in_any_spelling() {
        let inv = build(&["cmd", "--dry-run", "--min-length=3"]);
        require_opts(&inv, &["dryRun", "min_length"]).unwrap();
    }

    #[test]
    fn test_reports_every_missing_opt() {
        let inv = build(&["cmd", "--token=abc"]);
        let err = require_opts(&inv, &["user", "token", "host"]).unwrap_err();
        assert!(matches!(err, ConsolarError::MissingOptions(_)));
        assert_eq!(err.missing(), &["user", "host"]);
    }

    #[test]
    fn test_false_flag_counts_as_given() {
        let inv = build(&["cmd", "--no-cache"]);
        require_opts(&inv, &["cache"]).unwrap();
    }
}
