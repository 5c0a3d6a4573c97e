use consolar::help::HelpContext;
use consolar::{Command, ConsolarError, Context, Result};
use serde::Serialize;

const DEFAULT_MIN_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 12;

const CHECK_HELP: &str = include_str!("templates/check.txt");
const COMPARE_HELP: &str = include_str!("templates/compare.txt");
const POLICY_HELP: &str = include_str!("templates/policy.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Weak,
    Fair,
    Strong,
}

impl Rating {
    fn label(&self) -> &'static str {
        match self {
            Rating::Weak => "weak",
            Rating::Fair => "fair",
            Rating::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strength {
    pub rating: Rating,
    pub problems: Vec<String>,
}

/// Kinds of characters present: lowercase, uppercase, digits, everything else.
fn character_classes(password: &str) -> usize {
    let checks: [fn(&char) -> bool; 4] = [
        |c| c.is_lowercase(),
        |c| c.is_uppercase(),
        |c| c.is_ascii_digit(),
        |c| !c.is_alphanumeric(),
    ];
    checks
        .iter()
        .filter(|check| password.chars().any(|c| check(&c)))
        .count()
}

pub fn rate(password: &str, min_length: usize) -> Strength {
    let length = password.chars().count();
    let classes = character_classes(password);
    let mut problems = Vec::new();

    if length < min_length {
        problems.push(format!("shorter than {} characters", min_length));
    }
    if classes < 2 {
        problems.push("uses only one kind of character".to_string());
    }

    let rating = if !problems.is_empty() {
        Rating::Weak
    } else if classes >= 3 && length >= STRONG_LENGTH.max(min_length) {
        Rating::Strong
    } else {
        Rating::Fair
    };

    Strength { rating, problems }
}

fn whole_number(ctx: &Context<'_>, key: &str) -> Result<Option<usize>> {
    match ctx.opt(key) {
        None => Ok(None),
        Some(value) => value.as_usize().map(Some).ok_or_else(|| {
            ConsolarError::command(format!("--{} must be a whole number, got {}", key, value))
        }),
    }
}

#[derive(Serialize)]
struct CheckHelp<'a> {
    #[serde(flatten)]
    base: HelpContext<'a>,
    default_min_length: usize,
}

pub struct Check;

impl Command for Check {
    fn run(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.require_args(&["password"])?;
        let min_length = whole_number(ctx, "min-length")?.unwrap_or(DEFAULT_MIN_LENGTH);
        let password = ctx.named_arg("password").unwrap_or_default().to_string();

        ctx.log_step("Checking length");
        ctx.log_step("Checking character classes");
        let strength = rate(&password, min_length);

        if strength.rating == Rating::Weak {
            return Err(ConsolarError::command(format!(
                "Password is weak: {}.",
                strength.problems.join(", ")
            )));
        }

        ctx.log_success(format!("Password is {}.", strength.rating.label()));
        Ok(())
    }

    fn render_help(&self, ctx: &Context<'_>) -> Result<String> {
        let data = CheckHelp {
            base: ctx.help_context(),
            default_min_length: DEFAULT_MIN_LENGTH,
        };
        ctx.render(CHECK_HELP, &data)
    }
}

pub struct Compare;

impl Command for Compare {
    fn run(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.require_args(&["password", "confirmation"])?;

        if ctx.named_arg("password") != ctx.named_arg("confirmation") {
            return Err(ConsolarError::command("Passwords do not match."));
        }
        ctx.log_success("Passwords match.");
        Ok(())
    }

    fn render_help(&self, ctx: &Context<'_>) -> Result<String> {
        ctx.render(COMPARE_HELP, &ctx.help_context())
    }
}

pub struct Policy;

impl Command for Policy {
    fn run(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        ctx.require_opts(&["min-length", "classes"])?;
        let min_length = whole_number(ctx, "min-length")?.unwrap_or(DEFAULT_MIN_LENGTH);
        let classes = whole_number(ctx, "classes")?.unwrap_or(1);

        if !(1..=4).contains(&classes) {
            return Err(ConsolarError::command("--classes must be between 1 and 4"));
        }
        if classes > min_length {
            ctx.log_warning("More character kinds are required than the minimum length allows.");
        }
        ctx.log_info(format!(
            "Passwords need at least {} characters from {} kind(s) of characters.",
            min_length, classes
        ));
        Ok(())
    }

    fn render_help(&self, ctx: &Context<'_>) -> Result<String> {
        ctx.render(POLICY_HELP, &ctx.help_context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_classes() {
        assert_eq!(character_classes("abc"), 1);
        assert_eq!(character_classes("abC"), 2);
        assert_eq!(character_classes("abC1"), 3);
        assert_eq!(character_classes("abC1!"), 4);
        assert_eq!(character_classes(""), 0);
    }

    #[test]
    fn test_short_password_is_weak() {
        let strength = rate("aB3$", DEFAULT_MIN_LENGTH);
        assert_eq!(strength.rating, Rating::Weak);
        assert_eq!(strength.problems, vec!["shorter than 8 characters"]);
    }

    #[test]
    fn test_single_class_is_weak() {
        let strength = rate("abcdefghijkl", DEFAULT_MIN_LENGTH);
        assert_eq!(strength.rating, Rating::Weak);
        assert_eq!(strength.problems, vec!["uses only one kind of character"]);
    }

    #[test]
    fn test_fair_and_strong() {
        assert_eq!(rate("abcdefG1", DEFAULT_MIN_LENGTH).rating, Rating::Fair);
        assert_eq!(rate("abcdefG1!xyz", DEFAULT_MIN_LENGTH).rating, Rating::Strong);
    }

    #[test]
    fn test_min_length_override() {
        assert_eq!(rate("aB3$", 4).rating, Rating::Fair);
    }
}
