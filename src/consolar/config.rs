use crate::invocation::InvocationBuilder;
use crate::resolver::{PrefixMatch, Resolver, SeparatorStyle};
use crate::tokenizer::{Tokenizer, DEFAULT_BOOLEAN_FLAGS};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const DEFAULT_NAME: &str = "Consolar";
const PREFIX_CHAR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn use_color(&self) -> bool {
        match self {
            ColorChoice::Auto => consolar_styles::colors_supported(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Settings supplied when an application is constructed.
///
/// Built in code: start from [`AppConfig::new`] and chain setters.
///
/// ```rust
/// use consolar::config::AppConfig;
///
/// let config = AppConfig::new("MyApp")
///     .version("1.4.0")
///     .base_path("share/myapp");
/// assert_eq!(config.module_prefix(), "myapp-");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    /// Directory holding `help.txt`.
    pub base_path: PathBuf,
    /// Raw tokens to parse instead of the process arguments.
    pub console_input: Option<Vec<String>>,
    /// Identifier prefix; the lower-cased name when unset.
    pub command_prefix: Option<String>,
    pub separator: SeparatorStyle,
    pub prefix_match: PrefixMatch,
    /// Forces every invocation onto one command.
    pub pinned_command: Option<String>,
    /// Flags that never take the following token as their value.
    pub boolean_flags: Vec<String>,
    pub color: ColorChoice,
    /// General help template source, used instead of `base_path/help.txt`.
    pub help_template: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            base_path: PathBuf::from("."),
            console_input: None,
            command_prefix: None,
            separator: SeparatorStyle::default(),
            prefix_match: PrefixMatch::default(),
            pinned_command: None,
            boolean_flags: DEFAULT_BOOLEAN_FLAGS.iter().map(|s| s.to_string()).collect(),
            color: ColorChoice::default(),
            help_template: None,
        }
    }
}

impl AppConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn base_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_path = path.as_ref().to_path_buf();
        self
    }

    pub fn console_input<I, S>(mut self, input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.console_input = Some(input.into_iter().map(Into::into).collect());
        self
    }

    pub fn command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = Some(prefix.into());
        self
    }

    pub fn separator(mut self, style: SeparatorStyle) -> Self {
        self.separator = style;
        self
    }

    pub fn prefix_match(mut self, matching: PrefixMatch) -> Self {
        self.prefix_match = matching;
        self
    }

    pub fn pinned_command(mut self, command: impl Into<String>) -> Self {
        self.pinned_command = Some(command.into());
        self
    }

    /// Adds flags to the boolean set; the help and version flags stay boolean.
    pub fn boolean_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for flag in flags {
            let flag = flag.into();
            if !self.boolean_flags.contains(&flag) {
                self.boolean_flags.push(flag);
            }
        }
        self
    }

    pub fn color(mut self, choice: ColorChoice) -> Self {
        self.color = choice;
        self
    }

    pub fn help_template(mut self, source: impl Into<String>) -> Self {
        self.help_template = Some(source.into());
        self
    }

    /// Prefix shared by every handler identifier, always ending in `-`.
    pub fn module_prefix(&self) -> String {
        let base = self
            .command_prefix
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase());
        if base.ends_with(PREFIX_CHAR) {
            base
        } else {
            format!("{}{}", base, PREFIX_CHAR)
        }
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.module_prefix(), self.separator, self.prefix_match)
    }

    pub fn invocation_builder(&self) -> InvocationBuilder {
        let builder = InvocationBuilder::new(Tokenizer::new(self.boolean_flags.iter().cloned()));
        match &self.pinned_command {
            Some(command) => builder.pinned(command.clone()),
            None => builder,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_command.is_some()
    }

    /// Tokens to dispatch: the configured input or the process arguments.
    pub fn input(&self) -> Vec<OsString> {
        match &self.console_input {
            Some(tokens) => tokens.iter().map(OsString::from).collect(),
            None => std::env::args_os().skip(1).collect(),
        }
    }
}
