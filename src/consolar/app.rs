use crate::command::Command;
use crate::config::{AppConfig, ColorChoice};
use crate::dispatch::{Dispatcher, Report};
use crate::error::Result;
use crate::help::HelpRenderer;
use crate::invocation::Invocation;
use crate::print::print_report;
use crate::registry::CommandRegistry;
use crate::theme::CONSOLAR_THEME;
use consolar_styles::Theme;
use std::ffi::OsString;
use tracing::warn;

/// A console application: configuration plus registered commands.
///
/// ```rust,no_run
/// use consolar::{AppConfig, Consolar};
/// # use consolar::{Command, Context, Result};
/// # struct Check;
/// # impl Command for Check {
/// #     fn run(&mut self, _ctx: &mut Context<'_>) -> Result<()> { Ok(()) }
/// #     fn render_help(&self, _ctx: &Context<'_>) -> Result<String> { Ok(String::new()) }
/// # }
///
/// let app = Consolar::new(AppConfig::new("MyApp").version("1.0.0"))
///     .unwrap()
///     .command("pwd:check", "Rate a password", || Check);
/// std::process::exit(app.run() as i32);
/// ```
pub struct Consolar {
    config: AppConfig,
    registry: CommandRegistry,
    help: HelpRenderer,
}

impl Consolar {
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_theme(config, CONSOLAR_THEME.clone())
    }

    /// Uses `theme` instead of the default styles in help templates.
    pub fn with_theme(config: AppConfig, theme: Theme) -> Result<Self> {
        let help = HelpRenderer::new(&config, theme)?;
        let registry = CommandRegistry::new(config.resolver());
        Ok(Self {
            config,
            registry,
            help,
        })
    }

    /// Registers a command, builder style.
    pub fn command<F, C>(mut self, name: &str, summary: &str, factory: F) -> Self
    where
        F: Fn() -> C + 'static,
        C: Command + 'static,
    {
        self.register(name, summary, factory);
        self
    }

    pub fn register<F, C>(&mut self, name: &str, summary: &str, factory: F)
    where
        F: Fn() -> C + 'static,
        C: Command + 'static,
    {
        self.registry.register(name, summary, factory);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn invocation<I, S>(&self, raw: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.config.invocation_builder().build(raw)
    }

    /// Parses and dispatches `raw` without touching the terminal.
    pub fn dispatch<I, S>(&self, raw: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.dispatch_invocation(self.invocation(raw))
    }

    pub fn dispatch_invocation(&self, invocation: Invocation) -> Report {
        Dispatcher::new(&self.config, &self.registry, &self.help).dispatch(invocation)
    }

    /// Dispatches the configured input (or the process arguments), prints the report
    /// and returns the exit code.
    pub fn run(&self) -> u8 {
        match self.config.color {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }

        let report = self.dispatch(self.config.input());
        if let Err(e) = print_report(&report) {
            warn!(error = %e, "could not write output");
        }
        report.exit_code()
    }
}
