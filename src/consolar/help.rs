//! Help screen rendering.
//!
//! The general help screen is the template `help.txt`, found under the configured
//! base path or supplied inline through
//! [`AppConfig::help_template`](crate::config::AppConfig::help_template). Command help
//! is whatever the handler renders, usually an inline template through
//! [`Context::render`](crate::context::Context::render).
//!
//! Both see the same [`HelpContext`]:
//!
//! ```jinja
//! {{ name | primary }} {{ version | secondary }}
//!
//! {{ "Commands:" | secondary }}
//! {% for c in commands %}  {{ c.label | accent }}  {{ c.summary }}
//! {% endfor %}
//! ```

use crate::config::AppConfig;
use crate::error::Result;
use crate::invocation::{Invocation, OptionValue};
use crate::registry::CommandSpec;
use consolar_styles::{Renderer, Theme};
use serde::Serialize;
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

pub const HELP_TEMPLATE: &str = "help.txt";

/// One row of the command listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    /// Name padded to the widest name in the listing.
    pub label: String,
    pub summary: String,
}

/// Data available to help templates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpContext<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub cmd: &'a str,
    pub args: &'a [String],
    pub opts: &'a BTreeMap<String, OptionValue>,
    pub named_args: &'a BTreeMap<String, String>,
    pub commands: Vec<CommandEntry>,
}

impl<'a> HelpContext<'a> {
    pub fn new(config: &'a AppConfig, invocation: &'a Invocation, specs: &[CommandSpec]) -> Self {
        Self {
            name: &config.name,
            version: &config.version,
            cmd: invocation.command(),
            args: invocation.positional_args(),
            opts: invocation.options(),
            named_args: invocation.named_args(),
            commands: command_entries(specs),
        }
    }
}

fn command_entries(specs: &[CommandSpec]) -> Vec<CommandEntry> {
    let width = specs
        .iter()
        .map(|spec| spec.name.width())
        .max()
        .unwrap_or(0);

    specs
        .iter()
        .map(|spec| {
            let pad = width - spec.name.width();
            CommandEntry {
                name: spec.name.clone(),
                label: format!("{}{}", spec.name, " ".repeat(pad)),
                summary: spec.summary.clone(),
            }
        })
        .collect()
}

pub struct HelpRenderer {
    renderer: Renderer,
}

impl HelpRenderer {
    pub fn new(config: &AppConfig, theme: Theme) -> Result<Self> {
        let mut renderer = Renderer::with_color(theme, config.color.use_color())
            .with_template_dir(&config.base_path);
        if let Some(source) = &config.help_template {
            renderer.add_template(HELP_TEMPLATE, source)?;
        }
        Ok(Self { renderer })
    }

    pub fn render_general(&self, context: &HelpContext<'_>) -> Result<String> {
        Ok(self.renderer.render(HELP_TEMPLATE, context)?)
    }

    /// Renders a template source with the help filters.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String> {
        Ok(self.renderer.render_str(source, data)?)
    }

    /// Renders a template file relative to the base path.
    pub fn render_file<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.renderer.render(name, data)?)
    }
}
