//! # consolar-styles - Themed help templates
//!
//! Renders help screens and other console text from Jinja2 templates (via minijinja)
//! with named styles applied through template filters.
//!
//! Templates never contain ANSI codes. Styles live in a [`Theme`] and are applied by
//! filter:
//!
//! ```jinja
//! {{ name | primary }} {{ version | secondary }}
//!
//! {{ "Usage:" | style("secondary") }}
//!   {{ "cmd" | accent }} [options]
//!
//! {{ "-h, --help" | color("green.bold") }}
//! ```
//!
//! - `style("name")` applies a theme style by name.
//! - every theme style is also registered as a filter of the same name, so
//!   `{{ x | primary }}` and `{{ x | style("primary") }}` are equivalent.
//! - `color("spec")` applies an ad-hoc style using console's dotted syntax
//!   (`"cyan"`, `"red.bold"`, `"on_blue.white"`).
//!
//! When color is off (piped output, `NO_COLOR`, an explicit override) every filter
//! returns plain text. Unknown style names are prefixed with an indicator (`(!?)` by
//! default) so typos in templates show up.
//!
//! ## Quick Example
//!
//! ```rust
//! use consolar_styles::{render_with_color, Theme};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data {
//!     name: String,
//! }
//!
//! let theme = Theme::new().add("primary", Style::new().cyan());
//! let output = render_with_color(
//!     "Welcome to {{ name | primary }}",
//!     &Data { name: "myapp".into() },
//!     &theme,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(output, "Welcome to myapp");
//! ```

use console::{Style, Term};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

pub use minijinja::Error as TemplateError;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles.
///
/// When a style name is not found, a configurable indicator is prepended to the text
/// (defaults to `(!?)`).
///
/// ```rust
/// use consolar_styles::Styles;
/// use console::Style;
///
/// let styles = Styles::new().add("failure", Style::new().red());
///
/// let unknown = styles.apply_plain("typo", "Hello");
/// assert_eq!(unknown, "(!?) Hello");
/// ```
#[derive(Clone)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator prepended when a style name is not found.
    /// An empty indicator disables the marker.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style, replacing any style with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style with ANSI codes.
    ///
    /// Callers only reach this once color has been decided on, so terminal detection
    /// inside `console` is bypassed.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => self.mark_missing(text),
        }
    }

    /// Applies style checking without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.mark_missing(text)
        }
    }

    fn mark_missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Names of all registered styles, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.styles.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A named collection of styles used when rendering templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// Returns true when stdout can display colors.
pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders a template with automatic terminal color detection.
pub fn render<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
) -> Result<String, TemplateError> {
    render_with_color(template, data, theme, colors_supported())
}

/// Renders a template with explicit color control.
///
/// ```rust
/// use consolar_styles::{render_with_color, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { status: String }
///
/// let theme = Theme::new().add("success", Style::new().green());
/// let plain = render_with_color(
///     r#"{{ status | style("success") }}"#,
///     &Data { status: "done".into() },
///     &theme,
///     false,
/// ).unwrap();
/// assert_eq!(plain, "done");
/// ```
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, TemplateError> {
    let mut env = Environment::new();
    register_filters(&mut env, theme, use_color);
    env.render_str(template, data)
}

/// A renderer holding a configured template environment.
///
/// Templates come from two places: ones registered with [`Renderer::add_template`]
/// and, when a directory is set with [`Renderer::with_template_dir`], files looked up
/// by relative path. Registered templates win over files with the same name.
///
/// ```rust
/// use consolar_styles::{Renderer, Theme};
/// use console::Style;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Help { name: String }
///
/// let theme = Theme::new().add("primary", Style::new().cyan());
/// let mut renderer = Renderer::with_color(theme, false);
/// renderer.add_template("help.txt", "{{ name | primary }} help").unwrap();
///
/// let out = renderer.render("help.txt", &Help { name: "app".into() }).unwrap();
/// assert_eq!(out, "app help");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with automatic color detection.
    pub fn new(theme: Theme) -> Self {
        Self::with_color(theme, colors_supported())
    }

    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, &theme, use_color);
        Self { env }
    }

    /// Looks up unregistered template names as files relative to `dir`.
    pub fn with_template_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.env
            .set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
        self
    }

    /// Registers a named template. Syntax errors are reported immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), TemplateError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered or loadable template by name.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Renders a one-off template source with the same filters.
    pub fn render_str<T: Serialize>(
        &self,
        source: &str,
        data: &T,
    ) -> Result<String, TemplateError> {
        self.env.render_str(source, data)
    }
}

fn register_filters(env: &mut Environment<'static>, theme: &Theme, use_color: bool) {
    let styles = theme.styles.clone();
    let lookup = styles.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        paint(&lookup, &name, &value.to_string(), use_color)
    });

    for name in styles.names() {
        let named = styles.clone();
        let style_name = name.clone();
        env.add_filter(name, move |value: Value| -> String {
            paint(&named, &style_name, &value.to_string(), use_color)
        });
    }

    env.add_filter("color", move |value: Value, spec: String| -> String {
        let text = value.to_string();
        if use_color {
            Style::from_dotted_str(&spec)
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text
        }
    });
}

fn paint(styles: &Styles, name: &str, text: &str, use_color: bool) -> String {
    if use_color {
        styles.apply(name, text)
    } else {
        // missing styles are still flagged without color
        styles.apply_plain(name, text)
    }
}
