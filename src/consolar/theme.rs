use console::Style;
use consolar_styles::Theme;
use once_cell::sync::Lazy;

/// Styles available to help templates, by filter name.
pub static CONSOLAR_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("primary", Style::new().cyan())
        .add("secondary", Style::new().yellow())
        .add("accent", Style::new().green())
        .add("info", Style::new().cyan())
        .add("success", Style::new().green())
        .add("warning", Style::new().yellow())
        .add("failure", Style::new().red())
        .add("muted", Style::new().dim())
});
