//! Translates command names into handler identifiers.
//!
//! Commands may carry one level of namespace, `generate:password`. The separator is
//! rewritten to the configured style and the module prefix put in front:
//!
//! | Command                         | Dash                      | Path                      |
//! |---------------------------------|---------------------------|---------------------------|
//! | `list`                          | `myapp-list`              | `myapp-list`              |
//! | `generate:password`             | `myapp-generate-password` | `myapp-generate/password` |
//! | `myapp-generate:password`       | `myapp-generate-password` | `myapp-generate/password` |
//!
//! The last row shows prefix stripping: a command typed with the prefix already on
//! it resolves to the same identifier instead of a doubled prefix.

use tracing::trace;

/// Separator between a namespace and a command name.
pub const NAMESPACE_SEPARATOR: char = ':';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    /// `generate:password` → `generate-password`
    #[default]
    Dash,
    /// `generate:password` → `generate/password`
    Path,
}

impl SeparatorStyle {
    fn replacement(&self) -> &'static str {
        match self {
            SeparatorStyle::Dash => "-",
            SeparatorStyle::Path => "/",
        }
    }
}

/// How the prefix is removed from a command before it is prefixed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMatch {
    /// Only a prefix at the very start is removed.
    #[default]
    Anchored,
    /// The first occurrence anywhere in the name is removed.
    FirstOccurrence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub raw_command: String,
    /// Command with separators rewritten and the prefix removed.
    pub module_path: String,
    /// `prefix + module_path`, the registry key.
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolver {
    prefix: String,
    style: SeparatorStyle,
    matching: PrefixMatch,
}

impl Resolver {
    pub fn new(prefix: impl Into<String>, style: SeparatorStyle, matching: PrefixMatch) -> Self {
        Self {
            prefix: prefix.into(),
            style,
            matching,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resolve(&self, command: &str) -> Resolution {
        let transformed = if command.contains(NAMESPACE_SEPARATOR) {
            command.replace(NAMESPACE_SEPARATOR, self.style.replacement())
        } else {
            command.to_string()
        };

        let module_path = self.strip_prefix(transformed);
        let identifier = format!("{}{}", self.prefix, module_path);
        trace!(command, identifier = %identifier, "resolved command");

        Resolution {
            raw_command: command.to_string(),
            module_path,
            identifier,
        }
    }

    fn strip_prefix(&self, name: String) -> String {
        if self.prefix.is_empty() {
            return name;
        }
        match self.matching {
            PrefixMatch::Anchored => match name.strip_prefix(self.prefix.as_str()) {
                Some(rest) => rest.to_string(),
                None => name,
            },
            PrefixMatch::FirstOccurrence => name.replacen(self.prefix.as_str(), "", 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dash(prefix: &str) -> Resolver {
        Resolver::new(prefix, SeparatorStyle::Dash, PrefixMatch::Anchored)
    }

    #[test]
    fn test_plain_command() {
        let r = dash("myapp-").resolve("list");
        assert_eq!(r.module_path, "list");
        assert_eq!(r.identifier, "myapp-list");
        assert_eq!(r.raw_command, "list");
    }

    #[test]
    fn test_namespaced_dash() {
        let r = dash("myapp-").resolve("generate:password");
        assert_eq!(r.module_path, "generate-password");
        assert_eq!(r.identifier, "myapp-generate-password");
    }

    #[test]
    fn test_namespaced_path() {
        let resolver = Resolver::new("myapp-", SeparatorStyle::Path, PrefixMatch::Anchored);
        assert_eq!(
            resolver.resolve("generate:password").identifier,
            "myapp-generate/password"
        );
    }

    #[test]
    fn test_every_separator_replaced() {
        assert_eq!(dash("x-").resolve("a:b:c").identifier, "x-a-b-c");
    }

    #[test]
    fn test_prefix_not_doubled() {
        let r = dash("myapp-").resolve("myapp-generate:password");
        assert_eq!(r.identifier, "myapp-generate-password");
    }

    #[test]
    fn test_anchored_ignores_inner_prefix() {
        let r = dash("app-").resolve("web:app-server");
        assert_eq!(r.identifier, "app-web-app-server");
    }

    #[test]
    fn test_first_occurrence_strips_inner_prefix() {
        let resolver = Resolver::new("app-", SeparatorStyle::Dash, PrefixMatch::FirstOccurrence);
        let r = resolver.resolve("web:app-server");
        assert_eq!(r.module_path, "web-server");
        assert_eq!(r.identifier, "app-web-server");
    }

    #[test]
    fn test_empty_prefix() {
        let r = dash("").resolve("gen:pwd");
        assert_eq!(r.identifier, "gen-pwd");
    }

    #[test]
    fn test_resolution_is_pure() {
        let resolver = dash("myapp-");
        assert_eq!(resolver.resolve("a:b"), resolver.resolve("a:b"));
    }
}
