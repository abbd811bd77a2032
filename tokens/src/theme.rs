//! Theme paths, theme blocks and the custom properties they declare.

use std::collections::HashMap;
use std::fmt;

use dsfr_css::{Stylesheet, StyleRule};
use serde::Serialize;
use tracing::{debug, trace};

/// Position of a token in the nested design-token namespace,
/// e.g. `["blueFrance", "sun113_625", "hover"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ThemePath(Vec<String>);

impl ThemePath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segments joined with `.`; the form paths are compared by.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl<S: Into<String>> FromIterator<S> for ThemePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ThemePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

/// Interaction state suffix of a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorState {
    Default,
    Hover,
    Active,
}

impl ColorState {
    /// State for a trailing name segment; `None` when the segment is not a
    /// state suffix.
    pub fn from_suffix(segment: &str) -> Option<Self> {
        match segment {
            "hover" => Some(ColorState::Hover),
            "active" => Some(ColorState::Active),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorState::Default => "default",
            ColorState::Hover => "hover",
            ColorState::Active => "active",
        }
    }
}

/// Which theme a rule block defines values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Classify a rule by its selectors. `:root` and `:root[data-fr-theme=light]`
/// are light, `:root[data-fr-theme=dark]` and `[data-fr-theme=dark]` are
/// dark. Scoped selectors such as `[data-fr-theme=dark] .fr-header` belong
/// to components and are ignored.
pub fn theme_of(selectors: &[String]) -> Option<Theme> {
    let mut theme = None;
    for selector in selectors {
        let normalized: String = selector
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '"' && *c != '\'')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            ":root[data-fr-theme=dark]" | "[data-fr-theme=dark]" => return Some(Theme::Dark),
            ":root" | ":root[data-fr-theme=light]" => theme = Some(Theme::Light),
            _ => {}
        }
    }
    theme
}

/// Custom properties declared in theme blocks. Each variable keeps the
/// position of its first light declaration and the value of its last.
#[derive(Debug, Default)]
pub(crate) struct ThemeVariables {
    light: Vec<(String, String)>,
    light_index: HashMap<String, usize>,
    dark: HashMap<String, String>,
}

impl ThemeVariables {
    /// Read a stylesheet and collect its theme variables.
    pub(crate) fn collect(raw_css: &str) -> Self {
        let parsed = dsfr_css::parse_stylesheet(raw_css);
        for diagnostic in &parsed.diagnostics {
            debug!(%diagnostic, "skipping unreadable CSS");
        }
        Self::from_stylesheet(&parsed.stylesheet)
    }

    pub(crate) fn from_stylesheet(stylesheet: &Stylesheet) -> Self {
        let mut vars = Self::default();
        for rule in stylesheet.style_rules() {
            match theme_of(&rule.selectors) {
                Some(Theme::Light) => vars.add_light(rule),
                Some(Theme::Dark) => vars.add_dark(rule),
                None => {}
            }
        }
        trace!(
            light = vars.light.len(),
            dark = vars.dark.len(),
            "collected theme variables"
        );
        vars
    }

    fn add_light(&mut self, rule: &StyleRule) {
        for decl in rule.block.declarations.iter().filter(|d| d.is_custom_property()) {
            match self.light_index.get(&decl.name) {
                Some(&i) => self.light[i].1 = decl.value.clone(),
                None => {
                    self.light_index.insert(decl.name.clone(), self.light.len());
                    self.light.push((decl.name.clone(), decl.value.clone()));
                }
            }
        }
    }

    fn add_dark(&mut self, rule: &StyleRule) {
        for decl in rule.block.declarations.iter().filter(|d| d.is_custom_property()) {
            self.dark.insert(decl.name.clone(), decl.value.clone());
        }
    }

    /// Light variables as `(name, value)` in source order.
    pub(crate) fn light(&self) -> impl Iterator<Item = (&str, &str)> {
        self.light.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub(crate) fn dark_value(&self, name: &str) -> Option<&str> {
        self.dark.get(name).map(String::as_str)
    }
}

/// `["action", "high"]` -> `actionHigh`.
pub(crate) fn camel_case<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        if i == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_theme_of() {
        assert_eq!(theme_of(&selectors(&[":root"])), Some(Theme::Light));
        assert_eq!(
            theme_of(&selectors(&[":root", ":root[data-fr-theme=\"light\"]"])),
            Some(Theme::Light)
        );
        assert_eq!(
            theme_of(&selectors(&[":root[data-fr-theme=\"dark\"]"])),
            Some(Theme::Dark)
        );
        assert_eq!(
            theme_of(&selectors(&["[data-fr-theme='dark']"])),
            Some(Theme::Dark)
        );
        assert_eq!(theme_of(&selectors(&[".fr-btn"])), None);
        assert_eq!(theme_of(&selectors(&[":root .fr-btn"])), None);
        assert_eq!(
            theme_of(&selectors(&[".fr-theme-dark", ":root[data-fr-theme=dark]"])),
            Some(Theme::Dark)
        );
    }

    #[test]
    fn test_scoped_dark_selectors_are_not_theme_blocks() {
        assert_eq!(
            theme_of(&selectors(&["[data-fr-theme=dark] .fr-header"])),
            None
        );
        assert_eq!(
            theme_of(&selectors(&[":root[data-fr-theme=dark] .fr-btn:hover"])),
            None
        );

        let vars = ThemeVariables::collect(
            ":root { --grey-50-1000: #161616; }\n\
             :root[data-fr-theme=dark] { --grey-50-1000: #fff; }\n\
             [data-fr-theme=dark] .fr-header { --grey-50-1000: #123456; }",
        );
        assert_eq!(vars.dark_value("--grey-50-1000"), Some("#fff"));
    }

    #[test]
    fn test_theme_path_dotted() {
        let path: ThemePath = ["blueFrance", "sun113_625", "hover"].into_iter().collect();
        assert_eq!(path.dotted(), "blueFrance.sun113_625.hover");
        assert_eq!(path.to_string(), "blueFrance.sun113_625.hover");
        assert_eq!(path.segments().len(), 3);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case(&["blue", "france"]), "blueFrance");
        assert_eq!(camel_case(&["action", "high"]), "actionHigh");
        assert_eq!(camel_case(&["grey"]), "grey");
        assert_eq!(camel_case::<&str>(&[]), "");
    }

    #[test]
    fn test_variables_first_position_last_value() {
        let vars = ThemeVariables::collect(
            ":root { --a: 1; --b: 2; }\n.fr-btn { --c: 9; }\n:root { --a: 3; }\n:root[data-fr-theme=dark] { --a: 4; }",
        );
        let light: Vec<(&str, &str)> = vars.light().collect();
        assert_eq!(light, vec![("--a", "3"), ("--b", "2")]);
        assert_eq!(vars.dark_value("--a"), Some("4"));
        assert_eq!(vars.dark_value("--b"), None);
    }

    #[test]
    fn test_variables_inside_media_query() {
        let vars = ThemeVariables::collect("@media print { :root { --a: 1; } }");
        assert_eq!(vars.light().count(), 1);
    }
}
