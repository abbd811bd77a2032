//! Color options: the concrete colors of the palette.
//!
//! An option is a light-theme custom property named
//! `--{color}-{brightness}[-{state}]` holding a raw color value, for example
//! `--blue-france-sun-113-625-hover: #1212ff;`.

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::decisions::option_reference;
use crate::theme::{camel_case, ColorState, ThemePath, ThemeVariables};

/// A named palette color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorOption {
    /// Color family in camelCase, e.g. `blueFrance`.
    pub color_name: String,
    /// `[colorName, brightnessKey, state]`
    pub theme_path: ThemePath,
    pub color: ColorValue,
}

/// Raw CSS values per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    pub light: String,
    pub dark: String,
}

/// Brightness part of an option name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Brightness {
    /// `main-525`: same tint in both themes.
    Main(String),
    /// `sun-368-moon-732`
    SunMoon { sun: String, moon: String },
    /// `sun-113-625`
    Sun { light: String, dark: String },
    /// `moon-113-625`
    Moon { light: String, dark: String },
    /// `975-75`
    Plain { light: String, dark: String },
}

impl Brightness {
    /// Theme path segment: `main525`, `sun368moon732`, `sun113_625`,
    /// `moon113_625` or `_975_75`.
    pub fn key(&self) -> String {
        match self {
            Brightness::Main(value) => format!("main{}", value),
            Brightness::SunMoon { sun, moon } => format!("sun{}moon{}", sun, moon),
            Brightness::Sun { light, dark } => format!("sun{}_{}", light, dark),
            Brightness::Moon { light, dark } => format!("moon{}_{}", light, dark),
            Brightness::Plain { light, dark } => format!("_{}_{}", light, dark),
        }
    }
}

/// Components of an option variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColorOptionName {
    /// Kebab-case color family as written, e.g. `blue-france`.
    pub color_name: String,
    pub brightness: Brightness,
    pub state: ColorState,
}

impl ParsedColorOptionName {
    pub fn color_name_camel(&self) -> String {
        let segments: Vec<&str> = self.color_name.split('-').collect();
        camel_case(&segments)
    }

    pub fn theme_path(&self) -> ThemePath {
        ThemePath::new(vec![
            self.color_name_camel(),
            self.brightness.key(),
            self.state.as_str().to_string(),
        ])
    }
}

fn option_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The color prefix is lazy so `--grey-sun-113-625` reads as `grey` + `sun-113-625`.
        Regex::new(concat!(
            r"^--([a-z]+(?:-[a-z]+)*?)-",
            r"(?:main-([0-9]+)",
            r"|sun-([0-9]+)-moon-([0-9]+)",
            r"|sun-([0-9]+)-([0-9]+)",
            r"|moon-([0-9]+)-([0-9]+)",
            r"|([0-9]+)-([0-9]+))",
            r"(?:-(hover|active))?$",
        ))
        .expect("option name pattern is valid")
    })
}

/// Parse an option variable name such as `--green-tilleul-verveine-950-100-active`.
/// Returns `None` for names outside the option convention.
pub fn parse_color_option_name(name: &str) -> Option<ParsedColorOptionName> {
    let caps = option_name_regex().captures(name)?;
    let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

    let brightness = if let Some(value) = group(2) {
        Brightness::Main(value)
    } else if let (Some(sun), Some(moon)) = (group(3), group(4)) {
        Brightness::SunMoon { sun, moon }
    } else if let (Some(light), Some(dark)) = (group(5), group(6)) {
        Brightness::Sun { light, dark }
    } else if let (Some(light), Some(dark)) = (group(7), group(8)) {
        Brightness::Moon { light, dark }
    } else if let (Some(light), Some(dark)) = (group(9), group(10)) {
        Brightness::Plain { light, dark }
    } else {
        return None;
    };

    let state = match caps.get(11) {
        Some(m) => ColorState::from_suffix(m.as_str())?,
        None => ColorState::Default,
    };

    Some(ParsedColorOptionName {
        color_name: group(1)?,
        brightness,
        state,
    })
}

/// Extract the color options declared in `raw_css`, in order of first
/// appearance in light blocks. Declarations outside the convention are
/// skipped.
pub fn parse_color_options(raw_css: &str) -> Vec<ColorOption> {
    color_options_from(&ThemeVariables::collect(raw_css))
}

pub(crate) fn color_options_from(vars: &ThemeVariables) -> Vec<ColorOption> {
    let options: Vec<ColorOption> = vars
        .light()
        .filter_map(|(name, value)| {
            if option_reference(value).is_some() {
                return None;
            }
            let parsed = parse_color_option_name(name)?;
            if value.is_empty() {
                debug!(name, "skipping color option without a value");
                return None;
            }
            let dark = vars.dark_value(name).unwrap_or(value);
            Some(ColorOption {
                color_name: parsed.color_name_camel(),
                theme_path: parsed.theme_path(),
                color: ColorValue {
                    light: value.to_string(),
                    dark: dark.to_string(),
                },
            })
        })
        .collect();
    trace!(count = options.len(), "parsed color options");
    options
}
