//! Color decisions: semantic usages bound to a palette option.
//!
//! A decision is a light-theme custom property named
//! `--{context}-{usage}-{color}[-{state}]` whose value references an option:
//! `--background-action-high-blue-france: var(--blue-france-sun-113-625);`

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::options::parse_color_option_name;
use crate::theme::{camel_case, ColorState, ThemePath, ThemeVariables};

/// What a decision colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionContext {
    Background,
    Text,
    Border,
    Artwork,
}

impl DecisionContext {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "background" => Some(DecisionContext::Background),
            "text" => Some(DecisionContext::Text),
            "border" => Some(DecisionContext::Border),
            "artwork" => Some(DecisionContext::Artwork),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionContext::Background => "background",
            DecisionContext::Text => "text",
            DecisionContext::Border => "border",
            DecisionContext::Artwork => "artwork",
        }
    }
}

/// A semantic color usage and the option it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDecision {
    pub context: DecisionContext,
    /// camelCase usage, e.g. `actionHigh`.
    pub usage: String,
    /// camelCase color family, e.g. `blueFrance`.
    pub color_name: String,
    /// `[context, usage, colorName, state]`
    pub theme_path: ThemePath,
    /// Theme path of the referenced option.
    pub option_theme_path: ThemePath,
    /// Variable the decision was read from.
    pub css_var_name: String,
    /// Variable named in the decision's `var()`.
    pub option_css_var_name: String,
}

fn var_reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^var\(\s*(--[A-Za-z0-9_-]+)\s*(?:,.*)?\)$")
            .expect("var reference pattern is valid")
    })
}

/// Variable referenced by a `var(--name)` value. A fallback after the
/// comma is ignored.
pub fn option_reference(value: &str) -> Option<&str> {
    var_reference_regex()
        .captures(value.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse one `name: value` declaration as a decision. Returns `None` when
/// the name or value does not follow the decision convention.
pub fn parse_color_decision(name: &str, value: &str) -> Option<ColorDecision> {
    let option_var = option_reference(value)?;
    let option = parse_color_option_name(option_var)?;

    let body = name.strip_prefix("--")?;
    let mut segments: Vec<&str> = body.split('-').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    let context = DecisionContext::from_segment(segments[0])?;

    let mut state = ColorState::Default;
    if segments.len() > 1 {
        if let Some(suffix) = segments.last().and_then(|s| ColorState::from_suffix(s)) {
            state = suffix;
            segments.pop();
        }
    }

    let color_segments: Vec<&str> = option.color_name.split('-').collect();
    let rest = &segments[1..];
    if rest.len() <= color_segments.len() {
        debug!(name, option_var, "decision name has no usage before its color");
        return None;
    }
    let (usage, color) = rest.split_at(rest.len() - color_segments.len());
    if color != color_segments.as_slice() {
        debug!(name, option_var, "decision name does not end with its option's color");
        return None;
    }

    let usage = camel_case(usage);
    let color_name = option.color_name_camel();
    let theme_path = ThemePath::new(vec![
        context.as_str().to_string(),
        usage.clone(),
        color_name.clone(),
        state.as_str().to_string(),
    ]);

    Some(ColorDecision {
        context,
        usage,
        color_name,
        theme_path,
        option_theme_path: option.theme_path(),
        css_var_name: name.to_string(),
        option_css_var_name: option_var.to_string(),
    })
}

/// Extract the color decisions declared in `raw_css`, in order of first
/// appearance in light blocks.
pub fn parse_color_decisions(raw_css: &str) -> Vec<ColorDecision> {
    color_decisions_from(&ThemeVariables::collect(raw_css))
}

pub(crate) fn color_decisions_from(vars: &ThemeVariables) -> Vec<ColorDecision> {
    let decisions: Vec<ColorDecision> = vars
        .light()
        .filter_map(|(name, value)| parse_color_decision(name, value))
        .collect();
    trace!(count = decisions.len(), "parsed color decisions");
    decisions
}
