//! DSFR Color Tokens
//!
//! This crate turns the design system's CSS custom properties into a typed
//! TypeScript table:
//! - Color options (`--blue-france-sun-113-625`) with light and dark values
//! - Color decisions (`--background-action-high-blue-france`) referencing an option
//! - The join of both, emitted as an `as const` TypeScript declaration
//! - A report of decisions whose option could not be found

mod decisions;
mod emit;
mod error;
mod generate;
mod join;
mod options;
mod theme;

pub use decisions::{
    option_reference, parse_color_decision, parse_color_decisions, ColorDecision, DecisionContext,
};
pub use emit::{render_ts_const, EmitOptions, COLOR_DECISION_AND_CORRESPONDING_OPTIONS};
pub use error::*;
pub use generate::{
    generate, generate_color_decision_and_corresponding_options_ts_code, unmatched_decisions,
    Generation, Report, UnmatchedDecision,
};
pub use join::{find_option, join, ColorDecisionAndCorrespondingOption};
pub use options::{
    parse_color_option_name, parse_color_options, Brightness, ColorOption, ColorValue,
    ParsedColorOptionName,
};
pub use theme::{theme_of, ColorState, Theme, ThemePath};
