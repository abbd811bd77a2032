//! Join decisions with the options they reference.

use serde::Serialize;
use tracing::trace;

use crate::decisions::{ColorDecision, DecisionContext};
use crate::options::ColorOption;
use crate::theme::ThemePath;

/// A decision with its option embedded in place of `optionThemePath`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDecisionAndCorrespondingOption {
    pub context: DecisionContext,
    pub usage: String,
    pub color_name: String,
    pub theme_path: ThemePath,
    pub color_option: ColorOption,
}

impl ColorDecisionAndCorrespondingOption {
    fn new(decision: ColorDecision, color_option: ColorOption) -> Self {
        Self {
            context: decision.context,
            usage: decision.usage,
            color_name: decision.color_name,
            theme_path: decision.theme_path,
            color_option,
        }
    }
}

/// First option whose dot-joined theme path equals `path` dot-joined.
pub fn find_option<'a>(options: &'a [ColorOption], path: &ThemePath) -> Option<&'a ColorOption> {
    let wanted = path.dotted();
    options.iter().find(|option| option.theme_path.dotted() == wanted)
}

/// Pair every decision with the first option matching its
/// `option_theme_path`. Decisions without a match are dropped; the order of
/// the remaining decisions is kept.
pub fn join(
    options: &[ColorOption],
    decisions: Vec<ColorDecision>,
) -> Vec<ColorDecisionAndCorrespondingOption> {
    let keys: Vec<String> = options.iter().map(|o| o.theme_path.dotted()).collect();
    let total = decisions.len();

    let joined: Vec<ColorDecisionAndCorrespondingOption> = decisions
        .into_iter()
        .filter_map(|decision| {
            let wanted = decision.option_theme_path.dotted();
            let index = keys.iter().position(|key| *key == wanted)?;
            Some(ColorDecisionAndCorrespondingOption::new(
                decision,
                options[index].clone(),
            ))
        })
        .collect();

    trace!(decisions = total, joined = joined.len(), "joined decisions with options");
    joined
}
