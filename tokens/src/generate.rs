//! End-to-end generation and its report.

use dsfr_css::ParseError;
use tracing::{debug, info};

use crate::decisions::{color_decisions_from, parse_color_decisions, ColorDecision};
use crate::emit::{render_ts_const, EmitOptions};
use crate::error::EmitResult;
use crate::join::join;
use crate::options::{color_options_from, parse_color_options, ColorOption};
use crate::theme::{ThemePath, ThemeVariables};

/// Generate the TypeScript source of `colorDecisionAndCorrespondingOptions`
/// from raw CSS.
pub fn generate_color_decision_and_corresponding_options_ts_code(
    raw_css: &str,
) -> EmitResult<String> {
    let color_options = parse_color_options(raw_css);
    let joined = join(&color_options, parse_color_decisions(raw_css));
    render_ts_const(&joined, &EmitOptions::default())
}

/// Decisions whose option theme path matches no option, in decision order.
pub fn unmatched_decisions<'a>(
    options: &[ColorOption],
    decisions: &'a [ColorDecision],
) -> Vec<&'a ColorDecision> {
    let keys: Vec<String> = options.iter().map(|o| o.theme_path.dotted()).collect();
    decisions
        .iter()
        .filter(|d| {
            let wanted = d.option_theme_path.dotted();
            !keys.iter().any(|key| *key == wanted)
        })
        .collect()
}

/// A decision dropped from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedDecision {
    pub css_var_name: String,
    pub option_css_var_name: String,
    pub option_theme_path: ThemePath,
}

impl From<&ColorDecision> for UnmatchedDecision {
    fn from(decision: &ColorDecision) -> Self {
        Self {
            css_var_name: decision.css_var_name.clone(),
            option_css_var_name: decision.option_css_var_name.clone(),
            option_theme_path: decision.option_theme_path.clone(),
        }
    }
}

/// What a generation run saw and produced.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Options parsed.
    pub options: usize,
    /// Decisions parsed.
    pub decisions: usize,
    /// Joined records written to the table.
    pub emitted: usize,
    pub unmatched: Vec<UnmatchedDecision>,
    /// CSS the reader could not make sense of.
    pub diagnostics: Vec<ParseError>,
}

impl Report {
    /// No unmatched decisions and no CSS diagnostics.
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty() && self.diagnostics.is_empty()
    }
}

/// Generated code plus its report.
#[derive(Debug, Clone)]
pub struct Generation {
    pub code: String,
    pub report: Report,
}

/// Read `raw_css` once and produce the decision table together with a
/// report. With default options the code is identical to
/// [`generate_color_decision_and_corresponding_options_ts_code`].
pub fn generate(raw_css: &str, emit: &EmitOptions) -> EmitResult<Generation> {
    let parsed = dsfr_css::parse_stylesheet(raw_css);
    for diagnostic in &parsed.diagnostics {
        debug!(%diagnostic, "skipping unreadable CSS");
    }

    let vars = ThemeVariables::from_stylesheet(&parsed.stylesheet);
    let options = color_options_from(&vars);
    let decisions = color_decisions_from(&vars);

    let unmatched: Vec<UnmatchedDecision> = unmatched_decisions(&options, &decisions)
        .into_iter()
        .map(UnmatchedDecision::from)
        .collect();
    let decision_count = decisions.len();

    let joined = join(&options, decisions);
    let code = render_ts_const(&joined, emit)?;

    let report = Report {
        options: options.len(),
        decisions: decision_count,
        emitted: joined.len(),
        unmatched,
        diagnostics: parsed.diagnostics,
    };
    info!(
        options = report.options,
        decisions = report.decisions,
        emitted = report.emitted,
        unmatched = report.unmatched.len(),
        "generated {}",
        emit.const_name
    );

    Ok(Generation { code, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CSS: &str = r#"
        :root {
            --grey-50-1000: #161616;
            --text-default-grey: var(--grey-50-1000);
            --text-mention-grey: var(--grey-425-625);
        }
        :root[data-fr-theme="dark"] {
            --grey-50-1000: #fff;
        }
    "#;

    #[test]
    fn test_generate_scenario() {
        let code = generate_color_decision_and_corresponding_options_ts_code(CSS).unwrap();
        let expected = r##"
export const colorDecisionAndCorrespondingOptions= [
    {
        "context": "text",
        "usage": "default",
        "colorName": "grey",
        "themePath": [
            "text",
            "default",
            "grey",
            "default"
        ],
        "colorOption": {
            "colorName": "grey",
            "themePath": [
                "grey",
                "_50_1000",
                "default"
            ],
            "color": {
                "light": "#161616",
                "dark": "#fff"
            }
        }
    }
] as const;
"##;
        assert_eq!(code, expected);
        assert!(!code.contains("optionThemePath"));
    }

    #[test]
    fn test_generate_empty_input() {
        let code = generate_color_decision_and_corresponding_options_ts_code("").unwrap();
        assert_eq!(
            code,
            "\nexport const colorDecisionAndCorrespondingOptions= [] as const;\n"
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let first = generate_color_decision_and_corresponding_options_ts_code(CSS).unwrap();
        let second = generate_color_decision_and_corresponding_options_ts_code(CSS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_matches_plain_generation() {
        let generation = generate(CSS, &EmitOptions::default()).unwrap();
        let plain = generate_color_decision_and_corresponding_options_ts_code(CSS).unwrap();
        assert_eq!(generation.code, plain);

        let report = generation.report;
        assert_eq!(report.options, 1);
        assert_eq!(report.decisions, 2);
        assert_eq!(report.emitted, 1);
        assert_eq!(
            report.unmatched,
            vec![UnmatchedDecision {
                css_var_name: "--text-mention-grey".into(),
                option_css_var_name: "--grey-425-625".into(),
                option_theme_path: ["grey", "_425_625", "default"].into_iter().collect(),
            }]
        );
        assert!(report.diagnostics.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_collects_diagnostics() {
        let generation = generate(":root { --grey-50-1000 #161616; }", &EmitOptions::default()).unwrap();
        assert_eq!(generation.report.diagnostics.len(), 1);
        assert_eq!(generation.report.options, 0);
    }

    #[test]
    fn test_unmatched_decisions() {
        let options = parse_color_options(CSS);
        let decisions = parse_color_decisions(CSS);
        let unmatched = unmatched_decisions(&options, &decisions);
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].css_var_name, "--text-mention-grey");
        assert!(unmatched.len() <= decisions.len());
    }

    #[test]
    fn test_deeply_nested_input_is_reported_not_fatal() {
        let css = format!("{}{}", "a{".repeat(100_000), CSS);
        let generation = generate(&css, &EmitOptions::default()).unwrap();
        assert_eq!(generation.report.options, 0);
        assert!(!generation.report.diagnostics.is_empty());
        assert_eq!(
            generation.code,
            "\nexport const colorDecisionAndCorrespondingOptions= [] as const;\n"
        );
    }
}
