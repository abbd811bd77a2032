//! Properties of the decision table that hold for every stylesheet.

use dsfr_tests::Fixture;
use dsfr_tokens::{
    generate, join, parse_color_decisions, parse_color_options, EmitOptions,
};
use pretty_assertions::assert_eq;

fn fixtures() -> Vec<Fixture> {
    Fixture::all().unwrap()
}

mod join_properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_record_carries_the_option_its_decision_references() {
        for fixture in fixtures() {
            let options = parse_color_options(&fixture.input);
            let decisions = parse_color_decisions(&fixture.input);

            for record in join(&options, decisions.clone()) {
                let decision = decisions
                    .iter()
                    .find(|d| d.theme_path == record.theme_path)
                    .unwrap();
                assert_eq!(
                    record.color_option.theme_path.dotted(),
                    decision.option_theme_path.dotted(),
                    "fixture {}, decision {}",
                    fixture.name,
                    decision.css_var_name
                );
                assert!(options.contains(&record.color_option));
            }
        }
    }

    #[test]
    fn test_record_order_follows_decision_order() {
        for fixture in fixtures() {
            let options = parse_color_options(&fixture.input);
            let decisions = parse_color_decisions(&fixture.input);
            let decision_paths: Vec<String> =
                decisions.iter().map(|d| d.theme_path.dotted()).collect();

            let joined = join(&options, decisions);
            let positions: Vec<usize> = joined
                .iter()
                .map(|r| {
                    let path = r.theme_path.dotted();
                    decision_paths.iter().position(|p| *p == path).unwrap()
                })
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "fixture {}", fixture.name);
        }
    }

    #[test]
    fn test_cardinality_never_exceeds_decisions() {
        for fixture in fixtures() {
            let options = parse_color_options(&fixture.input);
            let decisions = parse_color_decisions(&fixture.input);
            let total = decisions.len();
            assert!(join(&options, decisions).len() <= total);
        }
    }
}

mod generation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generation_is_idempotent() {
        for fixture in fixtures() {
            assert_eq!(fixture.generate().unwrap(), fixture.generate().unwrap());
        }
    }

    #[test]
    fn test_empty_input() {
        let code =
            dsfr_tokens::generate_color_decision_and_corresponding_options_ts_code("").unwrap();
        assert_eq!(
            code,
            "\nexport const colorDecisionAndCorrespondingOptions= [] as const;\n"
        );
    }

    #[test]
    fn test_option_theme_path_is_not_emitted() {
        for fixture in fixtures() {
            assert!(!fixture.generate().unwrap().contains("optionThemePath"));
        }
    }
}

mod reports {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dsfr_report() {
        let fixture = Fixture::load("dsfr").unwrap();
        let report = generate(&fixture.input, &EmitOptions::default())
            .unwrap()
            .report;

        assert_eq!(report.options, 7);
        assert_eq!(report.decisions, 8);
        assert_eq!(report.emitted, 7);
        assert_eq!(report.unmatched.len(), 1);
        assert_eq!(report.unmatched[0].css_var_name, "--artwork-minor-red-marianne");
        assert_eq!(report.unmatched[0].option_css_var_name, "--red-marianne-main-472");
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_overrides_report() {
        let fixture = Fixture::load("overrides").unwrap();
        let report = generate(&fixture.input, &EmitOptions::default())
            .unwrap()
            .report;

        assert_eq!(report.options, 2);
        assert_eq!(report.decisions, 2);
        assert_eq!(report.emitted, 2);
        assert!(report.is_clean());
    }
}

mod theming {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_last_light_value_wins_at_first_position() {
        let fixture = Fixture::load("overrides").unwrap();
        let options = parse_color_options(&fixture.input);

        assert_eq!(options[0].theme_path.dotted(), "grey._975_75.default");
        assert_eq!(options[0].color.light, "#eeeeee");
        assert_eq!(options[0].color.dark, "#1e1e1e");
    }

    #[test]
    fn test_dark_falls_back_to_light() {
        let fixture = Fixture::load("dsfr").unwrap();
        let options = parse_color_options(&fixture.input);
        let main = options
            .iter()
            .find(|o| o.theme_path.dotted() == "blueFrance.main525.default")
            .unwrap();
        assert_eq!(main.color.light, "#6a6af4");
        assert_eq!(main.color.dark, "#6a6af4");
    }

    #[test]
    fn test_declarations_outside_theme_blocks_are_ignored() {
        let fixture = Fixture::load("dsfr").unwrap();
        // `.fr-btn` declares a well-formed option and decision of its own.
        assert!(fixture.input.contains("--pink-tuile-main-556: #ce614a;"));

        let options = parse_color_options(&fixture.input);
        assert!(options.iter().all(|o| o.color_name != "pinkTuile"));
        assert!(parse_color_decisions(&fixture.input)
            .iter()
            .all(|d| d.css_var_name != "--background-action-high-pink-tuile"));
    }

    #[test]
    fn test_scoped_dark_rules_do_not_override_the_palette() {
        let fixture = Fixture::load("dsfr").unwrap();
        assert!(fixture.input.contains("[data-fr-theme=\"dark\"] .fr-header"));

        let options = parse_color_options(&fixture.input);
        let grey = options
            .iter()
            .find(|o| o.theme_path.dotted() == "grey._50_1000.default")
            .unwrap();
        assert_eq!(grey.color.dark, "#fff");
    }
}
