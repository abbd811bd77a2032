//! Generated TypeScript must match the committed output byte for byte.

use dsfr_tests::Fixture;
use pretty_assertions::assert_eq;

#[test]
fn test_dsfr_fixture_matches_committed_output() {
    let fixture = Fixture::load("dsfr").unwrap();
    let expected = fixture.expected.as_deref().unwrap();
    assert_eq!(fixture.generate().unwrap(), expected);
}

#[test]
fn test_overrides_fixture_matches_committed_output() {
    let fixture = Fixture::load("overrides").unwrap();
    let expected = fixture.expected.as_deref().unwrap();
    assert_eq!(fixture.generate().unwrap(), expected);
}

#[test]
fn test_every_fixture_with_expected_output() {
    for fixture in Fixture::all().unwrap() {
        if let Some(expected) = &fixture.expected {
            assert_eq!(&fixture.generate().unwrap(), expected, "fixture {}", fixture.name);
        }
    }
}

#[test]
fn test_committed_output_layout() {
    let fixture = Fixture::load("dsfr").unwrap();
    let code = fixture.generate().unwrap();
    assert!(code.starts_with("\nexport const colorDecisionAndCorrespondingOptions= ["));
    assert!(code.ends_with("\n] as const;\n"));
    assert!(!code.ends_with("\n\n"));
}
