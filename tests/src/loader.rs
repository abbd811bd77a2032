//! Loader for fixture directories.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FixtureError, FixtureResult};

const INPUT_FILE: &str = "input.css";
const EXPECTED_FILE: &str = "expected.ts";

/// Root of the fixture tree.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// A loaded fixture.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: String,
    /// The stylesheet.
    pub input: String,
    /// Committed generator output, when the fixture has one.
    pub expected: Option<String>,
}

impl Fixture {
    /// Load `fixtures/<name>/`.
    pub fn load(name: &str) -> FixtureResult<Self> {
        Self::load_from(&fixtures_dir().join(name))
    }

    /// Load a fixture directory.
    pub fn load_from(dir: &Path) -> FixtureResult<Self> {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let input_path = dir.join(INPUT_FILE);
        if !input_path.is_file() {
            return Err(FixtureError::NotFound(name));
        }
        let input = read(&input_path)?;

        let expected_path = dir.join(EXPECTED_FILE);
        let expected = if expected_path.is_file() {
            Some(read(&expected_path)?)
        } else {
            None
        };

        Ok(Self {
            name,
            input,
            expected,
        })
    }

    /// Every fixture directory, sorted by name.
    pub fn all() -> FixtureResult<Vec<Self>> {
        let root = fixtures_dir();
        let entries = fs::read_dir(&root).map_err(|e| FixtureError::io(&root, e))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FixtureError::io(&root, e))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        dirs.iter().map(|dir| Self::load_from(dir)).collect()
    }

    /// Run the default generator over the input.
    pub fn generate(&self) -> FixtureResult<String> {
        dsfr_tokens::generate_color_decision_and_corresponding_options_ts_code(&self.input)
            .map_err(|source| FixtureError::Generate {
                name: self.name.clone(),
                source,
            })
    }
}

fn read(path: &Path) -> FixtureResult<String> {
    fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_dsfr_fixture() {
        let fixture = Fixture::load("dsfr").unwrap();
        assert_eq!(fixture.name, "dsfr");
        assert!(fixture.input.contains(":root"));
        assert!(fixture.expected.is_some());
    }

    #[test]
    fn test_load_missing_fixture() {
        match Fixture::load("no-such-fixture") {
            Err(FixtureError::NotFound(name)) => assert_eq!(name, "no-such-fixture"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_all_lists_fixtures_sorted() {
        let names: Vec<String> = Fixture::all().unwrap().into_iter().map(|f| f.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"dsfr".to_string()));
    }
}
