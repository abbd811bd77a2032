//! Integration test support for the DSFR token generator.
//!
//! Fixtures live under `fixtures/<name>/`: an `input.css` stylesheet and,
//! for golden tests, the `expected.ts` the generator must reproduce byte
//! for byte.

pub mod error;
pub mod loader;

pub use error::{FixtureError, FixtureResult};
pub use loader::{fixtures_dir, Fixture};
