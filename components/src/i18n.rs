//! Component localization tables.
//!
//! Each component owns a `ComponentI18n` built from a complete table in the
//! default language. Other languages are registered explicitly and may be
//! partial; lookups fall back to the default language.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use thiserror::Error;
use tracing::debug;

/// Language every component table must cover completely.
pub const DEFAULT_LANG: &str = "fr";

/// A closed set of message keys for one component.
pub trait MessageKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every key; the default table must provide all of them.
    const ALL: &'static [Self];

    /// Key as written in translation tables.
    fn key(self) -> &'static str;
}

/// Errors that can occur while building localization tables.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Missing {lang} message {key:?} for component {component}")]
    MissingMessage {
        component: String,
        lang: String,
        key: &'static str,
    },
}

/// Localized messages of one component.
#[derive(Debug, Clone)]
pub struct ComponentI18n<K: MessageKey> {
    component_name: String,
    tables: HashMap<String, HashMap<K, String>>,
}

impl<K: MessageKey> ComponentI18n<K> {
    /// Create the table from the default-language messages, which must
    /// cover every key.
    pub fn new<S: Into<String>>(
        component_name: impl Into<String>,
        default_messages: impl IntoIterator<Item = (K, S)>,
    ) -> Result<Self, I18nError> {
        let component_name = component_name.into();
        let table: HashMap<K, String> = default_messages
            .into_iter()
            .map(|(k, v)| (k, v.into()))
            .collect();

        if let Some(missing) = K::ALL.iter().find(|k| !table.contains_key(*k)) {
            return Err(I18nError::MissingMessage {
                component: component_name,
                lang: DEFAULT_LANG.to_string(),
                key: missing.key(),
            });
        }

        let mut tables = HashMap::new();
        tables.insert(DEFAULT_LANG.to_string(), table);
        Ok(Self {
            component_name,
            tables,
        })
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Register (or extend) the messages for `lang`.
    pub fn add_translations<S: Into<String>>(
        &mut self,
        lang: impl Into<String>,
        messages: impl IntoIterator<Item = (K, S)>,
    ) -> &mut Self {
        let table = self.tables.entry(lang.into().to_ascii_lowercase()).or_default();
        for (key, message) in messages {
            table.insert(key, message.into());
        }
        self
    }

    /// Languages with a registered table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Message for `key` in `lang`. Tries the exact tag, then its primary
    /// subtag (`en-GB` -> `en`), then the default language.
    pub fn t(&self, lang: &str, key: K) -> &str {
        let lang = lang.to_ascii_lowercase();
        let primary = lang.split('-').next().unwrap_or_default();

        for candidate in [lang.as_str(), primary] {
            if let Some(message) = self.tables.get(candidate).and_then(|t| t.get(&key)) {
                return message;
            }
        }

        debug!(
            component = %self.component_name,
            lang = %lang,
            key = key.key(),
            "falling back to {}",
            DEFAULT_LANG
        );
        self.tables
            .get(DEFAULT_LANG)
            .and_then(|t| t.get(&key))
            .map(String::as_str)
            .unwrap_or(key.key())
    }
}
