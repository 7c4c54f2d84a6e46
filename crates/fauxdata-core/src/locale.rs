use std::collections::BTreeMap;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// A locale resource entry: one template or a list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum LocaleEntry {
    Single(String),
    List(Vec<String>),
}

impl LocaleEntry {
    /// Number of alternatives held by this entry.
    pub fn len(&self) -> usize {
        match self {
            LocaleEntry::Single(_) => 1,
            LocaleEntry::List(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            LocaleEntry::Single(value) if index == 0 => Some(value.as_str()),
            LocaleEntry::Single(_) => None,
            LocaleEntry::List(values) => values.get(index).map(String::as_str),
        }
    }
}

impl From<&str> for LocaleEntry {
    fn from(value: &str) -> Self {
        LocaleEntry::Single(value.to_string())
    }
}

impl From<Vec<&str>> for LocaleEntry {
    fn from(values: Vec<&str>) -> Self {
        LocaleEntry::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Read-only mapping from dotted keys to locale entries.
pub trait LocaleProvider: Send + Sync {
    fn locale(&self) -> &str;

    fn lookup(&self, key: &str) -> Option<&LocaleEntry>;
}

/// In-memory locale data keyed by dotted path (`internet.free_email`).
#[derive(Debug, Clone, Default)]
pub struct LocaleData {
    locale: String,
    entries: BTreeMap<String, LocaleEntry>,
}

impl LocaleData {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with_entry(mut self, key: impl Into<String>, entry: impl Into<LocaleEntry>) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<LocaleEntry>) {
        self.entries.insert(key.into(), entry.into());
    }

    /// Parse a nested JSON document into flattened dotted keys.
    ///
    /// Documents wrapped as `{"<locale>": {"faker": {...}}}` are unwrapped.
    pub fn from_json_str(locale: &str, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(locale, value)
    }

    pub fn from_path(locale: &str, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let data = Self::from_json_str(locale, &text)?;
        debug!(
            locale,
            path = %path.display(),
            keys = data.len(),
            "locale data loaded"
        );
        Ok(data)
    }

    pub fn from_value(locale: &str, value: Value) -> Result<Self> {
        let root = unwrap_locale_root(locale, value);
        let Value::Object(map) = root else {
            return Err(Error::InvalidLocaleData(
                "locale document must be a JSON object".to_string(),
            ));
        };

        let mut data = Self::new(locale);
        for (key, value) in map {
            flatten_into(&mut data.entries, key, value)?;
        }
        Ok(data)
    }

    /// Fill keys missing from `self` with the entries of `fallback`.
    pub fn with_fallback(mut self, fallback: &LocaleData) -> Self {
        for (key, entry) in &fallback.entries {
            self.entries
                .entry(key.clone())
                .or_insert_with(|| entry.clone());
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocaleProvider for LocaleData {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, key: &str) -> Option<&LocaleEntry> {
        self.entries.get(key)
    }
}

fn unwrap_locale_root(locale: &str, value: Value) -> Value {
    let Value::Object(mut map) = value else {
        return value;
    };
    if map.len() == 1
        && let Some(Value::Object(inner)) = map.get_mut(locale)
        && inner.len() == 1
        && let Some(faker) = inner.remove("faker")
    {
        return faker;
    }
    Value::Object(map)
}

fn flatten_into(
    entries: &mut BTreeMap<String, LocaleEntry>,
    prefix: String,
    value: Value,
) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_into(entries, format!("{prefix}.{key}"), value)?;
            }
            Ok(())
        }
        Value::String(value) => {
            entries.insert(prefix, LocaleEntry::Single(value));
            Ok(())
        }
        Value::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(value) => values.push(value),
                    other => {
                        return Err(Error::InvalidLocaleData(format!(
                            "'{prefix}' must contain only strings, found {other}"
                        )));
                    }
                }
            }
            entries.insert(prefix, LocaleEntry::List(values));
            Ok(())
        }
        other => Err(Error::InvalidLocaleData(format!(
            "'{prefix}' must be a string, list or object, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects_into_dotted_keys() {
        let data = LocaleData::from_value(
            "en",
            json!({
                "internet": {
                    "free_email": ["gmail.com", "yahoo.com"],
                    "avatar": "face.jpg"
                },
                "lorem": { "words": ["alias"] }
            }),
        )
        .expect("valid locale");

        assert_eq!(data.locale(), "en");
        assert_eq!(
            data.lookup("internet.free_email"),
            Some(&LocaleEntry::from(vec!["gmail.com", "yahoo.com"]))
        );
        assert_eq!(
            data.lookup("internet.avatar"),
            Some(&LocaleEntry::from("face.jpg"))
        );
        assert!(data.lookup("internet").is_none());
        assert_eq!(data.keys().collect::<Vec<_>>().len(), 3);
    }

    #[test]
    fn strips_locale_and_faker_wrapper() {
        let data = LocaleData::from_value(
            "pt",
            json!({ "pt": { "faker": { "name": { "last_name": ["Silva"] } } } }),
        )
        .expect("valid locale");
        assert!(data.lookup("name.last_name").is_some());
    }

    #[test]
    fn rejects_non_string_leaves() {
        let result = LocaleData::from_value("en", json!({ "lorem": { "words": [1, 2] } }));
        assert!(matches!(result, Err(Error::InvalidLocaleData(_))));

        let result = LocaleData::from_value("en", json!({ "lorem": { "count": 3 } }));
        assert!(matches!(result, Err(Error::InvalidLocaleData(_))));
    }

    #[test]
    fn fallback_only_fills_missing_keys() {
        let base = LocaleData::new("en")
            .with_entry("name.first_name", vec!["John"])
            .with_entry("name.last_name", vec!["Smith"]);
        let data = LocaleData::new("de")
            .with_entry("name.last_name", vec!["Müller"])
            .with_fallback(&base);

        assert_eq!(data.locale(), "de");
        assert_eq!(
            data.lookup("name.last_name").and_then(|entry| entry.get(0)),
            Some("Müller")
        );
        assert_eq!(
            data.lookup("name.first_name").and_then(|entry| entry.get(0)),
            Some("John")
        );
    }
}
