use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::resolver::DEFAULT_MAX_DEPTH;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Settings used to build a faker, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FakerOptions {
    /// Locale tag, e.g. `en`.
    pub locale: String,
    /// Fixed seed for reproducible output; entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Directory holding `<locale>.json` files.
    pub locale_dir: Option<PathBuf>,
    /// Limit on nested placeholder expansion.
    pub max_template_depth: usize,
    /// Limit on retries when sampling private or public addresses.
    pub max_sampling_attempts: usize,
}

impl Default for FakerOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
            locale_dir: None,
            max_template_depth: DEFAULT_MAX_DEPTH,
            max_sampling_attempts: DEFAULT_MAX_SAMPLING_ATTEMPTS,
        }
    }
}

impl FakerOptions {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: FakerOptions = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(Error::InvalidArgument("locale must not be empty".to_string()));
        }
        if self.max_sampling_attempts == 0 {
            return Err(Error::InvalidArgument(
                "max_sampling_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the locale file for the configured locale, if a directory is set.
    pub fn locale_path(&self) -> Option<PathBuf> {
        self.locale_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", self.locale)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let options = FakerOptions::from_toml_str("").expect("parse");
        assert_eq!(options, FakerOptions::default());
        assert_eq!(options.locale, "en");
        assert_eq!(options.max_template_depth, 10);
        assert!(options.locale_path().is_none());
    }

    #[test]
    fn parses_all_fields() {
        let options = FakerOptions::from_toml_str(
            r#"
locale = "de"
seed = 42
locale_dir = "/srv/locales"
max_template_depth = 4
max_sampling_attempts = 50
"#,
        )
        .expect("parse");
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.max_template_depth, 4);
        assert_eq!(
            options.locale_path(),
            Some(PathBuf::from("/srv/locales/de.json"))
        );
    }

    #[test]
    fn rejects_unknown_fields_and_bad_values() {
        assert!(matches!(
            FakerOptions::from_toml_str("colour = \"red\""),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            FakerOptions::from_toml_str("locale = \"  \""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            FakerOptions::from_toml_str("max_sampling_attempts = 0"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
