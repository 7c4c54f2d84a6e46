use std::sync::{Arc, OnceLock};

use fauxdata_core::options::DEFAULT_LOCALE;
use fauxdata_core::{LocaleData, Result};

const BUNDLED_EN: &str = include_str!("../assets/locales/en.json");

/// The `en` locale shipped with the crate, parsed once per process.
pub fn bundled_locale() -> Result<Arc<LocaleData>> {
    static BUNDLED: OnceLock<Arc<LocaleData>> = OnceLock::new();
    if let Some(data) = BUNDLED.get() {
        return Ok(Arc::clone(data));
    }
    let data = Arc::new(LocaleData::from_json_str(DEFAULT_LOCALE, BUNDLED_EN)?);
    Ok(Arc::clone(BUNDLED.get_or_init(|| data)))
}
