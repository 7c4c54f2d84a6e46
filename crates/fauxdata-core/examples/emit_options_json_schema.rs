use fauxdata_core::{FakerOptions, LocaleEntry};
use schemars::schema_for;

fn main() {
    let options = schema_for!(FakerOptions);
    let entry = schema_for!(LocaleEntry);
    let json = serde_json::json!({
        "options": options,
        "locale_entry": entry,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&json).expect("serialize json schema")
    );
}
