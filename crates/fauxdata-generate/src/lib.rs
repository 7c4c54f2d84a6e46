//! Fake data generators for fauxdata.
//!
//! A [`Faker`] resolves locale templates and feeds the generators for lorem
//! text, person names and internet data (emails, URLs, passwords, MAC and IP
//! addresses).

pub mod assets;
pub mod faker;
pub mod generators;

pub use assets::bundled_locale;
pub use faker::Faker;
pub use generators::{Bool, Internet, Lorem, Name, is_private};
