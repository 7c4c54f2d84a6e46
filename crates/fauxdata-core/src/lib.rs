//! Core contracts for fauxdata.
//!
//! This crate holds the random source abstraction, the locale data provider,
//! template parsing and resolution, and the options shared by the generator
//! crates.

pub mod error;
pub mod locale;
pub mod logging;
pub mod options;
pub mod random;
pub mod resolver;
pub mod template;

pub use error::{Error, Result};
pub use locale::{LocaleData, LocaleEntry, LocaleProvider};
pub use logging::init_logging;
pub use options::FakerOptions;
pub use random::{RandomSource, SeededRandom};
pub use resolver::{TemplateResolver, bothify, letterify, numerify};
pub use template::{Segment, Template};
