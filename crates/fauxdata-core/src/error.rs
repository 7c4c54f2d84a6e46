use thiserror::Error;

/// Core error type shared across fauxdata crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The template key has no entry in the locale data.
    #[error("unresolved key: {0}")]
    UnresolvedKey(String),
    /// A numeric range or argument is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The template string could not be parsed.
    #[error("malformed template for '{key}': {message}")]
    MalformedTemplate { key: String, message: String },
    /// Placeholder expansion nested deeper than the configured limit.
    #[error("template '{key}' exceeded maximum depth {depth}")]
    TemplateDepthExceeded { key: String, depth: usize },
    /// Locale data is present but unusable.
    #[error("invalid locale data: {0}")]
    InvalidLocaleData(String),
    /// A domain could not be converted to its ASCII form.
    #[error("cannot encode domain '{input}': {message}")]
    DomainEncoding { input: String, message: String },
    /// Rejection sampling gave up.
    #[error("no matching value after {attempts} attempts")]
    SamplingExhausted { attempts: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Convenience alias for results returned by fauxdata crates.
pub type Result<T> = std::result::Result<T, Error>;
