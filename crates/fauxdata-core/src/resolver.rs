use std::sync::Arc;

use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::locale::{LocaleEntry, LocaleProvider};
use crate::random::RandomSource;
use crate::template::{Segment, Template};

/// Default limit on nested placeholder expansion.
pub const DEFAULT_MAX_DEPTH: usize = 10;

const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Resolves template keys against locale data.
#[derive(Clone)]
pub struct TemplateResolver {
    provider: Arc<dyn LocaleProvider>,
    max_depth: usize,
}

impl std::fmt::Debug for TemplateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateResolver")
            .field("locale", &self.provider.locale())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl TemplateResolver {
    pub fn new(provider: Arc<dyn LocaleProvider>) -> Self {
        Self {
            provider,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn locale(&self) -> &str {
        self.provider.locale()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Resolve `key` to a string, expanding every placeholder.
    pub fn resolve(&self, key: &str, rng: &mut dyn RandomSource) -> Result<String> {
        self.resolve_at(key, 0, rng)
    }

    /// The raw alternative selected for `key`, placeholders untouched.
    pub fn fetch(&self, key: &str, rng: &mut dyn RandomSource) -> Result<String> {
        let entry = self
            .provider
            .lookup(key)
            .ok_or_else(|| Error::UnresolvedKey(key.to_string()))?;
        select(key, entry, rng).map(str::to_string)
    }

    fn resolve_at(&self, key: &str, depth: usize, rng: &mut dyn RandomSource) -> Result<String> {
        if depth > self.max_depth {
            warn!(key, depth, "template expansion too deep");
            return Err(Error::TemplateDepthExceeded {
                key: key.to_string(),
                depth: self.max_depth,
            });
        }

        let raw = self.fetch(key, rng)?;
        let template = Template::parse(key, &raw)?;
        if template.is_literal() {
            trace!(key, value = %raw, "resolved literal");
            return Ok(raw);
        }

        let mut out = String::with_capacity(raw.len());
        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Pattern(mask) => out.push_str(&bothify(mask, rng)?),
                Segment::Reference(reference) => {
                    out.push_str(&self.resolve_at(reference, depth + 1, rng)?)
                }
            }
        }
        trace!(key, depth, value = %out, "resolved template");
        Ok(out)
    }
}

fn select<'a>(key: &str, entry: &'a LocaleEntry, rng: &mut dyn RandomSource) -> Result<&'a str> {
    let index = match entry.len() {
        0 => {
            return Err(Error::InvalidLocaleData(format!(
                "'{key}' has no alternatives"
            )));
        }
        1 => 0,
        len => rng.next_int(len)?,
    };
    entry
        .get(index)
        .ok_or_else(|| Error::InvalidLocaleData(format!("'{key}' has no entry {index}")))
}

/// Replace every `#` with a random digit.
pub fn numerify(text: &str, rng: &mut dyn RandomSource) -> Result<String> {
    substitute(text, rng, |c, rng| match c {
        '#' => pick(DIGITS, rng).map(Some),
        _ => Ok(None),
    })
}

/// Replace every `?` with a random uppercase letter.
pub fn letterify(text: &str, rng: &mut dyn RandomSource) -> Result<String> {
    letterify_case(text, true, rng)
}

/// Replace every `?` with a random letter, upper- or lowercase.
pub fn letterify_case(text: &str, uppercase: bool, rng: &mut dyn RandomSource) -> Result<String> {
    substitute(text, rng, |c, rng| match c {
        '?' => pick(LETTERS, rng).map(|letter| {
            Some(if uppercase {
                letter
            } else {
                letter.to_ascii_lowercase()
            })
        }),
        _ => Ok(None),
    })
}

/// `numerify` and `letterify` in one pass.
pub fn bothify(text: &str, rng: &mut dyn RandomSource) -> Result<String> {
    substitute(text, rng, |c, rng| match c {
        '#' => pick(DIGITS, rng).map(Some),
        '?' => pick(LETTERS, rng).map(Some),
        _ => Ok(None),
    })
}

fn substitute<F>(text: &str, rng: &mut dyn RandomSource, mut replace: F) -> Result<String>
where
    F: FnMut(char, &mut dyn RandomSource) -> Result<Option<char>>,
{
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match replace(c, rng)? {
            Some(replacement) => out.push(replacement),
            None => out.push(c),
        }
    }
    Ok(out)
}

fn pick(table: &[u8], rng: &mut dyn RandomSource) -> Result<char> {
    Ok(table[rng.next_int(table.len())?] as char)
}
