use std::sync::Arc;

use tracing::info;

use fauxdata_core::options::{DEFAULT_LOCALE, DEFAULT_MAX_SAMPLING_ATTEMPTS};
use fauxdata_core::{
    Error, FakerOptions, LocaleData, LocaleProvider, RandomSource, Result, SeededRandom,
    TemplateResolver, bothify,
};

use crate::assets::bundled_locale;
use crate::generators::{Bool, Internet, Lorem, Name};

/// Entry point for fake data generation.
///
/// A `Faker` owns its random source and is meant to stay on one thread.
/// Locale data is shared, so building one faker per thread from the same
/// `Arc<LocaleData>` is cheap.
#[derive(Debug)]
pub struct Faker<R: RandomSource = SeededRandom> {
    resolver: TemplateResolver,
    rng: R,
    max_sampling_attempts: usize,
}

impl Faker<SeededRandom> {
    /// Bundled `en` locale, entropy-seeded.
    pub fn new() -> Result<Self> {
        Ok(Self::with_random(bundled_locale()?, SeededRandom::from_entropy()))
    }

    /// Bundled `en` locale with a fixed seed.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Ok(Self::with_random(bundled_locale()?, SeededRandom::new(seed)))
    }

    pub fn from_options(options: &FakerOptions) -> Result<Self> {
        options.validate()?;
        let bundled = bundled_locale()?;
        let provider: Arc<LocaleData> = match options.locale_path() {
            Some(path) => Arc::new(
                LocaleData::from_path(&options.locale, &path)?.with_fallback(&bundled),
            ),
            None if options.locale == DEFAULT_LOCALE => bundled,
            None => {
                return Err(Error::InvalidArgument(format!(
                    "locale '{}' requires locale_dir",
                    options.locale
                )));
            }
        };

        let rng = match options.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };

        info!(
            locale = %options.locale,
            seed = ?options.seed,
            keys = provider.len(),
            "faker initialized"
        );

        Ok(Self::with_random(provider, rng)
            .with_max_template_depth(options.max_template_depth)
            .with_max_sampling_attempts(options.max_sampling_attempts))
    }
}

impl<R: RandomSource> Faker<R> {
    pub fn with_random<P>(provider: Arc<P>, rng: R) -> Self
    where
        P: LocaleProvider + 'static,
    {
        Self {
            resolver: TemplateResolver::new(provider),
            rng,
            max_sampling_attempts: DEFAULT_MAX_SAMPLING_ATTEMPTS,
        }
    }

    pub fn with_max_template_depth(mut self, max_depth: usize) -> Self {
        self.resolver = self.resolver.with_max_depth(max_depth);
        self
    }

    pub fn with_max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    pub fn locale(&self) -> &str {
        self.resolver.locale()
    }

    /// Resolve a dotted template key, e.g. `internet.domain_suffix`.
    pub fn resolve(&mut self, key: &str) -> Result<String> {
        self.resolver.resolve(key, &mut self.rng)
    }

    /// Replace `#` with digits and `?` with uppercase letters.
    pub fn bothify(&mut self, text: &str) -> Result<String> {
        bothify(text, &mut self.rng)
    }

    pub fn lorem(&mut self) -> Lorem<'_, R> {
        Lorem::new(self)
    }

    pub fn internet(&mut self) -> Internet<'_, R> {
        Internet::new(self)
    }

    pub fn name(&mut self) -> Name<'_, R> {
        Name::new(self)
    }

    pub fn bool(&mut self) -> Bool<'_, R> {
        Bool::new(self)
    }

    pub fn into_random(self) -> R {
        self.rng
    }

    pub(crate) fn next_int(&mut self, bound: usize) -> Result<usize> {
        self.rng.next_int(bound)
    }

    pub(crate) fn next_bool(&mut self) -> bool {
        self.rng.next_bool()
    }

    pub(crate) fn max_sampling_attempts(&self) -> usize {
        self.max_sampling_attempts
    }
}
