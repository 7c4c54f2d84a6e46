use fauxdata_core::{RandomSource, Result};

use crate::faker::Faker;

/// Person names drawn from the `name.*` locale keys.
pub struct Name<'a, R: RandomSource> {
    faker: &'a mut Faker<R>,
}

impl<'a, R: RandomSource> Name<'a, R> {
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    pub fn first_name(&mut self) -> Result<String> {
        self.faker.resolve("name.first_name")
    }

    pub fn last_name(&mut self) -> Result<String> {
        self.faker.resolve("name.last_name")
    }

    /// A full name built from the `name.name` templates.
    pub fn full_name(&mut self) -> Result<String> {
        self.faker.resolve("name.name")
    }
}
