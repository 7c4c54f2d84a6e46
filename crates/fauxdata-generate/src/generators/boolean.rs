use fauxdata_core::RandomSource;

use crate::faker::Faker;

pub struct Bool<'a, R: RandomSource> {
    faker: &'a mut Faker<R>,
}

impl<'a, R: RandomSource> Bool<'a, R> {
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    pub fn bool(&mut self) -> bool {
        self.faker.next_bool()
    }
}
