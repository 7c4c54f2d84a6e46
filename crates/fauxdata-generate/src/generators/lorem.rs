use fauxdata_core::{Error, RandomSource, Result};

use crate::faker::Faker;

/// Lowercase alphanumeric alphabet used for random characters.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const DEFAULT_CHARACTER_COUNT: usize = 255;
pub const DEFAULT_WORD_COUNT: usize = 3;
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Extra words a sentence may receive on top of the requested count.
const SENTENCE_WORD_SPREAD: usize = 6;
/// Extra sentences a paragraph may receive on top of the requested count.
const PARAGRAPH_SENTENCE_SPREAD: usize = 3;

/// Lorem ipsum text: characters, words, sentences and paragraphs.
pub struct Lorem<'a, R: RandomSource> {
    faker: &'a mut Faker<R>,
}

impl<'a, R: RandomSource> Lorem<'a, R> {
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    pub fn character(&mut self, include_uppercase: bool) -> Result<char> {
        let mut c = ALPHABET[self.faker.next_int(ALPHABET.len())?] as char;
        if include_uppercase && self.faker.next_bool() {
            c = c.to_ascii_uppercase();
        }
        Ok(c)
    }

    /// `count` random characters; zero yields an empty string.
    pub fn characters(&mut self, count: usize, include_uppercase: bool) -> Result<String> {
        let mut out = String::with_capacity(count);
        for _ in 0..count {
            out.push(self.character(include_uppercase)?);
        }
        Ok(out)
    }

    pub fn characters_default(&mut self, include_uppercase: bool) -> Result<String> {
        self.characters(DEFAULT_CHARACTER_COUNT, include_uppercase)
    }

    /// Random characters with a length in `[min, max)`.
    pub fn characters_between(
        &mut self,
        min: usize,
        max: usize,
        include_uppercase: bool,
    ) -> Result<String> {
        if max <= min {
            return Err(Error::InvalidArgument(format!(
                "maximum length {max} must be greater than minimum length {min}"
            )));
        }
        let length = self.faker.next_int(max - min)? + min;
        self.characters(length, include_uppercase)
    }

    pub fn word(&mut self) -> Result<String> {
        self.faker.resolve("lorem.words")
    }

    pub fn words(&mut self, count: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.word()).collect()
    }

    pub fn words_default(&mut self) -> Result<Vec<String>> {
        self.words(DEFAULT_WORD_COUNT)
    }

    /// `word_count` plus up to five extra words, capitalized and terminated by a period.
    pub fn sentence(&mut self, word_count: usize) -> Result<String> {
        let extra = self.faker.next_int(SENTENCE_WORD_SPREAD)?;
        let words = self.words(word_count + extra)?;
        Ok(capitalize(&format!("{}.", words.join(" "))))
    }

    pub fn sentences(&mut self, count: usize) -> Result<Vec<String>> {
        (0..count)
            .map(|_| self.sentence(DEFAULT_WORD_COUNT))
            .collect()
    }

    /// `sentence_count` plus up to two extra sentences joined by spaces.
    pub fn paragraph(&mut self, sentence_count: usize) -> Result<String> {
        let extra = self.faker.next_int(PARAGRAPH_SENTENCE_SPREAD)?;
        Ok(self.sentences(sentence_count + extra)?.join(" "))
    }

    pub fn paragraphs(&mut self, count: usize) -> Result<Vec<String>> {
        (0..count)
            .map(|_| self.paragraph(DEFAULT_SENTENCE_COUNT))
            .collect()
    }

    /// Text of exactly `length` characters, cut from concatenated sentences.
    pub fn fixed_string(&mut self, length: usize) -> Result<String> {
        let mut out = String::new();
        let mut count = 0;
        while count < length {
            let sentence = self.sentence(DEFAULT_WORD_COUNT)?;
            count += sentence.chars().count();
            out.push_str(&sentence);
        }
        Ok(out.chars().take(length).collect())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_non_ascii_and_empty() {
        assert_eq!(capitalize("alias sit."), "Alias sit.");
        assert_eq!(capitalize("élan."), "Élan.");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn alphabet_is_digits_then_lowercase() {
        assert_eq!(ALPHABET.len(), 36);
        assert!(ALPHABET[..10].iter().all(u8::is_ascii_digit));
        assert!(ALPHABET[10..].iter().all(u8::is_ascii_lowercase));
    }
}
