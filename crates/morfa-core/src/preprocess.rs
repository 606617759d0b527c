use unicode_normalization::UnicodeNormalization;

/// Characters used as an apostrophe in Ukrainian text
pub const APOSTROPHES: [char; 5] = ['\'', '\u{2019}', '\u{02BC}', '\u{2018}', '`'];

pub trait Preprocessor {
    /// Lookup key for a single word
    fn process(&self, word: &str) -> String {
        let word = word.trim();

        if word.is_empty() {
            return String::new();
        }

        word.nfc()
            .flat_map(char::to_lowercase)
            .map(|c| if APOSTROPHES.contains(&c) { '\'' } else { c })
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
