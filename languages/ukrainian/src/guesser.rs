use std::collections::HashMap;
use std::sync::Arc;

use crate::dictionary::Lexicon;
use crate::paradigm::Paradigm;

/// Longest word ending used for prediction
pub const MAX_SUFFIX_LEN: usize = 5;
/// Shorter endings are too ambiguous to predict from
pub const MIN_SUFFIX_LEN: usize = 2;
/// Shortest word the guesser will try
pub const MIN_WORD_LEN: usize = 4;
/// Upper bound of a guessed parse score
pub const GUESS_WEIGHT: f64 = 0.5;

const DECLINABLE: [&str; 2] = ["NOUN", "ADJF"];

#[derive(Debug, Clone)]
pub struct Prediction {
    pub paradigm: Arc<Paradigm>,
    pub form: usize,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct Guess {
    pub stem: String,
    pub suffix: String,
    pub paradigm: Arc<Paradigm>,
    pub form: usize,
    pub score: f64,
}

/// Predicts paradigm and form of unknown words from endings of known ones
#[derive(Debug, Default)]
pub struct SuffixGuesser {
    endings: HashMap<String, Vec<Prediction>>,
}

impl SuffixGuesser {
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut endings: HashMap<String, Vec<Prediction>> = HashMap::new();

        let guessable = lexicon.lexemes().iter().filter(|l| {
            l.paradigm.is_single_stem()
                && l.paradigm.pos().is_some_and(|pos| DECLINABLE.contains(&pos))
        });

        for lexeme in guessable {
            for (form_idx, form) in lexeme.paradigm.forms.iter().enumerate() {
                let Some(word) = lexeme.form(form_idx) else {
                    continue;
                };
                let chars: Vec<char> = word.chars().collect();
                let suffix_len = form.suffix.chars().count();
                // Keep at least one stem character in front of the ending
                let longest = MAX_SUFFIX_LEN.min(chars.len().saturating_sub(1));
                let shortest = MIN_SUFFIX_LEN.max(suffix_len);

                for len in shortest..=longest {
                    let ending: String = chars[chars.len() - len..].iter().collect();
                    let predictions = endings.entry(ending).or_default();
                    let known = predictions.iter().position(|p| {
                        Arc::ptr_eq(&p.paradigm, &lexeme.paradigm) && p.form == form_idx
                    });
                    match known {
                        Some(idx) => predictions[idx].count += 1,
                        None => predictions.push(Prediction {
                            paradigm: Arc::clone(&lexeme.paradigm),
                            form: form_idx,
                            count: 1,
                        }),
                    }
                }
            }
        }

        // Most frequent prediction first, lexicon order otherwise
        for predictions in endings.values_mut() {
            predictions.sort_by(|a, b| b.count.cmp(&a.count));
        }

        Self { endings }
    }

    /// Guesses for a normalized word, from its longest known ending
    pub fn guess(&self, word: &str) -> Vec<Guess> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < MIN_WORD_LEN || !chars.iter().all(|c| is_ukrainian_letter(*c)) {
            return Vec::new();
        }

        let longest = MAX_SUFFIX_LEN.min(chars.len() - 1);
        for len in (MIN_SUFFIX_LEN..=longest).rev() {
            let ending: String = chars[chars.len() - len..].iter().collect();
            let Some(predictions) = self.endings.get(&ending) else {
                continue;
            };

            let total: u32 = predictions.iter().map(|p| p.count).sum();
            let guesses: Vec<Guess> = predictions
                .iter()
                .filter_map(|p| {
                    let form = p.paradigm.forms.get(p.form)?;
                    let stem = word.strip_suffix(form.suffix.as_str())?;
                    if stem.is_empty() {
                        return None;
                    }
                    Some(Guess {
                        stem: stem.to_string(),
                        suffix: ending.clone(),
                        paradigm: Arc::clone(&p.paradigm),
                        form: p.form,
                        score: GUESS_WEIGHT * f64::from(p.count) / f64::from(total),
                    })
                })
                .collect();

            if !guesses.is_empty() {
                return guesses;
            }
        }

        Vec::new()
    }
}

/// Lower-case Ukrainian letter, apostrophe or hyphen
pub fn is_ukrainian_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'є' | 'і' | 'ї' | 'ґ' | '\'' | '-') && !matches!(c, 'ъ' | 'ы' | 'э')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LexiconLoader;

    fn guesser() -> SuffixGuesser {
        SuffixGuesser::new(&LexiconLoader::load_embedded().unwrap())
    }

    #[test]
    fn test_guess_from_known_ending() {
        let guesses = guesser().guess("курсант");
        let best = guesses.first().unwrap();

        assert_eq!(best.stem, "курсант");
        assert_eq!(best.paradigm.name, "noun_masc_anim_hard");
        assert_eq!(best.form, 0);
        assert_eq!(best.suffix, "ант");
        assert_eq!(best.score, GUESS_WEIGHT);
    }

    #[test]
    fn test_guess_scores_sum_to_weight() {
        let guesses = guesser().guess("курсантові");
        assert!(!guesses.is_empty());
        let total: f64 = guesses.iter().map(|g| g.score).sum();
        assert!((total - GUESS_WEIGHT).abs() < 1e-9);
        assert!(guesses.iter().all(|g| g.stem == "курсант"));
    }

    #[test]
    fn test_rejects_foreign_letters() {
        let g = guesser();
        assert!(g.guess("фывфыв123").is_empty());
        assert!(g.guess("фывфыв").is_empty());
        assert!(g.guess("sergeant").is_empty());
        assert!(g.guess("ант").is_empty());
    }

    #[test]
    fn test_alphabet() {
        assert!("ґанок'ї-є".chars().all(is_ukrainian_letter));
        assert!(!is_ukrainian_letter('ы'));
        assert!(!is_ukrainian_letter('ё'));
        assert!(!is_ukrainian_letter('A'));
    }
}
