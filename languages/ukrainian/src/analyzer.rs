use std::path::Path;
use std::sync::Arc;

use morfa_core::language::{MorphAnalyzer, ParseCandidate};
use morfa_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::dictionary::{Lexeme, Lexicon};
use crate::guesser::SuffixGuesser;
use crate::loader::LexiconLoader;
use crate::paradigm::{Paradigm, ParadigmForm};
use crate::parse::UkrainianParse;

/// Ukrainian morphological analyzer
pub struct UkrainianAnalyzer {
    lexicon: Lexicon,
    guesser: SuffixGuesser,
    number: Arc<Paradigm>,
    punctuation: Arc<Paradigm>,
}

impl UkrainianAnalyzer {
    /// Create an analyzer over the embedded lexicon
    pub fn new() -> Self {
        Self::with_additional_lexicons(&[])
    }

    /// Create an analyzer with additional lexicon paths merged over the embedded one
    pub fn with_additional_lexicons(additional_paths: &[String]) -> Self {
        let mut lexicon = LexiconLoader::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded lexicon: {}", e);
            tracing::warn!("Starting with empty lexicon");
            Lexicon::new()
        });

        for path in additional_paths {
            let merged = LexiconLoader::load_from_file(Path::new(path))
                .and_then(|doc| LexiconLoader::merge(&mut lexicon, doc));
            match merged {
                Ok(_) => tracing::info!("Merged additional lexicon from: {}", path),
                Err(e) => tracing::warn!("Failed to load lexicon from {}: {}", path, e),
            }
        }

        Self::from_lexicon(lexicon)
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        let guesser = SuffixGuesser::new(&lexicon);

        Self {
            lexicon,
            guesser,
            number: fixed_paradigm("NumberAnalyzer", &["NUMB", "intg"]),
            punctuation: fixed_paradigm("PunctuationAnalyzer", &["PNCT"]),
        }
    }

    /// Known word forms, sharing a score of 1.0
    fn dictionary_parses(&self, word: &str) -> Vec<UkrainianParse> {
        let hits = self.lexicon.lookup(word);
        let score = 1.0 / hits.len().max(1) as f64;

        hits.into_iter()
            .map(|(lexeme, form)| {
                let method = format!(
                    "DictionaryAnalyzer(word={:?}, paradigm={:?}, form={})",
                    word, lexeme.paradigm.name, form
                );
                UkrainianParse::new(word, lexeme.clone(), form, score, vec![method])
            })
            .collect()
    }

    fn number_parse(&self, word: &str) -> Option<UkrainianParse> {
        if !word.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(self.fixed_parse(word, &self.number))
    }

    fn punctuation_parse(&self, word: &str) -> Option<UkrainianParse> {
        if !word.chars().all(|c| c.is_ascii_punctuation() || is_typographic_punctuation(c)) {
            return None;
        }
        Some(self.fixed_parse(word, &self.punctuation))
    }

    fn fixed_parse(&self, word: &str, paradigm: &Arc<Paradigm>) -> UkrainianParse {
        let lexeme = Lexeme {
            stems: vec![word.to_string()],
            paradigm: Arc::clone(paradigm),
        };
        let method = format!("{}(word={:?})", paradigm.name, word);
        UkrainianParse::new(word, lexeme, 0, 1.0, vec![method])
    }

    fn guessed_parses(&self, word: &str) -> Vec<UkrainianParse> {
        self.guesser
            .guess(word)
            .into_iter()
            .map(|guess| {
                let methods = vec![
                    format!("KnownSuffixAnalyzer(suffix={:?})", guess.suffix),
                    format!(
                        "Paradigm(name={:?}, form={})",
                        guess.paradigm.name, guess.form
                    ),
                ];
                let lexeme = Lexeme {
                    stems: vec![guess.stem],
                    paradigm: guess.paradigm,
                };
                UkrainianParse::new(word, lexeme, guess.form, guess.score, methods)
            })
            .collect()
    }

    /// Parses for an already normalized word, best first
    pub fn analyze(&self, word: &str) -> Vec<UkrainianParse> {
        if word.is_empty() {
            return Vec::new();
        }

        let mut parses = self.dictionary_parses(word);
        if parses.is_empty() {
            parses.extend(self.number_parse(word));
        }
        if parses.is_empty() {
            parses.extend(self.punctuation_parse(word));
        }
        if parses.is_empty() {
            parses = self.guessed_parses(word);
        }

        // Stable, so equal scores keep lexicon order
        parses.sort_by(|a, b| b.score().total_cmp(&a.score()));
        parses
    }
}

impl Default for UkrainianAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphAnalyzer for UkrainianAnalyzer {
    fn language_code(&self) -> &str {
        "uk"
    }

    fn parse(&self, word: &str) -> Vec<Box<dyn ParseCandidate>> {
        let normalized = DefaultPreprocessor.process(word);
        let parses = self.analyze(&normalized);
        tracing::debug!("{} parse(s) for {:?}", parses.len(), word);

        parses
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn ParseCandidate>)
            .collect()
    }
}

/// Single caseless form, the word itself
fn fixed_paradigm(name: &str, grammemes: &[&str]) -> Arc<Paradigm> {
    Arc::new(Paradigm {
        name: name.to_string(),
        lexeme_grammemes: grammemes.iter().map(|g| g.to_string()).collect(),
        forms: vec![ParadigmForm {
            stem: 0,
            suffix: String::new(),
            grammemes: Vec::new(),
        }],
    })
}

fn is_typographic_punctuation(c: char) -> bool {
    matches!(c, '«' | '»' | '–' | '—' | '…' | '„' | '“' | '”')
}
