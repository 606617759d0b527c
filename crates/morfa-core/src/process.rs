use morfa_config::analysis::OnUnrecognized;
use morfa_config::output::CaseKeys;

use crate::input::{Input, RankPositionInput};
use crate::language::MorphAnalyzer;
use crate::report::{
    NOT_RECOGNIZED, PhraseAnalysis, RankPositionResult, UnrecognizedWord, WordAnalysis, WordEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    pub on_unrecognized: OnUnrecognized,
    pub case_keys: CaseKeys,
}

impl ProcessOptions {
    pub fn new(on_unrecognized: OnUnrecognized) -> Self {
        Self {
            on_unrecognized,
            case_keys: CaseKeys::default(),
        }
    }
}

/// Everything an entry point may print on success
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Report {
    Words(Vec<WordEntry>),
    Phrase(PhraseAnalysis),
    RankPosition(RankPositionResult),
}

/// Analyze one word with its best parse
pub fn process_word(
    word: &str,
    analyzer: &dyn MorphAnalyzer,
    options: ProcessOptions,
) -> WordEntry {
    match analyzer.best_parse(word) {
        Some(best) => WordEntry::Analyzed(WordAnalysis::from_candidate(
            word,
            best.as_ref(),
            options.case_keys,
        )),
        None => {
            tracing::debug!("Word not recognized: {word}");
            match options.on_unrecognized {
                OnUnrecognized::MarkError => WordEntry::Unrecognized(UnrecognizedWord {
                    word: word.to_string(),
                    error: NOT_RECOGNIZED,
                }),
                OnUnrecognized::PassThrough => WordEntry::Raw(word.to_string()),
            }
        }
    }
}

pub fn process_words(
    words: &[String],
    analyzer: &dyn MorphAnalyzer,
    options: ProcessOptions,
) -> Vec<WordEntry> {
    words
        .iter()
        .map(|word| process_word(word, analyzer, options))
        .collect()
}

/// Split on whitespace and analyze every token in order
pub fn process_phrase(
    phrase: &str,
    analyzer: &dyn MorphAnalyzer,
    options: ProcessOptions,
) -> PhraseAnalysis {
    let parts = phrase
        .split_whitespace()
        .map(|word| process_word(word, analyzer, options))
        .collect();

    PhraseAnalysis {
        original: phrase.to_string(),
        parts,
    }
}

pub fn process_rank_position(
    input: &RankPositionInput,
    analyzer: &dyn MorphAnalyzer,
    options: ProcessOptions,
) -> RankPositionResult {
    RankPositionResult {
        rank: process_phrase(&input.rank, analyzer, options),
        position: process_phrase(&input.position, analyzer, options),
    }
}

pub fn process(input: &Input, analyzer: &dyn MorphAnalyzer, options: ProcessOptions) -> Report {
    match input {
        Input::Words(words) => Report::Words(process_words(words, analyzer, options)),
        Input::Phrase(phrase) => Report::Phrase(process_phrase(phrase, analyzer, options)),
        Input::RankPosition(input) => {
            Report::RankPosition(process_rank_position(input, analyzer, options))
        }
    }
}
