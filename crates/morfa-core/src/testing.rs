use std::collections::HashMap;

use crate::case::Case;
use crate::language::{MorphAnalyzer, ParseCandidate};

/// Candidate whose case forms are `<lemma>-<code>`
#[derive(Clone)]
pub struct FakeCandidate {
    word: String,
    lemma: String,
    missing: Vec<Case>,
}

impl FakeCandidate {
    pub fn noun(lemma: &str) -> Self {
        Self {
            word: lemma.to_string(),
            lemma: lemma.to_string(),
            missing: Vec::new(),
        }
    }

    pub fn without_case(mut self, case: Case) -> Self {
        self.missing.push(case);
        self
    }
}

impl ParseCandidate for FakeCandidate {
    fn word(&self) -> &str {
        &self.word
    }

    fn normal_form(&self) -> String {
        self.lemma.clone()
    }

    fn tag(&self) -> String {
        "NOUN sing,nomn".to_string()
    }

    fn score(&self) -> f64 {
        1.0
    }

    fn inflect(&self, case: Case) -> Option<String> {
        if self.missing.contains(&case) {
            return None;
        }
        Some(format!("{}-{}", self.lemma, case.code()))
    }

    fn methods_stack(&self) -> Vec<String> {
        vec!["FakeAnalyzer()".to_string()]
    }
}

/// Analyzer that knows a fixed set of lower-case words
#[derive(Default)]
pub struct FakeAnalyzer {
    known: HashMap<String, FakeCandidate>,
}

impl FakeAnalyzer {
    pub fn with_words(words: &[&str]) -> Self {
        let known = words
            .iter()
            .map(|w| (w.to_string(), FakeCandidate::noun(w)))
            .collect();
        Self { known }
    }
}

impl MorphAnalyzer for FakeAnalyzer {
    fn language_code(&self) -> &str {
        "xx"
    }

    fn parse(&self, word: &str) -> Vec<Box<dyn ParseCandidate>> {
        self.known
            .get(&word.to_lowercase())
            .map(|c| Box::new(c.clone()) as Box<dyn ParseCandidate>)
            .into_iter()
            .collect()
    }
}
