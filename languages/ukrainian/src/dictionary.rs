use std::collections::HashMap;
use std::sync::Arc;

use morfa_core::preprocess::{DefaultPreprocessor, Preprocessor};
use serde::Deserialize;

use crate::loader::LoadError;
use crate::paradigm::{Paradigm, ParadigmForm};
use crate::tag::split_grammemes;

// JSON structures of the lexicon format
#[derive(Debug, Deserialize)]
pub struct LexiconDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    paradigms: Vec<ParadigmJson>,
    #[serde(default)]
    lexemes: Vec<LexemeJson>,
}

#[derive(Debug, Deserialize)]
struct ParadigmJson {
    name: String,
    tag: String,
    forms: Vec<FormJson>,
}

#[derive(Debug, Deserialize)]
struct FormJson {
    #[serde(default)]
    stem: usize,
    #[serde(default)]
    suffix: String,
    #[serde(default)]
    tag: String,
}

#[derive(Debug, Deserialize)]
struct LexemeJson {
    stems: Vec<String>,
    paradigm: String,
}

impl LexiconDocument {
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))
    }
}

/// Word with its stems and inflection table
#[derive(Debug, Clone)]
pub struct Lexeme {
    pub stems: Vec<String>,
    pub paradigm: Arc<Paradigm>,
}

impl Lexeme {
    pub fn form(&self, idx: usize) -> Option<String> {
        let form = self.paradigm.forms.get(idx)?;
        let stem = self.stems.get(form.stem)?;
        Some(format!("{stem}{}", form.suffix))
    }

    pub fn normal_form(&self) -> String {
        self.form(0).unwrap_or_default()
    }
}

/// Paradigms and lexemes indexed by every word form
#[derive(Debug, Default)]
pub struct Lexicon {
    paradigms: HashMap<String, Arc<Paradigm>>,
    lexemes: Vec<Lexeme>,
    form_index: HashMap<String, Vec<(usize, usize)>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let mut lexicon = Self::new();
        lexicon.extend(LexiconDocument::from_json(json_str)?)?;
        Ok(lexicon)
    }

    /// Add a document's paradigms and lexemes.
    ///
    /// Paradigms replace earlier ones of the same name for lexemes added from now on.
    /// Lexemes may refer to paradigms of earlier documents. On error nothing is added.
    pub fn extend(&mut self, doc: LexiconDocument) -> Result<usize, LoadError> {
        tracing::debug!(name = ?doc.name, version = ?doc.version, "Extending lexicon");
        let mut paradigms = self.paradigms.clone();
        for p in doc.paradigms {
            if p.forms.is_empty() {
                return Err(LoadError::InvalidFormat(format!(
                    "paradigm {} has no forms",
                    p.name
                )));
            }
            let paradigm = Paradigm {
                name: p.name.clone(),
                lexeme_grammemes: split_grammemes(&p.tag),
                forms: p
                    .forms
                    .into_iter()
                    .map(|f| ParadigmForm {
                        stem: f.stem,
                        suffix: f.suffix,
                        grammemes: split_grammemes(&f.tag),
                    })
                    .collect(),
            };
            paradigms.insert(p.name, Arc::new(paradigm));
        }

        let mut lexemes = Vec::with_capacity(doc.lexemes.len());
        for l in doc.lexemes {
            let paradigm = paradigms.get(&l.paradigm).ok_or_else(|| {
                LoadError::InvalidFormat(format!("unknown paradigm: {}", l.paradigm))
            })?;
            if paradigm.max_stem() >= l.stems.len() {
                return Err(LoadError::InvalidFormat(format!(
                    "lexeme {:?} needs {} stems for paradigm {}",
                    l.stems,
                    paradigm.max_stem() + 1,
                    l.paradigm
                )));
            }
            lexemes.push(Lexeme {
                stems: l.stems.iter().map(|s| DefaultPreprocessor.process(s)).collect(),
                paradigm: Arc::clone(paradigm),
            });
        }

        let added = lexemes.len();
        self.paradigms = paradigms;
        for lexeme in lexemes {
            self.push(lexeme);
        }

        Ok(added)
    }

    fn push(&mut self, lexeme: Lexeme) {
        let lexeme_idx = self.lexemes.len();
        for form_idx in 0..lexeme.paradigm.forms.len() {
            if let Some(word) = lexeme.form(form_idx) {
                // Same key the analyzer looks words up by
                self.form_index
                    .entry(DefaultPreprocessor.process(&word))
                    .or_default()
                    .push((lexeme_idx, form_idx));
            }
        }
        self.lexemes.push(lexeme);
    }

    /// Every (lexeme, form index) spelled as `word`, in lexicon order
    pub fn lookup(&self, word: &str) -> Vec<(&Lexeme, usize)> {
        self.form_index
            .get(word)
            .into_iter()
            .flatten()
            .filter_map(|&(lexeme_idx, form_idx)| {
                self.lexemes.get(lexeme_idx).map(|l| (l, form_idx))
            })
            .collect()
    }

    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    pub fn paradigm(&self, name: &str) -> Option<&Arc<Paradigm>> {
        self.paradigms.get(name)
    }

    pub fn entry_count(&self) -> usize {
        self.lexemes.len()
    }

    pub fn form_count(&self) -> usize {
        self.form_index.len()
    }
}
