use morfa_config::output::CaseKeys;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::case::Case;
use crate::language::ParseCandidate;

pub const NOT_RECOGNIZED: &str = "Not recognized";

/// Inflected form per case. Every case is present, `None` when the form does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseTable {
    forms: Vec<(Case, Option<String>)>,
    keys: CaseKeys,
}

impl CaseTable {
    pub fn from_candidate(candidate: &dyn ParseCandidate, keys: CaseKeys) -> Self {
        let inflected = candidate.inflect_all();
        // Keyed by Case::ALL so no case is ever dropped or repeated
        let forms = Case::ALL
            .into_iter()
            .map(|case| {
                let form = inflected
                    .iter()
                    .find(|(c, _)| *c == case)
                    .and_then(|(_, form)| form.clone());
                (case, form)
            })
            .collect();

        Self { forms, keys }
    }

    pub fn get(&self, case: Case) -> Option<&str> {
        self.forms
            .iter()
            .find(|(c, _)| *c == case)
            .and_then(|(_, form)| form.as_deref())
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl Serialize for CaseTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.forms.len()))?;
        for (case, form) in &self.forms {
            let key = match self.keys {
                CaseKeys::Codes => case.code(),
                CaseKeys::Labels => case.label(),
            };
            map.serialize_entry(key, form)?;
        }
        map.end()
    }
}

/// Report for a recognized word
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WordAnalysis {
    pub word: String,
    pub normal_form: String,
    pub tag: String,
    pub score: f64,
    pub cases: CaseTable,
    pub methods_stack: Vec<String>,
}

impl WordAnalysis {
    pub fn from_candidate(word: &str, candidate: &dyn ParseCandidate, keys: CaseKeys) -> Self {
        Self {
            word: word.to_string(),
            normal_form: candidate.normal_form(),
            tag: candidate.tag(),
            score: candidate.score(),
            cases: CaseTable::from_candidate(candidate, keys),
            methods_stack: candidate.methods_stack(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UnrecognizedWord {
    pub word: String,
    pub error: &'static str,
}

/// One output slot per input word
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum WordEntry {
    Analyzed(WordAnalysis),
    Unrecognized(UnrecognizedWord),
    /// Raw token, emitted as a bare string
    Raw(String),
}

impl WordEntry {
    pub fn is_recognized(&self) -> bool {
        matches!(self, WordEntry::Analyzed(_))
    }

    pub fn analysis(&self) -> Option<&WordAnalysis> {
        match self {
            WordEntry::Analyzed(analysis) => Some(analysis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PhraseAnalysis {
    pub original: String,
    pub parts: Vec<WordEntry>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankPositionResult {
    pub rank: PhraseAnalysis,
    pub position: PhraseAnalysis,
}

/// Body of every failure printed on stdout
#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::FakeCandidate;

    #[test]
    fn test_case_table_keeps_absent_forms() {
        let candidate = FakeCandidate::noun("кіт").without_case(Case::Vocative);
        let table = CaseTable::from_candidate(&candidate, CaseKeys::Codes);

        assert_eq!(table.len(), 7);
        assert_eq!(table.get(Case::Genitive), Some("кіт-gent"));
        assert_eq!(table.get(Case::Vocative), None);

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["voct"], serde_json::Value::Null);
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_case_table_key_order() {
        let candidate = FakeCandidate::noun("кіт");
        let table = CaseTable::from_candidate(&candidate, CaseKeys::Codes);
        let text = serde_json::to_string(&table).unwrap();

        let positions: Vec<usize> = Case::ALL
            .iter()
            .map(|case| text.find(&format!("\"{}\"", case.code())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_case_table_labels() {
        let candidate = FakeCandidate::noun("кіт");
        let table = CaseTable::from_candidate(&candidate, CaseKeys::Labels);
        let value = serde_json::to_value(&table).unwrap();

        assert_eq!(value["Називний"], json!("кіт-nomn"));
        assert_eq!(value["Кличний"], json!("кіт-voct"));
        assert!(value.get("nomn").is_none());
    }

    #[test]
    fn test_word_entry_shapes() {
        let raw = serde_json::to_value(WordEntry::Raw("xyz".into())).unwrap();
        assert_eq!(raw, json!("xyz"));

        let unrecognized = serde_json::to_value(WordEntry::Unrecognized(UnrecognizedWord {
            word: "xyz".into(),
            error: NOT_RECOGNIZED,
        }))
        .unwrap();
        assert_eq!(unrecognized, json!({"word": "xyz", "error": "Not recognized"}));
    }

    #[test]
    fn test_word_analysis_fields() {
        let candidate = FakeCandidate::noun("кіт");
        let analysis = WordAnalysis::from_candidate("Кіт", &candidate, CaseKeys::Codes);
        let value = serde_json::to_value(&analysis).unwrap();

        assert_eq!(value["word"], json!("Кіт"));
        assert_eq!(value["normal_form"], json!("кіт"));
        assert_eq!(value["tag"], json!("NOUN sing,nomn"));
        assert_eq!(value["score"], json!(1.0));
        assert_eq!(value["methods_stack"], json!(["FakeAnalyzer()"]));
    }
}
