use crate::case::Case;

/// Morphological analysis interface for language implementations
pub trait MorphAnalyzer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "uk", ...)
    fn language_code(&self) -> &str;

    /// All parses of a single word, best first. Empty when the word is not recognized.
    fn parse(&self, word: &str) -> Vec<Box<dyn ParseCandidate>>;

    /// Highest ranked parse, no re-ranking
    fn best_parse(&self, word: &str) -> Option<Box<dyn ParseCandidate>> {
        self.parse(word).into_iter().next()
    }
}

/// One grammatical interpretation of a word
pub trait ParseCandidate: Send + Sync {
    /// Word form as looked up
    fn word(&self) -> &str;

    /// Dictionary (lemma) form
    fn normal_form(&self) -> String;

    /// Textual grammatical tag
    fn tag(&self) -> String;

    /// Confidence, higher is better
    fn score(&self) -> f64;

    /// Same lexeme in the given case, if the paradigm has such a form
    fn inflect(&self, case: Case) -> Option<String>;

    /// Analyzer steps that produced this parse
    fn methods_stack(&self) -> Vec<String>;

    fn inflect_all(&self) -> Vec<(Case, Option<String>)> {
        Case::ALL
            .into_iter()
            .map(|case| (case, self.inflect(case)))
            .collect()
    }
}
