use morfa_core::case::Case;
use morfa_core::language::ParseCandidate;

use crate::dictionary::Lexeme;

/// A word form located in a paradigm
#[derive(Debug, Clone)]
pub struct UkrainianParse {
    word: String,
    lexeme: Lexeme,
    form: usize,
    score: f64,
    methods: Vec<String>,
}

impl UkrainianParse {
    pub fn new(word: &str, lexeme: Lexeme, form: usize, score: f64, methods: Vec<String>) -> Self {
        Self {
            word: word.to_string(),
            lexeme,
            form,
            score,
            methods,
        }
    }
}

impl ParseCandidate for UkrainianParse {
    fn word(&self) -> &str {
        &self.word
    }

    fn normal_form(&self) -> String {
        self.lexeme.normal_form()
    }

    fn tag(&self) -> String {
        self.lexeme.paradigm.tag(self.form).to_string()
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn inflect(&self, case: Case) -> Option<String> {
        let idx = self.lexeme.paradigm.inflect(self.form, case)?;
        self.lexeme.form(idx)
    }

    fn methods_stack(&self) -> Vec<String> {
        self.methods.clone()
    }
}
