use std::fmt;

use morfa_core::case::Case;

/// Grammemes shared by all forms of a lexeme, then those of one form.
///
/// Rendered as `NOUN,anim,masc sing,nomn`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub lexeme: Vec<String>,
    pub form: Vec<String>,
}

impl Tag {
    pub fn new(lexeme: &[String], form: &[String]) -> Self {
        Self {
            lexeme: lexeme.to_vec(),
            form: form.to_vec(),
        }
    }

    /// Part of speech, the first lexeme grammeme
    pub fn pos(&self) -> Option<&str> {
        self.lexeme.first().map(String::as_str)
    }

    pub fn contains(&self, grammeme: &str) -> bool {
        self.lexeme.iter().chain(&self.form).any(|g| g == grammeme)
    }

    pub fn case(&self) -> Option<Case> {
        case_of(&self.form)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme.join(","))?;
        if !self.form.is_empty() {
            write!(f, " {}", self.form.join(","))?;
        }
        Ok(())
    }
}

pub(crate) fn split_grammemes(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn case_of(grammemes: &[String]) -> Option<Case> {
    grammemes.iter().find_map(|g| g.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Tag {
        let (lexeme, form) = text.split_once(' ').unwrap_or((text, ""));
        Tag {
            lexeme: split_grammemes(lexeme),
            form: split_grammemes(form),
        }
    }

    #[test]
    fn test_parse_and_display() {
        let tag = parse("NOUN,anim,masc sing,nomn");
        assert_eq!(tag.lexeme, ["NOUN", "anim", "masc"]);
        assert_eq!(tag.form, ["sing", "nomn"]);
        assert_eq!(tag.to_string(), "NOUN,anim,masc sing,nomn");
    }

    #[test]
    fn test_lexeme_only() {
        let tag = parse("CONJ");
        assert_eq!(tag.pos(), Some("CONJ"));
        assert!(tag.form.is_empty());
        assert_eq!(tag.case(), None);
        assert_eq!(tag.to_string(), "CONJ");
    }

    #[test]
    fn test_case_and_contains() {
        let tag = parse("ADJF masc,sing,accs,anim");
        assert_eq!(tag.case(), Some(Case::Accusative));
        assert!(tag.contains("ADJF"));
        assert!(tag.contains("anim"));
        assert!(!tag.contains("femn"));
    }
}
