use morfa_core::case::Case;

use crate::tag::{Tag, case_of};

/// Grammemes that a form keeps when inflected into another case
const AGREEMENT: [&str; 5] = ["sing", "plur", "masc", "femn", "neut"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadigmForm {
    /// Index into the lexeme's stems
    pub stem: usize,
    pub suffix: String,
    pub grammemes: Vec<String>,
}

impl ParadigmForm {
    pub fn case(&self) -> Option<Case> {
        case_of(&self.grammemes)
    }

    fn has(&self, grammeme: &str) -> bool {
        self.grammemes.iter().any(|g| g == grammeme)
    }

    /// Grammemes differing between two forms, ignoring case
    fn distance(&self, other: &ParadigmForm) -> usize {
        let non_case = |g: &&String| g.parse::<Case>().is_err();
        let missing = self
            .grammemes
            .iter()
            .filter(non_case)
            .filter(|g| !other.has(g))
            .count();
        let extra = other
            .grammemes
            .iter()
            .filter(non_case)
            .filter(|g| !self.has(g))
            .count();
        missing + extra
    }
}

/// Inflection table shared by lexemes of one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paradigm {
    pub name: String,
    pub lexeme_grammemes: Vec<String>,
    pub forms: Vec<ParadigmForm>,
}

impl Paradigm {
    pub fn tag(&self, form: usize) -> Tag {
        let grammemes = self
            .forms
            .get(form)
            .map(|f| f.grammemes.as_slice())
            .unwrap_or_default();
        Tag::new(&self.lexeme_grammemes, grammemes)
    }

    pub fn pos(&self) -> Option<&str> {
        self.lexeme_grammemes.first().map(String::as_str)
    }

    /// Every form is built on the first stem
    pub fn is_single_stem(&self) -> bool {
        self.forms.iter().all(|f| f.stem == 0)
    }

    /// Highest stem index any form refers to
    pub fn max_stem(&self) -> usize {
        self.forms.iter().map(|f| f.stem).max().unwrap_or(0)
    }

    /// Form index for `case`, keeping number and gender of form `from`.
    ///
    /// Among agreeing forms the closest one wins, ties go to paradigm order.
    /// Forms without a case cannot be inflected.
    pub fn inflect(&self, from: usize, case: Case) -> Option<usize> {
        let current = self.forms.get(from)?;
        current.case()?;

        let agreement: Vec<&String> = current
            .grammemes
            .iter()
            .filter(|g| AGREEMENT.contains(&g.as_str()))
            .collect();

        self.forms
            .iter()
            .enumerate()
            .filter(|(_, form)| form.case() == Some(case))
            .filter(|(_, form)| agreement.iter().all(|g| form.has(g)))
            .min_by_key(|(_, form)| current.distance(form))
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::split_grammemes;

    fn paradigm(forms: &[(&str, &str)]) -> Paradigm {
        Paradigm {
            name: "test".to_string(),
            lexeme_grammemes: split_grammemes("ADJF"),
            forms: forms
                .iter()
                .map(|(suffix, tag)| ParadigmForm {
                    stem: 0,
                    suffix: suffix.to_string(),
                    grammemes: split_grammemes(tag),
                })
                .collect(),
        }
    }

    #[test]
    fn test_inflect_keeps_gender_and_number() {
        let p = paradigm(&[
            ("ий", "masc,sing,nomn"),
            ("ого", "masc,sing,gent"),
            ("а", "femn,sing,nomn"),
            ("ої", "femn,sing,gent"),
            ("і", "plur,nomn"),
            ("их", "plur,gent"),
        ]);
        assert_eq!(p.inflect(0, Case::Genitive), Some(1));
        assert_eq!(p.inflect(2, Case::Genitive), Some(3));
        assert_eq!(p.inflect(5, Case::Nominative), Some(4));
        assert_eq!(p.inflect(0, Case::Vocative), None);
    }

    #[test]
    fn test_inflect_prefers_first_of_equal_forms() {
        let p = paradigm(&[
            ("ий", "masc,sing,nomn"),
            ("ий", "masc,sing,accs,inan"),
            ("ого", "masc,sing,accs,anim"),
        ]);
        assert_eq!(p.inflect(0, Case::Accusative), Some(1));
        // from the animate accusative the animate form is closer
        assert_eq!(p.inflect(2, Case::Accusative), Some(2));
    }

    #[test]
    fn test_caseless_form() {
        let p = paradigm(&[("", "")]);
        for case in Case::ALL {
            assert_eq!(p.inflect(0, case), None);
        }
        assert_eq!(p.inflect(7, Case::Nominative), None);
    }
}
