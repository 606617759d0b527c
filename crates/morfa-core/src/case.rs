use std::fmt;
use std::str::FromStr;

/// Grammatical case, in the order case tables are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Locative,
    Vocative,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ];

    /// Grammeme code used in tags
    pub fn code(&self) -> &'static str {
        match self {
            Case::Nominative => "nomn",
            Case::Genitive => "gent",
            Case::Dative => "datv",
            Case::Accusative => "accs",
            Case::Instrumental => "ablt",
            Case::Locative => "loct",
            Case::Vocative => "voct",
        }
    }

    /// Ukrainian name of the case
    pub fn label(&self) -> &'static str {
        match self {
            Case::Nominative => "Називний",
            Case::Genitive => "Родовий",
            Case::Dative => "Давальний",
            Case::Accusative => "Знахідний",
            Case::Instrumental => "Орудний",
            Case::Locative => "Місцевий",
            Case::Vocative => "Кличний",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case grammeme: {0}")]
pub struct UnknownCase(pub String);

impl FromStr for Case {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .into_iter()
            .find(|case| case.code() == s)
            .ok_or_else(|| UnknownCase(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for case in Case::ALL {
            assert_eq!(case.code().parse::<Case>(), Ok(case));
        }
        assert!("nom".parse::<Case>().is_err());
    }

    #[test]
    fn test_fixed_order() {
        let codes: Vec<&str> = Case::ALL.iter().map(Case::code).collect();
        assert_eq!(
            codes,
            ["nomn", "gent", "datv", "accs", "ablt", "loct", "voct"]
        );
    }

    #[test]
    fn test_labels_are_cyrillic() {
        assert_eq!(Case::Accusative.label(), "Знахідний");
        assert_eq!(Case::Vocative.label(), "Кличний");
        for case in Case::ALL {
            assert!(case.label().chars().all(|c| ('\u{0400}'..='\u{04FF}').contains(&c)));
        }
    }
}
