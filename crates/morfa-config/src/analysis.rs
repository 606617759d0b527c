use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseSettingError;

/// What to emit for a word the analyzer has no parse for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnUnrecognized {
    /// Emit `{"word": ..., "error": "Not recognized"}`
    MarkError,
    /// Emit the raw token as a plain string
    PassThrough,
}

impl FromStr for OnUnrecognized {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "mark-error" | "markerror" => Ok(Self::MarkError),
            "pass-through" | "passthrough" => Ok(Self::PassThrough),
            _ => Err(ParseSettingError {
                value: s.to_string(),
                expected: "mark-error, pass-through",
            }),
        }
    }
}

impl fmt::Display for OnUnrecognized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MarkError => f.write_str("mark-error"),
            Self::PassThrough => f.write_str("pass-through"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Explicit policy; `None` leaves the choice to the entry point
    pub on_unrecognized: Option<OnUnrecognized>,
}

impl AnalysisConfig {
    pub fn policy_or(&self, fallback: OnUnrecognized) -> OnUnrecognized {
        self.on_unrecognized.unwrap_or(fallback)
    }
}
