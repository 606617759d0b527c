use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseSettingError;

fn default_indent() -> usize {
    2
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputEncoding {
    /// Non-ASCII text written as literal UTF-8
    #[default]
    Utf8,
    /// Non-ASCII text written as `\uXXXX` escapes
    Ascii,
}

impl FromStr for OutputEncoding {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "ascii" => Ok(Self::Ascii),
            _ => Err(ParseSettingError {
                value: s.to_string(),
                expected: "utf-8, ascii",
            }),
        }
    }
}

/// Keys used for the case table of a recognized word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseKeys {
    /// `nomn`, `gent`, ...
    #[default]
    Codes,
    /// `Називний`, `Родовий`, ...
    Labels,
}

impl FromStr for CaseKeys {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "codes" | "code" => Ok(Self::Codes),
            "labels" | "label" => Ok(Self::Labels),
            _ => Err(ParseSettingError {
                value: s.to_string(),
                expected: "codes, labels",
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub encoding: OutputEncoding,
    pub case_keys: CaseKeys,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            encoding: OutputEncoding::default(),
            case_keys: CaseKeys::default(),
            indent: default_indent(),
        }
    }
}
