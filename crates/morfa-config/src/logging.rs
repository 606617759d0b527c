use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseSettingError, parse_var};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ParseSettingError {
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl LogConfig {
    /// Resolved ahead of [`crate::Config`], whose warnings need a subscriber
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut log = LogConfig::default();
        if let Some(format) = parse_var::<LogFormat>(&lookup, "MORFA_LOG_FORMAT") {
            log.format = format;
        }
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_env() {
        let log = LogConfig::from_lookup(|key| (key == "MORFA_LOG_FORMAT").then(|| "JSON".to_string()));
        assert_eq!(log.format, LogFormat::Json);
    }

    #[test]
    fn test_format_defaults_to_text() {
        assert_eq!(LogConfig::from_lookup(|_| None).format, LogFormat::Text);
        let log = LogConfig::from_lookup(|_| Some("xml".to_string()));
        assert_eq!(log.format, LogFormat::Text);
    }
}
