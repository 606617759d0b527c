use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::analysis::{AnalysisConfig, OnUnrecognized};
use self::lexicon::LexiconConfig;
use self::output::{CaseKeys, OutputConfig, OutputEncoding};

pub mod analysis;
pub mod lexicon;
pub mod logging;
pub mod output;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub lexicon: LexiconConfig,
}

impl Config {
    /// Defaults overlaid with `MORFA_*` environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::new`], reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(policy) = parse_var::<OnUnrecognized>(&lookup, "MORFA_ON_UNRECOGNIZED") {
            config.analysis.on_unrecognized = Some(policy);
        }

        if let Some(encoding) = parse_var::<OutputEncoding>(&lookup, "MORFA_OUTPUT_ENCODING") {
            config.output.encoding = encoding;
        }

        if let Some(case_keys) = parse_var::<CaseKeys>(&lookup, "MORFA_CASE_KEYS") {
            config.output.case_keys = case_keys;
        }

        if let Some(indent) = parse_var::<usize>(&lookup, "MORFA_INDENT") {
            config.output.indent = indent;
        }

        if let Some(paths) = lookup("MORFA_LEXICON_PATHS") {
            config.lexicon.additional_paths = env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }

        config
    }
}

pub(crate) fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {key}={raw:?}: {e}");
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value {value:?}, expected one of: {expected}")]
pub struct ParseSettingError {
    pub value: String,
    pub expected: &'static str,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.analysis.on_unrecognized, None);
        assert_eq!(config.output.encoding, OutputEncoding::Utf8);
        assert_eq!(config.output.case_keys, CaseKeys::Codes);
        assert_eq!(config.output.indent, 2);
        assert!(config.lexicon.additional_paths.is_empty());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("MORFA_ON_UNRECOGNIZED", "pass-through"),
            ("MORFA_OUTPUT_ENCODING", "ascii"),
            ("MORFA_CASE_KEYS", "labels"),
            ("MORFA_INDENT", "4"),
        ]));
        assert_eq!(
            config.analysis.on_unrecognized,
            Some(OnUnrecognized::PassThrough)
        );
        assert_eq!(config.output.encoding, OutputEncoding::Ascii);
        assert_eq!(config.output.case_keys, CaseKeys::Labels);
        assert_eq!(config.output.indent, 4);
    }

    #[test]
    fn test_invalid_env_value_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[
            ("MORFA_OUTPUT_ENCODING", "cp1251"),
            ("MORFA_INDENT", "wide"),
        ]));
        assert_eq!(config.output.encoding, OutputEncoding::Utf8);
        assert_eq!(config.output.indent, 2);
    }

    #[test]
    fn test_lexicon_paths_are_split() {
        let joined = env::join_paths(["/tmp/a.json", "/tmp/b.json"])
            .unwrap()
            .into_string()
            .unwrap();
        let config = Config::from_lookup(lookup_from(&[("MORFA_LEXICON_PATHS", joined.as_str())]));
        assert_eq!(
            config.lexicon.additional_paths,
            vec!["/tmp/a.json".to_string(), "/tmp/b.json".to_string()]
        );
    }
}
