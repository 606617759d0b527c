use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Lexicon files merged over the embedded one, in order
    pub additional_paths: Vec<String>,
}
