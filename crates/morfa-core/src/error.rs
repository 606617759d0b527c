/// Terminal input failures, reported as `{"error": <message>}`
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No input")]
    MissingInput,

    #[error("Invalid JSON input")]
    MalformedJson(#[source] serde_json::Error),

    #[error("{expected}")]
    ShapeMismatch {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
