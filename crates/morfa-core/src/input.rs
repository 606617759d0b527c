use morfa_config::analysis::OnUnrecognized;
use serde::Deserialize;
use serde_json::Value;

use crate::error::InputError;

/// Shape of the JSON argument an entry point accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// `["кіт", "пес"]`
    Words,
    /// `"старший сержант"`
    Phrase,
    /// `{"rank": "...", "position": "..."}`
    RankPosition,
}

impl InputShape {
    pub fn expected(&self) -> &'static str {
        match self {
            InputShape::Words => "Expected a list of strings",
            InputShape::Phrase => "Expected a string input",
            InputShape::RankPosition => "Expected JSON with 'rank' and 'position' keys",
        }
    }

    /// Policy used when neither config nor flags pick one
    pub fn default_policy(&self) -> OnUnrecognized {
        match self {
            InputShape::Words => OnUnrecognized::MarkError,
            InputShape::Phrase | InputShape::RankPosition => OnUnrecognized::PassThrough,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankPositionInput {
    pub rank: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Words(Vec<String>),
    Phrase(String),
    RankPosition(RankPositionInput),
}

/// Validate the raw CLI argument against `shape`. Nothing is analyzed unless this succeeds.
pub fn decode(arg: Option<&str>, shape: InputShape) -> Result<Input, InputError> {
    let raw = arg.ok_or(InputError::MissingInput)?;
    let value: Value = serde_json::from_str(raw).map_err(InputError::MalformedJson)?;

    let mismatch = |source| InputError::ShapeMismatch {
        expected: shape.expected(),
        source,
    };

    let input = match shape {
        InputShape::Words => Input::Words(serde_json::from_value(value).map_err(mismatch)?),
        InputShape::Phrase => Input::Phrase(serde_json::from_value(value).map_err(mismatch)?),
        InputShape::RankPosition => {
            Input::RankPosition(serde_json::from_value(value).map_err(mismatch)?)
        }
    };

    Ok(input)
}
