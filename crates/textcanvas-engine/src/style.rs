use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown white-space value: {0}")]
    UnknownWhiteSpace(String),
}

/// How whitespace inside a fragment is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum WhiteSpace {
    /// Runs of whitespace collapse into a single space.
    #[default]
    Normal,
    /// Whitespace is preserved verbatim.
    Pre,
}

impl WhiteSpace {
    pub fn is_pre(self) -> bool {
        matches!(self, WhiteSpace::Pre)
    }
}

/// Parses a CSS `white-space` keyword.
///
/// The wrapping variants collapse to the two policies the renderer knows:
/// `nowrap` behaves like `normal`, `pre-line` and `pre-wrap` like `pre`.
impl FromStr for WhiteSpace {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "nowrap" => Ok(WhiteSpace::Normal),
            "pre" | "pre-line" | "pre-wrap" => Ok(WhiteSpace::Pre),
            _ => Err(StyleError::UnknownWhiteSpace(s.to_string())),
        }
    }
}

impl TryFrom<String> for WhiteSpace {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Horizontal alignment of a line. Stored on [`crate::Line`], not applied yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Right,
    Center,
}

/// The styling information the canvas needs from whoever writes to it.
///
/// Only the whitespace policy matters to the canvas; callers usually pass
/// their own element type.
pub trait StyleContext {
    fn white_space(&self) -> WhiteSpace;
}

impl StyleContext for WhiteSpace {
    fn white_space(&self) -> WhiteSpace {
        *self
    }
}
