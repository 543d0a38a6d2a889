//! # Whitespace Collapsing
//!
//! The [`Segment`] runs both renderers consume. [`Collapser`] normalizes a
//! canvas block; [`crate::Line`] bodies are built from [`words`] instead and
//! agree with it on normal text.
//!
//! Text arrives as an ordered run of [`Segment`]s, each either normal
//! (collapsible) or preformatted (verbatim). [`Collapser`] is the state
//! machine that turns such a run into one string:
//!
//! - a whitespace character in normal text is dropped when nothing has been
//!   written yet or when the previous emitted character was a collapsed space,
//!   otherwise it becomes a single `' '`
//! - any other character is copied
//! - preformatted text is copied verbatim and leaves the machine in a neutral
//!   state, so whitespace following it is never merged with whitespace the
//!   preformatted text itself ended with

use serde::{Deserialize, Serialize};

use crate::style::WhiteSpace;

/// A run of text tagged with its whitespace policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Normal(String),
    Pre(String),
}

impl Segment {
    pub fn new(text: impl Into<String>, white_space: WhiteSpace) -> Self {
        match white_space {
            WhiteSpace::Normal => Segment::Normal(text.into()),
            WhiteSpace::Pre => Segment::Pre(text.into()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Normal(text) | Segment::Pre(text) => text,
        }
    }

    pub fn white_space(&self) -> WhiteSpace {
        match self {
            Segment::Normal(_) => WhiteSpace::Normal,
            Segment::Pre(_) => WhiteSpace::Pre,
        }
    }
}

/// True for characters that collapse in normal text.
pub fn is_collapsible(ch: char) -> bool {
    ch.is_whitespace()
}

/// Splits normal text into its words, i.e. the pieces between runs of
/// collapsible whitespace.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_collapsible).filter(|w| !w.is_empty())
}

/// Follows every newline in `text` with `padding` spaces so continuation
/// lines of preformatted content keep the surrounding indentation.
pub fn indent_continuations(text: &str, padding: usize) -> String {
    if padding == 0 {
        return text.to_string();
    }
    let replacement = format!("\n{}", " ".repeat(padding));
    text.replace('\n', &replacement)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    /// A visible character from normal text, or nothing at all.
    Text,
    /// A single space standing in for a collapsed whitespace run.
    CollapsedSpace,
    /// Preformatted text; its trailing whitespace does not absorb what follows.
    Preformatted,
}

/// Incremental whitespace normalizer over a run of segments.
#[derive(Debug, Clone)]
pub struct Collapser {
    out: String,
    last: Last,
}

impl Default for Collapser {
    fn default() -> Self {
        Self::new()
    }
}

impl Collapser {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            last: Last::Text,
        }
    }

    pub fn push(&mut self, segment: &Segment) {
        match segment {
            Segment::Normal(text) => self.push_normal(text),
            Segment::Pre(text) => self.push_pre(text),
        }
    }

    pub fn push_normal(&mut self, text: &str) {
        self.out.reserve(text.len());
        for ch in text.chars() {
            if !is_collapsible(ch) {
                self.out.push(ch);
                self.last = Last::Text;
            } else if !self.out.is_empty() && self.last != Last::CollapsedSpace {
                self.out.push(' ');
                self.last = Last::CollapsedSpace;
            }
        }
    }

    pub fn push_pre(&mut self, text: &str) {
        self.out.push_str(text);
        self.last = Last::Preformatted;
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Normalizes a whole run of segments into a single string.
pub fn collapse<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> String {
    let mut collapser = Collapser::new();
    for segment in segments {
        collapser.push(segment);
    }
    collapser.finish()
}
