//! # Line Composition
//!
//! A [`Line`] is one physical output line: vertical margins, a left padding
//! that may end in a list bullet, a literal prefix and suffix, and a body
//! made of normal and preformatted segments.
//!
//! ```text
//! ⏎ × margin_before │ ␣ × (padding − |bullet|) │ bullet │ prefix │ body │ suffix │ ⏎ × margin_after
//! ```
//!
//! The body is the space-joined sequence of the words of every normal
//! segment and of every non-empty preformatted segment taken whole. Newlines inside a
//! preformatted segment are followed by `padding` spaces so continuation
//! lines stay aligned with the line's indentation.
//!
//! ## Marker Wire Format
//!
//! Callers that build line bodies as flat strings delimit preformatted runs
//! with [`PRE_MARKER`]: splitting on it yields alternating normal (even) and
//! preformatted (odd) segments. A doubled marker stands for one literal
//! marker character. [`LineContent::from_marked`] and
//! [`LineContent::to_marked`] convert between this format and segments.

use std::fmt;

use crate::{
    style::HorizontalAlignment,
    whitespace::{Segment, indent_continuations, words},
};

/// Delimits preformatted runs in a marked line body.
pub const PRE_MARKER: char = '\0';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LineError {
    #[error("List bullet {bullet:?} is {width} characters wide but the padding is only {padding}")]
    BulletWiderThanPadding {
        bullet: String,
        width: usize,
        padding: usize,
    },
}

/// Checks that `bullet` fits into `padding` columns.
pub(crate) fn check_bullet(padding: usize, bullet: &str) -> Result<(), LineError> {
    let width = bullet.chars().count();
    if width > padding {
        return Err(LineError::BulletWiderThanPadding {
            bullet: bullet.to_string(),
            width,
            padding,
        });
    }
    Ok(())
}

/// The body of a line as an ordered run of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineContent {
    segments: Vec<Segment>,
}

impl From<Vec<Segment>> for LineContent {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl From<&str> for LineContent {
    fn from(text: &str) -> Self {
        Self::from_marked(text)
    }
}

impl LineContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn push_normal(&mut self, text: impl Into<String>) {
        self.push(Segment::Normal(text.into()));
    }

    pub fn push_pre(&mut self, text: impl Into<String>) {
        self.push(Segment::Pre(text.into()));
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Decodes a marked line body.
    ///
    /// Within a run of consecutive markers each pair is one literal marker
    /// and an odd marker left over ends the current segment. A body without
    /// markers is a single normal segment.
    pub fn from_marked(marked: &str) -> Self {
        if !marked.contains(PRE_MARKER) {
            return Self {
                segments: vec![Segment::Normal(marked.to_string())],
            };
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut pre = false;
        let mut chars = marked.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != PRE_MARKER {
                current.push(ch);
                continue;
            }
            if chars.next_if_eq(&PRE_MARKER).is_some() {
                current.push(PRE_MARKER);
                continue;
            }
            let text = std::mem::take(&mut current);
            segments.push(if pre {
                Segment::Pre(text)
            } else {
                Segment::Normal(text)
            });
            pre = !pre;
        }
        segments.push(if pre {
            Segment::Pre(current)
        } else {
            Segment::Normal(current)
        });

        Self { segments }
    }

    /// Encodes the content in the marker wire format.
    ///
    /// The format can only express alternating segments, so empty segments
    /// are dropped and adjacent segments of the same mode are joined with a
    /// space, which renders identically. A segment may not start with a
    /// literal marker right after a boundary; such a marker is read back as
    /// belonging to the previous segment.
    pub fn to_marked(&self) -> String {
        let mut out = String::new();
        let mut pre = false;
        let mut started = false;
        for segment in self.segments.iter().filter(|s| !s.text().is_empty()) {
            let is_pre = segment.white_space().is_pre();
            if started && is_pre == pre {
                out.push(' ');
            } else if is_pre != pre {
                out.push(PRE_MARKER);
                pre = is_pre;
            }
            started = true;
            for ch in segment.text().chars() {
                out.push(ch);
                if ch == PRE_MARKER {
                    out.push(PRE_MARKER);
                }
            }
        }
        out
    }

    /// Renders the body, indenting preformatted continuation lines by
    /// `padding`.
    ///
    /// Empty segments of either mode contribute nothing, so a body never
    /// starts with a separating space or holds two in a row.
    pub fn render(&self, padding: usize) -> String {
        let mut pieces: Vec<String> = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Normal(text) => pieces.extend(words(text).map(str::to_string)),
                Segment::Pre(text) if text.is_empty() => {}
                Segment::Pre(text) => pieces.push(indent_continuations(text, padding)),
            }
        }
        pieces.join(" ")
    }
}

/// One physical output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// Empty lines before the line.
    pub margin_before: usize,
    /// Empty lines after the line.
    pub margin_after: usize,
    pub prefix: String,
    pub suffix: String,
    pub content: LineContent,
    /// Not applied yet.
    pub align: HorizontalAlignment,
    /// Total width in characters. Not applied yet.
    pub width: Option<usize>,
    list_bullet: String,
    padding: usize,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a line indented by `padding` columns whose last columns hold
    /// `list_bullet`.
    pub fn indented(padding: usize, list_bullet: impl Into<String>) -> Result<Self, LineError> {
        let mut line = Self::new();
        line.set_indent(padding, list_bullet)?;
        Ok(line)
    }

    pub fn set_indent(
        &mut self,
        padding: usize,
        list_bullet: impl Into<String>,
    ) -> Result<(), LineError> {
        let list_bullet = list_bullet.into();
        check_bullet(padding, &list_bullet)?;
        self.padding = padding;
        self.list_bullet = list_bullet;
        Ok(())
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn list_bullet(&self) -> &str {
        &self.list_bullet
    }

    pub fn get_text(&self) -> String {
        // set_indent guarantees the bullet fits into the padding
        let indent = self.padding - self.list_bullet.chars().count();
        let body = self.content.render(self.padding);

        let mut out = String::with_capacity(
            self.margin_before
                + self.padding
                + self.prefix.len()
                + body.len()
                + self.suffix.len()
                + self.margin_after,
        );
        out.push_str(&"\n".repeat(self.margin_before));
        out.push_str(&" ".repeat(indent));
        out.push_str(&self.list_bullet);
        out.push_str(&self.prefix);
        out.push_str(&body);
        out.push_str(&self.suffix);
        out.push_str(&"\n".repeat(self.margin_after));
        out
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_text())
    }
}
