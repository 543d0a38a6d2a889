//! # Fragment Scripts
//!
//! A recorded sequence of the calls a tree walker makes while serializing a
//! document. Replaying a [`Script`] drives a [`Canvas`] and a [`Prefix`]
//! exactly like the walker would, which makes scripts handy as test fixtures
//! and as input for the command line renderer.
//!
//! In TOML a script is an array of `step` tables tagged by `op`:
//!
//! ```toml
//! [[step]]
//! op = "inline"
//! text = "Hello   world"
//!
//! [[step]]
//! op = "list_start"
//! bullet = "- "
//!
//! [[step]]
//! op = "line"
//! content = "first item"
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    canvas::Canvas,
    line::{LineContent, LineError},
    prefix::Prefix,
    style::WhiteSpace,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Step {step}: {source}")]
    Step {
        step: usize,
        #[source]
        source: LineError,
    },
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Inline text with the given whitespace policy.
    Inline {
        text: String,
        #[serde(default)]
        white_space: WhiteSpace,
    },
    /// Preformatted text starting a block of its own.
    Block { text: String },
    /// Preformatted block indented by the current list padding.
    Verbatim { text: String },
    /// Closes the open block.
    Flush,
    /// Enters a list level; without a bullet the configured one is used.
    ListStart {
        #[serde(default)]
        bullet: Option<String>,
    },
    ListEnd,
    /// A composed line written as its own block. `content` uses the marker
    /// wire format.
    Line {
        content: String,
        #[serde(default)]
        margin_before: usize,
        #[serde(default)]
        margin_after: usize,
        #[serde(default)]
        prefix: String,
        #[serde(default)]
        suffix: String,
    },
}

/// Settings that affect how a script is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Padding added by each list level.
    pub indent_width: usize,
    /// Bullet for list levels that don't name one.
    pub bullet: String,
    /// Decode HTML character references in the final text.
    pub decode_entities: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            bullet: "* ".to_string(),
            decode_entities: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Op>,
}

impl From<Vec<Op>> for Script {
    fn from(steps: Vec<Op>) -> Self {
        Self { steps }
    }
}

impl Script {
    /// Replays every step onto a fresh canvas and returns its text.
    pub fn render(&self, options: &RenderOptions) -> Result<String, ScriptError> {
        let mut canvas = Canvas::new();
        let mut prefix = Prefix::new();

        for (step, op) in self.steps.iter().enumerate() {
            log::debug!("step {step}: {op:?}");
            let at_step = |source| ScriptError::Step { step, source };
            match op {
                Op::Inline { text, white_space } => canvas.write_inline(white_space, text),
                Op::Block { text } => canvas.write_block(&WhiteSpace::Pre, text),
                Op::Verbatim { text } => {
                    canvas.write_verbatim(&WhiteSpace::Pre, text, prefix.current_padding())
                }
                Op::Flush => canvas.flush_inline(),
                Op::ListStart { bullet } => {
                    let bullet = bullet.as_deref().unwrap_or(&options.bullet);
                    prefix
                        .register_prefix(options.indent_width, bullet)
                        .map_err(at_step)?;
                }
                Op::ListEnd => prefix.remove_last_prefix(),
                Op::Line {
                    content,
                    margin_before,
                    margin_after,
                    prefix: line_prefix,
                    suffix,
                } => {
                    prefix.begin_block();
                    let mut line = prefix.line().map_err(at_step)?;
                    line.margin_before = *margin_before;
                    line.margin_after = *margin_after;
                    line.prefix = line_prefix.clone();
                    line.suffix = suffix.clone();
                    line.content = LineContent::from_marked(content);
                    canvas.write_block(&WhiteSpace::Pre, &line.get_text());
                }
            }
        }

        Ok(if options.decode_entities {
            canvas.get_text()
        } else {
            canvas.get_raw_text()
        })
    }
}
