//! # textcanvas-engine
//!
//! Renders a stream of styled text fragments into flat, human readable text.
//!
//! ## Architecture Overview
//!
//! ```text
//! collaborator ──write_inline/write_block──▶ Canvas ──get_text──▶ String
//!              ──segments + decoration────▶ Line   ──get_text──▶ String
//! ```
//!
//! - **`whitespace`**: the tagged [`Segment`] runs both renderers consume,
//!   the canvas collapsing state machine and the word splitting lines use
//! - **`canvas`**: accumulates fragments into blocks and normalizes them
//! - **`entities`**: HTML5 character reference decoding for the final text
//! - **`line`**: composes one physical output line from margins, padding,
//!   bullet, prefix/suffix and mixed normal/preformatted content
//! - **`prefix`**: the padding and bullet stack of nested list-like elements
//! - **`style`**: the whitespace policy, its CSS keywords and the
//!   [`StyleContext`] seam callers implement
//! - **`script`**: a serializable fragment stream replayed against a canvas
//!
//! ## Whitespace Rules
//!
//! Normal text has every run of whitespace collapsed to a single space and
//! never starts a block with a space. Preformatted text is copied verbatim.

pub mod canvas;
pub mod entities;
pub mod line;
pub mod prefix;
pub mod script;
pub mod style;
pub mod whitespace;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use canvas::Canvas;
pub use line::{Line, LineContent, LineError, PRE_MARKER};
pub use prefix::Prefix;
pub use script::{Op, RenderOptions, Script, ScriptError};
pub use style::{HorizontalAlignment, StyleContext, StyleError, WhiteSpace};
pub use whitespace::{Collapser, Segment};
