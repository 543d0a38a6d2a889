//! # Block Canvas
//!
//! The drawing board a document is serialized onto. Fragments are collected
//! into an open block and only normalized when the block is flushed, so that
//! whitespace is collapsed across fragment boundaries exactly once.
//!
//! A `Canvas` is single-owner session state: create one per document, pass
//! it by `&mut` through the tree walk, and read the result with
//! [`Canvas::get_text`].

use crate::{
    entities,
    style::StyleContext,
    whitespace::{Segment, collapse, indent_continuations},
};

#[derive(Debug, Default, Clone)]
pub struct Canvas {
    /// Finished, normalized blocks. Never modified once pushed.
    blocks: Vec<String>,
    /// Fragments of the block currently being written.
    open_block: Vec<Segment>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the open block and starts a new one holding `text` verbatim.
    ///
    /// The new block stays open until the next write or flush, like any other
    /// fragment.
    pub fn write_block(&mut self, _style: &impl StyleContext, text: &str) {
        self.flush_inline();
        log::trace!("write_block: {text:?}");
        self.open_block.push(Segment::Pre(text.to_string()));
    }

    /// Appends `text` to the open block using the style's whitespace policy.
    pub fn write_inline(&mut self, style: &impl StyleContext, text: &str) {
        log::trace!("write_inline({:?}): {text:?}", style.white_space());
        self.open_block.push(Segment::new(text, style.white_space()));
    }

    /// Writes preformatted `text` as its own block, indenting every
    /// continuation line by `padding` spaces.
    pub fn write_verbatim(&mut self, style: &impl StyleContext, text: &str, padding: usize) {
        if text.is_empty() {
            return;
        }
        self.write_block(style, &indent_continuations(text, padding));
    }

    /// Normalizes and commits the open block. Does nothing when it is empty.
    pub fn flush_inline(&mut self) {
        if self.open_block.is_empty() {
            return;
        }
        let block = collapse(&self.open_block);
        log::debug!(
            "flushed {} fragment(s) into block {}: {block:?}",
            self.open_block.len(),
            self.blocks.len()
        );
        self.blocks.push(block);
        self.open_block.clear();
    }

    /// Finished blocks, in order. Does not include the open block.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// True when nothing has been written at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.open_block.is_empty()
    }

    /// Flushes and returns all blocks, each right-trimmed, joined by `\n`,
    /// without decoding character references.
    pub fn get_raw_text(&mut self) -> String {
        self.flush_inline();
        self.blocks
            .iter()
            .map(|block| block.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Flushes and returns the document text with HTML character references
    /// decoded once over the joined result.
    ///
    /// Safe to call repeatedly; each call only flushes what is pending.
    pub fn get_text(&mut self) -> String {
        let raw = self.get_raw_text();
        entities::unescape(&raw).into_owned()
    }
}
