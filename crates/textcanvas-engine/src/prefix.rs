use crate::line::{Line, LineError, check_bullet};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    padding: usize,
    /// Bullet still waiting to be printed.
    bullet: Option<String>,
}

/// Horizontal paddings and bullets of the nested elements enclosing the
/// current block.
///
/// Each nesting level adds padding. A level may carry a bullet, which is
/// printed right-aligned in the padding on the first line of the next block
/// and then consumed; later lines only get the padding.
#[derive(Debug, Clone, Default)]
pub struct Prefix {
    entries: Vec<Entry>,
    current_padding: usize,
    /// Entry index and text of the most recently printed bullet.
    last_used_bullet: Option<(usize, String)>,
    consumed: bool,
}

impl Prefix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters a nesting level adding `padding` columns and an optional bullet.
    pub fn register_prefix(&mut self, padding: usize, bullet: &str) -> Result<(), LineError> {
        let current_padding = self.current_padding + padding;
        check_bullet(current_padding, bullet)?;
        self.current_padding = current_padding;
        self.entries.push(Entry {
            padding,
            bullet: (!bullet.is_empty()).then(|| bullet.to_string()),
        });
        self.consumed = false;
        Ok(())
    }

    /// Leaves the innermost nesting level, discarding its unprinted bullet.
    pub fn remove_last_prefix(&mut self) {
        if let Some(entry) = self.entries.pop() {
            self.current_padding -= entry.padding;
        }
        if self
            .last_used_bullet
            .as_ref()
            .is_some_and(|(idx, _)| *idx >= self.entries.len())
        {
            self.last_used_bullet = None;
        }
        self.consumed = false;
    }

    /// Starts a new block: its first line may print a pending bullet again.
    pub fn begin_block(&mut self) {
        self.consumed = false;
    }

    /// Puts the last printed bullet back so it is printed again.
    pub fn restore(&mut self) {
        if let Some((idx, bullet)) = self.last_used_bullet.take()
            && let Some(entry) = self.entries.get_mut(idx)
        {
            entry.bullet = Some(bullet);
        }
    }

    pub fn current_padding(&self) -> usize {
        self.current_padding
    }

    /// Padding for lines that don't start a block.
    pub fn rest(&self) -> String {
        " ".repeat(self.current_padding)
    }

    /// The prefix of the next line: the oldest pending bullet, right-aligned
    /// in the padding, on the first line of a block; plain padding otherwise.
    pub fn next_prefix(&mut self) -> String {
        match self.take_bullet() {
            Some(bullet) => {
                let indent = self.current_padding - bullet.chars().count();
                format!("{}{bullet}", " ".repeat(indent))
            }
            None => self.rest(),
        }
    }

    /// A line indented like [`Prefix::next_prefix`] would indent it.
    pub fn line(&mut self) -> Result<Line, LineError> {
        let bullet = self.take_bullet().unwrap_or_default();
        Line::indented(self.current_padding, bullet)
    }

    fn take_bullet(&mut self) -> Option<String> {
        if self.consumed {
            return None;
        }
        let (idx, bullet) = self
            .entries
            .iter_mut()
            .enumerate()
            .find_map(|(idx, entry)| entry.bullet.take().map(|b| (idx, b)))?;
        self.consumed = true;
        self.last_used_bullet = Some((idx, bullet.clone()));
        Some(bullet)
    }
}
