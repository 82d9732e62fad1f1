//! Command history with a recall cursor.

use cyberdesk_types::input::Direction;

/// Append-only log of submitted lines.
///
/// The cursor ranges over `0..=len`; `len` is the fresh-line position, i.e.
/// nothing is being recalled. Every successful append moves the cursor back
/// to the fresh line.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines are ignored.
    ///
    /// Returns whether the line was recorded.
    pub fn append(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
        true
    }

    /// Move the recall cursor and return the text the input line should show.
    ///
    /// Returns `None` when there is nothing to recall. Moving newer past the
    /// last entry returns the empty fresh line. Moving older stops at the
    /// first entry.
    pub fn navigate(&mut self, direction: Direction) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        match direction {
            Direction::Older => {
                self.cursor = self.cursor.saturating_sub(1);
            },
            Direction::Newer => {
                self.cursor += 1;
                if self.cursor >= self.entries.len() {
                    self.cursor = self.entries.len();
                    return Some("");
                }
            },
        }
        Some(self.entries[self.cursor].as_str())
    }

    /// Current cursor position (`len()` means the fresh line).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor sits on the fresh line.
    pub fn is_fresh(&self) -> bool {
        self.cursor == self.entries.len()
    }

    /// Recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
