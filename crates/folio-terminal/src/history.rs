//! Command history with a recall cursor

/// Direction of a history recall
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recall {
    Up,
    Down,
}

/// Submitted lines, oldest first, plus the Up/Down cursor
///
/// The cursor ranges over `0..=len`; `len` means "past the newest entry",
/// which is where it sits after every submission.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor
    ///
    /// Blank lines and repeats of the newest entry are not stored.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() && self.entries.last().map(String::as_str) != Some(line) {
            self.entries.push(line.to_string());
        }
        self.cursor = self.entries.len();
    }

    /// Move the cursor and return the new input line
    ///
    /// `None` means the cursor is at a boundary and the input stays as is.
    /// Moving down from the newest entry returns an empty line.
    pub fn recall(&mut self, direction: Recall) -> Option<&str> {
        match direction {
            Recall::Up if self.cursor > 0 => {
                self.cursor -= 1;
            }
            Recall::Down if self.cursor + 1 < self.entries.len() => {
                self.cursor += 1;
            }
            Recall::Down if self.cursor + 1 == self.entries.len() => {
                self.cursor += 1;
                return Some("");
            }
            _ => return None,
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
