// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! A minimal line-based text buffer with its own scrolling viewport.
//!
//! The buffer always holds at least one line. Columns are character indices,
//! not byte offsets, so multi-byte input never splits a code point.

use crate::scroll::{ScrollMetrics, ScrollRegion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    scroll_top: usize,
    viewport_height: usize,
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            scroll_top: 0,
            viewport_height: 0,
        }
    }
}

impl EditorBuffer {
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.set_text(text);
        buffer
    }

    /// Replaces the whole content and rewinds cursor and viewport.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_owned).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scroll_top = 0;
    }

    /// The full content, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor position as (row, character column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Records the height the buffer is drawn into. Layout calls this every
    /// frame before rendering; scrolling math depends on it.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.clamp_scroll();
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(index, _)| index)
            .unwrap_or(line.len())
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if self.scroll_top > max {
            self.scroll_top = max;
        }
    }

    fn scroll_to_cursor(&mut self) {
        if self.viewport_height == 0 {
            return;
        }
        if self.cursor_row < self.scroll_top {
            self.scroll_top = self.cursor_row;
        } else if self.cursor_row >= self.scroll_top + self.viewport_height {
            self.scroll_top = self.cursor_row + 1 - self.viewport_height;
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
        self.lines[self.cursor_row].insert(at, ch);
        self.cursor_col += 1;
        self.scroll_to_cursor();
    }

    pub fn insert_newline(&mut self) {
        let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
        let rest = self.lines[self.cursor_row].split_off(at);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
        self.scroll_to_cursor();
    }

    /// Deletes the character before the cursor, joining lines at column zero.
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
            self.lines[self.cursor_row].remove(at);
        } else if self.cursor_row > 0 {
            let line = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
            self.lines[self.cursor_row].push_str(&line);
        }
        self.clamp_scroll();
        self.scroll_to_cursor();
    }

    /// Deletes the character under the cursor, joining lines at end of line.
    pub fn delete(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            let at = Self::byte_index(&self.lines[self.cursor_row], self.cursor_col);
            self.lines[self.cursor_row].remove(at);
        } else if self.cursor_row + 1 < self.lines.len() {
            let line = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&line);
        }
        self.clamp_scroll();
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
        self.scroll_to_cursor();
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
        self.scroll_to_cursor();
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        } else {
            self.cursor_col = 0;
        }
        self.scroll_to_cursor();
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        } else {
            self.cursor_col = self.line_len(self.cursor_row);
        }
        self.scroll_to_cursor();
    }

    pub fn move_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_col = self.line_len(self.cursor_row);
    }

    pub fn page_up(&mut self) {
        let step = self.viewport_height.max(1);
        self.cursor_row = self.cursor_row.saturating_sub(step);
        self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        self.scroll_top = self.scroll_top.saturating_sub(step);
        self.scroll_to_cursor();
    }

    pub fn page_down(&mut self) {
        let step = self.viewport_height.max(1);
        self.cursor_row = (self.cursor_row + step).min(self.lines.len() - 1);
        self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        self.scroll_top = (self.scroll_top + step).min(self.max_scroll());
        self.scroll_to_cursor();
    }

    /// Scrolls the viewport without moving the cursor, as the mouse wheel
    /// does. `delta` is in lines, negative scrolls up.
    pub fn scroll_by(&mut self, delta: i64) {
        let top = self.scroll_top as i64 + delta;
        self.scroll_top = top.clamp(0, self.max_scroll() as i64) as usize;
    }
}

impl ScrollRegion for EditorBuffer {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(
            self.scroll_top as f64,
            self.lines.len() as f64,
            self.viewport_height as f64,
        )
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        let top = scroll_top.round().max(0.0) as usize;
        self.scroll_top = top.min(self.max_scroll());
    }
}
